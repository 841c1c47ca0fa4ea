use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Default dashboard tick period
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Unified event type consumed by the dashboard loop
#[derive(Clone, Debug)]
pub enum DashEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// What a key press asks the dashboard to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleTimer,
    Quit,
    Ignore,
}

pub fn action_for(key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Ignore;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Enter => Action::ToggleTimer,
        _ => Action::Ignore,
    }
}

/// Source of terminal events (keyboard, resize)
pub trait DashEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<DashEvent, RecvTimeoutError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<DashEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let evt = match event::read() {
                Ok(CtEvent::Key(key)) => DashEvent::Key(key),
                Ok(CtEvent::Resize(_, _)) => DashEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    log::warn!("terminal event reader stopped: {e}");
                    break;
                }
            };
            if tx.send(evt).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DashEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<DashEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms.max(1)))
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::from_millis(DEFAULT_TICK_MS)
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Channel-fed event source for tests
pub struct TestEventSource {
    rx: Receiver<DashEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<DashEvent>) -> Self {
        Self { rx }
    }
}

impl DashEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<DashEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that yields the next event, or a Tick once the period elapses.
///
/// Key presses do not push the next tick back: the deadline is kept across
/// calls so the timer advances at the ticker's period while the user types.
pub struct Runner<E: DashEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
    next_tick: std::cell::Cell<Option<Instant>>,
}

impl<E: DashEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
            next_tick: std::cell::Cell::new(None),
        }
    }

    pub fn step(&self) -> DashEvent {
        let now = Instant::now();
        let deadline = self
            .next_tick
            .get()
            .unwrap_or_else(|| now + self.ticker.interval());
        let timeout = deadline.saturating_duration_since(now);

        match self.event_source.recv_timeout(timeout) {
            Ok(ev) => {
                self.next_tick.set(Some(deadline));
                ev
            }
            Err(RecvTimeoutError::Timeout) => {
                self.next_tick.set(Some(deadline + self.ticker.interval()));
                DashEvent::Tick
            }
            Err(RecvTimeoutError::Disconnected) => {
                // No sender left to wake us; hold the tick to its deadline
                std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
                self.next_tick.set(Some(deadline + self.ticker.interval()));
                DashEvent::Tick
            }
        }
    }
}
