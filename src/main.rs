use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdin, Write};

use study_together::{
    app_dirs::AppDirs,
    clock::{LabelSource, LocalClock},
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    runtime::{
        action_for, Action, CrosstermEventSource, DashEvent, DashEventSource, FixedTicker, Runner,
        Ticker,
    },
    session::{SessionConfig, StudySession},
    time_series::SEED_POINTS,
};

/// terminal study-room dashboard with a goal timer, rolling study chart, and group ranking
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A study-together dashboard for the terminal: a count-up timer with progress toward a two hour goal, a rolling chart of your study minutes, and a simulated group ranking."
)]
pub struct Cli {
    /// milliseconds between dashboard ticks
    #[clap(short = 't', long)]
    tick_ms: Option<u64>,

    /// seed for the simulated group members
    #[clap(long)]
    seed: Option<u64>,

    /// name shown for you in the group
    #[clap(short = 'n', long)]
    name: Option<String>,

    /// write the effective settings to the config file
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Overlay command line flags on the stored config
    fn apply(&self, mut cfg: Config) -> Config {
        if let Some(tick_ms) = self.tick_ms {
            cfg.tick_ms = tick_ms;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if let Some(name) = &self.name {
            cfg.display_name = name.clone();
        }
        cfg
    }
}

fn session_config(cfg: &Config) -> SessionConfig {
    SessionConfig {
        display_name: cfg.display_name.clone(),
        seed: cfg.seed.unwrap_or_else(rand::random),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = AppDirs::log_path() {
        if let Err(e) = logging::init(&path) {
            eprintln!("logging disabled: {e:#}");
        }
    }

    let store = FileConfigStore::new();
    let cfg = cli.apply(store.load());
    if cli.save_config {
        store
            .save(&cfg)
            .with_context(|| format!("failed to save config to {}", store.path().display()))?;
    }

    let session_cfg = session_config(&cfg);
    log::info!(
        "starting dashboard: tick {}ms, seed {}",
        cfg.tick_ms,
        session_cfg.seed
    );
    let clock = LocalClock;
    let mut session = StudySession::new(&session_cfg, clock.seed_labels(SEED_POINTS));

    enable_raw_mode().context("failed to enable raw mode")?;
    let result = with_terminal_restored(&mut io::stdout(), || {
        run_dashboard(&mut session, cfg.tick_ms, clock)
    });

    log::info!("session ended at {}", session.tracker.formatted_clock());
    result
}

fn run_dashboard(session: &mut StudySession, tick_ms: u64, clock: LocalClock) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::from_millis(tick_ms),
    );
    start_tui(&mut terminal, session, &runner, clock)
}

/// Run `body`, then leave raw mode and the alternate screen whether or not it succeeded
fn with_terminal_restored<W, F>(out: &mut W, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce() -> Result<()>,
{
    let result = body();
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);

    result?;
    raw.context("failed to disable raw mode")?;
    screen.context("failed to leave alternate screen")?;
    Ok(())
}

fn start_tui<B, E, T, L>(
    terminal: &mut Terminal<B>,
    session: &mut StudySession,
    runner: &Runner<E, T>,
    mut labels: L,
) -> Result<()>
where
    B: Backend,
    E: DashEventSource,
    T: Ticker,
    L: LabelSource,
{
    terminal.draw(|f| f.render_widget(&*session, f.area()))?;

    loop {
        match runner.step() {
            DashEvent::Tick => {
                session.on_tick(&labels.now_label());
            }
            DashEvent::Resize => {}
            DashEvent::Key(key) => match action_for(key) {
                Action::ToggleTimer => {
                    session.toggle_timer();
                }
                Action::Quit => break,
                Action::Ignore => continue,
            },
        }
        terminal.draw(|f| f.render_widget(&*session, f.area()))?;
    }

    Ok(())
}
