use crate::{
    members::{self, seed_roster, Member, ME_ID},
    simulation::PeerSimulator,
    time_series::{RollingSeriesBuffer, TickKind, SERIES_CAPACITY},
    timer::ElapsedTimeTracker,
};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub display_name: String,
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            display_name: "Me".to_string(),
            seed: 0,
        }
    }
}

/// Result of one dashboard tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub seconds: u64,
    pub minutes: f64,
    pub chart: TickKind,
    pub peers_advanced: usize,
}

/// Everything the dashboard shows, advanced one tick at a time
#[derive(Debug, Clone)]
pub struct StudySession {
    pub tracker: ElapsedTimeTracker,
    pub series: RollingSeriesBuffer,
    pub members: Vec<Member>,
    simulator: PeerSimulator,
}

impl StudySession {
    pub fn new<I, S>(config: &SessionConfig, seed_labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tracker: ElapsedTimeTracker::new(),
            series: RollingSeriesBuffer::seeded(seed_labels, SERIES_CAPACITY),
            members: seed_roster(&config.display_name),
            simulator: PeerSimulator::new(config.seed),
        }
    }

    pub fn toggle_timer(&mut self) -> bool {
        let running = self.tracker.toggle();
        log::info!(
            "timer {} at {}",
            if running { "started" } else { "stopped" },
            self.tracker.formatted_clock()
        );
        running
    }

    pub fn my_seconds(&self) -> u64 {
        members::find(&self.members, ME_ID)
            .map(|m| m.study_time)
            .unwrap_or_default()
    }

    /// Advance timer, peers and chart under the bucket `label`
    pub fn on_tick(&mut self, label: &str) -> TickOutcome {
        let seconds = self.tracker.tick();
        if let Some(me) = members::find_mut(&mut self.members, ME_ID) {
            me.study_time = seconds;
        }

        let peers_advanced = self.simulator.advance(&mut self.members, ME_ID);

        let minutes = to_minutes(seconds);
        let chart = self.series.push(label, minutes);
        if chart == TickKind::Appended {
            log::debug!("chart bucket {label} opened at {minutes} min");
        }

        TickOutcome {
            seconds,
            minutes,
            chart,
            peers_advanced,
        }
    }
}

/// Seconds to minutes rounded to two decimals
pub fn to_minutes(seconds: u64) -> f64 {
    (seconds as f64 / 60.0 * 100.0).round() / 100.0
}
