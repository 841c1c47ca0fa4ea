/// Daily study goal in seconds (2 hours)
pub const GOAL_SECONDS: u64 = 7200;

/// Count-up study timer driven by an external one second tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElapsedTimeTracker {
    accumulated_seconds: u64,
    running: bool,
    goal_seconds: u64,
}

impl Default for ElapsedTimeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ElapsedTimeTracker {
    pub fn new() -> Self {
        Self {
            accumulated_seconds: 0,
            running: false,
            goal_seconds: GOAL_SECONDS,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Flip between running and paused, returning the new running state
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    /// Advance by one second while running. Returns the accumulated total.
    pub fn tick(&mut self) -> u64 {
        if self.running {
            self.accumulated_seconds = self.accumulated_seconds.saturating_add(1);
        }
        self.accumulated_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn accumulated_seconds(&self) -> u64 {
        self.accumulated_seconds
    }

    pub fn goal_seconds(&self) -> u64 {
        self.goal_seconds
    }

    /// Percentage of the goal reached, clamped to [0, 100]
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.accumulated_seconds, self.goal_seconds)
    }

    pub fn formatted_clock(&self) -> String {
        format_clock(self.accumulated_seconds)
    }
}

pub fn progress_percent(seconds: u64, goal_seconds: u64) -> f64 {
    if goal_seconds == 0 {
        return 100.0;
    }
    (seconds as f64 / goal_seconds as f64 * 100.0).clamp(0.0, 100.0)
}

/// Format seconds as `HH:MM:SS`; hours keep growing past 99
pub fn format_clock(total_secs: u64) -> String {
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("{h:02}:{m:02}:{s:02}")
}
