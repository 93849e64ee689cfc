//! Navigation progress model
//!
//! Client-side navigation gives no network-style loading cue, so the
//! progress bar is a timer-driven approximation: it starts at 15%, climbs
//! through staged bumps, and always completes within a ceiling even if no
//! route change is ever observed. The model is a pure function of elapsed
//! time since `start`, which keeps it deterministic under test.

use std::time::Duration;

/// Staged progress bumps: (delay since start, percent)
const STAGES: [(Duration, u8); 5] = [
    (Duration::from_millis(0), 15),
    (Duration::from_millis(300), 35),
    (Duration::from_millis(700), 55),
    (Duration::from_millis(1200), 75),
    (Duration::from_millis(1800), 90),
];

/// Forced-completion ceiling when no route change is observed
const COMPLETION_CEILING: Duration = Duration::from_millis(2500);

/// How long the bar stays at 100% before hiding
const HIDE_DELAY: Duration = Duration::from_millis(300);

/// State of the navigation progress bar
#[derive(Debug, Clone, Default)]
pub struct NavigationProgress {
    started: bool,
    /// Elapsed time at which the route was observed to change
    route_changed_at: Option<Duration>,
}

impl NavigationProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin tracking a navigation; called on link click
    pub fn start(&mut self) {
        self.started = true;
        self.route_changed_at = None;
    }

    /// Record that the route actually changed at `elapsed` since start
    ///
    /// Changes observed after the ceiling are ignored; the bar has already
    /// force-completed by then.
    pub fn route_changed(&mut self, elapsed: Duration) {
        if self.started && elapsed < COMPLETION_CEILING && self.route_changed_at.is_none() {
            self.route_changed_at = Some(elapsed);
        }
    }

    /// Elapsed time at which the bar reaches 100%
    fn completed_at(&self) -> Duration {
        self.route_changed_at.unwrap_or(COMPLETION_CEILING)
    }

    /// Progress percent at `elapsed`, or `None` when the bar is hidden
    pub fn percent_at(&self, elapsed: Duration) -> Option<u8> {
        if !self.started {
            return None;
        }

        let completed_at = self.completed_at();
        if elapsed >= completed_at + HIDE_DELAY {
            return None;
        }
        if elapsed >= completed_at {
            return Some(100);
        }

        let mut percent = 0;
        for (delay, value) in STAGES {
            if elapsed >= delay {
                percent = value;
            }
        }
        Some(percent)
    }

    /// Whether the bar is on screen at `elapsed`
    pub fn is_visible(&self, elapsed: Duration) -> bool {
        self.percent_at(elapsed).is_some()
    }

    /// Reset after the bar has hidden
    pub fn reset(&mut self) {
        self.started = false;
        self.route_changed_at = None;
    }
}
