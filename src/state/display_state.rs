//! Display state structure and management

use std::fmt;

use crate::api::ElapsedResponse;
use super::Controls;

/// Elapsed time shown before the first successful poll
pub const INITIAL_ELAPSED: &str = "00:00:00";

/// Last known server-side timer state, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// `HH:MM:SS` exactly as the service formatted it
    pub elapsed: String,
    pub running: bool,
}

/// Client-observed phase of the remote timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Stopped,
    Running,
}

impl DisplayState {
    /// Create the session-start state: stopped at zero
    pub fn new() -> Self {
        Self {
            elapsed: INITIAL_ELAPSED.to_string(),
            running: false,
        }
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else {
            TimerPhase::Stopped
        }
    }

    /// Which controls the UI should offer for this state
    pub fn controls(&self) -> Controls {
        Controls::for_running(self.running)
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ElapsedResponse> for DisplayState {
    fn from(response: ElapsedResponse) -> Self {
        Self {
            elapsed: response.elapsed_formatted,
            running: response.is_running,
        }
    }
}

impl TimerPhase {
    /// Status text shown next to the elapsed time
    pub fn label(&self) -> &'static str {
        match self {
            TimerPhase::Stopped => "Paused",
            TimerPhase::Running => "Running",
        }
    }
}

impl fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
