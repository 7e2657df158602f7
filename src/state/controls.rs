//! Control enablement derived from the display state

use crate::api::Command;

/// Which of the three controls are currently enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub start: bool,
    pub pause: bool,
    pub reset: bool,
}

impl Controls {
    /// Start only while stopped, pause only while running, reset always
    pub fn for_running(running: bool) -> Self {
        Self {
            start: !running,
            pause: running,
            reset: true,
        }
    }

    pub fn is_enabled(&self, command: Command) -> bool {
        match command {
            Command::Start => self.start,
            Command::Pause => self.pause,
            Command::Reset => self.reset,
        }
    }
}
