//! Timer commands understood by the remote service

use std::fmt;

/// One of the three fire-and-forget timer commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Pause,
    Reset,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::Start, Command::Pause, Command::Reset];

    /// Route the command is POSTed to
    pub fn path(&self) -> &'static str {
        match self {
            Command::Start => "/timer/start",
            Command::Pause => "/timer/pause",
            Command::Reset => "/timer/reset",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Pause => "pause",
            Command::Reset => "reset",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_paths() {
        assert_eq!(Command::Start.path(), "/timer/start");
        assert_eq!(Command::Pause.path(), "/timer/pause");
        assert_eq!(Command::Reset.path(), "/timer/reset");
    }

    #[test]
    fn test_display_uses_name() {
        let names: Vec<String> = Command::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["start", "pause", "reset"]);
    }
}
