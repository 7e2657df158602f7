//! Keyboard input parsing

use crate::api::Command;

/// One line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Command(Command),
    Quit,
    Help,
    Empty,
    Unknown(String),
}

pub const HELP: &str = "commands: s/start, p/pause, r/reset, h/help, q/quit";

pub fn parse_input(line: &str) -> UserInput {
    let word = line.trim().to_lowercase();
    match word.as_str() {
        "" => UserInput::Empty,
        "s" | "start" => UserInput::Command(Command::Start),
        "p" | "pause" => UserInput::Command(Command::Pause),
        "r" | "reset" => UserInput::Command(Command::Reset),
        "q" | "quit" | "exit" => UserInput::Quit,
        "h" | "help" | "?" => UserInput::Help,
        _ => UserInput::Unknown(word),
    }
}
