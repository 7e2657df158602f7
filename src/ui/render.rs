//! Status line rendering

use crate::{
    api::Command,
    state::{Controls, DisplayState},
};

pub const TITLE: &str = "Pomodoro Timer";

/// Render the display state as a single status line
pub fn status_line(state: &DisplayState) -> String {
    format!(
        "{}  {}  Status: {}  {}",
        TITLE,
        state.elapsed,
        state.phase(),
        control_bar(&state.controls())
    )
}

/// `[start]` for an enabled control, `-start-` for a disabled one
pub fn control_bar(controls: &Controls) -> String {
    Command::ALL
        .iter()
        .map(|command| {
            if controls.is_enabled(*command) {
                format!("[{}]", command)
            } else {
                format!("-{}-", command)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Notice printed when the user asks for a disabled control
pub fn disabled_notice(command: Command, state: &DisplayState) -> String {
    format!("{} is not available while the timer is {}", command, state.phase().label().to_lowercase())
}
