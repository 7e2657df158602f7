//! One-shot status and command runs

use std::io::Write;
use tracing::{error, warn};

use crate::{
    api::Command,
    dispatch::DispatchOutcome,
    state::Session,
};
use super::render::status_line;

pub const EXIT_OK: i32 = 0;
pub const EXIT_REQUEST_FAILED: i32 = 1;

/// Query once (`command` is `None`) or send one command and refresh, printing
/// the resulting state to `out`. Returns the process exit code.
pub async fn run_once<W: Write>(session: &Session, command: Option<Command>, out: &mut W) -> i32 {
    let state = match command {
        None => match session.refresh().await {
            Ok(state) => state,
            Err(e) => {
                error!("Could not read timer state: {}", e);
                return EXIT_REQUEST_FAILED;
            }
        },
        Some(command) => match session.dispatch(command).await {
            Ok(DispatchOutcome::Refreshed(state)) => state,
            Ok(DispatchOutcome::RefreshDeferred) => {
                warn!("{} accepted but the refreshed state could not be read", command);
                return EXIT_OK;
            }
            Err(e) => {
                error!("{} failed: {}", command, e);
                return EXIT_REQUEST_FAILED;
            }
        },
    };

    if let Err(e) = writeln!(out, "{}", status_line(&state)) {
        warn!("Failed to print timer state: {}", e);
    }
    EXIT_OK
}
