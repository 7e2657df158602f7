//! Command dispatch: send a command, then refresh right away

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{
    api::{ClientError, Command, TimerClient},
    state::DisplayState,
    tasks::poll_once,
};

/// What happened after a command was accepted by the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The follow-up query succeeded and the display state now reflects it
    Refreshed(DisplayState),
    /// The follow-up query failed; the next scheduled poll will correct the display
    RefreshDeferred,
}

/// Send `command` and then run one poll so the display does not wait for the next tick.
///
/// A failed command skips the refresh and leaves the display state alone.
pub async fn dispatch(
    client: &TimerClient,
    display: &watch::Sender<DisplayState>,
    command: Command,
) -> Result<DispatchOutcome, ClientError> {
    info!("Dispatching {} command", command);

    if let Err(e) = client.send_command(command).await {
        warn!(code = e.error_code(), "{} command failed: {}", command, e);
        return Err(e);
    }

    match poll_once(client, display).await {
        Ok(state) => Ok(DispatchOutcome::Refreshed(state)),
        Err(_) => {
            debug!("Refresh after {} deferred to next tick", command);
            Ok(DispatchOutcome::RefreshDeferred)
        }
    }
}
