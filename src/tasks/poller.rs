//! Display state poller background task

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::{oneshot, watch},
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};
use tracing::{debug, error, info, warn};

use crate::{
    api::{ClientError, TimerClient},
    state::DisplayState,
};

/// Query the service once and replace the display state on success.
///
/// Failures are logged and leave the display state untouched.
pub async fn poll_once(
    client: &TimerClient,
    display: &watch::Sender<DisplayState>,
) -> Result<DisplayState, ClientError> {
    match client.fetch_elapsed().await {
        Ok(response) => {
            let state = DisplayState::from(response);
            display.send_if_modified(|current| {
                if *current == state {
                    return false;
                }
                *current = state.clone();
                true
            });
            Ok(state)
        }
        Err(e) if e.is_transient() => {
            warn!(code = e.error_code(), "Poll failed: {}", e);
            Err(e)
        }
        Err(e) => {
            error!(code = e.error_code(), "Poll failed: {}", e);
            Err(e)
        }
    }
}

/// Handle to a registered poller. Dropping it aborts the task.
#[derive(Debug)]
pub struct PollerHandle {
    shutdown_tx: Option<oneshot::Sender<()>>,
    join: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Deregister the poller and wait for its loop to exit
    pub async fn stop(mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            // The task may already be gone; nothing to do then
            let _ = shutdown_tx.send(());
        }
        if let Some(join) = self.join.take() {
            if let Err(e) = join.await {
                warn!("Poller task ended abnormally: {}", e);
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.join.as_ref().map_or(true, |join| join.is_finished())
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        if let Some(join) = self.join.take() {
            join.abort();
        }
    }
}

/// Spawn the recurring poll task on the current runtime
pub fn spawn_poller(
    client: TimerClient,
    display: Arc<watch::Sender<DisplayState>>,
    period: Duration,
) -> PollerHandle {
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = tokio::spawn(async move {
        poller_task(client, &display, period, shutdown_rx).await;
    });

    PollerHandle {
        shutdown_tx: Some(shutdown_tx),
        join: Some(join),
    }
}

/// Poll on a fixed cadence until told to stop. The first tick fires immediately.
async fn poller_task(
    client: TimerClient,
    display: &watch::Sender<DisplayState>,
    period: Duration,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    info!("Starting poller task ({}ms interval)", period.as_millis());

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    'poll: loop {
        tokio::select! {
            biased;

            _ = &mut shutdown_rx => {
                info!("Poller deregistered");
                break 'poll;
            }

            _ = ticker.tick() => {
                // A stuck request must not hold up teardown
                tokio::select! {
                    biased;

                    _ = &mut shutdown_rx => {
                        info!("Poller deregistered during an in-flight poll");
                        break 'poll;
                    }

                    result = poll_once(&client, display) => {
                        // Next tick is the retry
                        if result.is_err() {
                            debug!("Keeping previous display state until next tick");
                        }
                    }
                }
            }
        }
    }
}
