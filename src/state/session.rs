//! UI session: owns the display state, the client and the poller

use std::{sync::Arc, time::Duration};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::{
    api::{ClientError, Command, TimerClient},
    dispatch::{dispatch, DispatchOutcome},
    tasks::{poll_once, spawn_poller, PollerHandle},
};
use super::{Controls, DisplayState};

/// One active UI instance, from mount to unmount.
///
/// The display state lives in a watch channel so the renderer is woken on
/// every change. Only query responses ever write to it.
#[derive(Debug)]
pub struct Session {
    client: TimerClient,
    display: Arc<watch::Sender<DisplayState>>,
    poll_interval: Duration,
    poller: Option<PollerHandle>,
}

impl Session {
    /// Create a session with the default display state and no poller registered
    pub fn new(client: TimerClient, poll_interval: Duration) -> Self {
        let (display, _) = watch::channel(DisplayState::new());

        Self {
            client,
            display: Arc::new(display),
            poll_interval,
            poller: None,
        }
    }

    /// Register the recurring poll. Does nothing if one is already registered.
    pub fn start_polling(&mut self) {
        if self.is_polling() {
            return;
        }
        self.poller = Some(spawn_poller(
            self.client.clone(),
            Arc::clone(&self.display),
            self.poll_interval,
        ));
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(|poller| !poller.is_finished())
    }

    /// Reader that is notified whenever the display state changes
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.display.subscribe()
    }

    /// Snapshot of the current display state
    pub fn display_state(&self) -> DisplayState {
        self.display.borrow().clone()
    }

    pub fn controls(&self) -> Controls {
        self.display.borrow().controls()
    }

    /// Run one query outside the schedule
    pub async fn refresh(&self) -> Result<DisplayState, ClientError> {
        poll_once(&self.client, &self.display).await
    }

    /// Send a command and refresh. Enablement is the caller's concern.
    pub async fn dispatch(&self, command: Command) -> Result<DispatchOutcome, ClientError> {
        dispatch(&self.client, &self.display, command).await
    }

    pub async fn start(&self) -> Result<DispatchOutcome, ClientError> {
        self.dispatch(Command::Start).await
    }

    pub async fn pause(&self) -> Result<DispatchOutcome, ClientError> {
        self.dispatch(Command::Pause).await
    }

    pub async fn reset(&self) -> Result<DispatchOutcome, ClientError> {
        self.dispatch(Command::Reset).await
    }

    /// Check whether the service answers at all. Never fatal.
    pub async fn probe(&self) -> bool {
        match self.client.probe().await {
            Ok(()) => {
                info!("Timer service reachable at {}", self.client.base_url());
                true
            }
            Err(e) => {
                warn!("Timer service not reachable yet: {}", e);
                false
            }
        }
    }

    /// End the session: deregister the poller and wait for it to exit
    pub async fn shutdown(mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop().await;
        }
        info!("Session ended at {}", self.display_state().elapsed);
    }
}
