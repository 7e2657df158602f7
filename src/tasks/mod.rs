//! Background tasks module
//! 
//! This module contains the recurring poll task that keeps the display state
//! in step with the remote timer.

pub mod poller;

// Re-export main functions
pub use poller::{poll_once, spawn_poller, PollerHandle};
