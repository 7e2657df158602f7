//! Pomodoro Client - mirrors and drives a remote Pomodoro timer
//! 
//! This library keeps a local display state in step with a remote timer
//! service by polling it, and dispatches start/pause/reset commands.

pub mod config;
pub mod api;
pub mod state;
pub mod tasks;
pub mod dispatch;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use api::{ClientError, Command, TimerClient};
pub use state::{Controls, DisplayState, Session};
pub use dispatch::DispatchOutcome;
pub use utils::signals::shutdown_signal;
