//! Remote timer service API module
//! 
//! This module contains the HTTP client, the wire structures and the error
//! taxonomy for talking to the timer service.

pub mod client;
pub mod command;
pub mod errors;
pub mod responses;

// Re-export main types
pub use client::TimerClient;
pub use command::Command;
pub use errors::ClientError;
pub use responses::{CommandAck, ElapsedResponse};
