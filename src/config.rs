//! Configuration and CLI argument handling

use std::time::Duration;
use clap::{Parser, Subcommand};

use crate::api::Command;

/// Default address of the timer service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "pomodoro-client")]
#[command(about = "Watch and drive a remote Pomodoro timer from the terminal")]
#[command(version)]
pub struct Config {
    /// Base address of the timer service
    #[arg(long, env = "POMODORO_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Poll interval in milliseconds
    #[arg(long, default_value = "1000", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,

    /// Per-request timeout in milliseconds (none by default)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// What the client should do once connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Mode {
    /// Show the live timer and accept commands on stdin (default)
    Watch,
    /// Print the current timer state once
    Status,
    /// Start the timer and print the refreshed state
    Start,
    /// Pause the timer and print the refreshed state
    Pause,
    /// Reset the timer and print the refreshed state
    Reset,
}

impl Mode {
    /// The timer command a one-shot mode sends, if any
    pub fn command(&self) -> Option<Command> {
        match self {
            Mode::Start => Some(Command::Start),
            Mode::Pause => Some(Command::Pause),
            Mode::Reset => Some(Command::Reset),
            Mode::Watch | Mode::Status => None,
        }
    }
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or(Mode::Watch)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
