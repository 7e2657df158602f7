//! Command dispatch module

pub mod dispatcher;

pub use dispatcher::{dispatch, DispatchOutcome};
