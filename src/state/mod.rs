//! State management module
//! 
//! This module contains the display state, the control enablement derived
//! from it and the session object that owns both.

pub mod controls;
pub mod display_state;
pub mod session;

// Re-export main types
pub use controls::Controls;
pub use display_state::{DisplayState, TimerPhase, INITIAL_ELAPSED};
pub use session::Session;
