//! Terminal front-end module
//! 
//! This module renders the display state and maps typed commands onto
//! command dispatch.

pub mod input;
pub mod oneshot;
pub mod render;
pub mod terminal;

// Re-export main functions
pub use input::{parse_input, UserInput};
pub use oneshot::run_once;
pub use render::status_line;
pub use terminal::{run_loop, run_terminal};
