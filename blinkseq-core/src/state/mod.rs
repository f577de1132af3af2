//! Control state of the button/LED loop
//!
//! The state carries no memory between iterations: it is re-derived from
//! the button every time the loop samples it.

pub mod machine;

pub use machine::{ButtonState, ControlState};
