//! Button-triggered blink sequencing
//!
//! Polls the button, holds the LED off while idle, and runs the fixed
//! three-phase blink sequence on a press.

pub mod phase;
pub mod runner;

pub use phase::{blink_sequence, BlinkPhase, PHASE_COUNT};
pub use runner::Sequencer;
