//! Hardware abstraction traits
//!
//! These traits define the interface between the sequencing logic
//! and whatever produces time on the target (hardware counter or
//! simulated clock).

pub mod tick;

pub use tick::TickSource;
