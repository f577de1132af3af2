//! Configuration types
//!
//! Board wiring and timer settings are compile-time constants. Both are
//! checked before the firmware touches any register.

pub mod board;
pub mod timer;

pub use board::*;
pub use timer::*;

use blinkseq_hal::Port;

/// Errors found while validating configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin index does not exist on the port
    PinOutOfRange { port: Port, pin: u8 },
    /// LED and button are wired to the same pin
    PinConflict,
    /// Counts per tick do not fit the 8-bit counter (must be 1-256)
    TickOutOfRange { counts: u32 },
    /// A blink phase of zero ticks
    ZeroPhase,
}
