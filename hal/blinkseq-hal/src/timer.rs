//! Hardware counter abstraction
//!
//! Models an 8-bit free-running counter (TC0 on AVR) that sets an
//! overflow flag when it wraps from 0xFF to 0x00.

/// Owned handle to a free-running 8-bit counter
pub trait OverflowCounter {
    /// Put the counter in normal (free-running) mode with the given
    /// clock-select bits
    ///
    /// `clock_select` is the raw 3-bit divider selection; 0 stops the clock.
    fn start(&mut self, clock_select: u8);

    /// Load the counter value register
    fn set_count(&mut self, value: u8);

    /// Check the overflow flag
    fn overflowed(&self) -> bool;

    /// Clear the overflow flag
    fn clear_overflow(&mut self);
}
