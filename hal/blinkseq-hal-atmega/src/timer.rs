//! TC0 as a tick counter
//!
//! Normal mode (WGM0 = 0): the counter runs up from the loaded value,
//! wraps at 0xFF, and sets TOV0 in TIFR0. TOV0 is cleared by writing a 1.

use blinkseq_hal::OverflowCounter;

use crate::pac::TC0;

/// TOV0 bit in TIFR0
const TOV0: u8 = 0x01;

/// Clock-select field mask in TCCR0B
const CS0_MASK: u8 = 0x07;

/// Timer/Counter 0
pub struct Timer0 {
    tc0: TC0,
}

impl Timer0 {
    /// Take ownership of TC0
    pub fn new(tc0: TC0) -> Self {
        Self { tc0 }
    }
}

impl OverflowCounter for Timer0 {
    fn start(&mut self, clock_select: u8) {
        self.tc0.tccr0a().write(|w| unsafe { w.bits(0x00) });
        self.tc0
            .tccr0b()
            .write(|w| unsafe { w.bits(clock_select & CS0_MASK) });
    }

    fn set_count(&mut self, value: u8) {
        self.tc0.tcnt0().write(|w| unsafe { w.bits(value) });
    }

    fn overflowed(&self) -> bool {
        self.tc0.tifr0().read().bits() & TOV0 != 0
    }

    fn clear_overflow(&mut self) {
        self.tc0.tifr0().write(|w| unsafe { w.bits(TOV0) });
    }
}
