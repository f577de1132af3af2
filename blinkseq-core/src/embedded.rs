//! embedded-hal 1.0 adapters
//!
//! Lets generic embedded-hal drivers use the port layer and the tick
//! delay. Where the core operations silently ignore misuse, these
//! adapters report it as a [`PinError`].

use blinkseq_hal::{Direction, PinLevel, Port, PortRegisters};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::delay::{Delay, TickCount, TICK_PERIOD_MS};
use crate::ioport::IoPort;
use crate::traits::TickSource;

/// Pin access errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin does not exist on the port
    OutOfRange,
    /// Write to a pin configured as input
    NotOutput,
}

impl digital::Error for PinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// One pin borrowed from an [`IoPort`]
pub struct PortPin<'a, R> {
    io: &'a mut IoPort<R>,
    port: Port,
    pin: u8,
}

impl<R: PortRegisters> IoPort<R> {
    /// Borrow a single pin as an embedded-hal pin
    pub fn pin(&mut self, port: Port, pin: u8) -> PortPin<'_, R> {
        PortPin { io: self, port, pin }
    }
}

impl<R: PortRegisters> PortPin<'_, R> {
    fn require_output(&self) -> Result<(), PinError> {
        match self.io.direction(self.port, self.pin) {
            Some(Direction::Output) => Ok(()),
            Some(Direction::Input) => Err(PinError::NotOutput),
            None => Err(PinError::OutOfRange),
        }
    }
}

impl<R> ErrorType for PortPin<'_, R> {
    type Error = PinError;
}

impl<R: PortRegisters> OutputPin for PortPin<'_, R> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.require_output()?;
        self.io.set_low(self.port, self.pin);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.require_output()?;
        self.io.set_high(self.port, self.pin);
        Ok(())
    }
}

impl<R: PortRegisters> StatefulOutputPin for PortPin<'_, R> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        match self.io.output_latch(self.port, self.pin) {
            PinLevel::High => Ok(true),
            PinLevel::Low => Ok(false),
            PinLevel::InvalidConfiguration => Err(PinError::OutOfRange),
        }
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.is_set_high().map(|high| !high)
    }
}

impl<R: PortRegisters> InputPin for PortPin<'_, R> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        match self.io.read_level(self.port, self.pin) {
            PinLevel::High => Ok(true),
            PinLevel::Low => Ok(false),
            PinLevel::InvalidConfiguration => Err(PinError::OutOfRange),
        }
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

impl<T: TickSource> Delay<T> {
    /// Wait an arbitrary number of ticks, split into [`TickCount`] chunks
    fn wait_total(&mut self, mut ticks: u32) {
        while ticks > 0 {
            let chunk = ticks.min(TickCount::MAX as u32);
            self.wait_ticks(chunk as TickCount);
            ticks -= chunk;
        }
    }
}

/// Delays round up to whole 10 ms ticks
impl<T: TickSource> DelayNs for Delay<T> {
    fn delay_ns(&mut self, ns: u32) {
        self.wait_total(ns.div_ceil(TICK_PERIOD_MS * 1_000_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.wait_total(us.div_ceil(TICK_PERIOD_MS * 1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait_total(ms.div_ceil(TICK_PERIOD_MS));
    }
}
