//! Board wiring configuration
//!
//! Where the LED and button are attached, and how long each blink phase
//! lasts.

use blinkseq_hal::Port;

use super::ConfigError;
use crate::delay::TickCount;

/// A single (port, pin) location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// Port the pin belongs to
    pub port: Port,
    /// Pin index within the port
    pub pin: u8,
}

impl PinConfig {
    /// Create a new pin location
    pub const fn new(port: Port, pin: u8) -> Self {
        Self { port, pin }
    }

    /// Check that the pin exists on its port
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.port.contains(self.pin) {
            Ok(())
        } else {
            Err(ConfigError::PinOutOfRange {
                port: self.port,
                pin: self.pin,
            })
        }
    }
}

/// Board wiring and sequence timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// LED pin, driven as output (active-high)
    pub led: PinConfig,
    /// Button pin, read as input (active-low, external pull-up)
    pub button: PinConfig,
    /// Length of each blink phase in ticks
    pub phase_ticks: TickCount,
}

impl BoardConfig {
    /// ATmega168PB Xplained Mini: LED on PB5, button on PB7, 10 s phases
    pub const XPLAINED_MINI: Self = Self {
        led: PinConfig::new(Port::B, 5),
        button: PinConfig::new(Port::B, 7),
        phase_ticks: 1000,
    };

    /// Validate the wiring
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = self.led.validate() {
            return Err(e);
        }
        if let Err(e) = self.button.validate() {
            return Err(e);
        }
        if self.led.port.index() == self.button.port.index() && self.led.pin == self.button.pin {
            return Err(ConfigError::PinConflict);
        }
        if self.phase_ticks == 0 {
            return Err(ConfigError::ZeroPhase);
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::XPLAINED_MINI
    }
}

const _: () = assert!(BoardConfig::XPLAINED_MINI.validate().is_ok());
