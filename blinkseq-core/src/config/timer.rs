//! Tick timer configuration
//!
//! One tick is 10 ms. The counter is 8 bits wide, so the clock divider
//! must be large enough that a tick fits in at most 256 counts. The
//! counter is preloaded with `256 - counts` so that it overflows after
//! exactly one tick.
//!
//! ```text
//! 16 MHz / 1024 = 15625 Hz  →  64 µs per count
//! 10 ms / 64 µs = 156 counts →  preload 256 - 156 = 100 (0x64)
//! ```

use super::ConfigError;
use crate::delay::TICK_PERIOD_MS;

/// Ticks per second
const TICKS_PER_SECOND: u32 = 1000 / TICK_PERIOD_MS;

/// Counter clock divider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Prescaler {
    Div1,
    Div8,
    Div64,
    Div256,
    Div1024,
}

impl Prescaler {
    /// Division factor
    pub const fn divisor(self) -> u32 {
        match self {
            Prescaler::Div1 => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }

    /// Clock-select bits (CS02:0 on TC0)
    pub const fn clock_select(self) -> u8 {
        match self {
            Prescaler::Div1 => 0x01,
            Prescaler::Div8 => 0x02,
            Prescaler::Div64 => 0x03,
            Prescaler::Div256 => 0x04,
            Prescaler::Div1024 => 0x05,
        }
    }
}

/// Timer clocking for the tick counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    /// CPU clock in Hz
    pub cpu_hz: u32,
    /// Counter clock divider
    pub prescaler: Prescaler,
}

impl TimerConfig {
    /// ATmega168PB Xplained Mini: 16 MHz external clock, ÷1024
    pub const XPLAINED_MINI: Self = Self {
        cpu_hz: 16_000_000,
        prescaler: Prescaler::Div1024,
    };

    /// Counter increments per tick (truncated)
    pub const fn counts_per_tick(&self) -> u32 {
        self.cpu_hz / self.prescaler.divisor() / TICKS_PER_SECOND
    }

    /// Check that one tick fits the 8-bit counter
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let counts = self.counts_per_tick();
        if counts == 0 || counts > 256 {
            Err(ConfigError::TickOutOfRange { counts })
        } else {
            Ok(())
        }
    }

    /// Value to load into the counter so it overflows after one tick
    ///
    /// Only meaningful for a configuration that passes [`validate`](Self::validate).
    pub const fn preload(&self) -> u8 {
        let counts = self.counts_per_tick();
        if counts == 0 || counts > 256 {
            return 0;
        }
        (256 - counts) as u8
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::XPLAINED_MINI
    }
}

const _: () = assert!(TimerConfig::XPLAINED_MINI.validate().is_ok());
const _: () = assert!(TimerConfig::XPLAINED_MINI.preload() == 0x64);
