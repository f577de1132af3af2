//! Console log lines
//!
//! Boot-time reporting over USART0.

use blinkseq_core::config::{BoardConfig, ConfigError, PinConfig, TimerConfig};
use blinkseq_core::delay::ticks_to_millis;
use ufmt::{uWrite, uwrite, uwriteln};

/// Print a pin as "PB5"
fn pin<W: uWrite>(w: &mut W, pin: &PinConfig) {
    uwrite!(w, "P{}{}", pin.port.letter(), pin.pin).ok();
}

/// Report the wiring and timer setup
pub fn config_summary<W: uWrite>(w: &mut W, board: &BoardConfig, timer: &TimerConfig) {
    uwrite!(w, "led ").ok();
    pin(w, &board.led);
    uwrite!(w, ", button ").ok();
    pin(w, &board.button);
    uwriteln!(w, ", phase {} ms", ticks_to_millis(board.phase_ticks)).ok();

    uwriteln!(
        w,
        "tick: {} Hz / {} -> {} counts, preload {}",
        timer.cpu_hz,
        timer.prescaler.divisor(),
        timer.counts_per_tick(),
        timer.preload()
    )
    .ok();
}

/// Report a configuration error
pub fn config_error<W: uWrite>(w: &mut W, error: ConfigError) {
    uwrite!(w, "config error: ").ok();
    match error {
        ConfigError::PinOutOfRange { port, pin } => {
            uwriteln!(w, "pin P{}{} does not exist", port.letter(), pin).ok();
        }
        ConfigError::PinConflict => {
            uwriteln!(w, "led and button share a pin").ok();
        }
        ConfigError::TickOutOfRange { counts } => {
            uwriteln!(w, "{} counts per tick does not fit TC0", counts).ok();
        }
        ConfigError::ZeroPhase => {
            uwriteln!(w, "blink phase of zero ticks").ok();
        }
    }
}
