//! Blink phase definitions

use crate::delay::{ticks_to_millis, TickCount};

/// Number of phases in the blink sequence
pub const PHASE_COUNT: usize = 3;

/// One step of the blink sequence: set the LED, then wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkPhase {
    /// LED on (true) or off (false) for this phase
    pub led_on: bool,
    /// How long the phase lasts
    pub ticks: TickCount,
}

impl BlinkPhase {
    /// Phase duration in milliseconds
    pub const fn duration_ms(&self) -> u32 {
        ticks_to_millis(self.ticks)
    }
}

/// On, off, on, each for `phase_ticks`
pub const fn blink_sequence(phase_ticks: TickCount) -> [BlinkPhase; PHASE_COUNT] {
    [
        BlinkPhase {
            led_on: true,
            ticks: phase_ticks,
        },
        BlinkPhase {
            led_on: false,
            ticks: phase_ticks,
        },
        BlinkPhase {
            led_on: true,
            ticks: phase_ticks,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_shape() {
        let phases = blink_sequence(1000);
        let pattern: [bool; PHASE_COUNT] = phases.map(|p| p.led_on);
        assert_eq!(pattern, [true, false, true]);
        assert!(phases.iter().all(|p| p.ticks == 1000));
        assert_eq!(phases[0].duration_ms(), 10_000);
    }
}
