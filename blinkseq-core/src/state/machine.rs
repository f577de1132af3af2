//! State definitions

use blinkseq_hal::PinLevel;

/// Button state derived from the button pin level
///
/// The button is wired active-low with a pull-up: pressed pulls the pin low.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    Pressed,
    Released,
}

impl ButtonState {
    /// Interpret an active-low pin level
    ///
    /// Only a physical Low counts as pressed. An invalid pin configuration
    /// therefore reads as never pressed.
    pub const fn from_active_low(level: PinLevel) -> Self {
        match level {
            PinLevel::Low => ButtonState::Pressed,
            PinLevel::High | PinLevel::InvalidConfiguration => ButtonState::Released,
        }
    }

    /// Check if the button is pressed
    pub const fn is_pressed(self) -> bool {
        matches!(self, ButtonState::Pressed)
    }
}

/// Control loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlState {
    /// Button not pressed; LED held off
    Idle,
    /// Button pressed; blink sequence runs to completion
    Triggered,
}

impl ControlState {
    /// State for one loop iteration
    pub const fn sample(button: ButtonState) -> Self {
        match button {
            ButtonState::Pressed => ControlState::Triggered,
            ButtonState::Released => ControlState::Idle,
        }
    }

    /// Short name for console output
    pub const fn as_str(self) -> &'static str {
        match self {
            ControlState::Idle => "idle",
            ControlState::Triggered => "triggered",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_low_button() {
        assert_eq!(ButtonState::from_active_low(PinLevel::Low), ButtonState::Pressed);
        assert_eq!(ButtonState::from_active_low(PinLevel::High), ButtonState::Released);
    }

    #[test]
    fn test_invalid_pin_reads_released() {
        let state = ButtonState::from_active_low(PinLevel::InvalidConfiguration);
        assert!(!state.is_pressed());
        assert_eq!(ControlState::sample(state), ControlState::Idle);
    }

    #[test]
    fn test_sample() {
        assert_eq!(ControlState::sample(ButtonState::Pressed), ControlState::Triggered);
        assert_eq!(ControlState::sample(ButtonState::Released), ControlState::Idle);
    }
}
