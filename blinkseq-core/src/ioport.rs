//! Port/pin configuration, output, and input
//!
//! [`IoPort`] owns the port register handle and is the only way the rest
//! of the firmware touches pins. Every operation first checks the pin
//! against its port's range; an out-of-range pin never produces a
//! register access.
//!
//! Misuse is silent:
//! - configuring or writing an out-of-range pin does nothing
//! - writing a pin configured as input does nothing, so an input pin's
//!   pull-up/state is never overridden by a stray write
//! - reading an out-of-range pin returns [`PinLevel::InvalidConfiguration`]

use blinkseq_hal::{Direction, PinLevel, Port, PortRegister, PortRegisters};

/// Bit mask for a pin, or `None` if the pin does not exist on the port
#[inline]
fn pin_mask(port: Port, pin: u8) -> Option<u8> {
    if port.contains(pin) {
        Some(1 << pin)
    } else {
        None
    }
}

/// Validated access to the GPIO ports
pub struct IoPort<R> {
    regs: R,
}

impl<R: PortRegisters> IoPort<R> {
    /// Take ownership of the port registers
    pub fn new(regs: R) -> Self {
        Self { regs }
    }

    /// Access the underlying register handle
    pub fn registers(&self) -> &R {
        &self.regs
    }

    /// Give the register handle back
    pub fn release(self) -> R {
        self.regs
    }

    /// Configure a pin as input
    pub fn configure_as_input(&mut self, port: Port, pin: u8) {
        if let Some(mask) = pin_mask(port, pin) {
            self.regs.clear_bits(port, PortRegister::Direction, mask);
        }
    }

    /// Configure a pin as output
    pub fn configure_as_output(&mut self, port: Port, pin: u8) {
        if let Some(mask) = pin_mask(port, pin) {
            self.regs.set_bits(port, PortRegister::Direction, mask);
        }
    }

    /// Configure a pin's direction
    pub fn configure(&mut self, port: Port, pin: u8, direction: Direction) {
        match direction {
            Direction::Input => self.configure_as_input(port, pin),
            Direction::Output => self.configure_as_output(port, pin),
        }
    }

    /// Drive an output pin high
    pub fn set_high(&mut self, port: Port, pin: u8) {
        if let Some(mask) = self.output_mask(port, pin) {
            self.regs.set_bits(port, PortRegister::Output, mask);
        }
    }

    /// Drive an output pin low
    pub fn set_low(&mut self, port: Port, pin: u8) {
        if let Some(mask) = self.output_mask(port, pin) {
            self.regs.clear_bits(port, PortRegister::Output, mask);
        }
    }

    /// Drive an output pin to `high`
    pub fn set_level(&mut self, port: Port, pin: u8, high: bool) {
        if high {
            self.set_high(port, pin);
        } else {
            self.set_low(port, pin);
        }
    }

    /// Read the physical level of a pin
    ///
    /// Reflects the input register regardless of direction; an output pin
    /// reads back what it is driving.
    pub fn read_level(&self, port: Port, pin: u8) -> PinLevel {
        match pin_mask(port, pin) {
            Some(mask) => PinLevel::from_bit(self.regs.read(port, PortRegister::Input) & mask != 0),
            None => PinLevel::InvalidConfiguration,
        }
    }

    /// Current direction of a pin, `None` if the pin does not exist
    pub fn direction(&self, port: Port, pin: u8) -> Option<Direction> {
        let mask = pin_mask(port, pin)?;
        if self.regs.read(port, PortRegister::Direction) & mask != 0 {
            Some(Direction::Output)
        } else {
            Some(Direction::Input)
        }
    }

    /// Level last written to a pin's output latch
    ///
    /// Unlike [`read_level`](Self::read_level) this ignores the input register.
    pub fn output_latch(&self, port: Port, pin: u8) -> PinLevel {
        match pin_mask(port, pin) {
            Some(mask) => PinLevel::from_bit(self.regs.read(port, PortRegister::Output) & mask != 0),
            None => PinLevel::InvalidConfiguration,
        }
    }

    /// Mask for a pin that exists and is configured as output
    fn output_mask(&self, port: Port, pin: u8) -> Option<u8> {
        let mask = pin_mask(port, pin)?;
        if self.regs.read(port, PortRegister::Direction) & mask == mask {
            Some(mask)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimBoard;
    use proptest::prelude::*;

    fn snapshot(board: &SimBoard) -> [(u8, u8); Port::COUNT] {
        Port::ALL.map(|port| {
            (
                board.register(port, PortRegister::Direction),
                board.register(port, PortRegister::Output),
            )
        })
    }

    #[test]
    fn test_output_round_trip_every_pin() {
        for port in Port::ALL {
            for pin in port.pins() {
                let board = SimBoard::new();
                let mut io = IoPort::new(board.ports());

                io.configure_as_output(port, pin);
                io.set_high(port, pin);
                assert_eq!(io.read_level(port, pin), PinLevel::High, "P{}{}", port.letter(), pin);

                io.set_low(port, pin);
                assert_eq!(io.read_level(port, pin), PinLevel::Low, "P{}{}", port.letter(), pin);
            }
        }
    }

    #[test]
    fn test_writes_to_input_pin_ignored() {
        for port in Port::ALL {
            for pin in port.pins() {
                let board = SimBoard::new();
                let mut io = IoPort::new(board.ports());

                io.configure_as_input(port, pin);
                io.set_high(port, pin);
                assert_eq!(board.register(port, PortRegister::Output), 0);
                assert_eq!(io.output_latch(port, pin), PinLevel::Low);

                // Latch set while output, then switched to input: set_low must not clear it
                io.configure_as_output(port, pin);
                io.set_high(port, pin);
                io.configure_as_input(port, pin);
                io.set_low(port, pin);
                assert_eq!(io.output_latch(port, pin), PinLevel::High);
            }
        }
    }

    #[test]
    fn test_input_pin_reads_external_level() {
        let board = SimBoard::new();
        let mut io = IoPort::new(board.ports());
        io.configure_as_input(Port::B, 7);

        assert_eq!(io.read_level(Port::B, 7), PinLevel::High);
        board.set_external(Port::B, 7, false);
        assert_eq!(io.read_level(Port::B, 7), PinLevel::Low);
    }

    #[test]
    fn test_out_of_range_port_e() {
        let board = SimBoard::new();
        let mut io = IoPort::new(board.ports());

        io.configure_as_output(Port::E, 7);
        io.set_high(Port::E, 7);
        io.set_low(Port::E, 7);
        io.configure_as_input(Port::E, 7);

        assert_eq!(io.read_level(Port::E, 7), PinLevel::InvalidConfiguration);
        assert_eq!(io.direction(Port::E, 7), None);
        assert_eq!(board.write_count(), 0);
    }

    #[test]
    fn test_configure_output_idempotent() {
        let board = SimBoard::new();
        let mut io = IoPort::new(board.ports());

        io.configure_as_output(Port::D, 2);
        let once = board.register(Port::D, PortRegister::Direction);
        io.configure_as_output(Port::D, 2);
        let twice = board.register(Port::D, PortRegister::Direction);

        assert_eq!(once, twice);
        assert_eq!(io.direction(Port::D, 2), Some(Direction::Output));
    }

    #[test]
    fn test_configure_leaves_other_pins() {
        let board = SimBoard::new();
        let mut io = IoPort::new(board.ports());

        io.configure(Port::C, 0, Direction::Output);
        io.configure(Port::C, 6, Direction::Output);
        io.configure(Port::C, 0, Direction::Input);

        assert_eq!(board.register(Port::C, PortRegister::Direction), 0b0100_0000);
        assert_eq!(io.direction(Port::C, 6), Some(Direction::Output));
        assert_eq!(io.direction(Port::C, 0), Some(Direction::Input));
    }

    #[test]
    fn test_set_level() {
        let board = SimBoard::new();
        let mut io = IoPort::new(board.ports());
        io.configure_as_output(Port::B, 5);

        io.set_level(Port::B, 5, true);
        assert_eq!(io.output_latch(Port::B, 5), PinLevel::High);
        io.set_level(Port::B, 5, false);
        assert_eq!(io.output_latch(Port::B, 5), PinLevel::Low);
    }

    proptest! {
        #[test]
        fn prop_out_of_range_never_touches_registers(port_idx in 0usize..Port::COUNT, pin in any::<u8>()) {
            let port = Port::ALL[port_idx];
            prop_assume!(!port.contains(pin));

            let board = SimBoard::new();
            let mut io = IoPort::new(board.ports());
            // Put some state in every port first
            for p in Port::ALL {
                io.configure_as_output(p, 0);
                io.set_high(p, 0);
            }
            let before = snapshot(&board);
            let writes = board.write_count();

            io.configure_as_output(port, pin);
            io.configure_as_input(port, pin);
            io.set_high(port, pin);
            io.set_low(port, pin);

            prop_assert_eq!(io.read_level(port, pin), PinLevel::InvalidConfiguration);
            prop_assert_eq!(snapshot(&board), before);
            prop_assert_eq!(board.write_count(), writes);
        }

        #[test]
        fn prop_input_pin_writes_never_change_output(port_idx in 0usize..Port::COUNT, pin in 0u8..8, latch in any::<u8>()) {
            let port = Port::ALL[port_idx];
            prop_assume!(port.contains(pin));

            let board = SimBoard::new();
            let mut ports = board.ports();
            ports.write(port, PortRegister::Output, latch);
            let mut io = IoPort::new(ports);

            io.configure_as_input(port, pin);
            io.set_high(port, pin);
            io.set_low(port, pin);

            prop_assert_eq!(board.register(port, PortRegister::Output), latch);
        }
    }
}
