//! GPIO port abstractions
//!
//! Ports are groups of up to eight pins sharing one direction register,
//! one output register, and one input register. Each port exposes a
//! different number of pins, so every pin index is only meaningful
//! together with its port.

/// Hardware pin group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// PORTB, pins 0-7
    B,
    /// PORTC, pins 0-6
    C,
    /// PORTD, pins 0-7
    D,
    /// PORTE, pins 0-3
    E,
}

/// Highest valid pin index per port, indexed by [`Port::index`]
const MAX_PIN: [u8; Port::COUNT] = [7, 6, 7, 3];

impl Port {
    /// Number of ports
    pub const COUNT: usize = 4;

    /// All ports in register order
    pub const ALL: [Port; Port::COUNT] = [Port::B, Port::C, Port::D, Port::E];

    /// Position of this port in [`Port::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Port::B => 0,
            Port::C => 1,
            Port::D => 2,
            Port::E => 3,
        }
    }

    /// Highest valid pin index (inclusive)
    pub const fn max_pin(self) -> u8 {
        MAX_PIN[self.index()]
    }

    /// Check if `pin` exists on this port
    pub const fn contains(self, pin: u8) -> bool {
        pin <= self.max_pin()
    }

    /// Iterate over every valid pin index of this port
    pub fn pins(self) -> core::ops::RangeInclusive<u8> {
        0..=self.max_pin()
    }

    /// Port letter as used in datasheets ('B' for PORTB)
    pub const fn letter(self) -> char {
        match self {
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
            Port::E => 'E',
        }
    }
}

/// Pin direction as stored in the direction register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Direction bit cleared
    Input,
    /// Direction bit set
    Output,
}

/// Result of reading a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    /// Logic 0
    Low,
    /// Logic 1
    High,
    /// The (port, pin) combination does not exist
    ///
    /// Never a physical electrical state.
    InvalidConfiguration,
}

impl PinLevel {
    /// Level for a register bit
    pub const fn from_bit(set: bool) -> Self {
        if set {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }

    /// Check if this is a physical level (not the invalid sentinel)
    pub const fn is_valid(self) -> bool {
        !matches!(self, PinLevel::InvalidConfiguration)
    }
}

/// The three registers every port has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortRegister {
    /// Data direction register (DDRx), 1 = output
    Direction,
    /// Output latch (PORTx)
    Output,
    /// Input pins register (PINx), read-only
    Input,
}

/// Owned handle to the memory-mapped port registers
///
/// Implementations map (port, register) to the chip's actual registers.
/// There is exactly one handle per device; operations take `&mut self`
/// for writes so ownership doubles as the access discipline.
pub trait PortRegisters {
    /// Read a full 8-bit port register
    fn read(&self, port: Port, register: PortRegister) -> u8;

    /// Write a full 8-bit port register
    ///
    /// Writes to [`PortRegister::Input`] are ignored by implementations.
    fn write(&mut self, port: Port, register: PortRegister, value: u8);

    /// Read-modify-write: set the bits in `mask`
    fn set_bits(&mut self, port: Port, register: PortRegister, mask: u8) {
        let value = self.read(port, register);
        self.write(port, register, value | mask);
    }

    /// Read-modify-write: clear the bits in `mask`
    fn clear_bits(&mut self, port: Port, register: PortRegister, mask: u8) {
        let value = self.read(port, register);
        self.write(port, register, value & !mask);
    }
}
