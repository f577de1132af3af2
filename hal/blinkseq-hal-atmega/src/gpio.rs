//! GPIO ports for the ATmega168PB
//!
//! Each port has DDRx (direction), PORTx (output latch), and PINx (input).
//! Writing a 1 to PINx toggles the output on this chip family, so the
//! input register is never written.

use blinkseq_hal::{Port, PortRegister, PortRegisters};

use crate::pac::{PORTB, PORTC, PORTD, PORTE};

/// Read one register of one port peripheral
macro_rules! port_read {
    ($periph:expr, $register:expr, $ddr:ident, $port:ident, $pin:ident) => {
        match $register {
            PortRegister::Direction => $periph.$ddr().read().bits(),
            PortRegister::Output => $periph.$port().read().bits(),
            PortRegister::Input => $periph.$pin().read().bits(),
        }
    };
}

/// Write one register of one port peripheral
macro_rules! port_write {
    ($periph:expr, $register:expr, $value:expr, $ddr:ident, $port:ident) => {
        match $register {
            PortRegister::Direction => $periph.$ddr().write(|w| unsafe { w.bits($value) }),
            PortRegister::Output => $periph.$port().write(|w| unsafe { w.bits($value) }),
            PortRegister::Input => {}
        }
    };
}

/// Owned PORTB..PORTE register blocks
pub struct AtmegaPorts {
    portb: PORTB,
    portc: PORTC,
    portd: PORTD,
    porte: PORTE,
}

impl AtmegaPorts {
    /// Take ownership of the four port peripherals
    pub fn new(portb: PORTB, portc: PORTC, portd: PORTD, porte: PORTE) -> Self {
        Self {
            portb,
            portc,
            portd,
            porte,
        }
    }
}

impl PortRegisters for AtmegaPorts {
    fn read(&self, port: Port, register: PortRegister) -> u8 {
        match port {
            Port::B => port_read!(self.portb, register, ddrb, portb, pinb),
            Port::C => port_read!(self.portc, register, ddrc, portc, pinc),
            Port::D => port_read!(self.portd, register, ddrd, portd, pind),
            Port::E => port_read!(self.porte, register, ddre, porte, pine),
        }
    }

    fn write(&mut self, port: Port, register: PortRegister, value: u8) {
        match port {
            Port::B => port_write!(self.portb, register, value, ddrb, portb),
            Port::C => port_write!(self.portc, register, value, ddrc, portc),
            Port::D => port_write!(self.portd, register, value, ddrd, portd),
            Port::E => port_write!(self.porte, register, value, ddre, porte),
        }
    }
}
