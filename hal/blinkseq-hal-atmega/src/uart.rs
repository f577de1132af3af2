//! USART0 console
//!
//! Transmit-only, 8N1, polled. On the Xplained Mini USART0 is wired to
//! the mEDBG virtual COM port.

use core::convert::Infallible;

use crate::pac::USART0;

/// TXEN0 bit in UCSR0B
const TXEN0: u8 = 1 << 3;

/// UCSZ01:0 = 0b11 in UCSR0C (8 data bits, no parity, 1 stop bit)
const FRAME_8N1: u8 = 0b0000_0110;

/// UDRE0 bit in UCSR0A
const UDRE0: u8 = 1 << 5;

/// UART configuration
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// CPU clock in Hz
    pub cpu_hz: u32,
    /// Baud rate
    pub baudrate: u32,
}

impl UartConfig {
    /// UBRR0 value for normal-speed (16x oversampling) mode
    pub const fn ubrr(&self) -> u16 {
        (self.cpu_hz / (16 * self.baudrate)).saturating_sub(1) as u16
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            cpu_hz: 16_000_000,
            baudrate: 9600, // mEDBG virtual COM default
        }
    }
}

/// Blocking console writer on USART0
pub struct Usart0 {
    usart: USART0,
}

impl Usart0 {
    /// Configure USART0 for transmit
    pub fn new(usart: USART0, config: UartConfig) -> Self {
        let ubrr = config.ubrr();
        usart.ubrr0().write(|w| unsafe { w.bits(ubrr) });
        usart.ucsr0c().write(|w| unsafe { w.bits(FRAME_8N1) });
        usart.ucsr0b().write(|w| unsafe { w.bits(TXEN0) });
        Self { usart }
    }

    /// Send one byte, waiting for the data register to empty
    pub fn write_byte(&mut self, byte: u8) {
        while self.usart.ucsr0a().read().bits() & UDRE0 == 0 {}
        self.usart.udr0().write(|w| unsafe { w.bits(byte) });
    }
}

impl ufmt::uWrite for Usart0 {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
        Ok(())
    }
}
