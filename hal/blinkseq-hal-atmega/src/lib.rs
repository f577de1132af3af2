//! ATmega168PB-specific HAL for the blinkseq firmware
//!
//! This crate implements the `blinkseq-hal` register handles on top of the
//! `avr-device` peripheral access crate:
//!
//! - [`gpio::AtmegaPorts`] - PORTB..PORTE direction/output/input registers
//! - [`timer::Timer0`] - TC0 in normal mode as the tick counter
//! - [`uart::Usart0`] - Transmit-only console for `ufmt`
//!
//! The ATmega168PB shares its register map with the ATmega328PB; the
//! peripherals are taken from `avr_device::atmega328pb`.

#![no_std]

pub mod gpio;
pub mod timer;
pub mod uart;

pub use avr_device::atmega328pb as pac;

// Re-export shared types from blinkseq-hal
pub use blinkseq_hal::{Port, PortRegister, PortRegisters};
