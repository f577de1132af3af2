//! blinkseq Hardware Abstraction Layer
//!
//! This crate defines the register-level handles that chip-specific HALs
//! implement. The core logic only ever talks to hardware through these
//! traits, so the same control code runs on the ATmega168PB and against
//! the simulated board used in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (blinkseq-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  blinkseq-core (ioport/delay/sequencer) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  blinkseq-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ blinkseq-hal- │       │  core::sim    │
//! │    atmega     │       │ (host tests)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::PortRegisters`] - Direction/output/input registers per port
//! - [`timer::OverflowCounter`] - Free-running 8-bit counter with overflow flag

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod timer;

// Re-export key types at crate root for convenience
pub use gpio::{Direction, PinLevel, Port, PortRegister, PortRegisters};
pub use timer::OverflowCounter;
