//! Board-agnostic core logic for the blinkseq firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Validated port/pin access ([`ioport`])
//! - Blocking 10 ms tick delays ([`delay`])
//! - Button-to-LED control loop ([`sequencer`])
//! - Control state definitions ([`state`])
//! - Board wiring and timer configuration ([`config`])
//! - embedded-hal 1.0 adapters ([`embedded`])
//! - Simulated board for host testing (`sim`, behind the `sim` feature)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod delay;
pub mod embedded;
pub mod ioport;
pub mod sequencer;
pub mod state;
pub mod traits;

#[cfg(any(test, feature = "sim"))]
pub mod sim;
