//! Hardware-agnostic core logic for the panel firmware
//!
//! This crate contains everything between the network socket and the
//! scan controller's registers, with no dependency on a specific chip:
//!
//! - The panel register contract ([`traits::PanelRegisters`])
//! - The pixel command decoder/driver ([`driver::PanelDriver`])
//!
//! The driver is the only writer of the panel registers; correctness
//! rests on the write ordering it guarantees, not on any locking.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod driver;
pub mod traits;

pub use driver::PanelDriver;
pub use traits::PanelRegisters;
