//! Register bus backends
//!
//! This crate provides concrete implementations of the
//! [`PanelRegisters`](lampyris_core::PanelRegisters) contract from
//! lampyris-core:
//!
//! - [`panel::latched`] - serial data/clock bus with one latch line per
//!   register, for scan controllers hung off MCU GPIOs
//! - [`panel::mmio`] - memory-mapped registers, for scan controllers
//!   integrated into the SoC's address space

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod panel;
