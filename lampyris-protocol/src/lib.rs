//! Pixel Command Wire Protocol
//!
//! This crate defines the UDP payload format understood by the Lampyris
//! panel firmware. A datagram carries a bare array of 32-bit pixel
//! commands, big-endian, with no header and no checksum beyond the
//! transport's own.
//!
//! # Command layout
//!
//! ```text
//!  31            18 17    12 11     6 5      0
//! ┌────────────────┬────────┬────────┬────────┐
//! │ address        │ blue   │ red    │ green  │
//! │ 14 bits        │ 6 bits │ 6 bits │ 6 bits │
//! └────────────────┴────────┴────────┴────────┘
//! ```
//!
//! A payload whose length is not a multiple of four has its trailing
//! bytes ignored; there is no partial command and no error.
//!
//! The panel segment that latches a commit is not part of the payload:
//! it is derived from the low nibble of the destination UDP port
//! ([`SegmentMask::from_port`]).

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod command;
pub mod segment;

pub use command::{commands, Commands, PixelCommand, ADDRESS_MAX, CHANNEL_MAX, COMMAND_BYTES};
pub use segment::SegmentMask;
