//! Hardware abstraction traits
//!
//! Implemented by the register bus backends in `lampyris-drivers` and by
//! recording doubles in tests.

pub mod panel;

pub use panel::{PanelRegisters, ADDRESS_WIDTH, DATA_WIDTH, ENABLE_WIDTH};
