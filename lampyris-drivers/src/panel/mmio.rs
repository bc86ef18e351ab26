//! Memory-mapped register backend
//!
//! For scan controllers that sit in the SoC's address space as three
//! write-only CSR cells. Each register write is a single volatile store.

// The one module that touches raw pointers.
#![allow(unsafe_code)]

use core::ptr;

use lampyris_core::traits::PanelRegisters;
use lampyris_protocol::SegmentMask;

/// Memory-mapped panel registers
///
/// Holds the raw addresses of the enable, data and address registers.
/// Values wider than the register are truncated by the hardware; this
/// backend writes them as-is.
pub struct MmioPanel {
    enable: *mut u32,
    data: *mut u32,
    address: *mut u32,
}

impl MmioPanel {
    /// Build a backend over three register addresses
    ///
    /// # Safety
    ///
    /// Each pointer must be a valid, writable register address for the
    /// lifetime of the value, and the three must map distinct registers.
    /// The caller keeps exclusive ownership of the registers; nothing
    /// else may write them while this value exists.
    pub const unsafe fn new(enable: *mut u32, data: *mut u32, address: *mut u32) -> Self {
        Self {
            enable,
            data,
            address,
        }
    }
}

impl PanelRegisters for MmioPanel {
    fn set_enable(&mut self, mask: SegmentMask) {
        unsafe { ptr::write_volatile(self.enable, mask.value() as u32) }
    }

    fn set_data(&mut self, value: u32) {
        unsafe { ptr::write_volatile(self.data, value) }
    }

    fn set_address(&mut self, value: u16) {
        unsafe { ptr::write_volatile(self.address, value as u32) }
    }
}
