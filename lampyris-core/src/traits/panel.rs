//! Panel register contract

use lampyris_protocol::SegmentMask;

/// Width of the segment enable register, in bits
pub const ENABLE_WIDTH: u32 = 4;

/// Width of the pixel data register, in bits
pub const DATA_WIDTH: u32 = 24;

/// Width of the cell address register, in bits
pub const ADDRESS_WIDTH: u32 = 14;

/// The scan controller's three write-only registers
///
/// Each operation is a single blocking write with no failure mode; the
/// registers are assumed always writable and offer no readback.
///
/// # Write ordering
///
/// The controller latches whatever data and address are currently loaded
/// the moment a segment's enable bit goes high. Callers must therefore
/// write in the order: disable, data, address, enable - writing address
/// before data, or enabling before the address commit, latches a stale
/// color onto the panel. [`crate::PanelDriver`] is the intended sole
/// caller and guarantees this sequence internally.
pub trait PanelRegisters {
    /// Select which panel segment(s) latch the next commit
    ///
    /// [`SegmentMask::NONE`] means no segment is active (safe idle).
    fn set_enable(&mut self, mask: SegmentMask);

    /// Load the packed pixel color for the next address write
    ///
    /// Layout: `(red << 16) | (green << 8) | blue`; the register is 24
    /// bits wide and the upper byte of the word is unused.
    fn set_data(&mut self, value: u32);

    /// Commit the loaded color to the given cell
    ///
    /// Combined with whatever enable mask is currently set, this decides
    /// which physical segment receives the pixel. Addresses are passed to
    /// hardware as-is; there is no bounds check against the panel's
    /// actual cell count.
    fn set_address(&mut self, value: u16);
}
