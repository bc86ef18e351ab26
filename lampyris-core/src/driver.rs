//! Pixel command decoder/driver
//!
//! Consumes one datagram payload at a time and turns each 4-byte command
//! word into the register write sequence that lights the addressed cell.
//! One invocation fully drains the control path before the next datagram
//! is serviced; there is no buffering and no concurrency.

use lampyris_protocol::{commands, SegmentMask};

use crate::traits::PanelRegisters;

/// Drives the panel registers from decoded pixel commands
///
/// Owns the register interface exclusively. Two states exist per
/// command: Idle (enable = 0) and Committing (enable = target segment);
/// the driver enters and leaves every datagram in Idle, so the panel is
/// never left mid-commit, even when a payload is empty or truncated.
pub struct PanelDriver<R: PanelRegisters> {
    regs: R,
}

impl<R: PanelRegisters> PanelDriver<R> {
    /// Take ownership of the panel registers and drive them to idle
    pub fn new(regs: R) -> Self {
        let mut driver = Self { regs };
        driver.regs.set_enable(SegmentMask::NONE);
        driver
    }

    /// Decode and drive one datagram payload
    ///
    /// The target segment comes from the destination port's low nibble;
    /// a port with a zero low nibble deselects every segment, making the
    /// commits legal no-ops. Trailing `len % 4` bytes are ignored.
    ///
    /// Register sequence per command: disable, data, address,
    /// enable(target). The whole batch is bracketed by disable writes.
    pub fn handle_datagram(&mut self, dst_port: u16, payload: &[u8]) {
        let segment = SegmentMask::from_port(dst_port);

        self.regs.set_enable(SegmentMask::NONE);
        for cmd in commands(payload) {
            self.regs.set_enable(SegmentMask::NONE);
            self.regs.set_data(cmd.data_word());
            self.regs.set_address(cmd.address);
            self.regs.set_enable(segment);
        }
        self.regs.set_enable(SegmentMask::NONE);
    }

    /// Borrow the underlying register interface
    pub fn registers(&self) -> &R {
        &self.regs
    }
}
