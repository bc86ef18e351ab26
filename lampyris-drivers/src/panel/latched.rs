//! Serial register bus
//!
//! Register writes for scan controllers wired to MCU GPIOs: the value is
//! shifted MSB-first on a shared data/clock pair, then latched into the
//! target register by a pulse on that register's latch line. Clocked-in
//! bits only become visible on the latch pulse, so a partially shifted
//! value never reaches the panel.

use embedded_hal::digital::OutputPin;
use lampyris_core::traits::{PanelRegisters, ADDRESS_WIDTH, DATA_WIDTH, ENABLE_WIDTH};
use lampyris_protocol::SegmentMask;

/// Bit-banged serial bus to the scan controller's registers
///
/// Pin errors are discarded: the register contract has no failure mode,
/// and the GPIO types used in practice are infallible.
pub struct SerialPanelBus<P: OutputPin> {
    sdi: P,
    sclk: P,
    le_enable: P,
    le_data: P,
    le_address: P,
}

impl<P: OutputPin> SerialPanelBus<P> {
    /// Take the five bus pins and drive them to their resting levels
    pub fn new(sdi: P, sclk: P, le_enable: P, le_data: P, le_address: P) -> Self {
        let mut bus = Self {
            sdi,
            sclk,
            le_enable,
            le_data,
            le_address,
        };
        bus.sdi.set_low().ok();
        bus.sclk.set_low().ok();
        bus.le_enable.set_low().ok();
        bus.le_data.set_low().ok();
        bus.le_address.set_low().ok();
        bus
    }

    /// Shift out the low `width` bits of `value`, MSB first
    fn shift_out(&mut self, value: u32, width: u32) {
        for bit in (0..width).rev() {
            if (value >> bit) & 1 != 0 {
                self.sdi.set_high().ok();
            } else {
                self.sdi.set_low().ok();
            }
            // Controller samples SDI on the rising clock edge
            self.sclk.set_high().ok();
            self.sclk.set_low().ok();
        }
    }

    fn pulse(latch: &mut P) {
        latch.set_high().ok();
        latch.set_low().ok();
    }
}

impl<P: OutputPin> PanelRegisters for SerialPanelBus<P> {
    fn set_enable(&mut self, mask: SegmentMask) {
        self.shift_out(mask.value() as u32, ENABLE_WIDTH);
        Self::pulse(&mut self.le_enable);
    }

    fn set_data(&mut self, value: u32) {
        self.shift_out(value, DATA_WIDTH);
        Self::pulse(&mut self.le_data);
    }

    fn set_address(&mut self, value: u16) {
        self.shift_out(value as u32, ADDRESS_WIDTH);
        Self::pulse(&mut self.le_address);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Line {
        Sdi,
        Sclk,
        LeEnable,
        LeData,
        LeAddress,
    }

    type Log = Rc<RefCell<Vec<(Line, bool)>>>;

    /// Records every level change, shared across all five pins
    struct RecPin {
        line: Line,
        log: Log,
    }

    impl embedded_hal::digital::ErrorType for RecPin {
        type Error = Infallible;
    }

    impl OutputPin for RecPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.line, false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.line, true));
            Ok(())
        }
    }

    fn bus_with_log() -> (SerialPanelBus<RecPin>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pin = |line| RecPin {
            line,
            log: Rc::clone(&log),
        };
        let bus = SerialPanelBus::new(
            pin(Line::Sdi),
            pin(Line::Sclk),
            pin(Line::LeEnable),
            pin(Line::LeData),
            pin(Line::LeAddress),
        );
        log.borrow_mut().clear(); // drop the resting-level writes
        (bus, log)
    }

    /// Replay the pin log into (latch line, shifted value, bit count)
    fn latched_words(log: &Log) -> Vec<(Line, u32, u32)> {
        let mut out = Vec::new();
        let mut sdi = false;
        let mut levels = [false; 5];
        let mut acc = 0u32;
        let mut bits = 0u32;

        for &(line, high) in log.borrow().iter() {
            let idx = line as usize;
            let rising = high && !levels[idx];
            levels[idx] = high;

            match line {
                Line::Sdi => sdi = high,
                Line::Sclk => {
                    if rising {
                        acc = (acc << 1) | sdi as u32;
                        bits += 1;
                    }
                }
                latch => {
                    if rising {
                        out.push((latch, acc, bits));
                        acc = 0;
                        bits = 0;
                    }
                }
            }
        }
        out
    }

    #[test]
    fn test_new_rests_all_lines_low() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let pin = |line| RecPin {
            line,
            log: Rc::clone(&log),
        };
        let _bus = SerialPanelBus::new(
            pin(Line::Sdi),
            pin(Line::Sclk),
            pin(Line::LeEnable),
            pin(Line::LeData),
            pin(Line::LeAddress),
        );

        let writes = log.borrow();
        assert_eq!(writes.len(), 5);
        assert!(writes.iter().all(|&(_, high)| !high));
    }

    #[test]
    fn test_data_write_shifts_24_bits_msb_first() {
        let (mut bus, log) = bus_with_log();
        bus.set_data(0x00BE_EF01);

        assert_eq!(latched_words(&log), [(Line::LeData, 0x00BE_EF01, 24)]);
    }

    #[test]
    fn test_enable_write_shifts_4_bits() {
        let (mut bus, log) = bus_with_log();
        bus.set_enable(SegmentMask::new(0xA));

        assert_eq!(latched_words(&log), [(Line::LeEnable, 0xA, 4)]);
    }

    #[test]
    fn test_address_write_shifts_14_bits() {
        let (mut bus, log) = bus_with_log();
        bus.set_address(0x2ABC);

        assert_eq!(latched_words(&log), [(Line::LeAddress, 0x2ABC, 14)]);
    }

    #[test]
    fn test_each_write_pulses_only_its_own_latch() {
        let (mut bus, log) = bus_with_log();
        bus.set_enable(SegmentMask::NONE);
        bus.set_data(0x010203);
        bus.set_address(7);

        let latches: Vec<Line> = latched_words(&log).iter().map(|&(l, _, _)| l).collect();
        assert_eq!(latches, [Line::LeEnable, Line::LeData, Line::LeAddress]);
    }
}
