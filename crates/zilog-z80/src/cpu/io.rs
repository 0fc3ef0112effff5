//! Single-byte port I/O.

use emu_core::Bus;

use crate::flags::{CF, sz53p};
use crate::registers::word;

use super::Z80;

impl Z80 {
    /// `OUT (n),A`: A drives the high address byte.
    pub(super) fn out_n_a<B: Bus>(&mut self, bus: &mut B, n: u8) -> Option<u8> {
        let a = self.regs.a;
        bus.io_write(word(a, n), a);
        self.regs.wz = word(a, n.wrapping_add(1));
        None
    }

    /// `IN A,(n)`. Flags are unaffected.
    pub(super) fn in_a_n<B: Bus>(&mut self, bus: &mut B, n: u8) -> Option<u8> {
        let port = word(self.regs.a, n);
        self.regs.a = bus.io_read(port);
        self.regs.wz = port.wrapping_add(1);
        None
    }

    /// `IN r,(C)`. Code 6 is the undocumented `IN (C)`: flags only.
    pub(super) fn in_r_c<B: Bus>(&mut self, bus: &mut B, y: u8) -> Option<u8> {
        let port = self.regs.bc();
        let value = bus.io_read(port);
        if y != 6 {
            self.set_reg(y, value);
        }
        self.regs.f = sz53p(value) | (self.regs.f & CF);
        self.regs.wz = port.wrapping_add(1);
        None
    }

    /// `OUT (C),r`. Code 6 is the undocumented `OUT (C),0`, whose value
    /// depends on the silicon.
    pub(super) fn out_c_r<B: Bus>(&mut self, bus: &mut B, y: u8) -> Option<u8> {
        let port = self.regs.bc();
        let value = if y == 6 {
            self.config.variant.out_zero()
        } else {
            self.reg(y)
        };
        bus.io_write(port, value);
        self.regs.wz = port.wrapping_add(1);
        None
    }
}
