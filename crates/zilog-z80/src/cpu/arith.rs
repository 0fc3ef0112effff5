//! 8- and 16-bit arithmetic, logic and flag instructions.

use emu_core::Bus;

use crate::alu;
use crate::flags::{CF, HF, NF, PF, SF, XF, YF, ZF};

use super::Z80;

impl Z80 {
    /// Apply accumulator operation `y` (ADD..CP). CP leaves A alone.
    fn accumulate(&mut self, y: u8, value: u8) {
        let result = alu::accumulate(y, self.regs.a, value, self.carry());
        if y & 7 != 7 {
            self.regs.a = result.value;
        }
        self.regs.f = result.flags;
    }

    pub(super) fn alu_r(&mut self, y: u8, z: u8) -> Option<u8> {
        let value = self.reg_indexed(z);
        self.accumulate(y, value);
        None
    }

    pub(super) fn alu_mem<B: Bus>(&mut self, bus: &mut B, y: u8, d: i8) -> Option<u8> {
        let address = self.memory_address(d);
        let value = bus.read(address);
        self.accumulate(y, value);
        None
    }

    pub(super) fn alu_n(&mut self, y: u8, n: u8) -> Option<u8> {
        self.accumulate(y, n);
        None
    }

    pub(super) fn inc_reg(&mut self, y: u8) -> Option<u8> {
        let result = alu::inc8(self.reg_indexed(y));
        self.set_reg_indexed(y, result.value);
        self.regs.f = result.flags | (self.regs.f & CF);
        None
    }

    pub(super) fn dec_reg(&mut self, y: u8) -> Option<u8> {
        let result = alu::dec8(self.reg_indexed(y));
        self.set_reg_indexed(y, result.value);
        self.regs.f = result.flags | (self.regs.f & CF);
        None
    }

    pub(super) fn inc_mem<B: Bus>(&mut self, bus: &mut B, d: i8) -> Option<u8> {
        let address = self.memory_address(d);
        let result = alu::inc8(bus.read(address));
        bus.write(address, result.value);
        self.regs.f = result.flags | (self.regs.f & CF);
        None
    }

    pub(super) fn dec_mem<B: Bus>(&mut self, bus: &mut B, d: i8) -> Option<u8> {
        let address = self.memory_address(d);
        let result = alu::dec8(bus.read(address));
        bus.write(address, result.value);
        self.regs.f = result.flags | (self.regs.f & CF);
        None
    }

    pub(super) fn inc_rp(&mut self, p: u8) -> Option<u8> {
        self.set_rp(p, self.rp(p).wrapping_add(1));
        None
    }

    pub(super) fn dec_rp(&mut self, p: u8) -> Option<u8> {
        self.set_rp(p, self.rp(p).wrapping_sub(1));
        None
    }

    /// `ADD HL,rr` and the IX/IY forms. S, Z and P/V are preserved.
    pub(super) fn add_hl_rp(&mut self, p: u8) -> Option<u8> {
        let target = self.index();
        let (value, flags) = alu::add16(target, self.rp(p));
        self.regs.wz = target.wrapping_add(1);
        self.set_index(value);
        self.regs.f = (self.regs.f & (SF | ZF | PF)) | flags;
        None
    }

    pub(super) fn adc_hl(&mut self, p: u8) -> Option<u8> {
        let hl = self.regs.hl();
        let (value, flags) = alu::adc16(hl, self.rp(p), self.carry());
        self.regs.wz = hl.wrapping_add(1);
        self.regs.set_hl(value);
        self.regs.f = flags;
        None
    }

    pub(super) fn sbc_hl(&mut self, p: u8) -> Option<u8> {
        let hl = self.regs.hl();
        let (value, flags) = alu::sbc16(hl, self.rp(p), self.carry());
        self.regs.wz = hl.wrapping_add(1);
        self.regs.set_hl(value);
        self.regs.f = flags;
        None
    }

    pub(super) fn daa(&mut self) -> Option<u8> {
        let result = alu::daa(self.regs.a, self.regs.f);
        self.regs.a = result.value;
        self.regs.f = result.flags;
        None
    }

    pub(super) fn cpl(&mut self) -> Option<u8> {
        self.regs.a = !self.regs.a;
        self.regs.f =
            (self.regs.f & (SF | ZF | PF | CF)) | HF | NF | (self.regs.a & (YF | XF));
        None
    }

    pub(super) fn neg(&mut self) -> Option<u8> {
        let result = alu::neg8(self.regs.a);
        self.regs.a = result.value;
        self.regs.f = result.flags;
        None
    }

    pub(super) fn scf(&mut self) -> Option<u8> {
        self.regs.f = (self.regs.f & (SF | ZF | PF)) | CF | (self.regs.a & (YF | XF));
        None
    }

    /// `CCF`: H takes the old carry.
    pub(super) fn ccf(&mut self) -> Option<u8> {
        let flipped = if self.carry() { HF } else { CF };
        self.regs.f = (self.regs.f & (SF | ZF | PF)) | flipped | (self.regs.a & (YF | XF));
        None
    }
}
