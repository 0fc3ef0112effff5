//! Loads and exchanges.

use emu_core::Bus;

use crate::flags::{CF, PF, flag_if, sz53};
use crate::registers::word;

use super::Z80;

impl Z80 {
    /// `LD rr,nn`
    pub(super) fn ld_rp_nn(&mut self, p: u8, nn: u16) -> Option<u8> {
        self.set_rp(p, nn);
        None
    }

    /// `LD (BC),A` / `LD (DE),A`
    pub(super) fn ld_rp_ind_a<B: Bus>(&mut self, bus: &mut B, p: u8) -> Option<u8> {
        let address = self.rp(p);
        bus.write(address, self.regs.a);
        self.regs.wz = word(self.regs.a, address.wrapping_add(1) as u8);
        None
    }

    /// `LD A,(BC)` / `LD A,(DE)`
    pub(super) fn ld_a_rp_ind<B: Bus>(&mut self, bus: &mut B, p: u8) -> Option<u8> {
        let address = self.rp(p);
        self.regs.a = bus.read(address);
        self.regs.wz = address.wrapping_add(1);
        None
    }

    /// `LD (nn),HL` and the IX/IY forms.
    pub(super) fn ld_nn_hl<B: Bus>(&mut self, bus: &mut B, nn: u16) -> Option<u8> {
        Self::write16(bus, nn, self.index());
        self.regs.wz = nn.wrapping_add(1);
        None
    }

    /// `LD HL,(nn)` and the IX/IY forms.
    pub(super) fn ld_hl_nn<B: Bus>(&mut self, bus: &mut B, nn: u16) -> Option<u8> {
        let value = Self::read16(bus, nn);
        self.set_index(value);
        self.regs.wz = nn.wrapping_add(1);
        None
    }

    /// `LD (nn),A`
    pub(super) fn ld_nn_a<B: Bus>(&mut self, bus: &mut B, nn: u16) -> Option<u8> {
        bus.write(nn, self.regs.a);
        self.regs.wz = word(self.regs.a, nn.wrapping_add(1) as u8);
        None
    }

    /// `LD A,(nn)`
    pub(super) fn ld_a_nn<B: Bus>(&mut self, bus: &mut B, nn: u16) -> Option<u8> {
        self.regs.a = bus.read(nn);
        self.regs.wz = nn.wrapping_add(1);
        None
    }

    /// `LD r,n`, including `LD IXH,n` and friends.
    pub(super) fn ld_r_n(&mut self, y: u8, n: u8) -> Option<u8> {
        self.set_reg_indexed(y, n);
        None
    }

    /// `LD (HL),n` / `LD (IX+d),n`
    pub(super) fn ld_mem_n<B: Bus>(&mut self, bus: &mut B, d: i8, n: u8) -> Option<u8> {
        let address = self.memory_address(d);
        bus.write(address, n);
        None
    }

    /// `LD r,r'`. Under an index prefix H and L name the index halves.
    pub(super) fn ld_r_r(&mut self, y: u8, z: u8) -> Option<u8> {
        let value = self.reg_indexed(z);
        self.set_reg_indexed(y, value);
        None
    }

    /// `LD r,(HL)` / `LD r,(IX+d)`. The destination is always a real
    /// register, even H or L under a prefix.
    pub(super) fn ld_r_mem<B: Bus>(&mut self, bus: &mut B, y: u8, d: i8) -> Option<u8> {
        let address = self.memory_address(d);
        let value = bus.read(address);
        self.set_reg(y, value);
        None
    }

    /// `LD (HL),r` / `LD (IX+d),r`
    pub(super) fn ld_mem_r<B: Bus>(&mut self, bus: &mut B, z: u8, d: i8) -> Option<u8> {
        let address = self.memory_address(d);
        bus.write(address, self.reg(z));
        None
    }

    pub(super) fn pop_rp<B: Bus>(&mut self, bus: &mut B, p: u8) -> Option<u8> {
        let value = self.pop(bus);
        self.set_rp2(p, value);
        None
    }

    pub(super) fn push_rp<B: Bus>(&mut self, bus: &mut B, p: u8) -> Option<u8> {
        let value = self.rp2(p);
        self.push(bus, value);
        None
    }

    pub(super) fn ex_af_af(&mut self) -> Option<u8> {
        self.regs.ex_af();
        None
    }

    pub(super) fn exx(&mut self) -> Option<u8> {
        self.regs.exx();
        None
    }

    /// `EX DE,HL`. Never affected by an index prefix.
    pub(super) fn ex_de_hl(&mut self) -> Option<u8> {
        let de = self.regs.de();
        self.regs.set_de(self.regs.hl());
        self.regs.set_hl(de);
        None
    }

    /// `EX (SP),HL` and the IX/IY forms.
    pub(super) fn ex_sp_hl<B: Bus>(&mut self, bus: &mut B) -> Option<u8> {
        let sp = self.regs.sp;
        let stacked = Self::read16(bus, sp);
        Self::write16(bus, sp, self.index());
        self.set_index(stacked);
        self.regs.wz = stacked;
        None
    }

    pub(super) fn ld_sp_hl(&mut self) -> Option<u8> {
        self.regs.sp = self.index();
        None
    }

    /// `LD (nn),rr` (ED form)
    pub(super) fn ld_nn_rp<B: Bus>(&mut self, bus: &mut B, p: u8, nn: u16) -> Option<u8> {
        Self::write16(bus, nn, self.rp(p));
        self.regs.wz = nn.wrapping_add(1);
        None
    }

    /// `LD rr,(nn)` (ED form)
    pub(super) fn ld_rp_nn_ind<B: Bus>(&mut self, bus: &mut B, p: u8, nn: u16) -> Option<u8> {
        let value = Self::read16(bus, nn);
        self.set_rp(p, value);
        self.regs.wz = nn.wrapping_add(1);
        None
    }

    pub(super) fn ld_i_a(&mut self) -> Option<u8> {
        self.regs.i = self.regs.a;
        None
    }

    /// `LD R,A` is the only way to change bit 7 of R.
    pub(super) fn ld_r_a(&mut self) -> Option<u8> {
        self.regs.r = self.regs.a;
        None
    }

    pub(super) fn ld_a_i(&mut self) -> Option<u8> {
        self.load_a_special(self.regs.i);
        None
    }

    pub(super) fn ld_a_r(&mut self) -> Option<u8> {
        self.load_a_special(self.regs.r);
        None
    }

    /// `LD A,I` / `LD A,R`: P/V reflects IFF2.
    fn load_a_special(&mut self, value: u8) {
        self.regs.a = value;
        self.regs.f = sz53(value) | flag_if(self.regs.iff2, PF) | (self.regs.f & CF);
    }
}
