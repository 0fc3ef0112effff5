//! Rotates, shifts, single-bit operations and nibble rotates.

use emu_core::Bus;

use crate::alu;
use crate::flags::{CF, PF, SF, ZF, sz53p};

use super::Z80;

impl Z80 {
    /// `RLCA`, `RRCA`, `RLA`, `RRA`
    pub(super) fn rotate_a(&mut self, y: u8) -> Option<u8> {
        let result = alu::rotate_a(y, self.regs.a, self.carry());
        self.regs.a = result.value;
        self.regs.f = (self.regs.f & (SF | ZF | PF)) | result.flags;
        None
    }

    pub(super) fn rot(&mut self, y: u8, z: u8) -> Option<u8> {
        let result = alu::shift(y, self.reg(z), self.carry());
        self.set_reg(z, result.value);
        self.regs.f = result.flags;
        None
    }

    pub(super) fn rot_mem<B: Bus>(&mut self, bus: &mut B, y: u8) -> Option<u8> {
        let address = self.regs.hl();
        let result = alu::shift(y, bus.read(address), self.carry());
        bus.write(address, result.value);
        self.regs.f = result.flags;
        None
    }

    pub(super) fn bit(&mut self, y: u8, z: u8) -> Option<u8> {
        let value = self.reg(z);
        self.regs.f = alu::bit(y, value, value) | (self.regs.f & CF);
        None
    }

    /// `BIT n,(HL)`: Y and X leak from the high byte of WZ.
    pub(super) fn bit_mem<B: Bus>(&mut self, bus: &mut B, y: u8) -> Option<u8> {
        let value = bus.read(self.regs.hl());
        let latch = (self.regs.wz >> 8) as u8;
        self.regs.f = alu::bit(y, value, latch) | (self.regs.f & CF);
        None
    }

    pub(super) fn res(&mut self, y: u8, z: u8) -> Option<u8> {
        self.set_reg(z, self.reg(z) & !(1 << y));
        None
    }

    pub(super) fn res_mem<B: Bus>(&mut self, bus: &mut B, y: u8) -> Option<u8> {
        let address = self.regs.hl();
        let value = bus.read(address) & !(1 << y);
        bus.write(address, value);
        None
    }

    pub(super) fn set(&mut self, y: u8, z: u8) -> Option<u8> {
        self.set_reg(z, self.reg(z) | (1 << y));
        None
    }

    pub(super) fn set_mem<B: Bus>(&mut self, bus: &mut B, y: u8) -> Option<u8> {
        let address = self.regs.hl();
        let value = bus.read(address) | (1 << y);
        bus.write(address, value);
        None
    }

    /// Write back the result of an indexed bit operation. Unless `z` names
    /// the memory operand, the result is also copied into that register
    /// (undocumented `RLC (IX+d),B` and friends).
    fn store_indexed<B: Bus>(&mut self, bus: &mut B, address: u16, z: u8, value: u8) {
        bus.write(address, value);
        if z != 6 {
            self.set_reg(z, value);
        }
    }

    pub(super) fn rot_idx<B: Bus>(&mut self, bus: &mut B, y: u8, z: u8, d: i8) -> Option<u8> {
        let address = self.memory_address(d);
        let result = alu::shift(y, bus.read(address), self.carry());
        self.store_indexed(bus, address, z, result.value);
        self.regs.f = result.flags;
        None
    }

    /// `BIT n,(IX+d)`: Y and X come from the high byte of the effective
    /// address, which is what WZ holds at this point.
    pub(super) fn bit_idx<B: Bus>(&mut self, bus: &mut B, y: u8, d: i8) -> Option<u8> {
        let address = self.memory_address(d);
        let value = bus.read(address);
        self.regs.f = alu::bit(y, value, (address >> 8) as u8) | (self.regs.f & CF);
        None
    }

    pub(super) fn res_idx<B: Bus>(&mut self, bus: &mut B, y: u8, z: u8, d: i8) -> Option<u8> {
        let address = self.memory_address(d);
        let value = bus.read(address) & !(1 << y);
        self.store_indexed(bus, address, z, value);
        None
    }

    pub(super) fn set_idx<B: Bus>(&mut self, bus: &mut B, y: u8, z: u8, d: i8) -> Option<u8> {
        let address = self.memory_address(d);
        let value = bus.read(address) | (1 << y);
        self.store_indexed(bus, address, z, value);
        None
    }

    /// `RRD`: rotate the low nibbles of A and (HL) right by one nibble.
    pub(super) fn rrd<B: Bus>(&mut self, bus: &mut B) -> Option<u8> {
        let address = self.regs.hl();
        let mem = bus.read(address);
        let a = self.regs.a;
        bus.write(address, (a << 4) | (mem >> 4));
        self.regs.a = (a & 0xF0) | (mem & 0x0F);
        self.regs.wz = address.wrapping_add(1);
        self.regs.f = sz53p(self.regs.a) | (self.regs.f & CF);
        None
    }

    /// `RLD`: rotate the low nibbles of A and (HL) left by one nibble.
    pub(super) fn rld<B: Bus>(&mut self, bus: &mut B) -> Option<u8> {
        let address = self.regs.hl();
        let mem = bus.read(address);
        let a = self.regs.a;
        bus.write(address, (mem << 4) | (a & 0x0F));
        self.regs.a = (a & 0xF0) | (mem >> 4);
        self.regs.wz = address.wrapping_add(1);
        self.regs.f = sz53p(self.regs.a) | (self.regs.f & CF);
        None
    }
}
