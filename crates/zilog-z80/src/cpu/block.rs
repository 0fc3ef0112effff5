//! Block transfer, compare and I/O: LDI/LDD, CPI/CPD, INI/IND, OUTI/OUTD
//! and their repeating forms.
//!
//! Opcode bit 3 selects decrement, bit 4 selects repeat. A repeating form
//! that has more work to do rewinds PC onto its own prefix so the next M1
//! fetches it again; the table cost is the looping one and the final pass
//! reports the shorter cost.

use emu_core::Bus;

use crate::alu;
use crate::flags::{CF, HF, NF, PF, SF, XF, YF, ZF, flag_if, parity, sz53};

use super::Z80;

/// Cost of a block instruction that does not loop back.
const SINGLE_PASS: u8 = 16;

fn decrements(opcode: u8) -> bool {
    opcode & 0x08 != 0
}

fn repeats(opcode: u8) -> bool {
    opcode & 0x10 != 0
}

/// Undocumented Y and X of LDI/CPI: bit 1 and bit 3 of `n`.
fn block_xy(n: u8) -> u8 {
    (n & XF) | ((n << 4) & YF)
}

impl Z80 {
    fn step_pointer(value: u16, down: bool) -> u16 {
        if down {
            value.wrapping_sub(1)
        } else {
            value.wrapping_add(1)
        }
    }

    /// Repeat the instruction if `again`, otherwise report the single-pass
    /// cost for repeating forms.
    fn block_repeat(&mut self, opcode: u8, again: bool) -> Option<u8> {
        if !repeats(opcode) {
            return None;
        }
        if again {
            self.regs.pc = self.regs.pc.wrapping_sub(2);
            self.regs.wz = self.regs.pc.wrapping_add(1);
            None
        } else {
            Some(SINGLE_PASS)
        }
    }

    /// `LDI`, `LDD`, `LDIR`, `LDDR`
    pub(super) fn block_ld<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Option<u8> {
        let down = decrements(opcode);
        let value = bus.read(self.regs.hl());
        bus.write(self.regs.de(), value);
        self.regs.set_hl(Self::step_pointer(self.regs.hl(), down));
        self.regs.set_de(Self::step_pointer(self.regs.de(), down));
        let bc = self.regs.bc().wrapping_sub(1);
        self.regs.set_bc(bc);

        let n = value.wrapping_add(self.regs.a);
        self.regs.f = (self.regs.f & (SF | ZF | CF)) | block_xy(n) | flag_if(bc != 0, PF);
        self.block_repeat(opcode, bc != 0)
    }

    /// `CPI`, `CPD`, `CPIR`, `CPDR`. Repeating forms stop on a match or when
    /// BC runs out.
    pub(super) fn block_cp<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Option<u8> {
        let down = decrements(opcode);
        let value = bus.read(self.regs.hl());
        let result = alu::sub8(self.regs.a, value, false);
        self.regs.set_hl(Self::step_pointer(self.regs.hl(), down));
        let bc = self.regs.bc().wrapping_sub(1);
        self.regs.set_bc(bc);
        self.regs.wz = Self::step_pointer(self.regs.wz, down);

        let n = result.value.wrapping_sub(u8::from(result.flags & HF != 0));
        self.regs.f = (result.flags & (SF | ZF | HF))
            | NF
            | (self.regs.f & CF)
            | block_xy(n)
            | flag_if(bc != 0, PF);
        let matched = result.value == 0;
        self.block_repeat(opcode, bc != 0 && !matched)
    }

    /// Flags shared by the block I/O group. `k` is the transferred byte plus
    /// the adjusted C (input) or the new L (output).
    fn block_io_flags(&mut self, value: u8, k: u16) {
        let b = self.regs.b;
        self.regs.f = sz53(b)
            | flag_if(value & 0x80 != 0, NF)
            | flag_if(k > 0xFF, HF | CF)
            | flag_if(parity(((k as u8) & 7) ^ b), PF);
    }

    /// `INI`, `IND`, `INIR`, `INDR`
    pub(super) fn block_in<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Option<u8> {
        let down = decrements(opcode);
        let port = self.regs.bc();
        self.regs.wz = Self::step_pointer(port, down);
        let value = bus.io_read(port);
        bus.write(self.regs.hl(), value);
        self.regs.b = self.regs.b.wrapping_sub(1);
        self.regs.set_hl(Self::step_pointer(self.regs.hl(), down));

        let c = if down {
            self.regs.c.wrapping_sub(1)
        } else {
            self.regs.c.wrapping_add(1)
        };
        self.block_io_flags(value, u16::from(value) + u16::from(c));
        self.block_repeat(opcode, self.regs.b != 0)
    }

    /// `OUTI`, `OUTD`, `OTIR`, `OTDR`. B is decremented before the port
    /// address goes out.
    pub(super) fn block_out<B: Bus>(&mut self, bus: &mut B, opcode: u8) -> Option<u8> {
        let down = decrements(opcode);
        let value = bus.read(self.regs.hl());
        self.regs.b = self.regs.b.wrapping_sub(1);
        let port = self.regs.bc();
        self.regs.wz = Self::step_pointer(port, down);
        bus.io_write(port, value);
        self.regs.set_hl(Self::step_pointer(self.regs.hl(), down));

        self.block_io_flags(value, u16::from(value) + u16::from(self.regs.l));
        self.block_repeat(opcode, self.regs.b != 0)
    }
}
