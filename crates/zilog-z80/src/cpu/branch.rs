//! Jumps, calls, returns and CPU control.
//!
//! Conditional forms return the not-taken cost; the table holds the taken
//! cost.

use emu_core::Bus;

use super::{ExecContext, Z80};

/// `IM` operand by opcode bits 5-3, undocumented mirrors included.
const INTERRUPT_MODES: [u8; 8] = [0, 0, 1, 2, 0, 0, 1, 2];

impl Z80 {
    pub(super) fn jp(&mut self, nn: u16) -> Option<u8> {
        self.regs.pc = nn;
        self.regs.wz = nn;
        None
    }

    /// `JP cc,nn` costs the same either way.
    pub(super) fn jp_cc(&mut self, cc: u8, nn: u16) -> Option<u8> {
        self.regs.wz = nn;
        if self.condition(cc) {
            self.regs.pc = nn;
        }
        None
    }

    pub(super) fn jr(&mut self, d: i8) -> Option<u8> {
        self.regs.pc = self.regs.pc.wrapping_add_signed(i16::from(d));
        self.regs.wz = self.regs.pc;
        None
    }

    pub(super) fn jr_cc(&mut self, cc: u8, d: i8) -> Option<u8> {
        if self.condition(cc) {
            self.jr(d)
        } else {
            Some(7)
        }
    }

    pub(super) fn djnz(&mut self, d: i8) -> Option<u8> {
        self.regs.b = self.regs.b.wrapping_sub(1);
        if self.regs.b == 0 {
            Some(8)
        } else {
            self.jr(d)
        }
    }

    /// `JP (HL)` and the IX/IY forms. WZ is untouched.
    pub(super) fn jp_hl(&mut self) -> Option<u8> {
        self.regs.pc = self.index();
        None
    }

    pub(super) fn call<B: Bus>(&mut self, bus: &mut B, nn: u16) -> Option<u8> {
        self.push(bus, self.regs.pc);
        self.regs.pc = nn;
        self.regs.wz = nn;
        None
    }

    pub(super) fn call_cc<B: Bus>(&mut self, bus: &mut B, cc: u8, nn: u16) -> Option<u8> {
        if self.condition(cc) {
            self.call(bus, nn)
        } else {
            self.regs.wz = nn;
            Some(10)
        }
    }

    pub(super) fn ret<B: Bus>(&mut self, bus: &mut B) -> Option<u8> {
        self.regs.pc = self.pop(bus);
        self.regs.wz = self.regs.pc;
        None
    }

    pub(super) fn ret_cc<B: Bus>(&mut self, bus: &mut B, cc: u8) -> Option<u8> {
        if self.condition(cc) {
            self.ret(bus)
        } else {
            Some(5)
        }
    }

    /// `RETN` and `RETI` both restore IFF1 from IFF2.
    pub(super) fn retn<B: Bus>(&mut self, bus: &mut B) -> Option<u8> {
        self.regs.iff1 = self.regs.iff2;
        self.ret(bus)
    }

    pub(super) fn rst<B: Bus>(&mut self, bus: &mut B, y: u8) -> Option<u8> {
        self.push(bus, self.regs.pc);
        self.regs.pc = u16::from(y) * 8;
        self.regs.wz = self.regs.pc;
        None
    }

    /// `HALT` re-executes until an interrupt or reset: PC stays on the
    /// opcode and M1 cycles keep running.
    ///
    /// A HALT forced onto the data bus in mode 0 has no opcode in memory,
    /// so PC stays at the return address instead.
    pub(super) fn halt(&mut self, ctx: ExecContext) -> Option<u8> {
        if !self.regs.halted {
            match ctx {
                ExecContext::Fetched => self.regs.pc = self.regs.pc.wrapping_sub(1),
                ExecContext::Forced { .. } => self.halt_forced = true,
            }
        }
        self.regs.halted = true;
        self.pins.halt.set(true);
        None
    }

    pub(super) fn di(&mut self) -> Option<u8> {
        self.regs.iff1 = false;
        self.regs.iff2 = false;
        None
    }

    pub(super) fn ei(&mut self) -> Option<u8> {
        self.regs.iff1 = true;
        self.regs.iff2 = true;
        self.ei_delay = true;
        None
    }

    pub(super) fn im(&mut self, y: u8) -> Option<u8> {
        self.regs.im = INTERRUPT_MODES[usize::from(y & 7)];
        None
    }
}
