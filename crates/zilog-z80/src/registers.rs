//! Z80 register file.
//!
//! Every pair is stored as two independent bytes and composed on demand, so
//! the 8-bit and 16-bit views can never disagree.

/// Builds a 16-bit value from its halves.
#[must_use]
pub const fn word(hi: u8, lo: u8) -> u16 {
    (hi as u16) << 8 | lo as u16
}

/// Splits a 16-bit value into `(hi, lo)`.
#[must_use]
pub const fn split(value: u16) -> (u8, u8) {
    ((value >> 8) as u8, value as u8)
}

/// Z80 registers, also used as the snapshot handed to observers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    // Main registers
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,

    // Alternate registers
    pub a_alt: u8,
    pub f_alt: u8,
    pub b_alt: u8,
    pub c_alt: u8,
    pub d_alt: u8,
    pub e_alt: u8,
    pub h_alt: u8,
    pub l_alt: u8,

    // Index registers, also addressable as IXH/IXL/IYH/IYL
    pub ix: u16,
    pub iy: u16,

    // Other registers
    pub sp: u16,
    pub pc: u16,
    pub i: u8,
    /// Memory refresh. Low 7 bits count M1 cycles, bit 7 only changes on `LD R,A`.
    pub r: u8,

    /// WZ/MEMPTR - internal address latch.
    /// Only visible through the undocumented X/Y flags of later instructions.
    pub wz: u16,

    // Interrupt state
    pub iff1: bool,
    pub iff2: bool,
    pub im: u8,

    // Halt state
    pub halted: bool,
}

macro_rules! pair {
    ($get:ident, $set:ident, $hi:ident, $lo:ident) => {
        #[must_use]
        pub const fn $get(&self) -> u16 {
            word(self.$hi, self.$lo)
        }

        pub fn $set(&mut self, value: u16) {
            (self.$hi, self.$lo) = split(value);
        }
    };
}

macro_rules! half {
    ($get_hi:ident, $set_hi:ident, $get_lo:ident, $set_lo:ident, $reg:ident) => {
        #[must_use]
        pub const fn $get_hi(&self) -> u8 {
            (self.$reg >> 8) as u8
        }

        pub fn $set_hi(&mut self, value: u8) {
            self.$reg = (self.$reg & 0x00FF) | u16::from(value) << 8;
        }

        #[must_use]
        pub const fn $get_lo(&self) -> u8 {
            self.$reg as u8
        }

        pub fn $set_lo(&mut self, value: u8) {
            self.$reg = (self.$reg & 0xFF00) | u16::from(value);
        }
    };
}

impl Registers {
    pair!(af, set_af, a, f);
    pair!(bc, set_bc, b, c);
    pair!(de, set_de, d, e);
    pair!(hl, set_hl, h, l);
    pair!(af_alt, set_af_alt, a_alt, f_alt);
    pair!(bc_alt, set_bc_alt, b_alt, c_alt);
    pair!(de_alt, set_de_alt, d_alt, e_alt);
    pair!(hl_alt, set_hl_alt, h_alt, l_alt);

    half!(ixh, set_ixh, ixl, set_ixl, ix);
    half!(iyh, set_iyh, iyl, set_iyl, iy);

    /// `EX AF,AF'`
    pub fn ex_af(&mut self) {
        std::mem::swap(&mut self.a, &mut self.a_alt);
        std::mem::swap(&mut self.f, &mut self.f_alt);
    }

    /// `EXX` - swap BC, DE and HL with their shadows.
    pub fn exx(&mut self) {
        std::mem::swap(&mut self.b, &mut self.b_alt);
        std::mem::swap(&mut self.c, &mut self.c_alt);
        std::mem::swap(&mut self.d, &mut self.d_alt);
        std::mem::swap(&mut self.e, &mut self.e_alt);
        std::mem::swap(&mut self.h, &mut self.h_alt);
        std::mem::swap(&mut self.l, &mut self.l_alt);
    }

    /// Advance R after an M1 cycle. Bit 7 is preserved.
    pub fn inc_r(&mut self) {
        self.r = (self.r & 0x80) | (self.r.wrapping_add(1) & 0x7F);
    }

    /// Refresh address driven during T3/T4 of an M1 cycle.
    #[must_use]
    pub const fn ir(&self) -> u16 {
        word(self.i, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_and_halves_agree() {
        let mut regs = Registers::default();
        regs.set_hl(0x1234);
        assert_eq!((regs.h, regs.l), (0x12, 0x34));
        regs.l = 0xFF;
        assert_eq!(regs.hl(), 0x12FF);

        regs.ix = 0xABCD;
        regs.set_ixl(0x01);
        assert_eq!(regs.ix, 0xAB01);
        regs.set_ixh(0x99);
        assert_eq!((regs.ixh(), regs.ixl()), (0x99, 0x01));
    }

    #[test]
    fn r_wraps_within_low_seven_bits() {
        let mut regs = Registers { r: 0xFF, ..Registers::default() };
        regs.inc_r();
        assert_eq!(regs.r, 0x80);
        regs.r = 0x7F;
        regs.inc_r();
        assert_eq!(regs.r, 0x00);
    }

    #[test]
    fn exx_leaves_af_alone() {
        let mut regs = Registers::default();
        regs.set_af(0x1122);
        regs.set_bc(0x3344);
        regs.set_bc_alt(0x5566);
        regs.exx();
        assert_eq!(regs.bc(), 0x5566);
        assert_eq!(regs.bc_alt(), 0x3344);
        assert_eq!(regs.af(), 0x1122);
    }
}
