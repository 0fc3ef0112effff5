//! ALU operations for the Z80.
//!
//! Every function is pure: operands in, result and flag byte out. Callers
//! decide which of the old flags survive.

use crate::flags::{CF, HF, NF, PF, SF, XF, YF, ZF, flag_if, sz53, sz53p};
use crate::registers::{split, word};

/// Result of an ALU operation with flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AluResult {
    pub value: u8,
    pub flags: u8,
}

/// Add two bytes with optional carry.
///
/// Sets S, Z, Y, X from the result, H on carry out of bit 3, P/V on signed
/// overflow and C on carry out of bit 7. N is cleared.
#[must_use]
pub fn add8(a: u8, b: u8, carry: bool) -> AluResult {
    let c = u8::from(carry);
    let wide = u16::from(a) + u16::from(b) + u16::from(c);
    let value = wide as u8;

    let half = (a & 0x0F) + (b & 0x0F) + c > 0x0F;
    // Both operands share a sign and the result's sign differs.
    let overflow = (a ^ b) & 0x80 == 0 && (a ^ value) & 0x80 != 0;

    AluResult {
        value,
        flags: sz53(value) | flag_if(half, HF) | flag_if(overflow, PF) | flag_if(wide > 0xFF, CF),
    }
}

/// Subtract with optional borrow.
///
/// Computed as `a + !b + !borrow`; carry and half-carry come out inverted
/// (a carry means "no borrow") and are complemented back. N is set.
#[must_use]
pub fn sub8(a: u8, b: u8, borrow: bool) -> AluResult {
    let sum = add8(a, !b, !borrow);
    AluResult {
        value: sum.value,
        flags: (sum.flags ^ (CF | HF)) | NF,
    }
}

/// Compare: subtract without storing. Y/X come from the operand.
#[must_use]
pub fn cp8(a: u8, b: u8) -> AluResult {
    let diff = sub8(a, b, false);
    AluResult {
        value: a,
        flags: (diff.flags & !(YF | XF)) | (b & (YF | XF)),
    }
}

#[must_use]
pub fn and8(a: u8, b: u8) -> AluResult {
    let value = a & b;
    AluResult { value, flags: sz53p(value) | HF }
}

#[must_use]
pub fn or8(a: u8, b: u8) -> AluResult {
    let value = a | b;
    AluResult { value, flags: sz53p(value) }
}

#[must_use]
pub fn xor8(a: u8, b: u8) -> AluResult {
    let value = a ^ b;
    AluResult { value, flags: sz53p(value) }
}

/// One of the eight accumulator operations selected by opcode bits 5-3:
/// ADD, ADC, SUB, SBC, AND, XOR, OR, CP.
#[must_use]
pub fn accumulate(op: u8, a: u8, b: u8, carry: bool) -> AluResult {
    match op & 7 {
        0 => add8(a, b, false),
        1 => add8(a, b, carry),
        2 => sub8(a, b, false),
        3 => sub8(a, b, carry),
        4 => and8(a, b),
        5 => xor8(a, b),
        6 => or8(a, b),
        _ => cp8(a, b),
    }
}

/// Increment. The caller keeps C.
#[must_use]
pub fn inc8(a: u8) -> AluResult {
    let value = a.wrapping_add(1);
    AluResult {
        value,
        flags: sz53(value) | flag_if(a & 0x0F == 0x0F, HF) | flag_if(a == 0x7F, PF),
    }
}

/// Decrement. The caller keeps C.
#[must_use]
pub fn dec8(a: u8) -> AluResult {
    let value = a.wrapping_sub(1);
    AluResult {
        value,
        flags: sz53(value) | NF | flag_if(a & 0x0F == 0x00, HF) | flag_if(a == 0x80, PF),
    }
}

/// Rotate/shift selected by opcode bits 5-3 of the bit-prefixed table:
/// RLC, RRC, RL, RR, SLA, SRA, SLL (undocumented), SRL.
///
/// Flags are S, Z, Y, X, P from the result plus C; H and N cleared.
#[must_use]
pub fn shift(op: u8, a: u8, carry: bool) -> AluResult {
    let c = u8::from(carry);
    let (value, out) = match op & 7 {
        0 => (a.rotate_left(1), a >> 7),
        1 => (a.rotate_right(1), a & 1),
        2 => ((a << 1) | c, a >> 7),
        3 => ((a >> 1) | (c << 7), a & 1),
        4 => (a << 1, a >> 7),
        5 => ((a >> 1) | (a & 0x80), a & 1),
        6 => ((a << 1) | 1, a >> 7),
        _ => (a >> 1, a & 1),
    };
    AluResult {
        value,
        flags: sz53p(value) | flag_if(out != 0, CF),
    }
}

/// Accumulator rotates (RLCA, RRCA, RLA, RRA) selected by opcode bits 4-3.
///
/// Only H, N, Y, X and C change; the caller keeps S, Z and P/V.
#[must_use]
pub fn rotate_a(op: u8, a: u8, carry: bool) -> AluResult {
    let full = shift(op & 3, a, carry);
    AluResult {
        value: full.value,
        flags: (full.value & (YF | XF)) | (full.flags & CF),
    }
}

/// 16-bit add for `ADD HL,rr` (and the IX/IY forms).
///
/// Staged as two byte adds so H lands on bit 11 and C on bit 15. Returns
/// only H, Y, X, C; the caller keeps S, Z and P/V.
#[must_use]
pub fn add16(a: u16, b: u16) -> (u16, u8) {
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let lo = add8(a_lo, b_lo, false);
    let hi = add8(a_hi, b_hi, lo.flags & CF != 0);
    (word(hi.value, lo.value), hi.flags & (HF | YF | XF | CF))
}

/// 16-bit add with carry for `ADC HL,rr`.
#[must_use]
pub fn adc16(a: u16, b: u16, carry: bool) -> (u16, u8) {
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let lo = add8(a_lo, b_lo, carry);
    let hi = add8(a_hi, b_hi, lo.flags & CF != 0);
    let value = word(hi.value, lo.value);
    (value, (hi.flags & !ZF) | flag_if(value == 0, ZF))
}

/// 16-bit subtract with borrow for `SBC HL,rr`.
#[must_use]
pub fn sbc16(a: u16, b: u16, borrow: bool) -> (u16, u8) {
    let (a_hi, a_lo) = split(a);
    let (b_hi, b_lo) = split(b);
    let lo = sub8(a_lo, b_lo, borrow);
    let hi = sub8(a_hi, b_hi, lo.flags & CF != 0);
    let value = word(hi.value, lo.value);
    (value, (hi.flags & !ZF) | flag_if(value == 0, ZF))
}

/// Decimal adjust after a BCD add or subtract. `f` supplies N, H and C.
#[must_use]
pub fn daa(a: u8, f: u8) -> AluResult {
    let subtract = f & NF != 0;
    let half = f & HF != 0;
    let mut carry = f & CF != 0;

    let mut correction = 0;
    if half || a & 0x0F > 9 {
        correction |= 0x06;
    }
    if carry || a > 0x99 {
        correction |= 0x60;
        carry = true;
    }

    let (value, half_out) = if subtract {
        (a.wrapping_sub(correction), half && a & 0x0F < 6)
    } else {
        (a.wrapping_add(correction), a & 0x0F > 9)
    };

    AluResult {
        value,
        flags: sz53p(value) | (f & NF) | flag_if(half_out, HF) | flag_if(carry, CF),
    }
}

/// Negate the accumulator (`0 - a`).
#[must_use]
pub fn neg8(a: u8) -> AluResult {
    sub8(0, a, false)
}

/// Test bit `n` of `value` for `BIT`. Y/X come from `xy_source`, which is
/// the operand for register forms and a latch byte for memory forms.
/// The caller keeps C.
#[must_use]
pub fn bit(n: u8, value: u8, xy_source: u8) -> u8 {
    let set = value & (1 << (n & 7));
    let mut flags = HF | (xy_source & (YF | XF));
    if set == 0 {
        flags |= ZF | PF;
    }
    flags | (set & SF)
}
