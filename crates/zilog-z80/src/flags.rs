//! Z80 flag register bits.

/// Sign flag (bit 7) - set if result is negative.
pub const SF: u8 = 0b1000_0000;

/// Zero flag (bit 6) - set if result is zero.
pub const ZF: u8 = 0b0100_0000;

/// Undocumented flag (bit 5) - usually bit 5 of the result.
pub const YF: u8 = 0b0010_0000;

/// Half-carry flag (bit 4) - carry from bit 3 to bit 4.
pub const HF: u8 = 0b0001_0000;

/// Undocumented flag (bit 3) - usually bit 3 of the result.
pub const XF: u8 = 0b0000_1000;

/// Parity/Overflow flag (bit 2) - parity or overflow depending on instruction.
pub const PF: u8 = 0b0000_0100;

/// Add/Subtract flag (bit 1) - set if last operation was subtraction.
pub const NF: u8 = 0b0000_0010;

/// Carry flag (bit 0) - carry out of bit 7.
pub const CF: u8 = 0b0000_0001;

/// Even parity of a byte (true if an even number of bits are set).
#[must_use]
pub const fn parity(value: u8) -> bool {
    value.count_ones().is_multiple_of(2)
}

/// Sign, zero and the undocumented Y/X bits of a result.
#[must_use]
pub const fn sz53(value: u8) -> u8 {
    let mut f = value & (SF | YF | XF);
    if value == 0 {
        f |= ZF;
    }
    f
}

/// [`sz53`] plus even parity in P/V, as used by logic and rotate results.
#[must_use]
pub const fn sz53p(value: u8) -> u8 {
    let mut f = sz53(value);
    if parity(value) {
        f |= PF;
    }
    f
}

/// Set `bit` in `f` when `cond` holds.
#[must_use]
pub const fn flag_if(cond: bool, bit: u8) -> u8 {
    if cond { bit } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parity_matches_bit_count_for_every_byte() {
        for v in 0..=255u8 {
            let mut ones = 0;
            for bit in 0..8 {
                ones += (v >> bit) & 1;
            }
            assert_eq!(parity(v), ones % 2 == 0, "value {v:#04X}");
        }
    }

    #[test]
    fn sz53p_of_zero() {
        assert_eq!(sz53p(0), ZF | PF);
        assert_eq!(sz53p(0xA8), SF | YF | XF);
    }
}
