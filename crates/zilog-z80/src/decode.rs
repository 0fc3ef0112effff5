//! Decode tables and the prefix-chasing fetch state machine.
//!
//! Six fixed 256-entry tables cover the whole instruction set. Prefix bytes
//! are gateway entries: they switch the table used for the next byte instead
//! of executing. The same [`Decoder`] drives both the CPU's M1 cycle and the
//! disassembler, so the two can never disagree about instruction boundaries.

mod bit;
mod index_bit;
mod ix;
mod iy;
mod main;
mod misc;

use std::fmt;

use crate::error::DecodeError;

/// Semantic handle for a table entry.
///
/// Variants name instruction shapes, not individual opcodes: the execute
/// dispatch recovers registers and conditions from the opcode bits and the
/// active index prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    // Unprefixed
    Nop,
    ExAfAf,
    Djnz,
    Jr,
    JrCc,
    LdRpNn,
    AddHlRp,
    LdRpIndA,
    LdARpInd,
    LdNnHl,
    LdNnA,
    LdHlNn,
    LdANn,
    IncRp,
    DecRp,
    IncR,
    DecR,
    IncMem,
    DecMem,
    LdRN,
    LdMemN,
    RotateA,
    Daa,
    Cpl,
    Scf,
    Ccf,
    Halt,
    LdRR,
    LdRMem,
    LdMemR,
    AluR,
    AluMem,
    AluN,
    RetCc,
    Pop,
    Ret,
    Exx,
    JpHl,
    LdSpHl,
    JpCc,
    Jp,
    OutNA,
    InAN,
    ExSpHl,
    ExDeHl,
    Di,
    Ei,
    CallCc,
    Push,
    Call,
    Rst,

    // CB
    Rot,
    RotMem,
    Bit,
    BitMem,
    Res,
    ResMem,
    Set,
    SetMem,

    // ED
    InRC,
    OutCR,
    SbcHl,
    AdcHl,
    LdNnRp,
    LdRpNnInd,
    Neg,
    Retn,
    Reti,
    Im,
    LdIA,
    LdRA,
    LdAI,
    LdAR,
    Rrd,
    Rld,
    BlockLd,
    BlockCp,
    BlockIn,
    BlockOut,
    NopEd,

    // DD CB / FD CB
    RotIdx,
    BitIdx,
    ResIdx,
    SetIdx,

    /// Prefix byte: switch tables.
    Prefix,
    /// Index-table slot the prefix has no effect on. The prefix is voided
    /// and the byte runs from the main table.
    Unprefixed,
}

/// Operand bytes an instruction reads after its opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Implied,
    /// 8-bit immediate.
    Byte,
    /// 16-bit immediate, little-endian.
    Word,
    /// Signed branch offset relative to the next instruction.
    Relative,
    /// Signed index displacement.
    Index,
    /// Index displacement followed by an 8-bit immediate.
    IndexByte,
    /// Displacement captured *before* the opcode (`DD CB d op`).
    Inverted,
    /// Not an instruction: switches the decode table.
    Gateway,
}

/// One decode-table slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Disassembly template. `{n}`, `{nn}`, `{e}` and `{d}` are replaced by
    /// operand text.
    pub template: &'static str,
    pub op: Op,
    pub operand: Operand,
    /// T-states for the whole instruction, prefix fetches included. For
    /// conditional and repeating instructions this is the taken cost.
    pub cycles: u8,
    /// Bytes including prefixes.
    pub length: u8,
}

impl Entry {
    const fn new(template: &'static str, op: Op, operand: Operand, cycles: u8, length: u8) -> Self {
        Self {
            template,
            op,
            operand,
            cycles,
            length,
        }
    }
}

/// The six decode tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Table {
    #[default]
    Main,
    Bit,
    Misc,
    Ix,
    Iy,
    IndexBit,
}

impl Table {
    #[must_use]
    pub fn entry(self, opcode: u8) -> &'static Entry {
        let table = match self {
            Self::Main => &main::MAIN,
            Self::Bit => &bit::BIT,
            Self::Misc => &misc::MISC,
            Self::Ix => &ix::IX,
            Self::Iy => &iy::IY,
            Self::IndexBit => &index_bit::INDEX_BIT,
        };
        &table[opcode as usize]
    }

    /// M1 cycles an instruction from this table spends on its own bytes.
    /// The displacement and opcode of `DD CB d op` are ordinary reads.
    #[must_use]
    pub const fn m1_fetches(self) -> u8 {
        match self {
            Self::Main => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Main => "main",
            Self::Bit => "CB",
            Self::Misc => "ED",
            Self::Ix => "DD",
            Self::Iy => "FD",
            Self::IndexBit => "xxCB",
        };
        f.write_str(name)
    }
}

/// Active index prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prefix {
    #[default]
    None,
    Ix,
    Iy,
}

/// Position of the fetch state machine within an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FetchState {
    #[default]
    Init,
    /// `DD` seen.
    Ix,
    /// `FD` seen.
    Iy,
    /// `DD CB` seen: next byte is the displacement.
    IxBit,
    /// `FD CB` seen: next byte is the displacement.
    IyBit,
    /// Opcode known; ready to execute.
    Ready,
}

impl fmt::Display for FetchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Ix => "ix",
            Self::Iy => "iy",
            Self::IxBit => "ix-bit",
            Self::IyBit => "iy-bit",
            Self::Ready => "ready",
        };
        f.write_str(name)
    }
}

/// Prefix-chasing decoder. Fed one byte at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decoder {
    pub state: FetchState,
    /// Table the next byte (or the ready opcode) is looked up in.
    pub table: Table,
    pub prefix: Prefix,
    pub opcode: u8,
    /// Displacement captured ahead of the opcode in `DD CB d op`.
    pub displacement: u8,
}

impl Decoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the instruction boundary.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == FetchState::Ready
    }

    /// True after `DD CB` / `FD CB`: displacement and opcode follow as
    /// ordinary reads.
    #[must_use]
    pub fn awaits_displacement(&self) -> bool {
        matches!(self.state, FetchState::IxBit | FetchState::IyBit)
    }

    /// Entry for the decoded opcode. Only meaningful once ready.
    #[must_use]
    pub fn entry(&self) -> &'static Entry {
        self.table.entry(self.opcode)
    }

    /// Advance on one byte fetched from the instruction stream.
    pub fn feed(&mut self, byte: u8) -> Result<(), DecodeError> {
        match self.state {
            FetchState::Ready => Err(DecodeError::AlreadyDecoded { opcode: self.opcode }),
            FetchState::IxBit | FetchState::IyBit => {
                self.displacement = byte;
                self.state = FetchState::Ready;
                Ok(())
            }
            FetchState::Init | FetchState::Ix | FetchState::Iy => {
                let entry = self.table.entry(byte);
                match entry.op {
                    Op::Prefix => self.chase(byte),
                    Op::Unprefixed => {
                        self.table = Table::Main;
                        self.prefix = Prefix::None;
                        self.ready(byte);
                        Ok(())
                    }
                    _ => {
                        self.ready(byte);
                        Ok(())
                    }
                }
            }
        }
    }

    /// Opcode byte of `DD CB d op`, read after the displacement.
    pub fn set_index_opcode(&mut self, byte: u8) {
        self.opcode = byte;
    }

    fn ready(&mut self, opcode: u8) {
        self.opcode = opcode;
        self.state = FetchState::Ready;
    }

    fn chase(&mut self, byte: u8) -> Result<(), DecodeError> {
        let index = matches!(self.table, Table::Ix | Table::Iy);
        if !index && self.table != Table::Main {
            return Err(DecodeError::MisplacedGateway {
                table: self.table,
                opcode: byte,
            });
        }

        match byte {
            0xCB if index => {
                self.state = if self.prefix == Prefix::Iy {
                    FetchState::IyBit
                } else {
                    FetchState::IxBit
                };
                self.table = Table::IndexBit;
            }
            0xCB => self.table = Table::Bit,
            // A misc prefix after an index prefix voids the index prefix.
            0xED => {
                self.state = FetchState::Init;
                self.table = Table::Misc;
                self.prefix = Prefix::None;
            }
            // A repeated or alternate index prefix replaces the earlier one.
            0xDD => {
                self.state = FetchState::Ix;
                self.table = Table::Ix;
                self.prefix = Prefix::Ix;
            }
            0xFD => {
                self.state = FetchState::Iy;
                self.table = Table::Iy;
                self.prefix = Prefix::Iy;
            }
            _ => {
                return Err(DecodeError::MisplacedGateway {
                    table: self.table,
                    opcode: byte,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(bytes: &[u8]) -> Decoder {
        let mut decoder = Decoder::new();
        let mut iter = bytes.iter();
        while !decoder.is_ready() {
            let byte = *iter.next().expect("ran out of bytes");
            decoder.feed(byte).expect("decode failed");
        }
        if decoder.table == Table::IndexBit {
            decoder.set_index_opcode(*iter.next().expect("missing opcode"));
        }
        decoder
    }

    #[test]
    fn every_table_is_fully_populated() {
        for table in [
            Table::Main,
            Table::Bit,
            Table::Misc,
            Table::Ix,
            Table::Iy,
            Table::IndexBit,
        ] {
            for opcode in 0..=255u8 {
                let entry = table.entry(opcode);
                if entry.operand == Operand::Gateway {
                    assert!(matches!(opcode, 0xCB | 0xDD | 0xED | 0xFD), "{table} {opcode:02X}");
                    continue;
                }
                assert!(!entry.template.is_empty(), "{table} {opcode:02X}");
                assert!(entry.length >= 1 && entry.length <= 4);
                assert!(
                    u32::from(entry.cycles) >= 4 * u32::from(table.m1_fetches()),
                    "{table} {opcode:02X} too fast"
                );
            }
        }
    }

    #[test]
    fn prefix_transitions() {
        let d = decode(&[0xCB, 0x47]);
        assert_eq!((d.table, d.opcode, d.prefix), (Table::Bit, 0x47, Prefix::None));

        let d = decode(&[0xED, 0xB0]);
        assert_eq!(d.entry().template, "LDIR");

        let d = decode(&[0xDD, 0x21]);
        assert_eq!((d.table, d.prefix), (Table::Ix, Prefix::Ix));

        let d = decode(&[0xFD, 0xCB, 0x05, 0x46]);
        assert_eq!((d.table, d.prefix), (Table::IndexBit, Prefix::Iy));
        assert_eq!((d.displacement, d.opcode), (0x05, 0x46));
    }

    #[test]
    fn duplicate_prefixes_void_the_earlier_one() {
        let d = decode(&[0xDD, 0xFD, 0x21]);
        assert_eq!(d.prefix, Prefix::Iy);
        assert_eq!(d.entry().template, "LD IY,{nn}");

        let d = decode(&[0xDD, 0xED, 0x44]);
        assert_eq!((d.table, d.prefix), (Table::Misc, Prefix::None));

        // DD before an opcode that ignores it runs the plain instruction.
        let d = decode(&[0xDD, 0x00]);
        assert_eq!((d.table, d.prefix, d.opcode), (Table::Main, Prefix::None, 0x00));
    }

    #[test]
    fn feeding_a_ready_decoder_is_an_error() {
        let mut d = decode(&[0x00]);
        assert!(d.feed(0x00).is_err());
        d.reset();
        assert_eq!(d.state, FetchState::Init);
    }
}
