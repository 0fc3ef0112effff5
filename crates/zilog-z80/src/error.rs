//! Fatal internal faults.
//!
//! Guest code can never cause these: every opcode sequence the silicon
//! accepts decodes to something. A fault means the decode tables or the
//! core itself are inconsistent, and the session cannot continue.

use std::fmt;

use thiserror::Error;

use crate::decode::Table;
use crate::registers::Registers;

/// Decode-level inconsistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("gateway entry {opcode:02X} in the {table} table")]
    MisplacedGateway { table: Table, opcode: u8 },
    #[error("decoder fed again after opcode {opcode:02X} was decoded")]
    AlreadyDecoded { opcode: u8 },
}

/// Register dump attached to every fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dump {
    pub registers: Registers,
    /// Disassembly of the instruction at the faulting address.
    pub instruction: String,
}

impl fmt::Display for Dump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.registers;
        writeln!(f, "at {:04X}: {}", r.pc, self.instruction)?;
        writeln!(
            f,
            "AF={:04X} BC={:04X} DE={:04X} HL={:04X} IX={:04X} IY={:04X}",
            r.af(),
            r.bc(),
            r.de(),
            r.hl(),
            r.ix,
            r.iy
        )?;
        writeln!(
            f,
            "AF'={:04X} BC'={:04X} DE'={:04X} HL'={:04X}",
            r.af_alt(),
            r.bc_alt(),
            r.de_alt(),
            r.hl_alt()
        )?;
        write!(
            f,
            "SP={:04X} PC={:04X} I={:02X} R={:02X} WZ={:04X} IFF1={} IFF2={} IM={} HALT={}",
            r.sp,
            r.pc,
            r.i,
            r.r,
            r.wz,
            u8::from(r.iff1),
            u8::from(r.iff2),
            r.im,
            u8::from(r.halted)
        )
    }
}

/// Fatal fault returned by `tick()`. The core is terminal afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("empty decode entry {opcode:02X} in the {table} table\n{dump}")]
    EmptyEntry {
        table: Table,
        opcode: u8,
        dump: Box<Dump>,
    },
    #[error("{source}\n{dump}")]
    MisplacedGateway {
        source: DecodeError,
        dump: Box<Dump>,
    },
    #[error("forced opcode {opcode:02X} needs operand bytes\n{dump}")]
    ForcedOperand { opcode: u8, dump: Box<Dump> },
    #[error("CPU halted by an earlier fault")]
    Terminated,
}

impl Fault {
    /// Register dump, if the fault carries one.
    #[must_use]
    pub fn dump(&self) -> Option<&Dump> {
        match self {
            Self::EmptyEntry { dump, .. }
            | Self::MisplacedGateway { dump, .. }
            | Self::ForcedOperand { dump, .. } => Some(dump),
            Self::Terminated => None,
        }
    }
}
