//! Cycle-accurate Zilog Z80 CPU core.
//!
//! Each call to `tick()` advances the current bus cycle by one sub-state
//! (T1, T2, T3, T4 and the acknowledge wait states). The terminal sub-state
//! of an instruction executes it and reports the remaining T-states, so a
//! clock that waits out every reported count stays cycle-exact.
//!
//! Decoding is table driven: six 256-entry tables, with prefix bytes as
//! gateway entries. The disassembler walks the same tables.

mod alu;
mod config;
mod cpu;
mod decode;
mod disasm;
mod error;
mod flags;
mod monitor;
mod pins;
mod registers;
mod snapshot;
mod trace;

pub use alu::AluResult;
pub use config::{ResetState, Variant, Z80Config};
pub use cpu::{BusCycle, InterruptKind, Z80};
pub use decode::{Decoder, Entry, FetchState, Op, Operand, Prefix, Table};
pub use disasm::{Line, disassemble, disassemble_one};
pub use error::{DecodeError, Dump, Fault};
pub use flags::{CF, HF, NF, PF, SF, XF, YF, ZF, parity};
pub use monitor::{BreakReason, BreakpointCallback, Monitor};
pub use pins::Pins;
pub use registers::Registers;
pub use snapshot::Snapshot;
pub use trace::{BufferLog, NullLog, TraceLog, TracingLog};

/// Pure ALU primitives, exposed for property tests and tooling.
pub mod ops {
    pub use crate::alu::{
        adc16, add8, add16, and8, cp8, daa, dec8, inc8, neg8, or8, sbc16, shift, sub8, xor8,
    };
}
