//! Persistence view of the CPU.
//!
//! Field order is part of the format: serializers that write fields
//! positionally rely on it staying put.

use emu_core::Ticks;

use crate::cpu::{BusCycle, InterruptKind};
use crate::decode::Decoder;
use crate::registers::Registers;

/// Everything needed to resume execution exactly where it stopped,
/// including mid-instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Register file, including IFF1/IFF2, interrupt mode and HALT.
    pub registers: Registers,
    /// Fetch state machine position, table, prefix, opcode, displacement.
    pub decoder: Decoder,
    pub cycle: BusCycle,
    pub instruction_start: u16,
    pub servicing: Option<InterruptKind>,
    pub pending: Option<InterruptKind>,
    pub nmi_pending: bool,
    pub nmi_last: bool,
    pub ei_delay: bool,
    pub ack_data: u8,
    pub halt_forced: bool,
    pub total_ticks: Ticks,
}
