//! CPU core trait.

use crate::Bus;

/// Result of one CPU tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Wait this many cycles before the next tick.
    Cycles(u32),
    /// Halt sentinel: a break was requested or a breakpoint fired. The clock
    /// should stop driving the CPU until the monitor resumes it.
    Break,
}

/// A CPU core.
///
/// CPUs take the bus by reference on every tick so it can be shared with
/// other components (e.g., a video chip).
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// Fatal internal fault. Once returned the core is not resumable.
    type Fault;

    /// Advance the CPU by one sub-state step, or execute one instruction
    /// when the terminal sub-state is reached.
    fn tick<B: Bus>(&mut self, bus: &mut B) -> Result<Tick, Self::Fault>;

    /// Returns the current program counter.
    ///
    /// Returns `u32` to support all CPU address widths. Narrower CPUs
    /// zero-extend.
    fn pc(&self) -> u32;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Returns true if the CPU is halted.
    fn is_halted(&self) -> bool;

    /// Reset the CPU to its initial state.
    fn reset(&mut self);
}
