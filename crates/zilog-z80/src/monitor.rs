//! Debugger hooks: breakpoints, break requests and single stepping.
//!
//! Everything here is consulted only at instruction boundaries (T1 of the
//! first M1 cycle), so a break never splits an instruction.

use std::collections::HashMap;
use std::fmt;

use crate::registers::Registers;

/// Called when PC reaches a breakpoint address. Returning `true` stops the
/// CPU; `false` lets it continue (conditional breakpoints, counters).
pub type BreakpointCallback = Box<dyn FnMut(&Registers) -> bool>;

/// Why the CPU stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakReason {
    Requested,
    Step,
    Breakpoint(u16),
}

impl fmt::Display for BreakReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Requested => f.write_str("break requested"),
            Self::Step => f.write_str("single step"),
            Self::Breakpoint(address) => write!(f, "breakpoint at {address:04X}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Step {
    #[default]
    Off,
    /// Let the next instruction start.
    Armed,
    /// One instruction started; stop at the next boundary.
    Running,
}

#[derive(Default)]
pub struct Monitor {
    breakpoints: HashMap<u16, BreakpointCallback>,
    break_requested: bool,
    step: Step,
    /// Address the CPU last stopped at. Resuming there must not re-trigger
    /// the same breakpoint.
    resume_at: Option<u16>,
}

impl Monitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a breakpoint, replacing any existing one at `address`.
    pub fn add_breakpoint(
        &mut self,
        address: u16,
        callback: impl FnMut(&Registers) -> bool + 'static,
    ) {
        self.breakpoints.insert(address, Box::new(callback));
    }

    /// Returns true if a breakpoint was removed.
    pub fn remove_breakpoint(&mut self, address: u16) -> bool {
        self.breakpoints.remove(&address).is_some()
    }

    #[must_use]
    pub fn has_breakpoint(&self, address: u16) -> bool {
        self.breakpoints.contains_key(&address)
    }

    /// Breakpoint addresses in ascending order.
    #[must_use]
    pub fn breakpoints(&self) -> Vec<u16> {
        let mut addresses: Vec<u16> = self.breakpoints.keys().copied().collect();
        addresses.sort_unstable();
        addresses
    }

    pub fn clear_breakpoints(&mut self) {
        self.breakpoints.clear();
    }

    /// Stop at the next instruction boundary.
    pub fn request_break(&mut self) {
        self.break_requested = true;
    }

    /// Run exactly one instruction, then stop.
    pub fn request_step(&mut self) {
        self.step = Step::Armed;
    }

    /// Consulted at every instruction boundary.
    pub(crate) fn check(&mut self, regs: &Registers) -> Option<BreakReason> {
        let pc = regs.pc;
        let resuming = self.resume_at.take() == Some(pc);

        let reason = if self.break_requested {
            self.break_requested = false;
            Some(BreakReason::Requested)
        } else {
            match self.step {
                Step::Armed => {
                    self.step = Step::Running;
                    None
                }
                Step::Running => {
                    self.step = Step::Off;
                    Some(BreakReason::Step)
                }
                Step::Off => None,
            }
        };

        let reason = reason.or_else(|| {
            if resuming || self.step == Step::Running {
                return None;
            }
            let callback = self.breakpoints.get_mut(&pc)?;
            callback(regs).then_some(BreakReason::Breakpoint(pc))
        });

        if reason.is_some() {
            self.resume_at = Some(pc);
        }
        reason
    }
}

impl fmt::Debug for Monitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monitor")
            .field("breakpoints", &self.breakpoints())
            .field("break_requested", &self.break_requested)
            .field("step", &self.step)
            .finish_non_exhaustive()
    }
}
