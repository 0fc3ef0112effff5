//! Interrupt acknowledge cycle and interrupt sampling.

use emu_core::{Bus, Tick};
use tracing::Level;

use crate::error::Fault;
use crate::registers::word;

use super::{BusCycle, ExecContext, Z80};

/// Fixed restart address for NMI.
const NMI_VECTOR: u16 = 0x0066;
/// Fixed restart address for mode 1.
const IM1_VECTOR: u16 = 0x0038;

/// Interrupt source being latched or serviced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterruptKind {
    Nmi,
    Int,
}

impl Z80 {
    /// Decide, at the end of an instruction, whether the next M1 becomes an
    /// acknowledge cycle. NMI wins over INT; INT stays asserted on its line
    /// and is picked up later.
    pub(super) fn sample_interrupts(&mut self) {
        if self.ei_delay {
            self.ei_delay = false;
            return;
        }
        if self.nmi_pending {
            self.nmi_pending = false;
            self.pending = Some(InterruptKind::Nmi);
        } else if self.regs.iff1 && self.pins.int.is_active() {
            self.pending = Some(InterruptKind::Int);
        }
    }

    /// One sub-state of the acknowledge cycle: T1, Tw1, Tw2, T3, T4.
    pub(super) fn interrupt_cycle<B: Bus>(
        &mut self,
        bus: &mut B,
        kind: InterruptKind,
    ) -> Result<Tick, Fault> {
        match self.cycle {
            BusCycle::T1 | BusCycle::T2 => {
                if self.regs.halted {
                    // Resume after the HALT.
                    if !self.halt_forced {
                        self.regs.pc = self.regs.pc.wrapping_add(1);
                    }
                    self.regs.halted = false;
                    self.halt_forced = false;
                    self.pins.halt.set(false);
                }
                self.pins.m1.set(true);
                self.cycle = BusCycle::Tw1;
                Ok(Tick::Cycles(1))
            }
            BusCycle::Tw1 => {
                if kind == InterruptKind::Int {
                    self.pins.iorq.set(true);
                }
                self.cycle = BusCycle::Tw2;
                Ok(Tick::Cycles(1))
            }
            BusCycle::Tw2 => {
                if !self.pins.wait {
                    if kind == InterruptKind::Int {
                        self.ack_data = bus.acknowledge();
                    }
                    self.cycle = BusCycle::T3;
                }
                Ok(Tick::Cycles(1))
            }
            BusCycle::T3 => {
                self.pins.iorq.set(false);
                self.pins.m1.set(false);
                self.regs.inc_r();
                self.pins.rfsh.set(true);
                bus.refresh(self.regs.ir());
                self.cycle = BusCycle::T4;
                Ok(Tick::Cycles(1))
            }
            BusCycle::T4 => {
                self.pins.rfsh.set(false);
                self.cycle = BusCycle::T1;
                self.servicing = None;
                let total = self.service(bus, kind)?;
                self.decoder.reset();
                self.sample_interrupts();
                Ok(Tick::Cycles(u32::from(total).saturating_sub(4)))
            }
        }
    }

    /// Perform the response and return its total T-states.
    fn service<B: Bus>(&mut self, bus: &mut B, kind: InterruptKind) -> Result<u8, Fault> {
        let pc = self.regs.pc;
        match kind {
            InterruptKind::Nmi => {
                self.trace(Level::DEBUG, format_args!("NMI at {pc:04X}"));
                self.regs.iff2 = self.regs.iff1;
                self.regs.iff1 = false;
                self.push(bus, pc);
                self.regs.pc = NMI_VECTOR;
                self.regs.wz = NMI_VECTOR;
                Ok(11)
            }
            InterruptKind::Int => {
                self.regs.iff1 = false;
                self.regs.iff2 = false;
                let data = self.ack_data;
                let mode = self.regs.im;
                self.trace(
                    Level::DEBUG,
                    format_args!("INT mode {mode} at {pc:04X}, data bus {data:02X}"),
                );
                match mode {
                    0 => {
                        // The device's opcode runs in place of a fetched one.
                        let cycles = self.execute(bus, ExecContext::Forced { opcode: data })?;
                        Ok(cycles + 2)
                    }
                    1 => {
                        self.push(bus, pc);
                        self.regs.pc = IM1_VECTOR;
                        self.regs.wz = IM1_VECTOR;
                        Ok(13)
                    }
                    _ => {
                        self.push(bus, pc);
                        let pointer = word(self.regs.i, data);
                        self.regs.pc = Self::read16(bus, pointer);
                        self.regs.wz = self.regs.pc;
                        Ok(19)
                    }
                }
            }
        }
    }
}
