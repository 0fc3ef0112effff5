//! Z80 CPU core driven one bus sub-state per tick.

#![allow(clippy::cast_possible_truncation)] // Intentional truncation for low byte extraction.
#![allow(clippy::cast_possible_wrap)] // Intentional i8 casts for displacements.

mod arith;
mod bits;
mod block;
mod branch;
mod execute;
mod interrupt;
mod io;
mod load;

use std::fmt;

use emu_core::{Bus, Cpu, Observable, Tick, Ticks, Value};
use tracing::Level;

use crate::config::Z80Config;
use crate::decode::{Decoder, Prefix};
use crate::disasm;
use crate::error::{DecodeError, Dump, Fault};
use crate::flags::{CF, HF, NF, PF, SF, XF, YF, ZF};
use crate::monitor::Monitor;
use crate::pins::Pins;
use crate::registers::{Registers, split, word};
use crate::snapshot::Snapshot;
use crate::trace::{TraceLog, TracingLog};

pub(crate) use execute::ExecContext;
pub use interrupt::InterruptKind;

/// Sub-state of the current bus cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusCycle {
    #[default]
    T1,
    T2,
    /// First wait state of an interrupt acknowledge.
    Tw1,
    /// Second wait state; the device drives the data bus here.
    Tw2,
    T3,
    T4,
}

impl fmt::Display for BusCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::T1 => "T1",
            Self::T2 => "T2",
            Self::Tw1 => "Tw1",
            Self::Tw2 => "Tw2",
            Self::T3 => "T3",
            Self::T4 => "T4",
        };
        f.write_str(name)
    }
}

/// Z80 CPU.
///
/// The CPU does not own the bus. Instead, the bus is passed to `tick()` on
/// each call. This allows the bus to be shared with other components that
/// may also need bus access.
pub struct Z80 {
    pub(crate) regs: Registers,
    pub(crate) config: Z80Config,
    pub(crate) pins: Pins,

    // === Instruction decode state ===
    pub(crate) decoder: Decoder,
    cycle: BusCycle,
    /// Address of the instruction being fetched or executed.
    instruction_start: u16,

    // === Interrupt state ===
    /// Latched at the end of an instruction; serviced at the next M1.
    pending: Option<InterruptKind>,
    /// Interrupt acknowledge cycle in progress.
    servicing: Option<InterruptKind>,
    /// Set by a rising edge on the NMI line.
    nmi_pending: bool,
    /// NMI line level at the previous tick.
    nmi_last: bool,
    /// `EI` just executed: skip interrupt sampling once.
    ei_delay: bool,
    /// Data bus value captured during the acknowledge cycle.
    ack_data: u8,
    /// Halted by a mode 0 HALT: PC already holds the return address.
    halt_forced: bool,

    // === Session ===
    monitor: Monitor,
    log: Box<dyn TraceLog>,
    in_reset: bool,
    faulted: bool,
    total_ticks: Ticks,
}

impl Z80 {
    /// Create a new Z80 logging through `tracing`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Z80Config::default(), Box::new(TracingLog))
    }

    #[must_use]
    pub fn with_config(config: Z80Config, log: Box<dyn TraceLog>) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            config,
            pins: Pins::default(),
            decoder: Decoder::new(),
            cycle: BusCycle::T1,
            instruction_start: 0,
            pending: None,
            servicing: None,
            nmi_pending: false,
            nmi_last: false,
            ei_delay: false,
            ack_data: 0xFF,
            halt_forced: false,
            monitor: Monitor::new(),
            log,
            in_reset: false,
            faulted: false,
            total_ticks: Ticks::ZERO,
        };
        cpu.apply_reset();
        cpu
    }

    #[must_use]
    pub fn config(&self) -> &Z80Config {
        &self.config
    }

    /// Replace the trace logger.
    pub fn set_log(&mut self, log: Box<dyn TraceLog>) {
        self.log = log;
    }

    /// Total T-states elapsed since creation.
    #[must_use]
    pub const fn total_ticks(&self) -> Ticks {
        self.total_ticks
    }

    /// Register file for editing (monitor register writes).
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.regs
    }

    #[must_use]
    pub fn pins(&self) -> &Pins {
        &self.pins
    }

    pub fn pins_mut(&mut self) -> &mut Pins {
        &mut self.pins
    }

    #[must_use]
    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    pub fn monitor_mut(&mut self) -> &mut Monitor {
        &mut self.monitor
    }

    #[must_use]
    pub fn bus_cycle(&self) -> BusCycle {
        self.cycle
    }

    #[must_use]
    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// True between instructions: no prefix consumed, no acknowledge
    /// cycle in progress.
    #[must_use]
    pub fn at_boundary(&self) -> bool {
        self.cycle == BusCycle::T1 && self.servicing.is_none() && self.decoder == Decoder::default()
    }

    /// Run to the next instruction boundary. Returns the T-states consumed,
    /// or the fault that stopped the core.
    ///
    /// A break at the very first tick returns zero.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<u32, Fault> {
        let mut cycles = 0;
        loop {
            match self.tick(bus)? {
                Tick::Cycles(n) => cycles += n,
                Tick::Break => return Ok(cycles),
            }
            if self.at_boundary() {
                return Ok(cycles);
            }
        }
    }

    /// Disassemble `count` instructions from `address`.
    pub fn disassemble<B: Bus + ?Sized>(&self, bus: &B, address: u16, count: usize) -> String {
        disasm::disassemble(bus, address, count)
    }

    /// Capture every piece of CPU state that affects future execution.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            registers: self.regs,
            decoder: self.decoder,
            cycle: self.cycle,
            instruction_start: self.instruction_start,
            servicing: self.servicing,
            pending: self.pending,
            nmi_pending: self.nmi_pending,
            nmi_last: self.nmi_last,
            ei_delay: self.ei_delay,
            ack_data: self.ack_data,
            halt_forced: self.halt_forced,
            total_ticks: self.total_ticks,
        }
    }

    /// Restore state captured by [`snapshot`](Self::snapshot). Input pins,
    /// the monitor and the logger are session objects and are left alone.
    /// Output pins are driven to the levels of the restored sub-state.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.regs = snapshot.registers;
        self.decoder = snapshot.decoder;
        self.cycle = snapshot.cycle;
        self.instruction_start = snapshot.instruction_start;
        self.servicing = snapshot.servicing;
        self.pending = snapshot.pending;
        self.nmi_pending = snapshot.nmi_pending;
        self.nmi_last = snapshot.nmi_last;
        self.ei_delay = snapshot.ei_delay;
        self.ack_data = snapshot.ack_data;
        self.halt_forced = snapshot.halt_forced;
        self.total_ticks = snapshot.total_ticks;
        self.faulted = false;
        self.drive_outputs();
    }

    /// Set the output pins to the levels the current sub-state holds.
    fn drive_outputs(&mut self) {
        let (m1, iorq, rfsh) = match (self.servicing, self.cycle) {
            (None, BusCycle::T1) => (false, false, false),
            (None, BusCycle::T4) => (true, false, true),
            (None, _) => (true, false, false),
            (Some(_), BusCycle::T1 | BusCycle::T2) => (false, false, false),
            (Some(_), BusCycle::Tw1) => (true, false, false),
            (Some(kind), BusCycle::Tw2 | BusCycle::T3) => {
                (true, kind == InterruptKind::Int, false)
            }
            (Some(_), BusCycle::T4) => (false, false, true),
        };
        self.pins.m1.set(m1);
        self.pins.iorq.set(iorq);
        self.pins.rfsh.set(rfsh);
        self.pins.halt.set(self.regs.halted);
    }

    fn apply_reset(&mut self) {
        let reset = self.config.reset;
        self.regs = Registers::default();
        self.regs.set_af(reset.af);
        self.regs.set_af_alt(reset.af);
        self.regs.sp = reset.sp;
        self.regs.pc = reset.pc;
        self.decoder.reset();
        self.cycle = BusCycle::T1;
        self.instruction_start = reset.pc;
        self.pending = None;
        self.servicing = None;
        self.nmi_pending = false;
        self.ei_delay = false;
        self.halt_forced = false;
        self.faulted = false;
        self.pins.release_outputs();
    }

    fn trace(&mut self, level: Level, args: fmt::Arguments<'_>) {
        if self.log.enabled(level) {
            self.log.log(level, args);
        }
    }

    fn dump<B: Bus>(&self, bus: &B) -> Box<Dump> {
        let mut registers = self.regs;
        registers.pc = self.instruction_start;
        Box::new(Dump {
            registers,
            instruction: disasm::disassemble_one(bus, self.instruction_start).text,
        })
    }

    fn gateway_fault<B: Bus>(&self, bus: &B, source: DecodeError) -> Fault {
        Fault::MisplacedGateway {
            source,
            dump: self.dump(&*bus),
        }
    }

    /// One M1 (opcode fetch) sub-state.
    fn m1_cycle<B: Bus>(&mut self, bus: &mut B) -> Result<Tick, Fault> {
        match self.cycle {
            BusCycle::T1 => {
                if self.decoder == Decoder::default() {
                    self.instruction_start = self.regs.pc;
                    if let Some(reason) = self.monitor.check(&self.regs) {
                        let pc = self.regs.pc;
                        self.trace(Level::DEBUG, format_args!("stopped at {pc:04X}: {reason}"));
                        return Ok(Tick::Break);
                    }
                    if let Some(kind) = self.pending.take() {
                        self.servicing = Some(kind);
                        return self.interrupt_cycle(bus, kind);
                    }
                }
                self.pins.m1.set(true);
                self.cycle = BusCycle::T2;
                Ok(Tick::Cycles(1))
            }
            BusCycle::T2 => {
                if !self.pins.wait {
                    self.cycle = BusCycle::T3;
                }
                Ok(Tick::Cycles(1))
            }
            BusCycle::T3 => {
                let opcode = if self.regs.halted {
                    // The fetch still happens but HALT is what executes.
                    bus.read(self.regs.pc);
                    0x76
                } else {
                    self.fetch_byte(bus)
                };
                self.regs.inc_r();
                self.pins.rfsh.set(true);
                bus.refresh(self.regs.ir());
                if let Err(err) = self.decoder.feed(opcode) {
                    return Err(self.gateway_fault(&*bus, err));
                }
                self.cycle = BusCycle::T4;
                Ok(Tick::Cycles(1))
            }
            BusCycle::T4 => {
                self.pins.m1.set(false);
                self.pins.rfsh.set(false);
                self.cycle = BusCycle::T1;

                if self.decoder.awaits_displacement() {
                    // DD CB d op: displacement and opcode are ordinary reads.
                    let displacement = self.fetch_byte(bus);
                    if let Err(err) = self.decoder.feed(displacement) {
                        return Err(self.gateway_fault(&*bus, err));
                    }
                    let opcode = self.fetch_byte(bus);
                    self.decoder.set_index_opcode(opcode);
                } else if !self.decoder.is_ready() {
                    // Prefix byte: another M1 follows.
                    return Ok(Tick::Cycles(1));
                }

                if self.log.enabled(Level::TRACE) {
                    self.trace_instruction(&*bus);
                }

                let table = self.decoder.table;
                let cycles = self.execute(bus, ExecContext::Fetched)?;
                self.decoder.reset();
                self.sample_interrupts();

                let spent = 4 * u32::from(table.m1_fetches());
                Ok(Tick::Cycles(u32::from(cycles).saturating_sub(spent) + 1))
            }
            // Wait states only occur in acknowledge cycles.
            BusCycle::Tw1 | BusCycle::Tw2 => {
                self.cycle = BusCycle::T3;
                Ok(Tick::Cycles(1))
            }
        }
    }

    fn trace_instruction<B: Bus>(&mut self, bus: &B) {
        let mut line = disasm::disassemble_one(bus, self.instruction_start);
        if self.regs.halted {
            line.text = "HALT".into();
        }
        let r = self.regs;
        self.trace(
            Level::TRACE,
            format_args!(
                "{:04X}  {:<18} AF={:04X} BC={:04X} DE={:04X} HL={:04X} IX={:04X} IY={:04X} SP={:04X}",
                line.address,
                line.text,
                r.af(),
                r.bc(),
                r.de(),
                r.hl(),
                r.ix,
                r.iy,
                r.sp
            ),
        );
    }

    // === Bus helpers ===

    /// Read the byte at PC and advance PC.
    fn fetch_byte<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let byte = bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        byte
    }

    fn fetch_word<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch_byte(bus);
        let hi = self.fetch_byte(bus);
        word(hi, lo)
    }

    fn read16<B: Bus>(bus: &mut B, address: u16) -> u16 {
        let lo = bus.read(address);
        let hi = bus.read(address.wrapping_add(1));
        word(hi, lo)
    }

    fn write16<B: Bus>(bus: &mut B, address: u16, value: u16) {
        let (hi, lo) = split(value);
        bus.write(address, lo);
        bus.write(address.wrapping_add(1), hi);
    }

    /// Push high byte first, as the hardware does.
    fn push<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let (hi, lo) = split(value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write(self.regs.sp, lo);
    }

    fn pop<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let value = Self::read16(bus, self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    // === Register selectors ===

    /// HL, IX or IY depending on the active prefix.
    fn index(&self) -> u16 {
        match self.decoder.prefix {
            Prefix::None => self.regs.hl(),
            Prefix::Ix => self.regs.ix,
            Prefix::Iy => self.regs.iy,
        }
    }

    fn set_index(&mut self, value: u16) {
        match self.decoder.prefix {
            Prefix::None => self.regs.set_hl(value),
            Prefix::Ix => self.regs.ix = value,
            Prefix::Iy => self.regs.iy = value,
        }
    }

    /// Memory operand address: `(HL)`, or `(IX+d)`/`(IY+d)` which also
    /// loads WZ.
    fn memory_address(&mut self, d: i8) -> u16 {
        if self.decoder.prefix == Prefix::None {
            return self.regs.hl();
        }
        let address = self.index().wrapping_add_signed(i16::from(d));
        self.regs.wz = address;
        address
    }

    /// Register by 3-bit encoding. Code 6 is the memory operand and is
    /// handled by the caller.
    fn reg(&self, r: u8) -> u8 {
        match r & 7 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => 0,
            _ => self.regs.a,
        }
    }

    fn set_reg(&mut self, r: u8, value: u8) {
        match r & 7 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => {}
            _ => self.regs.a = value,
        }
    }

    /// Register by 3-bit encoding with H/L replaced by the index halves
    /// under a prefix (undocumented IXH/IXL/IYH/IYL).
    fn reg_indexed(&self, r: u8) -> u8 {
        match (r & 7, self.decoder.prefix) {
            (4, Prefix::Ix) => self.regs.ixh(),
            (5, Prefix::Ix) => self.regs.ixl(),
            (4, Prefix::Iy) => self.regs.iyh(),
            (5, Prefix::Iy) => self.regs.iyl(),
            (r, _) => self.reg(r),
        }
    }

    fn set_reg_indexed(&mut self, r: u8, value: u8) {
        match (r & 7, self.decoder.prefix) {
            (4, Prefix::Ix) => self.regs.set_ixh(value),
            (5, Prefix::Ix) => self.regs.set_ixl(value),
            (4, Prefix::Iy) => self.regs.set_iyh(value),
            (5, Prefix::Iy) => self.regs.set_iyl(value),
            (r, _) => self.set_reg(r, value),
        }
    }

    /// Register pair for 16-bit loads and arithmetic (SP in slot 3).
    fn rp(&self, p: u8) -> u16 {
        match p & 3 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.index(),
            _ => self.regs.sp,
        }
    }

    fn set_rp(&mut self, p: u8, value: u16) {
        match p & 3 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.set_index(value),
            _ => self.regs.sp = value,
        }
    }

    /// Register pair for PUSH/POP (AF in slot 3).
    fn rp2(&self, p: u8) -> u16 {
        match p & 3 {
            3 => self.regs.af(),
            p => self.rp(p),
        }
    }

    fn set_rp2(&mut self, p: u8, value: u16) {
        match p & 3 {
            3 => self.regs.set_af(value),
            p => self.set_rp(p, value),
        }
    }

    /// Evaluate a condition code.
    fn condition(&self, cc: u8) -> bool {
        let f = self.regs.f;
        match cc & 7 {
            0 => f & ZF == 0, // NZ
            1 => f & ZF != 0, // Z
            2 => f & CF == 0, // NC
            3 => f & CF != 0, // C
            4 => f & PF == 0, // PO
            5 => f & PF != 0, // PE
            6 => f & SF == 0, // P
            _ => f & SF != 0, // M
        }
    }

    fn carry(&self) -> bool {
        self.regs.f & CF != 0
    }
}

#[cfg(feature = "test-utils")]
impl Z80 {
    /// Set the program counter.
    ///
    /// Only available in test builds.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
        self.instruction_start = value;
    }

    /// Set the stack pointer.
    ///
    /// Only available in test builds.
    pub fn set_sp(&mut self, value: u16) {
        self.regs.sp = value;
    }

    /// Get the A register.
    #[must_use]
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Get the F register (flags).
    #[must_use]
    pub fn f(&self) -> u8 {
        self.regs.f
    }

    /// Get the BC register pair.
    #[must_use]
    pub fn bc(&self) -> u16 {
        self.regs.bc()
    }

    /// Get the DE register pair.
    #[must_use]
    pub fn de(&self) -> u16 {
        self.regs.de()
    }

    /// Get the HL register pair.
    #[must_use]
    pub fn hl(&self) -> u16 {
        self.regs.hl()
    }
}

impl Default for Z80 {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Z80 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Z80")
            .field("regs", &self.regs)
            .field("decoder", &self.decoder)
            .field("cycle", &self.cycle)
            .field("pending", &self.pending)
            .field("servicing", &self.servicing)
            .field("total_ticks", &self.total_ticks)
            .finish_non_exhaustive()
    }
}

impl Cpu for Z80 {
    type Registers = Registers;
    type Fault = Fault;

    fn tick<B: Bus>(&mut self, bus: &mut B) -> Result<Tick, Fault> {
        if self.faulted {
            return Err(Fault::Terminated);
        }

        if self.pins.reset {
            if !self.in_reset {
                self.in_reset = true;
                self.trace(Level::DEBUG, format_args!("RESET asserted"));
            }
            self.apply_reset();
            self.total_ticks += Ticks::new(1);
            return Ok(Tick::Cycles(1));
        }
        self.in_reset = false;

        // NMI is edge-triggered: latch on the rising edge only.
        let nmi = self.pins.nmi.is_active();
        if nmi && !self.nmi_last {
            self.nmi_pending = true;
        }
        self.nmi_last = nmi;

        let result = match self.servicing {
            Some(kind) => self.interrupt_cycle(bus, kind),
            None => self.m1_cycle(bus),
        };

        match result {
            Ok(tick) => {
                if let Tick::Cycles(n) = tick {
                    self.total_ticks += Ticks::from(n);
                }
                Ok(tick)
            }
            Err(fault) => {
                self.faulted = true;
                self.trace(Level::ERROR, format_args!("{fault}"));
                Err(fault)
            }
        }
    }

    fn pc(&self) -> u32 {
        u32::from(self.regs.pc)
    }

    fn registers(&self) -> Self::Registers {
        self.regs
    }

    fn is_halted(&self) -> bool {
        self.regs.halted
    }

    fn reset(&mut self) {
        self.trace(Level::DEBUG, format_args!("reset"));
        self.apply_reset();
    }
}

/// All query paths supported by the Z80.
const Z80_QUERY_PATHS: &[&str] = &[
    // Main registers
    "a", "f", "b", "c", "d", "e", "h", "l",
    // Register pairs
    "af", "bc", "de", "hl",
    // Alternate registers
    "a'", "f'", "b'", "c'", "d'", "e'", "h'", "l'",
    "af'", "bc'", "de'", "hl'",
    // Index registers
    "ix", "iy", "ixh", "ixl", "iyh", "iyl",
    // Other registers
    "sp", "pc", "i", "r", "wz",
    // Flags (individual)
    "flags.s", "flags.z", "flags.y", "flags.h",
    "flags.x", "flags.p", "flags.n", "flags.c",
    // Interrupt state
    "iff1", "iff2", "im", "nmi_pending",
    // CPU state
    "halted", "ticks",
    // Current instruction state
    "opcode", "prefix", "table", "fetch_state", "t_state",
];

impl Observable for Z80 {
    fn query(&self, path: &str) -> Option<Value> {
        let r = &self.regs;
        let value = match path {
            "a" => r.a.into(),
            "f" => r.f.into(),
            "b" => r.b.into(),
            "c" => r.c.into(),
            "d" => r.d.into(),
            "e" => r.e.into(),
            "h" => r.h.into(),
            "l" => r.l.into(),

            "af" => r.af().into(),
            "bc" => r.bc().into(),
            "de" => r.de().into(),
            "hl" => r.hl().into(),

            "a'" => r.a_alt.into(),
            "f'" => r.f_alt.into(),
            "b'" => r.b_alt.into(),
            "c'" => r.c_alt.into(),
            "d'" => r.d_alt.into(),
            "e'" => r.e_alt.into(),
            "h'" => r.h_alt.into(),
            "l'" => r.l_alt.into(),
            "af'" => r.af_alt().into(),
            "bc'" => r.bc_alt().into(),
            "de'" => r.de_alt().into(),
            "hl'" => r.hl_alt().into(),

            "ix" => r.ix.into(),
            "iy" => r.iy.into(),
            "ixh" => r.ixh().into(),
            "ixl" => r.ixl().into(),
            "iyh" => r.iyh().into(),
            "iyl" => r.iyl().into(),

            "sp" => r.sp.into(),
            "pc" => r.pc.into(),
            "i" => r.i.into(),
            "r" => r.r.into(),
            "wz" => r.wz.into(),

            "flags.s" => (r.f & SF != 0).into(),
            "flags.z" => (r.f & ZF != 0).into(),
            "flags.y" => (r.f & YF != 0).into(),
            "flags.h" => (r.f & HF != 0).into(),
            "flags.x" => (r.f & XF != 0).into(),
            "flags.p" => (r.f & PF != 0).into(),
            "flags.n" => (r.f & NF != 0).into(),
            "flags.c" => (r.f & CF != 0).into(),

            "iff1" => r.iff1.into(),
            "iff2" => r.iff2.into(),
            "im" => r.im.into(),
            "nmi_pending" => self.nmi_pending.into(),

            "halted" => r.halted.into(),
            "ticks" => self.total_ticks.get().into(),

            "opcode" => self.decoder.opcode.into(),
            "prefix" => Value::Text(format!("{:?}", self.decoder.prefix)),
            "table" => Value::Text(self.decoder.table.to_string()),
            "fetch_state" => Value::Text(self.decoder.state.to_string()),
            "t_state" => Value::Text(self.cycle.to_string()),

            _ => return None,
        };
        Some(value)
    }

    fn query_paths(&self) -> &'static [&'static str] {
        Z80_QUERY_PATHS
    }
}
