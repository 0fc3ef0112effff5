//! Debugger-facing behaviour: breakpoints, stepping, the clock driver,
//! snapshots, trace output and state queries.

use std::cell::RefCell;
use std::rc::Rc;

use emu_core::{Clock, Cpu, MasterClock, Observable, RunOutcome, SimpleBus, Tick, Ticks, Value};
use tracing::Level;
use zilog_z80::{BreakReason, BufferLog, BusCycle, ResetState, Snapshot, Variant, Z80, Z80Config};

fn counting_program() -> SimpleBus {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[
        0x3E, 0x01, // LD A, 1
        0x3C,       // INC A
        0x3C,       // INC A
        0x76,       // HALT
    ]);
    bus
}

fn clock() -> Clock {
    Clock::new(MasterClock::new(3_500_000))
}

#[test]
fn test_breakpoint_stops_before_instruction() {
    let mut bus = counting_program();
    let mut cpu = Z80::new();
    cpu.monitor_mut().add_breakpoint(0x0003, |_| true);
    let mut clock = clock();

    let outcome = clock.run(&mut cpu, &mut bus, Ticks::new(1000)).unwrap();
    assert_eq!(outcome, RunOutcome::Break);
    assert_eq!(cpu.registers().pc, 0x0003);
    assert_eq!(cpu.a(), 2);
    assert!(cpu.at_boundary());
    assert_eq!(clock.elapsed().get(), 11, "LD A,n + INC A");

    // Resuming runs the instruction at the breakpoint.
    let outcome = clock.run(&mut cpu, &mut bus, Ticks::new(100)).unwrap();
    assert_eq!(outcome, RunOutcome::Budget);
    assert_eq!(cpu.a(), 3);
    assert!(cpu.is_halted());
}

#[test]
fn test_conditional_breakpoint_counts_arrivals() {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[
        0x06, 0x04, // LD B, 4
        0x00,       // loop: NOP
        0x10, 0xFD, // DJNZ loop
        0x76,       // HALT
    ]);
    let mut cpu = Z80::new();
    let arrivals = Rc::new(RefCell::new(0));
    let seen = Rc::clone(&arrivals);
    cpu.monitor_mut().add_breakpoint(0x0002, move |regs| {
        *seen.borrow_mut() += 1;
        regs.b == 2
    });

    let outcome = clock().run(&mut cpu, &mut bus, Ticks::new(1000)).unwrap();
    assert_eq!(outcome, RunOutcome::Break);
    assert_eq!(cpu.registers().b, 2);
    assert_eq!(*arrivals.borrow(), 3);
}

#[test]
fn test_single_step() {
    let mut bus = counting_program();
    let mut cpu = Z80::new();
    cpu.monitor_mut().request_step();
    let mut clock = clock();

    assert_eq!(clock.run(&mut cpu, &mut bus, Ticks::new(1000)).unwrap(), RunOutcome::Break);
    assert_eq!(cpu.registers().pc, 0x0002);
    assert_eq!(clock.elapsed().get(), 7);

    cpu.monitor_mut().request_step();
    assert_eq!(clock.run(&mut cpu, &mut bus, Ticks::new(1000)).unwrap(), RunOutcome::Break);
    assert_eq!(cpu.registers().pc, 0x0003);
}

#[test]
fn test_break_request() {
    let mut bus = counting_program();
    let mut cpu = Z80::new();
    cpu.step(&mut bus).unwrap();

    cpu.monitor_mut().request_break();
    assert_eq!(cpu.tick(&mut bus), Ok(Tick::Break));
    assert_eq!(cpu.registers().pc, 0x0002);
    // Only one break per request.
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
}

#[test]
fn test_break_leaves_interrupt_pending() {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[0xED, 0x56, 0xFB, 0x00, 0x00]); // IM 1; EI; NOP; NOP
    let mut cpu = Z80::new();
    cpu.pins_mut().int.assert();
    cpu.monitor_mut().add_breakpoint(0x0004, |_| true);
    for _ in 0..3 {
        cpu.step(&mut bus).unwrap();
    }
    assert_eq!(cpu.tick(&mut bus), Ok(Tick::Break));
    assert_eq!(cpu.step(&mut bus).unwrap(), 13);
    assert_eq!(cpu.registers().pc, 0x0038);
}

#[test]
fn test_clock_carries_overshoot() {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[0x3E, 0x05]); // LD A, 5
    let mut cpu = Z80::new();
    let mut clock = clock();

    // T4 asks for 4 cycles with only 2 left in the budget.
    clock.run(&mut cpu, &mut bus, Ticks::new(5)).unwrap();
    assert_eq!(cpu.a(), 0x05);
    assert_eq!(clock.elapsed().get(), 5);

    // The owed cycles are paid before the CPU ticks again.
    clock.run(&mut cpu, &mut bus, Ticks::new(2)).unwrap();
    assert_eq!(clock.elapsed().get(), 7);
    assert_eq!(cpu.total_ticks().get(), 7);
    assert_eq!(cpu.bus_cycle(), zilog_z80::BusCycle::T1);
}

fn snapshot_program() -> SimpleBus {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[
        0xDD, 0x21, 0x00, 0x10, // LD IX, 0x1000
        0x3E, 0x05,             // LD A, 5
        0xDD, 0x77, 0x03,       // LD (IX+3), A
        0x76,                   // HALT
    ]);
    bus
}

#[test]
fn test_snapshot_mid_instruction() {
    let mut bus = snapshot_program();
    let mut cpu = Z80::new();
    for _ in 0..6 {
        cpu.tick(&mut bus).unwrap();
    }
    assert!(!cpu.at_boundary());
    let snapshot = cpu.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);

    let mut other_bus = snapshot_program();
    let mut other = Z80::with_config(Z80Config::default(), Box::new(zilog_z80::NullLog));
    other.restore(&decoded);

    while !cpu.is_halted() {
        cpu.step(&mut bus).unwrap();
    }
    while !other.is_halted() {
        other.step(&mut other_bus).unwrap();
    }
    assert_eq!(other.registers(), cpu.registers());
    assert_eq!(other.total_ticks(), cpu.total_ticks());
    assert_eq!(emu_core::Bus::peek(&other_bus, 0x1003), 5);
}

#[test]
fn test_restore_drives_output_pins() {
    let mut bus = counting_program();
    let mut cpu = Z80::new();
    for _ in 0..3 {
        cpu.tick(&mut bus).unwrap();
    }
    assert_eq!(cpu.bus_cycle(), BusCycle::T4);

    let mut other = Z80::with_config(Z80Config::default(), Box::new(zilog_z80::NullLog));
    other.restore(&cpu.snapshot());
    assert!(other.pins().m1.is_active());
    assert!(other.pins().rfsh.is_active());
    assert!(!other.pins().iorq.is_active());

    // Into an INT acknowledge, past the cycle that raises IORQ.
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[0xED, 0x56, 0x31, 0x00, 0x80, 0xFB, 0x00, 0x00]); // IM 1; LD SP; EI; NOP
    let mut cpu = Z80::new();
    cpu.pins_mut().int.assert();
    for _ in 0..4 {
        cpu.step(&mut bus).unwrap();
    }
    cpu.tick(&mut bus).unwrap();
    cpu.tick(&mut bus).unwrap();
    assert_eq!(cpu.bus_cycle(), BusCycle::Tw2);

    other.restore(&cpu.snapshot());
    assert!(other.pins().m1.is_active());
    assert!(other.pins().iorq.is_active());
    assert!(!other.pins().rfsh.is_active());
    assert!(!other.pins().halt.is_active());
}

#[test]
fn test_trace_lines() {
    let log = Rc::new(RefCell::new(BufferLog::new(Level::TRACE)));
    let mut cpu = Z80::with_config(Z80Config::default(), Box::new(Rc::clone(&log)));
    let mut bus = counting_program();
    cpu.step(&mut bus).unwrap();
    cpu.step(&mut bus).unwrap();

    let log = log.borrow();
    let lines: Vec<&str> = log
        .records()
        .iter()
        .filter(|(level, _)| *level == Level::TRACE)
        .map(|(_, text)| text.as_str())
        .collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("0000  LD A,$01"));
    assert!(lines[1].starts_with("0002  INC A"));
    assert!(lines[1].contains("AF=01FF"), "registers before execution");
}

#[test]
fn test_log_can_be_replaced() {
    let mut cpu = Z80::with_config(Z80Config::default(), Box::new(zilog_z80::NullLog));
    let mut bus = counting_program();
    cpu.step(&mut bus).unwrap();

    let log = Rc::new(RefCell::new(BufferLog::new(Level::TRACE)));
    cpu.set_log(Box::new(Rc::clone(&log)));
    cpu.step(&mut bus).unwrap();

    let log = log.borrow();
    let lines: Vec<&str> = log
        .records()
        .iter()
        .filter(|(level, _)| *level == Level::TRACE)
        .map(|(_, text)| text.as_str())
        .collect();
    assert_eq!(lines.len(), 1, "only steps after the swap are logged");
    assert!(lines[0].starts_with("0002  INC A"));
}

#[test]
fn test_config_is_kept() {
    let config = Z80Config {
        variant: Variant::Cmos,
        ..Z80Config::default()
    };
    let cpu = Z80::with_config(config, Box::new(zilog_z80::NullLog));
    assert_eq!(cpu.config().variant, Variant::Cmos);
    assert_eq!(cpu.config().reset, ResetState::default());
}

#[test]
fn test_fault_logged_at_error() {
    let log = Rc::new(RefCell::new(BufferLog::new(Level::ERROR)));
    let mut cpu = Z80::with_config(Z80Config::default(), Box::new(Rc::clone(&log)));
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[0xED, 0x46, 0x31, 0x00, 0x80, 0xFB, 0x00]); // IM 0; LD SP; EI; NOP
    bus.vector = 0xCD; // CALL nn
    cpu.pins_mut().int.assert();
    for _ in 0..4 {
        cpu.step(&mut bus).unwrap();
    }
    assert!(cpu.step(&mut bus).is_err());

    let log = log.borrow();
    assert_eq!(log.records().len(), 1);
    assert_eq!(log.records()[0].0, Level::ERROR);
    assert!(log.records()[0].1.contains("forced opcode CD"));
}

#[test]
fn test_break_reason_display() {
    assert_eq!(BreakReason::Breakpoint(0x1234).to_string(), "breakpoint at 1234");
}

#[test]
fn test_query_paths() {
    let mut bus = counting_program();
    let mut cpu = Z80::new();
    cpu.step(&mut bus).unwrap();

    assert_eq!(cpu.query("a"), Some(Value::U8(1)));
    assert_eq!(cpu.query("pc"), Some(Value::U16(2)));
    assert_eq!(cpu.query("flags.c"), Some(Value::Bool(true)));
    assert_eq!(cpu.query("t_state"), Some(Value::Text("T1".into())));
    assert_eq!(cpu.query("ticks"), Some(Value::U64(7)));
    assert_eq!(cpu.query("nope"), None);
    for path in cpu.query_paths() {
        assert!(cpu.query(path).is_some(), "{path}");
    }

    cpu.tick(&mut bus).unwrap();
    assert_eq!(cpu.query("t_state"), Some(Value::Text("T2".into())));
}

#[test]
fn test_disassembly_through_cpu() {
    let bus = counting_program();
    let cpu = Z80::new();
    let listing = cpu.disassemble(&bus, 0x0000, 4);
    let texts: Vec<&str> = listing.lines().map(|l| l[19..].trim_end()).collect();
    assert_eq!(texts, ["LD A,$01", "INC A", "INC A", "HALT"]);
}
