//! Interrupt acceptance: NMI, the three maskable modes, EI delay and the
//! control pins.

use std::cell::RefCell;
use std::rc::Rc;

use emu_core::{Bus, Cpu, SimpleBus, Tick};
use zilog_z80::{BusCycle, Fault, Z80};

fn stacked(bus: &SimpleBus, sp: u16) -> u16 {
    u16::from_le_bytes([bus.peek(sp), bus.peek(sp.wrapping_add(1))])
}

/// IM 1, SP = 0x8000, then EI at 0x0005 followed by NOPs.
fn im1_program() -> (Z80, SimpleBus) {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[
        0xED, 0x56,       // IM 1
        0x31, 0x00, 0x80, // LD SP, 0x8000
        0xFB,             // EI
        0x00, 0x00, 0x00, // NOP x3
        0x76,             // HALT
    ]);
    (Z80::new(), bus)
}

#[test]
fn test_im1_from_halt() {
    let (mut cpu, mut bus) = im1_program();
    while !cpu.is_halted() {
        cpu.step(&mut bus).unwrap();
    }
    assert_eq!(cpu.registers().pc, 0x0009);
    assert!(cpu.pins().halt.is_active());

    cpu.pins_mut().int.assert();
    // The HALT re-executes once more; INT is sampled at its end.
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(cpu.step(&mut bus).unwrap(), 13);

    let regs = cpu.registers();
    assert_eq!(regs.pc, 0x0038);
    assert!(!regs.halted);
    assert!(!cpu.pins().halt.is_active());
    assert!(!regs.iff1 && !regs.iff2);
    assert_eq!(stacked(&bus, regs.sp), 0x000A, "return past the HALT");
}

#[test]
fn test_ei_delays_acceptance_by_one_instruction() {
    let (mut cpu, mut bus) = im1_program();
    cpu.pins_mut().int.assert();

    cpu.step(&mut bus).unwrap(); // IM 1
    cpu.step(&mut bus).unwrap(); // LD SP
    cpu.step(&mut bus).unwrap(); // EI
    assert_eq!(cpu.registers().pc, 0x0006);
    assert!(cpu.registers().iff1);

    // The instruction after EI still runs.
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(cpu.registers().pc, 0x0007);

    assert_eq!(cpu.step(&mut bus).unwrap(), 13);
    assert_eq!(cpu.registers().pc, 0x0038);
    assert_eq!(stacked(&bus, cpu.registers().sp), 0x0007);
}

#[test]
fn test_int_ignored_while_disabled() {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[0xED, 0x56, 0x00, 0x00, 0x76]); // IM 1; NOP; NOP; HALT
    let mut cpu = Z80::new();
    cpu.pins_mut().int.assert();
    while !cpu.is_halted() {
        cpu.step(&mut bus).unwrap();
    }
    assert_eq!(cpu.registers().pc, 0x0004);
}

#[test]
fn test_nmi_wins_and_int_follows_retn() {
    let (mut cpu, mut bus) = im1_program();
    bus.load(0x0066, &[0xED, 0x45]); // RETN

    cpu.step(&mut bus).unwrap(); // IM 1
    cpu.step(&mut bus).unwrap(); // LD SP
    cpu.step(&mut bus).unwrap(); // EI
    cpu.pins_mut().int.assert();
    cpu.pins_mut().nmi.assert();
    cpu.step(&mut bus).unwrap(); // NOP at 0x0006

    assert_eq!(cpu.step(&mut bus).unwrap(), 11);
    let regs = cpu.registers();
    assert_eq!(regs.pc, 0x0066);
    assert!(!regs.iff1);
    assert!(regs.iff2, "IFF1 saved in IFF2");

    cpu.step(&mut bus).unwrap(); // RETN
    assert_eq!(cpu.registers().pc, 0x0007);
    assert!(cpu.registers().iff1);

    assert_eq!(cpu.step(&mut bus).unwrap(), 13);
    assert_eq!(cpu.registers().pc, 0x0038);
}

#[test]
fn test_nmi_is_edge_triggered() {
    let mut bus = SimpleBus::new();
    bus.load(0x0066, &[0x00]);
    let mut cpu = Z80::new();
    cpu.set_sp(0x8000);
    cpu.pins_mut().nmi.assert();

    cpu.step(&mut bus).unwrap(); // NOP at 0, latches the edge
    assert_eq!(cpu.step(&mut bus).unwrap(), 11);
    assert_eq!(cpu.registers().pc, 0x0066);

    // Line still held: no second NMI.
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.registers().pc, 0x0067);
}

#[test]
fn test_im2_vector_table() {
    let mut bus = SimpleBus::new();
    bus.vector = 0x10;
    bus.load(0x8010, &[0x34, 0x12]);
    bus.load(0x0000, &[
        0x3E, 0x80,       // LD A, 0x80
        0xED, 0x47,       // LD I, A
        0xED, 0x5E,       // IM 2
        0x31, 0x00, 0xF0, // LD SP, 0xF000
        0xFB,             // EI
        0x00,             // NOP
        0x76,             // HALT
    ]);
    let mut cpu = Z80::new();
    cpu.pins_mut().int.assert();
    for _ in 0..6 {
        cpu.step(&mut bus).unwrap();
    }
    assert_eq!(cpu.step(&mut bus).unwrap(), 19);
    assert_eq!(cpu.registers().pc, 0x1234);
    assert_eq!(cpu.registers().wz, 0x1234);
    assert_eq!(stacked(&bus, 0xEFFE), 0x000B);
}

#[test]
fn test_im0_executes_rst_from_data_bus() {
    let (mut cpu, mut bus) = im1_program();
    bus.load(0x0000, &[0xED, 0x46]); // IM 0
    bus.vector = 0xD7; // RST 10h
    cpu.pins_mut().int.assert();
    for _ in 0..4 {
        cpu.step(&mut bus).unwrap();
    }
    assert_eq!(cpu.step(&mut bus).unwrap(), 13);
    assert_eq!(cpu.registers().pc, 0x0010);
    assert_eq!(stacked(&bus, cpu.registers().sp), 0x0007);
}

#[test]
fn test_im0_forced_halt_keeps_return_address() {
    let (mut cpu, mut bus) = im1_program();
    bus.load(0x0000, &[0xED, 0x46]); // IM 0
    bus.vector = 0x76; // HALT
    cpu.pins_mut().int.assert();
    for _ in 0..4 {
        cpu.step(&mut bus).unwrap();
    }
    assert_eq!(cpu.registers().pc, 0x0007);

    assert_eq!(cpu.step(&mut bus).unwrap(), 6);
    assert!(cpu.is_halted());
    assert!(cpu.pins().halt.is_active());
    assert_eq!(cpu.registers().pc, 0x0007);

    cpu.pins_mut().int.release();
    for _ in 0..3 {
        assert_eq!(cpu.step(&mut bus).unwrap(), 4);
        assert!(cpu.is_halted());
        assert_eq!(cpu.registers().pc, 0x0007, "NOPs after the return address stay unexecuted");
    }

    cpu.pins_mut().nmi.assert();
    assert_eq!(cpu.step(&mut bus).unwrap(), 4);
    assert_eq!(cpu.step(&mut bus).unwrap(), 11);
    assert_eq!(cpu.registers().pc, 0x0066);
    assert!(!cpu.is_halted());
    assert_eq!(stacked(&bus, cpu.registers().sp), 0x0007);
}

#[test]
fn test_im0_opcode_with_operands_faults() {
    let (mut cpu, mut bus) = im1_program();
    bus.load(0x0000, &[0xED, 0x46]); // IM 0
    bus.vector = 0xC3; // JP nn
    cpu.pins_mut().int.assert();
    for _ in 0..4 {
        cpu.step(&mut bus).unwrap();
    }
    let fault = cpu.step(&mut bus).unwrap_err();
    assert!(matches!(fault, Fault::ForcedOperand { opcode: 0xC3, .. }));
    assert_eq!(fault.dump().map(|d| d.registers.pc), Some(0x0007));
    assert_eq!(cpu.tick(&mut bus), Err(Fault::Terminated));
}

#[test]
fn test_iorq_pulses_during_int_acknowledge() {
    let (mut cpu, mut bus) = im1_program();
    let edges = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&edges);
    cpu.pins_mut()
        .iorq
        .on_change(move |level| sink.borrow_mut().push(level));

    cpu.pins_mut().int.assert();
    for _ in 0..4 {
        cpu.step(&mut bus).unwrap();
    }
    assert!(edges.borrow().is_empty());
    cpu.step(&mut bus).unwrap();
    assert_eq!(*edges.borrow(), [true, false]);
}

#[test]
fn test_wait_stretches_acknowledge() {
    let (mut cpu, mut bus) = im1_program();
    cpu.pins_mut().int.assert();
    for _ in 0..4 {
        cpu.step(&mut bus).unwrap();
    }

    assert_eq!(cpu.tick(&mut bus), Ok(Tick::Cycles(1))); // T1
    assert_eq!(cpu.tick(&mut bus), Ok(Tick::Cycles(1))); // Tw1
    assert_eq!(cpu.bus_cycle(), BusCycle::Tw2);
    cpu.pins_mut().wait = true;
    for _ in 0..3 {
        cpu.tick(&mut bus).unwrap();
        assert_eq!(cpu.bus_cycle(), BusCycle::Tw2);
    }
    cpu.pins_mut().wait = false;
    let mut rest = 0;
    while !cpu.at_boundary() {
        if let Tick::Cycles(n) = cpu.tick(&mut bus).unwrap() {
            rest += n;
        }
    }
    assert_eq!(rest, 1 + 1 + 9);
    assert_eq!(cpu.registers().pc, 0x0038);
}

#[test]
fn test_wait_holds_opcode_fetch() {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[0x3E, 0x42]); // LD A, 0x42
    let mut cpu = Z80::new();

    cpu.tick(&mut bus).unwrap();
    assert_eq!(cpu.bus_cycle(), BusCycle::T2);
    assert!(cpu.pins().m1.is_active());
    cpu.pins_mut().wait = true;
    for _ in 0..5 {
        cpu.tick(&mut bus).unwrap();
        assert_eq!(cpu.bus_cycle(), BusCycle::T2);
    }
    cpu.pins_mut().wait = false;
    assert_eq!(cpu.step(&mut bus).unwrap(), 6);
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_reset_pin() {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[0x3E, 0x42, 0x76]);
    let mut cpu = Z80::new();
    while !cpu.is_halted() {
        cpu.step(&mut bus).unwrap();
    }

    cpu.pins_mut().reset = true;
    assert_eq!(cpu.tick(&mut bus), Ok(Tick::Cycles(1)));
    assert_eq!(cpu.tick(&mut bus), Ok(Tick::Cycles(1)));
    let regs = cpu.registers();
    assert_eq!(regs.pc, 0x0000);
    assert_eq!(regs.af(), 0xFFFF);
    assert_eq!(regs.sp, 0xFFFF);
    assert!(!regs.halted);
    assert!(!cpu.pins().halt.is_active());

    cpu.pins_mut().reset = false;
    cpu.step(&mut bus).unwrap();
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_refresh_address_follows_ir() {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[
        0x3E, 0x20, // LD A, 0x20
        0xED, 0x47, // LD I, A
        0x00,       // NOP
    ]);
    let mut cpu = Z80::new();
    for _ in 0..3 {
        cpu.step(&mut bus).unwrap();
    }
    assert_eq!(bus.refresh_count(), 4);
    assert_eq!(bus.last_refresh(), 0x2004);
}
