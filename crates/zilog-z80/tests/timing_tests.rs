//! Table-driven checks: every non-branching instruction consumes exactly the
//! bytes its entry declares and takes exactly the T-states it declares.

use emu_core::{Bus, Cpu, SimpleBus, Tick};
use zilog_z80::{Entry, Op, PF, Table, Z80, ZF};

const ORIGIN: u16 = 0x0100;

/// Ops that move PC somewhere other than the next instruction, or repeat.
fn transfers_control(entry: &Entry, opcode: u8) -> bool {
    let repeating = matches!(
        entry.op,
        Op::BlockLd | Op::BlockCp | Op::BlockIn | Op::BlockOut
    ) && opcode & 0x10 != 0;
    repeating
        || matches!(
            entry.op,
            Op::Jp
                | Op::JpCc
                | Op::Jr
                | Op::JrCc
                | Op::Djnz
                | Op::JpHl
                | Op::Call
                | Op::CallCc
                | Op::Ret
                | Op::RetCc
                | Op::Retn
                | Op::Reti
                | Op::Rst
                | Op::Halt
                | Op::Prefix
                | Op::Unprefixed
        )
}

/// Run one instruction at `ORIGIN`; return (bytes consumed, T-states).
fn run_one(bytes: &[u8]) -> (u16, u32) {
    let mut bus = SimpleBus::new();
    bus.load(ORIGIN, bytes);
    let mut cpu = Z80::new();
    cpu.set_pc(ORIGIN);
    let cycles = cpu.step(&mut bus).expect("CPU faulted");
    (cpu.registers().pc.wrapping_sub(ORIGIN), cycles)
}

fn check_table(table: Table, prefix: &[u8]) {
    for opcode in 0..=255u8 {
        let entry = table.entry(opcode);
        if transfers_control(entry, opcode) {
            continue;
        }
        let mut bytes = prefix.to_vec();
        if table == Table::IndexBit {
            bytes.push(0x00); // displacement precedes the opcode
        }
        bytes.push(opcode);

        let (length, cycles) = run_one(&bytes);
        assert_eq!(
            length,
            u16::from(entry.length),
            "{table} {opcode:02X} {}: length",
            entry.template
        );
        assert_eq!(
            cycles,
            u32::from(entry.cycles),
            "{table} {opcode:02X} {}: T-states",
            entry.template
        );
    }
}

#[test]
fn test_main_table() {
    check_table(Table::Main, &[]);
}

#[test]
fn test_bit_table() {
    check_table(Table::Bit, &[0xCB]);
}

#[test]
fn test_misc_table() {
    check_table(Table::Misc, &[0xED]);
}

#[test]
fn test_ix_table() {
    check_table(Table::Ix, &[0xDD]);
}

#[test]
fn test_iy_table() {
    check_table(Table::Iy, &[0xFD]);
}

#[test]
fn test_index_bit_table() {
    check_table(Table::IndexBit, &[0xDD, 0xCB]);
    check_table(Table::IndexBit, &[0xFD, 0xCB]);
}

#[test]
fn test_conditional_branch_timing() {
    // Reset leaves F = 0xFF: Z, C, P/V and S all set.
    assert_eq!(run_one(&[0x20, 0x10]).1, 7, "JR NZ not taken");
    assert_eq!(run_one(&[0x28, 0x10]).1, 12, "JR Z taken");
    assert_eq!(run_one(&[0x18, 0x10]).1, 12, "JR");
    assert_eq!(run_one(&[0x10, 0x10]).1, 13, "DJNZ taken, B wraps to FF");
    assert_eq!(run_one(&[0xC2, 0x00, 0x20]).1, 10, "JP NZ not taken");
    assert_eq!(run_one(&[0xC4, 0x00, 0x20]).1, 10, "CALL NZ not taken");
    assert_eq!(run_one(&[0xCC, 0x00, 0x20]).1, 17, "CALL Z taken");
    assert_eq!(run_one(&[0xC0]).1, 5, "RET NZ not taken");
    assert_eq!(run_one(&[0xC8]).1, 11, "RET Z taken");
    assert_eq!(run_one(&[0xFF]).1, 11, "RST 38");
    assert_eq!(run_one(&[0xDD, 0xE9]).1, 8, "JP (IX)");
}

#[test]
fn test_djnz_exhausted() {
    let mut bus = SimpleBus::new();
    bus.load(ORIGIN, &[0x10, 0xFE]);
    let mut cpu = Z80::new();
    cpu.set_pc(ORIGIN);
    cpu.registers_mut().b = 1;
    assert_eq!(cpu.step(&mut bus).unwrap(), 8);
    assert_eq!(cpu.registers().pc, ORIGIN + 2);
}

#[test]
fn test_load_timings() {
    assert_eq!(run_one(&[0x3E, 0x05]).1, 7, "LD A,n");
    assert_eq!(run_one(&[0xDD, 0x21, 0x00, 0x10]).1, 14, "LD IX,nn");
    assert_eq!(run_one(&[0xDD, 0x36, 0x02, 0xAA]).1, 19, "LD (IX+d),n");
    assert_eq!(run_one(&[0xDD, 0xCB, 0x02, 0x46]).1, 20, "BIT 0,(IX+d)");
    assert_eq!(run_one(&[0xFD, 0xCB, 0x02, 0x06]).1, 23, "RLC (IY+d)");
}

#[test]
fn test_voided_prefix_costs_four() {
    // DD before an opcode IX does not affect behaves as the main opcode.
    assert_eq!(run_one(&[0xDD, 0x00]), (2, 8));
    // A second index prefix replaces the first.
    let (length, cycles) = run_one(&[0xDD, 0xFD, 0x21, 0x34, 0x12]);
    assert_eq!((length, cycles), (5, 18));
}

#[test]
fn test_tick_breakdown() {
    let mut bus = SimpleBus::new();
    bus.load(0x0000, &[0xDD, 0x21, 0x00, 0x10]); // LD IX, 0x1000
    let mut cpu = Z80::new();
    let mut ticks = Vec::new();
    loop {
        match cpu.tick(&mut bus).unwrap() {
            Tick::Cycles(n) => ticks.push(n),
            Tick::Break => unreachable!(),
        }
        if cpu.at_boundary() {
            break;
        }
    }
    // Prefix M1, then opcode M1 whose T4 carries the rest.
    assert_eq!(ticks, [1, 1, 1, 1, 1, 1, 1, 7]);
    assert_eq!(cpu.total_ticks().get(), 14);
}

#[test]
fn test_block_repeat_timing() {
    let mut bus = SimpleBus::new();
    bus.load(0x1000, &[1, 2, 3]);
    bus.load(0x0000, &[
        0x21, 0x00, 0x10, // LD HL, 0x1000
        0x11, 0x00, 0x20, // LD DE, 0x2000
        0x01, 0x03, 0x00, // LD BC, 3
        0xED, 0xB0,       // LDIR
        0x76,             // HALT
    ]);
    let mut cpu = Z80::new();
    for _ in 0..3 {
        cpu.step(&mut bus).unwrap();
    }
    assert_eq!(cpu.step(&mut bus).unwrap(), 21);
    assert_eq!(cpu.registers().pc, 0x0009, "LDIR repeats from its own address");
    assert_eq!(cpu.step(&mut bus).unwrap(), 21);
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);
    assert_eq!(cpu.registers().pc, 0x000B);

    let regs = cpu.registers();
    assert_eq!(regs.bc(), 0);
    assert_eq!(regs.hl(), 0x1003);
    assert_eq!(regs.de(), 0x2003);
    assert_eq!(regs.f & PF, 0);
    assert_eq!(
        [bus.peek(0x2000), bus.peek(0x2001), bus.peek(0x2002)],
        [1, 2, 3]
    );
}

#[test]
fn test_cpir_stops_on_match() {
    let mut bus = SimpleBus::new();
    bus.load(0x1000, &[0x10, 0x42, 0x30]);
    bus.load(0x0000, &[
        0x21, 0x00, 0x10, // LD HL, 0x1000
        0x01, 0x03, 0x00, // LD BC, 3
        0x3E, 0x42,       // LD A, 0x42
        0xED, 0xB1,       // CPIR
        0x76,             // HALT
    ]);
    let mut cpu = Z80::new();
    for _ in 0..3 {
        cpu.step(&mut bus).unwrap();
    }
    assert_eq!(cpu.step(&mut bus).unwrap(), 21);
    assert_eq!(cpu.step(&mut bus).unwrap(), 16);

    let regs = cpu.registers();
    assert_eq!(regs.pc, 0x000A);
    assert_eq!(regs.hl(), 0x1002);
    assert_eq!(regs.bc(), 1);
    assert_ne!(regs.f & ZF, 0);
    assert_ne!(regs.f & PF, 0, "BC not exhausted");
}

#[test]
fn test_cpdr_exhausts() {
    let mut bus = SimpleBus::new();
    bus.load(0x1000, &[0x01, 0x02]);
    bus.load(0x0000, &[
        0x21, 0x01, 0x10, // LD HL, 0x1001
        0x01, 0x02, 0x00, // LD BC, 2
        0x3E, 0x42,       // LD A, 0x42
        0xED, 0xB9,       // CPDR
        0x76,             // HALT
    ]);
    let mut cpu = Z80::new();
    while !cpu.is_halted() {
        cpu.step(&mut bus).unwrap();
    }
    let regs = cpu.registers();
    assert_eq!(regs.bc(), 0);
    assert_eq!(regs.hl(), 0x0FFF);
    assert_eq!(regs.f & (ZF | PF), 0);
}
