//! Disassembler.
//!
//! Walks the same decoder the CPU uses, reading through `peek` so memory
//! and I/O side effects never fire.

use std::fmt::{self, Write as _};

use emu_core::Bus;

use crate::decode::{Decoder, Operand, Prefix, Table};

/// One disassembled instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub address: u16,
    pub bytes: Vec<u8>,
    pub text: String,
}

impl Line {
    /// Address of the following instruction.
    #[must_use]
    pub fn next(&self) -> u16 {
        self.address.wrapping_add(self.bytes.len() as u16)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut hex = String::with_capacity(12);
        for byte in &self.bytes {
            let _ = write!(hex, "{byte:02X} ");
        }
        write!(f, "{:04X}  {hex:<12} {}", self.address, self.text)
    }
}

/// Operand values pulled from the instruction stream.
#[derive(Default)]
struct Operands {
    n: u8,
    nn: u16,
    d: i8,
}

struct Cursor<'a, B: Bus + ?Sized> {
    bus: &'a B,
    address: u16,
    bytes: Vec<u8>,
}

impl<B: Bus + ?Sized> Cursor<'_, B> {
    fn next(&mut self) -> u8 {
        let byte = self.bus.peek(self.address);
        self.address = self.address.wrapping_add(1);
        self.bytes.push(byte);
        byte
    }
}

/// Disassemble the instruction at `address`.
pub fn disassemble_one<B: Bus + ?Sized>(bus: &B, address: u16) -> Line {
    let mut cursor = Cursor {
        bus,
        address,
        bytes: Vec::with_capacity(4),
    };
    let mut decoder = Decoder::new();

    while !decoder.is_ready() {
        let byte = cursor.next();
        if decoder.feed(byte).is_err() {
            return Line {
                address,
                text: format!("DB ${byte:02X}"),
                bytes: cursor.bytes,
            };
        }
    }
    if decoder.table == Table::IndexBit {
        let opcode = cursor.next();
        decoder.set_index_opcode(opcode);
    }

    let entry = decoder.entry();
    #[allow(clippy::cast_possible_wrap)]
    let ops = match entry.operand {
        Operand::Byte => Operands {
            n: cursor.next(),
            ..Operands::default()
        },
        Operand::Word => {
            let lo = cursor.next();
            let hi = cursor.next();
            Operands {
                nn: u16::from_le_bytes([lo, hi]),
                ..Operands::default()
            }
        }
        Operand::Relative | Operand::Index => Operands {
            d: cursor.next() as i8,
            ..Operands::default()
        },
        Operand::IndexByte => {
            let d = cursor.next() as i8;
            Operands {
                n: cursor.next(),
                d,
                ..Operands::default()
            }
        }
        Operand::Inverted => Operands {
            d: decoder.displacement as i8,
            ..Operands::default()
        },
        Operand::Implied | Operand::Gateway => Operands::default(),
    };

    let mut text = render(entry.template, &ops, cursor.address);
    if decoder.table == Table::IndexBit && decoder.prefix == Prefix::Iy {
        text = text.replace("IX", "IY");
    }

    Line {
        address,
        bytes: cursor.bytes,
        text,
    }
}

/// Disassemble `count` consecutive instructions, one per line.
pub fn disassemble<B: Bus + ?Sized>(bus: &B, address: u16, count: usize) -> String {
    let mut out = String::new();
    let mut address = address;
    for i in 0..count {
        let line = disassemble_one(bus, address);
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{line}");
        address = line.next();
    }
    out
}

fn render(template: &str, ops: &Operands, next: u16) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let field = &rest[start + 1..start + len];
        match field {
            "n" => {
                let _ = write!(out, "${:02X}", ops.n);
            }
            "nn" => {
                let _ = write!(out, "${:04X}", ops.nn);
            }
            "e" => {
                let target = next.wrapping_add_signed(i16::from(ops.d));
                let _ = write!(out, "${target:04X}");
            }
            "d" => {
                let sign = if ops.d < 0 { '-' } else { '+' };
                let _ = write!(out, "{sign}${:02X}", ops.d.unsigned_abs());
            }
            _ => out.push_str(&rest[start..=start + len]),
        }
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use emu_core::SimpleBus;

    fn text(bytes: &[u8]) -> String {
        let mut bus = SimpleBus::new();
        bus.load(0x8000, bytes);
        disassemble_one(&bus, 0x8000).text
    }

    #[test]
    fn operands() {
        assert_eq!(text(&[0x3E, 0x05]), "LD A,$05");
        assert_eq!(text(&[0x21, 0x34, 0x12]), "LD HL,$1234");
        assert_eq!(text(&[0x32, 0x00, 0xC0]), "LD ($C000),A");
        assert_eq!(text(&[0xC6, 0x03]), "ADD A,$03");
        assert_eq!(text(&[0xFF]), "RST $38");
    }

    #[test]
    fn relative_branches_resolve_to_targets() {
        assert_eq!(text(&[0x18, 0xFE]), "JR $8000");
        assert_eq!(text(&[0x20, 0x10]), "JR NZ,$8012");
        assert_eq!(text(&[0x10, 0x80]), "DJNZ $7F82");
    }

    #[test]
    fn index_forms() {
        assert_eq!(text(&[0xDD, 0x36, 0x02, 0xAA]), "LD (IX+$02),$AA");
        assert_eq!(text(&[0xFD, 0x7E, 0xFD]), "LD A,(IY-$03)");
        assert_eq!(text(&[0xDD, 0x26, 0x10]), "LD IXH,$10");
        assert_eq!(text(&[0xDD, 0xCB, 0x01, 0x06]), "RLC (IX+$01)");
        assert_eq!(text(&[0xFD, 0xCB, 0x01, 0x46]), "BIT 0,(IY+$01)");
        assert_eq!(text(&[0xFD, 0xCB, 0xFF, 0xC0]), "SET 0,(IY-$01),B");
    }

    #[test]
    fn prefixed_tables() {
        assert_eq!(text(&[0xCB, 0x7C]), "BIT 7,H");
        assert_eq!(text(&[0xED, 0xB0]), "LDIR");
        assert_eq!(text(&[0xED, 0x43, 0x00, 0x40]), "LD ($4000),BC");
        assert_eq!(text(&[0xED, 0x00]), "NOP*");
    }

    #[test]
    fn voided_prefix_is_part_of_the_line() {
        let mut bus = SimpleBus::new();
        bus.load(0x0000, &[0xDD, 0x00]);
        let line = disassemble_one(&bus, 0x0000);
        assert_eq!(line.text, "NOP");
        assert_eq!(line.bytes, [0xDD, 0x00]);
    }

    #[test]
    fn listing() {
        let mut bus = SimpleBus::new();
        bus.load(0x0000, &[0x3E, 0x05, 0xC6, 0x03, 0x76]);
        let listing = disassemble(&bus, 0x0000, 3);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("0000  3E 05"));
        assert!(lines[0].ends_with("LD A,$05"));
        assert!(lines[1].ends_with("ADD A,$03"));
        assert!(lines[2].ends_with("HALT"));
    }
}
