//! `DD`-prefixed opcodes: the main table with HL replaced by IX.
//!
//! `Unprefixed` slots void the prefix and run the main-table opcode.

use super::Operand::{Byte, Gateway, Implied, Index, IndexByte, Word};
use super::{Entry, Op};

pub(super) static IX: [Entry; 256] = [
    /* 00 */ Entry::new("NOP", Op::Unprefixed, Implied, 4, 1),
    /* 01 */ Entry::new("LD BC,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* 02 */ Entry::new("LD (BC),A", Op::Unprefixed, Implied, 4, 1),
    /* 03 */ Entry::new("INC BC", Op::Unprefixed, Implied, 4, 1),
    /* 04 */ Entry::new("INC B", Op::Unprefixed, Implied, 4, 1),
    /* 05 */ Entry::new("DEC B", Op::Unprefixed, Implied, 4, 1),
    /* 06 */ Entry::new("LD B,{n}", Op::Unprefixed, Implied, 4, 1),
    /* 07 */ Entry::new("RLCA", Op::Unprefixed, Implied, 4, 1),
    /* 08 */ Entry::new("EX AF,AF'", Op::Unprefixed, Implied, 4, 1),
    /* 09 */ Entry::new("ADD IX,BC", Op::AddHlRp, Implied, 15, 2),
    /* 0A */ Entry::new("LD A,(BC)", Op::Unprefixed, Implied, 4, 1),
    /* 0B */ Entry::new("DEC BC", Op::Unprefixed, Implied, 4, 1),
    /* 0C */ Entry::new("INC C", Op::Unprefixed, Implied, 4, 1),
    /* 0D */ Entry::new("DEC C", Op::Unprefixed, Implied, 4, 1),
    /* 0E */ Entry::new("LD C,{n}", Op::Unprefixed, Implied, 4, 1),
    /* 0F */ Entry::new("RRCA", Op::Unprefixed, Implied, 4, 1),
    /* 10 */ Entry::new("DJNZ {e}", Op::Unprefixed, Implied, 4, 1),
    /* 11 */ Entry::new("LD DE,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* 12 */ Entry::new("LD (DE),A", Op::Unprefixed, Implied, 4, 1),
    /* 13 */ Entry::new("INC DE", Op::Unprefixed, Implied, 4, 1),
    /* 14 */ Entry::new("INC D", Op::Unprefixed, Implied, 4, 1),
    /* 15 */ Entry::new("DEC D", Op::Unprefixed, Implied, 4, 1),
    /* 16 */ Entry::new("LD D,{n}", Op::Unprefixed, Implied, 4, 1),
    /* 17 */ Entry::new("RLA", Op::Unprefixed, Implied, 4, 1),
    /* 18 */ Entry::new("JR {e}", Op::Unprefixed, Implied, 4, 1),
    /* 19 */ Entry::new("ADD IX,DE", Op::AddHlRp, Implied, 15, 2),
    /* 1A */ Entry::new("LD A,(DE)", Op::Unprefixed, Implied, 4, 1),
    /* 1B */ Entry::new("DEC DE", Op::Unprefixed, Implied, 4, 1),
    /* 1C */ Entry::new("INC E", Op::Unprefixed, Implied, 4, 1),
    /* 1D */ Entry::new("DEC E", Op::Unprefixed, Implied, 4, 1),
    /* 1E */ Entry::new("LD E,{n}", Op::Unprefixed, Implied, 4, 1),
    /* 1F */ Entry::new("RRA", Op::Unprefixed, Implied, 4, 1),
    /* 20 */ Entry::new("JR NZ,{e}", Op::Unprefixed, Implied, 4, 1),
    /* 21 */ Entry::new("LD IX,{nn}", Op::LdRpNn, Word, 14, 4),
    /* 22 */ Entry::new("LD ({nn}),IX", Op::LdNnHl, Word, 20, 4),
    /* 23 */ Entry::new("INC IX", Op::IncRp, Implied, 10, 2),
    /* 24 */ Entry::new("INC IXH", Op::IncR, Implied, 8, 2),
    /* 25 */ Entry::new("DEC IXH", Op::DecR, Implied, 8, 2),
    /* 26 */ Entry::new("LD IXH,{n}", Op::LdRN, Byte, 11, 3),
    /* 27 */ Entry::new("DAA", Op::Unprefixed, Implied, 4, 1),
    /* 28 */ Entry::new("JR Z,{e}", Op::Unprefixed, Implied, 4, 1),
    /* 29 */ Entry::new("ADD IX,IX", Op::AddHlRp, Implied, 15, 2),
    /* 2A */ Entry::new("LD IX,({nn})", Op::LdHlNn, Word, 20, 4),
    /* 2B */ Entry::new("DEC IX", Op::DecRp, Implied, 10, 2),
    /* 2C */ Entry::new("INC IXL", Op::IncR, Implied, 8, 2),
    /* 2D */ Entry::new("DEC IXL", Op::DecR, Implied, 8, 2),
    /* 2E */ Entry::new("LD IXL,{n}", Op::LdRN, Byte, 11, 3),
    /* 2F */ Entry::new("CPL", Op::Unprefixed, Implied, 4, 1),
    /* 30 */ Entry::new("JR NC,{e}", Op::Unprefixed, Implied, 4, 1),
    /* 31 */ Entry::new("LD SP,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* 32 */ Entry::new("LD ({nn}),A", Op::Unprefixed, Implied, 4, 1),
    /* 33 */ Entry::new("INC SP", Op::Unprefixed, Implied, 4, 1),
    /* 34 */ Entry::new("INC (IX{d})", Op::IncMem, Index, 23, 3),
    /* 35 */ Entry::new("DEC (IX{d})", Op::DecMem, Index, 23, 3),
    /* 36 */ Entry::new("LD (IX{d}),{n}", Op::LdMemN, IndexByte, 19, 4),
    /* 37 */ Entry::new("SCF", Op::Unprefixed, Implied, 4, 1),
    /* 38 */ Entry::new("JR C,{e}", Op::Unprefixed, Implied, 4, 1),
    /* 39 */ Entry::new("ADD IX,SP", Op::AddHlRp, Implied, 15, 2),
    /* 3A */ Entry::new("LD A,({nn})", Op::Unprefixed, Implied, 4, 1),
    /* 3B */ Entry::new("DEC SP", Op::Unprefixed, Implied, 4, 1),
    /* 3C */ Entry::new("INC A", Op::Unprefixed, Implied, 4, 1),
    /* 3D */ Entry::new("DEC A", Op::Unprefixed, Implied, 4, 1),
    /* 3E */ Entry::new("LD A,{n}", Op::Unprefixed, Implied, 4, 1),
    /* 3F */ Entry::new("CCF", Op::Unprefixed, Implied, 4, 1),
    /* 40 */ Entry::new("LD B,B", Op::Unprefixed, Implied, 4, 1),
    /* 41 */ Entry::new("LD B,C", Op::Unprefixed, Implied, 4, 1),
    /* 42 */ Entry::new("LD B,D", Op::Unprefixed, Implied, 4, 1),
    /* 43 */ Entry::new("LD B,E", Op::Unprefixed, Implied, 4, 1),
    /* 44 */ Entry::new("LD B,IXH", Op::LdRR, Implied, 8, 2),
    /* 45 */ Entry::new("LD B,IXL", Op::LdRR, Implied, 8, 2),
    /* 46 */ Entry::new("LD B,(IX{d})", Op::LdRMem, Index, 19, 3),
    /* 47 */ Entry::new("LD B,A", Op::Unprefixed, Implied, 4, 1),
    /* 48 */ Entry::new("LD C,B", Op::Unprefixed, Implied, 4, 1),
    /* 49 */ Entry::new("LD C,C", Op::Unprefixed, Implied, 4, 1),
    /* 4A */ Entry::new("LD C,D", Op::Unprefixed, Implied, 4, 1),
    /* 4B */ Entry::new("LD C,E", Op::Unprefixed, Implied, 4, 1),
    /* 4C */ Entry::new("LD C,IXH", Op::LdRR, Implied, 8, 2),
    /* 4D */ Entry::new("LD C,IXL", Op::LdRR, Implied, 8, 2),
    /* 4E */ Entry::new("LD C,(IX{d})", Op::LdRMem, Index, 19, 3),
    /* 4F */ Entry::new("LD C,A", Op::Unprefixed, Implied, 4, 1),
    /* 50 */ Entry::new("LD D,B", Op::Unprefixed, Implied, 4, 1),
    /* 51 */ Entry::new("LD D,C", Op::Unprefixed, Implied, 4, 1),
    /* 52 */ Entry::new("LD D,D", Op::Unprefixed, Implied, 4, 1),
    /* 53 */ Entry::new("LD D,E", Op::Unprefixed, Implied, 4, 1),
    /* 54 */ Entry::new("LD D,IXH", Op::LdRR, Implied, 8, 2),
    /* 55 */ Entry::new("LD D,IXL", Op::LdRR, Implied, 8, 2),
    /* 56 */ Entry::new("LD D,(IX{d})", Op::LdRMem, Index, 19, 3),
    /* 57 */ Entry::new("LD D,A", Op::Unprefixed, Implied, 4, 1),
    /* 58 */ Entry::new("LD E,B", Op::Unprefixed, Implied, 4, 1),
    /* 59 */ Entry::new("LD E,C", Op::Unprefixed, Implied, 4, 1),
    /* 5A */ Entry::new("LD E,D", Op::Unprefixed, Implied, 4, 1),
    /* 5B */ Entry::new("LD E,E", Op::Unprefixed, Implied, 4, 1),
    /* 5C */ Entry::new("LD E,IXH", Op::LdRR, Implied, 8, 2),
    /* 5D */ Entry::new("LD E,IXL", Op::LdRR, Implied, 8, 2),
    /* 5E */ Entry::new("LD E,(IX{d})", Op::LdRMem, Index, 19, 3),
    /* 5F */ Entry::new("LD E,A", Op::Unprefixed, Implied, 4, 1),
    /* 60 */ Entry::new("LD IXH,B", Op::LdRR, Implied, 8, 2),
    /* 61 */ Entry::new("LD IXH,C", Op::LdRR, Implied, 8, 2),
    /* 62 */ Entry::new("LD IXH,D", Op::LdRR, Implied, 8, 2),
    /* 63 */ Entry::new("LD IXH,E", Op::LdRR, Implied, 8, 2),
    /* 64 */ Entry::new("LD IXH,IXH", Op::LdRR, Implied, 8, 2),
    /* 65 */ Entry::new("LD IXH,IXL", Op::LdRR, Implied, 8, 2),
    /* 66 */ Entry::new("LD H,(IX{d})", Op::LdRMem, Index, 19, 3),
    /* 67 */ Entry::new("LD IXH,A", Op::LdRR, Implied, 8, 2),
    /* 68 */ Entry::new("LD IXL,B", Op::LdRR, Implied, 8, 2),
    /* 69 */ Entry::new("LD IXL,C", Op::LdRR, Implied, 8, 2),
    /* 6A */ Entry::new("LD IXL,D", Op::LdRR, Implied, 8, 2),
    /* 6B */ Entry::new("LD IXL,E", Op::LdRR, Implied, 8, 2),
    /* 6C */ Entry::new("LD IXL,IXH", Op::LdRR, Implied, 8, 2),
    /* 6D */ Entry::new("LD IXL,IXL", Op::LdRR, Implied, 8, 2),
    /* 6E */ Entry::new("LD L,(IX{d})", Op::LdRMem, Index, 19, 3),
    /* 6F */ Entry::new("LD IXL,A", Op::LdRR, Implied, 8, 2),
    /* 70 */ Entry::new("LD (IX{d}),B", Op::LdMemR, Index, 19, 3),
    /* 71 */ Entry::new("LD (IX{d}),C", Op::LdMemR, Index, 19, 3),
    /* 72 */ Entry::new("LD (IX{d}),D", Op::LdMemR, Index, 19, 3),
    /* 73 */ Entry::new("LD (IX{d}),E", Op::LdMemR, Index, 19, 3),
    /* 74 */ Entry::new("LD (IX{d}),H", Op::LdMemR, Index, 19, 3),
    /* 75 */ Entry::new("LD (IX{d}),L", Op::LdMemR, Index, 19, 3),
    /* 76 */ Entry::new("HALT", Op::Unprefixed, Implied, 4, 1),
    /* 77 */ Entry::new("LD (IX{d}),A", Op::LdMemR, Index, 19, 3),
    /* 78 */ Entry::new("LD A,B", Op::Unprefixed, Implied, 4, 1),
    /* 79 */ Entry::new("LD A,C", Op::Unprefixed, Implied, 4, 1),
    /* 7A */ Entry::new("LD A,D", Op::Unprefixed, Implied, 4, 1),
    /* 7B */ Entry::new("LD A,E", Op::Unprefixed, Implied, 4, 1),
    /* 7C */ Entry::new("LD A,IXH", Op::LdRR, Implied, 8, 2),
    /* 7D */ Entry::new("LD A,IXL", Op::LdRR, Implied, 8, 2),
    /* 7E */ Entry::new("LD A,(IX{d})", Op::LdRMem, Index, 19, 3),
    /* 7F */ Entry::new("LD A,A", Op::Unprefixed, Implied, 4, 1),
    /* 80 */ Entry::new("ADD A,B", Op::Unprefixed, Implied, 4, 1),
    /* 81 */ Entry::new("ADD A,C", Op::Unprefixed, Implied, 4, 1),
    /* 82 */ Entry::new("ADD A,D", Op::Unprefixed, Implied, 4, 1),
    /* 83 */ Entry::new("ADD A,E", Op::Unprefixed, Implied, 4, 1),
    /* 84 */ Entry::new("ADD A,IXH", Op::AluR, Implied, 8, 2),
    /* 85 */ Entry::new("ADD A,IXL", Op::AluR, Implied, 8, 2),
    /* 86 */ Entry::new("ADD A,(IX{d})", Op::AluMem, Index, 19, 3),
    /* 87 */ Entry::new("ADD A,A", Op::Unprefixed, Implied, 4, 1),
    /* 88 */ Entry::new("ADC A,B", Op::Unprefixed, Implied, 4, 1),
    /* 89 */ Entry::new("ADC A,C", Op::Unprefixed, Implied, 4, 1),
    /* 8A */ Entry::new("ADC A,D", Op::Unprefixed, Implied, 4, 1),
    /* 8B */ Entry::new("ADC A,E", Op::Unprefixed, Implied, 4, 1),
    /* 8C */ Entry::new("ADC A,IXH", Op::AluR, Implied, 8, 2),
    /* 8D */ Entry::new("ADC A,IXL", Op::AluR, Implied, 8, 2),
    /* 8E */ Entry::new("ADC A,(IX{d})", Op::AluMem, Index, 19, 3),
    /* 8F */ Entry::new("ADC A,A", Op::Unprefixed, Implied, 4, 1),
    /* 90 */ Entry::new("SUB B", Op::Unprefixed, Implied, 4, 1),
    /* 91 */ Entry::new("SUB C", Op::Unprefixed, Implied, 4, 1),
    /* 92 */ Entry::new("SUB D", Op::Unprefixed, Implied, 4, 1),
    /* 93 */ Entry::new("SUB E", Op::Unprefixed, Implied, 4, 1),
    /* 94 */ Entry::new("SUB IXH", Op::AluR, Implied, 8, 2),
    /* 95 */ Entry::new("SUB IXL", Op::AluR, Implied, 8, 2),
    /* 96 */ Entry::new("SUB (IX{d})", Op::AluMem, Index, 19, 3),
    /* 97 */ Entry::new("SUB A", Op::Unprefixed, Implied, 4, 1),
    /* 98 */ Entry::new("SBC A,B", Op::Unprefixed, Implied, 4, 1),
    /* 99 */ Entry::new("SBC A,C", Op::Unprefixed, Implied, 4, 1),
    /* 9A */ Entry::new("SBC A,D", Op::Unprefixed, Implied, 4, 1),
    /* 9B */ Entry::new("SBC A,E", Op::Unprefixed, Implied, 4, 1),
    /* 9C */ Entry::new("SBC A,IXH", Op::AluR, Implied, 8, 2),
    /* 9D */ Entry::new("SBC A,IXL", Op::AluR, Implied, 8, 2),
    /* 9E */ Entry::new("SBC A,(IX{d})", Op::AluMem, Index, 19, 3),
    /* 9F */ Entry::new("SBC A,A", Op::Unprefixed, Implied, 4, 1),
    /* A0 */ Entry::new("AND B", Op::Unprefixed, Implied, 4, 1),
    /* A1 */ Entry::new("AND C", Op::Unprefixed, Implied, 4, 1),
    /* A2 */ Entry::new("AND D", Op::Unprefixed, Implied, 4, 1),
    /* A3 */ Entry::new("AND E", Op::Unprefixed, Implied, 4, 1),
    /* A4 */ Entry::new("AND IXH", Op::AluR, Implied, 8, 2),
    /* A5 */ Entry::new("AND IXL", Op::AluR, Implied, 8, 2),
    /* A6 */ Entry::new("AND (IX{d})", Op::AluMem, Index, 19, 3),
    /* A7 */ Entry::new("AND A", Op::Unprefixed, Implied, 4, 1),
    /* A8 */ Entry::new("XOR B", Op::Unprefixed, Implied, 4, 1),
    /* A9 */ Entry::new("XOR C", Op::Unprefixed, Implied, 4, 1),
    /* AA */ Entry::new("XOR D", Op::Unprefixed, Implied, 4, 1),
    /* AB */ Entry::new("XOR E", Op::Unprefixed, Implied, 4, 1),
    /* AC */ Entry::new("XOR IXH", Op::AluR, Implied, 8, 2),
    /* AD */ Entry::new("XOR IXL", Op::AluR, Implied, 8, 2),
    /* AE */ Entry::new("XOR (IX{d})", Op::AluMem, Index, 19, 3),
    /* AF */ Entry::new("XOR A", Op::Unprefixed, Implied, 4, 1),
    /* B0 */ Entry::new("OR B", Op::Unprefixed, Implied, 4, 1),
    /* B1 */ Entry::new("OR C", Op::Unprefixed, Implied, 4, 1),
    /* B2 */ Entry::new("OR D", Op::Unprefixed, Implied, 4, 1),
    /* B3 */ Entry::new("OR E", Op::Unprefixed, Implied, 4, 1),
    /* B4 */ Entry::new("OR IXH", Op::AluR, Implied, 8, 2),
    /* B5 */ Entry::new("OR IXL", Op::AluR, Implied, 8, 2),
    /* B6 */ Entry::new("OR (IX{d})", Op::AluMem, Index, 19, 3),
    /* B7 */ Entry::new("OR A", Op::Unprefixed, Implied, 4, 1),
    /* B8 */ Entry::new("CP B", Op::Unprefixed, Implied, 4, 1),
    /* B9 */ Entry::new("CP C", Op::Unprefixed, Implied, 4, 1),
    /* BA */ Entry::new("CP D", Op::Unprefixed, Implied, 4, 1),
    /* BB */ Entry::new("CP E", Op::Unprefixed, Implied, 4, 1),
    /* BC */ Entry::new("CP IXH", Op::AluR, Implied, 8, 2),
    /* BD */ Entry::new("CP IXL", Op::AluR, Implied, 8, 2),
    /* BE */ Entry::new("CP (IX{d})", Op::AluMem, Index, 19, 3),
    /* BF */ Entry::new("CP A", Op::Unprefixed, Implied, 4, 1),
    /* C0 */ Entry::new("RET NZ", Op::Unprefixed, Implied, 4, 1),
    /* C1 */ Entry::new("POP BC", Op::Unprefixed, Implied, 4, 1),
    /* C2 */ Entry::new("JP NZ,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* C3 */ Entry::new("JP {nn}", Op::Unprefixed, Implied, 4, 1),
    /* C4 */ Entry::new("CALL NZ,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* C5 */ Entry::new("PUSH BC", Op::Unprefixed, Implied, 4, 1),
    /* C6 */ Entry::new("ADD A,{n}", Op::Unprefixed, Implied, 4, 1),
    /* C7 */ Entry::new("RST $00", Op::Unprefixed, Implied, 4, 1),
    /* C8 */ Entry::new("RET Z", Op::Unprefixed, Implied, 4, 1),
    /* C9 */ Entry::new("RET", Op::Unprefixed, Implied, 4, 1),
    /* CA */ Entry::new("JP Z,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* CB */ Entry::new("", Op::Prefix, Gateway, 4, 1),
    /* CC */ Entry::new("CALL Z,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* CD */ Entry::new("CALL {nn}", Op::Unprefixed, Implied, 4, 1),
    /* CE */ Entry::new("ADC A,{n}", Op::Unprefixed, Implied, 4, 1),
    /* CF */ Entry::new("RST $08", Op::Unprefixed, Implied, 4, 1),
    /* D0 */ Entry::new("RET NC", Op::Unprefixed, Implied, 4, 1),
    /* D1 */ Entry::new("POP DE", Op::Unprefixed, Implied, 4, 1),
    /* D2 */ Entry::new("JP NC,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* D3 */ Entry::new("OUT ({n}),A", Op::Unprefixed, Implied, 4, 1),
    /* D4 */ Entry::new("CALL NC,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* D5 */ Entry::new("PUSH DE", Op::Unprefixed, Implied, 4, 1),
    /* D6 */ Entry::new("SUB {n}", Op::Unprefixed, Implied, 4, 1),
    /* D7 */ Entry::new("RST $10", Op::Unprefixed, Implied, 4, 1),
    /* D8 */ Entry::new("RET C", Op::Unprefixed, Implied, 4, 1),
    /* D9 */ Entry::new("EXX", Op::Unprefixed, Implied, 4, 1),
    /* DA */ Entry::new("JP C,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* DB */ Entry::new("IN A,({n})", Op::Unprefixed, Implied, 4, 1),
    /* DC */ Entry::new("CALL C,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* DD */ Entry::new("", Op::Prefix, Gateway, 4, 1),
    /* DE */ Entry::new("SBC A,{n}", Op::Unprefixed, Implied, 4, 1),
    /* DF */ Entry::new("RST $18", Op::Unprefixed, Implied, 4, 1),
    /* E0 */ Entry::new("RET PO", Op::Unprefixed, Implied, 4, 1),
    /* E1 */ Entry::new("POP IX", Op::Pop, Implied, 14, 2),
    /* E2 */ Entry::new("JP PO,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* E3 */ Entry::new("EX (SP),IX", Op::ExSpHl, Implied, 23, 2),
    /* E4 */ Entry::new("CALL PO,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* E5 */ Entry::new("PUSH IX", Op::Push, Implied, 15, 2),
    /* E6 */ Entry::new("AND {n}", Op::Unprefixed, Implied, 4, 1),
    /* E7 */ Entry::new("RST $20", Op::Unprefixed, Implied, 4, 1),
    /* E8 */ Entry::new("RET PE", Op::Unprefixed, Implied, 4, 1),
    /* E9 */ Entry::new("JP (IX)", Op::JpHl, Implied, 8, 2),
    /* EA */ Entry::new("JP PE,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* EB */ Entry::new("EX DE,HL", Op::Unprefixed, Implied, 4, 1),
    /* EC */ Entry::new("CALL PE,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* ED */ Entry::new("", Op::Prefix, Gateway, 4, 1),
    /* EE */ Entry::new("XOR {n}", Op::Unprefixed, Implied, 4, 1),
    /* EF */ Entry::new("RST $28", Op::Unprefixed, Implied, 4, 1),
    /* F0 */ Entry::new("RET P", Op::Unprefixed, Implied, 4, 1),
    /* F1 */ Entry::new("POP AF", Op::Unprefixed, Implied, 4, 1),
    /* F2 */ Entry::new("JP P,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* F3 */ Entry::new("DI", Op::Unprefixed, Implied, 4, 1),
    /* F4 */ Entry::new("CALL P,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* F5 */ Entry::new("PUSH AF", Op::Unprefixed, Implied, 4, 1),
    /* F6 */ Entry::new("OR {n}", Op::Unprefixed, Implied, 4, 1),
    /* F7 */ Entry::new("RST $30", Op::Unprefixed, Implied, 4, 1),
    /* F8 */ Entry::new("RET M", Op::Unprefixed, Implied, 4, 1),
    /* F9 */ Entry::new("LD SP,IX", Op::LdSpHl, Implied, 10, 2),
    /* FA */ Entry::new("JP M,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* FB */ Entry::new("EI", Op::Unprefixed, Implied, 4, 1),
    /* FC */ Entry::new("CALL M,{nn}", Op::Unprefixed, Implied, 4, 1),
    /* FD */ Entry::new("", Op::Prefix, Gateway, 4, 1),
    /* FE */ Entry::new("CP {n}", Op::Unprefixed, Implied, 4, 1),
    /* FF */ Entry::new("RST $38", Op::Unprefixed, Implied, 4, 1),
];
