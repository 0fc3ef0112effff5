//! Unprefixed opcodes.

use super::Operand::{Byte, Gateway, Implied, Relative, Word};
use super::{Entry, Op};

pub(super) static MAIN: [Entry; 256] = [
    /* 00 */ Entry::new("NOP", Op::Nop, Implied, 4, 1),
    /* 01 */ Entry::new("LD BC,{nn}", Op::LdRpNn, Word, 10, 3),
    /* 02 */ Entry::new("LD (BC),A", Op::LdRpIndA, Implied, 7, 1),
    /* 03 */ Entry::new("INC BC", Op::IncRp, Implied, 6, 1),
    /* 04 */ Entry::new("INC B", Op::IncR, Implied, 4, 1),
    /* 05 */ Entry::new("DEC B", Op::DecR, Implied, 4, 1),
    /* 06 */ Entry::new("LD B,{n}", Op::LdRN, Byte, 7, 2),
    /* 07 */ Entry::new("RLCA", Op::RotateA, Implied, 4, 1),
    /* 08 */ Entry::new("EX AF,AF'", Op::ExAfAf, Implied, 4, 1),
    /* 09 */ Entry::new("ADD HL,BC", Op::AddHlRp, Implied, 11, 1),
    /* 0A */ Entry::new("LD A,(BC)", Op::LdARpInd, Implied, 7, 1),
    /* 0B */ Entry::new("DEC BC", Op::DecRp, Implied, 6, 1),
    /* 0C */ Entry::new("INC C", Op::IncR, Implied, 4, 1),
    /* 0D */ Entry::new("DEC C", Op::DecR, Implied, 4, 1),
    /* 0E */ Entry::new("LD C,{n}", Op::LdRN, Byte, 7, 2),
    /* 0F */ Entry::new("RRCA", Op::RotateA, Implied, 4, 1),
    /* 10 */ Entry::new("DJNZ {e}", Op::Djnz, Relative, 13, 2),
    /* 11 */ Entry::new("LD DE,{nn}", Op::LdRpNn, Word, 10, 3),
    /* 12 */ Entry::new("LD (DE),A", Op::LdRpIndA, Implied, 7, 1),
    /* 13 */ Entry::new("INC DE", Op::IncRp, Implied, 6, 1),
    /* 14 */ Entry::new("INC D", Op::IncR, Implied, 4, 1),
    /* 15 */ Entry::new("DEC D", Op::DecR, Implied, 4, 1),
    /* 16 */ Entry::new("LD D,{n}", Op::LdRN, Byte, 7, 2),
    /* 17 */ Entry::new("RLA", Op::RotateA, Implied, 4, 1),
    /* 18 */ Entry::new("JR {e}", Op::Jr, Relative, 12, 2),
    /* 19 */ Entry::new("ADD HL,DE", Op::AddHlRp, Implied, 11, 1),
    /* 1A */ Entry::new("LD A,(DE)", Op::LdARpInd, Implied, 7, 1),
    /* 1B */ Entry::new("DEC DE", Op::DecRp, Implied, 6, 1),
    /* 1C */ Entry::new("INC E", Op::IncR, Implied, 4, 1),
    /* 1D */ Entry::new("DEC E", Op::DecR, Implied, 4, 1),
    /* 1E */ Entry::new("LD E,{n}", Op::LdRN, Byte, 7, 2),
    /* 1F */ Entry::new("RRA", Op::RotateA, Implied, 4, 1),
    /* 20 */ Entry::new("JR NZ,{e}", Op::JrCc, Relative, 12, 2),
    /* 21 */ Entry::new("LD HL,{nn}", Op::LdRpNn, Word, 10, 3),
    /* 22 */ Entry::new("LD ({nn}),HL", Op::LdNnHl, Word, 16, 3),
    /* 23 */ Entry::new("INC HL", Op::IncRp, Implied, 6, 1),
    /* 24 */ Entry::new("INC H", Op::IncR, Implied, 4, 1),
    /* 25 */ Entry::new("DEC H", Op::DecR, Implied, 4, 1),
    /* 26 */ Entry::new("LD H,{n}", Op::LdRN, Byte, 7, 2),
    /* 27 */ Entry::new("DAA", Op::Daa, Implied, 4, 1),
    /* 28 */ Entry::new("JR Z,{e}", Op::JrCc, Relative, 12, 2),
    /* 29 */ Entry::new("ADD HL,HL", Op::AddHlRp, Implied, 11, 1),
    /* 2A */ Entry::new("LD HL,({nn})", Op::LdHlNn, Word, 16, 3),
    /* 2B */ Entry::new("DEC HL", Op::DecRp, Implied, 6, 1),
    /* 2C */ Entry::new("INC L", Op::IncR, Implied, 4, 1),
    /* 2D */ Entry::new("DEC L", Op::DecR, Implied, 4, 1),
    /* 2E */ Entry::new("LD L,{n}", Op::LdRN, Byte, 7, 2),
    /* 2F */ Entry::new("CPL", Op::Cpl, Implied, 4, 1),
    /* 30 */ Entry::new("JR NC,{e}", Op::JrCc, Relative, 12, 2),
    /* 31 */ Entry::new("LD SP,{nn}", Op::LdRpNn, Word, 10, 3),
    /* 32 */ Entry::new("LD ({nn}),A", Op::LdNnA, Word, 13, 3),
    /* 33 */ Entry::new("INC SP", Op::IncRp, Implied, 6, 1),
    /* 34 */ Entry::new("INC (HL)", Op::IncMem, Implied, 11, 1),
    /* 35 */ Entry::new("DEC (HL)", Op::DecMem, Implied, 11, 1),
    /* 36 */ Entry::new("LD (HL),{n}", Op::LdMemN, Byte, 10, 2),
    /* 37 */ Entry::new("SCF", Op::Scf, Implied, 4, 1),
    /* 38 */ Entry::new("JR C,{e}", Op::JrCc, Relative, 12, 2),
    /* 39 */ Entry::new("ADD HL,SP", Op::AddHlRp, Implied, 11, 1),
    /* 3A */ Entry::new("LD A,({nn})", Op::LdANn, Word, 13, 3),
    /* 3B */ Entry::new("DEC SP", Op::DecRp, Implied, 6, 1),
    /* 3C */ Entry::new("INC A", Op::IncR, Implied, 4, 1),
    /* 3D */ Entry::new("DEC A", Op::DecR, Implied, 4, 1),
    /* 3E */ Entry::new("LD A,{n}", Op::LdRN, Byte, 7, 2),
    /* 3F */ Entry::new("CCF", Op::Ccf, Implied, 4, 1),
    /* 40 */ Entry::new("LD B,B", Op::LdRR, Implied, 4, 1),
    /* 41 */ Entry::new("LD B,C", Op::LdRR, Implied, 4, 1),
    /* 42 */ Entry::new("LD B,D", Op::LdRR, Implied, 4, 1),
    /* 43 */ Entry::new("LD B,E", Op::LdRR, Implied, 4, 1),
    /* 44 */ Entry::new("LD B,H", Op::LdRR, Implied, 4, 1),
    /* 45 */ Entry::new("LD B,L", Op::LdRR, Implied, 4, 1),
    /* 46 */ Entry::new("LD B,(HL)", Op::LdRMem, Implied, 7, 1),
    /* 47 */ Entry::new("LD B,A", Op::LdRR, Implied, 4, 1),
    /* 48 */ Entry::new("LD C,B", Op::LdRR, Implied, 4, 1),
    /* 49 */ Entry::new("LD C,C", Op::LdRR, Implied, 4, 1),
    /* 4A */ Entry::new("LD C,D", Op::LdRR, Implied, 4, 1),
    /* 4B */ Entry::new("LD C,E", Op::LdRR, Implied, 4, 1),
    /* 4C */ Entry::new("LD C,H", Op::LdRR, Implied, 4, 1),
    /* 4D */ Entry::new("LD C,L", Op::LdRR, Implied, 4, 1),
    /* 4E */ Entry::new("LD C,(HL)", Op::LdRMem, Implied, 7, 1),
    /* 4F */ Entry::new("LD C,A", Op::LdRR, Implied, 4, 1),
    /* 50 */ Entry::new("LD D,B", Op::LdRR, Implied, 4, 1),
    /* 51 */ Entry::new("LD D,C", Op::LdRR, Implied, 4, 1),
    /* 52 */ Entry::new("LD D,D", Op::LdRR, Implied, 4, 1),
    /* 53 */ Entry::new("LD D,E", Op::LdRR, Implied, 4, 1),
    /* 54 */ Entry::new("LD D,H", Op::LdRR, Implied, 4, 1),
    /* 55 */ Entry::new("LD D,L", Op::LdRR, Implied, 4, 1),
    /* 56 */ Entry::new("LD D,(HL)", Op::LdRMem, Implied, 7, 1),
    /* 57 */ Entry::new("LD D,A", Op::LdRR, Implied, 4, 1),
    /* 58 */ Entry::new("LD E,B", Op::LdRR, Implied, 4, 1),
    /* 59 */ Entry::new("LD E,C", Op::LdRR, Implied, 4, 1),
    /* 5A */ Entry::new("LD E,D", Op::LdRR, Implied, 4, 1),
    /* 5B */ Entry::new("LD E,E", Op::LdRR, Implied, 4, 1),
    /* 5C */ Entry::new("LD E,H", Op::LdRR, Implied, 4, 1),
    /* 5D */ Entry::new("LD E,L", Op::LdRR, Implied, 4, 1),
    /* 5E */ Entry::new("LD E,(HL)", Op::LdRMem, Implied, 7, 1),
    /* 5F */ Entry::new("LD E,A", Op::LdRR, Implied, 4, 1),
    /* 60 */ Entry::new("LD H,B", Op::LdRR, Implied, 4, 1),
    /* 61 */ Entry::new("LD H,C", Op::LdRR, Implied, 4, 1),
    /* 62 */ Entry::new("LD H,D", Op::LdRR, Implied, 4, 1),
    /* 63 */ Entry::new("LD H,E", Op::LdRR, Implied, 4, 1),
    /* 64 */ Entry::new("LD H,H", Op::LdRR, Implied, 4, 1),
    /* 65 */ Entry::new("LD H,L", Op::LdRR, Implied, 4, 1),
    /* 66 */ Entry::new("LD H,(HL)", Op::LdRMem, Implied, 7, 1),
    /* 67 */ Entry::new("LD H,A", Op::LdRR, Implied, 4, 1),
    /* 68 */ Entry::new("LD L,B", Op::LdRR, Implied, 4, 1),
    /* 69 */ Entry::new("LD L,C", Op::LdRR, Implied, 4, 1),
    /* 6A */ Entry::new("LD L,D", Op::LdRR, Implied, 4, 1),
    /* 6B */ Entry::new("LD L,E", Op::LdRR, Implied, 4, 1),
    /* 6C */ Entry::new("LD L,H", Op::LdRR, Implied, 4, 1),
    /* 6D */ Entry::new("LD L,L", Op::LdRR, Implied, 4, 1),
    /* 6E */ Entry::new("LD L,(HL)", Op::LdRMem, Implied, 7, 1),
    /* 6F */ Entry::new("LD L,A", Op::LdRR, Implied, 4, 1),
    /* 70 */ Entry::new("LD (HL),B", Op::LdMemR, Implied, 7, 1),
    /* 71 */ Entry::new("LD (HL),C", Op::LdMemR, Implied, 7, 1),
    /* 72 */ Entry::new("LD (HL),D", Op::LdMemR, Implied, 7, 1),
    /* 73 */ Entry::new("LD (HL),E", Op::LdMemR, Implied, 7, 1),
    /* 74 */ Entry::new("LD (HL),H", Op::LdMemR, Implied, 7, 1),
    /* 75 */ Entry::new("LD (HL),L", Op::LdMemR, Implied, 7, 1),
    /* 76 */ Entry::new("HALT", Op::Halt, Implied, 4, 1),
    /* 77 */ Entry::new("LD (HL),A", Op::LdMemR, Implied, 7, 1),
    /* 78 */ Entry::new("LD A,B", Op::LdRR, Implied, 4, 1),
    /* 79 */ Entry::new("LD A,C", Op::LdRR, Implied, 4, 1),
    /* 7A */ Entry::new("LD A,D", Op::LdRR, Implied, 4, 1),
    /* 7B */ Entry::new("LD A,E", Op::LdRR, Implied, 4, 1),
    /* 7C */ Entry::new("LD A,H", Op::LdRR, Implied, 4, 1),
    /* 7D */ Entry::new("LD A,L", Op::LdRR, Implied, 4, 1),
    /* 7E */ Entry::new("LD A,(HL)", Op::LdRMem, Implied, 7, 1),
    /* 7F */ Entry::new("LD A,A", Op::LdRR, Implied, 4, 1),
    /* 80 */ Entry::new("ADD A,B", Op::AluR, Implied, 4, 1),
    /* 81 */ Entry::new("ADD A,C", Op::AluR, Implied, 4, 1),
    /* 82 */ Entry::new("ADD A,D", Op::AluR, Implied, 4, 1),
    /* 83 */ Entry::new("ADD A,E", Op::AluR, Implied, 4, 1),
    /* 84 */ Entry::new("ADD A,H", Op::AluR, Implied, 4, 1),
    /* 85 */ Entry::new("ADD A,L", Op::AluR, Implied, 4, 1),
    /* 86 */ Entry::new("ADD A,(HL)", Op::AluMem, Implied, 7, 1),
    /* 87 */ Entry::new("ADD A,A", Op::AluR, Implied, 4, 1),
    /* 88 */ Entry::new("ADC A,B", Op::AluR, Implied, 4, 1),
    /* 89 */ Entry::new("ADC A,C", Op::AluR, Implied, 4, 1),
    /* 8A */ Entry::new("ADC A,D", Op::AluR, Implied, 4, 1),
    /* 8B */ Entry::new("ADC A,E", Op::AluR, Implied, 4, 1),
    /* 8C */ Entry::new("ADC A,H", Op::AluR, Implied, 4, 1),
    /* 8D */ Entry::new("ADC A,L", Op::AluR, Implied, 4, 1),
    /* 8E */ Entry::new("ADC A,(HL)", Op::AluMem, Implied, 7, 1),
    /* 8F */ Entry::new("ADC A,A", Op::AluR, Implied, 4, 1),
    /* 90 */ Entry::new("SUB B", Op::AluR, Implied, 4, 1),
    /* 91 */ Entry::new("SUB C", Op::AluR, Implied, 4, 1),
    /* 92 */ Entry::new("SUB D", Op::AluR, Implied, 4, 1),
    /* 93 */ Entry::new("SUB E", Op::AluR, Implied, 4, 1),
    /* 94 */ Entry::new("SUB H", Op::AluR, Implied, 4, 1),
    /* 95 */ Entry::new("SUB L", Op::AluR, Implied, 4, 1),
    /* 96 */ Entry::new("SUB (HL)", Op::AluMem, Implied, 7, 1),
    /* 97 */ Entry::new("SUB A", Op::AluR, Implied, 4, 1),
    /* 98 */ Entry::new("SBC A,B", Op::AluR, Implied, 4, 1),
    /* 99 */ Entry::new("SBC A,C", Op::AluR, Implied, 4, 1),
    /* 9A */ Entry::new("SBC A,D", Op::AluR, Implied, 4, 1),
    /* 9B */ Entry::new("SBC A,E", Op::AluR, Implied, 4, 1),
    /* 9C */ Entry::new("SBC A,H", Op::AluR, Implied, 4, 1),
    /* 9D */ Entry::new("SBC A,L", Op::AluR, Implied, 4, 1),
    /* 9E */ Entry::new("SBC A,(HL)", Op::AluMem, Implied, 7, 1),
    /* 9F */ Entry::new("SBC A,A", Op::AluR, Implied, 4, 1),
    /* A0 */ Entry::new("AND B", Op::AluR, Implied, 4, 1),
    /* A1 */ Entry::new("AND C", Op::AluR, Implied, 4, 1),
    /* A2 */ Entry::new("AND D", Op::AluR, Implied, 4, 1),
    /* A3 */ Entry::new("AND E", Op::AluR, Implied, 4, 1),
    /* A4 */ Entry::new("AND H", Op::AluR, Implied, 4, 1),
    /* A5 */ Entry::new("AND L", Op::AluR, Implied, 4, 1),
    /* A6 */ Entry::new("AND (HL)", Op::AluMem, Implied, 7, 1),
    /* A7 */ Entry::new("AND A", Op::AluR, Implied, 4, 1),
    /* A8 */ Entry::new("XOR B", Op::AluR, Implied, 4, 1),
    /* A9 */ Entry::new("XOR C", Op::AluR, Implied, 4, 1),
    /* AA */ Entry::new("XOR D", Op::AluR, Implied, 4, 1),
    /* AB */ Entry::new("XOR E", Op::AluR, Implied, 4, 1),
    /* AC */ Entry::new("XOR H", Op::AluR, Implied, 4, 1),
    /* AD */ Entry::new("XOR L", Op::AluR, Implied, 4, 1),
    /* AE */ Entry::new("XOR (HL)", Op::AluMem, Implied, 7, 1),
    /* AF */ Entry::new("XOR A", Op::AluR, Implied, 4, 1),
    /* B0 */ Entry::new("OR B", Op::AluR, Implied, 4, 1),
    /* B1 */ Entry::new("OR C", Op::AluR, Implied, 4, 1),
    /* B2 */ Entry::new("OR D", Op::AluR, Implied, 4, 1),
    /* B3 */ Entry::new("OR E", Op::AluR, Implied, 4, 1),
    /* B4 */ Entry::new("OR H", Op::AluR, Implied, 4, 1),
    /* B5 */ Entry::new("OR L", Op::AluR, Implied, 4, 1),
    /* B6 */ Entry::new("OR (HL)", Op::AluMem, Implied, 7, 1),
    /* B7 */ Entry::new("OR A", Op::AluR, Implied, 4, 1),
    /* B8 */ Entry::new("CP B", Op::AluR, Implied, 4, 1),
    /* B9 */ Entry::new("CP C", Op::AluR, Implied, 4, 1),
    /* BA */ Entry::new("CP D", Op::AluR, Implied, 4, 1),
    /* BB */ Entry::new("CP E", Op::AluR, Implied, 4, 1),
    /* BC */ Entry::new("CP H", Op::AluR, Implied, 4, 1),
    /* BD */ Entry::new("CP L", Op::AluR, Implied, 4, 1),
    /* BE */ Entry::new("CP (HL)", Op::AluMem, Implied, 7, 1),
    /* BF */ Entry::new("CP A", Op::AluR, Implied, 4, 1),
    /* C0 */ Entry::new("RET NZ", Op::RetCc, Implied, 11, 1),
    /* C1 */ Entry::new("POP BC", Op::Pop, Implied, 10, 1),
    /* C2 */ Entry::new("JP NZ,{nn}", Op::JpCc, Word, 10, 3),
    /* C3 */ Entry::new("JP {nn}", Op::Jp, Word, 10, 3),
    /* C4 */ Entry::new("CALL NZ,{nn}", Op::CallCc, Word, 17, 3),
    /* C5 */ Entry::new("PUSH BC", Op::Push, Implied, 11, 1),
    /* C6 */ Entry::new("ADD A,{n}", Op::AluN, Byte, 7, 2),
    /* C7 */ Entry::new("RST $00", Op::Rst, Implied, 11, 1),
    /* C8 */ Entry::new("RET Z", Op::RetCc, Implied, 11, 1),
    /* C9 */ Entry::new("RET", Op::Ret, Implied, 10, 1),
    /* CA */ Entry::new("JP Z,{nn}", Op::JpCc, Word, 10, 3),
    /* CB */ Entry::new("", Op::Prefix, Gateway, 4, 1),
    /* CC */ Entry::new("CALL Z,{nn}", Op::CallCc, Word, 17, 3),
    /* CD */ Entry::new("CALL {nn}", Op::Call, Word, 17, 3),
    /* CE */ Entry::new("ADC A,{n}", Op::AluN, Byte, 7, 2),
    /* CF */ Entry::new("RST $08", Op::Rst, Implied, 11, 1),
    /* D0 */ Entry::new("RET NC", Op::RetCc, Implied, 11, 1),
    /* D1 */ Entry::new("POP DE", Op::Pop, Implied, 10, 1),
    /* D2 */ Entry::new("JP NC,{nn}", Op::JpCc, Word, 10, 3),
    /* D3 */ Entry::new("OUT ({n}),A", Op::OutNA, Byte, 11, 2),
    /* D4 */ Entry::new("CALL NC,{nn}", Op::CallCc, Word, 17, 3),
    /* D5 */ Entry::new("PUSH DE", Op::Push, Implied, 11, 1),
    /* D6 */ Entry::new("SUB {n}", Op::AluN, Byte, 7, 2),
    /* D7 */ Entry::new("RST $10", Op::Rst, Implied, 11, 1),
    /* D8 */ Entry::new("RET C", Op::RetCc, Implied, 11, 1),
    /* D9 */ Entry::new("EXX", Op::Exx, Implied, 4, 1),
    /* DA */ Entry::new("JP C,{nn}", Op::JpCc, Word, 10, 3),
    /* DB */ Entry::new("IN A,({n})", Op::InAN, Byte, 11, 2),
    /* DC */ Entry::new("CALL C,{nn}", Op::CallCc, Word, 17, 3),
    /* DD */ Entry::new("", Op::Prefix, Gateway, 4, 1),
    /* DE */ Entry::new("SBC A,{n}", Op::AluN, Byte, 7, 2),
    /* DF */ Entry::new("RST $18", Op::Rst, Implied, 11, 1),
    /* E0 */ Entry::new("RET PO", Op::RetCc, Implied, 11, 1),
    /* E1 */ Entry::new("POP HL", Op::Pop, Implied, 10, 1),
    /* E2 */ Entry::new("JP PO,{nn}", Op::JpCc, Word, 10, 3),
    /* E3 */ Entry::new("EX (SP),HL", Op::ExSpHl, Implied, 19, 1),
    /* E4 */ Entry::new("CALL PO,{nn}", Op::CallCc, Word, 17, 3),
    /* E5 */ Entry::new("PUSH HL", Op::Push, Implied, 11, 1),
    /* E6 */ Entry::new("AND {n}", Op::AluN, Byte, 7, 2),
    /* E7 */ Entry::new("RST $20", Op::Rst, Implied, 11, 1),
    /* E8 */ Entry::new("RET PE", Op::RetCc, Implied, 11, 1),
    /* E9 */ Entry::new("JP (HL)", Op::JpHl, Implied, 4, 1),
    /* EA */ Entry::new("JP PE,{nn}", Op::JpCc, Word, 10, 3),
    /* EB */ Entry::new("EX DE,HL", Op::ExDeHl, Implied, 4, 1),
    /* EC */ Entry::new("CALL PE,{nn}", Op::CallCc, Word, 17, 3),
    /* ED */ Entry::new("", Op::Prefix, Gateway, 4, 1),
    /* EE */ Entry::new("XOR {n}", Op::AluN, Byte, 7, 2),
    /* EF */ Entry::new("RST $28", Op::Rst, Implied, 11, 1),
    /* F0 */ Entry::new("RET P", Op::RetCc, Implied, 11, 1),
    /* F1 */ Entry::new("POP AF", Op::Pop, Implied, 10, 1),
    /* F2 */ Entry::new("JP P,{nn}", Op::JpCc, Word, 10, 3),
    /* F3 */ Entry::new("DI", Op::Di, Implied, 4, 1),
    /* F4 */ Entry::new("CALL P,{nn}", Op::CallCc, Word, 17, 3),
    /* F5 */ Entry::new("PUSH AF", Op::Push, Implied, 11, 1),
    /* F6 */ Entry::new("OR {n}", Op::AluN, Byte, 7, 2),
    /* F7 */ Entry::new("RST $30", Op::Rst, Implied, 11, 1),
    /* F8 */ Entry::new("RET M", Op::RetCc, Implied, 11, 1),
    /* F9 */ Entry::new("LD SP,HL", Op::LdSpHl, Implied, 6, 1),
    /* FA */ Entry::new("JP M,{nn}", Op::JpCc, Word, 10, 3),
    /* FB */ Entry::new("EI", Op::Ei, Implied, 4, 1),
    /* FC */ Entry::new("CALL M,{nn}", Op::CallCc, Word, 17, 3),
    /* FD */ Entry::new("", Op::Prefix, Gateway, 4, 1),
    /* FE */ Entry::new("CP {n}", Op::AluN, Byte, 7, 2),
    /* FF */ Entry::new("RST $38", Op::Rst, Implied, 11, 1),
];
