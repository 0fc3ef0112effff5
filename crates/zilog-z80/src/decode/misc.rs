//! `ED`-prefixed opcodes. Holes execute as 8-cycle no-ops.

use super::Operand::{Implied, Word};
use super::{Entry, Op};

pub(super) static MISC: [Entry; 256] = [
    /* 00 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 01 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 02 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 03 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 04 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 05 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 06 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 07 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 08 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 09 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 0A */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 0B */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 0C */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 0D */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 0E */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 0F */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 10 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 11 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 12 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 13 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 14 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 15 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 16 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 17 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 18 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 19 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 1A */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 1B */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 1C */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 1D */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 1E */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 1F */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 20 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 21 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 22 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 23 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 24 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 25 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 26 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 27 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 28 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 29 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 2A */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 2B */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 2C */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 2D */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 2E */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 2F */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 30 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 31 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 32 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 33 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 34 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 35 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 36 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 37 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 38 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 39 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 3A */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 3B */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 3C */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 3D */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 3E */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 3F */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 40 */ Entry::new("IN B,(C)", Op::InRC, Implied, 12, 2),
    /* 41 */ Entry::new("OUT (C),B", Op::OutCR, Implied, 12, 2),
    /* 42 */ Entry::new("SBC HL,BC", Op::SbcHl, Implied, 15, 2),
    /* 43 */ Entry::new("LD ({nn}),BC", Op::LdNnRp, Word, 20, 4),
    /* 44 */ Entry::new("NEG", Op::Neg, Implied, 8, 2),
    /* 45 */ Entry::new("RETN", Op::Retn, Implied, 14, 2),
    /* 46 */ Entry::new("IM 0", Op::Im, Implied, 8, 2),
    /* 47 */ Entry::new("LD I,A", Op::LdIA, Implied, 9, 2),
    /* 48 */ Entry::new("IN C,(C)", Op::InRC, Implied, 12, 2),
    /* 49 */ Entry::new("OUT (C),C", Op::OutCR, Implied, 12, 2),
    /* 4A */ Entry::new("ADC HL,BC", Op::AdcHl, Implied, 15, 2),
    /* 4B */ Entry::new("LD BC,({nn})", Op::LdRpNnInd, Word, 20, 4),
    /* 4C */ Entry::new("NEG", Op::Neg, Implied, 8, 2),
    /* 4D */ Entry::new("RETI", Op::Reti, Implied, 14, 2),
    /* 4E */ Entry::new("IM 0", Op::Im, Implied, 8, 2),
    /* 4F */ Entry::new("LD R,A", Op::LdRA, Implied, 9, 2),
    /* 50 */ Entry::new("IN D,(C)", Op::InRC, Implied, 12, 2),
    /* 51 */ Entry::new("OUT (C),D", Op::OutCR, Implied, 12, 2),
    /* 52 */ Entry::new("SBC HL,DE", Op::SbcHl, Implied, 15, 2),
    /* 53 */ Entry::new("LD ({nn}),DE", Op::LdNnRp, Word, 20, 4),
    /* 54 */ Entry::new("NEG", Op::Neg, Implied, 8, 2),
    /* 55 */ Entry::new("RETN", Op::Retn, Implied, 14, 2),
    /* 56 */ Entry::new("IM 1", Op::Im, Implied, 8, 2),
    /* 57 */ Entry::new("LD A,I", Op::LdAI, Implied, 9, 2),
    /* 58 */ Entry::new("IN E,(C)", Op::InRC, Implied, 12, 2),
    /* 59 */ Entry::new("OUT (C),E", Op::OutCR, Implied, 12, 2),
    /* 5A */ Entry::new("ADC HL,DE", Op::AdcHl, Implied, 15, 2),
    /* 5B */ Entry::new("LD DE,({nn})", Op::LdRpNnInd, Word, 20, 4),
    /* 5C */ Entry::new("NEG", Op::Neg, Implied, 8, 2),
    /* 5D */ Entry::new("RETN", Op::Retn, Implied, 14, 2),
    /* 5E */ Entry::new("IM 2", Op::Im, Implied, 8, 2),
    /* 5F */ Entry::new("LD A,R", Op::LdAR, Implied, 9, 2),
    /* 60 */ Entry::new("IN H,(C)", Op::InRC, Implied, 12, 2),
    /* 61 */ Entry::new("OUT (C),H", Op::OutCR, Implied, 12, 2),
    /* 62 */ Entry::new("SBC HL,HL", Op::SbcHl, Implied, 15, 2),
    /* 63 */ Entry::new("LD ({nn}),HL", Op::LdNnRp, Word, 20, 4),
    /* 64 */ Entry::new("NEG", Op::Neg, Implied, 8, 2),
    /* 65 */ Entry::new("RETN", Op::Retn, Implied, 14, 2),
    /* 66 */ Entry::new("IM 0", Op::Im, Implied, 8, 2),
    /* 67 */ Entry::new("RRD", Op::Rrd, Implied, 18, 2),
    /* 68 */ Entry::new("IN L,(C)", Op::InRC, Implied, 12, 2),
    /* 69 */ Entry::new("OUT (C),L", Op::OutCR, Implied, 12, 2),
    /* 6A */ Entry::new("ADC HL,HL", Op::AdcHl, Implied, 15, 2),
    /* 6B */ Entry::new("LD HL,({nn})", Op::LdRpNnInd, Word, 20, 4),
    /* 6C */ Entry::new("NEG", Op::Neg, Implied, 8, 2),
    /* 6D */ Entry::new("RETN", Op::Retn, Implied, 14, 2),
    /* 6E */ Entry::new("IM 0", Op::Im, Implied, 8, 2),
    /* 6F */ Entry::new("RLD", Op::Rld, Implied, 18, 2),
    /* 70 */ Entry::new("IN (C)", Op::InRC, Implied, 12, 2),
    /* 71 */ Entry::new("OUT (C),0", Op::OutCR, Implied, 12, 2),
    /* 72 */ Entry::new("SBC HL,SP", Op::SbcHl, Implied, 15, 2),
    /* 73 */ Entry::new("LD ({nn}),SP", Op::LdNnRp, Word, 20, 4),
    /* 74 */ Entry::new("NEG", Op::Neg, Implied, 8, 2),
    /* 75 */ Entry::new("RETN", Op::Retn, Implied, 14, 2),
    /* 76 */ Entry::new("IM 1", Op::Im, Implied, 8, 2),
    /* 77 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 78 */ Entry::new("IN A,(C)", Op::InRC, Implied, 12, 2),
    /* 79 */ Entry::new("OUT (C),A", Op::OutCR, Implied, 12, 2),
    /* 7A */ Entry::new("ADC HL,SP", Op::AdcHl, Implied, 15, 2),
    /* 7B */ Entry::new("LD SP,({nn})", Op::LdRpNnInd, Word, 20, 4),
    /* 7C */ Entry::new("NEG", Op::Neg, Implied, 8, 2),
    /* 7D */ Entry::new("RETN", Op::Retn, Implied, 14, 2),
    /* 7E */ Entry::new("IM 2", Op::Im, Implied, 8, 2),
    /* 7F */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 80 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 81 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 82 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 83 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 84 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 85 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 86 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 87 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 88 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 89 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 8A */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 8B */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 8C */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 8D */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 8E */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 8F */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 90 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 91 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 92 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 93 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 94 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 95 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 96 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 97 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 98 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 99 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 9A */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 9B */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 9C */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 9D */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 9E */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* 9F */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* A0 */ Entry::new("LDI", Op::BlockLd, Implied, 16, 2),
    /* A1 */ Entry::new("CPI", Op::BlockCp, Implied, 16, 2),
    /* A2 */ Entry::new("INI", Op::BlockIn, Implied, 16, 2),
    /* A3 */ Entry::new("OUTI", Op::BlockOut, Implied, 16, 2),
    /* A4 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* A5 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* A6 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* A7 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* A8 */ Entry::new("LDD", Op::BlockLd, Implied, 16, 2),
    /* A9 */ Entry::new("CPD", Op::BlockCp, Implied, 16, 2),
    /* AA */ Entry::new("IND", Op::BlockIn, Implied, 16, 2),
    /* AB */ Entry::new("OUTD", Op::BlockOut, Implied, 16, 2),
    /* AC */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* AD */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* AE */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* AF */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* B0 */ Entry::new("LDIR", Op::BlockLd, Implied, 21, 2),
    /* B1 */ Entry::new("CPIR", Op::BlockCp, Implied, 21, 2),
    /* B2 */ Entry::new("INIR", Op::BlockIn, Implied, 21, 2),
    /* B3 */ Entry::new("OTIR", Op::BlockOut, Implied, 21, 2),
    /* B4 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* B5 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* B6 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* B7 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* B8 */ Entry::new("LDDR", Op::BlockLd, Implied, 21, 2),
    /* B9 */ Entry::new("CPDR", Op::BlockCp, Implied, 21, 2),
    /* BA */ Entry::new("INDR", Op::BlockIn, Implied, 21, 2),
    /* BB */ Entry::new("OTDR", Op::BlockOut, Implied, 21, 2),
    /* BC */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* BD */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* BE */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* BF */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* C0 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* C1 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* C2 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* C3 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* C4 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* C5 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* C6 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* C7 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* C8 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* C9 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* CA */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* CB */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* CC */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* CD */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* CE */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* CF */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* D0 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* D1 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* D2 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* D3 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* D4 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* D5 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* D6 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* D7 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* D8 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* D9 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* DA */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* DB */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* DC */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* DD */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* DE */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* DF */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* E0 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* E1 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* E2 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* E3 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* E4 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* E5 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* E6 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* E7 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* E8 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* E9 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* EA */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* EB */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* EC */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* ED */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* EE */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* EF */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* F0 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* F1 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* F2 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* F3 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* F4 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* F5 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* F6 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* F7 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* F8 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* F9 */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* FA */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* FB */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* FC */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* FD */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* FE */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
    /* FF */ Entry::new("NOP*", Op::NopEd, Implied, 8, 2),
];
