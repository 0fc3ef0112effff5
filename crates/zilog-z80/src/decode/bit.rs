//! `CB`-prefixed rotates, shifts and single-bit operations.

use super::Operand::{Implied};
use super::{Entry, Op};

pub(super) static BIT: [Entry; 256] = [
    /* 00 */ Entry::new("RLC B", Op::Rot, Implied, 8, 2),
    /* 01 */ Entry::new("RLC C", Op::Rot, Implied, 8, 2),
    /* 02 */ Entry::new("RLC D", Op::Rot, Implied, 8, 2),
    /* 03 */ Entry::new("RLC E", Op::Rot, Implied, 8, 2),
    /* 04 */ Entry::new("RLC H", Op::Rot, Implied, 8, 2),
    /* 05 */ Entry::new("RLC L", Op::Rot, Implied, 8, 2),
    /* 06 */ Entry::new("RLC (HL)", Op::RotMem, Implied, 15, 2),
    /* 07 */ Entry::new("RLC A", Op::Rot, Implied, 8, 2),
    /* 08 */ Entry::new("RRC B", Op::Rot, Implied, 8, 2),
    /* 09 */ Entry::new("RRC C", Op::Rot, Implied, 8, 2),
    /* 0A */ Entry::new("RRC D", Op::Rot, Implied, 8, 2),
    /* 0B */ Entry::new("RRC E", Op::Rot, Implied, 8, 2),
    /* 0C */ Entry::new("RRC H", Op::Rot, Implied, 8, 2),
    /* 0D */ Entry::new("RRC L", Op::Rot, Implied, 8, 2),
    /* 0E */ Entry::new("RRC (HL)", Op::RotMem, Implied, 15, 2),
    /* 0F */ Entry::new("RRC A", Op::Rot, Implied, 8, 2),
    /* 10 */ Entry::new("RL B", Op::Rot, Implied, 8, 2),
    /* 11 */ Entry::new("RL C", Op::Rot, Implied, 8, 2),
    /* 12 */ Entry::new("RL D", Op::Rot, Implied, 8, 2),
    /* 13 */ Entry::new("RL E", Op::Rot, Implied, 8, 2),
    /* 14 */ Entry::new("RL H", Op::Rot, Implied, 8, 2),
    /* 15 */ Entry::new("RL L", Op::Rot, Implied, 8, 2),
    /* 16 */ Entry::new("RL (HL)", Op::RotMem, Implied, 15, 2),
    /* 17 */ Entry::new("RL A", Op::Rot, Implied, 8, 2),
    /* 18 */ Entry::new("RR B", Op::Rot, Implied, 8, 2),
    /* 19 */ Entry::new("RR C", Op::Rot, Implied, 8, 2),
    /* 1A */ Entry::new("RR D", Op::Rot, Implied, 8, 2),
    /* 1B */ Entry::new("RR E", Op::Rot, Implied, 8, 2),
    /* 1C */ Entry::new("RR H", Op::Rot, Implied, 8, 2),
    /* 1D */ Entry::new("RR L", Op::Rot, Implied, 8, 2),
    /* 1E */ Entry::new("RR (HL)", Op::RotMem, Implied, 15, 2),
    /* 1F */ Entry::new("RR A", Op::Rot, Implied, 8, 2),
    /* 20 */ Entry::new("SLA B", Op::Rot, Implied, 8, 2),
    /* 21 */ Entry::new("SLA C", Op::Rot, Implied, 8, 2),
    /* 22 */ Entry::new("SLA D", Op::Rot, Implied, 8, 2),
    /* 23 */ Entry::new("SLA E", Op::Rot, Implied, 8, 2),
    /* 24 */ Entry::new("SLA H", Op::Rot, Implied, 8, 2),
    /* 25 */ Entry::new("SLA L", Op::Rot, Implied, 8, 2),
    /* 26 */ Entry::new("SLA (HL)", Op::RotMem, Implied, 15, 2),
    /* 27 */ Entry::new("SLA A", Op::Rot, Implied, 8, 2),
    /* 28 */ Entry::new("SRA B", Op::Rot, Implied, 8, 2),
    /* 29 */ Entry::new("SRA C", Op::Rot, Implied, 8, 2),
    /* 2A */ Entry::new("SRA D", Op::Rot, Implied, 8, 2),
    /* 2B */ Entry::new("SRA E", Op::Rot, Implied, 8, 2),
    /* 2C */ Entry::new("SRA H", Op::Rot, Implied, 8, 2),
    /* 2D */ Entry::new("SRA L", Op::Rot, Implied, 8, 2),
    /* 2E */ Entry::new("SRA (HL)", Op::RotMem, Implied, 15, 2),
    /* 2F */ Entry::new("SRA A", Op::Rot, Implied, 8, 2),
    /* 30 */ Entry::new("SLL B", Op::Rot, Implied, 8, 2),
    /* 31 */ Entry::new("SLL C", Op::Rot, Implied, 8, 2),
    /* 32 */ Entry::new("SLL D", Op::Rot, Implied, 8, 2),
    /* 33 */ Entry::new("SLL E", Op::Rot, Implied, 8, 2),
    /* 34 */ Entry::new("SLL H", Op::Rot, Implied, 8, 2),
    /* 35 */ Entry::new("SLL L", Op::Rot, Implied, 8, 2),
    /* 36 */ Entry::new("SLL (HL)", Op::RotMem, Implied, 15, 2),
    /* 37 */ Entry::new("SLL A", Op::Rot, Implied, 8, 2),
    /* 38 */ Entry::new("SRL B", Op::Rot, Implied, 8, 2),
    /* 39 */ Entry::new("SRL C", Op::Rot, Implied, 8, 2),
    /* 3A */ Entry::new("SRL D", Op::Rot, Implied, 8, 2),
    /* 3B */ Entry::new("SRL E", Op::Rot, Implied, 8, 2),
    /* 3C */ Entry::new("SRL H", Op::Rot, Implied, 8, 2),
    /* 3D */ Entry::new("SRL L", Op::Rot, Implied, 8, 2),
    /* 3E */ Entry::new("SRL (HL)", Op::RotMem, Implied, 15, 2),
    /* 3F */ Entry::new("SRL A", Op::Rot, Implied, 8, 2),
    /* 40 */ Entry::new("BIT 0,B", Op::Bit, Implied, 8, 2),
    /* 41 */ Entry::new("BIT 0,C", Op::Bit, Implied, 8, 2),
    /* 42 */ Entry::new("BIT 0,D", Op::Bit, Implied, 8, 2),
    /* 43 */ Entry::new("BIT 0,E", Op::Bit, Implied, 8, 2),
    /* 44 */ Entry::new("BIT 0,H", Op::Bit, Implied, 8, 2),
    /* 45 */ Entry::new("BIT 0,L", Op::Bit, Implied, 8, 2),
    /* 46 */ Entry::new("BIT 0,(HL)", Op::BitMem, Implied, 12, 2),
    /* 47 */ Entry::new("BIT 0,A", Op::Bit, Implied, 8, 2),
    /* 48 */ Entry::new("BIT 1,B", Op::Bit, Implied, 8, 2),
    /* 49 */ Entry::new("BIT 1,C", Op::Bit, Implied, 8, 2),
    /* 4A */ Entry::new("BIT 1,D", Op::Bit, Implied, 8, 2),
    /* 4B */ Entry::new("BIT 1,E", Op::Bit, Implied, 8, 2),
    /* 4C */ Entry::new("BIT 1,H", Op::Bit, Implied, 8, 2),
    /* 4D */ Entry::new("BIT 1,L", Op::Bit, Implied, 8, 2),
    /* 4E */ Entry::new("BIT 1,(HL)", Op::BitMem, Implied, 12, 2),
    /* 4F */ Entry::new("BIT 1,A", Op::Bit, Implied, 8, 2),
    /* 50 */ Entry::new("BIT 2,B", Op::Bit, Implied, 8, 2),
    /* 51 */ Entry::new("BIT 2,C", Op::Bit, Implied, 8, 2),
    /* 52 */ Entry::new("BIT 2,D", Op::Bit, Implied, 8, 2),
    /* 53 */ Entry::new("BIT 2,E", Op::Bit, Implied, 8, 2),
    /* 54 */ Entry::new("BIT 2,H", Op::Bit, Implied, 8, 2),
    /* 55 */ Entry::new("BIT 2,L", Op::Bit, Implied, 8, 2),
    /* 56 */ Entry::new("BIT 2,(HL)", Op::BitMem, Implied, 12, 2),
    /* 57 */ Entry::new("BIT 2,A", Op::Bit, Implied, 8, 2),
    /* 58 */ Entry::new("BIT 3,B", Op::Bit, Implied, 8, 2),
    /* 59 */ Entry::new("BIT 3,C", Op::Bit, Implied, 8, 2),
    /* 5A */ Entry::new("BIT 3,D", Op::Bit, Implied, 8, 2),
    /* 5B */ Entry::new("BIT 3,E", Op::Bit, Implied, 8, 2),
    /* 5C */ Entry::new("BIT 3,H", Op::Bit, Implied, 8, 2),
    /* 5D */ Entry::new("BIT 3,L", Op::Bit, Implied, 8, 2),
    /* 5E */ Entry::new("BIT 3,(HL)", Op::BitMem, Implied, 12, 2),
    /* 5F */ Entry::new("BIT 3,A", Op::Bit, Implied, 8, 2),
    /* 60 */ Entry::new("BIT 4,B", Op::Bit, Implied, 8, 2),
    /* 61 */ Entry::new("BIT 4,C", Op::Bit, Implied, 8, 2),
    /* 62 */ Entry::new("BIT 4,D", Op::Bit, Implied, 8, 2),
    /* 63 */ Entry::new("BIT 4,E", Op::Bit, Implied, 8, 2),
    /* 64 */ Entry::new("BIT 4,H", Op::Bit, Implied, 8, 2),
    /* 65 */ Entry::new("BIT 4,L", Op::Bit, Implied, 8, 2),
    /* 66 */ Entry::new("BIT 4,(HL)", Op::BitMem, Implied, 12, 2),
    /* 67 */ Entry::new("BIT 4,A", Op::Bit, Implied, 8, 2),
    /* 68 */ Entry::new("BIT 5,B", Op::Bit, Implied, 8, 2),
    /* 69 */ Entry::new("BIT 5,C", Op::Bit, Implied, 8, 2),
    /* 6A */ Entry::new("BIT 5,D", Op::Bit, Implied, 8, 2),
    /* 6B */ Entry::new("BIT 5,E", Op::Bit, Implied, 8, 2),
    /* 6C */ Entry::new("BIT 5,H", Op::Bit, Implied, 8, 2),
    /* 6D */ Entry::new("BIT 5,L", Op::Bit, Implied, 8, 2),
    /* 6E */ Entry::new("BIT 5,(HL)", Op::BitMem, Implied, 12, 2),
    /* 6F */ Entry::new("BIT 5,A", Op::Bit, Implied, 8, 2),
    /* 70 */ Entry::new("BIT 6,B", Op::Bit, Implied, 8, 2),
    /* 71 */ Entry::new("BIT 6,C", Op::Bit, Implied, 8, 2),
    /* 72 */ Entry::new("BIT 6,D", Op::Bit, Implied, 8, 2),
    /* 73 */ Entry::new("BIT 6,E", Op::Bit, Implied, 8, 2),
    /* 74 */ Entry::new("BIT 6,H", Op::Bit, Implied, 8, 2),
    /* 75 */ Entry::new("BIT 6,L", Op::Bit, Implied, 8, 2),
    /* 76 */ Entry::new("BIT 6,(HL)", Op::BitMem, Implied, 12, 2),
    /* 77 */ Entry::new("BIT 6,A", Op::Bit, Implied, 8, 2),
    /* 78 */ Entry::new("BIT 7,B", Op::Bit, Implied, 8, 2),
    /* 79 */ Entry::new("BIT 7,C", Op::Bit, Implied, 8, 2),
    /* 7A */ Entry::new("BIT 7,D", Op::Bit, Implied, 8, 2),
    /* 7B */ Entry::new("BIT 7,E", Op::Bit, Implied, 8, 2),
    /* 7C */ Entry::new("BIT 7,H", Op::Bit, Implied, 8, 2),
    /* 7D */ Entry::new("BIT 7,L", Op::Bit, Implied, 8, 2),
    /* 7E */ Entry::new("BIT 7,(HL)", Op::BitMem, Implied, 12, 2),
    /* 7F */ Entry::new("BIT 7,A", Op::Bit, Implied, 8, 2),
    /* 80 */ Entry::new("RES 0,B", Op::Res, Implied, 8, 2),
    /* 81 */ Entry::new("RES 0,C", Op::Res, Implied, 8, 2),
    /* 82 */ Entry::new("RES 0,D", Op::Res, Implied, 8, 2),
    /* 83 */ Entry::new("RES 0,E", Op::Res, Implied, 8, 2),
    /* 84 */ Entry::new("RES 0,H", Op::Res, Implied, 8, 2),
    /* 85 */ Entry::new("RES 0,L", Op::Res, Implied, 8, 2),
    /* 86 */ Entry::new("RES 0,(HL)", Op::ResMem, Implied, 15, 2),
    /* 87 */ Entry::new("RES 0,A", Op::Res, Implied, 8, 2),
    /* 88 */ Entry::new("RES 1,B", Op::Res, Implied, 8, 2),
    /* 89 */ Entry::new("RES 1,C", Op::Res, Implied, 8, 2),
    /* 8A */ Entry::new("RES 1,D", Op::Res, Implied, 8, 2),
    /* 8B */ Entry::new("RES 1,E", Op::Res, Implied, 8, 2),
    /* 8C */ Entry::new("RES 1,H", Op::Res, Implied, 8, 2),
    /* 8D */ Entry::new("RES 1,L", Op::Res, Implied, 8, 2),
    /* 8E */ Entry::new("RES 1,(HL)", Op::ResMem, Implied, 15, 2),
    /* 8F */ Entry::new("RES 1,A", Op::Res, Implied, 8, 2),
    /* 90 */ Entry::new("RES 2,B", Op::Res, Implied, 8, 2),
    /* 91 */ Entry::new("RES 2,C", Op::Res, Implied, 8, 2),
    /* 92 */ Entry::new("RES 2,D", Op::Res, Implied, 8, 2),
    /* 93 */ Entry::new("RES 2,E", Op::Res, Implied, 8, 2),
    /* 94 */ Entry::new("RES 2,H", Op::Res, Implied, 8, 2),
    /* 95 */ Entry::new("RES 2,L", Op::Res, Implied, 8, 2),
    /* 96 */ Entry::new("RES 2,(HL)", Op::ResMem, Implied, 15, 2),
    /* 97 */ Entry::new("RES 2,A", Op::Res, Implied, 8, 2),
    /* 98 */ Entry::new("RES 3,B", Op::Res, Implied, 8, 2),
    /* 99 */ Entry::new("RES 3,C", Op::Res, Implied, 8, 2),
    /* 9A */ Entry::new("RES 3,D", Op::Res, Implied, 8, 2),
    /* 9B */ Entry::new("RES 3,E", Op::Res, Implied, 8, 2),
    /* 9C */ Entry::new("RES 3,H", Op::Res, Implied, 8, 2),
    /* 9D */ Entry::new("RES 3,L", Op::Res, Implied, 8, 2),
    /* 9E */ Entry::new("RES 3,(HL)", Op::ResMem, Implied, 15, 2),
    /* 9F */ Entry::new("RES 3,A", Op::Res, Implied, 8, 2),
    /* A0 */ Entry::new("RES 4,B", Op::Res, Implied, 8, 2),
    /* A1 */ Entry::new("RES 4,C", Op::Res, Implied, 8, 2),
    /* A2 */ Entry::new("RES 4,D", Op::Res, Implied, 8, 2),
    /* A3 */ Entry::new("RES 4,E", Op::Res, Implied, 8, 2),
    /* A4 */ Entry::new("RES 4,H", Op::Res, Implied, 8, 2),
    /* A5 */ Entry::new("RES 4,L", Op::Res, Implied, 8, 2),
    /* A6 */ Entry::new("RES 4,(HL)", Op::ResMem, Implied, 15, 2),
    /* A7 */ Entry::new("RES 4,A", Op::Res, Implied, 8, 2),
    /* A8 */ Entry::new("RES 5,B", Op::Res, Implied, 8, 2),
    /* A9 */ Entry::new("RES 5,C", Op::Res, Implied, 8, 2),
    /* AA */ Entry::new("RES 5,D", Op::Res, Implied, 8, 2),
    /* AB */ Entry::new("RES 5,E", Op::Res, Implied, 8, 2),
    /* AC */ Entry::new("RES 5,H", Op::Res, Implied, 8, 2),
    /* AD */ Entry::new("RES 5,L", Op::Res, Implied, 8, 2),
    /* AE */ Entry::new("RES 5,(HL)", Op::ResMem, Implied, 15, 2),
    /* AF */ Entry::new("RES 5,A", Op::Res, Implied, 8, 2),
    /* B0 */ Entry::new("RES 6,B", Op::Res, Implied, 8, 2),
    /* B1 */ Entry::new("RES 6,C", Op::Res, Implied, 8, 2),
    /* B2 */ Entry::new("RES 6,D", Op::Res, Implied, 8, 2),
    /* B3 */ Entry::new("RES 6,E", Op::Res, Implied, 8, 2),
    /* B4 */ Entry::new("RES 6,H", Op::Res, Implied, 8, 2),
    /* B5 */ Entry::new("RES 6,L", Op::Res, Implied, 8, 2),
    /* B6 */ Entry::new("RES 6,(HL)", Op::ResMem, Implied, 15, 2),
    /* B7 */ Entry::new("RES 6,A", Op::Res, Implied, 8, 2),
    /* B8 */ Entry::new("RES 7,B", Op::Res, Implied, 8, 2),
    /* B9 */ Entry::new("RES 7,C", Op::Res, Implied, 8, 2),
    /* BA */ Entry::new("RES 7,D", Op::Res, Implied, 8, 2),
    /* BB */ Entry::new("RES 7,E", Op::Res, Implied, 8, 2),
    /* BC */ Entry::new("RES 7,H", Op::Res, Implied, 8, 2),
    /* BD */ Entry::new("RES 7,L", Op::Res, Implied, 8, 2),
    /* BE */ Entry::new("RES 7,(HL)", Op::ResMem, Implied, 15, 2),
    /* BF */ Entry::new("RES 7,A", Op::Res, Implied, 8, 2),
    /* C0 */ Entry::new("SET 0,B", Op::Set, Implied, 8, 2),
    /* C1 */ Entry::new("SET 0,C", Op::Set, Implied, 8, 2),
    /* C2 */ Entry::new("SET 0,D", Op::Set, Implied, 8, 2),
    /* C3 */ Entry::new("SET 0,E", Op::Set, Implied, 8, 2),
    /* C4 */ Entry::new("SET 0,H", Op::Set, Implied, 8, 2),
    /* C5 */ Entry::new("SET 0,L", Op::Set, Implied, 8, 2),
    /* C6 */ Entry::new("SET 0,(HL)", Op::SetMem, Implied, 15, 2),
    /* C7 */ Entry::new("SET 0,A", Op::Set, Implied, 8, 2),
    /* C8 */ Entry::new("SET 1,B", Op::Set, Implied, 8, 2),
    /* C9 */ Entry::new("SET 1,C", Op::Set, Implied, 8, 2),
    /* CA */ Entry::new("SET 1,D", Op::Set, Implied, 8, 2),
    /* CB */ Entry::new("SET 1,E", Op::Set, Implied, 8, 2),
    /* CC */ Entry::new("SET 1,H", Op::Set, Implied, 8, 2),
    /* CD */ Entry::new("SET 1,L", Op::Set, Implied, 8, 2),
    /* CE */ Entry::new("SET 1,(HL)", Op::SetMem, Implied, 15, 2),
    /* CF */ Entry::new("SET 1,A", Op::Set, Implied, 8, 2),
    /* D0 */ Entry::new("SET 2,B", Op::Set, Implied, 8, 2),
    /* D1 */ Entry::new("SET 2,C", Op::Set, Implied, 8, 2),
    /* D2 */ Entry::new("SET 2,D", Op::Set, Implied, 8, 2),
    /* D3 */ Entry::new("SET 2,E", Op::Set, Implied, 8, 2),
    /* D4 */ Entry::new("SET 2,H", Op::Set, Implied, 8, 2),
    /* D5 */ Entry::new("SET 2,L", Op::Set, Implied, 8, 2),
    /* D6 */ Entry::new("SET 2,(HL)", Op::SetMem, Implied, 15, 2),
    /* D7 */ Entry::new("SET 2,A", Op::Set, Implied, 8, 2),
    /* D8 */ Entry::new("SET 3,B", Op::Set, Implied, 8, 2),
    /* D9 */ Entry::new("SET 3,C", Op::Set, Implied, 8, 2),
    /* DA */ Entry::new("SET 3,D", Op::Set, Implied, 8, 2),
    /* DB */ Entry::new("SET 3,E", Op::Set, Implied, 8, 2),
    /* DC */ Entry::new("SET 3,H", Op::Set, Implied, 8, 2),
    /* DD */ Entry::new("SET 3,L", Op::Set, Implied, 8, 2),
    /* DE */ Entry::new("SET 3,(HL)", Op::SetMem, Implied, 15, 2),
    /* DF */ Entry::new("SET 3,A", Op::Set, Implied, 8, 2),
    /* E0 */ Entry::new("SET 4,B", Op::Set, Implied, 8, 2),
    /* E1 */ Entry::new("SET 4,C", Op::Set, Implied, 8, 2),
    /* E2 */ Entry::new("SET 4,D", Op::Set, Implied, 8, 2),
    /* E3 */ Entry::new("SET 4,E", Op::Set, Implied, 8, 2),
    /* E4 */ Entry::new("SET 4,H", Op::Set, Implied, 8, 2),
    /* E5 */ Entry::new("SET 4,L", Op::Set, Implied, 8, 2),
    /* E6 */ Entry::new("SET 4,(HL)", Op::SetMem, Implied, 15, 2),
    /* E7 */ Entry::new("SET 4,A", Op::Set, Implied, 8, 2),
    /* E8 */ Entry::new("SET 5,B", Op::Set, Implied, 8, 2),
    /* E9 */ Entry::new("SET 5,C", Op::Set, Implied, 8, 2),
    /* EA */ Entry::new("SET 5,D", Op::Set, Implied, 8, 2),
    /* EB */ Entry::new("SET 5,E", Op::Set, Implied, 8, 2),
    /* EC */ Entry::new("SET 5,H", Op::Set, Implied, 8, 2),
    /* ED */ Entry::new("SET 5,L", Op::Set, Implied, 8, 2),
    /* EE */ Entry::new("SET 5,(HL)", Op::SetMem, Implied, 15, 2),
    /* EF */ Entry::new("SET 5,A", Op::Set, Implied, 8, 2),
    /* F0 */ Entry::new("SET 6,B", Op::Set, Implied, 8, 2),
    /* F1 */ Entry::new("SET 6,C", Op::Set, Implied, 8, 2),
    /* F2 */ Entry::new("SET 6,D", Op::Set, Implied, 8, 2),
    /* F3 */ Entry::new("SET 6,E", Op::Set, Implied, 8, 2),
    /* F4 */ Entry::new("SET 6,H", Op::Set, Implied, 8, 2),
    /* F5 */ Entry::new("SET 6,L", Op::Set, Implied, 8, 2),
    /* F6 */ Entry::new("SET 6,(HL)", Op::SetMem, Implied, 15, 2),
    /* F7 */ Entry::new("SET 6,A", Op::Set, Implied, 8, 2),
    /* F8 */ Entry::new("SET 7,B", Op::Set, Implied, 8, 2),
    /* F9 */ Entry::new("SET 7,C", Op::Set, Implied, 8, 2),
    /* FA */ Entry::new("SET 7,D", Op::Set, Implied, 8, 2),
    /* FB */ Entry::new("SET 7,E", Op::Set, Implied, 8, 2),
    /* FC */ Entry::new("SET 7,H", Op::Set, Implied, 8, 2),
    /* FD */ Entry::new("SET 7,L", Op::Set, Implied, 8, 2),
    /* FE */ Entry::new("SET 7,(HL)", Op::SetMem, Implied, 15, 2),
    /* FF */ Entry::new("SET 7,A", Op::Set, Implied, 8, 2),
];
