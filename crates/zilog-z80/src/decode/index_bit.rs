//! `DD CB d op` and `FD CB d op`. The displacement precedes the opcode.
//!
//! Templates name IX; the disassembler swaps in IY under `FD`.

use super::Operand::Inverted;
use super::{Entry, Op};

pub(super) static INDEX_BIT: [Entry; 256] = [
    /* 00 */ Entry::new("RLC (IX{d}),B", Op::RotIdx, Inverted, 23, 4),
    /* 01 */ Entry::new("RLC (IX{d}),C", Op::RotIdx, Inverted, 23, 4),
    /* 02 */ Entry::new("RLC (IX{d}),D", Op::RotIdx, Inverted, 23, 4),
    /* 03 */ Entry::new("RLC (IX{d}),E", Op::RotIdx, Inverted, 23, 4),
    /* 04 */ Entry::new("RLC (IX{d}),H", Op::RotIdx, Inverted, 23, 4),
    /* 05 */ Entry::new("RLC (IX{d}),L", Op::RotIdx, Inverted, 23, 4),
    /* 06 */ Entry::new("RLC (IX{d})", Op::RotIdx, Inverted, 23, 4),
    /* 07 */ Entry::new("RLC (IX{d}),A", Op::RotIdx, Inverted, 23, 4),
    /* 08 */ Entry::new("RRC (IX{d}),B", Op::RotIdx, Inverted, 23, 4),
    /* 09 */ Entry::new("RRC (IX{d}),C", Op::RotIdx, Inverted, 23, 4),
    /* 0A */ Entry::new("RRC (IX{d}),D", Op::RotIdx, Inverted, 23, 4),
    /* 0B */ Entry::new("RRC (IX{d}),E", Op::RotIdx, Inverted, 23, 4),
    /* 0C */ Entry::new("RRC (IX{d}),H", Op::RotIdx, Inverted, 23, 4),
    /* 0D */ Entry::new("RRC (IX{d}),L", Op::RotIdx, Inverted, 23, 4),
    /* 0E */ Entry::new("RRC (IX{d})", Op::RotIdx, Inverted, 23, 4),
    /* 0F */ Entry::new("RRC (IX{d}),A", Op::RotIdx, Inverted, 23, 4),
    /* 10 */ Entry::new("RL (IX{d}),B", Op::RotIdx, Inverted, 23, 4),
    /* 11 */ Entry::new("RL (IX{d}),C", Op::RotIdx, Inverted, 23, 4),
    /* 12 */ Entry::new("RL (IX{d}),D", Op::RotIdx, Inverted, 23, 4),
    /* 13 */ Entry::new("RL (IX{d}),E", Op::RotIdx, Inverted, 23, 4),
    /* 14 */ Entry::new("RL (IX{d}),H", Op::RotIdx, Inverted, 23, 4),
    /* 15 */ Entry::new("RL (IX{d}),L", Op::RotIdx, Inverted, 23, 4),
    /* 16 */ Entry::new("RL (IX{d})", Op::RotIdx, Inverted, 23, 4),
    /* 17 */ Entry::new("RL (IX{d}),A", Op::RotIdx, Inverted, 23, 4),
    /* 18 */ Entry::new("RR (IX{d}),B", Op::RotIdx, Inverted, 23, 4),
    /* 19 */ Entry::new("RR (IX{d}),C", Op::RotIdx, Inverted, 23, 4),
    /* 1A */ Entry::new("RR (IX{d}),D", Op::RotIdx, Inverted, 23, 4),
    /* 1B */ Entry::new("RR (IX{d}),E", Op::RotIdx, Inverted, 23, 4),
    /* 1C */ Entry::new("RR (IX{d}),H", Op::RotIdx, Inverted, 23, 4),
    /* 1D */ Entry::new("RR (IX{d}),L", Op::RotIdx, Inverted, 23, 4),
    /* 1E */ Entry::new("RR (IX{d})", Op::RotIdx, Inverted, 23, 4),
    /* 1F */ Entry::new("RR (IX{d}),A", Op::RotIdx, Inverted, 23, 4),
    /* 20 */ Entry::new("SLA (IX{d}),B", Op::RotIdx, Inverted, 23, 4),
    /* 21 */ Entry::new("SLA (IX{d}),C", Op::RotIdx, Inverted, 23, 4),
    /* 22 */ Entry::new("SLA (IX{d}),D", Op::RotIdx, Inverted, 23, 4),
    /* 23 */ Entry::new("SLA (IX{d}),E", Op::RotIdx, Inverted, 23, 4),
    /* 24 */ Entry::new("SLA (IX{d}),H", Op::RotIdx, Inverted, 23, 4),
    /* 25 */ Entry::new("SLA (IX{d}),L", Op::RotIdx, Inverted, 23, 4),
    /* 26 */ Entry::new("SLA (IX{d})", Op::RotIdx, Inverted, 23, 4),
    /* 27 */ Entry::new("SLA (IX{d}),A", Op::RotIdx, Inverted, 23, 4),
    /* 28 */ Entry::new("SRA (IX{d}),B", Op::RotIdx, Inverted, 23, 4),
    /* 29 */ Entry::new("SRA (IX{d}),C", Op::RotIdx, Inverted, 23, 4),
    /* 2A */ Entry::new("SRA (IX{d}),D", Op::RotIdx, Inverted, 23, 4),
    /* 2B */ Entry::new("SRA (IX{d}),E", Op::RotIdx, Inverted, 23, 4),
    /* 2C */ Entry::new("SRA (IX{d}),H", Op::RotIdx, Inverted, 23, 4),
    /* 2D */ Entry::new("SRA (IX{d}),L", Op::RotIdx, Inverted, 23, 4),
    /* 2E */ Entry::new("SRA (IX{d})", Op::RotIdx, Inverted, 23, 4),
    /* 2F */ Entry::new("SRA (IX{d}),A", Op::RotIdx, Inverted, 23, 4),
    /* 30 */ Entry::new("SLL (IX{d}),B", Op::RotIdx, Inverted, 23, 4),
    /* 31 */ Entry::new("SLL (IX{d}),C", Op::RotIdx, Inverted, 23, 4),
    /* 32 */ Entry::new("SLL (IX{d}),D", Op::RotIdx, Inverted, 23, 4),
    /* 33 */ Entry::new("SLL (IX{d}),E", Op::RotIdx, Inverted, 23, 4),
    /* 34 */ Entry::new("SLL (IX{d}),H", Op::RotIdx, Inverted, 23, 4),
    /* 35 */ Entry::new("SLL (IX{d}),L", Op::RotIdx, Inverted, 23, 4),
    /* 36 */ Entry::new("SLL (IX{d})", Op::RotIdx, Inverted, 23, 4),
    /* 37 */ Entry::new("SLL (IX{d}),A", Op::RotIdx, Inverted, 23, 4),
    /* 38 */ Entry::new("SRL (IX{d}),B", Op::RotIdx, Inverted, 23, 4),
    /* 39 */ Entry::new("SRL (IX{d}),C", Op::RotIdx, Inverted, 23, 4),
    /* 3A */ Entry::new("SRL (IX{d}),D", Op::RotIdx, Inverted, 23, 4),
    /* 3B */ Entry::new("SRL (IX{d}),E", Op::RotIdx, Inverted, 23, 4),
    /* 3C */ Entry::new("SRL (IX{d}),H", Op::RotIdx, Inverted, 23, 4),
    /* 3D */ Entry::new("SRL (IX{d}),L", Op::RotIdx, Inverted, 23, 4),
    /* 3E */ Entry::new("SRL (IX{d})", Op::RotIdx, Inverted, 23, 4),
    /* 3F */ Entry::new("SRL (IX{d}),A", Op::RotIdx, Inverted, 23, 4),
    /* 40 */ Entry::new("BIT 0,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 41 */ Entry::new("BIT 0,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 42 */ Entry::new("BIT 0,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 43 */ Entry::new("BIT 0,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 44 */ Entry::new("BIT 0,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 45 */ Entry::new("BIT 0,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 46 */ Entry::new("BIT 0,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 47 */ Entry::new("BIT 0,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 48 */ Entry::new("BIT 1,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 49 */ Entry::new("BIT 1,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 4A */ Entry::new("BIT 1,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 4B */ Entry::new("BIT 1,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 4C */ Entry::new("BIT 1,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 4D */ Entry::new("BIT 1,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 4E */ Entry::new("BIT 1,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 4F */ Entry::new("BIT 1,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 50 */ Entry::new("BIT 2,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 51 */ Entry::new("BIT 2,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 52 */ Entry::new("BIT 2,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 53 */ Entry::new("BIT 2,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 54 */ Entry::new("BIT 2,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 55 */ Entry::new("BIT 2,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 56 */ Entry::new("BIT 2,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 57 */ Entry::new("BIT 2,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 58 */ Entry::new("BIT 3,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 59 */ Entry::new("BIT 3,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 5A */ Entry::new("BIT 3,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 5B */ Entry::new("BIT 3,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 5C */ Entry::new("BIT 3,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 5D */ Entry::new("BIT 3,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 5E */ Entry::new("BIT 3,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 5F */ Entry::new("BIT 3,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 60 */ Entry::new("BIT 4,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 61 */ Entry::new("BIT 4,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 62 */ Entry::new("BIT 4,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 63 */ Entry::new("BIT 4,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 64 */ Entry::new("BIT 4,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 65 */ Entry::new("BIT 4,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 66 */ Entry::new("BIT 4,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 67 */ Entry::new("BIT 4,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 68 */ Entry::new("BIT 5,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 69 */ Entry::new("BIT 5,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 6A */ Entry::new("BIT 5,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 6B */ Entry::new("BIT 5,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 6C */ Entry::new("BIT 5,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 6D */ Entry::new("BIT 5,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 6E */ Entry::new("BIT 5,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 6F */ Entry::new("BIT 5,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 70 */ Entry::new("BIT 6,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 71 */ Entry::new("BIT 6,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 72 */ Entry::new("BIT 6,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 73 */ Entry::new("BIT 6,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 74 */ Entry::new("BIT 6,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 75 */ Entry::new("BIT 6,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 76 */ Entry::new("BIT 6,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 77 */ Entry::new("BIT 6,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 78 */ Entry::new("BIT 7,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 79 */ Entry::new("BIT 7,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 7A */ Entry::new("BIT 7,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 7B */ Entry::new("BIT 7,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 7C */ Entry::new("BIT 7,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 7D */ Entry::new("BIT 7,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 7E */ Entry::new("BIT 7,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 7F */ Entry::new("BIT 7,(IX{d})", Op::BitIdx, Inverted, 20, 4),
    /* 80 */ Entry::new("RES 0,(IX{d}),B", Op::ResIdx, Inverted, 23, 4),
    /* 81 */ Entry::new("RES 0,(IX{d}),C", Op::ResIdx, Inverted, 23, 4),
    /* 82 */ Entry::new("RES 0,(IX{d}),D", Op::ResIdx, Inverted, 23, 4),
    /* 83 */ Entry::new("RES 0,(IX{d}),E", Op::ResIdx, Inverted, 23, 4),
    /* 84 */ Entry::new("RES 0,(IX{d}),H", Op::ResIdx, Inverted, 23, 4),
    /* 85 */ Entry::new("RES 0,(IX{d}),L", Op::ResIdx, Inverted, 23, 4),
    /* 86 */ Entry::new("RES 0,(IX{d})", Op::ResIdx, Inverted, 23, 4),
    /* 87 */ Entry::new("RES 0,(IX{d}),A", Op::ResIdx, Inverted, 23, 4),
    /* 88 */ Entry::new("RES 1,(IX{d}),B", Op::ResIdx, Inverted, 23, 4),
    /* 89 */ Entry::new("RES 1,(IX{d}),C", Op::ResIdx, Inverted, 23, 4),
    /* 8A */ Entry::new("RES 1,(IX{d}),D", Op::ResIdx, Inverted, 23, 4),
    /* 8B */ Entry::new("RES 1,(IX{d}),E", Op::ResIdx, Inverted, 23, 4),
    /* 8C */ Entry::new("RES 1,(IX{d}),H", Op::ResIdx, Inverted, 23, 4),
    /* 8D */ Entry::new("RES 1,(IX{d}),L", Op::ResIdx, Inverted, 23, 4),
    /* 8E */ Entry::new("RES 1,(IX{d})", Op::ResIdx, Inverted, 23, 4),
    /* 8F */ Entry::new("RES 1,(IX{d}),A", Op::ResIdx, Inverted, 23, 4),
    /* 90 */ Entry::new("RES 2,(IX{d}),B", Op::ResIdx, Inverted, 23, 4),
    /* 91 */ Entry::new("RES 2,(IX{d}),C", Op::ResIdx, Inverted, 23, 4),
    /* 92 */ Entry::new("RES 2,(IX{d}),D", Op::ResIdx, Inverted, 23, 4),
    /* 93 */ Entry::new("RES 2,(IX{d}),E", Op::ResIdx, Inverted, 23, 4),
    /* 94 */ Entry::new("RES 2,(IX{d}),H", Op::ResIdx, Inverted, 23, 4),
    /* 95 */ Entry::new("RES 2,(IX{d}),L", Op::ResIdx, Inverted, 23, 4),
    /* 96 */ Entry::new("RES 2,(IX{d})", Op::ResIdx, Inverted, 23, 4),
    /* 97 */ Entry::new("RES 2,(IX{d}),A", Op::ResIdx, Inverted, 23, 4),
    /* 98 */ Entry::new("RES 3,(IX{d}),B", Op::ResIdx, Inverted, 23, 4),
    /* 99 */ Entry::new("RES 3,(IX{d}),C", Op::ResIdx, Inverted, 23, 4),
    /* 9A */ Entry::new("RES 3,(IX{d}),D", Op::ResIdx, Inverted, 23, 4),
    /* 9B */ Entry::new("RES 3,(IX{d}),E", Op::ResIdx, Inverted, 23, 4),
    /* 9C */ Entry::new("RES 3,(IX{d}),H", Op::ResIdx, Inverted, 23, 4),
    /* 9D */ Entry::new("RES 3,(IX{d}),L", Op::ResIdx, Inverted, 23, 4),
    /* 9E */ Entry::new("RES 3,(IX{d})", Op::ResIdx, Inverted, 23, 4),
    /* 9F */ Entry::new("RES 3,(IX{d}),A", Op::ResIdx, Inverted, 23, 4),
    /* A0 */ Entry::new("RES 4,(IX{d}),B", Op::ResIdx, Inverted, 23, 4),
    /* A1 */ Entry::new("RES 4,(IX{d}),C", Op::ResIdx, Inverted, 23, 4),
    /* A2 */ Entry::new("RES 4,(IX{d}),D", Op::ResIdx, Inverted, 23, 4),
    /* A3 */ Entry::new("RES 4,(IX{d}),E", Op::ResIdx, Inverted, 23, 4),
    /* A4 */ Entry::new("RES 4,(IX{d}),H", Op::ResIdx, Inverted, 23, 4),
    /* A5 */ Entry::new("RES 4,(IX{d}),L", Op::ResIdx, Inverted, 23, 4),
    /* A6 */ Entry::new("RES 4,(IX{d})", Op::ResIdx, Inverted, 23, 4),
    /* A7 */ Entry::new("RES 4,(IX{d}),A", Op::ResIdx, Inverted, 23, 4),
    /* A8 */ Entry::new("RES 5,(IX{d}),B", Op::ResIdx, Inverted, 23, 4),
    /* A9 */ Entry::new("RES 5,(IX{d}),C", Op::ResIdx, Inverted, 23, 4),
    /* AA */ Entry::new("RES 5,(IX{d}),D", Op::ResIdx, Inverted, 23, 4),
    /* AB */ Entry::new("RES 5,(IX{d}),E", Op::ResIdx, Inverted, 23, 4),
    /* AC */ Entry::new("RES 5,(IX{d}),H", Op::ResIdx, Inverted, 23, 4),
    /* AD */ Entry::new("RES 5,(IX{d}),L", Op::ResIdx, Inverted, 23, 4),
    /* AE */ Entry::new("RES 5,(IX{d})", Op::ResIdx, Inverted, 23, 4),
    /* AF */ Entry::new("RES 5,(IX{d}),A", Op::ResIdx, Inverted, 23, 4),
    /* B0 */ Entry::new("RES 6,(IX{d}),B", Op::ResIdx, Inverted, 23, 4),
    /* B1 */ Entry::new("RES 6,(IX{d}),C", Op::ResIdx, Inverted, 23, 4),
    /* B2 */ Entry::new("RES 6,(IX{d}),D", Op::ResIdx, Inverted, 23, 4),
    /* B3 */ Entry::new("RES 6,(IX{d}),E", Op::ResIdx, Inverted, 23, 4),
    /* B4 */ Entry::new("RES 6,(IX{d}),H", Op::ResIdx, Inverted, 23, 4),
    /* B5 */ Entry::new("RES 6,(IX{d}),L", Op::ResIdx, Inverted, 23, 4),
    /* B6 */ Entry::new("RES 6,(IX{d})", Op::ResIdx, Inverted, 23, 4),
    /* B7 */ Entry::new("RES 6,(IX{d}),A", Op::ResIdx, Inverted, 23, 4),
    /* B8 */ Entry::new("RES 7,(IX{d}),B", Op::ResIdx, Inverted, 23, 4),
    /* B9 */ Entry::new("RES 7,(IX{d}),C", Op::ResIdx, Inverted, 23, 4),
    /* BA */ Entry::new("RES 7,(IX{d}),D", Op::ResIdx, Inverted, 23, 4),
    /* BB */ Entry::new("RES 7,(IX{d}),E", Op::ResIdx, Inverted, 23, 4),
    /* BC */ Entry::new("RES 7,(IX{d}),H", Op::ResIdx, Inverted, 23, 4),
    /* BD */ Entry::new("RES 7,(IX{d}),L", Op::ResIdx, Inverted, 23, 4),
    /* BE */ Entry::new("RES 7,(IX{d})", Op::ResIdx, Inverted, 23, 4),
    /* BF */ Entry::new("RES 7,(IX{d}),A", Op::ResIdx, Inverted, 23, 4),
    /* C0 */ Entry::new("SET 0,(IX{d}),B", Op::SetIdx, Inverted, 23, 4),
    /* C1 */ Entry::new("SET 0,(IX{d}),C", Op::SetIdx, Inverted, 23, 4),
    /* C2 */ Entry::new("SET 0,(IX{d}),D", Op::SetIdx, Inverted, 23, 4),
    /* C3 */ Entry::new("SET 0,(IX{d}),E", Op::SetIdx, Inverted, 23, 4),
    /* C4 */ Entry::new("SET 0,(IX{d}),H", Op::SetIdx, Inverted, 23, 4),
    /* C5 */ Entry::new("SET 0,(IX{d}),L", Op::SetIdx, Inverted, 23, 4),
    /* C6 */ Entry::new("SET 0,(IX{d})", Op::SetIdx, Inverted, 23, 4),
    /* C7 */ Entry::new("SET 0,(IX{d}),A", Op::SetIdx, Inverted, 23, 4),
    /* C8 */ Entry::new("SET 1,(IX{d}),B", Op::SetIdx, Inverted, 23, 4),
    /* C9 */ Entry::new("SET 1,(IX{d}),C", Op::SetIdx, Inverted, 23, 4),
    /* CA */ Entry::new("SET 1,(IX{d}),D", Op::SetIdx, Inverted, 23, 4),
    /* CB */ Entry::new("SET 1,(IX{d}),E", Op::SetIdx, Inverted, 23, 4),
    /* CC */ Entry::new("SET 1,(IX{d}),H", Op::SetIdx, Inverted, 23, 4),
    /* CD */ Entry::new("SET 1,(IX{d}),L", Op::SetIdx, Inverted, 23, 4),
    /* CE */ Entry::new("SET 1,(IX{d})", Op::SetIdx, Inverted, 23, 4),
    /* CF */ Entry::new("SET 1,(IX{d}),A", Op::SetIdx, Inverted, 23, 4),
    /* D0 */ Entry::new("SET 2,(IX{d}),B", Op::SetIdx, Inverted, 23, 4),
    /* D1 */ Entry::new("SET 2,(IX{d}),C", Op::SetIdx, Inverted, 23, 4),
    /* D2 */ Entry::new("SET 2,(IX{d}),D", Op::SetIdx, Inverted, 23, 4),
    /* D3 */ Entry::new("SET 2,(IX{d}),E", Op::SetIdx, Inverted, 23, 4),
    /* D4 */ Entry::new("SET 2,(IX{d}),H", Op::SetIdx, Inverted, 23, 4),
    /* D5 */ Entry::new("SET 2,(IX{d}),L", Op::SetIdx, Inverted, 23, 4),
    /* D6 */ Entry::new("SET 2,(IX{d})", Op::SetIdx, Inverted, 23, 4),
    /* D7 */ Entry::new("SET 2,(IX{d}),A", Op::SetIdx, Inverted, 23, 4),
    /* D8 */ Entry::new("SET 3,(IX{d}),B", Op::SetIdx, Inverted, 23, 4),
    /* D9 */ Entry::new("SET 3,(IX{d}),C", Op::SetIdx, Inverted, 23, 4),
    /* DA */ Entry::new("SET 3,(IX{d}),D", Op::SetIdx, Inverted, 23, 4),
    /* DB */ Entry::new("SET 3,(IX{d}),E", Op::SetIdx, Inverted, 23, 4),
    /* DC */ Entry::new("SET 3,(IX{d}),H", Op::SetIdx, Inverted, 23, 4),
    /* DD */ Entry::new("SET 3,(IX{d}),L", Op::SetIdx, Inverted, 23, 4),
    /* DE */ Entry::new("SET 3,(IX{d})", Op::SetIdx, Inverted, 23, 4),
    /* DF */ Entry::new("SET 3,(IX{d}),A", Op::SetIdx, Inverted, 23, 4),
    /* E0 */ Entry::new("SET 4,(IX{d}),B", Op::SetIdx, Inverted, 23, 4),
    /* E1 */ Entry::new("SET 4,(IX{d}),C", Op::SetIdx, Inverted, 23, 4),
    /* E2 */ Entry::new("SET 4,(IX{d}),D", Op::SetIdx, Inverted, 23, 4),
    /* E3 */ Entry::new("SET 4,(IX{d}),E", Op::SetIdx, Inverted, 23, 4),
    /* E4 */ Entry::new("SET 4,(IX{d}),H", Op::SetIdx, Inverted, 23, 4),
    /* E5 */ Entry::new("SET 4,(IX{d}),L", Op::SetIdx, Inverted, 23, 4),
    /* E6 */ Entry::new("SET 4,(IX{d})", Op::SetIdx, Inverted, 23, 4),
    /* E7 */ Entry::new("SET 4,(IX{d}),A", Op::SetIdx, Inverted, 23, 4),
    /* E8 */ Entry::new("SET 5,(IX{d}),B", Op::SetIdx, Inverted, 23, 4),
    /* E9 */ Entry::new("SET 5,(IX{d}),C", Op::SetIdx, Inverted, 23, 4),
    /* EA */ Entry::new("SET 5,(IX{d}),D", Op::SetIdx, Inverted, 23, 4),
    /* EB */ Entry::new("SET 5,(IX{d}),E", Op::SetIdx, Inverted, 23, 4),
    /* EC */ Entry::new("SET 5,(IX{d}),H", Op::SetIdx, Inverted, 23, 4),
    /* ED */ Entry::new("SET 5,(IX{d}),L", Op::SetIdx, Inverted, 23, 4),
    /* EE */ Entry::new("SET 5,(IX{d})", Op::SetIdx, Inverted, 23, 4),
    /* EF */ Entry::new("SET 5,(IX{d}),A", Op::SetIdx, Inverted, 23, 4),
    /* F0 */ Entry::new("SET 6,(IX{d}),B", Op::SetIdx, Inverted, 23, 4),
    /* F1 */ Entry::new("SET 6,(IX{d}),C", Op::SetIdx, Inverted, 23, 4),
    /* F2 */ Entry::new("SET 6,(IX{d}),D", Op::SetIdx, Inverted, 23, 4),
    /* F3 */ Entry::new("SET 6,(IX{d}),E", Op::SetIdx, Inverted, 23, 4),
    /* F4 */ Entry::new("SET 6,(IX{d}),H", Op::SetIdx, Inverted, 23, 4),
    /* F5 */ Entry::new("SET 6,(IX{d}),L", Op::SetIdx, Inverted, 23, 4),
    /* F6 */ Entry::new("SET 6,(IX{d})", Op::SetIdx, Inverted, 23, 4),
    /* F7 */ Entry::new("SET 6,(IX{d}),A", Op::SetIdx, Inverted, 23, 4),
    /* F8 */ Entry::new("SET 7,(IX{d}),B", Op::SetIdx, Inverted, 23, 4),
    /* F9 */ Entry::new("SET 7,(IX{d}),C", Op::SetIdx, Inverted, 23, 4),
    /* FA */ Entry::new("SET 7,(IX{d}),D", Op::SetIdx, Inverted, 23, 4),
    /* FB */ Entry::new("SET 7,(IX{d}),E", Op::SetIdx, Inverted, 23, 4),
    /* FC */ Entry::new("SET 7,(IX{d}),H", Op::SetIdx, Inverted, 23, 4),
    /* FD */ Entry::new("SET 7,(IX{d}),L", Op::SetIdx, Inverted, 23, 4),
    /* FE */ Entry::new("SET 7,(IX{d})", Op::SetIdx, Inverted, 23, 4),
    /* FF */ Entry::new("SET 7,(IX{d}),A", Op::SetIdx, Inverted, 23, 4),
];
