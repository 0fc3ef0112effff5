//! Operand fetch and dispatch to the semantic functions.

use emu_core::Bus;

use crate::decode::{Op, Operand, Table};
use crate::error::{DecodeError, Fault};

use super::Z80;

/// Where the opcode being executed came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExecContext {
    /// Decoded from the instruction stream; operands are read from PC.
    Fetched,
    /// Placed on the data bus by an interrupting device (mode 0). PC is
    /// untouched and the opcode may not need operand bytes.
    Forced { opcode: u8 },
}

/// Operand values read after the opcode.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Args {
    pub n: u8,
    pub nn: u16,
    /// Branch offset or index displacement.
    pub d: i8,
}

impl Z80 {
    /// Execute the decoded (or forced) instruction. Returns its total
    /// T-states: the table cost unless the instruction overrides it.
    pub(super) fn execute<B: Bus>(&mut self, bus: &mut B, ctx: ExecContext) -> Result<u8, Fault> {
        let (table, opcode) = match ctx {
            ExecContext::Fetched => (self.decoder.table, self.decoder.opcode),
            ExecContext::Forced { opcode } => (Table::Main, opcode),
        };
        let entry = table.entry(opcode);

        if matches!(entry.op, Op::Prefix | Op::Unprefixed) || entry.operand == Operand::Gateway {
            return Err(match ctx {
                ExecContext::Forced { opcode } => Fault::ForcedOperand {
                    opcode,
                    dump: self.dump(&*bus),
                },
                ExecContext::Fetched => {
                    self.gateway_fault(&*bus, DecodeError::MisplacedGateway { table, opcode })
                }
            });
        }
        if entry.template.is_empty() {
            return Err(Fault::EmptyEntry {
                table,
                opcode,
                dump: self.dump(&*bus),
            });
        }

        let args = match ctx {
            ExecContext::Fetched => self.fetch_args(bus, entry.operand),
            ExecContext::Forced { opcode } => {
                if entry.operand != Operand::Implied {
                    return Err(Fault::ForcedOperand {
                        opcode,
                        dump: self.dump(&*bus),
                    });
                }
                Args::default()
            }
        };

        let cycles = self.dispatch(bus, entry.op, opcode, args, ctx);
        Ok(cycles.unwrap_or(entry.cycles))
    }

    #[allow(clippy::cast_possible_wrap)]
    fn fetch_args<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Args {
        match operand {
            Operand::Byte => Args {
                n: self.fetch_byte(bus),
                ..Args::default()
            },
            Operand::Word => Args {
                nn: self.fetch_word(bus),
                ..Args::default()
            },
            Operand::Relative | Operand::Index => Args {
                d: self.fetch_byte(bus) as i8,
                ..Args::default()
            },
            Operand::IndexByte => {
                let d = self.fetch_byte(bus) as i8;
                Args {
                    n: self.fetch_byte(bus),
                    d,
                    ..Args::default()
                }
            }
            Operand::Inverted => Args {
                d: self.decoder.displacement as i8,
                ..Args::default()
            },
            Operand::Implied | Operand::Gateway => Args::default(),
        }
    }

    /// Run the semantic function for `op`. Registers, conditions and bit
    /// numbers come from the opcode fields:
    ///
    /// ```text
    ///   7 6 5 4 3 2 1 0
    ///   x x y y y z z z
    ///       p p q
    /// ```
    #[allow(clippy::too_many_lines)]
    fn dispatch<B: Bus>(
        &mut self,
        bus: &mut B,
        op: Op,
        opcode: u8,
        args: Args,
        ctx: ExecContext,
    ) -> Option<u8> {
        let y = (opcode >> 3) & 7;
        let z = opcode & 7;
        let p = (opcode >> 4) & 3;

        match op {
            // Screened out by `execute`.
            Op::Prefix | Op::Unprefixed => None,

            Op::Nop | Op::NopEd => None,

            // Loads and exchanges
            Op::LdRpNn => self.ld_rp_nn(p, args.nn),
            Op::LdRpIndA => self.ld_rp_ind_a(bus, p),
            Op::LdARpInd => self.ld_a_rp_ind(bus, p),
            Op::LdNnHl => self.ld_nn_hl(bus, args.nn),
            Op::LdHlNn => self.ld_hl_nn(bus, args.nn),
            Op::LdNnA => self.ld_nn_a(bus, args.nn),
            Op::LdANn => self.ld_a_nn(bus, args.nn),
            Op::LdRN => self.ld_r_n(y, args.n),
            Op::LdMemN => self.ld_mem_n(bus, args.d, args.n),
            Op::LdRR => self.ld_r_r(y, z),
            Op::LdRMem => self.ld_r_mem(bus, y, args.d),
            Op::LdMemR => self.ld_mem_r(bus, z, args.d),
            Op::Pop => self.pop_rp(bus, p),
            Op::Push => self.push_rp(bus, p),
            Op::ExAfAf => self.ex_af_af(),
            Op::Exx => self.exx(),
            Op::ExDeHl => self.ex_de_hl(),
            Op::ExSpHl => self.ex_sp_hl(bus),
            Op::LdSpHl => self.ld_sp_hl(),
            Op::LdNnRp => self.ld_nn_rp(bus, p, args.nn),
            Op::LdRpNnInd => self.ld_rp_nn_ind(bus, p, args.nn),
            Op::LdIA => self.ld_i_a(),
            Op::LdRA => self.ld_r_a(),
            Op::LdAI => self.ld_a_i(),
            Op::LdAR => self.ld_a_r(),

            // Arithmetic and logic
            Op::AluR => self.alu_r(y, z),
            Op::AluMem => self.alu_mem(bus, y, args.d),
            Op::AluN => self.alu_n(y, args.n),
            Op::IncR => self.inc_reg(y),
            Op::DecR => self.dec_reg(y),
            Op::IncMem => self.inc_mem(bus, args.d),
            Op::DecMem => self.dec_mem(bus, args.d),
            Op::IncRp => self.inc_rp(p),
            Op::DecRp => self.dec_rp(p),
            Op::AddHlRp => self.add_hl_rp(p),
            Op::AdcHl => self.adc_hl(p),
            Op::SbcHl => self.sbc_hl(p),
            Op::Daa => self.daa(),
            Op::Cpl => self.cpl(),
            Op::Neg => self.neg(),
            Op::Scf => self.scf(),
            Op::Ccf => self.ccf(),

            // Rotates, shifts and single bits
            Op::RotateA => self.rotate_a(y),
            Op::Rot => self.rot(y, z),
            Op::RotMem => self.rot_mem(bus, y),
            Op::Bit => self.bit(y, z),
            Op::BitMem => self.bit_mem(bus, y),
            Op::Res => self.res(y, z),
            Op::ResMem => self.res_mem(bus, y),
            Op::Set => self.set(y, z),
            Op::SetMem => self.set_mem(bus, y),
            Op::RotIdx => self.rot_idx(bus, y, z, args.d),
            Op::BitIdx => self.bit_idx(bus, y, args.d),
            Op::ResIdx => self.res_idx(bus, y, z, args.d),
            Op::SetIdx => self.set_idx(bus, y, z, args.d),
            Op::Rrd => self.rrd(bus),
            Op::Rld => self.rld(bus),

            // Branches, calls and returns
            Op::Jp => self.jp(args.nn),
            Op::JpCc => self.jp_cc(y, args.nn),
            Op::Jr => self.jr(args.d),
            Op::JrCc => self.jr_cc(y & 3, args.d),
            Op::Djnz => self.djnz(args.d),
            Op::JpHl => self.jp_hl(),
            Op::Call => self.call(bus, args.nn),
            Op::CallCc => self.call_cc(bus, y, args.nn),
            Op::Ret => self.ret(bus),
            Op::RetCc => self.ret_cc(bus, y),
            Op::Retn | Op::Reti => self.retn(bus),
            Op::Rst => self.rst(bus, y),

            // CPU control
            Op::Halt => self.halt(ctx),
            Op::Di => self.di(),
            Op::Ei => self.ei(),
            Op::Im => self.im(y),

            // Ports
            Op::OutNA => self.out_n_a(bus, args.n),
            Op::InAN => self.in_a_n(bus, args.n),
            Op::InRC => self.in_r_c(bus, y),
            Op::OutCR => self.out_c_r(bus, y),

            // Block transfer, compare and I/O
            Op::BlockLd => self.block_ld(bus, opcode),
            Op::BlockCp => self.block_cp(bus, opcode),
            Op::BlockIn => self.block_in(bus, opcode),
            Op::BlockOut => self.block_out(bus, opcode),
        }
    }
}
