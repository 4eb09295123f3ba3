//! Main control unit.
//!
//! Pure combinational decode of the opcode and funct fields. Each supported
//! instruction gets a class line (an equality comparator against its
//! constant), and every control field is an OR of class lines:
//!
//! | field         | raised by                                              |
//! |---------------|--------------------------------------------------------|
//! | `reg_dst`     | `10` for JAL, `01` for R-type ALU and shifts           |
//! | `alu_src`     | immediates, loads, stores, LUI, SYSCALL                |
//! | `use_shift`   | SLL, SRL, LUI                                          |
//! | `alu_op`      | `10` R-type, `01` branches, `11` immediate arithmetic  |
//! | `mem_to_reg`  | `01` LW, `10` JAL                                      |
//! | `reg_write`   | R-type ALU and shifts, immediates, LUI, LW, JAL        |
//!
//! An encoding that raises no class line gets neutral control plus the
//! `unsupported` flag. It is reported only if the instruction retires, so a
//! squashed wrong-path word or a garbage word past an exit never faults.

use crate::common::constants::{FUNCT_BITS, OPCODE_BITS};
use crate::common::error::{SimError, SimResult};
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::{InstructionBits, InstructionFields};
use crate::isa::{funct, opcodes};
use crate::logic::compare::equal;
use crate::logic::gates::any;
use crate::logic::{Bit, Bits};

/// Decodes an instruction into its control lines.
///
/// # Errors
///
/// [`SimError::Logic`] for wrongly sized fields.
pub fn decode(fields: &InstructionFields) -> SimResult<ControlSignals> {
    let op = |code: u32| equal(&fields.opcode, &Bits::from_u32(code, OPCODE_BITS));
    let r_type = op(opcodes::OP_RTYPE)?;
    let f = |code: u32| -> SimResult<Bit> {
        Ok(r_type & equal(&fields.funct, &Bits::from_u32(code, FUNCT_BITS))?)
    };

    let add = f(funct::ADD)?;
    let addu = f(funct::ADDU)?;
    let sub = f(funct::SUB)?;
    let subu = f(funct::SUBU)?;
    let and = f(funct::AND)?;
    let or = f(funct::OR)?;
    let nor = f(funct::NOR)?;
    let slt = f(funct::SLT)?;
    let sll = f(funct::SLL)?;
    let srl = f(funct::SRL)?;
    let jr = f(funct::JR)?;
    let syscall = f(funct::SYSCALL)?;

    let j = op(opcodes::OP_J)?;
    let jal = op(opcodes::OP_JAL)?;
    let beq = op(opcodes::OP_BEQ)?;
    let bne = op(opcodes::OP_BNE)?;
    let addi = op(opcodes::OP_ADDI)?;
    let addiu = op(opcodes::OP_ADDIU)?;
    let slti = op(opcodes::OP_SLTI)?;
    let ori = op(opcodes::OP_ORI)?;
    let lui = op(opcodes::OP_LUI)?;
    let lw = op(opcodes::OP_LW)?;
    let sw = op(opcodes::OP_SW)?;

    let r_alu = any(&[add, addu, sub, subu, and, or, nor, slt]);
    let shift = sll | srl;
    let imm_alu = any(&[addi, addiu, slti, ori]);
    let supported = any(&[r_alu, shift, jr, syscall, j, jal, beq, bne, imm_alu, lui, lw, sw]);

    let jump = j | jal;
    Ok(ControlSignals {
        reg_dst: Bits::from_vec(vec![jal, r_alu | shift])?,
        branch_eq: beq,
        branch_ne: bne,
        jump,
        jump_reg: jr,
        control_flow: any(&[beq, bne, jump, jr]),
        mem_read: lw,
        mem_write: sw,
        mem_to_reg: Bits::from_vec(vec![jal, lw])?,
        alu_src: any(&[imm_alu, lui, lw, sw, syscall]),
        use_shamt: shift,
        shift_right: srl,
        use_shift: shift | lui,
        alu_op: Bits::from_vec(vec![
            ((r_type & !syscall) | imm_alu) & supported,
            beq | bne | imm_alu,
        ])?,
        syscall,
        reg_write: any(&[r_alu, shift, imm_alu, lui, lw, jal]),
        sign_extend: !ori,
        unsupported: !supported,
    })
}

/// Error for a retiring instruction that carried the `unsupported` flag.
pub fn unimplemented(word: u32) -> SimError {
    let reason = if word.opcode() == opcodes::OP_COP1 {
        "floating point"
    } else {
        "unsupported opcode or funct"
    };
    SimError::Unimplemented { word, reason }
}
