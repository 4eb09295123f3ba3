//! ALU control.
//!
//! Translates the 2-bit ALU class from the main control, plus the funct or
//! opcode field, into the 4-bit ALU operation `[a_invert, b_negate, op1, op0]`
//! and an `unsigned` line that masks overflow.
//!
//! | class | meaning                 | operation                          |
//! |-------|-------------------------|------------------------------------|
//! | `00`  | address / pass-through  | ADD, unsigned                      |
//! | `01`  | branch compare          | SUB, unsigned                      |
//! | `10`  | R-type                  | from funct                         |
//! | `11`  | immediate arithmetic    | from opcode (ADDI/ADDIU/SLTI/ORI)  |

use crate::common::constants::{FUNCT_BITS, OPCODE_BITS};
use crate::common::error::LogicResult;
use crate::core::pipeline::signals::ALU_OP_BITS;
use crate::isa::{funct, opcodes};
use crate::logic::compare::equal;
use crate::logic::gates::any;
use crate::logic::{Bit, Bits};

/// Width of the ALU operation code.
pub const ALU_CODE_BITS: usize = 4;

/// Bitwise AND.
pub const ALU_AND: u32 = 0b0000;
/// Bitwise OR.
pub const ALU_OR: u32 = 0b0001;
/// Addition.
pub const ALU_ADD: u32 = 0b0010;
/// Subtraction.
pub const ALU_SUB: u32 = 0b0110;
/// Set on less than.
pub const ALU_SLT: u32 = 0b0111;
/// Bitwise NOR (AND of both inverted operands).
pub const ALU_NOR: u32 = 0b1100;

/// Output of ALU control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AluControl {
    /// 4-bit operation `[a_invert, b_negate, op1, op0]`.
    pub code: Bits,
    /// Overflow must be ignored.
    pub unsigned: Bit,
}

impl AluControl {
    /// Control for a fixed operation code.
    pub fn fixed(code: u32, unsigned: Bit) -> Self {
        Self {
            code: Bits::from_u32(code, ALU_CODE_BITS),
            unsigned,
        }
    }
}

/// Decodes the ALU operation.
///
/// # Arguments
///
/// * `alu_op` - 2-bit class from the main control.
/// * `funct` - 6-bit funct field.
/// * `opcode` - 6-bit opcode field.
///
/// # Errors
///
/// [`LogicError::WidthMismatch`](crate::LogicError::WidthMismatch) for wrongly
/// sized inputs.
pub fn alu_control(alu_op: &Bits, funct: &Bits, opcode: &Bits) -> LogicResult<AluControl> {
    alu_op.expect_width(ALU_OP_BITS)?;
    let (c1, c0) = (alu_op.bit(0)?, alu_op.bit(1)?);
    let branch = !c1 & c0;
    let rtype = c1 & !c0;
    let imm = c1 & c0;

    let f = |code: u32| equal(funct, &Bits::from_u32(code, FUNCT_BITS));
    let op = |code: u32| equal(opcode, &Bits::from_u32(code, OPCODE_BITS));

    let f_add = f(funct::ADD)?;
    let f_sub = f(funct::SUB)?;
    let f_subu = f(funct::SUBU)?;
    let f_and = f(funct::AND)?;
    let f_or = f(funct::OR)?;
    let f_nor = f(funct::NOR)?;
    let f_slt = f(funct::SLT)?;
    let i_addi = op(opcodes::OP_ADDI)?;
    let i_slti = op(opcodes::OP_SLTI)?;
    let i_ori = op(opcodes::OP_ORI)?;

    let sel_sub = any(&[branch, rtype & (f_sub | f_subu)]);
    let sel_and = rtype & f_and;
    let sel_or = any(&[rtype & f_or, imm & i_ori]);
    let sel_nor = rtype & f_nor;
    let sel_slt = any(&[rtype & f_slt, imm & i_slti]);

    let code = Bits::from_vec(vec![
        sel_nor,
        any(&[sel_sub, sel_slt, sel_nor]),
        !any(&[sel_and, sel_or, sel_nor]),
        any(&[sel_or, sel_slt]),
    ])?;
    let signed = any(&[rtype & (f_add | f_sub), imm & i_addi]);
    Ok(AluControl {
        code,
        unsigned: !signed,
    })
}
