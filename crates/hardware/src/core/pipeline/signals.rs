//! Pipeline control signals.
//!
//! This module defines the bundle produced by the main control unit and
//! carried down the pipeline with each instruction. It covers:
//! 1. **Register Control:** destination select and write enable.
//! 2. **Flow Control:** branch, jump and jump-register flags.
//! 3. **Memory Control:** read/write enables and the write-back source.
//! 4. **Execute Control:** ALU source, ALU class and shifter selects.
//! 5. **System Control:** the syscall flag and the unsupported-encoding flag.

use crate::logic::{Bit, Bits};

/// Width of the `reg_dst` select.
pub const REG_DST_BITS: usize = 2;
/// Width of the `mem_to_reg` select.
pub const MEM_TO_REG_BITS: usize = 2;
/// Width of the `alu_op` class.
pub const ALU_OP_BITS: usize = 2;

/// `reg_dst` value selecting rt.
pub const REG_DST_RT: u32 = 0b00;
/// `reg_dst` value selecting rd.
pub const REG_DST_RD: u32 = 0b01;
/// `reg_dst` value selecting the return-address register.
pub const REG_DST_RA: u32 = 0b10;

/// `mem_to_reg` value selecting the ALU result.
pub const WB_ALU: u32 = 0b00;
/// `mem_to_reg` value selecting memory data.
pub const WB_MEM: u32 = 0b01;
/// `mem_to_reg` value selecting the return address (pc + 4).
pub const WB_PC4: u32 = 0b10;

/// `alu_op` class: add (addresses, syscall pass-through).
pub const ALU_OP_MEM: u32 = 0b00;
/// `alu_op` class: subtract (branch comparison).
pub const ALU_OP_BRANCH: u32 = 0b01;
/// `alu_op` class: decode funct.
pub const ALU_OP_RTYPE: u32 = 0b10;
/// `alu_op` class: decode the immediate opcode.
pub const ALU_OP_IMM: u32 = 0b11;

/// Control lines for one instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlSignals {
    /// Destination register select (rt / rd / $ra).
    pub reg_dst: Bits,
    /// Branch when the ALU zero flag is set.
    pub branch_eq: Bit,
    /// Branch when the ALU zero flag is clear.
    pub branch_ne: Bit,
    /// Jump to the decoded target.
    pub jump: Bit,
    /// Jump to the address in rs.
    pub jump_reg: Bit,
    /// OR of the four flow flags.
    pub control_flow: Bit,
    /// Memory read enable.
    pub mem_read: Bit,
    /// Memory write enable.
    pub mem_write: Bit,
    /// Write-back source (ALU / memory / pc + 4).
    pub mem_to_reg: Bits,
    /// Second ALU operand is the immediate.
    pub alu_src: Bit,
    /// Shift by the shamt field (otherwise by the fixed `LUI` amount).
    pub use_shamt: Bit,
    /// Shift right instead of left.
    pub shift_right: Bit,
    /// Result comes from the shifter instead of the ALU.
    pub use_shift: Bit,
    /// ALU class fed to ALU control.
    pub alu_op: Bits,
    /// Instruction is a syscall.
    pub syscall: Bit,
    /// Register write enable.
    pub reg_write: Bit,
    /// Sign-extend the immediate (zero-extend when low).
    pub sign_extend: Bit,
    /// Encoding is outside the supported subset; faults if it retires.
    pub unsupported: Bit,
}

impl ControlSignals {
    /// Copy with every side-effecting line forced low.
    ///
    /// Register write, memory write, memory read, all flow flags, the
    /// syscall flag and the unsupported flag are cleared; an instruction
    /// carrying these signals changes no architectural state.
    pub fn neutralized(&self) -> Self {
        Self {
            branch_eq: Bit::Zero,
            branch_ne: Bit::Zero,
            jump: Bit::Zero,
            jump_reg: Bit::Zero,
            control_flow: Bit::Zero,
            mem_read: Bit::Zero,
            mem_write: Bit::Zero,
            syscall: Bit::Zero,
            reg_write: Bit::Zero,
            unsupported: Bit::Zero,
            ..self.clone()
        }
    }
}

impl Default for ControlSignals {
    fn default() -> Self {
        Self {
            reg_dst: Bits::zeros(REG_DST_BITS),
            branch_eq: Bit::Zero,
            branch_ne: Bit::Zero,
            jump: Bit::Zero,
            jump_reg: Bit::Zero,
            control_flow: Bit::Zero,
            mem_read: Bit::Zero,
            mem_write: Bit::Zero,
            mem_to_reg: Bits::zeros(MEM_TO_REG_BITS),
            alu_src: Bit::Zero,
            use_shamt: Bit::Zero,
            shift_right: Bit::Zero,
            use_shift: Bit::Zero,
            alu_op: Bits::zeros(ALU_OP_BITS),
            syscall: Bit::Zero,
            reg_write: Bit::Zero,
            sign_extend: Bit::Zero,
            unsupported: Bit::Zero,
        }
    }
}
