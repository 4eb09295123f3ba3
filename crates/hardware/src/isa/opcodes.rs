//! MIPS Primary Opcodes.
//!
//! Defines the 6-bit opcode field (bits 31-26) for the supported subset.

/// Register-register format; the operation is in the funct field.
pub const OP_RTYPE: u32 = 0b000000;

/// Jump (J).
pub const OP_J: u32 = 0b000010;

/// Jump and link (JAL).
pub const OP_JAL: u32 = 0b000011;

/// Branch if equal (BEQ).
pub const OP_BEQ: u32 = 0b000100;

/// Branch if not equal (BNE).
pub const OP_BNE: u32 = 0b000101;

/// Add immediate, trapping on overflow (ADDI).
pub const OP_ADDI: u32 = 0b001000;

/// Add immediate without overflow trap (ADDIU).
pub const OP_ADDIU: u32 = 0b001001;

/// Set on less than immediate (SLTI).
pub const OP_SLTI: u32 = 0b001010;

/// OR with zero-extended immediate (ORI).
pub const OP_ORI: u32 = 0b001101;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0b001111;

/// Coprocessor 1 (floating point). Decoded only to be rejected.
pub const OP_COP1: u32 = 0b010001;

/// Load word (LW).
pub const OP_LW: u32 = 0b100011;

/// Store word (SW).
pub const OP_SW: u32 = 0b101011;
