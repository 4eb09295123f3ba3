//! Architectural Constants.
//!
//! This module defines the fixed widths of every bus in the datapath. It includes:
//! 1. **Word Geometry:** Word, byte and half-word widths.
//! 2. **Instruction Fields:** Widths of the opcode, register, shamt, funct, immediate and address fields.
//! 3. **Register File:** Register count and address width.
//! 4. **Pipeline:** Depth and fixed shift amounts.

/// Width of a machine word in bits.
pub const WORD_BITS: usize = 32;

/// Width of a machine word in bytes.
pub const WORD_BYTES: usize = 4;

/// Width of a byte in bits.
pub const BYTE_BITS: usize = 8;

/// Width of the opcode field.
pub const OPCODE_BITS: usize = 6;

/// Width of a register index field (rs, rt, rd).
pub const REG_ADDR_BITS: usize = 5;

/// Width of the shift amount field.
pub const SHAMT_BITS: usize = 5;

/// Width of the funct field.
pub const FUNCT_BITS: usize = 6;

/// Width of the I-type immediate field.
pub const IMM_BITS: usize = 16;

/// Width of the J-type target field.
pub const TARGET_BITS: usize = 26;

/// Width of the syscall operation selector (low bits of `$v0`).
pub const SYSCALL_OP_BITS: usize = 4;

/// Number of architectural general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Number of stages in the pipeline.
pub const PIPELINE_DEPTH: usize = 5;

/// Fixed shift amount used by `LUI`.
pub const LUI_SHIFT: u32 = 16;

/// Number of upper PC bits kept by a J-type jump.
pub const JUMP_REGION_BITS: usize = 4;

/// Seed for the xorshift generator when the configuration does not give one.
pub const DEFAULT_SEED: u64 = 123_456_789;
