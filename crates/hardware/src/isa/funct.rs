//! MIPS R-type Function Codes.
//!
//! Defines the 6-bit funct field (bits 5-0) used when the opcode is
//! [`OP_RTYPE`](super::opcodes::OP_RTYPE).

/// Shift left logical by shamt.
pub const SLL: u32 = 0b000000;

/// Shift right logical by shamt.
pub const SRL: u32 = 0b000010;

/// Jump to the address in rs.
pub const JR: u32 = 0b001000;

/// System call; service code in `$v0`, argument in `$a0`.
pub const SYSCALL: u32 = 0b001100;

/// Add, trapping on overflow.
pub const ADD: u32 = 0b100000;

/// Add without overflow trap.
pub const ADDU: u32 = 0b100001;

/// Subtract, trapping on overflow.
pub const SUB: u32 = 0b100010;

/// Subtract without overflow trap.
pub const SUBU: u32 = 0b100011;

/// Bitwise AND.
pub const AND: u32 = 0b100100;

/// Bitwise OR.
pub const OR: u32 = 0b100101;

/// Bitwise NOR.
pub const NOR: u32 = 0b100111;

/// Set on signed less than.
pub const SLT: u32 = 0b101010;
