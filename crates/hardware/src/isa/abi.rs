//! MIPS ABI register constants.
//!
//! Register indices used by the syscall convention and the link
//! instruction, plus the conventional names of all 32 registers.

/// Register $0 (conventionally zero; not pinned in this model).
pub const REG_ZERO: usize = 0;
/// Register $2 (syscall service code and return value, v0).
pub const REG_V0: usize = 2;
/// Register $4 (first syscall argument, a0).
pub const REG_A0: usize = 4;
/// Register $29 (stack pointer, sp).
pub const REG_SP: usize = 29;
/// Register $31 (return address written by JAL, ra).
pub const REG_RA: usize = 31;

/// Conventional names for $0-$31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Conventional name of register `idx`, or `"??"` past $31.
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}
