//! Syscall service codes.
//!
//! The service is selected by the low 4 bits of `$v0` at the time the
//! `SYSCALL` instruction is decoded. Codes follow the SPIM convention.

/// Print `$a0` as a signed decimal integer.
pub const PRINT_INT: u32 = 1;

/// Print the NUL-terminated string at address `$a0`.
pub const PRINT_STRING: u32 = 4;

/// Read a decimal integer from the input queue into `$v0`.
pub const READ_INT: u32 = 5;

/// Copy the input queue into static memory; its address lands in `$v0`.
pub const READ_STRING: u32 = 8;

/// Halt the machine.
pub const EXIT: u32 = 10;
