//! MIPS instruction set tables.
//!
//! This module describes the supported MIPS subset. It provides:
//! 1. **Opcodes and Functs:** Primary opcodes and R-type function codes.
//! 2. **ABI:** Register indices and names used by syscalls and the calling convention.
//! 3. **Instruction Fields:** Field extraction for native words and for bit-strings.
//! 4. **Disassembly:** Mnemonic rendering for traces and dumps.

/// ABI register indices and names.
pub mod abi;

/// Mnemonic rendering of instruction words.
pub mod disasm;

/// R-type function codes.
pub mod funct;

/// Instruction field extraction.
pub mod instruction;

/// Primary opcodes.
pub mod opcodes;

/// Syscall service codes (low 4 bits of `$v0`).
pub mod syscalls;
