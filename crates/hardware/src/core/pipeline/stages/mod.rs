//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the five stages of the
//! instruction pipeline. Each takes the machine and the raw clock level and
//! derives its own gated clock. It includes:
//! 1. **Fetch:** Reads the instruction at the PC or at a redirect target.
//! 2. **Decode:** Decodes control lines, writes the commit, reads operands.
//! 3. **Execute:** Forwards operands, runs the ALU or shifter, computes targets.
//! 4. **Memory:** Resolves redirects, accesses data memory, moves string words.
//! 5. **Writeback:** Selects the result, services syscalls and raises traps.

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EX stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Memory stage entry point (MEM stage).
pub use memory::memory_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::writeback_stage;
