//! Gate-level MIPS pipeline simulator library.
//!
//! This crate models a classic 5-stage pipelined MIPS processor built bottom-up
//! from single-bit gates. It provides the following:
//! 1. **Logic:** Bit-strings, N-ary gates, adders, comparators, multiplexers and shifters.
//! 2. **Sequential:** Edge-triggered flip-flops, register files and byte-addressable memory.
//! 3. **Core:** ALU, control decode, pipeline latches, the five stages and the trap unit.
//! 4. **ISA:** Opcode and funct tables, ABI register names, field split and disassembly.
//! 5. **Simulation:** Program loading, configuration and statistics collection.

/// Common types and constants (widths, errors).
pub mod common;
/// Simulator configuration (defaults, init policies, JSON loading).
pub mod config;
/// CPU core (units, pipeline, trap unit, console).
pub mod core;
/// Instruction set tables (opcodes, functs, ABI, field split, disassembly).
pub mod isa;
/// Combinational logic built from single-bit gates.
pub mod logic;
/// Clocked state elements (flip-flops, register files, memory).
pub mod sequential;
/// Program loader and batch runner.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; owns the datapath, latches, memory and trap state.
pub use crate::core::Cpu;
/// Error types surfaced by the simulator.
pub use crate::common::error::{LogicError, SimError};
/// Bit-level value types.
pub use crate::logic::{Bit, Bits};
