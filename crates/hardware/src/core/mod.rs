//! Core processor implementation.
//!
//! This module contains the pipelined CPU: the combinational units (ALU,
//! ALU control, main control), the pipeline latches and stages, and the
//! CPU orchestrator that owns all state and drives the clock.

/// CPU state, clocking and the trap/console subsystem.
pub mod cpu;

/// Instruction pipeline (latches, signals, forwarding, stages).
pub mod pipeline;

/// Combinational units (ALU, ALU control, main control).
pub mod units;

pub use self::cpu::Cpu;
