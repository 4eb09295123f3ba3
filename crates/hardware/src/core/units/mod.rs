//! Combinational functional units.
//!
//! 1. **ALU:** 32 bit-slices with a distinguished sign slice, plus ALU control.
//! 2. **Control:** opcode/funct decode into [`ControlSignals`](crate::core::pipeline::signals::ControlSignals).

/// Arithmetic logic unit and ALU control.
pub mod alu;

/// Main control unit.
pub mod control;
