/// Fluent MIPS instruction encoder.
pub mod instruction;
