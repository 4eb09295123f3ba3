/// ALU slices, ALU control and overflow masking.
pub mod alu;
