//! Combinational logic.
//!
//! Everything above the single-bit operators in [`bit`] is composed from them:
//! 1. **Values:** [`Bit`] and the MSB-first bit-string [`Bits`].
//! 2. **Gates:** N-ary AND/OR/NAND/NOR/XOR/XNOR, NOT and reductions.
//! 3. **Arithmetic:** Half and full adders, ripple-carry add/subtract, two's complement.
//! 4. **Comparison:** Equality and signed/unsigned ordering comparators.
//! 5. **Routing:** Multiplexers, priority multiplexers and demultiplexers.
//! 6. **Shifting:** Logarithmic barrel shifter.

/// Half adder, full adder and ripple-carry arithmetic.
pub mod arith;

/// Single-bit value and primitive gates.
pub mod bit;

/// Fixed-width bit-strings.
pub mod bits;

/// Magnitude and equality comparators.
pub mod compare;

/// N-ary gates and reductions over bit-strings.
pub mod gates;

/// Multiplexers and demultiplexers.
pub mod mux;

/// Barrel shifter.
pub mod shift;

pub use bit::Bit;
pub use bits::Bits;
