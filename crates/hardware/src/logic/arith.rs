//! Adders and arithmetic helpers.
//!
//! All arithmetic is a ripple of [`full_adder`] cells from the least
//! significant bit (the last index) toward the most significant bit.
//! Subtraction and negation reuse the adder with an inverted operand and a
//! carry-in of one.

use super::bit::Bit;
use super::bits::Bits;
use super::mux::mux2;
use crate::common::error::LogicResult;

/// Outputs of a one-bit full adder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FullAdderOutput {
    /// Sum bit.
    pub sum: Bit,
    /// Carry out.
    pub carry: Bit,
}

/// Outputs of a ripple-carry adder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdderOutput {
    /// Sum, same width as the operands.
    pub sum: Bits,
    /// Carry out of the most significant bit.
    pub carry: Bit,
    /// Signed overflow: carry into the MSB XOR carry out of it.
    pub overflow: Bit,
}

/// Half adder returning `(sum, carry)`.
pub fn half_adder(a: Bit, b: Bit) -> (Bit, Bit) {
    (a ^ b, a & b)
}

/// Full adder built from two half adders.
pub fn full_adder(a: Bit, b: Bit, carry_in: Bit) -> FullAdderOutput {
    let (partial, c1) = half_adder(a, b);
    let (sum, c2) = half_adder(partial, carry_in);
    FullAdderOutput {
        sum,
        carry: c1 | c2,
    }
}

/// Ripple-carry addition of two equally wide operands.
///
/// # Arguments
///
/// * `a`, `b` - Operands of the same width.
/// * `carry_in` - Carry into the least significant cell.
///
/// # Errors
///
/// [`LogicError::Empty`](crate::LogicError::Empty) or
/// [`LogicError::WidthMismatch`](crate::LogicError::WidthMismatch).
pub fn ripple_add(a: &Bits, b: &Bits, carry_in: Bit) -> LogicResult<AdderOutput> {
    let width = Bits::same_width(a, b)?;
    let (a, b) = (a.as_slice(), b.as_slice());
    let mut sum = vec![Bit::Zero; width];
    let mut carry = carry_in;
    let mut carry_into_msb = carry_in;
    for i in (0..width).rev() {
        if i == 0 {
            carry_into_msb = carry;
        }
        let cell = full_adder(a[i], b[i], carry);
        sum[i] = cell.sum;
        carry = cell.carry;
    }
    Ok(AdderOutput {
        sum: Bits::from_vec(sum)?,
        carry,
        overflow: carry_into_msb ^ carry,
    })
}

/// `a + b` modulo the width.
///
/// # Errors
///
/// As [`ripple_add`].
pub fn add(a: &Bits, b: &Bits) -> LogicResult<Bits> {
    ripple_add(a, b, Bit::Zero).map(|out| out.sum)
}

/// `a - b` with flags, computed as `a + !b + 1`.
///
/// # Errors
///
/// As [`ripple_add`].
pub fn subtract_full(a: &Bits, b: &Bits) -> LogicResult<AdderOutput> {
    ripple_add(a, &!b, Bit::One)
}

/// `a - b` modulo the width.
///
/// # Errors
///
/// As [`ripple_add`].
pub fn subtract(a: &Bits, b: &Bits) -> LogicResult<Bits> {
    subtract_full(a, b).map(|out| out.sum)
}

/// `x + 1` modulo the width.
///
/// # Errors
///
/// As [`ripple_add`].
pub fn increment(x: &Bits) -> LogicResult<Bits> {
    ripple_add(x, &Bits::zeros(x.width()), Bit::One).map(|out| out.sum)
}

/// Two's complement of `x` when `enable` is high, `x` unchanged otherwise.
///
/// The inversion is a multiplexer between `x` and `!x`; the `+1` is the
/// adder's carry-in tied to `enable`.
///
/// # Errors
///
/// As [`ripple_add`].
pub fn twos_complement(x: &Bits, enable: Bit) -> LogicResult<Bits> {
    let chosen = mux2(enable, x, &!x)?;
    ripple_add(&chosen, &Bits::zeros(x.width()), enable).map(|out| out.sum)
}

/// Arithmetic negation (`-x`).
///
/// # Errors
///
/// As [`ripple_add`].
pub fn negate(x: &Bits) -> LogicResult<Bits> {
    twos_complement(x, Bit::One)
}
