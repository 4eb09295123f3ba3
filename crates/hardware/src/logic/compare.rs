//! Comparators.
//!
//! Ordering is decided by a serial scan from the most significant bit. Two
//! latched lines, `greater` and `less`, start low; the first column where the
//! operands differ raises one of them and the other can no longer rise. In
//! signed mode the sign column is read with its sense swapped, since a set
//! sign bit makes the operand smaller.

use super::bit::Bit;
use super::bits::Bits;
use super::gates::{reduce_and, xnor};
use crate::common::error::LogicResult;

/// How a comparator interprets its operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signedness {
    /// Plain binary magnitude.
    Unsigned,
    /// Two's complement.
    Signed,
}

fn scan(a: &Bits, b: &Bits, signedness: Signedness) -> LogicResult<(Bit, Bit)> {
    Bits::same_width(a, b)?;
    let mut greater = Bit::Zero;
    let mut less = Bit::Zero;
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let (x, y) = if i == 0 && signedness == Signedness::Signed {
            (y, x)
        } else {
            (x, y)
        };
        let undecided = !(greater | less);
        greater = greater | (undecided & x & !y);
        less = less | (undecided & !x & y);
    }
    Ok((greater, less))
}

/// High when `a == b`: AND-reduction of the column-wise XNOR.
///
/// # Errors
///
/// [`LogicError::Empty`](crate::LogicError::Empty) or
/// [`LogicError::WidthMismatch`](crate::LogicError::WidthMismatch).
pub fn equal(a: &Bits, b: &Bits) -> LogicResult<Bit> {
    Bits::same_width(a, b)?;
    reduce_and(&xnor(&[a, b])?)
}

/// High when `a < b`.
///
/// # Errors
///
/// As [`equal`].
pub fn less_than(a: &Bits, b: &Bits, signedness: Signedness) -> LogicResult<Bit> {
    scan(a, b, signedness).map(|(_, less)| less)
}

/// High when `a > b`.
///
/// # Errors
///
/// As [`equal`].
pub fn greater_than(a: &Bits, b: &Bits, signedness: Signedness) -> LogicResult<Bit> {
    scan(a, b, signedness).map(|(greater, _)| greater)
}

/// High when `a <= b`.
///
/// # Errors
///
/// As [`equal`].
pub fn less_or_equal(a: &Bits, b: &Bits, signedness: Signedness) -> LogicResult<Bit> {
    scan(a, b, signedness).map(|(greater, _)| !greater)
}

/// High when `a >= b`.
///
/// # Errors
///
/// As [`equal`].
pub fn greater_or_equal(a: &Bits, b: &Bits, signedness: Signedness) -> LogicResult<Bit> {
    scan(a, b, signedness).map(|(_, less)| !less)
}
