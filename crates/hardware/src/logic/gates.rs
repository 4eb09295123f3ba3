//! N-ary gates over bit-strings.
//!
//! Multi-operand gates fold a single-bit primitive column by column. Operands
//! of unequal width are zero-extended to the widest one, so `and(&[a, b])`
//! behaves like wiring the shorter bus into the low lines of the wider one.

use super::bit::Bit;
use super::bits::Bits;
use crate::common::error::{LogicError, LogicResult};

fn fold(operands: &[&Bits], gate: fn(Bit, Bit) -> Bit) -> LogicResult<Bits> {
    if operands.len() < 2 {
        return Err(LogicError::TooFewOperands {
            found: operands.len(),
        });
    }
    if operands.iter().any(|op| op.is_empty()) {
        return Err(LogicError::Empty);
    }
    let width = operands.iter().map(|op| op.width()).max().unwrap_or(0);
    let mut acc = operands[0].zero_extend(width)?;
    for op in &operands[1..] {
        let op = op.zero_extend(width)?;
        acc = acc.iter().zip(op.iter()).map(|(x, y)| gate(x, y)).collect();
    }
    Ok(acc)
}

/// Bitwise NOT.
///
/// # Errors
///
/// [`LogicError::Empty`] for an empty operand.
pub fn not(x: &Bits) -> LogicResult<Bits> {
    if x.is_empty() {
        return Err(LogicError::Empty);
    }
    Ok(!x)
}

/// Bitwise AND of two or more operands.
///
/// # Errors
///
/// [`LogicError::TooFewOperands`] or [`LogicError::Empty`].
pub fn and(operands: &[&Bits]) -> LogicResult<Bits> {
    fold(operands, |x, y| x & y)
}

/// Bitwise OR of two or more operands.
///
/// # Errors
///
/// [`LogicError::TooFewOperands`] or [`LogicError::Empty`].
pub fn or(operands: &[&Bits]) -> LogicResult<Bits> {
    fold(operands, |x, y| x | y)
}

/// Bitwise XOR (odd parity per column) of two or more operands.
///
/// # Errors
///
/// [`LogicError::TooFewOperands`] or [`LogicError::Empty`].
pub fn xor(operands: &[&Bits]) -> LogicResult<Bits> {
    fold(operands, |x, y| x ^ y)
}

/// Negated AND.
///
/// # Errors
///
/// As [`and`].
pub fn nand(operands: &[&Bits]) -> LogicResult<Bits> {
    and(operands).map(|r| !r)
}

/// Negated OR.
///
/// # Errors
///
/// As [`or`].
pub fn nor(operands: &[&Bits]) -> LogicResult<Bits> {
    or(operands).map(|r| !r)
}

/// Negated XOR (even parity per column).
///
/// # Errors
///
/// As [`xor`].
pub fn xnor(operands: &[&Bits]) -> LogicResult<Bits> {
    xor(operands).map(|r| !r)
}

fn reduce(x: &Bits, gate: fn(Bit, Bit) -> Bit) -> LogicResult<Bit> {
    let mut bits = x.iter();
    let first = bits.next().ok_or(LogicError::Empty)?;
    Ok(bits.fold(first, gate))
}

/// AND of every bit of `x`.
///
/// # Errors
///
/// [`LogicError::Empty`].
pub fn reduce_and(x: &Bits) -> LogicResult<Bit> {
    reduce(x, |a, b| a & b)
}

/// OR of every bit of `x`.
///
/// # Errors
///
/// [`LogicError::Empty`].
pub fn reduce_or(x: &Bits) -> LogicResult<Bit> {
    reduce(x, |a, b| a | b)
}

/// NOR of every bit of `x`; high only when `x` is all zeros.
///
/// # Errors
///
/// [`LogicError::Empty`].
pub fn reduce_nor(x: &Bits) -> LogicResult<Bit> {
    reduce_or(x).map(|b| !b)
}

/// XOR of every bit of `x` (odd parity).
///
/// # Errors
///
/// [`LogicError::Empty`].
pub fn reduce_xor(x: &Bits) -> LogicResult<Bit> {
    reduce(x, |a, b| a ^ b)
}

/// OR of a list of single-bit lines.
pub fn any(lines: &[Bit]) -> Bit {
    lines.iter().fold(Bit::Zero, |acc, &b| acc | b)
}

/// AND of a list of single-bit lines.
pub fn all(lines: &[Bit]) -> Bit {
    lines.iter().fold(Bit::One, |acc, &b| acc & b)
}

/// Replicates `line` across a bus of `width` bits and ANDs it with `x`.
///
/// This is the enable gate used by every multiplexer.
pub fn gate_with(x: &Bits, line: Bit) -> Bits {
    x.iter().map(|b| b & line).collect()
}
