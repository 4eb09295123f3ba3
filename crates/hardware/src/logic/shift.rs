//! Logarithmic barrel shifter.
//!
//! A `w`-bit shifter has `log2(w)` stages. Stage `i` either passes its input
//! through or shifts it by `2^i` positions, selected by bit `i` (from the
//! least significant end) of the shift amount. Each stage is one column-wise
//! two-input multiplexer.

use super::bit::Bit;
use super::bits::Bits;
use super::mux::mux2;
use crate::common::error::{LogicError, LogicResult};

/// Direction of a logical shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Toward the most significant bit, zero fill on the right.
    Left,
    /// Toward the least significant bit, zero fill on the left.
    Right,
}

fn shift_wires(x: &Bits, distance: usize, direction: ShiftDirection) -> Bits {
    let width = x.width();
    let bits = x.as_slice();
    let fill = std::iter::repeat_n(Bit::Zero, distance);
    match direction {
        ShiftDirection::Left => bits[distance..].iter().copied().chain(fill).collect(),
        ShiftDirection::Right => fill.chain(bits[..width - distance].iter().copied()).collect(),
    }
}

/// Shifts `value` logically by the binary value of `amount`.
///
/// The amount is resized to `log2(width)` bits, so only the low bits count
/// (the shift distance is taken modulo the width).
///
/// # Errors
///
/// [`LogicError::Empty`] for an empty value or amount and
/// [`LogicError::NotPowerOfTwo`] when the width is not a power of two.
pub fn barrel_shift(value: &Bits, amount: &Bits, direction: ShiftDirection) -> LogicResult<Bits> {
    let width = value.width();
    if width == 0 || amount.is_empty() {
        return Err(LogicError::Empty);
    }
    if !width.is_power_of_two() {
        return Err(LogicError::NotPowerOfTwo(width));
    }
    let stages = width.trailing_zeros() as usize;
    if stages == 0 {
        return Ok(value.clone());
    }
    let amount = amount.resize(stages);
    let mut current = value.clone();
    for stage in 0..stages {
        let select = amount.bit_from_lsb(stage)?;
        let shifted = shift_wires(&current, 1 << stage, direction);
        current = mux2(select, &current, &shifted)?;
    }
    Ok(current)
}
