//! Multiplexers and demultiplexers.
//!
//! 1. **Demultiplexer:** decodes a selector into one-hot lines.
//! 2. **Multiplexer:** ANDs each input with its decoded line and ORs the results.
//! 3. **Priority Multiplexer:** a cascade of two-input muxes where later selects win.

use super::bit::Bit;
use super::bits::Bits;
use super::gates::{any, gate_with, or};
use crate::common::error::{LogicError, LogicResult};

/// Widest selector accepted by [`demux`].
const MAX_SELECTOR_BITS: usize = 16;

/// One-hot decode of `selector`, gated by `enable`.
///
/// The result has `2^w` lines for a `w`-bit selector; line `k` (counted from
/// the left) is high for selector value `k`. Every line is low when `enable`
/// is low.
///
/// # Errors
///
/// [`LogicError::Empty`] for an empty selector and
/// [`LogicError::IllegalInput`] past 16 selector bits.
pub fn demux(enable: Bit, selector: &Bits) -> LogicResult<Bits> {
    let width = selector.width();
    if width == 0 {
        return Err(LogicError::Empty);
    }
    if width > MAX_SELECTOR_BITS {
        return Err(LogicError::IllegalInput("selector wider than 16 bits"));
    }
    let lines = (0..1usize << width)
        .map(|k| {
            // Minterm k: each selector bit taken true or complemented.
            selector.iter().enumerate().fold(enable, |acc, (j, s)| {
                let wanted = (k >> (width - 1 - j)) & 1 == 1;
                acc & if wanted { s } else { !s }
            })
        })
        .collect();
    Ok(lines)
}

/// Selects one of `inputs` by the binary value of `selector`.
///
/// # Errors
///
/// * [`LogicError::Empty`] when there are no inputs.
/// * [`LogicError::WidthMismatch`] when inputs differ in width.
/// * [`LogicError::IllegalInput`] when the selector cannot address every input.
/// * [`LogicError::SelectorOutOfRange`] when the selector names a missing input.
pub fn mux(selector: &Bits, inputs: &[&Bits]) -> LogicResult<Bits> {
    let first = inputs.first().ok_or(LogicError::Empty)?;
    let width = first.width();
    for input in inputs {
        input.expect_width(width)?;
    }
    let lines = demux(Bit::One, selector)?;
    if inputs.len() > lines.width() {
        return Err(LogicError::IllegalInput("selector too narrow for input count"));
    }
    let unused: Vec<Bit> = lines.iter().skip(inputs.len()).collect();
    if any(&unused).is_one() {
        return Err(LogicError::SelectorOutOfRange {
            selector: selector.to_usize().unwrap_or(usize::MAX),
            inputs: inputs.len(),
        });
    }
    let mut result = Bits::zeros(width);
    for (input, line) in inputs.iter().zip(lines.iter()) {
        result = or(&[&result, &gate_with(input, line)])?;
    }
    Ok(result)
}

/// Two-input multiplexer: `low` when `select` is low, `high` otherwise.
///
/// # Errors
///
/// As [`mux`].
pub fn mux2(select: Bit, low: &Bits, high: &Bits) -> LogicResult<Bits> {
    mux(&Bits::from_bit(select), &[low, high])
}

/// Single-bit two-input multiplexer.
pub fn mux_bit(select: Bit, low: Bit, high: Bit) -> Bit {
    (!select & low) | (select & high)
}

/// Cascaded multiplexer with one select line per input after the first.
///
/// `inputs[0]` is the default; `selects[i]` routes `inputs[i + 1]` through,
/// and a later select overrides every earlier one.
///
/// # Errors
///
/// [`LogicError::WidthMismatch`] unless there is exactly one select fewer
/// than inputs, plus the errors of [`mux`].
pub fn priority_mux(selects: &[Bit], inputs: &[&Bits]) -> LogicResult<Bits> {
    let (first, rest) = inputs.split_first().ok_or(LogicError::Empty)?;
    if selects.len() != rest.len() {
        return Err(LogicError::WidthMismatch {
            expected: rest.len(),
            found: selects.len(),
        });
    }
    let mut acc = (*first).clone();
    for (&select, input) in selects.iter().zip(rest) {
        acc = mux2(select, &acc, input)?;
    }
    Ok(acc)
}
