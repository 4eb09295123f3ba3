//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit ALU used in the Execute stage. It is a
//! ripple of one-bit slices:
//! - [`slice`]: the ordinary slice and the sign slice.
//! - [`control`]: ALU-control decode of the class, funct and opcode fields.
//!
//! The carry enters at the least significant slice (the last index) and
//! leaves through the sign slice. Carry-in equals `b_negate`, so subtraction
//! is `a + !b + 1`. Set-less-than takes the sign slice's raw sum bit and
//! forces it onto the least significant result bit.

/// ALU control decode.
pub mod control;

/// One-bit slices.
pub mod slice;

use self::control::{ALU_CODE_BITS, AluControl};
use self::slice::{SliceControl, alu_slice, sign_slice};
use crate::common::error::LogicResult;
use crate::logic::gates::reduce_nor;
use crate::logic::mux::mux_bit;
use crate::logic::{Bit, Bits};

/// Result and flags of one ALU evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AluOutput {
    /// Result word.
    pub result: Bits,
    /// High when the result is all zeros.
    pub zero: Bit,
    /// Signed overflow, already masked for unsigned operations.
    pub overflow: Bit,
}

/// Arithmetic Logic Unit.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Runs the raw slice chain for a 4-bit operation code.
    ///
    /// # Arguments
    ///
    /// * `code` - `[a_invert, b_negate, op1, op0]`.
    /// * `a`, `b` - Operands of equal width.
    ///
    /// # Returns
    ///
    /// The result with `zero` and the unmasked signed `overflow`.
    ///
    /// # Errors
    ///
    /// [`LogicError::WidthMismatch`](crate::LogicError::WidthMismatch) for a
    /// wrongly sized code or unequal operands.
    pub fn evaluate(code: &Bits, a: &Bits, b: &Bits) -> LogicResult<AluOutput> {
        code.expect_width(ALU_CODE_BITS)?;
        let width = Bits::same_width(a, b)?;
        let control = SliceControl {
            a_invert: code.bit(0)?,
            b_negate: code.bit(1)?,
            op1: code.bit(2)?,
            op0: code.bit(3)?,
        };
        let (a, b) = (a.as_slice(), b.as_slice());
        let mut result = vec![Bit::Zero; width];
        let mut carry = control.b_negate;
        for i in (1..width).rev() {
            let out = alu_slice(a[i], b[i], carry, Bit::Zero, control);
            result[i] = out.result;
            carry = out.carry_out;
        }
        let sign = sign_slice(a[0], b[0], carry, Bit::Zero, control);
        result[0] = sign.result;

        let lsb = width - 1;
        result[lsb] = mux_bit(control.op1 & control.op0, result[lsb], sign.set);

        let result = Bits::from_vec(result)?;
        Ok(AluOutput {
            zero: reduce_nor(&result)?,
            result,
            overflow: sign.overflow,
        })
    }

    /// Executes the operation chosen by ALU control.
    ///
    /// Overflow is reported only for signed operations.
    ///
    /// # Errors
    ///
    /// As [`Alu::evaluate`].
    pub fn execute(control: &AluControl, a: &Bits, b: &Bits) -> LogicResult<AluOutput> {
        let mut out = Self::evaluate(&control.code, a, b)?;
        out.overflow = out.overflow & !control.unsigned;
        Ok(out)
    }
}
