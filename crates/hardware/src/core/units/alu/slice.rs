//! One-bit ALU slices.
//!
//! A slice optionally inverts each operand, computes AND, OR and a full-add
//! sum, and routes one of {AND, OR, sum, less} to its result with a 2-bit
//! operation select. The sign slice additionally exposes `set` (its raw sum
//! bit, used for set-less-than) and the signed overflow of the whole adder.

use crate::logic::Bit;
use crate::logic::arith::full_adder;
use crate::logic::mux::mux_bit;

/// Control lines shared by every slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceControl {
    /// Invert operand A.
    pub a_invert: Bit,
    /// Invert operand B (and, at the ALU level, carry in a one).
    pub b_negate: Bit,
    /// High bit of the operation select.
    pub op1: Bit,
    /// Low bit of the operation select.
    pub op0: Bit,
}

/// Output of an ordinary slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceOutput {
    /// Selected result bit.
    pub result: Bit,
    /// Carry into the next more significant slice.
    pub carry_out: Bit,
}

/// Output of the sign slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignSliceOutput {
    /// Selected result bit.
    pub result: Bit,
    /// Carry out of the adder.
    pub carry_out: Bit,
    /// Raw sum bit, routed to the LSB for set-less-than.
    pub set: Bit,
    /// Carry in XOR carry out.
    pub overflow: Bit,
}

fn select(control: SliceControl, and: Bit, or: Bit, sum: Bit, less: Bit) -> Bit {
    let low_pair = mux_bit(control.op0, and, or);
    let high_pair = mux_bit(control.op0, sum, less);
    mux_bit(control.op1, low_pair, high_pair)
}

/// Evaluates an ordinary slice.
pub fn alu_slice(a: Bit, b: Bit, carry_in: Bit, less: Bit, control: SliceControl) -> SliceOutput {
    let a = a ^ control.a_invert;
    let b = b ^ control.b_negate;
    let adder = full_adder(a, b, carry_in);
    SliceOutput {
        result: select(control, a & b, a | b, adder.sum, less),
        carry_out: adder.carry,
    }
}

/// Evaluates the sign slice (the last slice in ripple order).
pub fn sign_slice(a: Bit, b: Bit, carry_in: Bit, less: Bit, control: SliceControl) -> SignSliceOutput {
    let slice = alu_slice(a, b, carry_in, less, control);
    let a = a ^ control.a_invert;
    let b = b ^ control.b_negate;
    let set = full_adder(a, b, carry_in).sum;
    SignSliceOutput {
        result: slice.result,
        carry_out: slice.carry_out,
        set,
        overflow: carry_in ^ slice.carry_out,
    }
}
