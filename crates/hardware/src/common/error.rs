//! Error definitions.
//!
//! This module defines the two error layers of the simulator:
//! 1. **Logic Errors:** Contract violations at the gate level (empty or mismatched bit-strings,
//!    out-of-range selectors, forbidden flip-flop inputs).
//! 2. **Simulator Errors:** Failures of the machine as a whole (unimplemented encodings,
//!    bad addresses, configuration and program-file problems).
//!
//! Architectural traps (overflow, exit, unmet input) are machine state, not errors;
//! see [`crate::core::cpu::trap::TrapCause`].

use thiserror::Error;

/// Contract violation raised by the gate substrate or a sequential primitive.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LogicError {
    /// An operand carried no bits.
    #[error("empty bit-string")]
    Empty,

    /// Two operands of a fixed-width component disagree on width.
    #[error("width mismatch: expected {expected} bits, found {found}")]
    WidthMismatch {
        /// Width the component requires.
        expected: usize,
        /// Width that was supplied.
        found: usize,
    },

    /// An N-ary gate was called with fewer than two operands.
    #[error("gate needs at least 2 operands, got {found}")]
    TooFewOperands {
        /// Number of operands supplied.
        found: usize,
    },

    /// A selector addressed an input that does not exist.
    #[error("selector value {selector} out of range for {inputs} inputs")]
    SelectorOutOfRange {
        /// Decoded selector value.
        selector: usize,
        /// Number of inputs available.
        inputs: usize,
    },

    /// A forbidden input combination (set and clear together, S=R=1).
    #[error("illegal input combination: {0}")]
    IllegalInput(&'static str),

    /// A bit index past the end of a bit-string.
    #[error("bit index {index} out of range for width {width}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Width of the bit-string.
        width: usize,
    },

    /// A barrel shifter was given a width that is not a power of two.
    #[error("width {0} is not a power of two")]
    NotPowerOfTwo(usize),

    /// Text that is not a bit-string.
    #[error("cannot parse bit-string: {0}")]
    Parse(String),
}

/// Error raised by the simulator outside the gate substrate.
#[derive(Debug, Error)]
pub enum SimError {
    /// A gate-level contract was violated.
    #[error(transparent)]
    Logic(#[from] LogicError),

    /// The decoded instruction is outside the supported subset.
    #[error("unimplemented instruction {word:#010x}: {reason}")]
    Unimplemented {
        /// Raw instruction word.
        word: u32,
        /// What was not implemented.
        reason: &'static str,
    },

    /// A memory access fell outside the backing store.
    #[error("address {addr:#010x} outside memory of {size} bytes")]
    AddressOutOfRange {
        /// Byte address of the access.
        addr: u32,
        /// Size of the memory in bytes.
        size: usize,
    },

    /// More input bytes than the input queue can hold.
    #[error("input of {len} bytes does not fit a queue of {capacity} bytes")]
    InputTooLong {
        /// Length of the supplied input.
        len: usize,
        /// Usable queue capacity.
        capacity: usize,
    },

    /// The configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A program file line could not be parsed.
    #[error("program line {line}: {reason}")]
    Program {
        /// One-based line number.
        line: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias for gate-level operations.
pub type LogicResult<T> = Result<T, LogicError>;

/// Result alias for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
