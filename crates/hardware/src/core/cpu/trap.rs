//! Trap and syscall subsystem.
//!
//! This module holds the two stall/halt conditions and the string-transfer
//! registers. It provides:
//! 1. **Syscall Classification:** the 4-bit service code decoded into
//!    `output`, `input` and `string` bits; exit is output AND input.
//! 2. **Terminal Trap:** overflow, exit or an unmet input request. Once set it
//!    never clears and the clock is withheld from every stage.
//! 3. **Pipeline Trap:** set while a string transfer runs. It withholds the
//!    clock from fetch, decode and execute and clears when the transfer sees
//!    its terminator.
//! 4. **Transfer Registers:** base address, mode and word counter of the
//!    string transfer in progress.

use std::fmt;

use crate::common::constants::{SYSCALL_OP_BITS, WORD_BITS};
use crate::common::error::LogicResult;
use crate::logic::arith::increment;
use crate::logic::gates::any;
use crate::logic::mux::mux2;
use crate::logic::{Bit, Bits};
use crate::sequential::{Clocked, DFlipFlop, DFlipFlopSetClear, EdgeDetector};

/// Why the terminal trap fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrapCause {
    /// A signed arithmetic instruction overflowed.
    Overflow,
    /// The exit syscall ran.
    Exit,
    /// An input syscall found no usable input.
    UnmetInput,
}

impl fmt::Display for TrapCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => write!(f, "arithmetic overflow"),
            Self::Exit => write!(f, "exit"),
            Self::UnmetInput => write!(f, "input requested but none available"),
        }
    }
}

/// Decoded syscall class bits.
///
/// Three lines are decoded straight from the service code; each service is a
/// combination of them and exit is the only one raising both `output` and
/// `input`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyscallClass {
    output: Bit,
    input: Bit,
    string: Bit,
}

impl SyscallClass {
    /// Decodes a 4-bit service code into the class bits.
    ///
    /// Codes outside the five services raise no line.
    ///
    /// # Errors
    ///
    /// [`LogicError::WidthMismatch`](crate::LogicError::WidthMismatch) unless
    /// `op` is 4 bits wide.
    pub fn decode(op: &Bits) -> LogicResult<Self> {
        op.expect_width(SYSCALL_OP_BITS)?;
        let (b3, b2, b1, b0) = (op.bit(0)?, op.bit(1)?, op.bit(2)?, op.bit(3)?);
        // 1 = 0001, 4 = 0100, 5 = 0101, 8 = 1000, 10 = 1010
        let c1 = !b3 & !b2 & !b1 & b0;
        let c4 = !b3 & b2 & !b1 & !b0;
        let c5 = !b3 & b2 & !b1 & b0;
        let c8 = b3 & !b2 & !b1 & !b0;
        let c10 = b3 & !b2 & b1 & !b0;
        Ok(Self {
            output: any(&[c1, c4, c10]),
            input: any(&[c5, c8, c10]),
            string: c4 | c8,
        })
    }

    /// Same lines, all forced low unless `enable` is high.
    pub fn gated(self, enable: Bit) -> Self {
        Self {
            output: self.output & enable,
            input: self.input & enable,
            string: self.string & enable,
        }
    }

    /// Service writes to the console.
    pub const fn output(self) -> Bit {
        self.output
    }

    /// Service reads from the console.
    pub const fn input(self) -> Bit {
        self.input
    }

    /// Service moves a string rather than an integer.
    pub const fn string(self) -> Bit {
        self.string
    }

    /// Exit: output and input at once.
    pub fn is_exit(self) -> Bit {
        self.output & self.input
    }

    /// Service 1.
    pub fn print_int(self) -> Bit {
        self.output & !self.input & !self.string
    }

    /// Service 4.
    pub fn print_string(self) -> Bit {
        self.output & self.string
    }

    /// Service 5.
    pub fn read_int(self) -> Bit {
        self.input & !self.output & !self.string
    }

    /// Service 8.
    pub fn read_string(self) -> Bit {
        self.input & self.string
    }

    /// Service requests input that must already be queued.
    pub fn needs_input(self) -> Bit {
        self.input & !self.output
    }
}

/// Trap flip-flops and string-transfer registers.
#[derive(Clone, Debug)]
pub struct TrapUnit {
    trap: DFlipFlopSetClear,
    pipeline_trap: DFlipFlopSetClear,
    cause: Option<TrapCause>,
    base: DFlipFlop,
    mode: DFlipFlop,
    length: DFlipFlopSetClear,
    edge: EdgeDetector,
}

impl Default for TrapUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl TrapUnit {
    /// Both traps clear and the transfer registers zeroed.
    pub fn new() -> Self {
        Self {
            trap: DFlipFlopSetClear::new(1),
            pipeline_trap: DFlipFlopSetClear::new(1),
            cause: None,
            base: DFlipFlop::new(WORD_BITS),
            mode: DFlipFlop::new(SYSCALL_OP_BITS),
            length: DFlipFlopSetClear::new(WORD_BITS),
            edge: EdgeDetector::new(),
        }
    }

    /// Terminal trap line.
    pub fn trap(&self) -> Bit {
        self.trap.q_bit()
    }

    /// Pipeline trap line.
    pub fn pipeline_trap(&self) -> Bit {
        self.pipeline_trap.q_bit()
    }

    /// Cause of the terminal trap, once raised.
    pub const fn cause(&self) -> Option<TrapCause> {
        self.cause
    }

    /// Raises the terminal trap asynchronously. The first cause sticks.
    ///
    /// # Errors
    ///
    /// Never in practice; propagated from the flip-flop.
    pub fn raise(&mut self, cause: TrapCause) -> LogicResult<()> {
        self.trap.assert_async(Bit::One, Bit::Zero)?;
        self.cause.get_or_insert(cause);
        Ok(())
    }

    /// Starts a string transfer: sets the pipeline trap and clears the counter.
    ///
    /// # Errors
    ///
    /// Never in practice; propagated from the flip-flops.
    pub fn begin_transfer(&mut self) -> LogicResult<()> {
        self.length.assert_async(Bit::Zero, Bit::One)?;
        self.pipeline_trap.assert_async(Bit::One, Bit::Zero)
    }

    /// Ends a string transfer: clears the pipeline trap.
    ///
    /// # Errors
    ///
    /// Never in practice; propagated from the flip-flop.
    pub fn end_transfer(&mut self) -> LogicResult<()> {
        self.pipeline_trap.assert_async(Bit::Zero, Bit::One)
    }

    /// Drives the base and mode registers with the writeback clock.
    ///
    /// They load `base`/`mode` on a rising edge when `load` is high and hold
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Width errors for wrongly sized buses.
    pub fn drive_transfer_registers(
        &mut self,
        clk: Bit,
        load: Bit,
        base: &Bits,
        mode: &Bits,
    ) -> LogicResult<()> {
        let next_base = mux2(load, self.base.q(), base)?;
        let next_mode = mux2(load, self.mode.q(), mode)?;
        self.base.write(clk, &next_base)?;
        self.mode.write(clk, &next_mode)
    }

    /// Drives the word counter with the memory-stage clock; it counts when
    /// `advance` is high.
    ///
    /// # Errors
    ///
    /// Width errors for wrongly sized buses.
    pub fn drive_length(&mut self, clk: Bit, advance: Bit) -> LogicResult<()> {
        let next = mux2(advance, self.length.q(), &increment(self.length.q())?)?;
        self.length.write(clk, &next, Bit::Zero, Bit::Zero)
    }

    /// Transfer base address.
    pub const fn base(&self) -> &Bits {
        self.base.q()
    }

    /// Transfer mode (the syscall service code that started it).
    pub const fn mode(&self) -> &Bits {
        self.mode.q()
    }

    /// Words transferred so far.
    pub const fn length(&self) -> &Bits {
        self.length.q()
    }
}

impl Clocked for TrapUnit {
    fn edge_detector(&mut self) -> &mut EdgeDetector {
        &mut self.edge
    }
}

/// High when any byte lane of a word is NUL.
///
/// # Errors
///
/// [`LogicError::WidthMismatch`](crate::LogicError::WidthMismatch) unless
/// `word` is 32 bits wide.
pub fn has_nul(word: &Bits) -> LogicResult<Bit> {
    use crate::common::constants::{BYTE_BITS, WORD_BYTES};
    use crate::logic::gates::reduce_nor;

    word.expect_width(WORD_BITS)?;
    let mut lanes = Vec::with_capacity(WORD_BYTES);
    for lane in 0..WORD_BYTES {
        lanes.push(reduce_nor(&word.slice(lane * BYTE_BITS..(lane + 1) * BYTE_BITS)?)?);
    }
    Ok(any(&lanes))
}
