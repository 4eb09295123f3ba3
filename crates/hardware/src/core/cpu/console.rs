//! Console input queue and output buffer.
//!
//! Input is loaded into a byte register file before the machine runs. A
//! clocked cursor walks it four bytes at a time during a string read, and a
//! set/clear flag records whether unconsumed input is present. Reads past the
//! end of the queue yield NUL.
//!
//! Output accumulates as text in the order writeback produces it.

use crate::common::constants::{BYTE_BITS, WORD_BITS, WORD_BYTES};
use crate::common::error::{LogicError, LogicResult, SimError, SimResult};
use crate::logic::arith::add;
use crate::logic::mux::mux2;
use crate::logic::{Bit, Bits};
use crate::sequential::{DFlipFlopSetClear, RegisterFile};

/// Console state owned by the machine.
#[derive(Clone, Debug)]
pub struct Console {
    queue: RegisterFile,
    cursor: DFlipFlopSetClear,
    received: DFlipFlopSetClear,
    output: String,
}

impl Console {
    /// An empty console whose input queue holds `capacity` bytes.
    ///
    /// # Errors
    ///
    /// [`LogicError::NotPowerOfTwo`] unless `capacity` is a power of two.
    pub fn new(capacity: usize) -> LogicResult<Self> {
        if !capacity.is_power_of_two() {
            return Err(LogicError::NotPowerOfTwo(capacity));
        }
        let addr_bits = capacity.trailing_zeros() as usize;
        Ok(Self {
            queue: RegisterFile::new(addr_bits, BYTE_BITS),
            cursor: DFlipFlopSetClear::new(addr_bits + 1),
            received: DFlipFlopSetClear::new(1),
            output: String::new(),
        })
    }

    /// Bytes the queue holds, terminator included.
    pub fn capacity(&self) -> usize {
        self.queue.cells().len()
    }

    /// Loads `bytes` into the queue, rewinds the cursor and flags input.
    ///
    /// # Errors
    ///
    /// [`SimError::InputTooLong`] when no room is left for the terminator.
    pub fn provide(&mut self, bytes: &[u8]) -> SimResult<()> {
        let capacity = self.capacity();
        if bytes.len() >= capacity {
            return Err(SimError::InputTooLong {
                len: bytes.len(),
                capacity,
            });
        }
        for index in 0..capacity {
            let byte = bytes.get(index).copied().unwrap_or(0);
            self.queue
                .set_cell(index, Bits::from_u32(u32::from(byte), BYTE_BITS))?;
        }
        self.cursor.assert_async(Bit::Zero, Bit::One)?;
        self.received.assert_async(Bit::One, Bit::Zero)?;
        Ok(())
    }

    /// Unconsumed input is present.
    pub fn has_input(&self) -> Bit {
        self.received.q_bit()
    }

    /// Marks the input as consumed.
    ///
    /// # Errors
    ///
    /// Never in practice; propagated from the flip-flop.
    pub fn consume(&mut self) -> LogicResult<()> {
        self.received.assert_async(Bit::Zero, Bit::One)
    }

    fn byte_at(&self, offset: u32) -> LogicResult<Bits> {
        let width = self.cursor.q().width();
        let index = add(self.cursor.q(), &Bits::from_u32(offset, width))?;
        let past_end = index.msb();
        let cell = self.queue.read(&index.truncate(width - 1)?)?;
        mux2(past_end, &cell, &Bits::zeros(BYTE_BITS))
    }

    /// The next four queued bytes as a word, first byte in the low lane.
    ///
    /// # Errors
    ///
    /// Width errors from the queue decoder.
    pub fn next_word(&self) -> LogicResult<Bits> {
        let mut word = Bits::zeros(0);
        for offset in (0..WORD_BYTES as u32).rev() {
            word = word.concat(&self.byte_at(offset)?);
        }
        Ok(word)
    }

    /// Drives the cursor; it moves one word forward on a rising edge when
    /// `enable` is high.
    ///
    /// # Errors
    ///
    /// Width errors from the adder.
    pub fn advance(&mut self, clk: Bit, enable: Bit) -> LogicResult<()> {
        let width = self.cursor.q().width();
        let step = Bits::from_u32(WORD_BYTES as u32, width);
        let next = mux2(enable, self.cursor.q(), &add(self.cursor.q(), &step)?)?;
        self.cursor.write(clk, &next, Bit::Zero, Bit::Zero)
    }

    /// Queued text up to the first NUL.
    ///
    /// # Errors
    ///
    /// Width errors from the queue cells.
    pub fn queued_text(&self) -> LogicResult<String> {
        let mut text = String::new();
        for cell in self.queue.cells() {
            let byte = cell.to_u32()? as u8;
            if byte == 0 {
                break;
            }
            text.push(char::from(byte));
        }
        Ok(text)
    }

    /// The queued text as a decimal integer, surrounding whitespace ignored.
    ///
    /// # Errors
    ///
    /// Width errors from the queue cells.
    pub fn parse_int(&self) -> LogicResult<Option<i32>> {
        Ok(self.queued_text()?.trim().parse::<i32>().ok())
    }

    /// Appends text to the output buffer.
    pub fn emit(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Appends the bytes of an outgoing word up to its first NUL, low lane
    /// first.
    ///
    /// # Returns
    ///
    /// Whether the word contained a NUL.
    ///
    /// # Errors
    ///
    /// Width errors for a word that is not 32 bits wide.
    pub fn emit_word(&mut self, word: &Bits) -> LogicResult<bool> {
        word.expect_width(WORD_BITS)?;
        for lane in (0..WORD_BYTES).rev() {
            let byte = word.slice(lane * BYTE_BITS..(lane + 1) * BYTE_BITS)?.to_u32()? as u8;
            if byte == 0 {
                return Ok(true);
            }
            self.output.push(char::from(byte));
        }
        Ok(false)
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }
}
