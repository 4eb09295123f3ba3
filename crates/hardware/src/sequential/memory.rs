//! Byte-addressable main memory.
//!
//! Storage is an array of 8-bit cells. A 32-bit word at address `a` occupies
//! cells `a..a + 4`: the word is split into bytes most significant first and
//! the first split byte lands at `a + 3`, the last at `a`. Reads compose the
//! bytes in the mirror order, so a word read back equals the word written.
//!
//! Two independently clocked ports share the backing store:
//! 1. **Data Port:** synchronous write, asynchronous read gated by read-enable.
//! 2. **Instruction Port:** asynchronous read, synchronous write.
//!
//! Addresses are range checked but not alignment checked.

use super::EdgeDetector;
use crate::common::constants::{BYTE_BITS, WORD_BITS, WORD_BYTES};
use crate::common::error::{SimError, SimResult};
use crate::common::rng::Xorshift;
use crate::logic::{Bit, Bits};

/// Byte-addressable memory with a data port and an instruction port.
#[derive(Clone, Debug)]
pub struct ByteMemory {
    cells: Vec<Bits>,
    data_edge: EdgeDetector,
    instruction_edge: EdgeDetector,
}

impl ByteMemory {
    /// Zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![Bits::zeros(BYTE_BITS); size],
            data_edge: EdgeDetector::new(),
            instruction_edge: EdgeDetector::new(),
        }
    }

    /// Fills every byte from `rng`.
    pub fn fill_random(&mut self, rng: &mut Xorshift) {
        for cell in &mut self.cells {
            *cell = Bits::from_u32(rng.next_u32(), BYTE_BITS);
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    fn word_index(&self, addr: u32) -> SimResult<usize> {
        let base = addr as usize;
        if base.checked_add(WORD_BYTES).is_none_or(|end| end > self.size()) {
            return Err(SimError::AddressOutOfRange {
                addr,
                size: self.size(),
            });
        }
        Ok(base)
    }

    fn decode(&self, addr: &Bits) -> SimResult<usize> {
        addr.expect_width(WORD_BITS)?;
        self.word_index(addr.to_u32()?)
    }

    fn write_word_at(&mut self, base: usize, word: &Bits) -> SimResult<()> {
        word.expect_width(WORD_BITS)?;
        for lane in 0..WORD_BYTES {
            let byte = word.slice(lane * BYTE_BITS..(lane + 1) * BYTE_BITS)?;
            self.cells[base + WORD_BYTES - 1 - lane] = byte;
        }
        Ok(())
    }

    fn read_word_at(&self, base: usize) -> Bits {
        (0..WORD_BYTES)
            .rev()
            .fold(Bits::zeros(0), |acc, offset| acc.concat(&self.cells[base + offset]))
    }

    /// One clocked call on the data port.
    ///
    /// # Arguments
    ///
    /// * `clk` - Clock level for this call.
    /// * `addr` - 32-bit byte address.
    /// * `write_data` - Word stored on a rising edge when `mem_write` is high.
    /// * `mem_write` - Write enable.
    /// * `mem_read` - Read enable.
    ///
    /// # Returns
    ///
    /// The word at `addr` when `mem_read` is high (after any write of this
    /// call), zeros otherwise. A read outside memory between edges also
    /// yields zeros.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`] for an enabled access outside memory
    /// on a rising edge and [`SimError::Logic`] for wrongly sized buses.
    pub fn data_port(
        &mut self,
        clk: Bit,
        addr: &Bits,
        write_data: &Bits,
        mem_write: Bit,
        mem_read: Bit,
    ) -> SimResult<Bits> {
        let rising = self.data_edge.sample(clk);
        if (rising & mem_write).is_one() {
            let base = self.decode(addr)?;
            self.write_word_at(base, write_data)?;
        }
        if mem_read.is_zero() {
            return Ok(Bits::zeros(WORD_BITS));
        }
        match self.decode(addr) {
            Ok(base) => Ok(self.read_word_at(base)),
            Err(SimError::AddressOutOfRange { .. }) if rising.is_zero() => {
                Ok(Bits::zeros(WORD_BITS))
            }
            Err(e) => Err(e),
        }
    }

    /// One clocked call on the instruction port.
    ///
    /// # Returns
    ///
    /// The word at `addr` after any write of this call.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`] outside memory.
    pub fn instruction_port(
        &mut self,
        clk: Bit,
        addr: &Bits,
        write_data: &Bits,
        write_enable: Bit,
    ) -> SimResult<Bits> {
        let rising = self.instruction_edge.sample(clk);
        let base = self.decode(addr)?;
        if (rising & write_enable).is_one() {
            self.write_word_at(base, write_data)?;
        }
        Ok(self.read_word_at(base))
    }

    /// Stores a word outside the clocked ports (program loading).
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`] outside memory.
    pub fn store_bits(&mut self, addr: u32, word: &Bits) -> SimResult<()> {
        let base = self.word_index(addr)?;
        self.write_word_at(base, word)
    }

    /// Stores a native word outside the clocked ports.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`] outside memory.
    pub fn store_word(&mut self, addr: u32, word: u32) -> SimResult<()> {
        self.store_bits(addr, &Bits::from_u32(word, WORD_BITS))
    }

    /// Reads a word outside the clocked ports.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`] outside memory.
    pub fn load_bits(&self, addr: u32) -> SimResult<Bits> {
        let base = self.word_index(addr)?;
        Ok(self.read_word_at(base))
    }

    /// Reads a native word outside the clocked ports.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`] outside memory.
    pub fn load_word(&self, addr: u32) -> SimResult<u32> {
        Ok(self.load_bits(addr)?.to_u32()?)
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// [`SimError::AddressOutOfRange`] outside memory.
    pub fn read_byte(&self, addr: u32) -> SimResult<u8> {
        let cell = self
            .cells
            .get(addr as usize)
            .ok_or(SimError::AddressOutOfRange {
                addr,
                size: self.size(),
            })?;
        Ok(cell.to_u32()? as u8)
    }
}
