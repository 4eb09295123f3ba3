//! Register files.
//!
//! 1. **Register File:** one asynchronous read port and one synchronous write port.
//! 2. **Dual-Port Register File:** two read ports and one write port driven in a
//!    single clocked call, write first, then both reads.
//!
//! Reads are multiplexers over every cell; writes decode the address into
//! one-hot lines and load the single enabled cell.

use super::{Clocked, EdgeDetector};
use crate::common::error::{LogicError, LogicResult};
use crate::logic::mux::{demux, mux};
use crate::logic::{Bit, Bits};

/// Word array with one read port and one write port.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    cells: Vec<Bits>,
    addr_bits: usize,
    data_bits: usize,
    edge: EdgeDetector,
}

impl RegisterFile {
    /// `2^addr_bits` zeroed cells of `data_bits` each.
    pub fn new(addr_bits: usize, data_bits: usize) -> Self {
        Self {
            cells: vec![Bits::zeros(data_bits); 1 << addr_bits],
            addr_bits,
            data_bits,
            edge: EdgeDetector::new(),
        }
    }

    /// A register file preloaded with `cells`.
    ///
    /// # Errors
    ///
    /// [`LogicError::WidthMismatch`] if the cell count is not `2^addr_bits` or
    /// a cell is not `data_bits` wide.
    pub fn with_cells(addr_bits: usize, data_bits: usize, cells: Vec<Bits>) -> LogicResult<Self> {
        if cells.len() != 1 << addr_bits {
            return Err(LogicError::WidthMismatch {
                expected: 1 << addr_bits,
                found: cells.len(),
            });
        }
        for cell in &cells {
            cell.expect_width(data_bits)?;
        }
        Ok(Self {
            cells,
            addr_bits,
            data_bits,
            edge: EdgeDetector::new(),
        })
    }

    /// Asynchronous read of the cell at `addr`.
    ///
    /// # Errors
    ///
    /// [`LogicError::WidthMismatch`] for a wrongly sized address.
    pub fn read(&self, addr: &Bits) -> LogicResult<Bits> {
        addr.expect_width(self.addr_bits)?;
        let inputs: Vec<&Bits> = self.cells.iter().collect();
        mux(addr, &inputs)
    }

    /// Synchronous write: on a rising edge with `we` high, `data` goes to `addr`.
    ///
    /// # Errors
    ///
    /// [`LogicError::WidthMismatch`] for a wrongly sized address or data word.
    pub fn write(&mut self, clk: Bit, we: Bit, addr: &Bits, data: &Bits) -> LogicResult<()> {
        addr.expect_width(self.addr_bits)?;
        data.expect_width(self.data_bits)?;
        if self.rising_edge(clk) {
            let lines = demux(we, addr)?;
            for (cell, line) in self.cells.iter_mut().zip(lines.iter()) {
                if line.is_one() {
                    *cell = data.clone();
                }
            }
        }
        Ok(())
    }

    /// Loads a cell directly, outside the clocked write path.
    ///
    /// # Errors
    ///
    /// [`LogicError::IndexOutOfRange`] or [`LogicError::WidthMismatch`].
    pub fn set_cell(&mut self, index: usize, value: Bits) -> LogicResult<()> {
        value.expect_width(self.data_bits)?;
        let width = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(LogicError::IndexOutOfRange { index, width })?;
        *cell = value;
        Ok(())
    }

    /// Every cell, lowest address first.
    pub fn cells(&self) -> &[Bits] {
        &self.cells
    }

    /// Width of an address.
    pub const fn addr_bits(&self) -> usize {
        self.addr_bits
    }

    /// Width of a cell.
    pub const fn data_bits(&self) -> usize {
        self.data_bits
    }
}

impl Clocked for RegisterFile {
    fn edge_detector(&mut self) -> &mut EdgeDetector {
        &mut self.edge
    }
}

/// Register file with two read ports, as used by the decode stage.
#[derive(Clone, Debug)]
pub struct DualPortRegisterFile {
    file: RegisterFile,
}

impl DualPortRegisterFile {
    /// `2^addr_bits` zeroed cells of `data_bits` each.
    pub fn new(addr_bits: usize, data_bits: usize) -> Self {
        Self {
            file: RegisterFile::new(addr_bits, data_bits),
        }
    }

    /// A register file preloaded with `cells`.
    ///
    /// # Errors
    ///
    /// As [`RegisterFile::with_cells`].
    pub fn with_cells(addr_bits: usize, data_bits: usize, cells: Vec<Bits>) -> LogicResult<Self> {
        RegisterFile::with_cells(addr_bits, data_bits, cells).map(|file| Self { file })
    }

    /// One clocked call: synchronous write, then both asynchronous reads.
    ///
    /// The write commits before the reads are evaluated, so a read of the
    /// register being written returns the new value on the same edge.
    ///
    /// # Arguments
    ///
    /// * `clk` - Clock level for this call.
    /// * `we` - Write enable.
    /// * `waddr`, `wdata` - Write port.
    /// * `raddr1`, `raddr2` - Read ports.
    ///
    /// # Returns
    ///
    /// The values on read ports 1 and 2.
    ///
    /// # Errors
    ///
    /// [`LogicError::WidthMismatch`] for any wrongly sized port.
    pub fn write(
        &mut self,
        clk: Bit,
        we: Bit,
        waddr: &Bits,
        wdata: &Bits,
        raddr1: &Bits,
        raddr2: &Bits,
    ) -> LogicResult<(Bits, Bits)> {
        self.file.write(clk, we, waddr, wdata)?;
        Ok((self.file.read(raddr1)?, self.file.read(raddr2)?))
    }

    /// Asynchronous read outside a clocked call.
    ///
    /// # Errors
    ///
    /// As [`RegisterFile::read`].
    pub fn read(&self, addr: &Bits) -> LogicResult<Bits> {
        self.file.read(addr)
    }

    /// Loads a register directly, outside the clocked write path.
    ///
    /// # Errors
    ///
    /// As [`RegisterFile::set_cell`].
    pub fn set_cell(&mut self, index: usize, value: Bits) -> LogicResult<()> {
        self.file.set_cell(index, value)
    }

    /// Every register, index 0 first.
    pub fn cells(&self) -> &[Bits] {
        self.file.cells()
    }
}
