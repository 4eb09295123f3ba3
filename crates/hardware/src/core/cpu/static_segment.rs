//! Static data segment bookkeeping.
//!
//! The segment is a fixed window of main memory. A clocked pointer records
//! the highest word offset any store has targeted inside the window; it only
//! moves on a write at or past its current value, so it never decreases.
//! String input lands in the first word past that offset, or at the base
//! while no store has landed yet.

use crate::common::constants::{WORD_BITS, WORD_BYTES};
use crate::common::error::LogicResult;
use crate::logic::arith::{add, subtract};
use crate::logic::compare::{Signedness, greater_or_equal, less_than};
use crate::logic::mux::mux2;
use crate::logic::{Bit, Bits};
use crate::sequential::{DFlipFlop, SrFlipFlop};

/// Placement of the static segment and its highest-write pointer.
#[derive(Clone, Debug)]
pub struct StaticSegment {
    base: Bits,
    size: Bits,
    pointer: DFlipFlop,
    used: SrFlipFlop,
}

impl StaticSegment {
    /// A segment of `size` bytes at `base` with the pointer at offset zero.
    pub fn new(base: u32, size: u32) -> Self {
        Self {
            base: Bits::from_u32(base, WORD_BITS),
            size: Bits::from_u32(size, WORD_BITS),
            pointer: DFlipFlop::new(WORD_BITS),
            used: SrFlipFlop::new(),
        }
    }

    /// Segment start address.
    pub const fn base(&self) -> &Bits {
        &self.base
    }

    /// Highest offset targeted by an accepted store.
    pub const fn pointer(&self) -> &Bits {
        self.pointer.q()
    }

    /// Absolute address of the first word past the highest store, or the
    /// base while the segment is untouched.
    ///
    /// # Errors
    ///
    /// Width errors from the adder.
    pub fn next_free(&self) -> LogicResult<Bits> {
        let past = add(
            &add(&self.base, self.pointer.q())?,
            &Bits::from_u32(WORD_BYTES as u32, WORD_BITS),
        )?;
        mux2(self.used.q(), &self.base, &past)
    }

    /// Watches one data-port access.
    ///
    /// On a rising edge the pointer takes the access offset when `write` is
    /// high, `addr` falls inside the segment and the offset is at or past the
    /// current pointer.
    ///
    /// # Arguments
    ///
    /// * `clk` - Memory-stage clock.
    /// * `addr` - Byte address of the access.
    /// * `write` - The access stores a word.
    ///
    /// # Errors
    ///
    /// Width errors for a wrongly sized address.
    pub fn observe(&mut self, clk: Bit, addr: &Bits, write: Bit) -> LogicResult<()> {
        let offset = subtract(addr, &self.base)?;
        let inside = greater_or_equal(addr, &self.base, Signedness::Unsigned)?
            & less_than(&offset, &self.size, Signedness::Unsigned)?;
        let ahead = greater_or_equal(&offset, self.pointer.q(), Signedness::Unsigned)?;
        let accept = write & inside & ahead;

        let d = mux2(accept, self.pointer.q(), &offset)?;
        self.pointer.write(clk, &d)?;
        self.used.write(clk, accept, Bit::Zero)
    }
}
