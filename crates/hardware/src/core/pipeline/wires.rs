//! Combinational wires between stages.
//!
//! Two signals travel backward within a single clock call: the memory stage
//! publishes a control-flow redirect for fetch, and writeback publishes the
//! register commit that decode writes and execute forwards from. Both are
//! recomputed on every call before their consumers run.

use crate::common::constants::{REG_ADDR_BITS, WORD_BITS};
use crate::logic::{Bit, Bits};

/// Redirect from the memory stage to fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectWire {
    /// A branch was taken or a jump resolved.
    pub taken: Bit,
    /// Address to fetch from when `taken`.
    pub target: Bits,
}

impl Default for RedirectWire {
    fn default() -> Self {
        Self {
            taken: Bit::Zero,
            target: Bits::zeros(WORD_BITS),
        }
    }
}

/// Register commit published by writeback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WritebackWire {
    /// Write enable.
    pub reg_write: Bit,
    /// Destination register.
    pub dest: Bits,
    /// Value written.
    pub data: Bits,
}

impl Default for WritebackWire {
    fn default() -> Self {
        Self {
            reg_write: Bit::Zero,
            dest: Bits::zeros(REG_ADDR_BITS),
            data: Bits::zeros(WORD_BITS),
        }
    }
}
