//! Clocked state elements.
//!
//! Every element here owns an [`EdgeDetector`] and only changes state when it
//! sees a rising edge on the clock it is handed:
//! 1. **Flip-Flops:** D (optionally with asynchronous set/clear), S-R and J-K.
//! 2. **Register Files:** Single-read-port and dual-read-port word arrays.
//! 3. **Memory:** Byte-addressable main memory with separate data and instruction ports.

use crate::logic::Bit;

/// Edge-triggered flip-flops.
pub mod flip_flop;

/// Byte-addressable main memory.
pub mod memory;

/// Register files.
pub mod ram;

pub use flip_flop::{DFlipFlop, DFlipFlopSetClear, JkFlipFlop, SrFlipFlop};
pub use memory::ByteMemory;
pub use ram::{DualPortRegisterFile, RegisterFile};

/// Rising-edge detector.
///
/// Remembers the clock level from its previous sample. A freshly built
/// detector counts as having last seen a high clock, so a first sample of
/// `1` is not an edge; the clock has to go low first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeDetector {
    previous: Bit,
}

impl EdgeDetector {
    /// Creates a detector whose previous level is high.
    pub const fn new() -> Self {
        Self {
            previous: Bit::One,
        }
    }

    /// Samples `clk` and returns high on a low-to-high transition.
    pub fn sample(&mut self, clk: Bit) -> Bit {
        let rising = !self.previous & clk;
        self.previous = clk;
        rising
    }

    /// Level seen by the last sample.
    pub const fn previous(&self) -> Bit {
        self.previous
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// A component driven by a clock through its own edge detector.
pub trait Clocked {
    /// The component's edge detector.
    fn edge_detector(&mut self) -> &mut EdgeDetector;

    /// Samples `clk` and reports whether this call is a rising edge.
    fn rising_edge(&mut self, clk: Bit) -> bool {
        self.edge_detector().sample(clk).is_one()
    }
}
