//! Edge-triggered flip-flops.
//!
//! 1. **D:** multi-bit register, `Q+ = D` on a rising edge.
//! 2. **D with set/clear:** asynchronous set and clear bypass the clock.
//! 3. **S-R:** `Q+ = S + Q·R'`, with `S = R = 1` forbidden.
//! 4. **J-K:** `Q+ = Q'·J + Q·K'`, so `J = K = 1` toggles.

use super::{Clocked, EdgeDetector};
use crate::common::error::{LogicError, LogicResult};
use crate::logic::{Bit, Bits};

/// Multi-bit D flip-flop (a register).
#[derive(Clone, Debug)]
pub struct DFlipFlop {
    q: Bits,
    edge: EdgeDetector,
}

impl DFlipFlop {
    /// A zero-initialized register of `width` bits.
    pub fn new(width: usize) -> Self {
        Self::with_value(Bits::zeros(width))
    }

    /// A register holding `initial`.
    pub fn with_value(initial: Bits) -> Self {
        Self {
            q: initial,
            edge: EdgeDetector::new(),
        }
    }

    /// Drives the clock and data inputs; latches `d` on a rising edge.
    ///
    /// # Errors
    ///
    /// [`LogicError::WidthMismatch`] if `d` is not as wide as the register.
    pub fn write(&mut self, clk: Bit, d: &Bits) -> LogicResult<()> {
        d.expect_width(self.q.width())?;
        if self.rising_edge(clk) {
            self.q = d.clone();
        }
        Ok(())
    }

    /// Current output.
    pub const fn q(&self) -> &Bits {
        &self.q
    }

    /// Width of the register.
    pub fn width(&self) -> usize {
        self.q.width()
    }

    pub(crate) fn force(&mut self, value: Bits) {
        self.q = value;
    }
}

impl Clocked for DFlipFlop {
    fn edge_detector(&mut self) -> &mut EdgeDetector {
        &mut self.edge
    }
}

/// D flip-flop with asynchronous set (all ones) and clear (all zeros).
#[derive(Clone, Debug)]
pub struct DFlipFlopSetClear {
    inner: DFlipFlop,
}

impl DFlipFlopSetClear {
    /// A zero-initialized register of `width` bits.
    pub fn new(width: usize) -> Self {
        Self {
            inner: DFlipFlop::new(width),
        }
    }

    /// Drives clock, data, set and clear.
    ///
    /// Set and clear act immediately, whatever the clock does. Otherwise `d`
    /// is latched on a rising edge.
    ///
    /// # Errors
    ///
    /// [`LogicError::IllegalInput`] when set and clear are both high, and
    /// [`LogicError::WidthMismatch`] for a wrongly sized `d`.
    pub fn write(&mut self, clk: Bit, d: &Bits, set: Bit, clear: Bit) -> LogicResult<()> {
        d.expect_width(self.inner.width())?;
        if (set & clear).is_one() {
            return Err(LogicError::IllegalInput("set and clear asserted together"));
        }
        let rising = self.inner.rising_edge(clk);
        if set.is_one() {
            self.inner.force(Bits::ones(self.inner.width()));
        } else if clear.is_one() {
            self.inner.force(Bits::zeros(self.inner.width()));
        } else if rising {
            self.inner.force(d.clone());
        }
        Ok(())
    }

    /// Applies only the asynchronous inputs, without touching the clock.
    ///
    /// # Errors
    ///
    /// [`LogicError::IllegalInput`] when set and clear are both high.
    pub fn assert_async(&mut self, set: Bit, clear: Bit) -> LogicResult<()> {
        if (set & clear).is_one() {
            return Err(LogicError::IllegalInput("set and clear asserted together"));
        }
        if set.is_one() {
            self.inner.force(Bits::ones(self.inner.width()));
        } else if clear.is_one() {
            self.inner.force(Bits::zeros(self.inner.width()));
        }
        Ok(())
    }

    /// Current output.
    pub const fn q(&self) -> &Bits {
        self.inner.q()
    }

    /// Output of a one-bit instance.
    pub fn q_bit(&self) -> Bit {
        self.inner.q().lsb()
    }
}

/// Set-reset flip-flop.
#[derive(Clone, Debug, Default)]
pub struct SrFlipFlop {
    q: Bit,
    edge: EdgeDetector,
}

impl SrFlipFlop {
    /// A flip-flop holding zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// On a rising edge, `Q+ = S + Q·R'`.
    ///
    /// # Errors
    ///
    /// [`LogicError::IllegalInput`] when S and R are both high.
    pub fn write(&mut self, clk: Bit, s: Bit, r: Bit) -> LogicResult<()> {
        if (s & r).is_one() {
            return Err(LogicError::IllegalInput("S and R asserted together"));
        }
        if self.rising_edge(clk) {
            self.q = s | (self.q & !r);
        }
        Ok(())
    }

    /// Current output.
    pub const fn q(&self) -> Bit {
        self.q
    }
}

impl Clocked for SrFlipFlop {
    fn edge_detector(&mut self) -> &mut EdgeDetector {
        &mut self.edge
    }
}

/// J-K flip-flop. `J = K = 1` toggles the output.
#[derive(Clone, Debug, Default)]
pub struct JkFlipFlop {
    q: Bit,
    edge: EdgeDetector,
}

impl JkFlipFlop {
    /// A flip-flop holding zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// On a rising edge, `Q+ = Q'·J + Q·K'`.
    pub fn write(&mut self, clk: Bit, j: Bit, k: Bit) {
        if self.rising_edge(clk) {
            self.q = (!self.q & j) | (self.q & !k);
        }
    }

    /// Current output.
    pub const fn q(&self) -> Bit {
        self.q
    }
}

impl Clocked for JkFlipFlop {
    fn edge_detector(&mut self) -> &mut EdgeDetector {
        &mut self.edge
    }
}
