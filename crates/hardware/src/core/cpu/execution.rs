//! Main Execution Loop.
//!
//! This module drives the clock into the pipeline. It performs the following:
//! 1. **Stage Ordering:** every call evaluates writeback, memory, execute,
//!    decode and fetch in that order, so each stage reads its input latch
//!    before the stage behind it overwrites it.
//! 2. **Clock Gating:** the terminal trap withholds the clock from every
//!    stage; the pipeline trap withholds it from fetch, decode's latch and
//!    execute. Both are sampled live, after writeback has run.
//! 3. **Pulsing:** a pulse is a low, high, low sequence of calls.
//! 4. **Observability:** per-pulse trace events when tracing is enabled.

use super::Cpu;
use crate::common::error::SimResult;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, memory_stage, writeback_stage,
};
use crate::logic::Bit;

impl Cpu {
    /// Clock seen by the memory stage, writeback and the register-file write.
    pub(crate) fn stage_clock(&self, clk: Bit) -> Bit {
        clk & !self.trap.trap()
    }

    /// Clock seen by fetch and the ID/EX and EX/MEM latches.
    pub(crate) fn issue_clock(&self, clk: Bit) -> Bit {
        clk & !self.trap.trap() & !self.trap.pipeline_trap()
    }

    /// Drives the clock input to `clk` and evaluates every stage once.
    ///
    /// State changes only when `clk` rises relative to the previous call.
    /// Once the terminal trap is set this is a no-op.
    ///
    /// # Errors
    ///
    /// [`SimError::Unimplemented`](crate::SimError::Unimplemented) when an
    /// unsupported instruction retires,
    /// [`SimError::AddressOutOfRange`](crate::SimError::AddressOutOfRange)
    /// for a fetch or data access outside memory, and
    /// [`SimError::Logic`](crate::SimError::Logic) for internal width faults.
    pub fn write(&mut self, clk: Bit) -> SimResult<()> {
        if self.is_halted() {
            return Ok(());
        }
        writeback_stage(self, clk)?;
        memory_stage(self, clk)?;
        execute_stage(self, clk)?;
        decode_stage(self, clk)?;
        fetch_stage(self, clk)
    }

    /// Drives one full clock pulse: low, high, low.
    ///
    /// # Errors
    ///
    /// As [`Cpu::write`].
    pub fn pulse(&mut self) -> SimResult<()> {
        if self.is_halted() {
            return Ok(());
        }
        self.write(Bit::Zero)?;
        self.write(Bit::One)?;
        let stalled = self.is_stalled();
        self.write(Bit::Zero)?;

        self.stats.pulses += 1;
        if stalled {
            self.stats.stall_pulses += 1;
        }
        if self.is_halted() && self.stats.halted_at.is_none() {
            self.stats.halted_at = Some(self.stats.pulses);
            tracing::debug!(
                pulse = self.stats.pulses,
                cause = ?self.trap_cause(),
                "terminal trap"
            );
        }
        if self.trace {
            tracing::trace!(
                pulse = self.stats.pulses,
                pc = format_args!("{:#010x}", self.pc()),
                stalled,
                "pulse"
            );
        }
        Ok(())
    }

    /// Pulses until the terminal trap fires or `max_pulses` have been driven.
    ///
    /// # Returns
    ///
    /// The number of pulses driven by this call.
    ///
    /// # Errors
    ///
    /// As [`Cpu::write`].
    pub fn run(&mut self, max_pulses: u64) -> SimResult<u64> {
        let mut driven = 0;
        while driven < max_pulses && !self.is_halted() {
            self.pulse()?;
            driven += 1;
        }
        if !self.is_halted() {
            tracing::warn!(max_pulses, "pulse limit reached before the program halted");
        }
        Ok(driven)
    }
}
