//! Simulator: a configured machine plus its run limit.
//!
//! Wraps construction, program placement, input and the batch run loop so
//! front ends only deal with a configuration, a program and a result.

use std::path::Path;

use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::trap::TrapCause;
use crate::common::error::SimResult;
use crate::sim::loader;

/// Outcome of a batch run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Pulses driven.
    pub pulses: u64,
    /// Why the machine stopped, if it halted.
    pub cause: Option<TrapCause>,
    /// Console output produced.
    pub output: String,
}

/// Top-level simulator: the machine and the pulse limit it runs under.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The machine.
    pub cpu: Cpu,
    /// Pulse limit applied by [`Simulator::run`].
    pub max_pulses: u64,
}

impl Simulator {
    /// Builds a machine from `config` and places `program` at the text base.
    ///
    /// # Errors
    ///
    /// Configuration errors and
    /// [`SimError::AddressOutOfRange`](crate::SimError::AddressOutOfRange)
    /// when the program does not fit.
    pub fn new(config: &Config, program: &[u32]) -> SimResult<Self> {
        let mut cpu = Cpu::new(config)?;
        cpu.load_program(program)?;
        Ok(Self {
            cpu,
            max_pulses: config.general.max_pulses,
        })
    }

    /// Builds a machine and loads the program file at `path`.
    ///
    /// # Errors
    ///
    /// As [`Simulator::new`] and [`loader::load_file`].
    pub fn from_file(config: &Config, path: impl AsRef<Path>) -> SimResult<Self> {
        let program = loader::load_file(path)?;
        Self::new(config, &program)
    }

    /// Pre-loads console input.
    ///
    /// # Errors
    ///
    /// [`SimError::InputTooLong`](crate::SimError::InputTooLong).
    pub fn provide_input(&mut self, bytes: &[u8]) -> SimResult<()> {
        self.cpu.provide_input(bytes)
    }

    /// Runs until the terminal trap or the pulse limit.
    ///
    /// # Errors
    ///
    /// As [`Cpu::run`].
    pub fn run(&mut self) -> SimResult<RunSummary> {
        let pulses = self.cpu.run(self.max_pulses)?;
        Ok(RunSummary {
            pulses,
            cause: self.cpu.trap_cause(),
            output: self.cpu.output().to_string(),
        })
    }
}
