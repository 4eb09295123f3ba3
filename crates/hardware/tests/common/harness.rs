use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::core::cpu::trap::TrapCause;

use super::builder::instruction::inst;

/// Register indices used throughout the pipeline tests.
pub mod reg {
    pub const ZERO: u32 = 0;
    pub const AT: u32 = 1;
    pub const V0: u32 = 2;
    pub const A0: u32 = 4;
    pub const T0: u32 = 8;
    pub const T1: u32 = 9;
    pub const T2: u32 = 10;
    pub const T3: u32 = 11;
    pub const T4: u32 = 12;
    pub const S0: u32 = 16;
    pub const S1: u32 = 17;
    pub const SP: u32 = 29;
    pub const RA: u32 = 31;
}

/// Upper bound used by [`TestContext::run_to_halt`].
pub const DEFAULT_PULSE_LIMIT: u64 = 2_000;

/// A machine plus the helpers every pipeline test needs.
pub struct TestContext {
    pub cpu: Cpu,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("mipsim_core=debug")
            .try_init();
        Self {
            cpu: Cpu::new(config).unwrap(),
        }
    }

    /// Writes the program at the text base.
    pub fn load_program(mut self, words: &[u32]) -> Self {
        self.cpu.load_program(words).unwrap();
        self
    }

    /// Writes a data word.
    pub fn with_word(mut self, addr: u32, word: u32) -> Self {
        self.cpu.store_word(addr, word).unwrap();
        self
    }

    /// Queues console input.
    pub fn with_input(mut self, text: &str) -> Self {
        self.cpu.provide_input(text.as_bytes()).unwrap();
        self
    }

    /// Drives exactly `pulses` clock pulses.
    pub fn pulse(&mut self, pulses: u64) {
        for _ in 0..pulses {
            self.cpu.pulse().unwrap();
        }
    }

    /// Pulses until the terminal trap fires, failing the test if it never does.
    pub fn run_to_halt(&mut self) -> TrapCause {
        let _ = self.cpu.run(DEFAULT_PULSE_LIMIT).unwrap();
        self.cpu
            .trap_cause()
            .unwrap_or_else(|| panic!("no halt within {DEFAULT_PULSE_LIMIT} pulses"))
    }

    pub fn reg(&self, index: u32) -> u32 {
        self.cpu.register(index as usize)
    }

    pub fn mem(&self, addr: u32) -> u32 {
        self.cpu.memory_word(addr).unwrap()
    }

    pub fn output(&self) -> &str {
        self.cpu.output()
    }
}

/// `addi $v0, $zero, 10 ; syscall`, the standard program tail.
pub fn exit_sequence() -> Vec<u32> {
    vec![
        inst().addi(reg::V0, reg::ZERO, 10).build(),
        inst().syscall().build(),
    ]
}

/// Appends [`exit_sequence`] to `body`.
pub fn with_exit(body: &[u32]) -> Vec<u32> {
    let mut program = body.to_vec();
    program.extend(exit_sequence());
    program
}

