//! Configuration system for the MIPS simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the machine. It provides:
//! 1. **Defaults:** Baseline memory geometry, segment placement and run limits.
//! 2. **Structures:** General (tracing, limits, power-up state) and memory settings.
//! 3. **Enums:** Power-up initialization policy.
//!
//! Configuration is read from JSON (every field optional) or built with
//! `Config::default()`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::constants::{DEFAULT_SEED, NUM_REGISTERS, WORD_BYTES};
use crate::common::error::{SimError, SimResult};

/// Default configuration constants for the simulator.
mod defaults {
    /// Size of main memory in bytes (64 KiB).
    pub const MEMORY_SIZE: usize = 64 * 1024;

    /// Address of the first program word.
    pub const TEXT_BASE: u32 = 0x0000_0000;

    /// Start of the static data segment used by string input.
    pub const STATIC_BASE: u32 = 0x0000_8000;

    /// Size of the static data segment (16 KiB).
    pub const STATIC_SIZE: u32 = 0x4000;

    /// Bytes the console input queue can hold, terminator included.
    pub const INPUT_CAPACITY: usize = 256;

    /// Pulse limit for batch runs.
    pub const MAX_PULSES: u64 = 100_000;
}

/// How registers or memory are filled at power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum InitPolicy {
    /// Everything starts at zero.
    #[default]
    Zero,
    /// Pseudo-random garbage from the seeded xorshift generator.
    Random,
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{Config, InitPolicy};
///
/// let json = r#"{ "general": { "register_init": "Random", "seed": 7 },
///                 "memory": { "size": 4096, "static_base": 2048, "static_size": 1024 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.register_init, InitPolicy::Random);
/// assert_eq!(config.memory.size, 4096);
/// assert_eq!(config.memory.text_base, 0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// [`SimError::Json`] for malformed JSON and [`SimError::Config`] for an
    /// inconsistent configuration.
    pub fn from_json(text: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`SimError::Io`] if the file cannot be read, plus the errors of
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that the memory map is consistent.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] describing the first problem found.
    pub fn validate(&self) -> SimResult<()> {
        let mem = &self.memory;
        if mem.size == 0 || mem.size % WORD_BYTES != 0 {
            return Err(SimError::Config(format!(
                "memory size {} is not a positive multiple of {WORD_BYTES}",
                mem.size
            )));
        }
        if mem.size as u64 > 1 << 32 {
            return Err(SimError::Config(format!(
                "memory size {} exceeds the 32-bit address space",
                mem.size
            )));
        }
        let aligned = |addr: u32| addr as usize % WORD_BYTES == 0;
        if !aligned(mem.text_base) || !aligned(mem.static_base) || !aligned(mem.static_size) {
            return Err(SimError::Config(
                "text base, static base and static size must be word aligned".to_string(),
            ));
        }
        if mem.text_base as usize >= mem.size {
            return Err(SimError::Config(format!(
                "text base {:#x} lies outside memory",
                mem.text_base
            )));
        }
        let static_end = mem.static_base as usize + mem.static_size as usize;
        if static_end > mem.size {
            return Err(SimError::Config(format!(
                "static segment {:#x}..{static_end:#x} lies outside memory",
                mem.static_base
            )));
        }
        if !mem.input_capacity.is_power_of_two() || mem.input_capacity < WORD_BYTES {
            return Err(SimError::Config(format!(
                "input capacity {} must be a power of two of at least {WORD_BYTES}",
                mem.input_capacity
            )));
        }
        if let Some(regs) = &self.general.registers {
            if regs.len() != NUM_REGISTERS {
                return Err(SimError::Config(format!(
                    "expected {NUM_REGISTERS} initial register values, got {}",
                    regs.len()
                )));
            }
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage trace events.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Pulse limit for batch runs.
    #[serde(default = "GeneralConfig::default_max_pulses")]
    pub max_pulses: u64,

    /// Power-up policy for the register file.
    #[serde(default)]
    pub register_init: InitPolicy,

    /// Seed for randomized power-up state.
    #[serde(default = "GeneralConfig::default_seed")]
    pub seed: u64,

    /// Explicit initial register values ($0 first); overrides `register_init`.
    #[serde(default)]
    pub registers: Option<Vec<u32>>,

    /// Initial stack pointer, applied after the register policy.
    #[serde(default)]
    pub initial_sp: Option<u32>,
}

impl GeneralConfig {
    /// Returns the default pulse limit.
    fn default_max_pulses() -> u64 {
        defaults::MAX_PULSES
    }

    /// Returns the default generator seed.
    fn default_seed() -> u64 {
        DEFAULT_SEED
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            max_pulses: defaults::MAX_PULSES,
            register_init: InitPolicy::Zero,
            seed: DEFAULT_SEED,
            registers: None,
            initial_sp: None,
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Memory size in bytes.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,

    /// Power-up policy for memory contents.
    #[serde(default)]
    pub init: InitPolicy,

    /// Address of the first program word (initial PC).
    #[serde(default = "MemoryConfig::default_text_base")]
    pub text_base: u32,

    /// Start of the static data segment.
    #[serde(default = "MemoryConfig::default_static_base")]
    pub static_base: u32,

    /// Size of the static data segment in bytes.
    #[serde(default = "MemoryConfig::default_static_size")]
    pub static_size: u32,

    /// Capacity of the console input queue in bytes (a power of two).
    #[serde(default = "MemoryConfig::default_input_capacity")]
    pub input_capacity: usize,
}

impl MemoryConfig {
    /// Returns the default memory size in bytes.
    fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }

    /// Returns the default text base.
    fn default_text_base() -> u32 {
        defaults::TEXT_BASE
    }

    /// Returns the default static segment base.
    fn default_static_base() -> u32 {
        defaults::STATIC_BASE
    }

    /// Returns the default static segment size.
    fn default_static_size() -> u32 {
        defaults::STATIC_SIZE
    }

    /// Returns the default input queue capacity.
    fn default_input_capacity() -> usize {
        defaults::INPUT_CAPACITY
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
            init: InitPolicy::Zero,
            text_base: defaults::TEXT_BASE,
            static_base: defaults::STATIC_BASE,
            static_size: defaults::STATIC_SIZE,
            input_capacity: defaults::INPUT_CAPACITY,
        }
    }
}
