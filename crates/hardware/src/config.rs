//! Configuration system for the interpreter.
//!
//! This module defines all configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants (memory capacity, start PC, load address).
//! 2. **Structures:** Hierarchical config for general, memory, and ISA options.
//! 3. **Parsing:** JSON deserialization via `serde_json`; every field is optional.
//!
//! Use `Config::default()` from code, or `Config::from_json` for files handed to the CLI.

use serde::{Deserialize, Serialize};

/// Default configuration constants for the interpreter.
mod defaults {
    use crate::common::constants::DEFAULT_MEMORY_SIZE;

    /// Address of the first instruction executed.
    pub const START_PC: u32 = 0;

    /// Address at which program images are placed.
    pub const LOAD_BASE: u32 = 0;

    /// Total memory capacity in bytes (4 MiB).
    pub const MEMORY_CAPACITY: usize = DEFAULT_MEMORY_SIZE;
}

/// Root configuration structure containing all interpreter settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rv32_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.memory.capacity, 0x40_0000);
/// assert!(!config.isa.hardwire_zero);
/// ```
///
/// Deserializing from JSON; omitted sections and fields keep their defaults:
///
/// ```
/// use rv32_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "max_steps": 1000
///     },
///     "memory": {
///         "capacity": 65536
///     },
///     "isa": {
///         "hardwire_zero": true
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, Some(1000));
/// assert_eq!(config.general.start_pc, 0);
/// assert_eq!(config.memory.capacity, 65536);
/// assert!(config.isa.hardwire_zero);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Instruction-set behaviour switches
    #[serde(default)]
    pub isa: IsaConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General run settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Emit a `trace`-level event for every executed instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Address at which the program image is loaded
    #[serde(default = "GeneralConfig::default_load_base")]
    pub load_base: u32,

    /// Upper bound on executed instructions; `None` runs until halt
    #[serde(default)]
    pub max_steps: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u32 {
        defaults::START_PC
    }

    /// Returns the default image load address.
    const fn default_load_base() -> u32 {
        defaults::LOAD_BASE
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            load_base: defaults::LOAD_BASE,
            max_steps: None,
        }
    }
}

/// Memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MemoryConfig {
    /// Memory capacity in bytes
    #[serde(default = "MemoryConfig::default_capacity")]
    pub capacity: usize,
}

impl MemoryConfig {
    /// Returns the default memory capacity.
    const fn default_capacity() -> usize {
        defaults::MEMORY_CAPACITY
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::MEMORY_CAPACITY,
        }
    }
}

/// Instruction-set behaviour switches.
///
/// The defaults reproduce the reference model, which treats `x0` as an
/// ordinary register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct IsaConfig {
    /// Hard-wire `x0` to zero as the canonical ISA does
    #[serde(default)]
    pub hardwire_zero: bool,
}
