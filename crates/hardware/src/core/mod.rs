//! Core processor implementation.
//!
//! This module contains the architectural state of the interpreter (register
//! file and program counter) and the per-instruction execution semantics.

/// Architecture-specific components (register file).
pub mod arch;

/// CPU state and instruction execution.
pub mod cpu;

pub use self::cpu::{Cpu, CpuSnapshot};
