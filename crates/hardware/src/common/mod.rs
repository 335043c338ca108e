//! Common utilities and types used throughout the interpreter.
//!
//! This module provides fundamental building blocks that are shared across all components.
//! It includes:
//! 1. **Constants:** Instruction size, register count, memory limits.
//! 2. **Memory Access:** Definitions for categorizing memory operations and their widths.
//! 3. **Error Handling:** The `Trap` fault channel.

/// Common constants used throughout the interpreter.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Trap definitions.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, NUM_REGISTERS};
pub use data::{AccessType, Width};
pub use error::Trap;
