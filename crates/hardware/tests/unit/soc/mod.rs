//! # Memory Subsystem Tests

/// Flat memory and its backing buffer.
pub mod memory;
