//! System-on-Chip (SoC) Components.
//!
//! The modelled system has a single component outside the core: one flat,
//! bounds-checked memory shared by instruction fetch and data access.

/// Flat memory and its backing buffer.
pub mod memory;

pub use memory::Memory;
