//! # Unit Components
//!
//! This module serves as the central hub for the per-component tests of the
//! interpreter: shared types, the processor core, ISA definitions, memory,
//! and the simulation layer.




/// Unit tests for the memory subsystem.
pub mod soc;


/// Configuration parsing and defaults.
pub mod config;
