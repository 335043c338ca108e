//! Program loading and the execution loop.
//!
//! Provides utilities for placing programs in memory and the
//! fetch-decode-execute loop that runs them.

/// Program, image and configuration loading.
pub mod loader;

/// Execution loop and the `Simulator` owner type.
pub mod simulator;

pub use self::loader::{LoadError, load_program};
pub use self::simulator::{RunExit, Simulator, StepOutcome, create_state, inspect, run, step};
