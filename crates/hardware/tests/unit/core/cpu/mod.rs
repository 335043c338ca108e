//! # CPU Tests


/// Construction and snapshots.
pub mod state;
