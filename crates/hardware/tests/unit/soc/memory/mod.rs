//! # Memory Tests

/// Word, halfword and byte access, bounds checking.
pub mod access;
