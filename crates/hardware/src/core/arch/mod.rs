//! RISC-V architectural state components.
//!
//! The modelled core has no CSRs, privilege modes or floating-point state;
//! the only architectural storage besides the PC is the integer register file.

/// General-Purpose Register file implementation.
pub mod gpr;
