//! RISC-V Base Integer (I) Function Codes (funct3).
//!
//! The `funct3` field (bits 14-12) distinguishes between instructions sharing
//! the same major opcode (e.g., LB vs LH, BEQ vs BNE).

/// Load Byte.
pub const LB: u32 = 0b000;
/// Load Halfword.
pub const LH: u32 = 0b001;
/// Load Word.
pub const LW: u32 = 0b010;

/// Store Byte.
pub const SB: u32 = 0b000;
/// Store Halfword.
pub const SH: u32 = 0b001;
/// Store Word.
pub const SW: u32 = 0b010;

/// Branch Equal.
pub const BEQ: u32 = 0b000;
/// Branch Not Equal.
pub const BNE: u32 = 0b001;

/// Add / Subtract.
pub const ADD_SUB: u32 = 0b000;

/// Add Immediate.
pub const ADDI: u32 = 0b000;

/// Environment / debug-break group on the SYSTEM opcode; other values are CSR accesses.
pub const PRIV: u32 = 0b000;
