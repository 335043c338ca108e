//! Global Interpreter Constants.
//!
//! This module defines system-wide constants used across the interpreter. It includes:
//! 1. **Instruction Constants:** Instruction size and alignment.
//! 2. **Register Constants:** Register file geometry.
//! 3. **Memory Constants:** Default memory capacity and addressable limit.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Mask of the PC bits that must be clear for a fetch to be legal.
pub const INSTRUCTION_ALIGN_MASK: u32 = INSTRUCTION_SIZE - 1;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Default memory capacity in bytes (4 MiB).
pub const DEFAULT_MEMORY_SIZE: usize = 0x40_0000;

/// Largest capacity addressable by a 32-bit byte address.
pub const MAX_MEMORY_SIZE: u64 = 1 << 32;

/// Number of most recent recoverable faults retained in the run statistics.
pub const FAULT_LOG_CAPACITY: usize = 64;
