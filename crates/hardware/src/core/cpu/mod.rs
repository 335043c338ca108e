//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! architectural state of the interpreter. It coordinates the following:
//! 1. **State Management:** Maintains the register file, program counter, and halt flag.
//! 2. **Observability:** Carries the per-instruction trace switch and run statistics.
//! 3. **Inspection:** Produces read-only, serializable snapshots for dumps.

/// Per-instruction execution semantics.
pub mod execution;

use std::fmt;

use serde::Serialize;

use crate::common::NUM_REGISTERS;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::isa::abi;
use crate::stats::RunStats;

/// Main CPU structure containing all architectural state.
///
/// A `Cpu` starts running at `start_pc` with every register zero. Once
/// `halted` is set by a debug-break it stays set; further execution is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Program Counter.
    pub pc: u32,
    /// Set by EBREAK; terminal.
    pub halted: bool,
    /// Enable instruction tracing.
    pub trace: bool,
    /// Run statistics and recoverable-fault log.
    pub stats: RunStats,
}

impl Cpu {
    /// Creates a running CPU at `start_pc` with all registers zero.
    pub fn new(start_pc: u32) -> Self {
        Self {
            pc: start_pc,
            ..Self::default()
        }
    }

    /// Creates a CPU from the `general` and `isa` sections of `config`.
    pub fn with_config(config: &Config) -> Self {
        let regs = if config.isa.hardwire_zero {
            Gpr::with_hardwired_zero()
        } else {
            Gpr::new()
        };

        Self {
            regs,
            pc: config.general.start_pc,
            halted: false,
            trace: config.general.trace_instructions,
            stats: RunStats::default(),
        }
    }

    /// Returns `true` once a debug-break has executed.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Copies out the program counter and register file.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            pc: self.pc,
            halted: self.halted,
            regs: self.regs.snapshot(),
        }
    }
}

/// Read-only copy of the architectural state, suitable for dumps and JSON output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CpuSnapshot {
    /// Program counter.
    pub pc: u32,
    /// Whether the CPU has halted.
    pub halted: bool,
    /// Register values `x0`-`x31`.
    pub regs: [i32; NUM_REGISTERS],
}

impl CpuSnapshot {
    /// Value of register `idx`; indices wrap modulo 32.
    pub const fn reg(&self, idx: usize) -> i32 {
        self.regs[idx % NUM_REGISTERS]
    }
}

/// Registers printed per row of the dump table.
const DUMP_COLUMNS: usize = 4;

impl fmt::Display for CpuSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.halted { "halted" } else { "running" };
        writeln!(f, "pc = {:#010x} ({state})", self.pc)?;

        for (row, chunk) in self.regs.chunks(DUMP_COLUMNS).enumerate() {
            for (col, val) in chunk.iter().enumerate() {
                let idx = row * DUMP_COLUMNS + col;
                let label = format!("x{idx}/{}", abi::name(idx));
                write!(f, "{label:>9} = {:#010x}", *val as u32)?;
                if col + 1 < chunk.len() {
                    write!(f, "  ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
