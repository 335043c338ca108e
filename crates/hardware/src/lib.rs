//! RISC-V RV32 reference interpreter library.
//!
//! This crate implements a small fetch-decode-execute interpreter for a subset
//! of the 32-bit RISC-V base integer ISA with the following:
//! 1. **Core:** Register file, program counter, and per-instruction execution semantics.
//! 2. **Memory:** A flat, bounds-checked, little-endian byte store.
//! 3. **ISA:** Total decoding of every 32-bit word, immediates per format, and a disassembler.
//! 4. **Simulation:** Program loader, execution loop, configuration, and statistics.
//!
//! # Example
//!
//! ```
//! use rv32_core::{create_state, inspect, load_program, run, RunExit};
//!
//! let (mut cpu, mut mem) = create_state(0x1000).unwrap();
//! // addi x1, x0, 5; addi x2, x1, 7; ebreak
//! load_program(&mut mem, 0, &[0x0050_0093, 0x0070_8113, 0x0010_0073]).unwrap();
//!
//! assert_eq!(run(&mut cpu, &mut mem, None).unwrap(), RunExit::Halted);
//! let snap = inspect(&cpu);
//! assert_eq!(snap.regs[2], 12);
//! assert_eq!(snap.pc, 8);
//! ```

/// Common types and constants (widths, access types, traps).
pub mod common;
/// Interpreter configuration (defaults and hierarchical config structures).
pub mod config;
/// CPU core (register file, state, execution).
pub mod core;
/// Instruction set (decode, instruction, ABI names, RV32I codes, disassembler).
pub mod isa;
/// Program loader and execution loop.
pub mod sim;
/// Memory subsystem.
pub mod soc;
/// Run statistics collection and reporting.
pub mod stats;

/// Fault type shared by decoding, execution, fetch, memory and construction.
pub use crate::common::Trap;
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Execute a single decoded instruction.
pub use crate::core::cpu::execution::execute;
/// CPU state and its read-only snapshot.
pub use crate::core::{Cpu, CpuSnapshot};
/// Decode a 32-bit word into an `Instruction`.
pub use crate::isa::decode::decode;
/// Render a 32-bit word as assembly text.
pub use crate::isa::disasm::disassemble;
/// Decoded instruction and its opcode class.
pub use crate::isa::instruction::{Instruction, OpcodeClass};
/// Loader and execution-loop entry points.
pub use crate::sim::{
    LoadError, RunExit, Simulator, StepOutcome, create_state, inspect, load_program, run, step,
};
/// Flat memory.
pub use crate::soc::Memory;
/// Run statistics.
pub use crate::stats::RunStats;
