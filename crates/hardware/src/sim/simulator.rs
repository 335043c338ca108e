//! Execution Loop.
//!
//! This module drives the fetch-decode-execute cycle. It provides:
//! 1. **State construction:** `create_state` allocates a fresh CPU and memory.
//! 2. **Stepping:** `step` fetches at the PC, decodes and executes one instruction.
//! 3. **Running:** `run` steps until the CPU halts or an optional step bound is hit.
//! 4. **Simulator:** An owner of both halves, built from a `Config`.

use std::path::Path;

use tracing::{debug, trace};

use super::loader::{self, LoadError};
use crate::common::Trap;
use crate::common::constants::INSTRUCTION_ALIGN_MASK;
use crate::config::Config;
use crate::core::cpu::execution::execute;
use crate::core::{Cpu, CpuSnapshot};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;
use crate::soc::Memory;
use crate::stats::RunStats;

/// Outcome of a single `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction was processed and the CPU is still running.
    Running,
    /// The CPU is halted, either by this step or before it.
    Halted,
}

/// Reason a `run` returned without a fatal fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunExit {
    /// A debug-break halted the CPU.
    Halted,
    /// The step bound was reached; the state is intact and can be resumed.
    StepLimit,
}

/// Allocates a running CPU at PC 0 and a zeroed memory of `capacity` bytes.
///
/// # Errors
///
/// `Trap::InvalidCapacity` or `Trap::AllocationFailed` if the memory cannot be created.
pub fn create_state(capacity: usize) -> Result<(Cpu, Memory), Trap> {
    let mem = Memory::new(capacity)?;
    Ok((Cpu::default(), mem))
}

/// Performs one fetch-decode-execute cycle.
///
/// A halted CPU is left untouched and reports `StepOutcome::Halted`.
///
/// # Errors
///
/// `Trap::InstructionAddressMisaligned` if the PC is not 4-byte aligned,
/// `Trap::InstructionAccessFault` if the fetch is outside memory, or the
/// load/store access fault raised by the instruction. State is unchanged
/// when an error is returned.
pub fn step(cpu: &mut Cpu, mem: &mut Memory) -> Result<StepOutcome, Trap> {
    if cpu.halted {
        return Ok(StepOutcome::Halted);
    }

    let pc = cpu.pc;
    if pc & INSTRUCTION_ALIGN_MASK != 0 {
        return Err(Trap::InstructionAddressMisaligned(pc));
    }

    let raw = mem.fetch(pc)?;
    let inst = decode(raw);

    if cpu.trace {
        trace!(
            pc = format_args!("{pc:#010x}"),
            raw = format_args!("{raw:#010x}"),
            "{}",
            disassemble(raw)
        );
    }

    execute(cpu, mem, &inst)?;

    Ok(if cpu.halted {
        StepOutcome::Halted
    } else {
        StepOutcome::Running
    })
}

/// Steps until the CPU halts or `max_steps` steps have been taken.
///
/// `None` runs without a bound. A CPU that is already halted returns
/// `RunExit::Halted` immediately.
///
/// # Errors
///
/// The first fatal trap raised by `step`.
pub fn run(cpu: &mut Cpu, mem: &mut Memory, max_steps: Option<u64>) -> Result<RunExit, Trap> {
    debug!(pc = format_args!("{:#x}", cpu.pc), ?max_steps, "run started");

    let mut steps: u64 = 0;
    let exit = loop {
        if cpu.halted {
            break RunExit::Halted;
        }
        if max_steps.is_some_and(|limit| steps >= limit) {
            break RunExit::StepLimit;
        }
        let _ = step(cpu, mem).inspect_err(|trap| {
            debug!(%trap, steps, "run aborted");
        })?;
        steps += 1;
    };

    debug!(
        ?exit,
        steps,
        pc = format_args!("{:#x}", cpu.pc),
        faults = cpu.stats.faults,
        "run finished"
    );
    Ok(exit)
}

/// Returns a read-only snapshot of the program counter and registers.
pub fn inspect(cpu: &Cpu) -> CpuSnapshot {
    cpu.snapshot()
}

/// Top-level interpreter: CPU architectural state + memory.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, PC, halt flag, stats).
    pub cpu: Cpu,
    /// Flat memory holding program and data.
    pub memory: Memory,
    load_base: u32,
    max_steps: Option<u64>,
}

impl Simulator {
    /// Creates a simulator with the memory, start PC and ISA options of `config`.
    ///
    /// # Errors
    ///
    /// `Trap::InvalidCapacity` or `Trap::AllocationFailed` if the memory cannot be created.
    pub fn new(config: &Config) -> Result<Self, Trap> {
        let memory = Memory::new(config.memory.capacity)?;
        debug!(
            capacity = config.memory.capacity,
            start_pc = format_args!("{:#x}", config.general.start_pc),
            hardwire_zero = config.isa.hardwire_zero,
            "simulator created"
        );
        Ok(Self {
            cpu: Cpu::with_config(config),
            memory,
            load_base: config.general.load_base,
            max_steps: config.general.max_steps,
        })
    }

    /// Writes `words` into memory starting at `base`.
    ///
    /// # Errors
    ///
    /// `Trap::StoreAccessFault` if the program does not fit.
    pub fn load_program(&mut self, base: u32, words: &[u32]) -> Result<(), Trap> {
        loader::load_program(&mut self.memory, base, words)
    }

    /// Reads a flat image from `path` and loads it at the configured base.
    ///
    /// Returns the number of words loaded.
    ///
    /// # Errors
    ///
    /// Any `LoadError` from reading the file or placing it in memory.
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let words = loader::load_image(path)?;
        self.load_program(self.load_base, &words)?;
        Ok(words.len())
    }

    /// Performs one fetch-decode-execute cycle.
    ///
    /// # Errors
    ///
    /// The fatal trap raised by the cycle, if any.
    pub fn step(&mut self) -> Result<StepOutcome, Trap> {
        step(&mut self.cpu, &mut self.memory)
    }

    /// Runs until halt or the configured step bound.
    ///
    /// # Errors
    ///
    /// The first fatal trap.
    pub fn run(&mut self) -> Result<RunExit, Trap> {
        run(&mut self.cpu, &mut self.memory, self.max_steps)
    }

    /// Returns a snapshot of the program counter and registers.
    pub fn inspect(&self) -> CpuSnapshot {
        inspect(&self.cpu)
    }

    /// Statistics gathered so far.
    pub const fn stats(&self) -> &RunStats {
        &self.cpu.stats
    }
}
