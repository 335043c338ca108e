//! Run statistics collection and reporting.
//!
//! This module tracks what the interpreter did during a run. It provides:
//! 1. **Retirement:** Number of instructions that completed.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump, upper-immediate, system).
//! 3. **Control flow:** Conditional branches taken.
//! 4. **Faults:** Count of recoverable faults and a bounded log of the most recent ones.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

use crate::common::Trap;
use crate::common::constants::FAULT_LOG_CAPACITY;
use crate::isa::instruction::OpcodeClass;

/// Run statistics structure.
///
/// The fault counters are the unified reporting channel for recoverable
/// faults: a run that halts with `faults == 0` executed only supported
/// instructions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Number of instructions that completed (faulting instructions excluded).
    pub instructions_retired: u64,

    /// Count of register-register and register-immediate ALU instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branches retired.
    pub inst_branch: u64,
    /// Count of JAL/JALR instructions retired.
    pub inst_jump: u64,
    /// Count of LUI/AUIPC instructions retired.
    pub inst_upper: u64,
    /// Count of system (EBREAK) instructions retired.
    pub inst_system: u64,

    /// Number of conditional branches whose condition held.
    pub branches_taken: u64,

    /// Number of recoverable faults (illegal or unsupported instructions) skipped.
    pub faults: u64,
    /// Most recent recoverable faults, oldest first.
    #[serde(skip)]
    pub fault_log: VecDeque<Trap>,
}

impl RunStats {
    /// Records a retired instruction of `class`.
    pub const fn record(&mut self, class: OpcodeClass) {
        self.instructions_retired += 1;
        match class {
            OpcodeClass::OpReg | OpcodeClass::OpImm => self.inst_alu += 1,
            OpcodeClass::Load => self.inst_load += 1,
            OpcodeClass::Store => self.inst_store += 1,
            OpcodeClass::Branch => self.inst_branch += 1,
            OpcodeClass::Jal | OpcodeClass::Jalr => self.inst_jump += 1,
            OpcodeClass::Lui | OpcodeClass::Auipc => self.inst_upper += 1,
            OpcodeClass::Ebreak => self.inst_system += 1,
            OpcodeClass::Unknown(_) => {}
        }
    }

    /// Records a recoverable fault, evicting the oldest log entry when full.
    pub fn record_fault(&mut self, trap: Trap) {
        self.faults += 1;
        if self.fault_log.len() == FAULT_LOG_CAPACITY {
            let _ = self.fault_log.pop_front();
        }
        self.fault_log.push_back(trap);
    }

    /// Returns `true` if no recoverable fault has been recorded.
    pub const fn is_clean(&self) -> bool {
        self.faults == 0
    }

    /// Most recent recoverable fault, if any.
    pub fn last_fault(&self) -> Option<&Trap> {
        self.fault_log.back()
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "  op.alu                 {}", self.inst_alu)?;
        writeln!(f, "  op.load                {}", self.inst_load)?;
        writeln!(f, "  op.store               {}", self.inst_store)?;
        writeln!(
            f,
            "  op.branch              {} ({} taken)",
            self.inst_branch, self.branches_taken
        )?;
        writeln!(f, "  op.jump                {}", self.inst_jump)?;
        writeln!(f, "  op.upper               {}", self.inst_upper)?;
        writeln!(f, "  op.system              {}", self.inst_system)?;
        write!(f, "faults                   {}", self.faults)
    }
}
