//! Trap definitions.
//!
//! This module defines the single fault channel of the interpreter. It provides:
//! 1. **Trap Representation:** Every decode, execute, fetch, memory and construction fault.
//! 2. **Severity:** Whether a trap only skips the current instruction or ends the run.
//! 3. **Error Handling:** Integration with standard Rust error traits via `thiserror`.

use thiserror::Error;

use super::data::Width;
use crate::isa::instruction::OpcodeClass;

/// Faults raised while building, loading or running the interpreter.
///
/// Recoverable traps (`IllegalInstruction`, `UnsupportedFunction`) are recorded
/// in the run statistics and execution continues at `pc + 4`. All other traps
/// are fatal and are returned to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Trap {
    /// Illegal instruction: the opcode selector (bits 0-6) matches no known class.
    #[error("IllegalInstruction({raw:#010x}) at pc {pc:#x}")]
    IllegalInstruction {
        /// Address of the offending instruction.
        pc: u32,
        /// Raw instruction encoding.
        raw: u32,
    },

    /// A known opcode class paired with a `funct3`/`funct7` selector that is not modelled.
    #[error("UnsupportedFunction({raw:#010x}, {class}) at pc {pc:#x}")]
    UnsupportedFunction {
        /// Address of the offending instruction.
        pc: u32,
        /// Raw instruction encoding.
        raw: u32,
        /// Opcode class the instruction decoded to.
        class: OpcodeClass,
    },

    /// Instruction address misaligned: the PC is not a multiple of 4.
    #[error("InstructionAddressMisaligned({0:#x})")]
    InstructionAddressMisaligned(u32),

    /// Instruction fetch outside of memory.
    #[error("InstructionAccessFault({0:#x})")]
    InstructionAccessFault(u32),

    /// Load outside of memory.
    #[error("LoadAccessFault({addr:#x}, {width}){}", pc_suffix(*.pc))]
    LoadAccessFault {
        /// First byte address of the access.
        addr: u32,
        /// Width of the access.
        width: Width,
        /// Address of the instruction, when raised by `execute`.
        pc: Option<u32>,
    },

    /// Store outside of memory.
    #[error("StoreAccessFault({addr:#x}, {width}){}", pc_suffix(*.pc))]
    StoreAccessFault {
        /// First byte address of the access.
        addr: u32,
        /// Width of the access.
        width: Width,
        /// Address of the instruction, when raised by `execute`.
        pc: Option<u32>,
    },

    /// The memory backing store could not be allocated.
    #[error("AllocationFailed({capacity} bytes)")]
    AllocationFailed {
        /// Requested capacity in bytes.
        capacity: usize,
    },

    /// Requested capacity is zero or larger than the 32-bit address space.
    #[error("InvalidCapacity({0} bytes)")]
    InvalidCapacity(usize),
}

impl Trap {
    /// Returns `true` if the trap ends the run rather than the current instruction.
    pub const fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::IllegalInstruction { .. } | Self::UnsupportedFunction { .. }
        )
    }

    /// Address of the instruction that raised the trap, when known.
    pub const fn pc(&self) -> Option<u32> {
        match self {
            Self::IllegalInstruction { pc, .. } | Self::UnsupportedFunction { pc, .. } => {
                Some(*pc)
            }
            Self::InstructionAddressMisaligned(pc) | Self::InstructionAccessFault(pc) => Some(*pc),
            Self::LoadAccessFault { pc, .. } | Self::StoreAccessFault { pc, .. } => *pc,
            _ => None,
        }
    }

    /// Attaches the address of the faulting instruction to a memory access fault.
    ///
    /// Other traps are returned unchanged.
    #[must_use]
    pub fn at_pc(self, pc: u32) -> Self {
        match self {
            Self::LoadAccessFault { addr, width, .. } => Self::LoadAccessFault {
                addr,
                width,
                pc: Some(pc),
            },
            Self::StoreAccessFault { addr, width, .. } => Self::StoreAccessFault {
                addr,
                width,
                pc: Some(pc),
            },
            other => other,
        }
    }
}

/// Suffix naming the instruction address, if known.
fn pc_suffix(pc: Option<u32>) -> String {
    pc.map(|pc| format!(" at pc {pc:#x}")).unwrap_or_default()
}
