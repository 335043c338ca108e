//! Instruction Execution.
//!
//! This module applies one decoded instruction to the CPU state and memory. It performs the following:
//! 1. **Arithmetic:** ADD/SUB, ADDI, LUI and AUIPC with wrapping 32-bit arithmetic.
//! 2. **Control Flow:** JAL, JALR and BEQ/BNE, all relative to the instruction's own address.
//! 3. **Memory Access:** Zero-extending loads and truncating stores of byte, half and word width.
//! 4. **Fault Reporting:** Unknown opcodes and unsupported function codes are logged,
//!    counted in the run statistics, and skipped.
//!
//! Fatal faults (memory accesses out of bounds) are returned before any
//! architectural state is changed.

use tracing::warn;

use super::Cpu;
use crate::common::{AccessType, INSTRUCTION_SIZE, Trap, Width};
use crate::isa::instruction::{Instruction, OpcodeClass};
use crate::isa::rv32i::{funct3, funct7};
use crate::soc::Memory;

/// Bit mask clearing bit 0 of a `JALR` target.
const JALR_ALIGNMENT_MASK: u32 = !1;

/// Result of the class-specific part of execution.
enum Effect {
    /// Fall through to `pc + 4`.
    Next,
    /// Continue at the given address.
    Jump(u32),
    /// Stop the CPU; the PC keeps pointing at the debug-break.
    Halt,
}

/// Executes a single decoded instruction.
///
/// Executing while the CPU is halted changes nothing.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `mem` - Memory targeted by loads and stores.
/// * `inst` - The decoded instruction; `inst.raw` is used only for reporting.
///
/// # Errors
///
/// Returns `Trap::LoadAccessFault` or `Trap::StoreAccessFault`, tagged with
/// the instruction's address, when the effective address is outside memory. Registers, memory and PC are left
/// untouched in that case. Recoverable faults are not returned; they are
/// recorded in `cpu.stats` and execution continues at `pc + 4`.
pub fn execute(cpu: &mut Cpu, mem: &mut Memory, inst: &Instruction) -> Result<(), Trap> {
    if cpu.halted {
        return Ok(());
    }

    let pc = cpu.pc;
    let next_pc = pc.wrapping_add(INSTRUCTION_SIZE);

    match apply(cpu, mem, inst) {
        Ok(Effect::Next) => {
            cpu.stats.record(inst.class);
            cpu.pc = next_pc;
        }
        Ok(Effect::Jump(target)) => {
            cpu.stats.record(inst.class);
            cpu.pc = target;
        }
        Ok(Effect::Halt) => {
            cpu.stats.record(inst.class);
            cpu.halted = true;
        }
        Err(trap) if !trap.is_fatal() => {
            warn!(%trap, "skipping instruction");
            cpu.stats.record_fault(trap);
            cpu.pc = next_pc;
        }
        Err(trap) => return Err(trap.at_pc(pc)),
    }

    Ok(())
}

/// Performs the class-specific work of `inst` and reports where control goes next.
fn apply(cpu: &mut Cpu, mem: &mut Memory, inst: &Instruction) -> Result<Effect, Trap> {
    let pc = cpu.pc;
    let unsupported = || Trap::UnsupportedFunction {
        pc,
        raw: inst.raw,
        class: inst.class,
    };

    match inst.class {
        OpcodeClass::OpReg => {
            if inst.funct3 != funct3::ADD_SUB {
                return Err(unsupported());
            }
            let a = cpu.regs.read(inst.rs1);
            let b = cpu.regs.read(inst.rs2);
            let val = match inst.funct7 {
                funct7::DEFAULT => a.wrapping_add(b),
                funct7::SUB => a.wrapping_sub(b),
                _ => return Err(unsupported()),
            };
            cpu.regs.write(inst.rd, val);
            Ok(Effect::Next)
        }

        OpcodeClass::OpImm => {
            if inst.funct3 != funct3::ADDI {
                return Err(unsupported());
            }
            let val = cpu.regs.read(inst.rs1).wrapping_add(inst.imm);
            cpu.regs.write(inst.rd, val);
            Ok(Effect::Next)
        }

        OpcodeClass::Lui => {
            cpu.regs.write(inst.rd, inst.imm);
            Ok(Effect::Next)
        }

        OpcodeClass::Auipc => {
            cpu.regs.write(inst.rd, pc.wrapping_add(inst.imm as u32) as i32);
            Ok(Effect::Next)
        }

        OpcodeClass::Jal => {
            let target = pc.wrapping_add(inst.imm as u32);
            cpu.regs.write(inst.rd, pc.wrapping_add(INSTRUCTION_SIZE) as i32);
            Ok(Effect::Jump(target))
        }

        OpcodeClass::Jalr => {
            let target = pc.wrapping_add(inst.imm as u32) & JALR_ALIGNMENT_MASK;
            cpu.regs.write(inst.rd, pc.wrapping_add(INSTRUCTION_SIZE) as i32);
            Ok(Effect::Jump(target))
        }

        OpcodeClass::Branch => {
            let a = cpu.regs.read(inst.rs1);
            let b = cpu.regs.read(inst.rs2);
            let taken = match inst.funct3 {
                funct3::BEQ => a == b,
                funct3::BNE => a != b,
                _ => return Err(unsupported()),
            };
            if taken {
                cpu.stats.branches_taken += 1;
                Ok(Effect::Jump(pc.wrapping_add(inst.imm as u32)))
            } else {
                Ok(Effect::Next)
            }
        }

        OpcodeClass::Load => {
            let width = load_width(inst.funct3).ok_or_else(unsupported)?;
            let addr = effective_address(cpu, inst);
            let val = mem.read(addr, width, AccessType::Read)?;
            cpu.regs.write(inst.rd, val as i32);
            Ok(Effect::Next)
        }

        OpcodeClass::Store => {
            let width = store_width(inst.funct3).ok_or_else(unsupported)?;
            let addr = effective_address(cpu, inst);
            let val = cpu.regs.read(inst.rs2) as u32 & width.mask();
            mem.write(addr, width, val)?;
            Ok(Effect::Next)
        }

        OpcodeClass::Ebreak => {
            if inst.funct3 != funct3::PRIV {
                return Err(unsupported());
            }
            Ok(Effect::Halt)
        }

        OpcodeClass::Unknown(_) => Err(Trap::IllegalInstruction { pc, raw: inst.raw }),
    }
}

/// Maps a load `funct3` to its access width.
const fn load_width(f3: u32) -> Option<Width> {
    match f3 {
        funct3::LB => Some(Width::Byte),
        funct3::LH => Some(Width::Half),
        funct3::LW => Some(Width::Word),
        _ => None,
    }
}

/// Maps a store `funct3` to its access width.
const fn store_width(f3: u32) -> Option<Width> {
    match f3 {
        funct3::SB => Some(Width::Byte),
        funct3::SH => Some(Width::Half),
        funct3::SW => Some(Width::Word),
        _ => None,
    }
}

/// Computes `rs1 + imm` as an unsigned byte address, wrapping on overflow.
const fn effective_address(cpu: &Cpu, inst: &Instruction) -> u32 {
    (cpu.regs.read(inst.rs1) as u32).wrapping_add(inst.imm as u32)
}
