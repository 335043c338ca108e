//! Instruction Disassembler for the RV32 subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics. Encodings outside
//! the modelled subset render as `unknown` (bad opcode) or with a `??`
//! suffix (known opcode, unsupported function code).
//!
//! # Usage
//!
//! ```
//! use rv32_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513); // ADDI x10, x0, 10
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use crate::isa::abi::name as xreg;
use crate::isa::decode::decode;
use crate::isa::instruction::OpcodeClass;
use crate::isa::rv32i::{funct3, funct7};

/// Disassembles a 32-bit RISC-V instruction into a human-readable string.
///
/// Branch and jump targets are printed as signed byte offsets relative to
/// the instruction's own address; upper immediates as the raw 20-bit field.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    let d = decode(inst);
    let (rd, rs1, rs2, imm) = (xreg(d.rd), xreg(d.rs1), xreg(d.rs2), d.imm);

    match d.class {
        OpcodeClass::OpReg => {
            let mn = match (d.funct3, d.funct7) {
                (funct3::ADD_SUB, funct7::DEFAULT) => "add",
                (funct3::ADD_SUB, funct7::SUB) => "sub",
                _ => "op??",
            };
            format!("{mn} {rd}, {rs1}, {rs2}")
        }
        OpcodeClass::OpImm => {
            let mn = if d.funct3 == funct3::ADDI { "addi" } else { "op-imm??" };
            format!("{mn} {rd}, {rs1}, {imm}")
        }
        OpcodeClass::Load => {
            let mn = match d.funct3 {
                funct3::LB => "lb",
                funct3::LH => "lh",
                funct3::LW => "lw",
                _ => "l??",
            };
            format!("{mn} {rd}, {imm}({rs1})")
        }
        OpcodeClass::Store => {
            let mn = match d.funct3 {
                funct3::SB => "sb",
                funct3::SH => "sh",
                funct3::SW => "sw",
                _ => "s??",
            };
            format!("{mn} {rs2}, {imm}({rs1})")
        }
        OpcodeClass::Branch => {
            let mn = match d.funct3 {
                funct3::BEQ => "beq",
                funct3::BNE => "bne",
                _ => "b??",
            };
            format!("{mn} {rs1}, {rs2}, {imm}")
        }
        OpcodeClass::Lui => format!("lui {rd}, {:#x}", (imm as u32) >> 12),
        OpcodeClass::Auipc => format!("auipc {rd}, {:#x}", (imm as u32) >> 12),
        OpcodeClass::Jal => format!("jal {rd}, {imm}"),
        OpcodeClass::Jalr => format!("jalr {rd}, {imm}"),
        OpcodeClass::Ebreak if d.funct3 == funct3::PRIV => "ebreak".to_string(),
        OpcodeClass::Ebreak => "system??".to_string(),
        OpcodeClass::Unknown(_) => "unknown".to_string(),
    }
}
