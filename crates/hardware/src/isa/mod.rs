//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, and decoding logic for the
//! modelled RV32 base-integer subset: ADD/SUB, ADDI, JAL, JALR, BEQ/BNE,
//! LB/LH/LW, SB/SH/SW, LUI, AUIPC and EBREAK.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for all RISC-V instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode classes, decoded instruction structure and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set (32-bit subset).
pub mod rv32i;
