//! Instruction words, opcode classes and the decoded form.
//!
//! `InstructionBits` reads raw fields, `OpcodeClass` names the ten modelled
//! selectors plus `Unknown`, and `Instruction` is what `decode` returns.

use std::fmt;

use serde::Serialize;

use crate::isa::rv32i::opcodes;

/// Width mask of the 7-bit opcode selector.
pub const OPCODE_MASK: u32 = 0x7F;
/// Width mask of a 5-bit register index.
const REG_MASK: u32 = 0x1F;
/// Width mask of the 3-bit `funct3` field.
const FUNCT3_MASK: u32 = 0x7;
/// Width mask of the 7-bit `funct7` field.
const FUNCT7_MASK: u32 = 0x7F;

const RD_SHIFT: u32 = 7;
const FUNCT3_SHIFT: u32 = 12;
const RS1_SHIFT: u32 = 15;
const RS2_SHIFT: u32 = 20;
const FUNCT7_SHIFT: u32 = 25;

/// Raw field access on an encoded instruction word.
///
/// Fields are read at their fixed positions regardless of format; the
/// decoder decides which of them are meaningful.
pub trait InstructionBits {
    /// Opcode selector, bits 0-6.
    fn opcode(&self) -> u32;
    /// Destination register, bits 7-11.
    fn rd(&self) -> usize;
    /// First source register, bits 15-19.
    fn rs1(&self) -> usize;
    /// Second source register, bits 20-24.
    fn rs2(&self) -> usize;
    /// Minor function code, bits 12-14.
    fn funct3(&self) -> u32;
    /// Major function code, bits 25-31 (ADD vs SUB).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// Encoding format of an instruction, which fixes its field layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    /// Register-register: `funct7 | rs2 | rs1 | funct3 | rd | opcode`.
    R,
    /// Immediate: `imm[11:0] | rs1 | funct3 | rd | opcode`.
    I,
    /// Store: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
    S,
    /// Branch: `imm[12|10:5] | rs2 | rs1 | funct3 | imm[4:1|11] | opcode`.
    B,
    /// Upper immediate: `imm[31:12] | rd | opcode`.
    U,
    /// Jump: `imm[20|10:1|11|19:12] | rd | opcode`.
    J,
    /// No layout; only the raw word is meaningful.
    Unknown,
}

/// Primary opcode class selected by bits 0-6 of an instruction.
///
/// The set is closed: every 7-bit selector maps to exactly one variant, with
/// `Unknown` carrying any selector the interpreter does not model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum OpcodeClass {
    /// Register-register ALU operations (ADD, SUB).
    OpReg,
    /// Register-immediate ALU operations (ADDI).
    OpImm,
    /// Jump and link.
    Jal,
    /// Jump and link register.
    Jalr,
    /// Conditional branch (BEQ, BNE).
    Branch,
    /// Memory load (LB, LH, LW).
    Load,
    /// Memory store (SB, SH, SW).
    Store,
    /// Debug break; halts the interpreter.
    Ebreak,
    /// Load upper immediate.
    Lui,
    /// Add upper immediate to PC.
    Auipc,
    /// Any other selector value.
    Unknown(u32),
}

impl OpcodeClass {
    /// Maps a 7-bit opcode selector to its class.
    ///
    /// Only the low 7 bits of `selector` are considered.
    pub const fn from_selector(selector: u32) -> Self {
        match selector & OPCODE_MASK {
            opcodes::OP_REG => Self::OpReg,
            opcodes::OP_IMM => Self::OpImm,
            opcodes::OP_JAL => Self::Jal,
            opcodes::OP_JALR => Self::Jalr,
            opcodes::OP_BRANCH => Self::Branch,
            opcodes::OP_LOAD => Self::Load,
            opcodes::OP_STORE => Self::Store,
            opcodes::OP_SYSTEM => Self::Ebreak,
            opcodes::OP_LUI => Self::Lui,
            opcodes::OP_AUIPC => Self::Auipc,
            other => Self::Unknown(other),
        }
    }

    /// Returns the encoding format shared by instructions of this class.
    pub const fn format(self) -> Format {
        match self {
            Self::OpReg => Format::R,
            Self::OpImm | Self::Jalr | Self::Ebreak | Self::Load => Format::I,
            Self::Store => Format::S,
            Self::Branch => Format::B,
            Self::Lui | Self::Auipc => Format::U,
            Self::Jal => Format::J,
            Self::Unknown(_) => Format::Unknown,
        }
    }

    /// Returns `true` for the `Unknown` variant.
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for OpcodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpReg => write!(f, "op"),
            Self::OpImm => write!(f, "op-imm"),
            Self::Jal => write!(f, "jal"),
            Self::Jalr => write!(f, "jalr"),
            Self::Branch => write!(f, "branch"),
            Self::Load => write!(f, "load"),
            Self::Store => write!(f, "store"),
            Self::Ebreak => write!(f, "ebreak"),
            Self::Lui => write!(f, "lui"),
            Self::Auipc => write!(f, "auipc"),
            Self::Unknown(sel) => write!(f, "unknown({sel:#09b})"),
        }
    }
}

/// A decoded instruction.
///
/// Fields outside the class's format are zero; `imm` is already sign-extended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Encoded word, kept for fault reports and traces.
    pub raw: u32,
    /// Opcode class selected by bits 0-6.
    pub class: OpcodeClass,
    /// Destination register.
    pub rd: usize,
    /// First source register.
    pub rs1: usize,
    /// Second source register.
    pub rs2: usize,
    /// Minor function code.
    pub funct3: u32,
    /// Major function code.
    pub funct7: u32,
    /// Immediate, reconstructed per format.
    pub imm: i32,
}

impl Instruction {
    /// Instruction with every field zero except the raw word and class.
    pub const fn bare(raw: u32, class: OpcodeClass) -> Self {
        Self {
            raw,
            class,
            rd: 0,
            rs1: 0,
            rs2: 0,
            funct3: 0,
            funct7: 0,
            imm: 0,
        }
    }
}
