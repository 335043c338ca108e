//! RISC-V Instruction Decoder.
//!
//! This module handles the decoding of 32-bit RISC-V instruction encodings into
//! a structured `Instruction`. It classifies the opcode, extracts the register and
//! function-code fields used by the instruction's format, and reconstructs the
//! sign-extended immediate for every format (R, I, S, B, U, J).
//!
//! Decoding is total: a selector that matches no known class yields an
//! `OpcodeClass::Unknown` instruction, which the executor reports as a fault.

use crate::isa::instruction::{Format, Instruction, InstructionBits, OpcodeClass};

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Width of the I- and S-type immediates.
const IMM12_BITS: u32 = 12;
/// Width of the B-type immediate, including the implicit zero bit.
const IMM13_BITS: u32 = 13;
/// Width of the J-type immediate, including the implicit zero bit.
const IMM21_BITS: u32 = 21;
/// The U-type immediate keeps its position; the low 12 bits are zero.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// Decodes a RISC-V instruction into its component fields.
///
/// Classifies bits 0-6, then populates only the fields that the class's
/// format defines; all other fields are left at zero.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// An `Instruction` structure containing all extracted instruction fields.
pub fn decode(inst: u32) -> Instruction {
    let class = OpcodeClass::from_selector(inst.opcode());
    let bare = Instruction::bare(inst, class);

    match class.format() {
        Format::R => Instruction {
            rd: inst.rd(),
            funct3: inst.funct3(),
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            funct7: inst.funct7(),
            ..bare
        },
        Format::I => Instruction {
            rd: inst.rd(),
            funct3: inst.funct3(),
            rs1: inst.rs1(),
            imm: decode_i_type_imm(inst),
            ..bare
        },
        Format::S => Instruction {
            funct3: inst.funct3(),
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            imm: decode_s_type_imm(inst),
            ..bare
        },
        Format::B => Instruction {
            funct3: inst.funct3(),
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            imm: decode_b_type_imm(inst),
            ..bare
        },
        Format::U => Instruction {
            rd: inst.rd(),
            imm: decode_u_type_imm(inst),
            ..bare
        },
        Format::J => Instruction {
            rd: inst.rd(),
            imm: decode_j_type_imm(inst),
            ..bare
        },
        Format::Unknown => bare,
    }
}

/// Extracts `len` bits of `inst` starting at bit `lo`.
#[inline(always)]
const fn field(inst: u32, lo: u32, len: u32) -> u32 {
    (inst >> lo) & ((1 << len) - 1)
}

/// I-type immediate: `inst[31:20]`, sign-extended.
///
/// Shared by OP-IMM, JALR, loads and the debug-break.
pub const fn decode_i_type_imm(inst: u32) -> i32 {
    sign_extend(field(inst, 20, 12), IMM12_BITS)
}

/// S-type immediate: `inst[31:25] ++ inst[11:7]`, sign-extended.
pub const fn decode_s_type_imm(inst: u32) -> i32 {
    let imm = (field(inst, 25, 7) << 5) | field(inst, 7, 5);
    sign_extend(imm, IMM12_BITS)
}

/// B-type immediate: a signed, even byte offset.
///
/// `imm[12] = inst[31]`, `imm[11] = inst[7]`, `imm[10:5] = inst[30:25]`,
/// `imm[4:1] = inst[11:8]`.
pub const fn decode_b_type_imm(inst: u32) -> i32 {
    let imm = (field(inst, 31, 1) << 12)
        | (field(inst, 7, 1) << 11)
        | (field(inst, 25, 6) << 5)
        | (field(inst, 8, 4) << 1);
    sign_extend(imm, IMM13_BITS)
}

/// U-type immediate: `inst[31:12]` in place.
pub const fn decode_u_type_imm(inst: u32) -> i32 {
    (inst & U_IMM_MASK) as i32
}

/// J-type immediate: a signed, even byte offset.
///
/// `imm[20] = inst[31]`, `imm[19:12] = inst[19:12]`, `imm[11] = inst[20]`,
/// `imm[10:1] = inst[30:21]`.
pub const fn decode_j_type_imm(inst: u32) -> i32 {
    let imm = (field(inst, 31, 1) << 20)
        | (field(inst, 12, 8) << 12)
        | (field(inst, 20, 1) << 11)
        | (field(inst, 21, 10) << 1);
    sign_extend(imm, IMM21_BITS)
}

/// Sign-extends the low `bits` bits of `val` to 32 bits.
///
/// Bits of `val` above the width are ignored. `bits` must be in `1..=32`.
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
