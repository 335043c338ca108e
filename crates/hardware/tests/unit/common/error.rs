//! # Error and Trap Tests
//!
//! This module contains unit tests for trap display strings and the split
//! between recoverable and fatal traps.

use rstest::rstest;

use rv32_core::common::{Trap, Width};
use rv32_core::isa::instruction::OpcodeClass;

#[test]
fn test_trap_illegal_instruction_display() {
    let trap = Trap::IllegalInstruction {
        pc: 0x40,
        raw: 0x0000_007F,
    };
    let text = format!("{trap}");
    assert!(text.contains("IllegalInstruction"));
    assert!(text.contains("0x0000007f"));
    assert!(text.contains("0x40"));
}

#[test]
fn test_trap_unsupported_function_display_names_class() {
    let trap = Trap::UnsupportedFunction {
        pc: 0,
        raw: 0x0000_4033,
        class: OpcodeClass::OpReg,
    };
    let text = trap.to_string();
    assert!(text.contains("UnsupportedFunction"));
    assert!(text.contains("op"));
}

#[test]
fn test_trap_load_access_fault_display() {
    let trap = Trap::LoadAccessFault {
        addr: 0xCAFE_BABE,
        width: Width::Half,
        pc: None,
    };
    assert_eq!(trap.to_string(), "LoadAccessFault(0xcafebabe, half)");
}

#[test]
fn test_trap_store_access_fault_display() {
    let trap = Trap::StoreAccessFault {
        addr: 0x1000,
        width: Width::Word,
        pc: Some(0x24),
    };
    assert_eq!(trap.to_string(), "StoreAccessFault(0x1000, word) at pc 0x24");
}

#[rstest]
#[case(Trap::IllegalInstruction { pc: 0, raw: 0 }, false)]
#[case(Trap::UnsupportedFunction { pc: 0, raw: 0, class: OpcodeClass::Branch }, false)]
#[case(Trap::InstructionAddressMisaligned(2), true)]
#[case(Trap::InstructionAccessFault(0x40_0000), true)]
#[case(Trap::LoadAccessFault { addr: 0, width: Width::Byte, pc: None }, true)]
#[case(Trap::StoreAccessFault { addr: 0, width: Width::Byte, pc: None }, true)]
#[case(Trap::AllocationFailed { capacity: 1 }, true)]
#[case(Trap::InvalidCapacity(0), true)]
fn test_trap_severity(#[case] trap: Trap, #[case] fatal: bool) {
    assert_eq!(trap.is_fatal(), fatal, "{trap}");
}

#[test]
fn test_trap_pc_reported_for_instruction_faults() {
    assert_eq!(Trap::IllegalInstruction { pc: 8, raw: 0 }.pc(), Some(8));
    assert_eq!(Trap::InstructionAddressMisaligned(6).pc(), Some(6));
    assert_eq!(
        Trap::LoadAccessFault {
            addr: 8,
            width: Width::Word,
            pc: None,
        }
        .pc(),
        None
    );
}

#[test]
fn test_at_pc_tags_memory_faults_only() {
    let load = Trap::LoadAccessFault {
        addr: 0x100,
        width: Width::Byte,
        pc: None,
    }
    .at_pc(0x40);
    assert_eq!(load.pc(), Some(0x40));
    assert_eq!(load.to_string(), "LoadAccessFault(0x100, byte) at pc 0x40");

    let store = Trap::StoreAccessFault {
        addr: 0x100,
        width: Width::Half,
        pc: None,
    }
    .at_pc(0x8);
    assert_eq!(store.pc(), Some(0x8));

    assert_eq!(
        Trap::InvalidCapacity(0).at_pc(0x40),
        Trap::InvalidCapacity(0)
    );
}

#[test]
fn test_trap_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&Trap::InvalidCapacity(0));
}
