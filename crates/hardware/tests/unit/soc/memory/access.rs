//! # Memory Access Tests
//!
//! Little-endian layout, width handling and bounds checking of the flat memory.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use rv32_core::common::{AccessType, Trap, Width};
use rv32_core::soc::Memory;

const SIZE: usize = 0x100;

fn memory() -> Memory {
    Memory::new(SIZE).unwrap()
}

#[test]
fn test_new_memory_is_zeroed() {
    let mem = memory();
    assert_eq!(mem.capacity(), SIZE);
    for addr in (0..SIZE as u32).step_by(4) {
        assert_eq!(mem.read_u32(addr).unwrap(), 0);
    }
}

#[test]
fn test_word_round_trip() {
    let mut mem = memory();
    mem.write_u32(0x10, 0x1234_5678).unwrap();
    assert_eq!(mem.read_u32(0x10).unwrap(), 0x1234_5678);
    assert_eq!(mem.fetch(0x10).unwrap(), 0x1234_5678);
}

#[test]
fn test_words_are_little_endian() {
    let mut mem = memory();
    mem.write_u32(0, 0x1122_3344).unwrap();
    assert_eq!(mem.read(0, Width::Byte, AccessType::Read).unwrap(), 0x44);
    assert_eq!(mem.read(1, Width::Byte, AccessType::Read).unwrap(), 0x33);
    assert_eq!(mem.read(2, Width::Half, AccessType::Read).unwrap(), 0x1122);
}

#[test]
fn test_byte_write_keeps_low_8_bits() {
    let mut mem = memory();
    mem.write(5, Width::Byte, 0xABCD_EF12).unwrap();
    assert_eq!(mem.read(5, Width::Byte, AccessType::Read).unwrap(), 0x12);
    assert_eq!(mem.read(4, Width::Word, AccessType::Read).unwrap(), 0x0000_1200);
}

#[test]
fn test_unaligned_word_access_is_allowed() {
    let mut mem = memory();
    mem.write_u32(3, 0xCAFE_F00D).unwrap();
    assert_eq!(mem.read_u32(3).unwrap(), 0xCAFE_F00D);
}

#[rstest]
#[case(Width::Byte, SIZE as u32 - 1, true)]
#[case(Width::Byte, SIZE as u32, false)]
#[case(Width::Half, SIZE as u32 - 2, true)]
#[case(Width::Half, SIZE as u32 - 1, false)]
#[case(Width::Word, SIZE as u32 - 4, true)]
#[case(Width::Word, SIZE as u32 - 3, false)]
#[case(Width::Word, u32::MAX, false)]
fn test_contains(#[case] width: Width, #[case] addr: u32, #[case] inside: bool) {
    assert_eq!(memory().contains(addr, width), inside);
}

#[rstest]
#[case(AccessType::Fetch, Trap::InstructionAccessFault(SIZE as u32))]
#[case(AccessType::Read, Trap::LoadAccessFault { addr: SIZE as u32, width: Width::Word, pc: None })]
fn test_read_at_capacity_faults(#[case] access: AccessType, #[case] expected: Trap) {
    let mem = memory();
    assert_eq!(mem.read(SIZE as u32, Width::Word, access), Err(expected));
}

#[test]
fn test_write_past_end_faults_without_partial_write() {
    let mut mem = memory();
    let before = mem.clone();

    let err = mem.write_u32(SIZE as u32 - 2, 0xFFFF_FFFF).unwrap_err();

    assert_eq!(
        err,
        Trap::StoreAccessFault {
            addr: SIZE as u32 - 2,
            width: Width::Word,
            pc: None,
        }
    );
    assert_eq!(mem, before);
}

#[test]
fn test_highest_address_does_not_wrap() {
    let mem = memory();
    assert!(mem.read(u32::MAX, Width::Word, AccessType::Read).is_err());
    assert!(mem.fetch(u32::MAX - 3).is_err());
}

#[test]
fn test_write_bytes_copies_image() {
    let mut mem = memory();
    mem.write_bytes(0x20, &[1, 2, 3, 4, 5]).unwrap();
    assert_eq!(mem.read_u32(0x20).unwrap(), 0x0403_0201);
    assert_eq!(mem.read(0x24, Width::Byte, AccessType::Read).unwrap(), 5);
}

#[test]
fn test_write_bytes_past_end_writes_nothing() {
    let mut mem = memory();
    let before = mem.clone();

    let err = mem.write_bytes(SIZE as u32 - 2, &[9; 4]).unwrap_err();

    assert_eq!(
        err,
        Trap::StoreAccessFault {
            addr: SIZE as u32,
            width: Width::Byte,
            pc: None,
        }
    );
    assert_eq!(mem, before);
}

proptest! {
    #[test]
    fn word_round_trips_anywhere_in_bounds(addr in 0u32..(SIZE as u32 - 3), val in any::<u32>()) {
        let mut mem = memory();
        mem.write_u32(addr, val).unwrap();
        prop_assert_eq!(mem.read_u32(addr).unwrap(), val);
    }

    #[test]
    fn out_of_bounds_never_panics(addr in (SIZE as u32 - 3)..=u32::MAX, val in any::<u32>()) {
        let mut mem = memory();
        prop_assert!(mem.read_u32(addr).is_err());
        prop_assert!(mem.write_u32(addr, val).is_err());
    }
}
