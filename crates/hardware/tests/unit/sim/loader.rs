//! # Loader Tests
//!
//! Placement of instruction words, image decoding and file access.

use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use rv32_core::common::{Trap, Width};
use rv32_core::sim::loader::{self, LoadError};
use rv32_core::soc::Memory;
use rv32_core::{create_state, load_program};

fn image_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_program_places_consecutive_words() {
    let (_, mut mem) = create_state(0x100).unwrap();

    load_program(&mut mem, 0x10, &[0x1111_1111, 0x2222_2222, 0x3333_3333]).unwrap();

    assert_eq!(mem.fetch(0x10).unwrap(), 0x1111_1111);
    assert_eq!(mem.fetch(0x14).unwrap(), 0x2222_2222);
    assert_eq!(mem.fetch(0x18).unwrap(), 0x3333_3333);
    assert_eq!(mem.fetch(0x1C).unwrap(), 0);
}

#[test]
fn test_load_program_empty_is_noop() {
    let mut mem = Memory::new(0x10).unwrap();
    let before = mem.clone();
    load_program(&mut mem, 0, &[]).unwrap();
    assert_eq!(mem, before);
}

#[test]
fn test_load_program_that_does_not_fit_writes_nothing() {
    let mut mem = Memory::new(0x10).unwrap();
    let before = mem.clone();

    let err = load_program(&mut mem, 0x8, &[1, 2, 3]).unwrap_err();

    assert_eq!(
        err,
        Trap::StoreAccessFault {
            addr: 0x10,
            width: Width::Byte,
            pc: None,
        }
    );
    assert_eq!(mem, before);
}

#[test]
fn test_words_from_bytes_is_little_endian() {
    let words = loader::words_from_bytes(&[0x13, 0x05, 0xA0, 0x00, 0x73, 0x00, 0x10, 0x00]).unwrap();
    assert_eq!(words, vec![0x00A0_0513, 0x0010_0073]);
}

#[test]
fn test_words_from_bytes_rejects_partial_word() {
    let err = loader::words_from_bytes(&[1, 2, 3, 4, 5]).unwrap_err();
    assert!(matches!(err, LoadError::TruncatedImage { len: 5 }));
    assert_eq!(err.to_string(), "image is 5 bytes, not a multiple of 4");
}

#[test]
fn test_load_image_reads_file() {
    let file = image_file(&[0x93, 0x00, 0x50, 0x00]);
    let words = loader::load_image(file.path()).unwrap();
    assert_eq!(words, vec![0x0050_0093]);
}

#[test]
fn test_load_image_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.bin");

    let err = loader::load_image(&missing).unwrap_err();

    assert!(matches!(err, LoadError::Io { ref path, .. } if *path == missing));
}

#[test]
fn test_load_config_parses_json() {
    let file = image_file(br#"{ "memory": { "capacity": 4096 }, "isa": { "hardwire_zero": true } }"#);

    let config = loader::load_config(file.path()).unwrap();

    assert_eq!(config.memory.capacity, 4096);
    assert!(config.isa.hardwire_zero);
    assert_eq!(config.general.start_pc, 0);
}

#[test]
fn test_load_config_rejects_bad_json() {
    let file = image_file(b"{ \"memory\": { \"capacity\": \"big\" } }");
    let err = loader::load_config(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Config(_)));
}

#[test]
fn test_trap_converts_into_load_error() {
    let err: LoadError = Trap::InvalidCapacity(0).into();
    assert_eq!(err.to_string(), "InvalidCapacity(0 bytes)");
}
