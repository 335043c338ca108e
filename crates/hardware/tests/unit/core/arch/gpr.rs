//! # General-Purpose Register File Tests
//!
//! Covers initial state, index wrapping, and both `x0` policies.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use rv32_core::core::arch::gpr::Gpr;

#[test]
fn test_registers_start_zero() {
    let gpr = Gpr::new();
    assert_eq!(gpr.snapshot(), [0; 32]);
    assert!(!gpr.hardwire_zero());
}

#[test]
fn test_x0_is_writable_by_default() {
    let mut gpr = Gpr::new();
    gpr.write(0, 42);
    assert_eq!(gpr.read(0), 42);
    assert_eq!(gpr.snapshot()[0], 42);
}

#[test]
fn test_hardwired_x0_ignores_writes() {
    let mut gpr = Gpr::with_hardwired_zero();
    gpr.write(0, 42);
    assert_eq!(gpr.read(0), 0);
    assert_eq!(gpr.snapshot()[0], 0);
    assert!(gpr.hardwire_zero());
}

#[test]
fn test_hardwired_x0_leaves_other_registers_alone() {
    let mut gpr = Gpr::with_hardwired_zero();
    gpr.write(1, -1);
    gpr.write(31, i32::MIN);
    assert_eq!(gpr.read(1), -1);
    assert_eq!(gpr.read(31), i32::MIN);
}

#[test]
fn test_index_wraps_modulo_32() {
    let mut gpr = Gpr::new();
    gpr.write(33, 7);
    assert_eq!(gpr.read(1), 7);
    assert_eq!(gpr.read(65), 7);
}

proptest! {
    #[test]
    fn write_then_read_returns_value(idx in 1usize..32, val in any::<i32>()) {
        let mut gpr = Gpr::new();
        gpr.write(idx, val);
        prop_assert_eq!(gpr.read(idx), val);
        for other in (0..32).filter(|&r| r != idx) {
            prop_assert_eq!(gpr.read(other), 0);
        }
    }
}
