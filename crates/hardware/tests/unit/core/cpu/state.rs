//! # CPU State Tests
//!
//! Construction from configuration, snapshots and their rendering.

use pretty_assertions::assert_eq;

use rv32_core::config::Config;
use rv32_core::core::Cpu;
use rv32_core::inspect;

#[test]
fn test_new_cpu_is_running_at_start_pc() {
    let cpu = Cpu::new(0x100);
    assert_eq!(cpu.pc, 0x100);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.snapshot(), [0; 32]);
    assert!(cpu.stats.is_clean());
}

#[test]
fn test_with_config_applies_general_and_isa_sections() {
    let mut config = Config::default();
    config.general.start_pc = 0x40;
    config.general.trace_instructions = true;
    config.isa.hardwire_zero = true;

    let cpu = Cpu::with_config(&config);

    assert_eq!(cpu.pc, 0x40);
    assert!(cpu.trace);
    assert!(cpu.regs.hardwire_zero());
}

#[test]
fn test_inspect_does_not_mutate() {
    let mut cpu = Cpu::new(8);
    cpu.regs.write(3, -7);
    let before = cpu.clone();

    let snap = inspect(&cpu);

    assert_eq!(cpu, before);
    assert_eq!(snap.pc, 8);
    assert_eq!(snap.reg(3), -7);
    assert_eq!(snap.reg(35), -7);
    assert!(!snap.halted);
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut cpu = Cpu::new(4);
    cpu.regs.write(1, 5);

    let value = serde_json::to_value(inspect(&cpu)).unwrap();

    assert_eq!(value["pc"], 4);
    assert_eq!(value["halted"], false);
    assert_eq!(value["regs"].as_array().map(Vec::len), Some(32));
    assert_eq!(value["regs"][1], 5);
}

#[test]
fn test_snapshot_display_lists_every_register() {
    let mut cpu = Cpu::new(0x10);
    cpu.regs.write(2, -1);

    let text = inspect(&cpu).to_string();

    assert!(text.starts_with("pc = 0x00000010 (running)"));
    assert!(text.contains("x2/sp = 0xffffffff"));
    assert!(text.contains("x31/t6 = 0x00000000"));
    assert_eq!(text.lines().count(), 1 + 32 / 4);
}
