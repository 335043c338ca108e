//! # Configuration Tests
//!
//! Defaults, partial JSON documents and rejection of malformed input.

use pretty_assertions::assert_eq;

use rv32_core::config::{Config, GeneralConfig, IsaConfig, MemoryConfig};

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(
        config.general,
        GeneralConfig {
            trace_instructions: false,
            start_pc: 0,
            load_base: 0,
            max_steps: None,
        }
    );
    assert_eq!(config.memory, MemoryConfig { capacity: 0x40_0000 });
    assert_eq!(config.isa, IsaConfig { hardwire_zero: false });
}

#[test]
fn test_empty_document_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "general": { "start_pc": 256 } }"#).unwrap();
    assert_eq!(config.general.start_pc, 256);
    assert_eq!(config.general.load_base, 0);
    assert_eq!(config.general.max_steps, None);
    assert_eq!(config.memory.capacity, 0x40_0000);
}

#[test]
fn test_null_step_bound_means_unbounded() {
    let config = Config::from_json(r#"{ "general": { "max_steps": null } }"#).unwrap();
    assert_eq!(config.general.max_steps, None);
}

#[test]
fn test_round_trip_through_json() {
    let mut config = Config::default();
    config.general.max_steps = Some(7);
    config.isa.hardwire_zero = true;

    let text = serde_json::to_string(&config).unwrap();

    assert_eq!(Config::from_json(&text).unwrap(), config);
}

#[test]
fn test_malformed_documents_are_rejected() {
    assert!(Config::from_json("not json").is_err());
    assert!(Config::from_json(r#"{ "memory": { "capacity": -1 } }"#).is_err());
    assert!(Config::from_json(r#"{ "general": { "start_pc": "zero" } }"#).is_err());
}
