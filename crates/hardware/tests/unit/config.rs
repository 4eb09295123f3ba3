//! Configuration Tests.
//!
//! JSON defaults, the init-policy spelling and every validation rule.

use std::io::Write;

use mipsim_core::SimError;
use mipsim_core::config::{Config, InitPolicy};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

#[test]
fn empty_json_is_the_default() {
    let config = Config::from_json("{}").unwrap();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.max_pulses, 100_000);
    assert_eq!(config.general.register_init, InitPolicy::Zero);
    assert_eq!(config.general.registers, None);
    assert_eq!(config.memory.size, 64 * 1024);
    assert_eq!(config.memory.text_base, 0);
    assert_eq!(config.memory.static_base, 0x8000);
    assert_eq!(config.memory.static_size, 0x4000);
    assert_eq!(config.memory.input_capacity, 256);
    assert_eq!(config.memory.init, Config::default().memory.init);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let json = r#"{
        "general": { "register_init": "Random", "seed": 99, "initial_sp": 4092 },
        "memory": { "init": "Random", "input_capacity": 64 }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.general.register_init, InitPolicy::Random);
    assert_eq!(config.general.seed, 99);
    assert_eq!(config.general.initial_sp, Some(4092));
    assert_eq!(config.general.max_pulses, 100_000);
    assert_eq!(config.memory.init, InitPolicy::Random);
    assert_eq!(config.memory.input_capacity, 64);
    assert_eq!(config.memory.size, 64 * 1024);
}

#[test]
fn init_policy_is_pascal_case() {
    assert_eq!(serde_json::to_string(&InitPolicy::Random).unwrap(), "\"Random\"");
    assert!(Config::from_json(r#"{ "memory": { "init": "random" } }"#).is_err());
}

#[test]
fn malformed_json() {
    let err = Config::from_json("{ general: ").unwrap_err();
    assert!(matches!(err, SimError::Json(_)), "unexpected error: {err}");
}

fn invalid(edit: impl FnOnce(&mut Config)) -> String {
    let mut config = Config::default();
    edit(&mut config);
    match config.validate() {
        Err(SimError::Config(msg)) => msg,
        other => panic!("expected a config error, got {other:?}"),
    }
}

#[rstest]
#[case::zero_size(|c: &mut Config| { c.memory.size = 0; }, "memory size")]
#[case::ragged_size(|c: &mut Config| { c.memory.size = 1023; }, "memory size")]
#[case::misaligned_text(|c: &mut Config| { c.memory.text_base = 2; }, "word aligned")]
#[case::misaligned_static(|c: &mut Config| { c.memory.static_base = 0x8001; }, "word aligned")]
#[case::text_outside(|c: &mut Config| { c.memory.text_base = 0x1_0000; }, "text base")]
#[case::static_outside(|c: &mut Config| { c.memory.static_size = 0x1_0000; }, "static segment")]
#[case::capacity_not_pow2(|c: &mut Config| { c.memory.input_capacity = 100; }, "input capacity")]
#[case::capacity_too_small(|c: &mut Config| { c.memory.input_capacity = 2; }, "input capacity")]
#[case::register_count(|c: &mut Config| { c.general.registers = Some(vec![0; 31]); }, "register values")]
fn validation_rules(#[case] edit: fn(&mut Config), #[case] needle: &str) {
    let msg = invalid(edit);
    assert!(msg.contains(needle), "`{msg}` should mention `{needle}`");
}

#[test]
fn defaults_validate() {
    Config::default().validate().unwrap();
}

#[test]
fn from_file_reads_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "general": {{ "max_pulses": 12, "trace_instructions": true }} }}"#).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.general.max_pulses, 12);
    assert!(config.general.trace_instructions);
}

#[test]
fn from_file_validates() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "memory": {{ "size": 6 }} }}"#).unwrap();

    assert!(matches!(Config::from_file(file.path()), Err(SimError::Config(_))));
}
