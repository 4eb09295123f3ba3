use std::io::Write;

use mipsim_core::config::Config;
use mipsim_core::core::Cpu;
use mipsim_core::sim::loader::{load_file, load_into, parse_program};
use mipsim_core::SimError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

fn program_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn mixed_notation_with_comments() {
    let text = "\
# sum two constants
0x20080007            # addi $t0, $zero, 7

0010_0000_0000_1001_0000_0000_0000_0011
0X0109_5020
";
    assert_eq!(
        parse_program(text).unwrap(),
        vec![0x2008_0007, 0x2009_0003, 0x0109_5020]
    );
}

#[test]
fn empty_and_comment_only_text() {
    assert!(parse_program("").unwrap().is_empty());
    assert!(parse_program("# nothing\n\n   \n").unwrap().is_empty());
}

#[rstest]
#[case::short_binary("0x0\n0101\n", 2)]
#[case::bad_digit("0x0\n0x0\n0x0\n0102_0000_0000_0000_0000_0000_0000_0000\n", 4)]
#[case::bad_hex("0xZZ\n", 1)]
#[case::hex_overflow("# a\n0x1_0000_0000\n", 2)]
fn malformed_lines_are_reported(#[case] text: &str, #[case] expected: usize) {
    match parse_program(text) {
        Err(SimError::Program { line, .. }) => assert_eq!(line, expected),
        other => panic!("expected a program error, got {other:?}"),
    }
}

#[test]
fn file_round_trip_into_memory() {
    let file = program_file("0x20080007\n0x2009000a\n");
    assert_eq!(load_file(file.path()).unwrap(), vec![0x2008_0007, 0x2009_000a]);

    let mut cpu = Cpu::new(&Config::default()).unwrap();
    assert_eq!(load_into(&mut cpu, file.path()).unwrap(), 2);
    assert_eq!(cpu.memory_word(0).unwrap(), 0x2008_0007);
    assert_eq!(cpu.memory_word(4).unwrap(), 0x2009_000a);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)), "unexpected error: {err}");
}

#[test]
fn program_larger_than_memory() {
    let mut config = Config::default();
    config.memory.size = 8;
    config.memory.static_base = 0;
    config.memory.static_size = 8;
    let mut cpu = Cpu::new(&config).unwrap();

    let err = cpu.load_program(&[0, 0, 0]).unwrap_err();
    assert!(matches!(err, SimError::AddressOutOfRange { .. }), "unexpected error: {err}");
}
