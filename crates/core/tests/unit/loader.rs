//! # Trace Loader Tests
//!
//! Header and instruction grammar, operand slot mapping, and file-based
//! loading.

use std::io::Write;

use ooosim_core::common::{ArchReg, ConfigError, ParseError};
use ooosim_core::isa::{InstId, InstKind};
use ooosim_core::sim::loader::{parse_header, parse_instruction};
use ooosim_core::{InstructionSource, SimError, TraceReader};
use rstest::rstest;
use tempfile::NamedTempFile;

fn r(idx: usize) -> ArchReg {
    ArchReg::new(idx).unwrap()
}

#[rstest]
#[case("32,1", 32, 1)]
#[case("128,4", 128, 4)]
#[case("33,2\r", 33, 2)]
fn test_valid_headers(#[case] line: &str, #[case] phys_regs: usize, #[case] width: usize) {
    let pipeline = parse_header(line).unwrap();
    assert_eq!(pipeline.phys_regs, phys_regs);
    assert_eq!(pipeline.width, width);
}

#[rstest]
#[case("")]
#[case("32")]
#[case("32,1,1")]
#[case(" 32,1")]
#[case("32, 1")]
#[case("+32,1")]
#[case("-1,1")]
#[case("32,x")]
fn test_malformed_headers(#[case] line: &str) {
    assert!(matches!(
        parse_header(line),
        Err(ConfigError::InvalidHeader { .. })
    ));
}

#[test]
fn test_header_limits() {
    assert_eq!(
        parse_header("31,1"),
        Err(ConfigError::TooFewPhysRegs { found: 31, min: 32 })
    );
    assert_eq!(parse_header("64,0"), Err(ConfigError::ZeroWidth));
}

#[rstest]
#[case("R,1,2,3", InstKind::RegOp { dst: r(1), src0: r(2), src1: r(3) })]
#[case("I,4,5,100", InstKind::ImmOp { dst: r(4), src0: r(5), imm: 100 })]
#[case("L,6,16,7", InstKind::Load { dst: r(6), imm: 16, src0: r(7) })]
#[case("S,8,24,9", InstKind::Store { src0: r(8), imm: 24, src1: r(9) })]
#[case("R,31,0,31\r", InstKind::RegOp { dst: r(31), src0: r(0), src1: r(31) })]
fn test_operand_slots(#[case] line: &str, #[case] expected: InstKind) {
    let inst = parse_instruction(line, 7, 9).unwrap();
    assert_eq!(inst.id(), InstId(7));
    assert_eq!(*inst.kind(), expected);
}

#[rstest]
#[case("")]
#[case("X,1,2,3")]
#[case("r,1,2,3")]
#[case("R,1,2")]
#[case("R,1,2,3,4")]
#[case("R,1, 2,3")]
#[case("R,1,2,3 ")]
#[case("L,1,-4,2")]
fn test_malformed_instructions(#[case] line: &str) {
    assert!(matches!(
        parse_instruction(line, 0, 2),
        Err(ParseError::InvalidInstruction { line: 2, .. })
    ));
}

#[rstest]
#[case("R,32,1,2", 32)]
#[case("I,1,40,2", 40)]
#[case("L,1,0,99", 99)]
#[case("S,32,0,1", 32)]
fn test_register_out_of_range(#[case] line: &str, #[case] bad: u64) {
    match parse_instruction(line, 0, 5) {
        Err(ParseError::RegisterOutOfRange { line: 5, reg }) => assert_eq!(reg, bad),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_out_of_range_register_cannot_be_built() {
    assert!(ArchReg::new(32).is_none());
    assert!(ArchReg::new(40).is_none());
}

#[test]
fn test_immediate_may_exceed_register_range() {
    let inst = parse_instruction("L,1,4096,2", 0, 2).unwrap();
    assert!(matches!(inst.kind(), InstKind::Load { imm: 4096, .. }));
}

#[test]
fn test_empty_input_has_no_header() {
    let err = TraceReader::new("".as_bytes()).unwrap_err();
    assert!(matches!(err, SimError::Parse(ParseError::MissingHeader)));
}

#[test]
fn test_reader_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "40,2\r\nR,1,2,3\r\nS,1,0,4\r\n").unwrap();
    file.flush().unwrap();

    let mut reader = TraceReader::open(file.path()).unwrap();
    assert_eq!(reader.pipeline_config().phys_regs, 40);
    assert_eq!(reader.pipeline_config().width, 2);

    let first = reader.next_instruction().unwrap().unwrap();
    let second = reader.next_instruction().unwrap().unwrap();
    assert_eq!(first.id(), InstId(0));
    assert_eq!(second.id(), InstId(1));
    assert!(second.is_load_store());
    assert!(reader.next_instruction().unwrap().is_none());
}

#[test]
fn test_missing_file_is_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TraceReader::open(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, SimError::Parse(ParseError::Io(_))));
    assert!(!err.is_model_failure());
}
