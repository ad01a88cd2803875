//! Trace Loader.
//!
//! This module reads the text instruction trace. It performs:
//! 1. **Header parsing:** `<physRegCount>,<issueWidth>` becomes a validated [`PipelineConfig`].
//! 2. **Instruction parsing:** `<Kind>,<op0>,<op1>,<op2>` becomes an [`Instruction`] whose
//!    operand slots follow the kind (see below).
//! 3. **Streaming:** [`TraceReader`] yields instructions lazily, one line per fetch.
//!
//! Operand slots per kind:
//!
//! | Kind | op0         | op1       | op2        |
//! |------|-------------|-----------|------------|
//! | `R`  | dst         | src0      | src1       |
//! | `I`  | dst         | src0      | immediate  |
//! | `L`  | dst         | immediate | src0 (base)|
//! | `S`  | src0 (value)| immediate | src1 (base)|
//!
//! Fields are unsigned decimal integers with no surrounding whitespace. A
//! trailing carriage return is accepted; anything else off the grammar,
//! including a blank line, is a stream format error.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::common::error::{ConfigError, ParseError, SimError};
use crate::common::reg::ArchReg;
use crate::config::PipelineConfig;
use crate::core::pipeline::traits::InstructionSource;
use crate::isa::instruction::{InstId, InstKind, Instruction};

/// Parses an unsigned decimal field; signs, spaces and empty fields are rejected.
fn parse_field(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Parses and validates the trace header line.
pub fn parse_header(line: &str) -> Result<PipelineConfig, ConfigError> {
    let text = strip_cr(line);
    let invalid = || ConfigError::InvalidHeader {
        line: text.to_owned(),
    };

    let (regs, width) = text.split_once(',').ok_or_else(invalid)?;
    let phys_regs = parse_field(regs)
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(invalid)?;
    let width = parse_field(width)
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(invalid)?;

    let pipeline = PipelineConfig { phys_regs, width };
    pipeline.validate()?;
    Ok(pipeline)
}

/// Parses one instruction line.
///
/// `index` is the program index (zero-based among instruction lines) and
/// `line_no` the one-based line number in the file, used in errors.
pub fn parse_instruction(line: &str, index: usize, line_no: usize) -> Result<Instruction, ParseError> {
    let text = strip_cr(line);
    let invalid = || ParseError::InvalidInstruction {
        line: line_no,
        text: text.to_owned(),
    };

    let mut fields = text.split(',');
    let (Some(kind), Some(op0), Some(op1), Some(op2), None) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Err(invalid());
    };
    let op0 = parse_field(op0).ok_or_else(invalid)?;
    let op1 = parse_field(op1).ok_or_else(invalid)?;
    let op2 = parse_field(op2).ok_or_else(invalid)?;

    let reg = |raw: u64| {
        usize::try_from(raw)
            .ok()
            .and_then(ArchReg::new)
            .ok_or(ParseError::RegisterOutOfRange { line: line_no, reg: raw })
    };

    let kind = match kind {
        "R" => InstKind::RegOp {
            dst: reg(op0)?,
            src0: reg(op1)?,
            src1: reg(op2)?,
        },
        "I" => InstKind::ImmOp {
            dst: reg(op0)?,
            src0: reg(op1)?,
            imm: op2,
        },
        "L" => InstKind::Load {
            dst: reg(op0)?,
            imm: op1,
            src0: reg(op2)?,
        },
        "S" => InstKind::Store {
            src0: reg(op0)?,
            imm: op1,
            src1: reg(op2)?,
        },
        _ => return Err(invalid()),
    };

    Ok(Instruction::new(InstId(index), kind))
}

/// Lazy reader over a text trace.
///
/// The header is parsed eagerly by [`TraceReader::new`]; instruction lines
/// are parsed one at a time as the fetch stage asks for them.
#[derive(Debug)]
pub struct TraceReader<R> {
    lines: io::Lines<R>,
    line_no: usize,
    next_index: usize,
    pipeline: PipelineConfig,
}

impl<R: BufRead> TraceReader<R> {
    /// Reads and validates the header line of `reader`.
    pub fn new(reader: R) -> Result<Self, SimError> {
        let mut lines = reader.lines();
        let header = lines
            .next()
            .ok_or(ParseError::MissingHeader)?
            .map_err(ParseError::from)?;
        let pipeline = parse_header(&header)?;

        Ok(Self {
            lines,
            line_no: 1,
            next_index: 0,
            pipeline,
        })
    }

    /// Machine parameters from the header.
    pub const fn pipeline_config(&self) -> PipelineConfig {
        self.pipeline
    }
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file and reads its header.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let file = File::open(path).map_err(ParseError::from)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead> InstructionSource for TraceReader<R> {
    fn next_instruction(&mut self) -> Result<Option<Instruction>, ParseError> {
        let Some(line) = self.lines.next() else {
            return Ok(None);
        };
        let line = line?;
        self.line_no += 1;

        let inst = parse_instruction(&line, self.next_index, self.line_no)?;
        self.next_index += 1;
        Ok(Some(inst))
    }
}
