//! Line classification: records → function blocks and pass-through lines.
//!
//! A function header starts a labeled block; instruction lines extend it;
//! anything else ends it and passes through. An instruction line that arrives
//! while no block is open starts an unlabeled block, so a run of instructions
//! after objdump's `...` gap line still gets its arrows.

use serde::Serialize;
use tracing::trace;

use super::patterns::{RE_FUNCTION_HEADER, RE_INSTRUCTION};
use super::LineRecord;
use crate::core::InstructionLine;

/// What a single record looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Instruction { address: u64 },
    FunctionHeader { address: u64, label: String },
    Other,
}

/// A run of instruction lines belonging to one disassembled routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionBlock {
    /// Symbol from the header; `None` for a run without one
    pub label: Option<String>,
    /// Header address, or the first instruction's address when unlabeled
    pub address: u64,
    /// Record index of the header line
    pub header: Option<usize>,
    /// Instructions in listing order; `lines[i].index == i`
    pub lines: Vec<InstructionLine>,
    /// Record index of each instruction, parallel to `lines`
    pub rows: Vec<usize>,
}

impl FunctionBlock {
    pub fn new(label: String, address: u64, header: usize) -> Self {
        Self {
            label: Some(label),
            address,
            header: Some(header),
            lines: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Block for an instruction run with no header line in front of it.
    pub fn unlabeled(address: u64) -> Self {
        Self {
            label: None,
            address,
            header: None,
            lines: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn push(&mut self, record_index: usize, address: u64, text: Option<&str>) {
        let index = self.lines.len();
        self.lines
            .push(InstructionLine::from_text(index, address, text));
        self.rows.push(record_index);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Output unit of the classifier, in listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    Function(FunctionBlock),
    /// Index of a record that is emitted unchanged
    PassThrough(usize),
}

/// Classify one record by its first field.
pub fn classify_record(record: &LineRecord) -> LineKind {
    let Some(first) = record.field(0) else {
        return LineKind::Other;
    };
    if let Some(caps) = RE_FUNCTION_HEADER.captures(first) {
        if let Ok(address) = u64::from_str_radix(&caps[1], 16) {
            return LineKind::FunctionHeader {
                address,
                label: caps[2].to_string(),
            };
        }
    }
    if let Some(caps) = RE_INSTRUCTION.captures(first) {
        // More than 16 digits cannot be an address; treat as text.
        if let Ok(address) = u64::from_str_radix(&caps[1], 16) {
            return LineKind::Instruction { address };
        }
    }
    LineKind::Other
}

/// Split a listing into function blocks and pass-through lines.
pub fn classify(records: &[LineRecord]) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut current: Option<FunctionBlock> = None;

    for (i, record) in records.iter().enumerate() {
        match classify_record(record) {
            LineKind::FunctionHeader { address, label } => {
                if let Some(done) = current.take() {
                    blocks.push(Block::Function(done));
                }
                trace!(label = %label, address, "function header");
                current = Some(FunctionBlock::new(label, address, i));
            }
            LineKind::Instruction { address } => current
                .get_or_insert_with(|| {
                    trace!(address, "instruction run without header");
                    FunctionBlock::unlabeled(address)
                })
                .push(i, address, record.instruction_text()),
            LineKind::Other => {
                if let Some(done) = current.take() {
                    blocks.push(Block::Function(done));
                }
                blocks.push(Block::PassThrough(i));
            }
        }
    }
    if let Some(done) = current.take() {
        blocks.push(Block::Function(done));
    }
    blocks
}
