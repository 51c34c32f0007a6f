//! Listing records and their classification into function blocks.
//!
//! A listing is the textual output of an external disassembler, one record
//! per line. Each record keeps the original text so the annotated output can
//! reproduce it untouched, plus the tab-separated fields the classifier looks
//! at: field 0 is the address (or header), field 2 the instruction text.

pub mod classify;
pub mod patterns;

use std::io::BufRead;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use classify::{classify, classify_record, Block, FunctionBlock, LineKind};

/// One line of a disassembly listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// Ordered fields; field 0 is tested against the line patterns
    pub fields: Vec<String>,
    /// The line as it appeared in the listing
    pub raw: String,
}

impl LineRecord {
    /// Build a record from fields that were split by the caller.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        let raw = fields.join("\t");
        Self { fields, raw }
    }

    /// Split an objdump line on tabs, trimming every field.
    ///
    /// `"  401000:\t55                   \tpush   %rbp"` becomes
    /// `["401000:", "55", "push   %rbp"]`.
    pub fn from_objdump_line(line: &str) -> Self {
        let raw = line.trim_end_matches(['\r', '\n']).to_string();
        let fields = raw.split('\t').map(|f| f.trim().to_string()).collect();
        Self { fields, raw }
    }

    pub fn field(&self, n: usize) -> Option<&str> {
        self.fields.get(n).map(String::as_str)
    }

    /// The instruction text (field 2), when present and non-blank.
    pub fn instruction_text(&self) -> Option<&str> {
        self.field(2).filter(|s| !s.trim().is_empty())
    }
}

/// Parse a whole listing held in memory.
pub fn parse_listing(text: &str) -> Vec<LineRecord> {
    text.lines().map(LineRecord::from_objdump_line).collect()
}

/// Read a listing from any buffered reader, e.g. a captured objdump pipe.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_listing<R: BufRead>(mut reader: R) -> Result<Vec<LineRecord>> {
    let mut records = Vec::new();
    let mut buf: Vec<u8> = Vec::with_capacity(256);
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf)?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        records.push(LineRecord::from_objdump_line(&line));
    }
    Ok(records)
}

/// Read a listing from a file.
pub fn read_listing_path<P: AsRef<Path>>(path: P) -> Result<Vec<LineRecord>> {
    let file = std::fs::File::open(path)?;
    read_listing(std::io::BufReader::new(file))
}
