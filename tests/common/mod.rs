//! Common test utilities and helpers.
//!
//! Shared by the integration tests: sample listing lookup and small builders
//! for synthetic functions.

#![allow(dead_code)]

pub mod test_utils;

use std::path::{Path, PathBuf};

use flowlines::core::InstructionLine;

/// Test helper for checking if sample files exist
pub fn sample_file_exists<P: AsRef<Path>>(relative_path: P) -> bool {
    sample_file_path(relative_path).exists()
}

/// Get the full path to a sample file
pub fn sample_file_path<P: AsRef<Path>>(relative_path: P) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(relative_path)
}

/// Common test data and constants
pub mod test_data {
    /// gcc -O0 x86-64 listing with a loop, an if/else chain and a self loop
    pub const SAMPLE_LOOPS_X86_64: &str = "listings/loops-x86_64.objdump";

    /// Record index of the first instruction of each function in the sample
    pub const SUM_TO_FIRST_ROW: usize = 7;
    pub const CLASSIFY_FIRST_ROW: usize = 24;
    pub const DISPATCH_FIRST_ROW: usize = 41;
    pub const SAMPLE_LINE_COUNT: usize = 44;
}

/// Instruction lines at addresses 0, 1, 2, ... with the given texts.
///
/// Jump operands in `texts` are therefore plain row numbers in hex.
pub fn instruction_lines(texts: &[&str]) -> Vec<InstructionLine> {
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| InstructionLine::from_text(i, i as u64, Some(t)))
        .collect()
}

/// A function of `n` instructions with a jump from each `(source, target)` row.
pub fn function_with_jumps(n: usize, jumps: &[(usize, usize)]) -> Vec<InstructionLine> {
    (0..n)
        .map(|row| {
            let text = jumps
                .iter()
                .find(|(s, _)| *s == row)
                .map(|(_, t)| format!("jmp {:x}", t))
                .unwrap_or_else(|| "nop".to_string());
            InstructionLine::from_text(row, row as u64, Some(&text))
        })
        .collect()
}
