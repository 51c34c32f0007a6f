//! InstructionLine type for one disassembled instruction inside a function.
//!
//! An InstructionLine is created once when the listing is classified and is
//! never mutated afterwards. It carries only what the arrow layout needs: its
//! position in the function, its address, and the split instruction text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest operand literal that still fits in a 64-bit address.
const MAX_HEX_DIGITS: usize = 16;

/// One instruction of a function block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionLine {
    /// 0-based position within the function's instruction list
    pub index: usize,
    /// Address parsed from the leading hexadecimal field
    pub address: u64,
    /// First whitespace-separated token of the instruction text
    pub mnemonic: Option<String>,
    /// Remainder of the instruction text after the mnemonic
    pub operand_text: Option<String>,
}

impl InstructionLine {
    pub fn new(
        index: usize,
        address: u64,
        mnemonic: Option<String>,
        operand_text: Option<String>,
    ) -> Self {
        Self {
            index,
            address,
            mnemonic,
            operand_text,
        }
    }

    /// Build a line from the raw instruction text (`mnemonic operand[,operand...]`).
    ///
    /// Missing or blank text yields a placeholder line with neither mnemonic
    /// nor operands.
    pub fn from_text(index: usize, address: u64, text: Option<&str>) -> Self {
        let text = text.map(str::trim).unwrap_or("");
        let (mnemonic, rest) = match text.split_once(char::is_whitespace) {
            Some((m, rest)) => (m, rest.trim()),
            None => (text, ""),
        };
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self::new(index, address, non_empty(mnemonic), non_empty(rest))
    }

    /// True when the line carries no instruction text.
    pub fn is_placeholder(&self) -> bool {
        self.mnemonic.is_none()
    }

    /// The operand as a plain hexadecimal literal, if it is one.
    ///
    /// Only the first operand is considered, and objdump's trailing symbol
    /// annotation (`401020 <main+0x10>`) is ignored. Register operands,
    /// memory references and anything else yield `None`.
    pub fn hex_operand(&self) -> Option<u64> {
        let operand = self.operand_text.as_deref()?;
        let first = operand.split_whitespace().next()?;
        let first = first.split(',').next()?;
        parse_hex_literal(first)
    }
}

impl fmt::Display for InstructionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}:", self.address)?;
        if let Some(m) = &self.mnemonic {
            write!(f, " {}", m)?;
        }
        if let Some(ops) = &self.operand_text {
            write!(f, " {}", ops)?;
        }
        Ok(())
    }
}

/// Parse a purely hexadecimal token, with an optional `0x` prefix.
pub fn parse_hex_literal(token: &str) -> Option<u64> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    if digits.is_empty()
        || digits.len() > MAX_HEX_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}
