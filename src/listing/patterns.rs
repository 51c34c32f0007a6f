//! Precompiled patterns for recognizing listing lines.

use once_cell::sync::Lazy;
use regex::Regex;

/// Instruction line: hexadecimal address followed by a colon (`401000:`).
pub static RE_INSTRUCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9a-f]{4,}):").expect("valid instruction regex"));

/// Function header: 16-digit address and an angle-bracketed label.
pub static RE_FUNCTION_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9a-f]{16}) <([^>]*)>").expect("valid function header regex")
});
