//! Configuration for arrow layout and rendering.
//!
//! All fields have defaults, so a JSON file only needs to name what it
//! changes:
//!
//! ```json
//! { "glyphs": { "vertical": "|" }, "self_loops": "drop" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FlowlinesError, Result};

/// Characters used to draw arrows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphSet {
    /// Connector along the interior rows of an edge
    pub vertical: char,
    /// Corner whose line continues downward
    pub corner_down: char,
    /// Corner whose line continues upward
    pub corner_up: char,
    /// Marker on the row of the jump instruction
    pub exit_marker: char,
    /// Marker on the row of the jump target
    pub entry_marker: char,
    /// Unused cell
    pub blank: char,
    /// Connector from the marker column out to a deeper corner; off when `None`
    pub horizontal: Option<char>,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self {
            vertical: '│',
            corner_down: '┌',
            corner_up: '└',
            exit_marker: '<',
            entry_marker: '>',
            blank: ' ',
            horizontal: None,
        }
    }
}

impl GlyphSet {
    /// Plain 7-bit ASCII glyphs for terminals without box-drawing support.
    pub fn ascii() -> Self {
        Self {
            vertical: '|',
            corner_down: '.',
            corner_up: '\'',
            exit_marker: '<',
            entry_marker: '>',
            blank: ' ',
            horizontal: None,
        }
    }

    /// Same glyphs with the horizontal connector switched on.
    pub fn with_horizontal(self, horizontal: char) -> Self {
        Self {
            horizontal: Some(horizontal),
            ..self
        }
    }
}

/// What to do with a jump whose target is its own instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfLoopPolicy {
    /// Keep the edge; it occupies one row of one column.
    #[default]
    Marker,
    /// Discard the edge during extraction.
    Drop,
}

/// Master configuration for the annotator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowConfig {
    /// Glyph alphabet for decorations.
    pub glyphs: GlyphSet,
    /// Handling of jumps that target themselves.
    pub self_loops: SelfLoopPolicy,
    /// Mnemonic prefixes that identify jump instructions (case-insensitive).
    pub jump_prefixes: Vec<String>,
    /// Lay out function blocks on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            glyphs: GlyphSet::default(),
            self_loops: SelfLoopPolicy::default(),
            jump_prefixes: vec!["j".to_string()],
            parallel: false,
        }
    }
}

impl ArrowConfig {
    /// Default configuration with ASCII glyphs.
    pub fn ascii() -> Self {
        Self {
            glyphs: GlyphSet::ascii(),
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON configuration.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a JSON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject configurations that would produce ambiguous output.
    pub fn validate(&self) -> Result<()> {
        if self.jump_prefixes.iter().any(|p| p.trim().is_empty()) {
            return Err(FlowlinesError::Config(
                "jump prefixes must not be empty".to_string(),
            ));
        }
        let g = &self.glyphs;
        let drawn = [g.vertical, g.corner_down, g.corner_up];
        if drawn.contains(&g.blank) {
            return Err(FlowlinesError::Config(format!(
                "blank glyph {:?} collides with a track glyph",
                g.blank
            )));
        }
        Ok(())
    }

    /// True when `mnemonic` starts with one of the configured jump prefixes.
    pub fn is_jump_mnemonic(&self, mnemonic: &str) -> bool {
        let m = mnemonic.to_ascii_lowercase();
        self.jump_prefixes
            .iter()
            .any(|p| m.starts_with(&p.to_ascii_lowercase()))
    }
}
