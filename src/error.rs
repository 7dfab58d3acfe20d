use std::fmt;

/// Errors that can occur while building a frame configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Glyph set has no glyphs at all
    EmptyGlyphs,
    /// Glyph at `index` is an empty string
    EmptyGlyph { index: usize },
    /// Fill mode name not recognised
    UnknownFillMode(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::EmptyGlyphs => write!(f, "Glyph set must contain at least one glyph"),
            FrameError::EmptyGlyph { index } => {
                write!(f, "Glyph {} is empty", index)
            }
            FrameError::UnknownFillMode(name) => {
                write!(f, "Unknown fill mode '{}' (expected 'exact' or 'legacy')", name)
            }
        }
    }
}

impl std::error::Error for FrameError {}
