use std::fmt;
use std::str::FromStr;

use crate::error::FrameError;
use crate::renderer::charset::{DEFAULT_FOOTER, DEFAULT_HEADER, DEFAULT_LEFT, DEFAULT_RIGHT};
use crate::text::display_width;

/// How a single-glyph border is stretched to its target width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Round the repeat count up so the border always reaches the target
    #[default]
    Exact,
    /// Floor-divide the target by the glyph width; the border can fall one
    /// glyph short when the width does not divide evenly
    Legacy,
}

impl FillMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FillMode::Exact => "exact",
            FillMode::Legacy => "legacy",
        }
    }
}

impl fmt::Display for FillMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillMode {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exact" => Ok(FillMode::Exact),
            "legacy" => Ok(FillMode::Legacy),
            _ => Err(FrameError::UnknownFillMode(s.to_string())),
        }
    }
}

/// An ordered, non-empty sequence of border glyphs.
///
/// Each glyph is a non-empty string, so every glyph has a display width of at
/// least one and cycling through them always makes progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs(Vec<String>);

impl Glyphs {
    /// Build a glyph set, rejecting an empty set or an empty glyph
    pub fn new<I, S>(glyphs: I) -> Result<Self, FrameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let glyphs: Vec<String> = glyphs.into_iter().map(Into::into).collect();
        if glyphs.is_empty() {
            return Err(FrameError::EmptyGlyphs);
        }
        if let Some(index) = glyphs.iter().position(|g| g.is_empty()) {
            return Err(FrameError::EmptyGlyph { index });
        }
        Ok(Self(glyphs))
    }

    /// Build a glyph set holding exactly one glyph
    pub fn single(glyph: impl Into<String>) -> Result<Self, FrameError> {
        Self::new([glyph])
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no glyphs; never true for a constructed set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Widest glyph in the set
    pub fn max_glyph_width(&self) -> usize {
        self.0.iter().map(|g| display_width(g)).max().unwrap_or(0)
    }
}

/// Parse a comma-separated glyph list such as `"Y,^"`
impl FromStr for Glyphs {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FrameError::EmptyGlyphs);
        }
        Self::new(s.split(','))
    }
}

/// Decorative glyphs used to frame a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOptions {
    /// Glyphs cycled across the header bar
    pub header: Glyphs,
    /// Glyphs cycled across the footer bar
    pub footer: Glyphs,
    /// Ornament opening every body line
    pub left: String,
    /// Ornament closing every body line
    pub right: String,
    pub fill: FillMode,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            header: Glyphs(vec![DEFAULT_HEADER.to_string()]),
            footer: Glyphs(vec![DEFAULT_FOOTER.to_string()]),
            left: DEFAULT_LEFT.to_string(),
            right: DEFAULT_RIGHT.to_string(),
            fill: FillMode::default(),
        }
    }
}

impl FrameOptions {
    pub fn with_header(mut self, header: Glyphs) -> Self {
        self.header = header;
        self
    }

    pub fn with_footer(mut self, footer: Glyphs) -> Self {
        self.footer = footer;
        self
    }

    pub fn with_left(mut self, left: impl Into<String>) -> Self {
        self.left = left.into();
        self
    }

    pub fn with_right(mut self, right: impl Into<String>) -> Self {
        self.right = right.into();
        self
    }

    pub fn with_fill_mode(mut self, fill: FillMode) -> Self {
        self.fill = fill;
        self
    }
}
