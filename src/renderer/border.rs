//! Border bars built by cycling a glyph sequence

use crate::text::display_width;
use crate::types::{FillMode, Glyphs};

/// Endless round-robin cursor over a glyph set
#[derive(Debug, Clone)]
pub struct GlyphCycle<'a> {
    glyphs: &'a [String],
    count: usize,
}

impl<'a> GlyphCycle<'a> {
    pub fn new(glyphs: &'a Glyphs) -> Self {
        Self {
            glyphs: glyphs.as_slice(),
            count: 0,
        }
    }
}

impl<'a> Iterator for GlyphCycle<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let glyph = &self.glyphs[self.count % self.glyphs.len()];
        self.count += 1;
        Some(glyph.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Build a border segment of at least `target` columns from `glyphs`.
///
/// A single glyph is repeated as a block; how the count is rounded depends
/// on `mode`. Several glyphs are cycled in order until the accumulated width
/// reaches `target`, keeping any overshoot from the last glyph.
pub fn repeat_part(glyphs: &Glyphs, target: usize, mode: FillMode) -> String {
    if let [glyph] = glyphs.as_slice() {
        let w = display_width(glyph);
        let count = match mode {
            FillMode::Exact => target.div_ceil(w),
            FillMode::Legacy => target / w,
        };
        return glyph.repeat(count);
    }

    let mut part = String::new();
    let mut filled = 0;
    for glyph in GlyphCycle::new(glyphs) {
        if filled >= target {
            break;
        }
        part.push_str(glyph);
        filled += display_width(glyph);
    }
    part
}
