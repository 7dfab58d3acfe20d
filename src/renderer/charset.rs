//! Fixed and default glyphs for framing messages

/// Default glyph cycled across the header bar
pub const DEFAULT_HEADER: &str = "人";
/// Default glyph cycled across the footer bar
pub const DEFAULT_FOOTER: &str = "Ｙ";
/// Default ornament opening each body line
pub const DEFAULT_LEFT: &str = "＞";
/// Default ornament closing each body line
pub const DEFAULT_RIGHT: &str = "＜";

/// Glyphs that are not configurable
pub struct FrameChars {
    pub header_corner: &'static str,
    pub footer_corner: &'static str,
    /// Space between an ornament and the line text
    pub inner_pad: &'static str,
    /// Columns added to the widest line when sizing the bars
    pub margin: usize,
}

pub const FRAME_CHARS: FrameChars = FrameChars {
    header_corner: "＿",
    footer_corner: "￣",
    inner_pad: "\u{3000}",
    margin: 4,
};
