//! sudden-death - Frame messages in a width-aware 突然の死 speech bubble
//!
//! # Basic Example
//! ```
//! use sudden_death::format;
//!
//! let output = format("hello");
//! assert_eq!(output, "＿人人人人人＿\n＞　hello　＜\n￣ＹＹＹＹＹ￣");
//! ```
//!
//! # Custom Glyphs
//! ```
//! use sudden_death::{format_with, FrameOptions, Glyphs};
//!
//! let options = FrameOptions::default().with_footer(Glyphs::new(["Y", "^"]).unwrap());
//! let output = format_with("突然の死\nジェネレータ", &options);
//! println!("{}", output);
//! ```
//!
//! # Printing
//! ```
//! sudden_death::print("突然の死").unwrap();
//! ```
//!
//! # Chat Escaping
//! ```
//! use sudden_death::{escape_lines, format};
//!
//! let escaped = escape_lines(&format("hi"));
//! assert!(escaped.lines().all(|line| line.starts_with('.')));
//! ```

mod error;
mod escape;
mod renderer;
mod text;
mod types;

use std::io::{self, Write};

pub use error::FrameError;
pub use escape::{escape_lines, ESCAPE_PREFIX};
pub use renderer::border::{repeat_part, GlyphCycle};
pub use renderer::{body, center_align, footer, header};
pub use text::{char_width, display_width, max_width};
pub use types::{FillMode, FrameOptions, Glyphs};

use renderer::render_frame;

/// Frame `msg` with the default glyphs
pub fn format(msg: &str) -> String {
    render_frame(msg, &FrameOptions::default())
}

/// Frame `msg` with the given options
///
/// # Arguments
/// * `msg` - Message text; each `\n`-separated line becomes one body line
/// * `options` - Border glyphs, ornaments and fill mode
pub fn format_with(msg: &str, options: &FrameOptions) -> String {
    render_frame(msg, options)
}

/// Frame `msg` with the default glyphs and write it to stdout
pub fn print(msg: &str) -> io::Result<()> {
    print_with(msg, &FrameOptions::default())
}

/// Frame `msg` with the given options and write it to stdout
pub fn print_with(msg: &str, options: &FrameOptions) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", format_with(msg, options))
}
