//! Renderer module for composing framed messages

pub mod border;
pub(crate) mod charset;

use crate::text::{display_width, max_width};
use crate::types::FrameOptions;

use border::repeat_part;
use charset::FRAME_CHARS;

/// Split a message into its lines, keeping empty ones
fn split_lines(msg: &str) -> Vec<&str> {
    msg.split('\n').collect()
}

/// Bar width for a message: widest line plus the fixed margin
fn bar_width(lines: &[&str]) -> usize {
    max_width(lines.iter().copied()) + FRAME_CHARS.margin
}

/// Pad `line` with spaces on both sides so it is centred within `width`.
/// The extra space of an odd gap goes on the right. Lines already at least
/// `width` wide are returned unchanged.
pub fn center_align(line: &str, width: usize) -> String {
    let w = display_width(line);
    if width <= w {
        return line.to_string();
    }
    let gap = width - w;
    let left = gap / 2;
    let right = gap - left;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(right))
}

/// Header bar sized to the widest line of `msg`
pub fn header(msg: &str, options: &FrameOptions) -> String {
    let lines = split_lines(msg);
    render_header(&lines, options)
}

/// Footer bar sized to the widest line of `msg`
pub fn footer(msg: &str, options: &FrameOptions) -> String {
    let lines = split_lines(msg);
    render_footer(&lines, options)
}

/// Body lines of `msg`, centred and wrapped with the side ornaments
pub fn body(msg: &str, options: &FrameOptions) -> String {
    let lines = split_lines(msg);
    render_body(&lines, options)
}

fn render_header(lines: &[&str], options: &FrameOptions) -> String {
    let corner = FRAME_CHARS.header_corner;
    let bar = repeat_part(&options.header, bar_width(lines), options.fill);
    format!("{corner}{bar}{corner}")
}

fn render_footer(lines: &[&str], options: &FrameOptions) -> String {
    let corner = FRAME_CHARS.footer_corner;
    let bar = repeat_part(&options.footer, bar_width(lines), options.fill);
    format!("{corner}{bar}{corner}")
}

fn render_body(lines: &[&str], options: &FrameOptions) -> String {
    let width = max_width(lines.iter().copied());
    let pad = FRAME_CHARS.inner_pad;
    lines
        .iter()
        .map(|line| {
            format!(
                "{}{}{}{}{}",
                options.left,
                pad,
                center_align(line, width),
                pad,
                options.right
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the full frame: header, body lines and footer joined by newlines
pub fn render_frame(msg: &str, options: &FrameOptions) -> String {
    let lines = split_lines(msg);

    tracing::debug!(
        lines = lines.len(),
        max_width = max_width(lines.iter().copied()),
        fill = %options.fill,
        "rendering frame"
    );

    [
        render_header(&lines, options),
        render_body(&lines, options),
        render_footer(&lines, options),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FillMode, Glyphs};

    #[test]
    fn test_center_align_even_gap() {
        assert_eq!(center_align("突然の死", 12), "  突然の死  ");
    }

    #[test]
    fn test_center_align_odd_gap_extra_on_right() {
        assert_eq!(center_align("ab", 5), " ab  ");
        assert_eq!(center_align("", 1), " ");
    }

    #[test]
    fn test_center_align_never_truncates() {
        assert_eq!(center_align("hello", 5), "hello");
        assert_eq!(center_align("hello", 2), "hello");
    }

    #[test]
    fn test_render_hello() {
        let output = render_frame("hello", &FrameOptions::default());
        assert_eq!(output, "＿人人人人人＿\n＞　hello　＜\n￣ＹＹＹＹＹ￣");
    }

    #[test]
    fn test_render_hello_legacy_fill() {
        let options = FrameOptions::default().with_fill_mode(FillMode::Legacy);
        let output = render_frame("hello", &options);
        assert_eq!(output, "＿人人人人＿\n＞　hello　＜\n￣ＹＹＹＹ￣");
    }

    #[test]
    fn test_render_sections_match_frame() {
        let options = FrameOptions::default();
        let msg = "突然の死\nジェネレータ";
        let joined = [
            header(msg, &options),
            body(msg, &options),
            footer(msg, &options),
        ]
        .join("\n");
        assert_eq!(joined, render_frame(msg, &options));
    }

    #[test]
    fn test_render_empty_message() {
        let output = render_frame("", &FrameOptions::default());
        assert_eq!(output, "＿人人＿\n＞　　＜\n￣ＹＹ￣");
    }

    #[test]
    fn test_render_trailing_newline_keeps_empty_line() {
        let output = render_frame("ab\n", &FrameOptions::default());
        let lines: Vec<&str> = output.split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "＞　  　＜");
    }

    #[test]
    fn test_render_custom_glyphs() {
        let options = FrameOptions::default()
            .with_footer(Glyphs::new(["Y", "^"]).unwrap())
            .with_left("<")
            .with_right(">");
        let output = render_frame("hello", &options);
        assert_eq!(output, "＿人人人人人＿\n<　hello　>\n￣Y^Y^Y^Y^Y￣");
    }
}
