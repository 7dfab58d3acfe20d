//! Text display width utilities for East-Asian aware layout

use unicode_width::UnicodeWidthChar;

/// East-Asian Wide code points that `unicode-width` renders as zero columns
/// (combining marks and fillers)
const ZERO_WIDTH_WIDE: &[(char, char)] = &[
    ('\u{302A}', '\u{302F}'),
    ('\u{3099}', '\u{309A}'),
    ('\u{3164}', '\u{3164}'),
    ('\u{16FE4}', '\u{16FE4}'),
    ('\u{16FF0}', '\u{16FF1}'),
];

/// Neutral code points that `unicode-width` renders wider than one column
const WIDE_RENDERED_NEUTRAL: &[char] = &['\u{17A4}', '\u{17D8}', '\u{2E3A}', '\u{2E3B}'];

/// Return the display width of a single character.
///
/// East-Asian Wide and Fullwidth characters occupy two columns. Everything
/// else, including ambiguous, neutral, control and combining characters,
/// counts as one column.
pub fn char_width(c: char) -> usize {
    if ZERO_WIDTH_WIDE.iter().any(|&(lo, hi)| (lo..=hi).contains(&c)) {
        return 2;
    }
    if WIDE_RENDERED_NEUTRAL.contains(&c) {
        return 1;
    }
    match UnicodeWidthChar::width(c) {
        Some(w) if w >= 2 => 2,
        _ => 1,
    }
}

/// Return the display width of a string, summed per Unicode scalar value.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Return the widest display width among `lines`, or 0 when there are none.
pub fn max_width<'a, I>(lines: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().map(display_width).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_width_wide_and_fullwidth() {
        assert_eq!(char_width('突'), 2);
        assert_eq!(char_width('人'), 2);
        assert_eq!(char_width('ジ'), 2);
        assert_eq!(char_width('Ｙ'), 2); // fullwidth latin
        assert_eq!(char_width('＞'), 2);
        assert_eq!(char_width('\u{3000}'), 2); // ideographic space
    }

    #[test]
    fn test_char_width_narrow_and_fallback() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width(' '), 1);
        assert_eq!(char_width('ｱ'), 1); // halfwidth katakana
        assert_eq!(char_width('é'), 1);
        // Controls and combining marks still take a column
        assert_eq!(char_width('\t'), 1);
        assert_eq!(char_width('\u{0301}'), 1);
        assert_eq!(char_width('\0'), 1);
    }

    #[test]
    fn test_char_width_zero_width_wide_marks() {
        assert_eq!(char_width('\u{3099}'), 2); // combining voiced sound mark
        assert_eq!(char_width('\u{309A}'), 2);
        assert_eq!(char_width('\u{302A}'), 2);
        assert_eq!(char_width('\u{302F}'), 2);
        assert_eq!(char_width('\u{3164}'), 2); // hangul filler
        assert_eq!(char_width('\u{16FE4}'), 2);
        assert_eq!(char_width('\u{16FF1}'), 2);
    }

    #[test]
    fn test_char_width_neutral_rendered_wide() {
        assert_eq!(char_width('\u{17A4}'), 1);
        assert_eq!(char_width('\u{17D8}'), 1);
        assert_eq!(char_width('\u{2E3A}'), 1);
        assert_eq!(char_width('\u{2E3B}'), 1);
    }

    #[test]
    fn test_display_width_decomposed_kana() {
        // ガ written as カ + U+3099
        assert_eq!(display_width("\u{30AB}\u{3099}"), 4);
        assert_eq!(display_width("\u{30AC}"), 2);
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("突然の死"), 8);
        assert_eq!(display_width("ジェネレータ"), 12);
        assert_eq!(display_width("a突b"), 4);
    }

    #[test]
    fn test_max_width() {
        assert_eq!(max_width(Vec::<&str>::new()), 0);
        assert_eq!(max_width([""]), 0);
        assert_eq!(max_width(["突然の死", "ジェネレータ"]), 12);
        assert_eq!(max_width("ab\nabcd\n".split('\n')), 4);
    }
}
