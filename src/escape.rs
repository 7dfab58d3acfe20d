//! Escaping for chat clients that treat a leading character specially

/// Prefix added to every line by [`escape_lines`]
pub const ESCAPE_PREFIX: &str = ".";

/// Prefix every line of `formatted` with a period.
///
/// Chat clients such as Slack leave a line starting with `.` alone, which keeps
/// wide glyphs and `@` text from triggering mentions or formatting.
pub fn escape_lines(formatted: &str) -> String {
    formatted
        .split('\n')
        .map(|line| format!("{ESCAPE_PREFIX}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
