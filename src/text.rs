//! src/text.rs

/// Characters of the commit hash shown in the list.
pub const HASH_LEN: usize = 7;
/// Width of the selection marker column (`"> "` or two spaces).
pub const PREFIX_WIDTH: usize = 2;
/// Single space between the short hash and the subject.
pub const HASH_SPACING: usize = 1;
/// Indentation of wrapped subject continuation lines, sized so they line
/// up under the first subject column.
pub const LEFT_MARGIN: usize = PREFIX_WIDTH + HASH_LEN + HASH_SPACING;

/// Wraps `text` into lines of at most `max_width` characters.
///
/// Each line breaks at the last space inside the leading window of
/// `max_width` characters; a single token longer than the window is hard
/// split at exactly `max_width`. Whitespace is stripped from the remainder
/// after every break, so runs of spaces collapse at a wrap point but
/// survive mid-line. A `max_width` of zero disables wrapping entirely.
///
/// Width is counted in characters, not display columns, so wide glyphs may
/// still render wider than the requested width.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }
    if text.chars().count() <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut rest = text;
    while rest.chars().count() > max_width {
        // Byte offset one past the last character of the window.
        let window_end = rest
            .char_indices()
            .nth(max_width)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let window = &rest[..window_end];

        // Only a literal space is a word boundary; embedded newlines and
        // other whitespace ride along as ordinary characters.
        let break_point = window.rfind(' ').unwrap_or(window_end);

        lines.push(rest[..break_point].to_string());
        rest = rest[break_point..].trim();
    }

    if !rest.is_empty() {
        lines.push(rest.to_string());
    }

    lines
}
