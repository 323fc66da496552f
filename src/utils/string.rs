//! String utility functions for text processing

/// Cut a string down to a bounded field
///
/// The bound counts a terminator slot, so at most `bound - 1` bytes are kept.
/// The cut never splits a UTF-8 character.
///
/// # Arguments
///
/// * `s` - The input string
/// * `bound` - The field size, terminator included
///
/// # Returns
///
/// The (possibly shortened) prefix of `s`
pub fn truncate_to_bound(s: &str, bound: usize) -> &str {
    let max = bound.saturating_sub(1);
    if s.len() <= max {
        return s;
    }

    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Strip a single trailing `\n`
///
/// A `\r` before it stays part of the line.
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}
