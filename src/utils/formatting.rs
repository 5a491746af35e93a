//! Formatting utilities used for CLI and export outputs.

use crate::models::Participant;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` terminal columns (not bytes, so accented names line up).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Cut `s` to at most `max` columns, ending with `…` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw + 1 > max {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    out
}

/// `Ana <ana@x.com>; Bruno <b@y.com>`
pub fn join_participants(participants: &[Participant]) -> String {
    participants
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Horizontal rule made of the configured separator character.
pub fn separator_line(sep: &str, width: usize) -> String {
    let ch = sep.chars().next().unwrap_or('-');
    std::iter::repeat_n(ch, width).collect()
}
