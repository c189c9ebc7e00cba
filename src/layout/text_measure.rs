//! Text Measurement
//!
//! Utilities for measuring and splitting text in terminal cells.
//!
//! Terminal text width depends on Unicode character widths:
//! - ASCII printable and the accented Latin set: 1 cell
//! - CJK characters and most emoji: 2 cells
//! - Control characters: 0 cells

use unicode_width::UnicodeWidthChar;

/// Display width of one character in terminal cells.
#[inline]
pub fn char_width(c: char) -> u16 {
    c.width().unwrap_or(0) as u16
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> u16 {
    s.chars()
        .fold(0u16, |width, c| width.saturating_add(char_width(c)))
}

/// Split `text` after at most `width` cells.
///
/// Returns `(head, tail)` where `head` is the longest prefix that fits.
/// A character wider than `width` is never split, so `head` may be empty.
pub fn split_at_width(text: &str, width: u16) -> (&str, &str) {
    let mut used = 0u16;
    for (byte_idx, c) in text.char_indices() {
        let w = char_width(c);
        if used + w > width {
            return text.split_at(byte_idx);
        }
        used += w;
    }
    (text, "")
}

/// Cut `text` into consecutive segments of at most `width` cells.
///
/// Segments are taken purely at width boundaries, never at word boundaries.
pub fn segments(text: &str, width: u16) -> Vec<&str> {
    if width == 0 {
        return vec![text];
    }

    let mut out = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let (head, tail) = split_at_width(rest, width);
        if head.is_empty() {
            // A glyph wider than the whole segment; emit it alone
            let first_len = rest.chars().next().map_or(0, char::len_utf8);
            let (glyph, tail) = rest.split_at(first_len);
            out.push(glyph);
            rest = tail;
            continue;
        }
        out.push(head);
        rest = tail;
    }
    out
}

/// Greedily re-split `text` into lines of exactly `width` characters
/// (the last line may be shorter).
///
/// Empty text yields a single empty line. A zero width yields the text as one
/// line. Joining the result always gives back `text`.
pub fn reflow(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }

    if width == 0 {
        return vec![text.to_string()];
    }

    let chars: Vec<char> = text.chars().collect();
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}

/// Number of characters in a string (not bytes, not cells).
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
