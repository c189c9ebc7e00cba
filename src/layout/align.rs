//! Alignment - where strings land inside a window.
//!
//! Pure functions: they take the target window's width (and height where
//! needed) and hand back window-relative positions. Nothing here touches a
//! surface. All arithmetic saturates at zero, so a string wider than the window
//! is placed at column 0 rather than wrapping around.

use super::text_measure::string_width;
use crate::types::{Alignment, Orientation, Position};

/// Spacing between strings laid out on one row by the packing policies.
pub const PACKED_SPACING: u16 = 1;

/// Column for a single string on a row of `width` cells.
///
/// - `Left`: fixed one-column margin
/// - `Center`: `(width - len) / 2`
/// - `Right`: `width - len - 1`
/// - `Manual(col)`: `col`
pub fn column_for(width: u16, text: &str, alignment: Alignment) -> u16 {
    let len = string_width(text);
    match alignment {
        Alignment::Left => 1,
        Alignment::Center => width.saturating_sub(len) / 2,
        Alignment::Right => width.saturating_sub(len).saturating_sub(1),
        Alignment::Manual(col) => col,
    }
}

/// Compute one position per string, starting at `start_row`.
///
/// Vertical orientation stacks the strings one per row, each placed with
/// [`column_for`]. Horizontal orientation puts them all on `start_row`, see
/// [`place_horizontal`].
pub fn place<S: AsRef<str>>(
    width: u16,
    start_row: u16,
    strings: &[S],
    orientation: Orientation,
    alignment: Alignment,
) -> Vec<Position> {
    match orientation {
        Orientation::Vertical => place_vertical(width, start_row, strings, alignment),
        Orientation::Horizontal => place_horizontal(width, start_row, strings, alignment),
    }
}

/// One string per row, each aligned independently.
pub fn place_vertical<S: AsRef<str>>(
    width: u16,
    start_row: u16,
    strings: &[S],
    alignment: Alignment,
) -> Vec<Position> {
    strings
        .iter()
        .enumerate()
        .map(|(i, s)| Position::new(start_row + i as u16, column_for(width, s.as_ref(), alignment)))
        .collect()
}

/// All strings on one row.
///
/// - `Left`: packed from column 0, one column apart
/// - `Right`: packed so the last string ends at column `width - 1`
/// - `Center`: `(width - total) / (count + 1)` before and between strings
/// - `Manual(col)`: packed from `col`, one column apart
pub fn place_horizontal<S: AsRef<str>>(
    width: u16,
    row: u16,
    strings: &[S],
    alignment: Alignment,
) -> Vec<Position> {
    if strings.is_empty() {
        return Vec::new();
    }

    let lens: Vec<u16> = strings.iter().map(|s| string_width(s.as_ref())).collect();
    let total = lens.iter().fold(0u16, |acc, &l| acc.saturating_add(l));
    let count = lens.len() as u16;

    let (start, spacing) = match alignment {
        Alignment::Left => (0, PACKED_SPACING),
        Alignment::Manual(col) => (col, PACKED_SPACING),
        Alignment::Right => {
            let gaps = PACKED_SPACING.saturating_mul(count - 1);
            (width.saturating_sub(total).saturating_sub(gaps), PACKED_SPACING)
        }
        Alignment::Center => {
            let spacing = width.saturating_sub(total) / (count + 1);
            (spacing, spacing)
        }
    };

    let mut next = start;
    lens.iter()
        .map(|&len| {
            let pos = Position::new(row, next);
            next = next.saturating_add(len).saturating_add(spacing);
            pos
        })
        .collect()
}

/// Center a block of strings on both axes of a `height` x `width` window.
pub fn place_centered<S: AsRef<str>>(height: u16, width: u16, strings: &[S]) -> Vec<Position> {
    let top = height.saturating_sub(strings.len() as u16) / 2;
    place_vertical(width, top, strings, Alignment::Center)
}

/// Top-left corner that centers a `rows` x `cols` window inside an
/// `outer_rows` x `outer_cols` one.
pub fn centered_origin(outer_rows: u16, outer_cols: u16, rows: u16, cols: u16) -> Position {
    Position::new(
        (outer_rows / 2).saturating_sub(rows / 2),
        (outer_cols / 2).saturating_sub(cols / 2),
    )
}
