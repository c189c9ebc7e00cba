//! Bounded string painter.
//!
//! Paints strings into a window without ever running past its edges. Long
//! strings are cut at available-width boundaries and continue on the following
//! rows, as far as the caller's row budget and the window's bottom allow.

use super::align::{centered_origin, column_for};
use super::text_measure::segments;
use crate::error::Result;
use crate::terminal::Surface;
use crate::types::{Alignment, Attr, WindowId};

/// Columns reserved for the window border (one on each side).
pub const BORDER_COLUMNS: u16 = 2;

/// Parameters for [`paint_bounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundedText {
    /// Row of the first segment.
    pub row: u16,
    /// Rows that may be used after the first one for the remainder.
    pub extra_lines: u16,
    /// Rows at the bottom of the window that must stay untouched.
    pub reserved_rows: u16,
    pub alignment: Alignment,
    pub attrs: Attr,
}

/// Paint one string on `row`, placed by `alignment`.
pub fn paint_aligned(
    surface: &mut dyn Surface,
    window: WindowId,
    row: u16,
    text: &str,
    alignment: Alignment,
    attrs: Attr,
) -> Result<()> {
    let (_, cols) = surface.dimensions(window)?;
    let col = column_for(cols, text, alignment);
    surface.paint(window, row, col, text, attrs)
}

/// Paint `text` without overflowing the window.
///
/// The available width is the window width minus [`BORDER_COLUMNS`] (and
/// minus the manual column for [`Alignment::Manual`]). The first segment goes
/// on `req.row`; each further segment takes the next row while `extra_lines`
/// remain and the row stays above the reserved trailing area.
///
/// Returns the next free row.
pub fn paint_bounded(
    surface: &mut dyn Surface,
    window: WindowId,
    text: &str,
    req: &BoundedText,
) -> Result<u16> {
    let (rows, cols) = surface.dimensions(window)?;
    let mut available = cols.saturating_sub(BORDER_COLUMNS);
    if let Alignment::Manual(col) = req.alignment {
        available = available.saturating_sub(col);
    }
    if available == 0 {
        return Ok(req.row + 1);
    }

    let mut pieces = segments(text, available).into_iter();
    let mut row = req.row;
    let first = pieces.next().unwrap_or("");
    paint_aligned(surface, window, row, first, req.alignment, req.attrs)?;

    let bottom = rows.saturating_sub(req.reserved_rows);
    let mut extra = req.extra_lines;
    for piece in pieces {
        if extra == 0 || row + 1 >= bottom {
            break;
        }
        row += 1;
        extra -= 1;
        paint_aligned(surface, window, row, piece, req.alignment, req.attrs)?;
    }

    Ok(row + 1)
}

/// Create a bordered `rows` x `cols` window centered on the root window.
pub fn create_centered_window(surface: &mut dyn Surface, rows: u16, cols: u16) -> Result<WindowId> {
    let (outer_rows, outer_cols) = surface.dimensions(WindowId::ROOT)?;
    let origin = centered_origin(outer_rows, outer_cols, rows, cols);
    let window = surface.create_window(WindowId::ROOT, rows, cols, origin.row, origin.col)?;
    surface.draw_border(window)?;
    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::CellSurface;
    use crate::types::BorderStyle;

    fn surface_with_window(rows: u16, cols: u16) -> (CellSurface, WindowId) {
        let mut s = CellSurface::new(rows, cols);
        let win = s.create_window(WindowId::ROOT, rows, cols, 0, 0).unwrap();
        (s, win)
    }

    #[test]
    fn test_short_string_single_row() {
        let (mut s, win) = surface_with_window(5, 12);
        let next = paint_bounded(&mut s, win, "hello", &BoundedText::default()).unwrap();
        assert_eq!(next, 1);
        assert_eq!(s.window_row_text(win, 0).unwrap(), " hello");
    }

    #[test]
    fn test_without_extra_lines_truncates() {
        let (mut s, win) = surface_with_window(5, 7);
        // available = 5
        let next = paint_bounded(&mut s, win, "abcdefghij", &BoundedText::default()).unwrap();
        assert_eq!(next, 1);
        assert_eq!(s.window_row_text(win, 0).unwrap(), " abcde");
        assert_eq!(s.window_row_text(win, 1).unwrap(), "");
    }

    #[test]
    fn test_remainder_on_following_rows() {
        let (mut s, win) = surface_with_window(6, 7);
        let req = BoundedText {
            row: 1,
            extra_lines: 3,
            ..Default::default()
        };
        let next = paint_bounded(&mut s, win, "abcdefghijkl", &req).unwrap();
        assert_eq!(next, 4);
        assert_eq!(s.window_row_text(win, 1).unwrap(), " abcde");
        assert_eq!(s.window_row_text(win, 2).unwrap(), " fghij");
        assert_eq!(s.window_row_text(win, 3).unwrap(), " kl");
    }

    #[test]
    fn test_extra_lines_budget_stops_early() {
        let (mut s, win) = surface_with_window(6, 7);
        let req = BoundedText {
            extra_lines: 1,
            ..Default::default()
        };
        let next = paint_bounded(&mut s, win, "abcdefghijkl", &req).unwrap();
        assert_eq!(next, 2);
        assert_eq!(s.window_row_text(win, 2).unwrap(), "");
    }

    #[test]
    fn test_reserved_rows_respected() {
        let (mut s, win) = surface_with_window(4, 7);
        let req = BoundedText {
            row: 1,
            extra_lines: 5,
            reserved_rows: 1,
            ..Default::default()
        };
        // rows 1 and 2 usable, row 3 reserved
        let next = paint_bounded(&mut s, win, "abcdefghijklmno", &req).unwrap();
        assert_eq!(next, 3);
        assert_eq!(s.window_row_text(win, 3).unwrap(), "");
    }

    #[test]
    fn test_manual_alignment_narrows_width() {
        let (mut s, win) = surface_with_window(4, 10);
        let req = BoundedText {
            extra_lines: 2,
            alignment: Alignment::Manual(4),
            ..Default::default()
        };
        // available = 10 - 2 - 4 = 4
        let next = paint_bounded(&mut s, win, "abcdefg", &req).unwrap();
        assert_eq!(next, 2);
        assert_eq!(s.window_row_text(win, 0).unwrap(), "    abcd");
        assert_eq!(s.window_row_text(win, 1).unwrap(), "    efg");
    }

    #[test]
    fn test_centered_segments() {
        let (mut s, win) = surface_with_window(3, 10);
        let req = BoundedText {
            alignment: Alignment::Center,
            ..Default::default()
        };
        paint_bounded(&mut s, win, "abcd", &req).unwrap();
        assert_eq!(s.window_row_text(win, 0).unwrap(), "   abcd");
    }

    #[test]
    fn test_create_centered_window() {
        let mut s = CellSurface::new(10, 20).with_border(BorderStyle::Ascii);
        let win = create_centered_window(&mut s, 4, 6).unwrap();
        let w = s.window(win).unwrap();
        assert_eq!((w.origin.row, w.origin.col), (3, 7));
        assert_eq!(s.window_row_text(win, 0).unwrap(), "+----+");
    }
}
