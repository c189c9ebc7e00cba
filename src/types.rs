//! Core types for spark-widgets.
//!
//! These are the small value types shared by the layout engine, the surfaces
//! and the widgets: cell attributes, alignment policies, window handles.

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const UNDERLINE = 1 << 2;
        const BLINK = 1 << 3;
        const REVERSE = 1 << 4;
    }
}

// =============================================================================
// Cell - The atomic unit of a surface
// =============================================================================

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub attrs: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Windows
// =============================================================================

/// Handle to a window owned by a [`Surface`](crate::terminal::Surface).
///
/// The root window always exists and covers the whole surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub usize);

impl WindowId {
    pub const ROOT: WindowId = WindowId(0);
}

/// Caret visibility: hidden, steady or blinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorVisibility {
    Hidden,
    #[default]
    Visible,
    /// Blinking / very visible caret, used while editing.
    Blinking,
}

/// Border style used by `draw_border`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    /// ─ │ ┌ ┐ └ ┘
    #[default]
    Single,
    /// ─ │ ╭ ╮ ╰ ╯
    Rounded,
    /// - | + + + +
    Ascii,
}

impl BorderStyle {
    /// Get the border characters for this style.
    ///
    /// Returns: (horizontal, vertical, top_left, top_right, bottom_right, bottom_left)
    pub const fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            Self::Single => ('─', '│', '┌', '┐', '┘', '└'),
            Self::Rounded => ('─', '│', '╭', '╮', '╯', '╰'),
            Self::Ascii => ('-', '|', '+', '+', '+', '+'),
        }
    }
}

// =============================================================================
// Layout policies
// =============================================================================

/// Horizontal alignment policy for placed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Fixed one-column margin.
    #[default]
    Left,
    Center,
    Right,
    /// Caller-supplied column, used verbatim.
    Manual(u16),
}

/// Direction in which a list of strings is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// One string per row.
    #[default]
    Vertical,
    /// All strings on one row.
    Horizontal,
}

/// A `(row, col)` pair. Meaning (absolute, window-relative, box-relative)
/// depends on who hands it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl Position {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_combine() {
        let attrs = Attr::BOLD | Attr::REVERSE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(attrs.contains(Attr::REVERSE));
        assert!(!attrs.contains(Attr::UNDERLINE));
    }

    #[test]
    fn test_cell_default_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.attrs, Attr::NONE);
    }

    #[test]
    fn test_border_chars() {
        let (h, v, tl, ..) = BorderStyle::Ascii.chars();
        assert_eq!((h, v, tl), ('-', '|', '+'));
    }
}
