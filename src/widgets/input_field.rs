//! InputField - single-line bounded text entry.
//!
//! Layout inside its one-row window:
//!
//! ```text
//! Name: abc_
//! ^     ^  ^
//! |     |  caret (active only)
//! |     label width + spacing
//! label, bold
//! ```
//!
//! Only the real value is stored. Password fields render it through [`mask`].

use super::{OwnedWindow, Widget, paint_within};
use crate::error::Result;
use crate::input::KeyCode;
use crate::layout::{char_len, string_width};
use crate::terminal::SharedSurface;
use crate::types::{Attr, CursorVisibility, WindowId};

/// Render `text` as one `mask` character per character.
pub fn mask(text: &str, mask: char) -> String {
    std::iter::repeat_n(mask, char_len(text)).collect()
}

// =============================================================================
// PROPS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFieldProps {
    /// Row of the field inside the parent window.
    pub row: u16,
    /// Column of the field inside the parent window.
    pub col: u16,
    pub label: String,
    /// Render the value masked.
    pub password: bool,
    /// Requested capacity; shrunk if the parent is too narrow.
    pub max_length: usize,
    /// Columns between the label and the text.
    pub spacing: u16,
    pub mask: char,
}

impl Default for InputFieldProps {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            label: String::new(),
            password: false,
            max_length: 15,
            spacing: 1,
            mask: '*',
        }
    }
}

// =============================================================================
// INPUT FIELD
// =============================================================================

pub struct InputField {
    window: OwnedWindow,
    label: String,
    spacing: u16,
    max_length: usize,
    mask: Option<char>,
    value: String,
}

impl InputField {
    /// Create the field inside `parent`.
    ///
    /// The window is `max_length + label + spacing + 1` columns wide, capped by
    /// the space left in the parent to the right of `props.col`. The capacity
    /// is then recomputed from the final width. The extra column keeps room
    /// for the caret after a full value.
    pub fn new(surface: SharedSurface, parent: WindowId, props: InputFieldProps) -> Result<Self> {
        let (_, parent_cols) = surface.borrow().dimensions(parent)?;
        let label_len = string_width(&props.label) as usize;
        let overhead = label_len + props.spacing as usize + 1;

        let wanted = props.max_length + overhead;
        let available = parent_cols.saturating_sub(props.col) as usize;
        let width = wanted.min(available);
        let max_length = width.saturating_sub(overhead);

        let window = OwnedWindow::create(surface, parent, 1, width as u16, props.row, props.col)?;
        tracing::debug!(label = %props.label, width, max_length, "input field created");

        Ok(Self {
            window,
            label: props.label,
            spacing: props.spacing,
            max_length,
            mask: props.password.then_some(props.mask),
            value: String::new(),
        })
    }

    /// The real, unmasked content.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Maximum number of characters accepted.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// What the field shows: the value, or its mask for password fields.
    pub fn display_text(&self) -> String {
        match self.mask {
            Some(m) => mask(&self.value, m),
            None => self.value.clone(),
        }
    }

    fn text_column(&self) -> u16 {
        string_width(&self.label) + self.spacing
    }
}

impl Widget for InputField {
    fn draw(&self, active: bool) -> Result<()> {
        let id = self.window.id()?;
        let dims = self.window.dimensions()?;
        let text = self.display_text();
        let text_col = self.text_column();

        let mut surface = self.window.surface();
        surface.clear(id)?;
        paint_within(&mut *surface, id, dims, 0, 0, &self.label, Attr::BOLD)?;
        paint_within(&mut *surface, id, dims, 0, text_col, &text, Attr::NONE)?;

        let (_, cols) = dims;
        if active && cols > 0 {
            surface.set_cursor_visibility(CursorVisibility::Blinking)?;
            let caret = (text_col + string_width(&text)).min(cols - 1);
            surface.move_cursor(id, 0, caret)?;
        }
        surface.refresh(id)
    }

    fn handle_input(&mut self, key: KeyCode) -> Option<usize> {
        match key {
            KeyCode::Backspace => {
                self.value.pop();
            }
            _ => {
                if let Some(c) = key.printable() {
                    if char_len(&self.value) < self.max_length {
                        self.value.push(c);
                    }
                }
            }
        }
        None
    }

    fn close(&mut self) -> Result<()> {
        self.window.close()
    }

    fn value(&self) -> Option<String> {
        Some(self.value.clone())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keys_for;
    use crate::terminal::{CellSurface, Surface, shared};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn field(cols: u16, props: InputFieldProps) -> (Rc<RefCell<CellSurface>>, InputField) {
        let surface = shared(CellSurface::new(3, cols));
        let field = InputField::new(surface.clone(), WindowId::ROOT, props).unwrap();
        (surface, field)
    }

    fn type_all(field: &mut InputField, text: &str) {
        for key in keys_for(text) {
            assert_eq!(field.handle_input(key), None);
        }
    }

    #[test]
    fn test_mask() {
        assert_eq!(mask("abc", '*'), "***");
        assert_eq!(mask("ñá", '#'), "##");
        assert_eq!(mask("", '*'), "");
    }

    #[test]
    fn test_capacity_shrinks_to_parent() {
        let (_s, f) = field(
            10,
            InputFieldProps {
                label: "Name:".into(),
                ..Default::default()
            },
        );
        // 10 - 5 - 1 - 1
        assert_eq!(f.max_length(), 3);
    }

    #[test]
    fn test_fourth_key_rejected() {
        let (_s, mut f) = field(
            10,
            InputFieldProps {
                label: "Name:".into(),
                ..Default::default()
            },
        );
        type_all(&mut f, "abcd");
        assert_eq!(f.value(), "abc");
    }

    #[test]
    fn test_requested_capacity_kept_when_it_fits() {
        let (s, f) = field(
            80,
            InputFieldProps {
                label: "Age:".into(),
                max_length: 3,
                ..Default::default()
            },
        );
        assert_eq!(f.max_length(), 3);
        let (_, cols) = s.borrow().dimensions(f.window.id().unwrap()).unwrap();
        assert_eq!(cols, 9);
    }

    #[test]
    fn test_column_offset_reduces_width() {
        let (_s, f) = field(
            20,
            InputFieldProps {
                col: 12,
                label: "ID".into(),
                ..Default::default()
            },
        );
        // 8 columns left: 8 - 2 - 1 - 1
        assert_eq!(f.max_length(), 4);
    }

    #[test]
    fn test_label_wider_than_parent() {
        let (_s, mut f) = field(
            4,
            InputFieldProps {
                label: "Username:".into(),
                ..Default::default()
            },
        );
        assert_eq!(f.max_length(), 0);
        type_all(&mut f, "x");
        assert_eq!(f.value(), "");
        f.draw(true).unwrap();
    }

    #[test]
    fn test_backspace_and_ignored_keys() {
        let (_s, mut f) = field(40, InputFieldProps::default());
        type_all(&mut f, "hé");
        f.handle_input(KeyCode::Char('ü'));
        f.handle_input(KeyCode::Up);
        f.handle_input(KeyCode::Enter);
        assert_eq!(f.value(), "hé");
        f.handle_input(KeyCode::Backspace);
        f.handle_input(KeyCode::Backspace);
        f.handle_input(KeyCode::Backspace);
        assert_eq!(f.value(), "");
    }

    #[test]
    fn test_draw_password_masked() {
        let (s, mut f) = field(
            30,
            InputFieldProps {
                row: 1,
                label: "Pass:".into(),
                password: true,
                ..Default::default()
            },
        );
        type_all(&mut f, "secret");
        f.draw(true).unwrap();

        let s = s.borrow();
        assert_eq!(s.row_text(1).trim_end(), "Pass: ******");
        assert_eq!(s.get(1, 0).unwrap().attrs, Attr::BOLD);
        assert_eq!(s.cursor_visibility(), CursorVisibility::Blinking);
        assert_eq!(s.cursor().col, 12);
        assert_eq!(f.value(), "secret");
    }

    #[test]
    fn test_caret_clamped_to_last_column() {
        let (s, mut f) = field(
            10,
            InputFieldProps {
                label: "Name:".into(),
                ..Default::default()
            },
        );
        type_all(&mut f, "abc");
        f.draw(true).unwrap();
        // text ends at column 9, the last one
        assert_eq!(s.borrow().cursor().col, 9);
    }

    #[test]
    fn test_inactive_draw_leaves_caret() {
        let (s, f) = field(20, InputFieldProps::default());
        s.borrow_mut()
            .set_cursor_visibility(CursorVisibility::Hidden)
            .unwrap();
        f.draw(false).unwrap();
        assert_eq!(s.borrow().cursor_visibility(), CursorVisibility::Hidden);
    }

    #[test]
    fn test_close_releases_window() {
        let (s, mut f) = field(20, InputFieldProps::default());
        assert_eq!(s.borrow().window_count(), 2);
        f.close().unwrap();
        assert_eq!(s.borrow().window_count(), 1);
        assert!(f.draw(false).is_err());
    }
}
