//! TextBox - bordered multi-line editor.
//!
//! The widget is a thin shell: it owns the window and paints, while all
//! cursor, scroll and reflow logic lives in [`TextBoxState`].
//!
//! # Example
//!
//! ```
//! use spark_widgets::prelude::*;
//!
//! let surface = shared(CellSurface::new(10, 20));
//! let mut text_box = TextBox::new(surface.clone(), WindowId::ROOT, TextBoxProps {
//!     height: 4,
//!     width: 7,
//!     ..Default::default()
//! }).unwrap();
//!
//! for key in keys_for("HELLOWORLD") {
//!     text_box.handle_input(key);
//! }
//! assert_eq!(text_box.lines(), ["HELLO", "WORLD"]);
//! assert_eq!(text_box.cursor(), (2, 6));
//! ```

mod editor;

pub use editor::{EditGate, TextBoxState};

use super::{OwnedWindow, Widget, paint_within};
use crate::error::Result;
use crate::input::KeyCode;
use crate::terminal::SharedSurface;
use crate::types::{Attr, CursorVisibility, WindowId};

/// Rows and columns taken by the border.
const BORDER: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBoxProps {
    pub row: u16,
    pub col: u16,
    /// Outer height, border included.
    pub height: u16,
    /// Outer width, border included.
    pub width: u16,
    /// Initial content.
    pub text: String,
    /// Key that must be typed before edits are accepted.
    pub activation_key: Option<char>,
}

impl Default for TextBoxProps {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            height: 5,
            width: 20,
            text: String::new(),
            activation_key: None,
        }
    }
}

pub struct TextBox {
    window: OwnedWindow,
    state: TextBoxState,
}

impl TextBox {
    pub fn new(surface: SharedSurface, parent: WindowId, props: TextBoxProps) -> Result<Self> {
        let (_, parent_cols) = surface.borrow().dimensions(parent)?;
        let width = props.width.min(parent_cols.saturating_sub(props.col));
        let window = OwnedWindow::create(surface, parent, props.height, width, props.row, props.col)?;

        // The window may come back clipped by the parent
        let (rows, cols) = window.dimensions()?;
        let state = TextBoxState::new(
            &props.text,
            cols.saturating_sub(BORDER) as usize,
            rows.saturating_sub(BORDER) as usize,
            props.activation_key,
        );
        tracing::debug!(rows, cols, gate = ?state.gate(), "text box created");

        Ok(Self { window, state })
    }

    /// The full content.
    pub fn text(&self) -> String {
        self.state.text()
    }

    pub fn lines(&self) -> &[String] {
        self.state.lines()
    }

    /// Caret relative to the box interior, unclamped.
    pub fn cursor(&self) -> (usize, usize) {
        self.state.cursor()
    }

    pub fn first_visible_line(&self) -> usize {
        self.state.first_visible_line()
    }

    pub fn is_editable(&self) -> bool {
        self.state.is_editable()
    }

    pub fn state(&self) -> &TextBoxState {
        &self.state
    }
}

impl Widget for TextBox {
    fn draw(&self, active: bool) -> Result<()> {
        let id = self.window.id()?;
        let dims = self.window.dimensions()?;

        let mut surface = self.window.surface();
        surface.clear(id)?;
        surface.draw_border(id)?;
        for (i, line) in self.state.visible_lines().iter().enumerate() {
            paint_within(&mut *surface, id, dims, 1 + i as u16, 1, line, Attr::NONE)?;
        }

        let (rows, cols) = dims;
        if active && rows > 0 && cols > 0 {
            surface.set_cursor_visibility(CursorVisibility::Blinking)?;
            let (y, x) = self.state.display_cursor();
            let row = (y as u16).min(rows - 1);
            let col = (x as u16).min(cols - 1);
            surface.move_cursor(id, row, col)?;
        }
        surface.refresh(id)
    }

    fn handle_input(&mut self, key: KeyCode) -> Option<usize> {
        self.state.handle_key(key);
        None
    }

    fn close(&mut self) -> Result<()> {
        self.window.close()
    }

    fn value(&self) -> Option<String> {
        Some(self.text())
    }
}
