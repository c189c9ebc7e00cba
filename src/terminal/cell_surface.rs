//! In-memory surface.
//!
//! A 2D grid of [`Cell`]s with the same window semantics as the terminal
//! backend. Keys come from a scripted queue, which makes whole interaction
//! loops testable without a TTY.
//!
//! Uses flat storage with row-major indexing: `index = row * cols + col`

use std::collections::VecDeque;

use super::Surface;
use super::window::WindowTable;
use crate::error::{Result, WidgetError};
use crate::input::KeyCode;
use crate::layout::char_width;
use crate::types::{Attr, BorderStyle, Cell, CursorVisibility, Position, WindowId};

#[derive(Debug, Clone)]
pub struct CellSurface {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
    windows: WindowTable,
    border: BorderStyle,
    cursor: Position,
    cursor_visibility: CursorVisibility,
    keys: VecDeque<KeyCode>,
    refreshes: usize,
}

impl CellSurface {
    /// Create a blank surface of `rows` x `cols` cells.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows as usize * cols as usize],
            windows: WindowTable::new(rows, cols),
            border: BorderStyle::default(),
            cursor: Position::default(),
            cursor_visibility: CursorVisibility::default(),
            keys: VecDeque::new(),
            refreshes: 0,
        }
    }

    /// Use a different border style for `draw_border` (builder).
    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Queue keys to be returned by `read_key` (builder).
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = KeyCode>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Queue more keys.
    pub fn push_keys(&mut self, keys: impl IntoIterator<Item = KeyCode>) {
        self.keys.extend(keys);
    }

    /// Keys not yet consumed.
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// Convert (row, col) to flat index.
    #[inline]
    fn index(&self, row: u16, col: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Get a cell (returns None if out of bounds).
    pub fn get(&self, row: u16, col: u16) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            Some(&self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Characters of one absolute row, padded to the surface width.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|col| self.get(row, col))
            .map(|cell| cell.ch)
            .collect()
    }

    /// Characters of one window row, trailing blanks trimmed.
    pub fn window_row_text(&self, window: WindowId, row: u16) -> Result<String> {
        let w = *self.windows.get(window)?;
        let abs_row = w.origin.row + row;
        let text: String = (0..w.cols)
            .filter_map(|col| self.get(abs_row, w.origin.col + col))
            .map(|cell| cell.ch)
            .collect();
        Ok(text.trim_end().to_string())
    }

    /// Absolute caret position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn cursor_visibility(&self) -> CursorVisibility {
        self.cursor_visibility
    }

    /// Number of `refresh` calls so far.
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    /// Check if a window is still live.
    pub fn has_window(&self, window: WindowId) -> bool {
        self.windows.contains(window)
    }

    /// Number of live windows, root included.
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Geometry of a live window.
    pub fn window(&self, window: WindowId) -> Result<super::Window> {
        self.windows.get(window).copied()
    }

    fn put(&mut self, row: u16, col: u16, ch: char, attrs: Attr) {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            self.cells[idx] = Cell { ch, attrs };
        }
    }
}

impl Surface for CellSurface {
    fn create_window(
        &mut self,
        parent: WindowId,
        rows: u16,
        cols: u16,
        row: u16,
        col: u16,
    ) -> Result<WindowId> {
        let id = self.windows.create(parent, rows, cols, row, col)?;
        tracing::trace!(?id, ?parent, rows, cols, row, col, "window created");
        Ok(id)
    }

    fn release_window(&mut self, window: WindowId) -> Result<()> {
        self.windows.release(window)?;
        tracing::trace!(?window, "window released");
        Ok(())
    }

    fn paint(
        &mut self,
        window: WindowId,
        row: u16,
        col: u16,
        text: &str,
        attrs: Attr,
    ) -> Result<()> {
        let (start, visible) = self.windows.clip(window, row, col, text)?;
        let mut x = start.col;
        for ch in visible.chars() {
            let w = char_width(ch);
            if w == 0 {
                continue;
            }
            self.put(start.row, x, ch, attrs);
            // Continuation cell of a wide glyph
            for extra in 1..w {
                self.put(start.row, x + extra, ' ', attrs);
            }
            x += w;
        }
        Ok(())
    }

    fn set_cursor_visibility(&mut self, mode: CursorVisibility) -> Result<()> {
        self.cursor_visibility = mode;
        Ok(())
    }

    fn move_cursor(&mut self, window: WindowId, row: u16, col: u16) -> Result<()> {
        self.cursor = self.windows.to_absolute(window, row, col)?;
        Ok(())
    }

    fn read_key(&mut self, window: WindowId) -> Result<KeyCode> {
        self.windows.get(window)?;
        self.keys.pop_front().ok_or(WidgetError::InputExhausted)
    }

    fn refresh(&mut self, window: WindowId) -> Result<()> {
        self.windows.get(window)?;
        self.refreshes += 1;
        Ok(())
    }

    fn clear(&mut self, window: WindowId) -> Result<()> {
        let w = *self.windows.get(window)?;
        for row in 0..w.rows {
            for col in 0..w.cols {
                self.put(w.origin.row + row, w.origin.col + col, ' ', Attr::NONE);
            }
        }
        Ok(())
    }

    fn draw_border(&mut self, window: WindowId) -> Result<()> {
        let w = *self.windows.get(window)?;
        if w.rows < 2 || w.cols < 2 {
            return Ok(());
        }

        let (h, v, tl, tr, br, bl) = self.border.chars();
        let (top, left) = (w.origin.row, w.origin.col);
        let (bottom, right) = (top + w.rows - 1, left + w.cols - 1);

        for col in left + 1..right {
            self.put(top, col, h, Attr::NONE);
            self.put(bottom, col, h, Attr::NONE);
        }
        for row in top + 1..bottom {
            self.put(row, left, v, Attr::NONE);
            self.put(row, right, v, Attr::NONE);
        }
        self.put(top, left, tl, Attr::NONE);
        self.put(top, right, tr, Attr::NONE);
        self.put(bottom, right, br, Attr::NONE);
        self.put(bottom, left, bl, Attr::NONE);
        Ok(())
    }

    fn dimensions(&self, window: WindowId) -> Result<(u16, u16)> {
        let w = self.windows.get(window)?;
        Ok((w.rows, w.cols))
    }
}
