//! Text box editing model.
//!
//! The buffer is a list of lines produced by [`reflow`] at the box width. Every
//! edit is applied to the lines, then the whole text is reflowed again, so line
//! boundaries move but content never does.
//!
//! # Addressing
//!
//! The caret is stored relative to the box, `(cursor_y, cursor_x)`, both
//! 1-based, together with the first visible line. The absolute line is
//! `first + cursor_y - 1` and the absolute offset into the text is
//! `line * width + cursor_x - 1`.
//!
//! Edits and horizontal moves work on the offset and map it back with
//! [`TextBoxState::locate`]. An offset at a line boundary lands at column 1 of
//! the next line, except at the very end of a text whose last line is full:
//! there is no next line, so the caret sits at column `width + 1` of the last
//! one. Drawing clamps that column back into the box.

use crate::input::KeyCode;
use crate::layout::{char_len, reflow};
use crate::state::ScrollWindow;

// =============================================================================
// EDIT GATE
// =============================================================================

/// Whether insertions and deletions are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditGate {
    /// No activation key; always editable.
    Always,
    /// Waiting for the activation key.
    Locked(char),
    /// Activated by the key.
    Open(char),
    /// Turned off by Escape; never editable again.
    Sealed,
}

impl EditGate {
    pub fn new(activation_key: Option<char>) -> Self {
        match activation_key {
            Some(key) => EditGate::Locked(key),
            None => EditGate::Always,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditGate::Always | EditGate::Open(_))
    }

    /// Offer a typed character. Returns true if it should be inserted.
    ///
    /// The activation key unlocks a locked gate and is consumed.
    fn admit(&mut self, ch: char) -> bool {
        match *self {
            EditGate::Always | EditGate::Open(_) => true,
            EditGate::Locked(key) if key == ch => {
                *self = EditGate::Open(key);
                tracing::debug!(key = %ch, "text box editing enabled");
                false
            }
            EditGate::Locked(_) | EditGate::Sealed => false,
        }
    }

    fn escape(&mut self) {
        if let EditGate::Open(_) = self {
            *self = EditGate::Sealed;
            tracing::debug!("text box editing sealed");
        }
    }
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Clone)]
pub struct TextBoxState {
    lines: Vec<String>,
    width: usize,
    cursor_y: usize,
    cursor_x: usize,
    scroll: ScrollWindow,
    gate: EditGate,
}

impl TextBoxState {
    /// Create the model for a box of `width` x `height` interior cells.
    ///
    /// Both sizes are at least 1.
    pub fn new(text: &str, width: usize, height: usize, activation_key: Option<char>) -> Self {
        let width = width.max(1);
        Self {
            lines: reflow(text, width),
            width,
            cursor_y: 1,
            cursor_x: 1,
            scroll: ScrollWindow::new(height),
            gate: EditGate::new(activation_key),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The full content, independent of line boundaries.
    pub fn text(&self) -> String {
        self.lines.concat()
    }

    /// Total number of characters.
    pub fn len(&self) -> usize {
        self.lines.iter().map(|l| char_len(l)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.scroll.visible()
    }

    /// Caret relative to the box, `(row, col)`, 1-based and unclamped.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_y, self.cursor_x)
    }

    /// Caret clamped into `[1, height] x [1, width]`.
    pub fn display_cursor(&self) -> (usize, usize) {
        (
            self.cursor_y.clamp(1, self.height()),
            self.cursor_x.clamp(1, self.width),
        )
    }

    pub fn first_visible_line(&self) -> usize {
        self.scroll.first()
    }

    /// Lines currently inside the box.
    pub fn visible_lines(&self) -> &[String] {
        let first = self.scroll.first().min(self.lines.len());
        let end = (first + self.height()).min(self.lines.len());
        &self.lines[first..end]
    }

    /// Absolute index of the caret's line.
    pub fn line_index(&self) -> usize {
        self.scroll.first() + self.cursor_y - 1
    }

    /// Absolute character offset of the caret.
    pub fn position(&self) -> usize {
        self.line_index() * self.width + self.cursor_x - 1
    }

    pub fn gate(&self) -> EditGate {
        self.gate
    }

    pub fn is_editable(&self) -> bool {
        self.gate.is_open()
    }

    /// Map an offset to its `(line, col)`, `col` 1-based.
    pub fn locate(&self, pos: usize) -> (usize, usize) {
        let len = self.len();
        if pos == len && len > 0 && len % self.width == 0 {
            (len / self.width - 1, self.width + 1)
        } else {
            (pos / self.width, pos % self.width + 1)
        }
    }

    /// Apply one key.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Backspace => self.delete_before(),
            KeyCode::Escape => self.gate.escape(),
            _ => {
                if let Some(ch) = key.printable() {
                    self.insert(ch);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    fn insert(&mut self, ch: char) {
        if !self.gate.admit(ch) {
            return;
        }
        let pos = self.position();
        let (index, col) = (self.line_index(), self.cursor_x - 1);
        let line = &mut self.lines[index];
        let at = byte_index(line, col);
        line.insert(at, ch);
        self.reflow();
        self.place(pos + 1);
    }

    fn delete_before(&mut self) {
        if !self.gate.is_open() {
            return;
        }
        let pos = self.position();
        if pos == 0 {
            return;
        }

        let current = self.line_index();
        let (line, col) = if self.cursor_x > 1 {
            (current, self.cursor_x - 2)
        } else {
            let previous = current - 1;
            (previous, char_len(&self.lines[previous]).saturating_sub(1))
        };
        let text = &mut self.lines[line];
        let at = byte_index(text, col);
        if at < text.len() {
            text.remove(at);
        }
        self.reflow();
        self.place(pos - 1);
    }

    fn reflow(&mut self) {
        self.lines = reflow(&self.text(), self.width);
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    fn move_left(&mut self) {
        let pos = self.position();
        if pos > 0 {
            self.place(pos - 1);
        }
    }

    fn move_right(&mut self) {
        let pos = self.position();
        if pos < self.len() {
            self.place(pos + 1);
        }
    }

    fn move_up(&mut self) {
        let line = self.line_index();
        if line == 0 {
            return;
        }
        self.cursor_x = self.cursor_x.min(self.width);
        self.show_line(line - 1);
    }

    fn move_down(&mut self) {
        let target = self.line_index() + 1;
        if target >= self.lines.len() {
            return;
        }
        // No caret past the end of a partial last line
        let is_last = target == self.lines.len() - 1;
        if is_last && self.cursor_x - 1 > char_len(&self.lines[target]) {
            return;
        }
        self.show_line(target);
    }

    /// Put the caret at an offset, scrolling as needed.
    fn place(&mut self, pos: usize) {
        let (line, col) = self.locate(pos);
        self.cursor_x = col;
        self.show_line(line);
    }

    fn show_line(&mut self, line: usize) {
        self.scroll.reveal(line);
        self.cursor_y = self.scroll.slot_of(line) + 1;
    }
}

/// Byte offset of the `n`th character, or the end of the string.
fn byte_index(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

// =============================================================================
// TESTS
// =============================================================================
