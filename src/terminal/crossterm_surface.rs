//! Crossterm-backed surface.
//!
//! Drawing commands are queued and only flushed on `refresh` or before a key
//! read, so a full widget redraw reaches the terminal in one write.
//!
//! Ctrl+C arrives as a key in raw mode; it is reported as
//! [`WidgetError::Interrupted`] so the caller's loop unwinds normally.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, SetCursorStyle, Show};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode as CrosstermKeyCode, KeyEvent as CrosstermKeyEvent,
    KeyEventKind, KeyModifiers,
};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use super::Surface;
use super::window::WindowTable;
use crate::error::{Result, WidgetError};
use crate::input::KeyCode;
use crate::types::{Attr, BorderStyle, CursorVisibility, Position, WindowId};

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert a crossterm key event into a widget key code.
///
/// Returns `None` for events that should not reach the widgets at all
/// (releases and repeats reported by enhanced keyboards).
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<KeyCode> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let key = match event.code {
        CrosstermKeyCode::Char(_)
            if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyCode::Unknown
        }
        CrosstermKeyCode::Char(c) => KeyCode::from_char(c),
        CrosstermKeyCode::Enter => KeyCode::Enter,
        CrosstermKeyCode::Tab => KeyCode::Tab,
        CrosstermKeyCode::Backspace => KeyCode::Backspace,
        CrosstermKeyCode::Esc => KeyCode::Escape,
        CrosstermKeyCode::Up => KeyCode::Up,
        CrosstermKeyCode::Down => KeyCode::Down,
        CrosstermKeyCode::Left => KeyCode::Left,
        CrosstermKeyCode::Right => KeyCode::Right,
        _ => KeyCode::Unknown,
    };
    Some(key)
}

fn is_interrupt(event: &CrosstermKeyEvent) -> bool {
    event.code == CrosstermKeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// SURFACE
// =============================================================================

pub struct CrosstermSurface {
    stdout: Stdout,
    windows: WindowTable,
    border: BorderStyle,
    cursor: Position,
    entered: bool,
}

impl CrosstermSurface {
    /// Create a surface sized to the current terminal.
    pub fn new() -> Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            windows: WindowTable::new(rows, cols),
            border: BorderStyle::default(),
            cursor: Position::default(),
            entered: false,
        })
    }

    /// Use a different border style for `draw_border` (builder).
    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, Clear(ClearType::All))?;
        self.entered = true;
        tracing::debug!("terminal entered raw mode");
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn leave(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        execute!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            Show,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        self.entered = false;
        tracing::debug!("terminal restored");
        Ok(())
    }

    fn queue_attrs(&mut self, attrs: Attr) -> io::Result<()> {
        const MAP: [(Attr, Attribute); 5] = [
            (Attr::BOLD, Attribute::Bold),
            (Attr::DIM, Attribute::Dim),
            (Attr::UNDERLINE, Attribute::Underlined),
            (Attr::BLINK, Attribute::SlowBlink),
            (Attr::REVERSE, Attribute::Reverse),
        ];
        for (flag, attribute) in MAP {
            if attrs.contains(flag) {
                queue!(self.stdout, SetAttribute(attribute))?;
            }
        }
        Ok(())
    }
}

impl Drop for CrosstermSurface {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl Surface for CrosstermSurface {
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
        queue!(self.stdout, MoveTo(start.col, start.row))?;
        self.queue_attrs(attrs)?;
        queue!(
            self.stdout,
            Print(visible),
            SetAttribute(Attribute::Reset)
        )?;
        Ok(())
    }

    fn set_cursor_visibility(&mut self, mode: CursorVisibility) -> Result<()> {
        match mode {
            CursorVisibility::Hidden => queue!(self.stdout, Hide)?,
            CursorVisibility::Visible => queue!(self.stdout, SetCursorStyle::SteadyBlock, Show)?,
            CursorVisibility::Blinking => {
                queue!(self.stdout, SetCursorStyle::BlinkingBlock, Show)?
            }
        }
        Ok(())
    }

    fn move_cursor(&mut self, window: WindowId, row: u16, col: u16) -> Result<()> {
        self.cursor = self.windows.to_absolute(window, row, col)?;
        queue!(self.stdout, MoveTo(self.cursor.col, self.cursor.row))?;
        Ok(())
    }

    fn read_key(&mut self, window: WindowId) -> Result<KeyCode> {
        self.windows.get(window)?;
        self.stdout.flush()?;
        loop {
            match event::read()? {
                CrosstermEvent::Key(key) if is_interrupt(&key) => {
                    return Err(WidgetError::Interrupted);
                }
                CrosstermEvent::Key(key) => {
                    if let Some(code) = convert_key_event(key) {
                        return Ok(code);
                    }
                }
                CrosstermEvent::Resize(cols, rows) => {
                    self.windows.resize_root(rows, cols);
                }
                _ => {}
            }
        }
    }

    fn refresh(&mut self, window: WindowId) -> Result<()> {
        self.windows.get(window)?;
        // Painting moves the terminal cursor; put the caret back
        queue!(self.stdout, MoveTo(self.cursor.col, self.cursor.row))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn clear(&mut self, window: WindowId) -> Result<()> {
        let w = *self.windows.get(window)?;
        let blank = " ".repeat(w.cols as usize);
        for row in 0..w.rows {
            queue!(
                self.stdout,
                MoveTo(w.origin.col, w.origin.row + row),
                Print(&blank)
            )?;
        }
        Ok(())
    }

    fn draw_border(&mut self, window: WindowId) -> Result<()> {
        let w = *self.windows.get(window)?;
        if w.rows < 2 || w.cols < 2 {
            return Ok(());
        }

        let (h, v, tl, tr, br, bl) = self.border.chars();
        let inner = w.cols as usize - 2;
        let horizontal: String = std::iter::repeat_n(h, inner).collect();
        let (top, left) = (w.origin.row, w.origin.col);
        let (bottom, right) = (top + w.rows - 1, left + w.cols - 1);

        queue!(
            self.stdout,
            MoveTo(left, top),
            Print(format!("{tl}{horizontal}{tr}")),
            MoveTo(left, bottom),
            Print(format!("{bl}{horizontal}{br}"))
        )?;
        for row in top + 1..bottom {
            queue!(
                self.stdout,
                MoveTo(left, row),
                Print(v),
                MoveTo(right, row),
                Print(v)
            )?;
        }
        Ok(())
    }

    fn dimensions(&self, window: WindowId) -> Result<(u16, u16)> {
        let w = self.windows.get(window)?;
        Ok((w.rows, w.cols))
    }
}

// =============================================================================
// TESTS
// =============================================================================
