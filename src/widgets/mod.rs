//! Widgets - focus-aware controls drawn into a shared surface.
//!
//! Every widget owns exactly one window, created at construction and released
//! by [`Widget::close`] or on drop, whichever comes first. The surface itself
//! is not owned: widgets hold a [`SharedSurface`] handle and borrow it only
//! for the duration of a draw or a close.
//!
//! - [`InputField`] - single-line bounded text entry, optionally masked
//! - [`MenuSelector`] - single selection over a fixed list of options
//! - [`TextBox`] - multi-line editable text with reflow and scrolling

use std::cell::RefMut;

use crate::error::{Result, WidgetError};
use crate::input::KeyCode;
use crate::terminal::{SharedSurface, Surface};
use crate::types::{Attr, WindowId};

mod input_field;
mod menu;
pub mod text_box;

pub use input_field::{InputField, InputFieldProps, mask};
pub use menu::{MenuProps, MenuSelector};
pub use text_box::{EditGate, TextBox, TextBoxProps, TextBoxState};

// =============================================================================
// WIDGET CONTRACT
// =============================================================================

/// Common contract of every control managed by the focus manager.
pub trait Widget {
    /// Redraw the widget. `active` is true for the focused widget only.
    fn draw(&self, active: bool) -> Result<()>;

    /// Feed one key. Returns `Some(value)` only on a terminal selection.
    fn handle_input(&mut self, key: KeyCode) -> Option<usize>;

    /// Blank and release the widget's window. Calling it again is a no-op.
    fn close(&mut self) -> Result<()>;

    /// Text entered so far, for widgets that collect any.
    fn value(&self) -> Option<String> {
        None
    }
}

// =============================================================================
// OWNED WINDOW
// =============================================================================

/// A window acquired from a shared surface, released exactly once.
pub(crate) struct OwnedWindow {
    surface: SharedSurface,
    id: Option<WindowId>,
}

impl OwnedWindow {
    pub(crate) fn create(
        surface: SharedSurface,
        parent: WindowId,
        rows: u16,
        cols: u16,
        row: u16,
        col: u16,
    ) -> Result<Self> {
        let id = surface
            .borrow_mut()
            .create_window(parent, rows, cols, row, col)?;
        Ok(Self {
            surface,
            id: Some(id),
        })
    }

    /// Window id, or [`WidgetError::Closed`] after `close`.
    pub(crate) fn id(&self) -> Result<WindowId> {
        self.id.ok_or(WidgetError::Closed)
    }

    pub(crate) fn surface(&self) -> RefMut<'_, dyn Surface + 'static> {
        self.surface.borrow_mut()
    }

    /// Window size as `(rows, cols)`.
    pub(crate) fn dimensions(&self) -> Result<(u16, u16)> {
        let id = self.id()?;
        self.surface.borrow().dimensions(id)
    }

    /// Blank the window, then release it.
    pub(crate) fn close(&mut self) -> Result<()> {
        let Some(id) = self.id.take() else {
            return Ok(());
        };
        let mut surface = self.surface.borrow_mut();
        surface.clear(id)?;
        surface.refresh(id)?;
        surface.release_window(id)?;
        tracing::debug!(window = ?id, "widget window closed");
        Ok(())
    }
}

impl Drop for OwnedWindow {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            if let Ok(mut surface) = self.surface.try_borrow_mut() {
                let _ = surface.release_window(id);
            }
        }
    }
}

/// Paint `text` if `(row, col)` lies inside a `rows` x `cols` window.
///
/// Widgets lay out against their own window size; anything that would start
/// past an edge is simply not drawn.
pub(crate) fn paint_within(
    surface: &mut dyn Surface,
    window: WindowId,
    (rows, cols): (u16, u16),
    row: u16,
    col: u16,
    text: &str,
    attrs: Attr,
) -> Result<()> {
    if row < rows && col < cols {
        surface.paint(window, row, col, text, attrs)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{CellSurface, shared};

    #[test]
    fn test_owned_window_close_is_idempotent() {
        let surface = shared(CellSurface::new(4, 10));
        let mut window =
            OwnedWindow::create(surface.clone(), WindowId::ROOT, 2, 5, 0, 0).unwrap();
        assert_eq!(surface.borrow().window_count(), 2);

        window.close().unwrap();
        window.close().unwrap();
        assert_eq!(surface.borrow().window_count(), 1);
        assert!(matches!(window.id(), Err(WidgetError::Closed)));
    }

    #[test]
    fn test_owned_window_released_on_drop() {
        let surface = shared(CellSurface::new(4, 10));
        {
            let _window =
                OwnedWindow::create(surface.clone(), WindowId::ROOT, 2, 5, 0, 0).unwrap();
            assert_eq!(surface.borrow().window_count(), 2);
        }
        assert_eq!(surface.borrow().window_count(), 1);
    }

    #[test]
    fn test_paint_within_skips_outside() {
        let mut s = CellSurface::new(1, 4);
        paint_within(&mut s, WindowId::ROOT, (1, 4), 0, 5, "x", Attr::NONE).unwrap();
        paint_within(&mut s, WindowId::ROOT, (1, 4), 0, 1, "x", Attr::NONE).unwrap();
        assert_eq!(s.row_text(0), " x  ");
    }
}
