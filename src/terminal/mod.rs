//! Terminal Module - the drawing surface the widgets paint into.
//!
//! Widgets never talk to a terminal directly. They hold a [`SharedSurface`]
//! handle and go through the [`Surface`] trait, which covers window creation,
//! painting, caret control and blocking key reads.
//!
//! Two implementations ship with the crate:
//!
//! - [`CellSurface`] - in-memory cell grid with scripted keys (tests, headless)
//! - [`CrosstermSurface`] - real terminal via crossterm
//!
//! # Example
//!
//! ```
//! use spark_widgets::terminal::{shared, CellSurface, Surface};
//! use spark_widgets::types::{Attr, WindowId};
//!
//! let surface = shared(CellSurface::new(5, 20));
//! let win = surface.borrow_mut().create_window(WindowId::ROOT, 3, 10, 1, 1).unwrap();
//! surface.borrow_mut().paint(win, 0, 0, "hi", Attr::BOLD).unwrap();
//! assert_eq!(surface.borrow().row_text(1).trim_end(), " hi");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::Result;
use crate::input::KeyCode;
use crate::types::{Attr, CursorVisibility, WindowId};

mod cell_surface;
mod crossterm_surface;
mod window;

pub use cell_surface::CellSurface;
pub use crossterm_surface::{CrosstermSurface, convert_key_event};
pub use window::{Window, WindowTable};

/// Terminal collaborator consumed by the widgets.
///
/// Coordinates are window-relative `(row, col)`. Writes that start inside the
/// window must succeed; text running past the right edge is clipped.
pub trait Surface {
    /// Create a `rows` x `cols` window at `(row, col)` inside `parent`.
    fn create_window(
        &mut self,
        parent: WindowId,
        rows: u16,
        cols: u16,
        row: u16,
        col: u16,
    ) -> Result<WindowId>;

    /// Release a window created by [`Surface::create_window`].
    fn release_window(&mut self, window: WindowId) -> Result<()>;

    /// Paint `text` at `(row, col)` with the given attributes.
    fn paint(&mut self, window: WindowId, row: u16, col: u16, text: &str, attrs: Attr)
    -> Result<()>;

    fn set_cursor_visibility(&mut self, mode: CursorVisibility) -> Result<()>;

    fn move_cursor(&mut self, window: WindowId, row: u16, col: u16) -> Result<()>;

    /// Block until one key is available.
    fn read_key(&mut self, window: WindowId) -> Result<KeyCode>;

    fn refresh(&mut self, window: WindowId) -> Result<()>;

    /// Blank every cell of the window.
    fn clear(&mut self, window: WindowId) -> Result<()>;

    /// Draw a box along the window's outer cells.
    fn draw_border(&mut self, window: WindowId) -> Result<()>;

    /// Window size as `(rows, cols)`.
    fn dimensions(&self, window: WindowId) -> Result<(u16, u16)>;
}

/// Non-owning handle to a surface, shared by every widget drawing into it.
pub type SharedSurface = Rc<RefCell<dyn Surface>>;

/// Wrap a surface so it can be handed to widgets.
///
/// Returns the concrete type; it coerces to [`SharedSurface`] on use, and the
/// caller keeps typed access (e.g. to inspect a [`CellSurface`]).
pub fn shared<S: Surface + 'static>(surface: S) -> Rc<RefCell<S>> {
    Rc::new(RefCell::new(surface))
}
