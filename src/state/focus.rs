//! Focus System - keyboard focus across a set of widgets.
//!
//! The manager owns an ordered list of widgets and the index of the focused
//! one. Tab moves focus to the next widget (wrapping); every other key goes to
//! the focused widget. The loop ends when that widget reports a selection.
//!
//! The focused index lives in a signal so code outside the loop can observe it.
//!
//! # Example
//!
//! ```
//! use spark_widgets::prelude::*;
//!
//! let surface = shared(CellSurface::new(10, 30).with_keys([
//!     KeyCode::Tab,
//!     KeyCode::Down,
//!     KeyCode::Enter,
//! ]));
//! let name = InputField::new(surface.clone(), WindowId::ROOT, InputFieldProps {
//!     label: "Name:".into(),
//!     ..Default::default()
//! }).unwrap();
//! let menu = MenuSelector::new(surface.clone(), WindowId::ROOT, ["Ok", "Cancel"], MenuProps {
//!     row: 2,
//!     height: 2,
//!     ..Default::default()
//! }).unwrap();
//!
//! let widgets: Vec<Box<dyn Widget>> = vec![Box::new(name), Box::new(menu)];
//! let mut focus = FocusManager::new(surface.clone(), widgets).unwrap();
//! assert_eq!(focus.run().unwrap(), (1, 1));
//! ```

use spark_signals::{Signal, signal};

use crate::error::{Result, WidgetError};
use crate::input::KeyCode;
use crate::terminal::SharedSurface;
use crate::types::WindowId;
use crate::widgets::Widget;

pub struct FocusManager {
    surface: SharedSurface,
    widgets: Vec<Box<dyn Widget>>,
    active: Signal<usize>,
}

impl FocusManager {
    /// Manage `widgets`, focusing the first one.
    ///
    /// Fails with [`WidgetError::NoWidgets`] on an empty list.
    pub fn new(surface: SharedSurface, widgets: Vec<Box<dyn Widget>>) -> Result<Self> {
        if widgets.is_empty() {
            return Err(WidgetError::NoWidgets);
        }
        Ok(Self {
            surface,
            widgets,
            active: signal(0),
        })
    }

    // =========================================================================
    // FOCUS STATE
    // =========================================================================

    /// Index of the focused widget.
    pub fn active_index(&self) -> usize {
        self.active.get()
    }

    /// Signal tracking the focused index.
    pub fn active_signal(&self) -> Signal<usize> {
        self.active.clone()
    }

    pub fn widgets(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    /// Move focus to the next widget, wrapping at the end.
    pub fn focus_next(&mut self) -> usize {
        let next = (self.active_index() + 1) % self.widgets.len();
        self.active.set(next);
        tracing::debug!(focused = next, "focus moved");
        next
    }

    // =========================================================================
    // LOOP
    // =========================================================================

    /// Draw every widget, flagging only the focused one as active.
    pub fn draw_all(&self) -> Result<()> {
        let active = self.active_index();
        for (i, widget) in self.widgets.iter().enumerate() {
            widget.draw(i == active)?;
        }
        Ok(())
    }

    /// One loop step without drawing or reading.
    ///
    /// Returns `(focused index, selection)` when the focused widget selects.
    pub fn dispatch(&mut self, key: KeyCode) -> Option<(usize, usize)> {
        if key == KeyCode::Tab {
            self.focus_next();
            return None;
        }

        let active = self.active_index();
        let selection = self.widgets[active].handle_input(key)?;
        tracing::debug!(widget = active, selection, "selection made");
        Some((active, selection))
    }

    /// Draw, read one key from the root window, dispatch; repeat until a
    /// widget selects.
    pub fn run(&mut self) -> Result<(usize, usize)> {
        self.draw_all()?;
        loop {
            let key = self.surface.borrow_mut().read_key(WindowId::ROOT)?;
            if let Some(result) = self.dispatch(key) {
                return Ok(result);
            }
            self.draw_all()?;
        }
    }

    /// Close every widget. Stops at the first failure.
    pub fn close_all(&mut self) -> Result<()> {
        for widget in &mut self.widgets {
            widget.close()?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
