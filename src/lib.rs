//! # spark-widgets
//!
//! Keyboard-driven widgets for character-grid terminals.
//!
//! Focused signal state comes from [spark-signals](https://github.com/RLabs-Inc/spark-signals).
//!
//! ## Architecture
//!
//! Widgets draw through a shared [`terminal::Surface`] handle; each one owns a
//! single window carved out of a parent window. Layout is pure arithmetic over
//! window sizes, and every widget keeps its interaction state in plain fields
//! updated synchronously per key:
//!
//! ```text
//! read_key → FocusManager::dispatch → Widget::handle_input → draw_all
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Attr, Cell, WindowId, Alignment, etc.)
//! - [`input`] - Key codes and the printable character set
//! - [`layout`] - Text measurement, alignment, bounded painting
//! - [`terminal`] - The `Surface` seam, in-memory and crossterm backends
//! - [`widgets`] - InputField, MenuSelector, TextBox
//! - [`state`] - Focus manager and scroll windows
//! - [`error`] - Error type for the surface seam

pub mod error;
pub mod input;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod types;
pub mod widgets;

// Re-export commonly used items
pub use types::*;

pub use error::{Result, WidgetError};

pub use input::{KeyCode, is_printable, keys_for};

pub use layout::{
    BoundedText, centered_origin, column_for, create_centered_window, paint_aligned,
    paint_bounded, place, place_centered, place_horizontal, place_vertical, reflow,
    string_width,
};

pub use terminal::{CellSurface, CrosstermSurface, SharedSurface, Surface, shared};

pub use state::{FocusManager, ScrollWindow};

pub use widgets::{
    EditGate, InputField, InputFieldProps, MenuProps, MenuSelector, TextBox, TextBoxProps,
    TextBoxState, Widget, mask,
};

/// Everything needed to build and run a form.
pub mod prelude {
    pub use crate::error::{Result, WidgetError};
    pub use crate::input::{KeyCode, keys_for};
    pub use crate::state::FocusManager;
    pub use crate::terminal::{CellSurface, CrosstermSurface, SharedSurface, Surface, shared};
    pub use crate::types::{Alignment, Attr, BorderStyle, Orientation, WindowId};
    pub use crate::widgets::{
        InputField, InputFieldProps, MenuProps, MenuSelector, TextBox, TextBoxProps, Widget,
    };
}
