//! Error type for the surface seam.
//!
//! Widget state machines never fail on input. Everything that can go wrong
//! lives at the boundary with the terminal: unknown windows, writes that start
//! outside a window, terminal I/O, and running out of scripted keys.

use thiserror::Error;

use crate::types::WindowId;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown or released window {0:?}")]
    UnknownWindow(WindowId),

    #[error("write at ({row}, {col}) starts outside window {window:?} ({rows}x{cols})")]
    OutOfBounds {
        window: WindowId,
        row: u16,
        col: u16,
        rows: u16,
        cols: u16,
    },

    #[error("widget has already been closed")]
    Closed,

    #[error("interrupted by the user")]
    Interrupted,

    #[error("no more scripted keys")]
    InputExhausted,

    #[error("focus manager needs at least one widget")]
    NoWidgets,
}

pub type Result<T> = std::result::Result<T, WidgetError>;
