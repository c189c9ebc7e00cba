//! Layout Module - pure placement on a character grid.
//!
//! # Architecture
//!
//! Layout is split in three layers:
//!
//! 1. `text_measure` - display widths, width-bounded cuts, reflow
//! 2. `align` - positions for one or more strings in a window
//! 3. `painter` - painting through a [`Surface`](crate::terminal::Surface)
//!    without overflowing the window
//!
//! The first two never touch a surface, so widgets can compute their
//! geometry up front and tests can check it without drawing.
//!
//! # Example
//!
//! ```
//! use spark_widgets::layout::{place, reflow};
//! use spark_widgets::types::{Alignment, Orientation, Position};
//!
//! assert_eq!(reflow("hello world", 5), vec!["hello", " worl", "d"]);
//!
//! let pos = place(20, 0, &["Yes", "No"], Orientation::Horizontal, Alignment::Left);
//! assert_eq!(pos, vec![Position::new(0, 0), Position::new(0, 4)]);
//! ```

mod align;
mod painter;
mod text_measure;

pub use align::*;
pub use painter::*;
pub use text_measure::*;
