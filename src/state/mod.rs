//! State Module - runtime state shared by the widgets
//!
//! - **Focus** - the focus manager: Tab cycling, key dispatch, the widget loop
//! - **Scroll** - the visible window over a list of lines or options

mod focus;
mod scroll;

pub use focus::*;
pub use scroll::*;
