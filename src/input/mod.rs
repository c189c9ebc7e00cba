//! Input Module - Key codes and printable-set checks
//!
//! Widgets only ever see a [`KeyCode`]. Turning raw terminal events into key
//! codes is the surface's job (see [`crate::terminal`]).

mod keyboard;

pub use keyboard::*;
