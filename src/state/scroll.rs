//! Scroll State - the visible window over a list of lines or options.
//!
//! A scroll window is a `first` offset plus a fixed number of visible slots.
//! The last visible index is derived, never stored:
//!
//! `last = min(first + visible - 1, count - 1)`
//!
//! Movement is always done through [`ScrollWindow::reveal`], which shifts the
//! window by the minimum amount so the given index is on screen.

// =============================================================================
// SCROLL WINDOW
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollWindow {
    first: usize,
    visible: usize,
}

impl ScrollWindow {
    /// Create a window showing `visible` slots (at least one), scrolled to the top.
    pub fn new(visible: usize) -> Self {
        Self {
            first: 0,
            visible: visible.max(1),
        }
    }

    /// Index of the first visible item.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Number of visible slots.
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Index of the last visible item for a list of `count` items.
    pub fn last_visible(&self, count: usize) -> usize {
        (self.first + self.visible - 1).min(count.saturating_sub(1))
    }

    /// Check if `index` is currently on screen.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.first && index < self.first + self.visible
    }

    /// Shift the window the minimum amount needed to show `index`.
    ///
    /// Returns true if the window moved.
    pub fn reveal(&mut self, index: usize) -> bool {
        let before = self.first;
        if index < self.first {
            self.first = index;
        } else if index >= self.first + self.visible {
            self.first = index + 1 - self.visible;
        }
        before != self.first
    }

    /// Slot (0-based row on screen) of a visible `index`.
    pub fn slot_of(&self, index: usize) -> usize {
        index.saturating_sub(self.first)
    }

    /// Set the first visible index directly.
    pub fn set_first(&mut self, first: usize) {
        self.first = first;
    }
}

// =============================================================================
// TESTS
// =============================================================================
