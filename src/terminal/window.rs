//! Window table shared by the surface implementations.
//!
//! Windows are plain rectangles in absolute surface coordinates. A window is
//! always created inside its parent and clipped to it, so a write that starts
//! inside a window can never touch cells outside the surface.

use std::collections::HashMap;

use crate::error::{Result, WidgetError};
use crate::layout::split_at_width;
use crate::types::{Position, WindowId};

/// Geometry of one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub parent: WindowId,
    /// Absolute position of the top-left cell.
    pub origin: Position,
    pub rows: u16,
    pub cols: u16,
    /// Size asked for at creation, before clipping to the parent.
    pub requested: (u16, u16),
}

impl Window {
    /// Check if a window-relative cell is inside this window.
    #[inline]
    pub fn contains(&self, row: u16, col: u16) -> bool {
        row < self.rows && col < self.cols
    }
}

/// All live windows of a surface, keyed by id. Id 0 is the root.
#[derive(Debug, Clone)]
pub struct WindowTable {
    windows: HashMap<WindowId, Window>,
    next_id: usize,
}

impl WindowTable {
    /// Create a table holding only the root window.
    pub fn new(rows: u16, cols: u16) -> Self {
        let mut windows = HashMap::new();
        windows.insert(
            WindowId::ROOT,
            Window {
                parent: WindowId::ROOT,
                origin: Position::new(0, 0),
                rows,
                cols,
                requested: (rows, cols),
            },
        );
        Self { windows, next_id: 1 }
    }

    /// Look up a live window.
    pub fn get(&self, id: WindowId) -> Result<&Window> {
        self.windows.get(&id).ok_or(WidgetError::UnknownWindow(id))
    }

    /// Check if a window is live.
    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    /// Number of live windows, root included.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Always false: the root window cannot be released.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Create a `rows` x `cols` window at `(row, col)` relative to `parent`.
    ///
    /// The new window is clipped to the parent. Its origin must be inside the
    /// parent.
    pub fn create(
        &mut self,
        parent: WindowId,
        rows: u16,
        cols: u16,
        row: u16,
        col: u16,
    ) -> Result<WindowId> {
        let p = *self.get(parent)?;
        if !p.contains(row, col) {
            return Err(WidgetError::OutOfBounds {
                window: parent,
                row,
                col,
                rows: p.rows,
                cols: p.cols,
            });
        }

        let window = Window {
            parent,
            origin: Position::new(p.origin.row + row, p.origin.col + col),
            rows: rows.min(p.rows - row),
            cols: cols.min(p.cols - col),
            requested: (rows, cols),
        };

        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.windows.insert(id, window);
        Ok(id)
    }

    /// Release a window. The root is never released.
    pub fn release(&mut self, id: WindowId) -> Result<Window> {
        if id == WindowId::ROOT {
            return Err(WidgetError::UnknownWindow(id));
        }
        self.windows.remove(&id).ok_or(WidgetError::UnknownWindow(id))
    }

    /// Resize the root window (terminal resize) and re-clip every child.
    ///
    /// Children keep their origin. A child whose origin falls outside its
    /// parent shrinks to nothing and takes no writes until the terminal grows
    /// back.
    pub fn resize_root(&mut self, rows: u16, cols: u16) {
        let mut ids: Vec<WindowId> = self.windows.keys().copied().collect();
        // Parents always have lower ids than their children
        ids.sort_unstable();
        for id in ids {
            let clipped = if id == WindowId::ROOT {
                (rows, cols)
            } else {
                let w = self.windows[&id];
                let Some(p) = self.windows.get(&w.parent) else {
                    continue;
                };
                let bottom = p.origin.row + p.rows;
                let right = p.origin.col + p.cols;
                (
                    w.requested.0.min(bottom.saturating_sub(w.origin.row)),
                    w.requested.1.min(right.saturating_sub(w.origin.col)),
                )
            };
            if let Some(w) = self.windows.get_mut(&id) {
                (w.rows, w.cols) = clipped;
            }
        }
        tracing::debug!(rows, cols, windows = self.windows.len(), "surface resized");
    }

    /// Translate a window-relative cell into absolute coordinates.
    ///
    /// Fails if the cell lies outside the window.
    pub fn to_absolute(&self, id: WindowId, row: u16, col: u16) -> Result<Position> {
        let w = self.get(id)?;
        if !w.contains(row, col) {
            return Err(WidgetError::OutOfBounds {
                window: id,
                row,
                col,
                rows: w.rows,
                cols: w.cols,
            });
        }
        Ok(Position::new(w.origin.row + row, w.origin.col + col))
    }

    /// Resolve a text write: absolute start position plus the part of `text`
    /// that fits before the window's right edge.
    pub fn clip<'t>(
        &self,
        id: WindowId,
        row: u16,
        col: u16,
        text: &'t str,
    ) -> Result<(Position, &'t str)> {
        let start = self.to_absolute(id, row, col)?;
        let w = self.get(id)?;
        let (visible, _) = split_at_width(text, w.cols - col);
        Ok((start, visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_exists() {
        let table = WindowTable::new(24, 80);
        let root = table.get(WindowId::ROOT).unwrap();
        assert_eq!((root.rows, root.cols), (24, 80));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_create_nested_offsets_origin() {
        let mut table = WindowTable::new(24, 80);
        let outer = table.create(WindowId::ROOT, 10, 40, 2, 5).unwrap();
        let inner = table.create(outer, 3, 10, 1, 1).unwrap();
        assert_eq!(table.get(inner).unwrap().origin, Position::new(3, 6));
    }

    #[test]
    fn test_create_clips_to_parent() {
        let mut table = WindowTable::new(10, 10);
        let id = table.create(WindowId::ROOT, 20, 20, 5, 6).unwrap();
        let w = table.get(id).unwrap();
        assert_eq!((w.rows, w.cols), (5, 4));
    }

    #[test]
    fn test_create_outside_parent_fails() {
        let mut table = WindowTable::new(10, 10);
        assert!(matches!(
            table.create(WindowId::ROOT, 1, 1, 10, 0),
            Err(WidgetError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_release() {
        let mut table = WindowTable::new(10, 10);
        let id = table.create(WindowId::ROOT, 2, 2, 0, 0).unwrap();
        assert!(table.release(id).is_ok());
        assert!(!table.contains(id));
        assert!(matches!(table.release(id), Err(WidgetError::UnknownWindow(_))));
        assert!(table.release(WindowId::ROOT).is_err());
    }

    #[test]
    fn test_resize_reclips_children() {
        let mut table = WindowTable::new(20, 20);
        let outer = table.create(WindowId::ROOT, 10, 10, 5, 5).unwrap();
        let inner = table.create(outer, 4, 8, 2, 2).unwrap();

        table.resize_root(9, 12);
        let o = *table.get(outer).unwrap();
        let i = *table.get(inner).unwrap();
        assert_eq!((o.rows, o.cols), (4, 7));
        assert_eq!((i.rows, i.cols), (2, 5));
        assert!(matches!(
            table.clip(inner, 2, 0, "x"),
            Err(WidgetError::OutOfBounds { .. })
        ));

        table.resize_root(20, 20);
        let i = *table.get(inner).unwrap();
        assert_eq!((i.rows, i.cols), (4, 8));
    }

    #[test]
    fn test_resize_past_origin_empties_child() {
        let mut table = WindowTable::new(20, 20);
        let id = table.create(WindowId::ROOT, 3, 3, 15, 15).unwrap();
        table.resize_root(10, 10);
        let w = *table.get(id).unwrap();
        assert_eq!((w.rows, w.cols), (0, 0));
        assert!(table.clip(id, 0, 0, "x").is_err());
    }

    #[test]
    fn test_clip_truncates_at_right_edge() {
        let mut table = WindowTable::new(10, 20);
        let id = table.create(WindowId::ROOT, 1, 5, 0, 10).unwrap();
        let (start, visible) = table.clip(id, 0, 2, "abcdef").unwrap();
        assert_eq!(start, Position::new(0, 12));
        assert_eq!(visible, "abc");
    }
}
