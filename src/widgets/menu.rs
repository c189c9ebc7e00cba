//! MenuSelector - pick one option from a fixed list.
//!
//! Vertical menus show a scrolling slice of the options, one per row.
//! Horizontal menus put every option on row 0 and never scroll.

use super::{OwnedWindow, Widget, paint_within};
use crate::error::Result;
use crate::input::KeyCode;
use crate::layout::place;
use crate::state::ScrollWindow;
use crate::terminal::SharedSurface;
use crate::types::{Alignment, Attr, CursorVisibility, Orientation, WindowId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuProps {
    pub row: u16,
    pub col: u16,
    /// Rows of the menu window; also the number of visible options when vertical.
    pub height: u16,
    pub width: u16,
    pub orientation: Orientation,
    pub alignment: Alignment,
}

impl Default for MenuProps {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            height: 1,
            width: 20,
            orientation: Orientation::Vertical,
            alignment: Alignment::Left,
        }
    }
}

pub struct MenuSelector {
    window: OwnedWindow,
    options: Vec<String>,
    orientation: Orientation,
    alignment: Alignment,
    selected: usize,
    scroll: ScrollWindow,
}

impl MenuSelector {
    pub fn new<S: Into<String>>(
        surface: SharedSurface,
        parent: WindowId,
        options: impl IntoIterator<Item = S>,
        props: MenuProps,
    ) -> Result<Self> {
        let (_, parent_cols) = surface.borrow().dimensions(parent)?;
        let width = props.width.min(parent_cols.saturating_sub(props.col));
        let window = OwnedWindow::create(surface, parent, props.height, width, props.row, props.col)?;
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        tracing::debug!(options = options.len(), height = props.height, width, "menu created");

        Ok(Self {
            window,
            options,
            orientation: props.orientation,
            alignment: props.alignment,
            selected: 0,
            scroll: ScrollWindow::new(props.height as usize),
        })
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the highlighted option.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first option on screen (vertical menus).
    pub fn first_visible(&self) -> usize {
        self.scroll.first()
    }

    /// Index range currently drawn.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        if self.options.is_empty() {
            return 0..0;
        }
        match self.orientation {
            Orientation::Vertical => {
                self.scroll.first()..self.scroll.last_visible(self.options.len()) + 1
            }
            Orientation::Horizontal => 0..self.options.len(),
        }
    }

    /// Draw active and read keys from the menu's own window until Enter.
    pub fn run(&mut self) -> Result<usize> {
        let id = self.window.id()?;
        loop {
            self.draw(true)?;
            let key = self.window.surface().read_key(id)?;
            if let Some(index) = self.handle_input(key) {
                return Ok(index);
            }
        }
    }

    fn move_up(&mut self) {
        if self.orientation == Orientation::Vertical && self.selected > 0 {
            self.selected -= 1;
            self.scroll.reveal(self.selected);
        }
    }

    fn move_down(&mut self) {
        if self.orientation == Orientation::Vertical && self.selected + 1 < self.options.len() {
            self.selected += 1;
            if !self.scroll.contains(self.selected) {
                self.scroll.set_first(self.scroll.first() + 1);
            }
        }
    }

    fn move_left(&mut self) {
        if self.orientation == Orientation::Horizontal && self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn move_right(&mut self) {
        if self.orientation == Orientation::Horizontal && self.selected + 1 < self.options.len() {
            self.selected += 1;
        }
    }
}

impl Widget for MenuSelector {
    fn draw(&self, active: bool) -> Result<()> {
        let id = self.window.id()?;
        let dims = self.window.dimensions()?;
        let range = self.visible_range();
        let shown = &self.options[range.clone()];
        let positions = place(dims.1, 0, shown, self.orientation, self.alignment);

        let mut surface = self.window.surface();
        if active {
            surface.set_cursor_visibility(CursorVisibility::Hidden)?;
        }
        surface.clear(id)?;
        for ((index, option), pos) in range.zip(shown).zip(positions) {
            let attrs = if active && index == self.selected {
                Attr::REVERSE
            } else {
                Attr::NONE
            };
            paint_within(&mut *surface, id, dims, pos.row, pos.col, option, attrs)?;
        }
        surface.refresh(id)
    }

    fn handle_input(&mut self, key: KeyCode) -> Option<usize> {
        match key {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Enter if !self.options.is_empty() => {
                tracing::debug!(selected = self.selected, "menu option chosen");
                return Some(self.selected);
            }
            _ => {}
        }
        None
    }

    fn close(&mut self) -> Result<()> {
        self.window.close()
    }
}
