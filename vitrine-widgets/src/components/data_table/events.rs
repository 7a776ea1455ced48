//! Event handling for the DataTable widget.

use crate::components::events::{ComponentEvents, EventResult};
use crate::event::{Key, Modifiers};

use super::render::{CELL_GAP, INDICATOR_WIDTH};
use super::state::DataTable;

impl<T: Clone> DataTable<T> {
    /// Which column a click at header x position lands in.
    fn column_from_x(&self, x: u16) -> Option<usize> {
        let offset = if self.is_selectable() {
            INDICATOR_WIDTH + CELL_GAP
        } else {
            0
        };
        if x < offset {
            return None;
        }

        let mut col_x = offset;
        for (i, column) in self.columns().iter().enumerate() {
            if x >= col_x && x < col_x + column.width {
                return Some(i);
            }
            col_x += column.width + CELL_GAP;
        }
        None
    }

    /// Header click: select-all checkbox or sort toggle.
    fn on_header_click(&mut self, x: u16) -> EventResult {
        if self.is_selectable() && x < INDICATOR_WIDTH {
            self.toggle_select_all(!self.all_selected());
            return EventResult::Consumed;
        }

        let Some(index) = self.column_from_x(x) else {
            return EventResult::Ignored;
        };
        let key = self.columns()[index].key.clone();
        if !self.columns()[index].sortable {
            return EventResult::Ignored;
        }
        self.toggle_sort(&key);
        EventResult::Consumed
    }

    /// Row click: move the cursor, and toggle membership when the click
    /// lands on the checkbox cell.
    fn on_row_click(&mut self, x: u16, index: usize) -> EventResult {
        if index >= self.view_len() {
            return EventResult::Ignored;
        }
        self.set_cursor(index);

        if self.is_selectable() && x < INDICATOR_WIDTH {
            let selected = !self.is_row_selected(index);
            self.toggle_row_selection(index, selected);
        }
        EventResult::Consumed
    }
}

impl<T: Clone> ComponentEvents for DataTable<T> {
    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        if self.is_loading() {
            return EventResult::Ignored;
        }

        match key {
            Key::Up if modifiers.none() => {
                if self.cursor_up() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Down if modifiers.none() => {
                if self.cursor_down() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Home if modifiers.none() => {
                if self.cursor_first() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::End if modifiers.none() => {
                if self.cursor_last() {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Char(' ') if modifiers.none() && self.is_selectable() => {
                if let Some(cursor) = self.cursor() {
                    let selected = !self.is_row_selected(cursor);
                    self.toggle_row_selection(cursor, selected);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Char('a') if modifiers.ctrl && self.is_selectable() => {
                self.toggle_select_all(!self.all_selected());
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_click(&mut self, x: u16, y: u16) -> EventResult {
        if self.is_loading() {
            return EventResult::Ignored;
        }

        if y == 0 {
            return self.on_header_click(x);
        }
        self.on_row_click(x, (y - 1) as usize)
    }
}
