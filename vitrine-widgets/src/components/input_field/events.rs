//! Event handling for the InputField widget.

use crate::components::events::{ComponentEvents, EventResult};
use crate::event::{Key, Modifiers};

use super::state::InputField;

impl ComponentEvents for InputField {
    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        // A disabled field is display-only.
        if self.is_disabled() {
            return EventResult::Ignored;
        }

        if modifiers.ctrl {
            return match key {
                // Reveal/mask a password field.
                Key::Char('t') => {
                    self.toggle_password_visibility();
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            };
        }
        if modifiers.alt {
            return EventResult::Ignored;
        }

        match key {
            Key::Char(c) => {
                self.insert_char(c);
                EventResult::Consumed
            }
            Key::Backspace => {
                self.delete_back();
                EventResult::Consumed
            }
            Key::Delete => {
                self.delete_forward();
                EventResult::Consumed
            }
            Key::Left => {
                self.move_cursor(-1);
                EventResult::Consumed
            }
            Key::Right => {
                self.move_cursor(1);
                EventResult::Consumed
            }
            Key::Home => {
                self.move_to_start();
                EventResult::Consumed
            }
            Key::End => {
                self.move_to_end();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn on_click(&mut self, x: u16, y: u16) -> EventResult {
        if self.is_disabled() {
            return EventResult::Ignored;
        }

        if y != self.field_row() {
            return EventResult::Ignored;
        }
        let pad = self.content_left();
        self.set_cursor(x.saturating_sub(pad) as usize);
        EventResult::Consumed
    }
}
