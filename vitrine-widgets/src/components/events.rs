use crate::event::{Key, Modifiers};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Trait for widgets that can handle input events.
///
/// The event loop stays a thin dispatcher: it routes key events to the
/// focused widget and click events to the widget under the pointer,
/// translated to widget-relative coordinates.
///
/// Both methods default to `EventResult::Ignored`, so widgets only
/// implement the events they care about.
pub trait ComponentEvents {
    /// Handle a key press while this widget is focused.
    fn on_key(&mut self, _key: Key, _modifiers: Modifiers) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a click at (x, y) relative to the widget's render area.
    fn on_click(&mut self, _x: u16, _y: u16) -> EventResult {
        EventResult::Ignored
    }
}
