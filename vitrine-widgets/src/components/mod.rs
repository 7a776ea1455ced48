//! Reusable widgets: a sortable/selectable data table and an input field.
//!
//! Each widget follows the same shape: a state struct owned by the host,
//! mutated through explicit operations or through [`ComponentEvents`]
//! dispatch, and drawn with a `render(theme, buffer, area)` method. State
//! transitions are synchronous; change notifications reach the host
//! through callbacks registered at construction.

pub mod data_table;
mod events;
pub mod input_field;

pub use events::{ComponentEvents, EventResult};
