pub mod buffer;
pub mod components;
pub mod event;
pub mod rect;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use components::data_table::{
    Alignment, CellContent, CellValue, Column, DataTable, SortDirection, SortIndicator, SortSpec,
    LOADING_PLACEHOLDER_ROWS,
};
pub use components::input_field::{InputField, InputKind, InputSize, InputVariant, MessageKind};
pub use components::{ComponentEvents, EventResult};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use rect::Rect;
pub use terminal::Terminal;
pub use types::*;
