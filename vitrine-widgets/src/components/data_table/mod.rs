//! DataTable widget - a table with typed columns, row selection, and
//! click-to-sort headers.
//!
//! The DataTable provides:
//! - Column-based layout with a sticky header row
//! - Sortable columns with a three-state sort cycle per column
//!   (ascending, descending, back to original order)
//! - Multi-row selection with a select-all header checkbox
//! - A loading mode that replaces rows with placeholder content
//!
//! Sorting is stable and derived: the dataset itself is never reordered,
//! only the view over it. Selection is reported to the host through the
//! `on_row_select` callback with the selected rows in view order.
//!
//! # Example
//!
//! ```ignore
//! use vitrine_widgets::{Column, DataTable};
//!
//! #[derive(Clone)]
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! let columns = vec![
//!     Column::new("name", "Name", 20, |u: &User| Some(u.name.as_str().into())).sortable(),
//!     Column::new("age", "Age", 6, |u: &User| Some(u.age.into())).sortable(),
//! ];
//! let mut table = DataTable::with_rows(columns, users)
//!     .selectable()
//!     .on_row_select(|rows| println!("{} selected", rows.len()));
//! table.toggle_sort("age");
//! ```

mod column;
mod events;
mod render;
mod state;

pub use column::{Alignment, CellContent, CellValue, Column};
pub use state::{DataTable, SortDirection, SortIndicator, SortSpec, LOADING_PLACEHOLDER_ROWS};
