//! DataTable state: sort cycle, derived view, and row selection.

use std::collections::HashSet;

use log::{debug, trace};

use super::column::Column;

/// Rows shown while the table is in loading mode, regardless of dataset
/// size.
pub const LOADING_PLACEHOLDER_ROWS: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The active sort: which column and which direction. Absence of a
/// `SortSpec` is the unsorted (original order) state, so "key set but no
/// direction" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Per-column header indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    None,
    Ascending,
    Descending,
}

type RowSelectHandler<T> = Box<dyn FnMut(&[T])>;

/// A table over a host-owned dataset with derived sort order and row
/// selection.
///
/// The dataset is treated as read-only: sorting reorders a view (a
/// permutation of row positions), never the rows themselves. All indices
/// in the public API are positions in the current view. Selection is
/// tracked by row identity internally, so a selected row stays selected
/// when re-sorting shuffles its view position.
///
/// Replacing the dataset with [`DataTable::set_rows`] clears the
/// selection and keeps the sort state.
pub struct DataTable<T: Clone> {
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    /// view position -> dataset position
    view: Vec<usize>,
    sort: Option<SortSpec>,
    /// selected dataset positions
    selected: HashSet<usize>,
    /// cursor as a view position
    cursor: Option<usize>,
    loading: bool,
    selectable: bool,
    select_all_label: String,
    on_row_select: Option<RowSelectHandler<T>>,
}

impl<T: Clone> DataTable<T> {
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self::with_rows(columns, Vec::new())
    }

    pub fn with_rows(columns: Vec<Column<T>>, rows: Vec<T>) -> Self {
        debug_assert!(
            columns
                .iter()
                .map(|c| c.key.as_str())
                .collect::<HashSet<_>>()
                .len()
                == columns.len(),
            "duplicate column keys"
        );

        let mut table = Self {
            columns,
            rows,
            view: Vec::new(),
            sort: None,
            selected: HashSet::new(),
            cursor: None,
            loading: false,
            selectable: false,
            select_all_label: "Select all".to_string(),
            on_row_select: None,
        };
        table.rebuild_view();
        table
    }

    /// Enable row selection checkboxes.
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Register the selection-changed callback. It receives the selected
    /// rows in current view order on every selection change.
    pub fn on_row_select(mut self, handler: impl FnMut(&[T]) + 'static) -> Self {
        self.on_row_select = Some(Box::new(handler));
        self
    }

    /// Accessible label for the select-all checkbox.
    pub fn select_all_label(mut self, label: impl Into<String>) -> Self {
        self.select_all_label = label.into();
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// The dataset in its original order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Number of rows in the view (always the dataset length).
    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// The row at a view position.
    pub fn row(&self, index: usize) -> Option<&T> {
        self.view.get(index).map(|&i| &self.rows[i])
    }

    /// The rows in current view order.
    pub fn view_rows(&self) -> Vec<&T> {
        self.view.iter().map(|&i| &self.rows[i]).collect()
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn sort_indicator(&self, key: &str) -> SortIndicator {
        match &self.sort {
            Some(spec) if spec.key == key => match spec.direction {
                SortDirection::Ascending => SortIndicator::Ascending,
                SortDirection::Descending => SortIndicator::Descending,
            },
            _ => SortIndicator::None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn select_all_text(&self) -> &str {
        &self.select_all_label
    }

    /// Accessible label for the checkbox of the row at a view position.
    pub fn row_select_label(&self, index: usize) -> String {
        format!("Select row {}", index + 1)
    }

    /// Accessible label for a sortable column's header, None otherwise.
    pub fn header_sort_label(&self, key: &str) -> Option<String> {
        self.columns
            .iter()
            .find(|c| c.key == key && c.sortable)
            .map(|c| format!("Sort by {}", c.title))
    }

    /// Cursor as a view position.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_row_selected(&self, index: usize) -> bool {
        self.view
            .get(index)
            .is_some_and(|i| self.selected.contains(i))
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// True when every row is selected and the table is non-empty.
    pub fn all_selected(&self) -> bool {
        !self.view.is_empty() && self.selected.len() == self.view.len()
    }

    /// The selected rows in current view order.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.view
            .iter()
            .filter(|i| self.selected.contains(*i))
            .map(|&i| &self.rows[i])
            .collect()
    }

    /// Human-readable summary, present while the table is selectable and
    /// at least one row is selected.
    pub fn selection_summary(&self) -> Option<String> {
        if self.selectable && !self.selected.is_empty() {
            Some(format!(
                "{} of {} rows selected",
                self.selected.len(),
                self.rows.len()
            ))
        } else {
            None
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Replace the dataset. Sort state is kept, selection is cleared,
    /// and the view is recomputed.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        trace!("dataset replaced: {} rows", rows.len());
        self.rows = rows;
        self.selected.clear();
        self.cursor = None;
        self.rebuild_view();
    }

    /// Toggle loading mode. Pending selection survives loading.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Cycle the sort state for a column: ascending, then descending,
    /// then back to the dataset's original order. Activating a different
    /// column restarts the cycle at ascending.
    ///
    /// Unknown or non-sortable keys are ignored.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.loading {
            return;
        }
        let Some(column) = self.columns.iter().find(|c| c.key == key) else {
            return;
        };
        if !column.sortable {
            return;
        }

        self.sort = match self.sort.take() {
            Some(spec) if spec.key == key => match spec.direction {
                SortDirection::Ascending => Some(SortSpec {
                    key: spec.key,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortSpec {
                key: key.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
        debug!("sort state now {:?}", self.sort);
        self.rebuild_view();
    }

    /// Set the membership of the row at a view position and notify the
    /// host.
    ///
    /// An out-of-range index is a caller bug: debug builds fail fast,
    /// release builds ignore the call.
    pub fn toggle_row_selection(&mut self, index: usize, selected: bool) {
        if self.loading {
            return;
        }
        debug_assert!(index < self.view.len(), "row index {index} out of range");
        let Some(&row) = self.view.get(index) else {
            return;
        };

        if selected {
            self.selected.insert(row);
        } else {
            self.selected.remove(&row);
        }
        self.notify_selection();
    }

    /// Select every row or clear the selection, notifying the host either
    /// way.
    pub fn toggle_select_all(&mut self, selected: bool) {
        if self.loading {
            return;
        }
        if selected {
            self.selected = self.view.iter().copied().collect();
        } else {
            self.selected.clear();
        }
        self.notify_selection();
    }

    /// Move the cursor to a view position.
    pub fn set_cursor(&mut self, index: usize) {
        if index < self.view.len() {
            self.cursor = Some(index);
        }
    }

    pub fn cursor_up(&mut self) -> bool {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                true
            }
            None if !self.view.is_empty() => {
                self.cursor = Some(0);
                true
            }
            _ => false,
        }
    }

    pub fn cursor_down(&mut self) -> bool {
        match self.cursor {
            Some(c) if c + 1 < self.view.len() => {
                self.cursor = Some(c + 1);
                true
            }
            None if !self.view.is_empty() => {
                self.cursor = Some(0);
                true
            }
            _ => false,
        }
    }

    pub fn cursor_first(&mut self) -> bool {
        if self.view.is_empty() || self.cursor == Some(0) {
            false
        } else {
            self.cursor = Some(0);
            true
        }
    }

    pub fn cursor_last(&mut self) -> bool {
        let last = self.view.len().checked_sub(1);
        if last.is_none() || self.cursor == last {
            false
        } else {
            self.cursor = last;
            true
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Recompute the view permutation from the dataset and sort state.
    ///
    /// The sort is stable, so rows with equal keys keep their original
    /// relative order in both directions. Absent values sort after every
    /// present value regardless of direction. The cursor follows its row.
    fn rebuild_view(&mut self) {
        let cursor_row = self.cursor.and_then(|c| self.view.get(c).copied());

        let mut order: Vec<usize> = (0..self.rows.len()).collect();
        if let Some(spec) = &self.sort {
            if let Some(column) = self.columns.iter().find(|c| c.key == spec.key) {
                let keys: Vec<_> = self.rows.iter().map(|row| column.value(row)).collect();
                let descending = spec.direction == SortDirection::Descending;
                order.sort_by(|&a, &b| {
                    use std::cmp::Ordering;
                    match (&keys[a], &keys[b]) {
                        (None, None) => Ordering::Equal,
                        (None, Some(_)) => Ordering::Greater,
                        (Some(_), None) => Ordering::Less,
                        (Some(va), Some(vb)) => {
                            let ordering = va.compare(vb);
                            if descending {
                                ordering.reverse()
                            } else {
                                ordering
                            }
                        }
                    }
                });
            }
        }
        self.view = order;

        self.cursor = cursor_row.and_then(|row| self.view.iter().position(|&i| i == row));
    }

    fn notify_selection(&mut self) {
        let payload: Vec<T> = self
            .view
            .iter()
            .filter(|i| self.selected.contains(*i))
            .map(|&i| self.rows[i].clone())
            .collect();
        trace!("selection changed: {} rows", payload.len());
        if let Some(handler) = self.on_row_select.as_mut() {
            handler(&payload);
        }
    }
}
