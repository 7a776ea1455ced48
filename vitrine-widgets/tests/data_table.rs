use std::cell::RefCell;
use std::rc::Rc;

use vitrine_widgets::{
    CellValue, Column, ComponentEvents, DataTable, EventResult, Key, Modifiers, SortIndicator,
};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    name: String,
    qty: Option<i64>,
}

fn item(name: &str, qty: impl Into<Option<i64>>) -> Item {
    Item {
        name: name.to_string(),
        qty: qty.into(),
    }
}

fn columns() -> Vec<Column<Item>> {
    vec![
        Column::new("name", "Name", 12, |i: &Item| {
            Some(i.name.as_str().into())
        })
        .sortable(),
        Column::new("qty", "Qty", 6, |i: &Item| i.qty.map(CellValue::Int)).sortable(),
        Column::new("note", "Note", 10, |_: &Item| None),
    ]
}

fn names(table: &DataTable<Item>) -> Vec<String> {
    table.view_rows().iter().map(|i| i.name.clone()).collect()
}

type Payloads = Rc<RefCell<Vec<Vec<String>>>>;

fn selectable_table(rows: Vec<Item>) -> (DataTable<Item>, Payloads) {
    let payloads: Payloads = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&payloads);
    let table = DataTable::with_rows(columns(), rows)
        .selectable()
        .on_row_select(move |rows: &[Item]| {
            sink.borrow_mut()
                .push(rows.iter().map(|i| i.name.clone()).collect());
        });
    (table, payloads)
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_cycle_returns_to_original_order() {
    let rows = vec![item("Carol", 3), item("Alice", 1), item("Bob", 2)];
    let mut table = DataTable::with_rows(columns(), rows);

    table.toggle_sort("name");
    assert_eq!(names(&table), ["Alice", "Bob", "Carol"]);
    assert_eq!(table.sort_indicator("name"), SortIndicator::Ascending);

    table.toggle_sort("name");
    assert_eq!(names(&table), ["Carol", "Bob", "Alice"]);
    assert_eq!(table.sort_indicator("name"), SortIndicator::Descending);

    table.toggle_sort("name");
    assert_eq!(names(&table), ["Carol", "Alice", "Bob"]);
    assert_eq!(table.sort_indicator("name"), SortIndicator::None);
    assert!(table.sort().is_none());
}

#[test]
fn test_switching_columns_restarts_at_ascending() {
    let rows = vec![item("Carol", 3), item("Alice", 1), item("Bob", 2)];
    let mut table = DataTable::with_rows(columns(), rows);

    table.toggle_sort("name");
    table.toggle_sort("name");
    assert_eq!(table.sort_indicator("name"), SortIndicator::Descending);

    table.toggle_sort("qty");
    assert_eq!(table.sort_indicator("qty"), SortIndicator::Ascending);
    assert_eq!(table.sort_indicator("name"), SortIndicator::None);
    assert_eq!(names(&table), ["Alice", "Bob", "Carol"]);
}

#[test]
fn test_sort_is_stable_on_ties_in_both_directions() {
    let rows = vec![
        item("b-first", 2),
        item("a-first", 1),
        item("a-second", 1),
        item("b-second", 2),
    ];
    let mut table = DataTable::with_rows(columns(), rows);

    table.toggle_sort("qty");
    assert_eq!(
        names(&table),
        ["a-first", "a-second", "b-first", "b-second"]
    );

    // Descending reverses the groups, not the tied rows within them.
    table.toggle_sort("qty");
    assert_eq!(
        names(&table),
        ["b-first", "b-second", "a-first", "a-second"]
    );
}

#[test]
fn test_absent_values_sort_last_in_both_directions() {
    let rows = vec![item("none", None), item("two", 2), item("one", 1)];
    let mut table = DataTable::with_rows(columns(), rows);

    table.toggle_sort("qty");
    assert_eq!(names(&table), ["one", "two", "none"]);

    table.toggle_sort("qty");
    assert_eq!(names(&table), ["two", "one", "none"]);
}

#[test]
fn test_unknown_or_unsortable_key_is_a_noop() {
    let rows = vec![item("Bob", 2), item("Alice", 1)];
    let mut table = DataTable::with_rows(columns(), rows);

    table.toggle_sort("missing");
    assert!(table.sort().is_none());
    assert_eq!(names(&table), ["Bob", "Alice"]);

    // "note" exists but is not sortable.
    table.toggle_sort("note");
    assert!(table.sort().is_none());
    assert_eq!(names(&table), ["Bob", "Alice"]);
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_individual_selection_reports_rows_in_view_order() {
    let (mut table, payloads) = selectable_table(vec![item("Alice", 1), item("Bob", 2)]);

    table.toggle_row_selection(0, true);
    assert_eq!(payloads.borrow().last().unwrap(), &["Alice"]);

    table.toggle_row_selection(1, true);
    assert_eq!(payloads.borrow().last().unwrap(), &["Alice", "Bob"]);

    table.toggle_row_selection(0, false);
    assert_eq!(payloads.borrow().last().unwrap(), &["Bob"]);
}

#[test]
fn test_select_all_and_clear() {
    let (mut table, payloads) =
        selectable_table(vec![item("Alice", 1), item("Bob", 2), item("Carol", 3)]);

    table.toggle_select_all(true);
    assert!(table.all_selected());
    assert_eq!(
        table.selection_summary().as_deref(),
        Some("3 of 3 rows selected")
    );
    assert_eq!(payloads.borrow().last().unwrap(), &["Alice", "Bob", "Carol"]);

    table.toggle_select_all(false);
    assert!(!table.all_selected());
    assert_eq!(table.selection_summary(), None);
    assert!(payloads.borrow().last().unwrap().is_empty());
}

#[test]
fn test_all_selected_is_false_for_empty_dataset() {
    let (mut table, _payloads) = selectable_table(Vec::new());
    table.toggle_select_all(true);
    assert!(!table.all_selected());
    assert_eq!(table.selection_summary(), None);
}

#[test]
fn test_selection_follows_row_identity_across_sort() {
    let (mut table, payloads) =
        selectable_table(vec![item("Carol", 3), item("Alice", 1), item("Bob", 2)]);

    // Select "Carol" at view position 0, then sort it to the end.
    table.toggle_row_selection(0, true);
    table.toggle_sort("name");
    assert_eq!(names(&table), ["Alice", "Bob", "Carol"]);

    assert!(!table.is_row_selected(0));
    assert!(table.is_row_selected(2));
    assert_eq!(
        table
            .selected_rows()
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>(),
        ["Carol"]
    );

    // The next callback payload carries the actual rows, in view order.
    table.toggle_row_selection(0, true);
    assert_eq!(payloads.borrow().last().unwrap(), &["Alice", "Carol"]);
}

#[test]
fn test_set_rows_clears_selection_and_keeps_sort() {
    let (mut table, _payloads) = selectable_table(vec![item("Bob", 2), item("Alice", 1)]);

    table.toggle_sort("name");
    table.toggle_row_selection(0, true);
    assert_eq!(table.selected_count(), 1);

    table.set_rows(vec![item("Zed", 9), item("Yan", 8), item("Xia", 7)]);
    assert_eq!(table.selected_count(), 0);
    assert_eq!(table.sort_indicator("name"), SortIndicator::Ascending);
    assert_eq!(names(&table), ["Xia", "Yan", "Zed"]);
}

#[test]
fn test_accessible_labels() {
    let table = DataTable::with_rows(columns(), vec![item("Alice", 1)])
        .selectable()
        .select_all_label("Select every row");

    assert_eq!(table.select_all_text(), "Select every row");
    assert_eq!(table.row_select_label(0), "Select row 1");
    assert_eq!(table.header_sort_label("name").as_deref(), Some("Sort by Name"));
    assert_eq!(table.header_sort_label("note"), None);
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_loading_suppresses_sort_and_selection() {
    let (mut table, payloads) = selectable_table(vec![item("Bob", 2), item("Alice", 1)]);

    table.toggle_row_selection(0, true);
    let calls_before = payloads.borrow().len();

    table.set_loading(true);
    table.toggle_sort("name");
    table.toggle_row_selection(1, true);
    table.toggle_select_all(true);

    assert!(table.sort().is_none());
    assert_eq!(payloads.borrow().len(), calls_before);

    // Pending selection survives a loading round trip.
    table.set_loading(false);
    assert_eq!(table.selected_count(), 1);
    assert!(table.is_row_selected(0));
}

// ============================================================================
// Key and click dispatch
// ============================================================================

#[test]
fn test_space_toggles_selection_at_cursor() {
    let (mut table, payloads) = selectable_table(vec![item("Alice", 1), item("Bob", 2)]);

    assert_eq!(
        table.on_key(Key::Down, Modifiers::new()),
        EventResult::Consumed
    );
    assert_eq!(table.cursor(), Some(0));
    assert_eq!(
        table.on_key(Key::Char(' '), Modifiers::new()),
        EventResult::Consumed
    );
    assert!(table.is_row_selected(0));
    assert_eq!(payloads.borrow().last().unwrap(), &["Alice"]);

    assert_eq!(
        table.on_key(Key::Char(' '), Modifiers::new()),
        EventResult::Consumed
    );
    assert!(!table.is_row_selected(0));
}

#[test]
fn test_ctrl_a_toggles_select_all() {
    let (mut table, _payloads) = selectable_table(vec![item("Alice", 1), item("Bob", 2)]);

    assert_eq!(
        table.on_key(Key::Char('a'), Modifiers::ctrl()),
        EventResult::Consumed
    );
    assert!(table.all_selected());

    table.on_key(Key::Char('a'), Modifiers::ctrl());
    assert_eq!(table.selected_count(), 0);
}

#[test]
fn test_header_click_sorts_and_checkbox_click_selects() {
    let (mut table, _payloads) = selectable_table(vec![item("Bob", 2), item("Alice", 1)]);

    // Header row: x = 3 lands in the "Name" column (after the checkbox cell).
    assert_eq!(table.on_click(3, 0), EventResult::Consumed);
    assert_eq!(names(&table), ["Alice", "Bob"]);

    // First data row, checkbox cell.
    assert_eq!(table.on_click(0, 1), EventResult::Consumed);
    assert!(table.is_row_selected(0));

    // Click below the last row is ignored.
    assert_eq!(table.on_click(0, 9), EventResult::Ignored);
}

#[test]
fn test_keys_ignored_while_loading() {
    let (mut table, _payloads) = selectable_table(vec![item("Alice", 1)]);
    table.set_loading(true);
    assert_eq!(
        table.on_key(Key::Down, Modifiers::new()),
        EventResult::Ignored
    );
    assert_eq!(table.on_click(3, 0), EventResult::Ignored);
}
