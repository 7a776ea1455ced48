use vitrine_widgets::{
    Buffer, Column, DataTable, InputField, InputKind, InputVariant, Rect, Theme,
    LOADING_PLACEHOLDER_ROWS,
};

#[derive(Debug, Clone)]
struct Item {
    name: String,
    qty: i64,
}

fn item(name: &str, qty: i64) -> Item {
    Item {
        name: name.to_string(),
        qty,
    }
}

fn columns() -> Vec<Column<Item>> {
    vec![
        Column::new("name", "Name", 12, |i: &Item| {
            Some(i.name.as_str().into())
        })
        .sortable(),
        Column::new("qty", "Qty", 6, |i: &Item| Some(i.qty.into())),
    ]
}

fn render_table(table: &DataTable<Item>, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::new(width, height);
    table.render(&Theme::default(), &mut buf, Rect::from_size(width, height));
    buf
}

fn render_input(field: &InputField, focused: bool, width: u16) -> Buffer {
    let mut buf = Buffer::new(width, field.height());
    field.render(
        &Theme::default(),
        focused,
        &mut buf,
        Rect::from_size(width, field.height()),
    );
    buf
}

// ============================================================================
// DataTable
// ============================================================================

#[test]
fn test_table_renders_header_and_rows() {
    let table = DataTable::with_rows(columns(), vec![item("Alice", 1), item("Bob", 2)]);
    let buf = render_table(&table, 40, 6);

    let header = buf.row_text(0);
    assert!(header.contains("Name"));
    assert!(header.contains("Qty"));
    // Sortable column advertises its indicator, non-sortable does not.
    assert!(header.contains('↕'));

    assert!(buf.row_text(1).contains("Alice"));
    assert!(buf.row_text(1).contains('1'));
    assert!(buf.row_text(2).contains("Bob"));
}

#[test]
fn test_table_renders_active_sort_indicator() {
    let mut table = DataTable::with_rows(columns(), vec![item("Bob", 2), item("Alice", 1)]);
    table.toggle_sort("name");

    let buf = render_table(&table, 40, 6);
    assert!(buf.row_text(0).contains('▲'));
    assert!(buf.row_text(1).contains("Alice"));

    table.toggle_sort("name");
    let buf = render_table(&table, 40, 6);
    assert!(buf.row_text(0).contains('▼'));
    assert!(buf.row_text(1).contains("Bob"));
}

#[test]
fn test_table_checkboxes_and_summary() {
    let mut table =
        DataTable::with_rows(columns(), vec![item("Alice", 1), item("Bob", 2)]).selectable();
    table.toggle_row_selection(0, true);

    let height = table.preferred_height();
    let buf = render_table(&table, 40, height);

    assert!(buf.row_text(1).starts_with('■'));
    assert!(buf.row_text(2).starts_with('□'));
    assert_eq!(buf.row_text(height - 1).trim_start(), "1 of 2 rows selected");
}

#[test]
fn test_select_all_checkbox_reflects_state() {
    let mut table =
        DataTable::with_rows(columns(), vec![item("Alice", 1), item("Bob", 2)]).selectable();

    let buf = render_table(&table, 40, 6);
    assert!(buf.row_text(0).starts_with('□'));

    table.toggle_select_all(true);
    let buf = render_table(&table, 40, 6);
    assert!(buf.row_text(0).starts_with('■'));
}

#[test]
fn test_loading_renders_fixed_placeholder_rows() {
    let mut table = DataTable::with_rows(columns(), vec![item("Alice", 1)]).selectable();
    table.set_loading(true);

    let buf = render_table(&table, 40, 10);

    for row in 1..=LOADING_PLACEHOLDER_ROWS {
        assert!(buf.row_text(row).contains('░'), "row {row} not placeholder");
    }
    assert_eq!(buf.row_text(LOADING_PLACEHOLDER_ROWS + 1), "");

    // The actual data never shows through.
    for y in 0..buf.height() {
        assert!(!buf.row_text(y).contains("Alice"));
    }
}

#[test]
fn test_loading_placeholders_ignore_dataset_size() {
    let mut empty = DataTable::with_rows(columns(), Vec::new());
    empty.set_loading(true);
    let buf = render_table(&empty, 40, 10);
    for row in 1..=LOADING_PLACEHOLDER_ROWS {
        assert!(buf.row_text(row).contains('░'));
    }
}

// ============================================================================
// InputField
// ============================================================================

#[test]
fn test_input_renders_label_value_and_required_marker() {
    let field = InputField::new()
        .label("Email Address")
        .required(true)
        .default_value("a@b.c");

    let buf = render_input(&field, false, 40);
    assert_eq!(buf.row_text(0), "Email Address *");
    assert!(buf.row_text(2).contains("a@b.c"));
}

#[test]
fn test_input_renders_placeholder_when_empty() {
    let field = InputField::new()
        .variant(InputVariant::Filled)
        .placeholder("Enter your email");

    let buf = render_input(&field, false, 40);
    assert!(buf.row_text(0).contains("Enter your email"));
}

#[test]
fn test_outlined_variant_draws_border_box() {
    let field = InputField::new();
    let buf = render_input(&field, false, 20);

    assert!(buf.row_text(0).starts_with('┌'));
    assert!(buf.row_text(0).ends_with('┐'));
    assert!(buf.row_text(1).starts_with('│'));
    assert!(buf.row_text(2).starts_with('└'));
}

#[test]
fn test_password_masking_and_toggle_affordance() {
    let mut field = InputField::new()
        .variant(InputVariant::Filled)
        .kind(InputKind::Password)
        .show_password_toggle(true)
        .default_value("hunter2");

    let buf = render_input(&field, false, 40);
    assert!(buf.row_text(0).contains("•••••••"));
    assert!(buf.row_text(0).contains("[show]"));
    assert!(!buf.row_text(0).contains("hunter2"));

    field.toggle_password_visibility();
    let buf = render_input(&field, false, 40);
    assert!(buf.row_text(0).contains("hunter2"));
    assert!(buf.row_text(0).contains("[hide]"));
}

#[test]
fn test_error_message_line_rendered_below_field() {
    let field = InputField::new()
        .variant(InputVariant::Ghost)
        .label("Username")
        .invalid(true)
        .error_message("Username is required");

    let buf = render_input(&field, false, 40);
    assert_eq!(buf.row_text(field.height() - 1), "Username is required");
}
