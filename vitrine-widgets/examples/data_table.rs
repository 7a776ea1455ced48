use vitrine_widgets::{
    CellContent, CellValue, Column, ComponentEvents, DataTable, Event, Key, Rect, Terminal, Theme,
};

#[derive(Clone)]
struct Task {
    id: u32,
    title: &'static str,
    done: bool,
}

fn main() -> std::io::Result<()> {
    let tasks = vec![
        Task { id: 3, title: "Write docs", done: false },
        Task { id: 1, title: "Ship release", done: true },
        Task { id: 2, title: "Fix flaky test", done: false },
    ];

    let columns = vec![
        Column::new("id", "ID", 4, |t: &Task| Some(t.id.into())).sortable(),
        Column::new("title", "Title", 20, |t: &Task| Some(t.title.into())).sortable(),
        Column::new("done", "Done", 6, |t: &Task| Some(t.done.into())).renderer(
            |value, _, _| match value {
                Some(CellValue::Bool(true)) => CellContent::new("yes"),
                _ => CellContent::new("no"),
            },
        ),
    ];

    let mut table = DataTable::with_rows(columns, tasks)
        .selectable()
        .on_row_select(|rows: &[Task]| log::info!("{} rows selected", rows.len()));

    let theme = Theme::default();
    let mut term = Terminal::new()?;

    loop {
        let (width, height) = term.size();
        let frame = term.frame()?;
        table.render(&theme, frame, Rect::from_size(width, height));
        term.flush()?;

        for event in term.poll(None)? {
            match event {
                Event::Key {
                    key: Key::Escape, ..
                } => return Ok(()),
                Event::Key { key, modifiers } => {
                    table.on_key(key, modifiers);
                }
                Event::Click { x, y, .. } => {
                    table.on_click(x, y);
                }
                Event::Resize { .. } => {}
            }
        }
    }
}
