use vitrine_widgets::{
    ComponentEvents, Event, InputField, InputKind, Key, Rect, Terminal, Theme,
};

fn main() -> std::io::Result<()> {
    let mut field = InputField::new()
        .label("Password")
        .placeholder("Type here, Ctrl+T to reveal, Esc to quit")
        .kind(InputKind::Password)
        .show_password_toggle(true)
        .helper_text("At least 12 characters");

    let theme = Theme::default();
    let mut term = Terminal::new()?;

    loop {
        let (width, _) = term.size();
        let height = field.height();
        let frame = term.frame()?;
        field.render(
            &theme,
            true,
            frame,
            Rect::new(2, 1, width.saturating_sub(4), height),
        );
        term.flush()?;

        for event in term.poll(None)? {
            match event {
                Event::Key {
                    key: Key::Escape, ..
                } => return Ok(()),
                Event::Key { key, modifiers } => {
                    field.on_key(key, modifiers);
                }
                _ => {}
            }
        }
    }
}
