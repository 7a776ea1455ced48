//! The showcase page: every input variant plus the two table setups,
//! wired into a single focus ring and event loop.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use log::info;
use thiserror::Error;
use vitrine_widgets::text::{draw_str, fill_row};
use vitrine_widgets::{
    ComponentEvents, DataTable, Event, InputField, InputKind, InputSize, InputVariant, Key, Rect,
    Terminal, TextStyle, Theme,
};

use crate::users::{sample_users, user_columns, User};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal io: {0}")]
    Io(#[from] io::Error),
}

const FOCUS_COUNT: usize = 8;

pub struct Showcase {
    theme: Theme,
    /// Host-owned value backing the controlled email field.
    email_value: Rc<RefCell<String>>,
    email: InputField,
    password: InputField,
    username: InputField,
    full_name: InputField,
    company: InputField,
    bio: InputField,
    basic_table: DataTable<User>,
    selectable_table: DataTable<User>,
    focus: usize,
    loading: bool,
    areas: Vec<Rect>,
}

impl Showcase {
    pub fn new() -> Self {
        let email_value = Rc::new(RefCell::new(String::new()));
        let email_sink = Rc::clone(&email_value);

        let email = InputField::new()
            .label("Email Address")
            .placeholder("Enter your email")
            .value("")
            .size(InputSize::Sm)
            .on_change(move |text| *email_sink.borrow_mut() = text.to_string());

        let password = InputField::new()
            .label("Password")
            .placeholder("Enter your password")
            .kind(InputKind::Password)
            .show_password_toggle(true)
            .size(InputSize::Sm)
            .helper_text("Ctrl+T toggles visibility");

        let username = InputField::new()
            .label("Username")
            .placeholder("Enter username")
            .required(true)
            .invalid(true)
            .error_message("Username is required")
            .size(InputSize::Sm);

        let full_name = InputField::new()
            .label("Full Name")
            .placeholder("Enter your full name")
            .variant(InputVariant::Filled)
            .size(InputSize::Md);

        let company = InputField::new()
            .label("Company")
            .placeholder("Enter company name")
            .variant(InputVariant::Ghost)
            .size(InputSize::Sm);

        let bio = InputField::new()
            .label("Bio")
            .placeholder("Tell us about yourself")
            .size(InputSize::Lg);

        let basic_table = DataTable::with_rows(user_columns(), sample_users());
        let selectable_table = DataTable::with_rows(user_columns(), sample_users())
            .selectable()
            .on_row_select(|rows: &[User]| {
                info!(
                    "selection: {:?}",
                    rows.iter().map(|u| u.name.as_str()).collect::<Vec<_>>()
                );
            });

        Self {
            theme: Theme::default(),
            email_value,
            email,
            password,
            username,
            full_name,
            company,
            bio,
            basic_table,
            selectable_table,
            focus: 0,
            loading: false,
            areas: vec![Rect::default(); FOCUS_COUNT],
        }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        let mut term = Terminal::new()?;

        loop {
            // The controlled field reads the host value every frame.
            let email_value = self.email_value.borrow().clone();
            self.email.sync_value(email_value);

            self.render(&mut term)?;

            for event in term.poll(None)? {
                match event {
                    Event::Key {
                        key: Key::Escape, ..
                    } => return Ok(()),
                    Event::Key { key, modifiers }
                        if key == Key::Char('q') && modifiers.ctrl =>
                    {
                        return Ok(())
                    }
                    Event::Key { key: Key::Tab, .. } => {
                        self.focus = (self.focus + 1) % FOCUS_COUNT;
                    }
                    Event::Key {
                        key: Key::BackTab, ..
                    } => {
                        self.focus = (self.focus + FOCUS_COUNT - 1) % FOCUS_COUNT;
                    }
                    Event::Key { key, modifiers }
                        if key == Key::Char('l') && modifiers.ctrl =>
                    {
                        self.loading = !self.loading;
                        self.selectable_table.set_loading(self.loading);
                    }
                    Event::Key { key, modifiers } => {
                        self.widget_mut(self.focus).on_key(key, modifiers);
                    }
                    Event::Click { x, y, .. } => {
                        let areas = self.areas.clone();
                        for (index, area) in areas.iter().enumerate() {
                            if area.contains(x, y) {
                                self.focus = index;
                                self.widget_mut(index).on_click(x - area.x, y - area.y);
                                break;
                            }
                        }
                    }
                    Event::Resize { .. } => {}
                }
            }
        }
    }

    fn widget_mut(&mut self, index: usize) -> &mut dyn ComponentEvents {
        match index {
            0 => &mut self.email,
            1 => &mut self.password,
            2 => &mut self.username,
            3 => &mut self.full_name,
            4 => &mut self.company,
            5 => &mut self.bio,
            6 => &mut self.basic_table,
            _ => &mut self.selectable_table,
        }
    }

    fn render(&mut self, term: &mut Terminal) -> io::Result<()> {
        let frame = term.frame()?;
        let width = frame.width();
        let height = frame.height();

        let bg = self.theme.background.to_rgb();
        let fg = self.theme.foreground.to_rgb();
        let muted = self.theme.muted.to_rgb();
        let primary = self.theme.primary.to_rgb();

        for y in 0..height {
            fill_row(frame, 0, y, width, ' ', fg, bg, TextStyle::new());
        }

        draw_str(
            frame,
            2,
            0,
            width.saturating_sub(2),
            "Vitrine UI Components",
            fg,
            bg,
            TextStyle::new().bold(),
        );
        draw_str(
            frame,
            2,
            1,
            width.saturating_sub(2),
            "Tab cycles focus · click to interact · Ctrl+L toggles loading · Esc quits",
            muted,
            bg,
            TextStyle::new(),
        );

        let col_w = width.saturating_sub(6) / 2;
        let left_x = 2;
        let right_x = left_x + col_w + 2;
        let mut y = 3;

        let rows = [(0usize, 1usize), (2, 3), (4, 5)];
        for (left, right) in rows {
            let left_h = self.input(left).height();
            let right_h = self.input(right).height();
            self.areas[left] = Rect::new(left_x, y, col_w, left_h);
            self.areas[right] = Rect::new(right_x, y, col_w, right_h);
            y += left_h.max(right_h) + 1;
        }

        for index in 0..6 {
            let area = self.areas[index];
            let focused = self.focus == index;
            self.input(index).render(&self.theme, focused, frame, area);
        }

        let table_width = width.saturating_sub(4);

        let label_fg = if self.focus == 6 { primary } else { muted };
        draw_str(frame, 2, y, table_width, "Basic Table", label_fg, bg, TextStyle::new());
        y += 1;
        let table_h = self
            .basic_table
            .preferred_height()
            .min(height.saturating_sub(y));
        self.areas[6] = Rect::new(2, y, table_width, table_h);
        self.basic_table.render(&self.theme, frame, self.areas[6]);
        y += table_h + 1;

        let label_fg = if self.focus == 7 { primary } else { muted };
        draw_str(
            frame,
            2,
            y,
            table_width,
            "Table with Row Selection",
            label_fg,
            bg,
            TextStyle::new(),
        );
        y += 1;
        let table_h = self
            .selectable_table
            .preferred_height()
            .min(height.saturating_sub(y));
        self.areas[7] = Rect::new(2, y, table_width, table_h);
        self.selectable_table
            .render(&self.theme, frame, self.areas[7]);

        term.flush()
    }

    fn input(&self, index: usize) -> &InputField {
        match index {
            0 => &self.email,
            1 => &self.password,
            2 => &self.username,
            3 => &self.full_name,
            4 => &self.company,
            _ => &self.bio,
        }
    }
}
