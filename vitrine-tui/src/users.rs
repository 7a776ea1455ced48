//! Sample dataset and column set shown by the showcase tables.

use std::fmt;

use vitrine_widgets::{Alignment, CellContent, Color, Column};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Inactive,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Active => f.write_str("active"),
            Status::Inactive => f.write_str("inactive"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: Status,
    pub last_login: String,
}

fn user(
    id: u32,
    name: &str,
    email: &str,
    role: &str,
    status: Status,
    last_login: &str,
) -> User {
    User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status,
        last_login: last_login.to_string(),
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        user(1, "John Doe", "john@example.com", "Admin", Status::Active, "2024-01-15"),
        user(2, "Jane Smith", "jane@example.com", "User", Status::Active, "2024-01-14"),
        user(3, "Bob Johnson", "bob@example.com", "User", Status::Inactive, "2024-01-10"),
        user(4, "Alice Brown", "alice@example.com", "Moderator", Status::Active, "2024-01-13"),
        user(5, "Charlie Wilson", "charlie@example.com", "User", Status::Inactive, "2024-01-08"),
    ]
}

pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID", 4, |u: &User| Some(u.id.into()))
            .sortable()
            .align(Alignment::Right),
        Column::new("name", "Name", 15, |u: &User| Some(u.name.as_str().into())).sortable(),
        Column::new("email", "Email", 20, |u: &User| {
            Some(u.email.as_str().into())
        })
        .sortable(),
        Column::new("role", "Role", 10, |u: &User| Some(u.role.as_str().into())).sortable(),
        Column::new("status", "Status", 9, |u: &User| {
            Some(u.status.to_string().into())
        })
        .sortable()
        .renderer(|value, row: &User, _| {
            let text = value.map(ToString::to_string).unwrap_or_default();
            let color = match row.status {
                Status::Active => Color::oklch(0.72, 0.15, 150.0),
                Status::Inactive => Color::oklch(0.62, 0.19, 25.0),
            };
            CellContent::new(text).fg(color)
        }),
        Column::new("last_login", "Last Login", 11, |u: &User| {
            Some(u.last_login.as_str().into())
        })
        .sortable(),
    ]
}
