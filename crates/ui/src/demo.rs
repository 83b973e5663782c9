//! Sample data and column schema for the demo pages.

use serde::{Deserialize, Serialize};

use crate::cell::{Badge, BadgeVariant, Cell, value_text};
use crate::table::{Align, Column};

/// `(value, label)` pairs for the department select.
pub const DEPARTMENT_OPTIONS: [(&str, &str); 5] = [
    ("engineering", "Engineering"),
    ("marketing", "Marketing"),
    ("sales", "Sales"),
    ("hr", "Human Resources"),
    ("finance", "Finance"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl User {
    fn new(id: u32, name: &str, email: &str, role: &str, status: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status: status.to_string(),
        }
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "Rahul Sharma", "rahul@example.com", "Admin", "Active"),
        User::new(2, "Priya Patel", "priya@example.com", "Editor", "Active"),
        User::new(3, "Amit Kumar", "amit@example.com", "Viewer", "Inactive"),
        User::new(4, "Sneha Gupta", "sneha@example.com", "Editor", "Active"),
        User::new(5, "Vikram Singh", "vikram@example.com", "Admin", "Active"),
    ]
}

pub fn role_variant(role: &str) -> BadgeVariant {
    match role {
        "Admin" => BadgeVariant::Purple,
        "Editor" => BadgeVariant::Info,
        _ => BadgeVariant::Default,
    }
}

pub fn status_variant(status: &str) -> BadgeVariant {
    if status == "Active" {
        BadgeVariant::Success
    } else {
        BadgeVariant::Error
    }
}

pub fn user_columns() -> Vec<Column<User>> {
    vec![
        Column::new("id", "ID").width("w-[60px]"),
        Column::new("name", "Name"),
        Column::new("email", "Email").render(|value, _, _| Cell::Muted(value_text(value))),
        Column::new("role", "Role").render(|value, _, _| {
            let role = value_text(value);
            Cell::Badge(Badge::new(role.clone(), role_variant(&role)))
        }),
        Column::new("status", "Status")
            .align(Align::Right)
            .render(|value, _, _| {
                let status = value_text(value);
                Cell::Badge(Badge::new(status.clone(), status_variant(&status)))
            }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{DataTable, TableView};

    #[test]
    fn users_table_renders_badges() {
        let view = DataTable::new(user_columns()).render(&sample_users());
        let TableView::Rows { rows, headers, .. } = view else {
            panic!("expected rows");
        };

        assert_eq!(headers.len(), 5);
        assert_eq!(headers[4].align, Align::Right);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].cells[2].content, Cell::Muted("rahul@example.com".to_string()));
        assert_eq!(
            rows[0].cells[3].content,
            Cell::Badge(Badge::new("Admin", BadgeVariant::Purple))
        );
        assert_eq!(
            rows[2].cells[4].content,
            Cell::Badge(Badge::new("Inactive", BadgeVariant::Error))
        );
    }

    #[test]
    fn role_variants() {
        assert_eq!(role_variant("Editor"), BadgeVariant::Info);
        assert_eq!(role_variant("Viewer"), BadgeVariant::Default);
    }
}
