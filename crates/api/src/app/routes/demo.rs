use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use launchpad_ui::demo::User;
use launchpad_ui::{Column, DataTable, KeyPath, Notification};

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:index/click", post(click_user))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UsersQuery {
    pub loading: bool,
    /// Render with no rows (empty-state preview).
    pub empty: bool,
    /// Comma separated key paths; replaces the default columns.
    pub columns: Option<String>,
}

fn custom_table(spec: &str) -> Result<DataTable<User>, String> {
    let columns = spec
        .split(',')
        .map(|key| {
            let key = key.trim();
            KeyPath::parse(key)
                .map(|path| Column::with_key(path, key))
                .map_err(|e| e.to_string())
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DataTable::new(columns))
}

/// The users table as a `TableView`.
pub async fn list_users(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<UsersQuery>,
) -> axum::response::Response {
    let table = match query.columns.as_deref() {
        Some(spec) => match custom_table(spec) {
            Ok(table) => table,
            Err(msg) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_column", msg),
        },
        None => services.users_table.clone(),
    };
    let table = table.with_loading(query.loading);

    let rows: &[User] = if query.empty { &[] } else { services.users.as_slice() };
    Json(table.render(rows)).into_response()
}

/// Deliver a row click to the table's handler and answer with an info toast.
pub async fn click_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(index): Path<usize>,
) -> axum::response::Response {
    match services.users.get(index) {
        Some(user) if services.users_table.click(&services.users, index) => {
            Json(Notification::info(format!("Clicked: {}", user.name))).into_response()
        }
        _ => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("no row at index {index}"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_columns_use_the_key_as_header() {
        let table = custom_table("name, role").unwrap();
        let headers: Vec<_> = table.columns().iter().map(Column::header).collect();
        assert_eq!(headers, ["name", "role"]);
    }

    #[test]
    fn custom_columns_reject_empty_segments() {
        assert!(custom_table("name,").is_err());
        assert!(custom_table("user..name").is_err());
    }
}
