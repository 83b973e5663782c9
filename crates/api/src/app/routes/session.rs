use axum::{extract::Extension, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new().route("/session", get(current_session))
}

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: SessionUser,
    pub expires: DateTime<Utc>,
}

/// The caller's session, or `null` when anonymous.
pub async fn current_session(
    Extension(ctx): Extension<SessionContext>,
) -> Json<Option<SessionResponse>> {
    Json(ctx.session().map(|s| SessionResponse {
        user: SessionUser {
            id: s.user_id.to_string(),
            name: s.name.clone(),
            email: s.email.clone(),
        },
        expires: s.expires_at,
    }))
}
