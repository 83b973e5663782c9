use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use launchpad_ui::FieldErrors;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 422 with one message per offending field.
pub fn field_errors(errors: &FieldErrors) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({
            "error": "validation_error",
            "message": "one or more fields are invalid",
            "fields": errors,
        })),
    )
        .into_response()
}
