use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use launchpad_ui::{ContactForm, ExampleForm};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::app::submission;

pub fn router() -> Router {
    Router::new()
        .route("/example", post(submit_example))
        .route("/contact", post(submit_contact))
}

pub async fn submit_example(
    Extension(services): Extension<Arc<AppServices>>,
    Json(form): Json<ExampleForm>,
) -> axum::response::Response {
    match submission::submit_example(&form, services.config.submit_delay()).await {
        Ok(toast) => Json(toast).into_response(),
        Err(fields) => errors::field_errors(&fields),
    }
}

pub async fn submit_contact(
    Extension(services): Extension<Arc<AppServices>>,
    Json(form): Json<ContactForm>,
) -> axum::response::Response {
    match submission::submit_contact(&form, services.config.submit_delay()).await {
        Ok(toast) => Json(toast).into_response(),
        Err(toast) => (StatusCode::UNPROCESSABLE_ENTITY, Json(toast)).into_response(),
    }
}
