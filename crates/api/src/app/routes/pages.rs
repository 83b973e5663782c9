use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::app::services::AppServices;
use crate::app::views;
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/auth/signin", get(sign_in))
        .route("/dashboard", get(dashboard))
        .route("/demo", get(demo))
}

#[derive(Debug, Default, Deserialize)]
pub struct SignInQuery {
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// Only same-origin absolute paths are followed after sign-in.
///
/// Control characters are rejected outright: browsers drop tab, CR and LF
/// from URLs, which would turn `/\t/host` into `//host`.
fn safe_callback(raw: Option<&str>) -> &str {
    match raw {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => "/",
    }
}

fn page(services: &AppServices, ctx: &SessionContext, title: &str, body: &str) -> Html<String> {
    Html(views::layout(title, ctx, services.config.sign_in_path(), body))
}

pub async fn home(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<SessionContext>,
) -> Html<String> {
    page(&services, &ctx, "Home", &views::home())
}

pub async fn sign_in(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<SessionContext>,
    Query(query): Query<SignInQuery>,
) -> Html<String> {
    let callback = safe_callback(query.callback_url.as_deref());
    page(
        &services,
        &ctx,
        "Sign in",
        &views::sign_in(callback, ctx.is_authenticated()),
    )
}

pub async fn dashboard(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<SessionContext>,
) -> Html<String> {
    let greeting = ctx.display_name().unwrap_or_else(|| "there".to_string());
    let table = services.users_table.render(&services.users).to_html();
    page(&services, &ctx, "Dashboard", &views::dashboard(&greeting, &table))
}

pub async fn demo(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<SessionContext>,
) -> Html<String> {
    let table = services.users_table.render(&services.users).to_html();
    page(&services, &ctx, "Demo", &views::demo(&table))
}
