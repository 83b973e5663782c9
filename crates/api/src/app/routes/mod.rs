use axum::Router;

pub mod demo;
pub mod forms;
pub mod pages;
pub mod session;
pub mod system;

/// Router for everything behind the request guard (pages, API, fallback).
pub fn router() -> Router {
    Router::new()
        .merge(pages::router())
        .nest("/api/auth", session::router())
        .nest("/api/demo", demo::router())
        .nest("/api/forms", forms::router())
        .fallback(system::not_found)
}
