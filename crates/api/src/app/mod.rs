//! HTTP application wiring (Axum router + guard + shared services).
//!
//! - `services.rs`: shared, read-only state handed to handlers
//! - `submission.rs`: form submission flow (validate, simulated delay, toast)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `views.rs`: page layout and HTML fragments
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use launchpad_auth::{AssetMatcher, Hs256SessionValidator, SessionLookup};

use crate::config::Config;
use crate::middleware::{self, GuardState};

pub mod errors;
pub mod routes;
pub mod services;
pub mod submission;
pub mod views;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: Config) -> Router {
    let sessions: Arc<dyn SessionLookup> = Arc::new(Hs256SessionValidator::new(config.session_secret()));
    build_app_with_sessions(config, sessions)
}

/// Same router with an explicit session source.
pub fn build_app_with_sessions(config: Config, sessions: Arc<dyn SessionLookup>) -> Router {
    let guard = GuardState {
        policy: Arc::new(config.route_policy()),
        assets: Arc::new(AssetMatcher::default()),
        sessions,
        cookie_name: Arc::from(config.session_cookie()),
    };
    let services = Arc::new(services::AppServices::new(config));

    // Guarded routes: every page, API route and the 404 fallback pass the guard.
    let guarded = routes::router().layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn_with_state(guard, middleware::route_guard))
            .layer(Extension(services)),
    );

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(guarded)
}
