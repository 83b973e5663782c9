use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use launchpad_auth::{AssetMatcher, GuardDecision, RoutePolicy, SessionLookup, SessionStatus};

use crate::context::SessionContext;

#[derive(Clone)]
pub struct GuardState {
    pub policy: Arc<RoutePolicy>,
    pub assets: Arc<AssetMatcher>,
    pub sessions: Arc<dyn SessionLookup>,
    pub cookie_name: Arc<str>,
}

/// Request guard: static assets pass straight through; everything else gets a
/// [`SessionContext`] and is either served or redirected to sign-in.
pub async fn route_guard(State(state): State<GuardState>, mut req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();

    if !state.assets.applies_to(&path) {
        return next.run(req).await;
    }

    let token = extract_token(req.headers(), &state.cookie_name);
    let status = SessionStatus::resolve(state.sessions.lookup(token, Utc::now()));

    match state.policy.decide(&path, &status) {
        GuardDecision::Allow => {
            tracing::debug!(%path, authenticated = status.is_authenticated(), "guard allowed request");
            req.extensions_mut().insert(SessionContext::new(status));
            next.run(req).await
        }
        decision @ GuardDecision::RedirectTo { .. } => {
            let location = decision.location().unwrap_or_else(|| state.policy.sign_in_path().to_string());
            tracing::info!(%path, %location, "redirecting unauthenticated request to sign-in");
            Redirect::temporary(&location).into_response()
        }
    }
}

/// Session token from the named cookie, falling back to `Authorization: Bearer`.
fn extract_token<'h>(headers: &'h HeaderMap, cookie_name: &str) -> Option<&'h str> {
    cookie_value(headers, cookie_name).or_else(|| bearer(headers))
}

fn cookie_value<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim())
        .filter(|v| !v.is_empty())
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(header::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn token_from_named_cookie() {
        let h = headers(&[(header::COOKIE, "theme=dark; session-token=abc.def ; other=1")]);
        assert_eq!(extract_token(&h, "session-token"), Some("abc.def"));
        assert_eq!(extract_token(&h, "missing"), None);
    }

    #[test]
    fn token_from_any_cookie_header() {
        let h = headers(&[(header::COOKIE, "a=1"), (header::COOKIE, "session-token=xyz")]);
        assert_eq!(extract_token(&h, "session-token"), Some("xyz"));
    }

    #[test]
    fn cookie_wins_over_bearer() {
        let h = headers(&[
            (header::COOKIE, "session-token=from-cookie"),
            (header::AUTHORIZATION, "Bearer from-header"),
        ]);
        assert_eq!(extract_token(&h, "session-token"), Some("from-cookie"));
    }

    #[test]
    fn bearer_fallback_and_blank_values() {
        let h = headers(&[(header::AUTHORIZATION, "Bearer  tok ")]);
        assert_eq!(extract_token(&h, "session-token"), Some("tok"));

        let h = headers(&[(header::AUTHORIZATION, "Bearer   "), (header::COOKIE, "session-token=")]);
        assert_eq!(extract_token(&h, "session-token"), None);

        let h = headers(&[(header::AUTHORIZATION, "Basic abc")]);
        assert_eq!(extract_token(&h, "session-token"), None);
    }
}
