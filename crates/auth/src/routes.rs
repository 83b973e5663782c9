//! Public-route classification and the guard decision.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use launchpad_core::CoreError;

use crate::session::SessionStatus;

/// Query parameter carrying the originally requested path on a sign-in redirect.
pub const CALLBACK_PARAM: &str = "callbackUrl";

pub const DEFAULT_PUBLIC_ROUTES: [&str; 3] = ["/", "/auth/signin", "/api/auth"];
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_SIGN_IN_PATH: &str = "/auth/signin";

/// How a configured route is compared against a request path.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// `path == route` or `path` continues `route` with a `/`.
    ///
    /// The root route `/` only matches `/` itself.
    #[default]
    Segment,

    /// Plain `starts_with`.
    ///
    /// Over-matches siblings (`/auth/signin2` matches `/auth/signin`) and makes
    /// a root route match every path. Kept for compatibility only.
    Raw,
}

impl MatchMode {
    /// Whether `path` falls under `route`. Case-sensitive, no normalization.
    pub fn matches(self, route: &str, path: &str) -> bool {
        match self {
            Self::Raw => route == path || path.starts_with(route),
            Self::Segment => {
                let base = route.trim_end_matches('/');
                if route == path || (!base.is_empty() && base == path) {
                    return true;
                }
                path.strip_prefix(base)
                    .is_some_and(|rest| rest.starts_with('/') && !base.is_empty())
            }
        }
    }
}

impl FromStr for MatchMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "segment" => Ok(Self::Segment),
            "raw" => Ok(Self::Raw),
            other => Err(CoreError::config(format!(
                "route matching must be one of: segment, raw (got '{other}')"
            ))),
        }
    }
}

/// Outcome of the guard for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    /// Render the request normally.
    Allow,

    /// Send the caller to `target`, remembering where they wanted to go.
    RedirectTo { target: String, callback_url: String },
}

impl GuardDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Redirect location with the callback attached as a query parameter.
    ///
    /// `None` for [`GuardDecision::Allow`].
    pub fn location(&self) -> Option<String> {
        match self {
            Self::Allow => None,
            Self::RedirectTo {
                target,
                callback_url,
            } => {
                let query = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair(CALLBACK_PARAM, callback_url)
                    .finish();
                let sep = if target.contains('?') { '&' } else { '?' };
                Some(format!("{target}{sep}{query}"))
            }
        }
    }
}

/// Static access policy: which paths are reachable without a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    public_routes: Vec<String>,
    api_prefix: String,
    sign_in_path: String,
    mode: MatchMode,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_PUBLIC_ROUTES.iter().map(|r| (*r).to_string()),
            DEFAULT_API_PREFIX,
            DEFAULT_SIGN_IN_PATH,
        )
    }
}

impl RoutePolicy {
    /// Build a policy. The sign-in path is always reachable; it is appended to
    /// the public routes when the given list does not already cover it.
    pub fn new<I, S>(public_routes: I, api_prefix: impl Into<String>, sign_in_path: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut policy = Self {
            public_routes: public_routes.into_iter().map(Into::into).collect(),
            api_prefix: api_prefix.into(),
            sign_in_path: sign_in_path.into(),
            mode: MatchMode::default(),
        };
        policy.cover_sign_in();
        policy
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self.cover_sign_in();
        self
    }

    fn cover_sign_in(&mut self) {
        if !self.is_public_route(&self.sign_in_path) {
            self.public_routes.push(self.sign_in_path.clone());
        }
    }

    pub fn public_routes(&self) -> &[String] {
        &self.public_routes
    }

    pub fn api_prefix(&self) -> &str {
        &self.api_prefix
    }

    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    /// Whether `path` is listed (exactly or as a prefix) among the public routes.
    pub fn is_public_route(&self, path: &str) -> bool {
        self.public_routes
            .iter()
            .any(|route| self.mode.matches(route, path))
    }

    /// Whether `path` starts with the reserved API prefix.
    ///
    /// A plain string prefix test in every match mode: `/apiary` counts.
    pub fn is_api_route(&self, path: &str) -> bool {
        path.starts_with(&self.api_prefix)
    }

    /// Public or API: reachable without a session.
    pub fn is_public(&self, path: &str) -> bool {
        self.is_public_route(path) || self.is_api_route(path)
    }

    /// Decide what to do with a request for `path`.
    ///
    /// No IO, no panics. Only the presence of a session is consulted.
    pub fn decide(&self, path: &str, session: &SessionStatus) -> GuardDecision {
        if self.is_public(path) || session.is_authenticated() {
            return GuardDecision::Allow;
        }

        GuardDecision::RedirectTo {
            target: self.sign_in_path.clone(),
            callback_url: path.to_string(),
        }
    }
}
