//! `launchpad-auth`: route access control (the request guard).
//!
//! No HTTP types here: callers pass the request path and a token string, and
//! act on the returned decision.

pub mod matcher;
pub mod routes;
pub mod session;

pub use matcher::AssetMatcher;
pub use routes::{GuardDecision, MatchMode, RoutePolicy, CALLBACK_PARAM};
pub use session::{
    Hs256SessionValidator, Session, SessionClaims, SessionError, SessionLookup, SessionStatus,
    validate_claims,
};
