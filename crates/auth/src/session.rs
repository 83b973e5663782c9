//! Session lookup and the fail-closed mapping to [`SessionStatus`].
//!
//! Tokens are minted elsewhere; this module only verifies them.

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use launchpad_core::UserId;

/// Claims carried by a session token (times are seconds since the epoch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session token is malformed or has a bad signature: {0}")]
    Malformed(String),

    #[error("session has expired")]
    Expired,

    #[error("session not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid session time window (exp <= iat)")]
    InvalidTimeWindow,

    #[error("session backend unavailable: {0}")]
    Backend(String),
}

/// A verified session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub expires_at: DateTime<Utc>,
}

/// Deterministically validate session claims against `now`.
pub fn validate_claims(claims: &SessionClaims, now: DateTime<Utc>) -> Result<(), SessionError> {
    if claims.exp <= claims.iat {
        return Err(SessionError::InvalidTimeWindow);
    }
    let now = now.timestamp();
    if now < claims.iat {
        return Err(SessionError::NotYetValid);
    }
    if now >= claims.exp {
        return Err(SessionError::Expired);
    }
    Ok(())
}

/// Source of sessions for the guard.
///
/// `Ok(None)` means "no session"; `Err` means the lookup itself failed.
pub trait SessionLookup: Send + Sync {
    fn lookup(&self, token: Option<&str>, now: DateTime<Utc>) -> Result<Option<Session>, SessionError>;
}

/// HS256 token verifier with a shared secret.
pub struct Hs256SessionValidator {
    key: DecodingKey,
    validation: Validation,
}

impl Hs256SessionValidator {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Time checks run in `validate_claims` against an explicit clock.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(secret.as_ref()),
            validation,
        }
    }
}

impl core::fmt::Debug for Hs256SessionValidator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hs256SessionValidator").finish_non_exhaustive()
    }
}

impl SessionLookup for Hs256SessionValidator {
    fn lookup(&self, token: Option<&str>, now: DateTime<Utc>) -> Result<Option<Session>, SessionError> {
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.key, &self.validation)
            .map_err(|e| SessionError::Malformed(e.to_string()))?;
        let claims = data.claims;

        validate_claims(&claims, now)?;

        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .ok_or(SessionError::InvalidTimeWindow)?;

        Ok(Some(Session {
            user_id: claims.sub,
            name: claims.name,
            email: claims.email,
            expires_at,
        }))
    }
}

/// What the guard sees: a session, or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    Authenticated(Session),
    #[default]
    Anonymous,
}

impl SessionStatus {
    /// Map a lookup result to a status. Lookup failures count as anonymous.
    pub fn resolve(result: Result<Option<Session>, SessionError>) -> Self {
        match result {
            Ok(Some(session)) => Self::Authenticated(session),
            Ok(None) => Self::Anonymous,
            Err(e) => {
                tracing::warn!(error = %e, "session lookup failed; treating request as anonymous");
                Self::Anonymous
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(s) => Some(s),
            Self::Anonymous => None,
        }
    }
}
