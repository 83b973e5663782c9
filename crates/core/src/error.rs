//! Shared error model.

use thiserror::Error;

/// Deterministic failures of the pure crates (bad identifiers, bad settings).
/// Transport and runtime failures belong to the API layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CoreError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
