//! `launchpad-core`: shared building blocks.
//!
//! Pure types only: error model and strongly-typed identifiers. No HTTP, no IO.

pub mod error;
pub mod id;

pub use error::CoreError;
pub use id::UserId;
