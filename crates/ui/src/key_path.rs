//! Dotted key paths into row data (`"user.name"`, `"tags.0"`).

use core::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyPathError {
    #[error("key path is empty")]
    Empty,

    #[error("key path '{0}' has an empty segment")]
    EmptySegment(String),
}

/// A parsed key path: the segments between the dots.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// Split `key` on `.` without validation.
    ///
    /// Empty segments are kept; they only resolve against an object that
    /// literally has an empty member name.
    pub fn new(key: &str) -> Self {
        Self(key.split('.').map(str::to_string).collect())
    }

    /// Split `key` on `.`, rejecting empty keys and empty segments.
    pub fn parse(key: &str) -> Result<Self, KeyPathError> {
        if key.is_empty() {
            return Err(KeyPathError::Empty);
        }
        let path = Self::new(key);
        if path.0.iter().any(String::is_empty) {
            return Err(KeyPathError::EmptySegment(key.to_string()));
        }
        Ok(path)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Walk `root` one segment at a time.
    ///
    /// Objects are indexed by member name, arrays by decimal index. A missing
    /// member, an out-of-range index, or a scalar in the middle of the path
    /// yields `None`. A `null` at the end is returned as `Some(Value::Null)`.
    pub fn resolve<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        self.0.iter().try_fold(root, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }
}

impl FromStr for KeyPath {
    type Err = KeyPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl core::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
