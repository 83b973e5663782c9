//! Which request paths the guard runs on at all.
//!
//! Static framework assets and images are served without consulting the
//! session. Everything else goes through [`crate::RoutePolicy::decide`].

pub const DEFAULT_EXCLUDED_PREFIXES: [&str; 3] = ["_next/static", "_next/image", "favicon.ico"];
pub const DEFAULT_EXCLUDED_EXTENSIONS: [&str; 6] = ["svg", "png", "jpg", "jpeg", "gif", "webp"];

/// Exclusion list for the guard: leading-segment prefixes plus file extensions.
///
/// Prefixes are compared against the path with its leading `/` removed;
/// extensions against whatever follows the last `.`. Both are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetMatcher {
    prefixes: Vec<String>,
    extensions: Vec<String>,
}

impl Default for AssetMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_PREFIXES, DEFAULT_EXCLUDED_EXTENSIONS)
    }
}

impl AssetMatcher {
    pub fn new<P, E>(prefixes: P, extensions: E) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// True when the path is a static asset the guard must skip.
    pub fn is_excluded(&self, path: &str) -> bool {
        let rest = path.strip_prefix('/').unwrap_or(path);

        if self.prefixes.iter().any(|p| rest.starts_with(p.as_str())) {
            return true;
        }

        rest.rsplit_once('.')
            .is_some_and(|(_, ext)| self.extensions.iter().any(|e| e == ext))
    }

    /// The guard applies to every path that is not excluded.
    pub fn applies_to(&self, path: &str) -> bool {
        !self.is_excluded(path)
    }
}
