//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Roster member handle - newtype for type safety.
///
/// The remote service treats handles case-insensitively, so comparisons
/// against URLs and other handles go through [`Identity::matches`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    /// Create a new `Identity` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the handle as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased handle, as used in remote URLs.
    #[must_use]
    pub fn key(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Case-insensitive comparison against a bare handle.
    #[must_use]
    pub fn matches(&self, handle: &str) -> bool {
        self.0.eq_ignore_ascii_case(handle)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Identity {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Identity {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Canonical game URL - the global identity and dedup key of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameUrl(String);

impl GameUrl {
    /// Create a new `GameUrl` from a string.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Get the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for GameUrl {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for GameUrl {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Extract the handle from a player profile URL.
///
/// `https://api.chess.com/pub/player/alice` yields `alice`. Strings that are
/// not absolute URLs fall back to their last `/`-separated segment.
#[must_use]
pub fn handle_from_url(profile_url: &str) -> Option<String> {
    let last = match Url::parse(profile_url) {
        Ok(url) => url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string),
        Err(_) => profile_url
            .split('/')
            .filter(|s| !s.is_empty())
            .last()
            .map(str::to_string),
    };
    last.filter(|s| !s.is_empty())
}
