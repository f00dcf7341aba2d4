//! Identity registry: the fixed, ordered set of tracked players.
//!
//! A [`Roster`] is built once from configuration and shared read-only for the
//! lifetime of the process. Its order is significant: it drives fan-out order
//! and the last-position-wins tie-break of game deduplication.

use std::collections::HashSet;

use super::error::DomainError;
use super::id::{handle_from_url, Identity};

/// Immutable, ordered, duplicate-free list of identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    identities: Vec<Identity>,
}

impl Roster {
    /// Build a roster, rejecting empty lists, blank handles and duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if any invariant is violated.
    pub fn try_new<I, S>(identities: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for (position, raw) in identities.into_iter().enumerate() {
            let raw: String = raw.into();
            let handle = raw.trim();
            if handle.is_empty() {
                return Err(DomainError::BlankIdentity { position });
            }
            if !seen.insert(handle.to_ascii_lowercase()) {
                return Err(DomainError::DuplicateIdentity {
                    identity: handle.to_string(),
                });
            }
            out.push(Identity::new(handle));
        }

        if out.is_empty() {
            return Err(DomainError::EmptyRoster);
        }

        Ok(Self { identities: out })
    }

    /// Identities in registry order.
    #[must_use]
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identity> {
        self.identities.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.identities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// Look up a roster member by handle, ignoring case.
    #[must_use]
    pub fn find(&self, handle: &str) -> Option<&Identity> {
        self.identities.iter().find(|id| id.matches(handle))
    }

    /// Resolve a player profile URL to the roster member it points at.
    ///
    /// Matching is on the URL's final path segment, so `bob` never matches a
    /// URL ending in `bobby`.
    #[must_use]
    pub fn member_for_url(&self, profile_url: &str) -> Option<&Identity> {
        let handle = handle_from_url(profile_url)?;
        self.find(&handle)
    }

    /// Position of an identity in registry order.
    #[must_use]
    pub fn position(&self, identity: &Identity) -> Option<usize> {
        self.identities
            .iter()
            .position(|id| id.matches(identity.as_str()))
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Identity;
    type IntoIter = std::slice::Iter<'a, Identity>;

    fn into_iter(self) -> Self::IntoIter {
        self.identities.iter()
    }
}
