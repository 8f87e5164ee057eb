//! Tutorial record identifiers.
//!
//! Records are keyed by a MongoDB `ObjectId`. On the wire and in logs the identifier is always
//! rendered in its *canonical* form: **24 lowercase hexadecimal characters**, for example
//! `65a1f0c2b3d4e5f601234567`.
//!
//! Identifiers supplied from outside the core (REST paths, CLI arguments) go through
//! [`TutorialId::parse`]. Hex digits are accepted in either case and normalised; anything that
//! is not exactly 24 hex characters is rejected.

use bson::oid::ObjectId;
use std::{fmt, str::FromStr};

/// Error type for identifier parsing.
#[derive(Debug, thiserror::Error)]
pub enum IdError {
    #[error("tutorial id must be 24 hex characters, got: '{0}'")]
    Malformed(String),
}

/// Identifier assigned by the store when a tutorial is created.
///
/// Once constructed the wrapped value is guaranteed valid, so it can be handed to any store
/// implementation without further checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TutorialId(ObjectId);

impl TutorialId {
    /// Allocates a fresh identifier.
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parses a 24-character hex identifier, in either case.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::Malformed`] if `input` is not exactly 24 hex characters.
    pub fn parse(input: &str) -> Result<Self, IdError> {
        if input.len() != 24 || !input.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(IdError::Malformed(input.to_owned()));
        }
        ObjectId::parse_str(input.to_ascii_lowercase())
            .map(Self)
            .map_err(|_| IdError::Malformed(input.to_owned()))
    }

    /// Returns true if `input` is in canonical form. Purely syntactic.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 24
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    pub fn object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for TutorialId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for TutorialId {
    fn from(value: ObjectId) -> Self {
        Self(value)
    }
}

impl fmt::Display for TutorialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl FromStr for TutorialId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TutorialId::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_canonical_and_unique() {
        let a = TutorialId::new();
        let b = TutorialId::new();

        assert_ne!(a, b);
        assert!(TutorialId::is_canonical(&a.to_string()));
        assert!(TutorialId::is_canonical(&b.to_string()));
    }

    #[test]
    fn test_parse_round_trips_display() {
        let id = TutorialId::new();
        let parsed = TutorialId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_normalises_uppercase() {
        let upper = TutorialId::parse("65A1F0C2B3D4E5F601234567").unwrap();
        let lower = TutorialId::parse("65a1f0c2b3d4e5f601234567").unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), "65a1f0c2b3d4e5f601234567");
        assert!(!TutorialId::is_canonical("65A1F0C2B3D4E5F601234567"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "",
            "not-an-id",
            "65a1f0c2b3d4e5f60123456",
            "65a1f0c2b3d4e5f6012345678",
            "65a1f0c2b3d4e5f60123456g",
            "+5a1f0c2b3d4e5f601234567",
        ] {
            assert!(
                matches!(TutorialId::parse(input), Err(IdError::Malformed(_))),
                "expected rejection for {input:?}"
            );
        }
    }
}
