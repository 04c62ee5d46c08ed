//! # Identifier Newtypes
//!
//! Stored records use opaque string identifiers. Wrapping them keeps the
//! namespaces apart: an `OrganizerId` cannot be passed where a
//! `CandidateId` is expected, which matters for the owner check that
//! gates full-data visibility.

use serde::{Deserialize, Serialize};

use crate::error::EvtError;

/// Maximum accepted identifier length.
const MAX_ID_LEN: usize = 128;

/// Unique identifier for an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventId(String);

/// Unique identifier for the organizer account that owns an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrganizerId(String);

/// Unique identifier for a candidate (nominee) within an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CandidateId(String);

fn validate(kind: &'static str, raw: &str) -> Result<String, EvtError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EvtError::InvalidIdentifier {
            kind,
            reason: "must not be empty".to_string(),
        });
    }
    if trimmed.len() > MAX_ID_LEN {
        return Err(EvtError::InvalidIdentifier {
            kind,
            reason: format!("longer than {MAX_ID_LEN} bytes"),
        });
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(EvtError::InvalidIdentifier {
            kind,
            reason: format!("contains whitespace: {trimmed:?}"),
        });
    }
    Ok(trimmed.to_string())
}

macro_rules! string_id {
    ($ty:ident, $kind:literal) => {
        impl $ty {
            /// Create a validated identifier. Surrounding whitespace is trimmed.
            pub fn new(raw: impl AsRef<str>) -> Result<Self, EvtError> {
                validate($kind, raw.as_ref()).map(Self)
            }

            /// Access the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = EvtError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl From<$ty> for String {
            fn from(id: $ty) -> String {
                id.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($kind, ":{}"), self.0)
            }
        }
    };
}

string_id!(EventId, "event");
string_id!(OrganizerId, "organizer");
string_id!(CandidateId, "candidate");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_whitespace() {
        let id = EventId::new("  evt_123 ").unwrap();
        assert_eq!(id.as_str(), "evt_123");
    }

    #[test]
    fn test_empty_rejected() {
        assert!(OrganizerId::new("").is_err());
        assert!(OrganizerId::new("   ").is_err());
    }

    #[test]
    fn test_inner_whitespace_rejected() {
        let err = CandidateId::new("a b").unwrap_err();
        assert!(err.to_string().contains("candidate"));
    }

    #[test]
    fn test_too_long_rejected() {
        let raw = "x".repeat(MAX_ID_LEN + 1);
        assert!(EventId::new(raw).is_err());
    }

    #[test]
    fn test_display_prefix() {
        let id = OrganizerId::new("org_1").unwrap();
        assert_eq!(id.to_string(), "organizer:org_1");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let id = CandidateId::new("cand_9").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cand_9\"");
        let parsed: CandidateId = serde_json::from_str("\"cand_9\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<EventId>("\"\"").is_err());
    }
}
