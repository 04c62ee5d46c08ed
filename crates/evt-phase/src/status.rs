//! # Event Lifecycle Status
//!
//! The stored administrative status of an event, set by organizer and
//! admin actions elsewhere in the product.
//!
//! ```text
//! Draft ──▶ PendingReview ──▶ Approved ──▶ Live ◀──▶ Paused
//!                                           │
//!                                           └──▶ Ended ──▶ Archived
//!
//! Draft | PendingReview | Approved | Live ──▶ Cancelled
//! ```
//!
//! `Published` is a legacy synonym for `Live` still present in older
//! records. It is kept as a variant so those records decode, and
//! [`EventStatus::normalized()`] folds it into `Live` at the data-access
//! boundary.

use serde::{Deserialize, Serialize};

/// The lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    /// Being edited by the organizer.
    Draft,
    /// Submitted and waiting for admin review.
    PendingReview,
    /// Approved by an admin, not yet live.
    Approved,
    /// Legacy synonym for `Live`.
    Published,
    /// Open to the public.
    Live,
    /// Temporarily paused by the organizer or an admin.
    Paused,
    /// Closed; results final.
    Ended,
    /// Cancelled before or during the run.
    Cancelled,
    /// Removed from listings.
    Archived,
    /// Any stored value this build does not recognize. Never public.
    #[serde(other)]
    Unknown,
}

impl EventStatus {
    /// Statuses under which an event exposes a public phase at all.
    pub fn is_publicly_visible(&self) -> bool {
        matches!(
            self,
            Self::Approved | Self::Published | Self::Live | Self::Paused | Self::Ended
        )
    }

    /// Whether nominations and votes may be submitted while a window is open.
    pub fn accepts_submissions(&self) -> bool {
        matches!(self, Self::Approved | Self::Published | Self::Live)
    }

    /// Fold legacy aliases into their canonical status.
    pub fn normalized(self) -> Self {
        match self {
            Self::Published => Self::Live,
            other => other,
        }
    }

    /// Parse a stored status string. Case-insensitive; `-` and spaces are
    /// treated as `_`. Unrecognized input yields [`EventStatus::Unknown`].
    pub fn parse_lenient(raw: &str) -> Self {
        let key = raw.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        match key.as_str() {
            "DRAFT" => Self::Draft,
            "PENDING_REVIEW" => Self::PendingReview,
            "APPROVED" => Self::Approved,
            "PUBLISHED" => Self::Published,
            "LIVE" => Self::Live,
            "PAUSED" => Self::Paused,
            "ENDED" => Self::Ended,
            "CANCELLED" => Self::Cancelled,
            "ARCHIVED" => Self::Archived,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "DRAFT",
            Self::PendingReview => "PENDING_REVIEW",
            Self::Approved => "APPROVED",
            Self::Published => "PUBLISHED",
            Self::Live => "LIVE",
            Self::Paused => "PAUSED",
            Self::Ended => "ENDED",
            Self::Cancelled => "CANCELLED",
            Self::Archived => "ARCHIVED",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EventStatus; 10] = [
        EventStatus::Draft,
        EventStatus::PendingReview,
        EventStatus::Approved,
        EventStatus::Published,
        EventStatus::Live,
        EventStatus::Paused,
        EventStatus::Ended,
        EventStatus::Cancelled,
        EventStatus::Archived,
        EventStatus::Unknown,
    ];

    #[test]
    fn test_publicly_visible_set() {
        let visible: Vec<_> = ALL.iter().filter(|s| s.is_publicly_visible()).collect();
        assert_eq!(
            visible,
            vec![
                &EventStatus::Approved,
                &EventStatus::Published,
                &EventStatus::Live,
                &EventStatus::Paused,
                &EventStatus::Ended,
            ]
        );
    }

    #[test]
    fn test_paused_and_ended_do_not_accept_submissions() {
        assert!(!EventStatus::Paused.accepts_submissions());
        assert!(!EventStatus::Ended.accepts_submissions());
        assert!(EventStatus::Live.accepts_submissions());
    }

    #[test]
    fn test_accepting_implies_visible() {
        for s in ALL {
            if s.accepts_submissions() {
                assert!(s.is_publicly_visible(), "{s}");
            }
        }
    }

    #[test]
    fn test_normalized_folds_published() {
        assert_eq!(EventStatus::Published.normalized(), EventStatus::Live);
        for s in ALL.into_iter().filter(|s| *s != EventStatus::Published) {
            assert_eq!(s.normalized(), s);
        }
    }

    #[test]
    fn test_parse_lenient_roundtrips_display() {
        for s in ALL {
            assert_eq!(EventStatus::parse_lenient(&s.to_string()), s);
        }
    }

    #[test]
    fn test_parse_lenient_variants() {
        assert_eq!(EventStatus::parse_lenient(" live "), EventStatus::Live);
        assert_eq!(
            EventStatus::parse_lenient("pending-review"),
            EventStatus::PendingReview
        );
        assert_eq!(EventStatus::parse_lenient("SCHEDULED"), EventStatus::Unknown);
        assert_eq!(EventStatus::parse_lenient(""), EventStatus::Unknown);
    }

    #[test]
    fn test_serde_unknown_fails_closed() {
        let s: EventStatus = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
        assert_eq!(s, EventStatus::Unknown);
        assert!(!s.is_publicly_visible());
    }

    #[test]
    fn test_serde_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&EventStatus::PendingReview).unwrap(),
            "\"PENDING_REVIEW\""
        );
        let s: EventStatus = serde_json::from_str("\"LIVE\"").unwrap();
        assert_eq!(s, EventStatus::Live);
    }
}
