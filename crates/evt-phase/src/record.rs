//! # Event Records
//!
//! The stored shape of an event as the data-access layer hands it over:
//! a raw status string, timestamps as strings, organizer toggles, and the
//! candidate list. This module is the boundary where those loose fields
//! become an [`EventWindow`].
//!
//! Boundary policy:
//!
//! - Unknown status strings map to [`EventStatus::Unknown`] and resolve as
//!   inactive.
//! - Legacy `PUBLISHED` is folded into `LIVE` when normalization is on.
//! - Timestamps accept any RFC 3339 offset. Empty strings mean "not set".
//!   Anything else that fails to parse is an error naming the field.

use serde::{Deserialize, Serialize};

use evt_core::{EventId, EvtError, OrganizerId, Timestamp};

use crate::banner::Banner;
use crate::redact::{redact_candidates, CandidateView};
use crate::resolver::{PhaseResolver, PhaseResult};
use crate::status::EventStatus;
use crate::viewer::Viewer;
use crate::visibility::{VisibilityDecision, VisibilitySettings};
use crate::window::EventWindow;

/// An event as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Event identifier.
    pub id: EventId,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Owning organizer.
    #[serde(default)]
    pub organizer_id: Option<OrganizerId>,
    /// Raw lifecycle status.
    pub status: String,
    /// When nominations open (RFC 3339, empty for unset).
    #[serde(default)]
    pub nomination_starts_at: Option<String>,
    /// When nominations close.
    #[serde(default)]
    pub nomination_ends_at: Option<String>,
    /// When voting opens.
    #[serde(default)]
    pub voting_starts_at: Option<String>,
    /// When voting closes.
    #[serde(default)]
    pub voting_ends_at: Option<String>,
    /// Organizer's manual nomination switch.
    #[serde(default)]
    pub is_nomination_open: Option<bool>,
    /// Organizer's manual voting switch.
    #[serde(default)]
    pub is_voting_open: Option<bool>,
    /// Publish standings while the event runs.
    #[serde(default)]
    pub show_live_results: bool,
    /// Publish numeric vote counts alongside standings.
    #[serde(default)]
    pub show_vote_count: bool,
    /// Candidates with their current tallies, unredacted.
    #[serde(default)]
    pub candidates: Vec<CandidateView>,
}

/// What a viewer receives for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    /// Event the view was built for.
    pub event_id: EventId,
    /// Resolved phase at the evaluation instant.
    pub phase: PhaseResult,
    /// What this viewer may see.
    pub visibility: VisibilityDecision,
    /// Call-to-action for the event page.
    pub banner: Banner,
    /// Candidate list after redaction.
    pub candidates: Vec<CandidateView>,
}

impl EventRecord {
    /// Decode a record from JSON.
    pub fn from_json(input: &str) -> Result<Self, EvtError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Decode a record from YAML.
    pub fn from_yaml(input: &str) -> Result<Self, EvtError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Parsed lifecycle status, optionally with legacy aliases folded.
    pub fn event_status(&self, normalize_legacy: bool) -> EventStatus {
        let status = EventStatus::parse_lenient(&self.status);
        if status == EventStatus::Unknown {
            tracing::warn!(
                event = %self.id,
                raw_status = %self.status,
                "unrecognized event status, treating as not public"
            );
        }
        if normalize_legacy {
            status.normalized()
        } else {
            status
        }
    }

    /// Map the stored fields to the resolver's input.
    ///
    /// # Errors
    ///
    /// Returns [`EvtError::InvalidTimestamp`] if a non-empty timestamp
    /// field is not valid RFC 3339.
    pub fn to_window(&self, normalize_legacy: bool) -> Result<EventWindow, EvtError> {
        let window = EventWindow {
            status: self.event_status(normalize_legacy),
            nomination_starts_at: parse_field("nominationStartsAt", &self.nomination_starts_at)?,
            nomination_ends_at: parse_field("nominationEndsAt", &self.nomination_ends_at)?,
            voting_starts_at: parse_field("votingStartsAt", &self.voting_starts_at)?,
            voting_ends_at: parse_field("votingEndsAt", &self.voting_ends_at)?,
            nomination_override: self.is_nomination_open,
            voting_override: self.is_voting_open,
        };

        for (stage, w) in [("nomination", window.nomination()), ("voting", window.voting())] {
            if w.is_inverted() {
                tracing::warn!(
                    event = %self.id,
                    stage,
                    "window ends before it starts; it will never open"
                );
            }
        }

        Ok(window)
    }

    /// The organizer's visibility toggles.
    pub fn visibility_settings(&self) -> VisibilitySettings {
        VisibilitySettings {
            show_live_results: self.show_live_results,
            show_vote_count: self.show_vote_count,
        }
    }

    /// Resolve phase and visibility for `viewer` at `now`, and redact the
    /// candidate list accordingly.
    pub fn evaluate(
        &self,
        now: Timestamp,
        viewer: &Viewer,
        normalize_legacy: bool,
    ) -> Result<EventView, EvtError> {
        let window = self.to_window(normalize_legacy)?;
        let phase = PhaseResolver::default().resolve(now, &window);
        let authorized = viewer.is_authorized_for(self.organizer_id.as_ref());
        let visibility = self.visibility_settings().decide(&phase, authorized);
        Ok(EventView {
            event_id: self.id.clone(),
            phase,
            visibility,
            banner: Banner::for_phase(&phase),
            candidates: redact_candidates(visibility, self.candidates.clone()),
        })
    }
}

fn parse_field(field: &'static str, raw: &Option<String>) -> Result<Option<Timestamp>, EvtError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Timestamp::parse_lenient(s)
            .map(Some)
            .map_err(|e| EvtError::InvalidTimestamp {
                input: s.to_string(),
                reason: format!("{field}: {e}"),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Phase;

    const RECORD: &str = r#"{
        "id": "evt_awards_2026",
        "title": "Campus Awards",
        "organizerId": "org_1",
        "status": "PUBLISHED",
        "nominationStartsAt": "2026-05-01T00:00:00Z",
        "nominationEndsAt": "2026-05-10T00:00:00Z",
        "votingStartsAt": "2026-05-10T00:00:00+00:00",
        "votingEndsAt": "2026-05-20T00:00:00.000Z",
        "showLiveResults": false,
        "showVoteCount": true,
        "candidates": [
            {"id": "c1", "name": "Ada", "category": "Best Artist", "voteCount": 12},
            {"id": "c2", "name": "Grace", "voteCount": 30}
        ]
    }"#;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    #[test]
    fn test_to_window_parses_fields() {
        let rec = EventRecord::from_json(RECORD).unwrap();
        let w = rec.to_window(true).unwrap();
        assert_eq!(w.status, EventStatus::Live);
        assert_eq!(w.voting_starts_at, Some(ts("2026-05-10T00:00:00Z")));
        assert_eq!(w.voting_ends_at, Some(ts("2026-05-20T00:00:00Z")));
        assert_eq!(w.nomination_override, None);
    }

    #[test]
    fn test_to_window_without_normalization_keeps_published() {
        let rec = EventRecord::from_json(RECORD).unwrap();
        assert_eq!(rec.to_window(false).unwrap().status, EventStatus::Published);
    }

    #[test]
    fn test_unknown_status_fails_closed() {
        let mut rec = EventRecord::from_json(RECORD).unwrap();
        rec.status = "HIDDEN_BETA".to_string();
        let view = rec
            .evaluate(ts("2026-05-15T00:00:00Z"), &Viewer::Anonymous, true)
            .unwrap();
        assert_eq!(view.phase.phase, Phase::Inactive);
        assert!(view.candidates.is_empty());
    }

    #[test]
    fn test_empty_timestamp_is_unset() {
        let mut rec = EventRecord::from_json(RECORD).unwrap();
        rec.nomination_starts_at = Some("  ".to_string());
        assert_eq!(rec.to_window(true).unwrap().nomination_starts_at, None);
    }

    #[test]
    fn test_malformed_timestamp_names_field() {
        let mut rec = EventRecord::from_json(RECORD).unwrap();
        rec.voting_ends_at = Some("next tuesday".to_string());
        let err = rec.to_window(true).unwrap_err();
        assert!(err.to_string().contains("votingEndsAt"), "{err}");
    }

    #[test]
    fn test_evaluate_anonymous_during_voting() {
        let rec = EventRecord::from_json(RECORD).unwrap();
        let view = rec
            .evaluate(ts("2026-05-15T00:00:00Z"), &Viewer::Anonymous, true)
            .unwrap();
        assert_eq!(view.phase.phase, Phase::Voting);
        assert_eq!(view.banner, Banner::VotingLive);
        assert_eq!(view.visibility, VisibilityDecision::FULL);
        assert_eq!(view.candidates.len(), 2);
    }

    #[test]
    fn test_evaluate_anonymous_during_nominations_hides_candidates() {
        let rec = EventRecord::from_json(RECORD).unwrap();
        let view = rec
            .evaluate(ts("2026-05-05T00:00:00Z"), &Viewer::Anonymous, true)
            .unwrap();
        assert_eq!(view.phase.phase, Phase::Nomination);
        assert_eq!(view.visibility, VisibilityDecision::HIDDEN);
        assert!(view.candidates.is_empty());
    }

    #[test]
    fn test_evaluate_owner_sees_everything() {
        let rec = EventRecord::from_json(RECORD).unwrap();
        let owner = Viewer::Organizer {
            id: OrganizerId::new("org_1").unwrap(),
        };
        let view = rec.evaluate(ts("2026-05-05T00:00:00Z"), &owner, true).unwrap();
        assert_eq!(view.visibility, VisibilityDecision::FULL);
        assert_eq!(view.candidates[1].vote_count, Some(30));
    }

    #[test]
    fn test_evaluate_after_close_with_legacy_status() {
        let rec = EventRecord::from_json(RECORD).unwrap();
        let after = ts("2026-06-01T00:00:00Z");
        let normalized = rec.evaluate(after, &Viewer::Anonymous, true).unwrap();
        assert_eq!(normalized.phase.phase, Phase::Ended);
        assert_eq!(normalized.banner, Banner::Closed);
        let raw = rec.evaluate(after, &Viewer::Anonymous, false).unwrap();
        assert_eq!(raw.phase.phase, Phase::Inactive);
    }

    #[test]
    fn test_from_yaml() {
        let rec = EventRecord::from_yaml(
            "id: evt_1\nstatus: live\nvotingStartsAt: \"2026-05-10T00:00:00Z\"\nshowLiveResults: true\n",
        )
        .unwrap();
        assert_eq!(rec.event_status(true), EventStatus::Live);
        assert!(rec.visibility_settings().show_live_results);
        assert!(rec.candidates.is_empty());
    }
}
