//! # Candidate Redaction
//!
//! Applies a [`VisibilityDecision`] to the candidate list before it is
//! serialized for a viewer.

use serde::{Deserialize, Serialize};

use evt_core::CandidateId;

use crate::visibility::VisibilityDecision;

/// A candidate as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateView {
    /// Candidate identifier.
    pub id: CandidateId,
    /// Display name.
    pub name: String,
    /// Category the candidate is nominated in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Votes received. Absent when counts are hidden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_count: Option<u64>,
}

/// Strip candidate data the decision does not allow.
///
/// Hidden candidates yield an empty list. Hidden counts clear every
/// `vote_count`.
pub fn redact_candidates(
    decision: VisibilityDecision,
    candidates: Vec<CandidateView>,
) -> Vec<CandidateView> {
    if !decision.candidates_visible {
        return Vec::new();
    }
    if decision.vote_counts_visible {
        return candidates;
    }
    candidates
        .into_iter()
        .map(|c| CandidateView {
            vote_count: None,
            ..c
        })
        .collect()
}
