//! # Visibility Decisions
//!
//! Decides whether candidate identities and vote counts may be exposed to
//! a viewer, given the resolved phase and the organizer's toggles.
//!
//! Rules, first match wins:
//!
//! 1. Authorized viewer (owning organizer, admin) → everything.
//! 2. `show_live_results` → candidates, counts gated by `show_vote_count`.
//! 3. Voting open → candidates, counts gated by `show_vote_count`.
//! 4. Otherwise nothing.
//!
//! Rule 2 does not look at the phase: enabling live results reveals the
//! candidate list even during nominations.

use serde::{Deserialize, Serialize};

use crate::resolver::PhaseResult;

/// Organizer-controlled public visibility toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilitySettings {
    /// Publish standings while the event runs.
    #[serde(default)]
    pub show_live_results: bool,
    /// Publish numeric vote counts alongside standings.
    #[serde(default)]
    pub show_vote_count: bool,
}

/// What a viewer may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityDecision {
    /// Candidate list may be returned.
    pub candidates_visible: bool,
    /// Vote counts may be returned.
    pub vote_counts_visible: bool,
}

impl VisibilityDecision {
    /// Everything visible.
    pub const FULL: Self = Self {
        candidates_visible: true,
        vote_counts_visible: true,
    };

    /// Nothing visible.
    pub const HIDDEN: Self = Self {
        candidates_visible: false,
        vote_counts_visible: false,
    };
}

impl VisibilitySettings {
    /// Apply these toggles for a viewer.
    pub fn decide(&self, phase: &PhaseResult, is_authorized: bool) -> VisibilityDecision {
        decide_visibility(
            phase,
            is_authorized,
            self.show_live_results,
            self.show_vote_count,
        )
    }
}

/// Decide what a viewer may see.
pub fn decide_visibility(
    phase: &PhaseResult,
    is_authorized: bool,
    show_live_results: bool,
    show_vote_count: bool,
) -> VisibilityDecision {
    if is_authorized {
        return VisibilityDecision::FULL;
    }
    let standings = VisibilityDecision {
        candidates_visible: true,
        vote_counts_visible: show_vote_count,
    };
    if show_live_results {
        return standings;
    }
    if phase.is_voting_open {
        return standings;
    }
    VisibilityDecision::HIDDEN
}
