//! # Phase Resolution
//!
//! Maps an [`EventWindow`] and an evaluation instant to the public phase
//! of the event and whether nominations and votes are being accepted.
//!
//! ## Rules
//!
//! Evaluated in order, first match wins:
//!
//! 1. Status outside {APPROVED, PUBLISHED, LIVE, PAUSED, ENDED} → `Inactive`.
//! 2. Status ENDED → `Ended`, whatever the dates say.
//! 3. Voting window active → `Voting`. The nomination flag is still
//!    reported truthfully when the windows overlap.
//! 4. Nomination window active → `Nomination`.
//! 5. A configured start lies in the future → `Upcoming`, except between
//!    a nomination window that opened and closed and a future voting
//!    window, which stays `Nomination` with both flags down.
//! 6. Status LIVE and every configured window elapsed → `Ended`.
//! 7. Otherwise → `Inactive`.
//!
//! The open flags are additionally gated on the status accepting
//! submissions: a PAUSED event keeps its phase but reports both flags
//! false.
//!
//! Resolution is total. Missing, partial, or inverted schedules degrade
//! toward `Inactive` rather than erroring.

use serde::{Deserialize, Serialize};

use evt_core::Timestamp;

use crate::status::EventStatus;
use crate::window::EventWindow;

/// Public-facing stage of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Nomination stage.
    Nomination,
    /// Voting stage.
    Voting,
    /// Scheduled, nothing open yet.
    Upcoming,
    /// Over.
    Ended,
    /// No public phase applies.
    Inactive,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Nomination => "NOMINATION",
            Self::Voting => "VOTING",
            Self::Upcoming => "UPCOMING",
            Self::Ended => "ENDED",
            Self::Inactive => "INACTIVE",
        };
        f.write_str(s)
    }
}

/// Output of phase resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseResult {
    /// Resolved phase.
    pub phase: Phase,
    /// Nominations are being accepted right now.
    pub is_nomination_open: bool,
    /// Votes are being accepted right now.
    pub is_voting_open: bool,
    /// Next schedule boundary after the evaluation instant, if any. The
    /// phase and open flags hold until then.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_change_at: Option<Timestamp>,
    /// Soonest future window opening, reported while `Upcoming`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opens_at: Option<Timestamp>,
}

impl PhaseResult {
    fn closed(phase: Phase, next_change_at: Option<Timestamp>) -> Self {
        Self {
            phase,
            is_nomination_open: false,
            is_voting_open: false,
            next_change_at,
            opens_at: None,
        }
    }

    /// Whether anything is open for submissions.
    pub fn accepts_submissions(&self) -> bool {
        self.is_nomination_open || self.is_voting_open
    }
}

/// Phase resolver with boundary options.
///
/// `PhaseResolver::default()` applies the rules exactly as stored. Set
/// `treat_published_as_live` when the caller has not already normalized
/// legacy `PUBLISHED` records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseResolver {
    /// Fold `PUBLISHED` into `LIVE` before resolving.
    pub treat_published_as_live: bool,
}

impl PhaseResolver {
    /// Resolver that normalizes legacy statuses.
    pub fn normalizing() -> Self {
        Self {
            treat_published_as_live: true,
        }
    }

    /// Resolve the phase of `window` at `now`.
    pub fn resolve(&self, now: Timestamp, window: &EventWindow) -> PhaseResult {
        let status = if self.treat_published_as_live {
            window.status.normalized()
        } else {
            window.status
        };
        let result = resolve_with_status(now, status, window);
        tracing::debug!(
            %status,
            phase = %result.phase,
            nomination_open = result.is_nomination_open,
            voting_open = result.is_voting_open,
            %now,
            "resolved event phase"
        );
        result
    }
}

/// Resolve the phase of `window` at `now` with the default resolver.
pub fn resolve_phase(now: Timestamp, window: &EventWindow) -> PhaseResult {
    PhaseResolver::default().resolve(now, window)
}

fn resolve_with_status(now: Timestamp, status: EventStatus, window: &EventWindow) -> PhaseResult {
    if !status.is_publicly_visible() {
        return PhaseResult::closed(Phase::Inactive, None);
    }
    if status == EventStatus::Ended {
        return PhaseResult::closed(Phase::Ended, None);
    }

    let nomination = window.nomination();
    let voting = window.voting();
    let nomination_active = nomination.is_active(now);
    let voting_active = voting.is_active(now);
    let permits = status.accepts_submissions();
    let next_change_at = window.next_boundary_after(now);

    if voting_active {
        return PhaseResult {
            phase: Phase::Voting,
            is_nomination_open: nomination_active && permits,
            is_voting_open: permits,
            next_change_at,
            opens_at: None,
        };
    }

    if nomination_active {
        return PhaseResult {
            phase: Phase::Nomination,
            is_nomination_open: permits,
            is_voting_open: false,
            next_change_at,
            opens_at: None,
        };
    }

    let upcoming = [nomination.starts_after(now), voting.starts_after(now)]
        .into_iter()
        .flatten()
        .min();
    if let Some(opens_at) = upcoming {
        let nomination_began = nomination.starts_at.is_some_and(|start| start <= now);
        let between_stages = nomination_began
            && nomination.has_elapsed(now)
            && voting.starts_after(now).is_some();
        if between_stages {
            return PhaseResult::closed(Phase::Nomination, next_change_at);
        }
        return PhaseResult {
            opens_at: Some(opens_at),
            ..PhaseResult::closed(Phase::Upcoming, next_change_at)
        };
    }

    let configured: Vec<_> = [nomination, voting]
        .into_iter()
        .filter(|w| w.is_configured())
        .collect();
    let all_elapsed = !configured.is_empty() && configured.iter().all(|w| w.has_elapsed(now));
    if status == EventStatus::Live && all_elapsed {
        return PhaseResult::closed(Phase::Ended, None);
    }

    PhaseResult::closed(Phase::Inactive, next_change_at)
}
