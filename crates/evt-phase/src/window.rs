//! # Event Windows
//!
//! `EventWindow` is the read-only snapshot the resolver works from: the
//! lifecycle status plus the nomination and voting schedules. It is built
//! fresh per evaluation by whatever loaded the event record.
//!
//! A [`Window`] is a copy of one schedule. Comparisons are
//! half-open: a window with both bounds is active for `start <= now < end`,
//! a window with only a start is open-ended, and a window without a start
//! is never active from dates alone. Inverted bounds (`end <= start`) are
//! not rejected; they simply never satisfy the active comparison.

use serde::{Deserialize, Serialize};

use evt_core::Timestamp;

use crate::status::EventStatus;

/// Snapshot of the fields phase resolution depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWindow {
    /// Stored lifecycle status.
    pub status: EventStatus,
    /// When nominations open.
    #[serde(default)]
    pub nomination_starts_at: Option<Timestamp>,
    /// When nominations close.
    #[serde(default)]
    pub nomination_ends_at: Option<Timestamp>,
    /// When voting opens.
    #[serde(default)]
    pub voting_starts_at: Option<Timestamp>,
    /// When voting closes.
    #[serde(default)]
    pub voting_ends_at: Option<Timestamp>,
    /// Organizer's manual nomination switch. `None` defers to the dates.
    #[serde(default, alias = "isNominationOpen")]
    pub nomination_override: Option<bool>,
    /// Organizer's manual voting switch. `None` defers to the dates.
    #[serde(default, alias = "isVotingOpen")]
    pub voting_override: Option<bool>,
}

impl EventWindow {
    /// A window with the given status and nothing scheduled.
    pub fn unscheduled(status: EventStatus) -> Self {
        Self {
            status,
            nomination_starts_at: None,
            nomination_ends_at: None,
            voting_starts_at: None,
            voting_ends_at: None,
            nomination_override: None,
            voting_override: None,
        }
    }

    /// Set the nomination window.
    pub fn with_nomination(mut self, starts_at: Option<Timestamp>, ends_at: Option<Timestamp>) -> Self {
        self.nomination_starts_at = starts_at;
        self.nomination_ends_at = ends_at;
        self
    }

    /// Set the voting window.
    pub fn with_voting(mut self, starts_at: Option<Timestamp>, ends_at: Option<Timestamp>) -> Self {
        self.voting_starts_at = starts_at;
        self.voting_ends_at = ends_at;
        self
    }

    /// Set the organizer's manual switches.
    pub fn with_overrides(mut self, nomination: Option<bool>, voting: Option<bool>) -> Self {
        self.nomination_override = nomination;
        self.voting_override = voting;
        self
    }

    /// The nomination schedule.
    pub fn nomination(&self) -> Window {
        Window {
            starts_at: self.nomination_starts_at,
            ends_at: self.nomination_ends_at,
            manual_override: self.nomination_override,
        }
    }

    /// The voting schedule.
    pub fn voting(&self) -> Window {
        Window {
            starts_at: self.voting_starts_at,
            ends_at: self.voting_ends_at,
            manual_override: self.voting_override,
        }
    }

    /// Earliest window boundary strictly after `now`.
    pub fn next_boundary_after(&self, now: Timestamp) -> Option<Timestamp> {
        [
            self.nomination_starts_at,
            self.nomination_ends_at,
            self.voting_starts_at,
            self.voting_ends_at,
        ]
        .into_iter()
        .flatten()
        .filter(|t| *t > now)
        .min()
    }
}

/// One start/end schedule with an optional manual switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Opening instant.
    pub starts_at: Option<Timestamp>,
    /// Closing instant (exclusive).
    pub ends_at: Option<Timestamp>,
    /// `Some(true)` forces open, `Some(false)` forces closed.
    pub manual_override: Option<bool>,
}

impl Window {
    /// Whether any date is set.
    pub fn is_configured(&self) -> bool {
        self.starts_at.is_some() || self.ends_at.is_some()
    }

    /// Both bounds set with `end <= start`.
    pub fn is_inverted(&self) -> bool {
        matches!((self.starts_at, self.ends_at), (Some(s), Some(e)) if e <= s)
    }

    /// Whether the dates alone place `now` inside the window.
    pub fn contains(&self, now: Timestamp) -> bool {
        match (self.starts_at, self.ends_at) {
            (Some(start), Some(end)) => start <= now && now < end,
            (Some(start), None) => now >= start,
            _ => false,
        }
    }

    /// Whether the window is open at `now`, honoring the manual switch.
    pub fn is_active(&self, now: Timestamp) -> bool {
        self.manual_override.unwrap_or_else(|| self.contains(now))
    }

    /// The start instant, if it lies strictly after `now`.
    pub fn starts_after(&self, now: Timestamp) -> Option<Timestamp> {
        self.starts_at.filter(|start| now < *start)
    }

    /// Whether the window is over at `now`.
    ///
    /// True once the end has passed, or when the organizer has switched
    /// the window off after it began.
    pub fn has_elapsed(&self, now: Timestamp) -> bool {
        let past_end = self.ends_at.is_some_and(|end| now >= end);
        let switched_off = self.manual_override == Some(false)
            && self.starts_at.map_or(true, |start| start <= now);
        past_end || switched_off
    }
}
