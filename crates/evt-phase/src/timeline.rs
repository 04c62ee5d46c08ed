//! # Schedule Timeline
//!
//! Lists every change of resolved phase over a time range, for previewing
//! a schedule before it goes live. The answer can only change at a window
//! boundary, so the event is evaluated at the start of the range and at
//! each boundary inside it.

use serde::Serialize;

use evt_core::Timestamp;

use crate::resolver::{PhaseResolver, PhaseResult};
use crate::window::EventWindow;

/// One point at which the resolved answer changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    /// Instant the answer takes effect.
    pub at: Timestamp,
    /// Resolved answer from `at` on.
    pub result: PhaseResult,
}

/// Phase changes of `window` over `[from, to]`.
///
/// The first entry is always at `from`. Later entries appear only where
/// the phase or either open flag differs from the previous entry. An empty
/// range (`to < from`) yields no entries.
pub fn phase_timeline(
    resolver: &PhaseResolver,
    window: &EventWindow,
    from: Timestamp,
    to: Timestamp,
) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = Vec::new();
    if to < from {
        return entries;
    }

    let mut at = from;
    loop {
        let result = resolver.resolve(at, window);
        let changed = entries.last().map_or(true, |prev| {
            prev.result.phase != result.phase
                || prev.result.is_nomination_open != result.is_nomination_open
                || prev.result.is_voting_open != result.is_voting_open
        });
        if changed {
            entries.push(TimelineEntry { at, result });
        }
        match window.next_boundary_after(at) {
            Some(next) if next <= to => at = next,
            _ => break,
        }
    }
    entries
}
