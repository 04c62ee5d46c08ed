//! # End-to-End Scenarios
//!
//! Resolve a phase, decide visibility, and redact, the way a request
//! handler chains them.

use evt_core::Timestamp;
use evt_phase::{
    decide_visibility, redact_candidates, resolve_phase, Banner, CandidateView, EventStatus,
    EventWindow, Phase, PhaseResult, VisibilityDecision,
};

fn now() -> Timestamp {
    Timestamp::parse("2026-09-01T18:00:00Z").unwrap()
}

fn closed_phase() -> PhaseResult {
    PhaseResult {
        phase: Phase::Nomination,
        is_nomination_open: false,
        is_voting_open: false,
        next_change_at: None,
        opens_at: None,
    }
}

#[test]
fn scenario_live_voting_without_nominations() {
    let n = now();
    let w = EventWindow::unscheduled(EventStatus::Live)
        .with_voting(Some(n.add_hours(-1)), Some(n.add_hours(1)));
    let r = resolve_phase(n, &w);
    assert_eq!(r.phase, Phase::Voting);
    assert!(r.is_voting_open);
    assert!(!r.is_nomination_open);
}

#[test]
fn scenario_voting_tomorrow_is_upcoming() {
    let n = now();
    let w = EventWindow::unscheduled(EventStatus::Live).with_voting(Some(n.add_hours(24)), None);
    let r = resolve_phase(n, &w);
    assert_eq!(r.phase, Phase::Upcoming);
    assert!(!r.is_voting_open);
    assert_eq!(
        Banner::for_phase(&r),
        Banner::ComingSoon {
            opens_at: Some(n.add_hours(24))
        }
    );
}

#[test]
fn scenario_approved_without_schedule_is_inactive() {
    let r = resolve_phase(now(), &EventWindow::unscheduled(EventStatus::Approved));
    assert_eq!(r.phase, Phase::Inactive);
}

#[test]
fn scenario_live_results_without_counts() {
    let d = decide_visibility(&closed_phase(), false, true, false);
    assert!(d.candidates_visible);
    assert!(!d.vote_counts_visible);
}

#[test]
fn scenario_voting_open_with_counts() {
    let mut phase = closed_phase();
    phase.phase = Phase::Voting;
    phase.is_voting_open = true;
    let d = decide_visibility(&phase, false, false, true);
    assert!(d.candidates_visible);
    assert!(d.vote_counts_visible);
}

#[test]
fn scenario_default_deny() {
    let d = decide_visibility(&closed_phase(), false, false, true);
    assert_eq!(d, VisibilityDecision::HIDDEN);
}

#[test]
fn ended_event_with_live_results_shows_standings_without_counts() {
    let n = now();
    let w = EventWindow::unscheduled(EventStatus::Ended)
        .with_voting(Some(n.add_hours(-1)), Some(n.add_hours(1)));
    let r = resolve_phase(n, &w);
    assert_eq!(r.phase, Phase::Ended);

    let candidates: Vec<CandidateView> = serde_json::from_str(
        r#"[{"id": "c1", "name": "Ada", "voteCount": 10}, {"id": "c2", "name": "Lin", "voteCount": 4}]"#,
    )
    .unwrap();
    let out = redact_candidates(decide_visibility(&r, false, true, false), candidates);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|c| c.vote_count.is_none()));
}
