//! # evt-phase — Event Phase and Visibility Resolution
//!
//! Answers two questions for every public event page request:
//!
//! - **Which phase is the event in?** [`resolve_phase`] maps the stored
//!   lifecycle status and the nomination/voting windows to one of
//!   NOMINATION, VOTING, UPCOMING, ENDED or INACTIVE, and reports whether
//!   nominations and votes are being accepted.
//!
//! - **What may this viewer see?** [`decide_visibility`] combines the
//!   resolved phase, the viewer's authorization and the organizer's
//!   toggles into a [`VisibilityDecision`], which [`redact_candidates`]
//!   applies to the candidate list.
//!
//! Both are pure functions of their inputs. The evaluation instant is
//! always a parameter; nothing here reads the clock, performs I/O, or
//! holds state between calls.
//!
//! ## Fail Closed
//!
//! Unpublished, cancelled, archived, or unrecognized statuses resolve as
//! INACTIVE. Missing or inverted schedules degrade toward INACTIVE.
//! Visibility defaults to hidden unless a rule explicitly grants it.
//!
//! ## Boundary
//!
//! [`EventRecord`] is the stored shape of an event. Its
//! [`to_window`](EventRecord::to_window) is where legacy statuses are
//! normalized and timestamp strings are parsed, so the resolver only ever
//! sees typed values.

pub mod banner;
pub mod record;
pub mod redact;
pub mod resolver;
pub mod status;
pub mod timeline;
pub mod viewer;
pub mod visibility;
pub mod window;

pub use banner::Banner;
pub use record::{EventRecord, EventView};
pub use redact::{redact_candidates, CandidateView};
pub use resolver::{resolve_phase, Phase, PhaseResolver, PhaseResult};
pub use status::EventStatus;
pub use timeline::{phase_timeline, TimelineEntry};
pub use viewer::Viewer;
pub use visibility::{decide_visibility, VisibilityDecision, VisibilitySettings};
pub use window::{EventWindow, Window};
