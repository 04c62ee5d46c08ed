//! # evt-core — Foundational Types for the Event Phase Stack
//!
//! Defines the primitives every other crate in the workspace builds on.
//! Depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **UTC-only timestamps.** `Timestamp` is always UTC with seconds
//!    precision. Phase resolution compares instants, never wall-clock
//!    strings, and the current time is always passed in by the caller.
//!
//! 2. **Newtype wrappers for identifiers.** `EventId`, `OrganizerId` and
//!    `CandidateId` are distinct types so an organizer can never be
//!    compared against a candidate by accident.
//!
//! 3. **One error hierarchy.** `EvtError` covers the boundary failures
//!    (parsing, I/O, configuration). The resolver itself never fails.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public value types derive `Debug` and `Clone` and implement
//!   `Serialize`/`Deserialize`. `EvtError` derives `Debug` only.

pub mod error;
pub mod identity;
pub mod temporal;

pub use error::EvtError;
pub use identity::{CandidateId, EventId, OrganizerId};
pub use temporal::Timestamp;
