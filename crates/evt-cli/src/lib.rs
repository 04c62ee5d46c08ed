//! # evt-cli — Event Phase Command-Line Interface
//!
//! Offline front end for `evt-phase`: loads stored event records from
//! JSON or YAML files and prints what a viewer would be shown.
//!
//! ## Subcommands
//!
//! - `resolve` — Phase, visibility, banner, and redacted candidates for one viewer
//! - `timeline` — Every phase change of an event's schedule over a range
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from evaluation.
//! - Handlers delegate to `evt-phase`; no phase logic lives here.
//! - The clock is read once per invocation, and only when `--now` is absent.

pub mod config;
pub mod input;
pub mod resolve;
pub mod timeline;
