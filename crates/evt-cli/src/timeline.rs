//! # Timeline Subcommand
//!
//! Prints every phase change of an event's schedule between two instants,
//! one line per change:
//!
//! ```text
//! 2026-05-01T00:00:00Z NOMINATION nomination=true voting=false
//! ```

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use evt_core::Timestamp;
use evt_phase::{phase_timeline, PhaseResolver, TimelineEntry};

use crate::config::CliConfig;
use crate::input::load_event;

/// Arguments for the `evt timeline` subcommand.
#[derive(Args, Debug)]
pub struct TimelineArgs {
    /// Path to the event record (JSON or YAML).
    #[arg(long)]
    pub event: PathBuf,

    /// Start of the range (RFC 3339).
    #[arg(long)]
    pub from: Timestamp,

    /// End of the range, inclusive (RFC 3339).
    #[arg(long)]
    pub to: Timestamp,

    /// Print JSON instead of text lines.
    #[arg(long)]
    pub json: bool,
}

/// Compute the timeline without printing.
pub fn compute(args: &TimelineArgs, config: &CliConfig) -> Result<Vec<TimelineEntry>> {
    if args.to < args.from {
        bail!("--to ({}) is before --from ({})", args.to, args.from);
    }
    let record = load_event(&args.event)?;
    let window = record.to_window(config.normalize_legacy_status)?;
    Ok(phase_timeline(
        &PhaseResolver::default(),
        &window,
        args.from,
        args.to,
    ))
}

/// Render one entry as a text line.
pub fn format_entry(entry: &TimelineEntry) -> String {
    format!(
        "{} {} nomination={} voting={}",
        entry.at, entry.result.phase, entry.result.is_nomination_open, entry.result.is_voting_open
    )
}

/// Execute the timeline subcommand.
pub fn run_timeline(args: &TimelineArgs, config: &CliConfig) -> Result<u8> {
    let entries = compute(args, config)?;
    if args.json {
        println!("{}", config.to_json(&entries)?);
    } else {
        for entry in &entries {
            println!("{}", format_entry(entry));
        }
    }
    Ok(0)
}
