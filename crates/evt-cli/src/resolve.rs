//! # Resolve Subcommand
//!
//! Evaluates one event record for one viewer and prints the result as
//! JSON: resolved phase, visibility decision, banner, and the candidate
//! list after redaction.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};

use evt_core::{OrganizerId, Timestamp};
use evt_phase::{EventView, Viewer};

use crate::config::CliConfig;
use crate::input::load_event;

/// Viewer roles accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerRole {
    /// Not signed in.
    Anonymous,
    /// Signed-in participant. Needs `--viewer-id`.
    Member,
    /// Event organizer. Needs `--viewer-id`; owners see everything.
    Organizer,
    /// Platform administrator.
    Admin,
    /// Platform super administrator.
    SuperAdmin,
}

/// Arguments for the `evt resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the event record (JSON or YAML).
    #[arg(long)]
    pub event: PathBuf,

    /// Evaluation instant (RFC 3339). Defaults to the current time.
    #[arg(long)]
    pub now: Option<Timestamp>,

    /// Who is viewing the event.
    #[arg(long, value_enum, default_value_t = ViewerRole::Anonymous)]
    pub viewer: ViewerRole,

    /// Account identifier of the viewer (required for member and organizer).
    #[arg(long)]
    pub viewer_id: Option<String>,
}

impl ResolveArgs {
    /// Build the [`Viewer`] described by `--viewer` and `--viewer-id`.
    pub fn viewer(&self) -> Result<Viewer> {
        let viewer = match self.viewer {
            ViewerRole::Anonymous => Viewer::Anonymous,
            ViewerRole::Admin => Viewer::Admin,
            ViewerRole::SuperAdmin => Viewer::SuperAdmin,
            ViewerRole::Member => Viewer::Member {
                id: self.require_viewer_id()?.to_string(),
            },
            ViewerRole::Organizer => Viewer::Organizer {
                id: OrganizerId::new(self.require_viewer_id()?)
                    .context("invalid --viewer-id")?,
            },
        };
        Ok(viewer)
    }

    fn require_viewer_id(&self) -> Result<&str> {
        match self.viewer_id.as_deref() {
            Some(id) => Ok(id),
            None => bail!("--viewer-id is required for viewer {:?}", self.viewer),
        }
    }
}

/// Evaluate the event without printing.
pub fn evaluate(args: &ResolveArgs, config: &CliConfig) -> Result<EventView> {
    let record = load_event(&args.event)?;
    let viewer = args.viewer()?;
    let now = args.now.unwrap_or_else(Timestamp::now);
    let view = record
        .evaluate(now, &viewer, config.normalize_legacy_status)
        .with_context(|| format!("failed to evaluate event {}", record.id))?;
    tracing::info!(
        event = %view.event_id,
        phase = %view.phase.phase,
        candidates_visible = view.visibility.candidates_visible,
        vote_counts_visible = view.visibility.vote_counts_visible,
        "evaluated event"
    );
    Ok(view)
}

/// Execute the resolve subcommand.
pub fn run_resolve(args: &ResolveArgs, config: &CliConfig) -> Result<u8> {
    let view = evaluate(args, config)?;
    println!("{}", config.to_json(&view)?);
    Ok(0)
}
