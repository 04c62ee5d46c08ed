//! # Event File Input
//!
//! Reads an [`EventRecord`] from disk. `.yaml` and `.yml` files are parsed
//! as YAML; everything else as JSON.

use std::path::Path;

use anyhow::{Context, Result};

use evt_phase::EventRecord;

/// Load an event record from `path`.
pub fn load_event(path: &Path) -> Result<EventRecord> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read event file {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let record = if is_yaml {
        EventRecord::from_yaml(&raw)
    } else {
        EventRecord::from_json(&raw)
    }
    .with_context(|| format!("failed to parse event file {}", path.display()))?;

    tracing::debug!(event = %record.id, path = %path.display(), "loaded event record");
    Ok(record)
}
