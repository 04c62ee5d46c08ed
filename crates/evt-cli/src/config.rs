//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`, then environment overrides:
//!
//! | Key | Env | Default |
//! |-----|-----|---------|
//! | `normalize_legacy_status` | `EVT_NORMALIZE_LEGACY_STATUS` | `true` |
//! | `pretty_json` | `EVT_PRETTY_JSON` | `true` |

use std::path::Path;

use serde::{Deserialize, Serialize};

use evt_core::EvtError;

/// Settings shared by all subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Fold legacy `PUBLISHED` records into `LIVE` when loading.
    pub normalize_legacy_status: bool,
    /// Indent JSON output.
    pub pretty_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            normalize_legacy_status: true,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load from an optional file, then apply process environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an
    /// override is not a boolean.
    pub fn load(path: Option<&Path>) -> Result<Self, EvtError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Load from an optional file, then apply overrides from `lookup`.
    pub fn load_with(
        path: Option<&Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, EvtError> {
        let base = match path {
            Some(p) => {
                let raw = std::fs::read_to_string(p)?;
                Self::from_yaml(&raw)?
            }
            None => Self::default(),
        };
        base.with_env(lookup)
    }

    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml(input: &str) -> Result<Self, EvtError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(input)?)
    }

    /// Apply overrides from an environment lookup.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, EvtError> {
        if let Some(v) = lookup("EVT_NORMALIZE_LEGACY_STATUS") {
            self.normalize_legacy_status = parse_bool("EVT_NORMALIZE_LEGACY_STATUS", &v)?;
        }
        if let Some(v) = lookup("EVT_PRETTY_JSON") {
            self.pretty_json = parse_bool("EVT_PRETTY_JSON", &v)?;
        }
        Ok(self)
    }

    /// Render a value as JSON in the configured style.
    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String, EvtError> {
        let out = if self.pretty_json {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(out)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, EvtError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(EvtError::Config(format!("{key} must be a boolean, got {other:?}"))),
    }
}
