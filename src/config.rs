// SPDX-License-Identifier: GPL-3.0-only

use std::fs;

use serde::{Deserialize, Serialize};

use crate::geometry::SpaceBand;
use crate::keymap::{
    KeymapTable, NsmGuardPolicy, ParseError, Severity, ValidationIssue, parse_keymap_file,
};

/// Deployment configuration, fixed for the lifetime of a keyboard.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How the dotted-circle guard is decided.
    pub nsm_guard: NsmGuardPolicy,
    /// Columns covered by the space bar.
    pub space_band: SpaceBand,
    /// Custom keymap file replacing the built-in Kedmanee table.
    pub keymap_path: Option<String>,
}

impl Config {
    /// Reads a configuration file. Missing fields take their defaults.
    pub fn load(path: &str) -> Result<Config, ParseError> {
        let text =
            fs::read_to_string(path).map_err(|e| ParseError::io_error_with_path(e, path))?;
        Self::from_json(&text).map_err(|e| e.with_path(path))
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Config, ParseError> {
        let config: Config = serde_json::from_str(json)?;

        if !config.space_band.is_valid() {
            return Err(ParseError::validation_error(vec![
                ValidationIssue::new(
                    Severity::Error,
                    format!(
                        "Space band {}..{} is empty or extends past column 15",
                        config.space_band.start_column, config.space_band.end_column
                    ),
                    "space_band",
                )
                .with_suggestion("Use 4..11 or 5..10"),
            ]));
        }

        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Returns the keymap to use: the custom file when configured, the
    /// built-in table otherwise.
    pub fn keymap(&self) -> Result<KeymapTable, ParseError> {
        let Some(path) = &self.keymap_path else {
            return Ok(KeymapTable::kedmanee());
        };

        let result = parse_keymap_file(path)?;
        for warning in &result.warnings {
            tracing::warn!("{}: {}", path, warning);
        }
        tracing::info!("Using keymap from {}", path);
        Ok(result.into_layout())
    }
}
