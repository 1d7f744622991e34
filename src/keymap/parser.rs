// SPDX-License-Identifier: GPL-3.0-only

//! Keymap file parsing.
//!
//! A keymap file is a JSON object with a name and the two 15 x 5 grids:
//!
//! ```json
//! {
//!     "name": "Kedmanee",
//!     "unshifted": [[239, 229, ...], ...],
//!     "shifted": [[251, 43, ...], ...]
//! }
//! ```

use serde::Deserialize;
use std::fs;

use crate::keymap::table::KeymapTable;
use crate::keymap::types::{KeymapGrid, ParseError, ParseResult};
use crate::keymap::validation::validate_grids;

#[derive(Debug, Deserialize)]
struct KeymapFile {
    #[serde(default)]
    name: String,
    unshifted: KeymapGrid,
    shifted: KeymapGrid,
}

/// Parses a keymap from a JSON file.
///
/// I/O failures, malformed JSON and fatal validation issues are errors;
/// non-fatal issues come back as warnings alongside the table.
pub fn parse_keymap_file(path: &str) -> Result<ParseResult<KeymapTable>, ParseError> {
    let json_str =
        fs::read_to_string(path).map_err(|e| ParseError::io_error_with_path(e, path))?;

    parse_keymap_from_string(&json_str).map_err(|e| e.with_path(path))
}

/// Parses a keymap from a JSON string.
pub fn parse_keymap_from_string(json: &str) -> Result<ParseResult<KeymapTable>, ParseError> {
    let file: KeymapFile = serde_json::from_str(json)?;

    let (errors, warnings): (Vec<_>, Vec<_>) = validate_grids(&file.unshifted, &file.shifted)
        .into_iter()
        .partition(|issue| issue.is_error());

    if !errors.is_empty() {
        return Err(ParseError::validation_error(errors));
    }

    tracing::debug!(
        "Loaded keymap '{}' with {} warning(s)",
        file.name,
        warnings.len()
    );

    let table = KeymapTable::from_grids(file.unshifted, file.shifted)?;
    Ok(ParseResult::with_warnings(table, warnings))
}

// ============================================================================
// Tests
// ============================================================================
