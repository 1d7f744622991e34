// SPDX-License-Identifier: GPL-3.0-only

//! Preference stores.
//!
//! [`JsonPreferenceStore`] keeps a flat string map in a JSON file and writes
//! it back on every `set`, or once per `set_many` batch. [`MemoryPreferenceStore`] keeps the map in memory.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::host::PreferenceStore;

/// Error type for preference persistence.
#[derive(Debug)]
pub enum PreferenceError {
    /// Reading or writing the preference file failed
    Io {
        /// The underlying I/O error
        source: std::io::Error,
        /// File that caused the error
        path: PathBuf,
    },
    /// The preference file is not a JSON string map
    Json {
        /// The underlying JSON error
        source: serde_json::Error,
        /// File that caused the error
        path: PathBuf,
    },
}

impl fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceError::Io { source, path } => {
                write!(f, "I/O error on preference file '{}': {}", path.display(), source)
            }
            PreferenceError::Json { source, path } => {
                write!(
                    f,
                    "Malformed preference file '{}' at line {}: {}",
                    path.display(),
                    source.line(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for PreferenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PreferenceError::Io { source, .. } => Some(source),
            PreferenceError::Json { source, .. } => Some(source),
        }
    }
}

/// In-memory preference store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Preference store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonPreferenceStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is an empty store; it is created on the first `set`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PreferenceError> {
        let path = path.as_ref().to_path_buf();

        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| PreferenceError::Json {
                source,
                path: path.clone(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No preference file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(source) => return Err(PreferenceError::Io { source, path }),
        };

        Ok(Self { path, values })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PreferenceError> {
        let text = serde_json::to_string_pretty(&self.values).map_err(|source| {
            PreferenceError::Json {
                source,
                path: self.path.clone(),
            }
        })?;

        fs::write(&self.path, text).map_err(|source| PreferenceError::Io {
            source,
            path: self.path.clone(),
        })
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    fn set_many(&mut self, entries: Vec<(&str, String)>) -> Result<(), PreferenceError> {
        for (key, value) in entries {
            self.values.insert(key.to_string(), value);
        }
        self.flush()
    }
}

// ============================================================================
// Tests
// ============================================================================
