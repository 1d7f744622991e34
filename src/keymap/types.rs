// SPDX-License-Identifier: GPL-3.0-only

//! Core data types for keymaps.
//!
//! This module defines the legacy key codes stored in the keymap grids, the
//! logical key addressing used by the geometry, and the error types returned
//! when keymap or configuration files are loaded.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::app_settings::{COLUMNS, ROWS};

// ============================================================================
// Key Codes
// ============================================================================

/// A legacy single-byte key code as stored in a keymap grid.
///
/// Values above 127 are Thai characters in the legacy single-byte encoding;
/// values up to 32 are control codes (shift, font selector, backspace, tab,
/// enter, space). The range 33..=127 is ASCII-compatible punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u8);

impl KeyCode {
    /// Unused cell.
    pub const BLANK: KeyCode = KeyCode(0);
    /// Left shift.
    pub const LEFT_SHIFT: KeyCode = KeyCode(1);
    /// Right shift.
    pub const RIGHT_SHIFT: KeyCode = KeyCode(2);
    /// Font selector.
    pub const FONT_SELECTOR: KeyCode = KeyCode(3);
    /// Backspace.
    pub const BACKSPACE: KeyCode = KeyCode(8);
    /// Tab.
    pub const TAB: KeyCode = KeyCode(9);
    /// Enter.
    pub const ENTER: KeyCode = KeyCode(10);
    /// Space.
    pub const SPACE: KeyCode = KeyCode(32);

    /// Returns the raw byte value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Classifies the code.
    #[must_use]
    pub const fn class(self) -> KeyClass {
        match self.0 {
            0 => KeyClass::Blank,
            1 | 2 => KeyClass::Shift,
            3 => KeyClass::FontSelector,
            8 => KeyClass::Backspace,
            9 => KeyClass::Tab,
            10 => KeyClass::Enter,
            32 => KeyClass::Space,
            33..=127 => KeyClass::Reserved,
            128..=255 => KeyClass::Thai,
            _ => KeyClass::Unassigned,
        }
    }

    /// Returns `true` for codes that carry a glyph (reserved punctuation or Thai).
    #[must_use]
    pub const fn is_printable(self) -> bool {
        self.0 > 32
    }

    /// Returns `true` if pressing this code emits a `KeyPressed` signal.
    ///
    /// The two shift codes and the font selector act on release instead.
    #[must_use]
    pub const fn emits_on_press(self) -> bool {
        self.0 > 3
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Semantic class of a legacy key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyClass {
    /// Code 0, unused cell
    Blank,
    /// Codes 1 and 2
    Shift,
    /// Code 3
    FontSelector,
    /// Code 8
    Backspace,
    /// Code 9
    Tab,
    /// Code 10
    Enter,
    /// Code 32
    Space,
    /// Codes 33..=127, ASCII-compatible punctuation
    Reserved,
    /// Codes 128..=255
    Thai,
    /// Control codes with no meaning on this keyboard (4..=7, 11..=31)
    Unassigned,
}

/// A 15 x 5 grid of key codes, indexed `[row][column]`.
pub type KeymapGrid = [[KeyCode; COLUMNS]; ROWS];

// ============================================================================
// Logical Keys
// ============================================================================

/// Address of a key in the logical 15 x 5 grid.
///
/// Keys that cover several logical columns are reported at one sentinel
/// column: backspace at row 0 column 13, enter at column 13 of rows 1 and 2,
/// right shift at row 3 column 12 and the space bar at row 4 column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogicalKey {
    /// Row, 0..=4
    pub row: u8,
    /// Column, 0..=14
    pub column: u8,
}

impl LogicalKey {
    /// Backspace.
    pub const BACKSPACE: LogicalKey = LogicalKey::new(0, 13);
    /// Tab.
    pub const TAB: LogicalKey = LogicalKey::new(1, 0);
    /// Enter, upper half.
    pub const ENTER: LogicalKey = LogicalKey::new(1, 13);
    /// Enter, lower half.
    pub const ENTER_LOWER: LogicalKey = LogicalKey::new(2, 13);
    /// Font selector.
    pub const FONT_SELECTOR: LogicalKey = LogicalKey::new(2, 0);
    /// Left shift.
    pub const LEFT_SHIFT: LogicalKey = LogicalKey::new(3, 0);
    /// Right shift.
    pub const RIGHT_SHIFT: LogicalKey = LogicalKey::new(3, 12);
    /// Space bar.
    pub const SPACE: LogicalKey = LogicalKey::new(4, 0);

    /// Creates a logical key.
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Returns `true` for either shift key.
    #[must_use]
    pub const fn is_shift(self) -> bool {
        self.row == 3 && (self.column == 0 || self.column == 12)
    }

    /// Returns `true` for the font selector.
    #[must_use]
    pub const fn is_font_selector(self) -> bool {
        self.row == 2 && self.column == 0
    }
}

impl fmt::Display for LogicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.column)
    }
}

// ============================================================================
// Error Handling Types
// ============================================================================

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal error that prevents the keymap from being used
    Error,
    /// Non-fatal issue that should be addressed
    Warning,
}

/// A validation issue discovered while checking a keymap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Severity level (Error or Warning)
    pub severity: Severity,
    /// Human-readable description of the issue
    pub message: String,
    /// Path to the offending cell (e.g., "shifted[3][12]")
    pub field_path: String,
    /// Optional suggestion for how to fix the issue
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        field_path: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            field_path: field_path.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion to the validation issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Returns `true` if this issue is fatal.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity_str = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        };

        write!(f, "[{}] {}: {}", severity_str, self.field_path, self.message)?;

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Error type for keymap and configuration file loading.
#[derive(Debug)]
pub enum ParseError {
    /// I/O error occurred while reading the file
    IoError {
        /// The underlying I/O error
        source: std::io::Error,
        /// Optional file path that caused the error
        file_path: Option<String>,
        /// Optional suggestion for fixing the error
        suggestion: Option<String>,
    },

    /// JSON parsing error
    JsonError {
        /// The underlying JSON parsing error
        source: serde_json::Error,
        /// Optional file path being parsed
        file_path: Option<String>,
        /// Line number where the error occurred (from serde_json)
        line_number: Option<usize>,
    },

    /// Fatal validation errors
    ValidationError {
        /// List of validation issues found
        issues: Vec<ValidationIssue>,
        /// Optional file path being validated
        file_path: Option<String>,
    },
}

impl ParseError {
    /// Creates an I/O error with file path.
    pub fn io_error_with_path(source: std::io::Error, file_path: impl Into<String>) -> Self {
        Self::IoError {
            source,
            file_path: Some(file_path.into()),
            suggestion: Some("Check that the file exists and you have read permissions".into()),
        }
    }

    /// Creates a JSON parsing error with context.
    pub fn json_error(source: serde_json::Error) -> Self {
        let line_number = Some(source.line());
        Self::JsonError {
            source,
            file_path: None,
            line_number,
        }
    }

    /// Creates a JSON parsing error with file path.
    pub fn json_error_with_path(source: serde_json::Error, file_path: impl Into<String>) -> Self {
        let line_number = Some(source.line());
        Self::JsonError {
            source,
            file_path: Some(file_path.into()),
            line_number,
        }
    }

    /// Creates a validation error from a list of issues.
    pub fn validation_error(issues: Vec<ValidationIssue>) -> Self {
        Self::ValidationError {
            issues,
            file_path: None,
        }
    }

    /// Attaches a file path to the error if it has none yet.
    pub fn with_path(self, path: &str) -> Self {
        match self {
            ParseError::ValidationError {
                issues,
                file_path: None,
            } => ParseError::ValidationError {
                issues,
                file_path: Some(path.to_string()),
            },
            ParseError::JsonError {
                source,
                file_path: None,
                line_number,
            } => ParseError::JsonError {
                source,
                file_path: Some(path.to_string()),
                line_number,
            },
            other => other,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IoError {
                source,
                file_path,
                suggestion,
            } => {
                write!(f, "I/O error")?;
                if let Some(path) = file_path {
                    write!(f, " reading file '{}'", path)?;
                }
                write!(f, ": {}", source)?;
                if let Some(hint) = suggestion {
                    write!(f, "\n  Suggestion: {}", hint)?;
                }
            }
            ParseError::JsonError {
                source,
                file_path,
                line_number,
            } => {
                write!(f, "JSON parsing error")?;
                if let Some(path) = file_path {
                    write!(f, " in file '{}'", path)?;
                }
                if let Some(line) = line_number {
                    write!(f, " at line {}", line)?;
                }
                write!(f, ": {}", source)?;
            }
            ParseError::ValidationError { issues, file_path } => {
                write!(f, "Validation failed")?;
                if let Some(path) = file_path {
                    write!(f, " for file '{}'", path)?;
                }
                writeln!(f, " with {} issue(s):", issues.len())?;
                for (i, issue) in issues.iter().enumerate() {
                    write!(f, "  {}. {}", i + 1, issue)?;
                    if i + 1 < issues.len() {
                        writeln!(f)?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::IoError { source, .. } => Some(source),
            ParseError::JsonError { source, .. } => Some(source),
            ParseError::ValidationError { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::json_error(err)
    }
}

/// Result of successfully parsing a file, with non-fatal warnings.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult<T> {
    /// The successfully parsed value
    pub layout: T,
    /// Non-fatal validation warnings
    pub warnings: Vec<ValidationIssue>,
}

impl<T> ParseResult<T> {
    /// Creates a new parse result with warnings.
    pub fn with_warnings(layout: T, warnings: Vec<ValidationIssue>) -> Self {
        Self { layout, warnings }
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Consumes the result and returns the value, discarding warnings.
    pub fn into_layout(self) -> T {
        self.layout
    }
}

// ============================================================================
// Tests
// ============================================================================
