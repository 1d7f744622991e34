// SPDX-License-Identifier: GPL-3.0-only

//! Thai keymaps and legacy code conversion.
//!
//! This module provides the two keymap grids (unshifted and shifted) in
//! legacy single-byte Thai codes, their conversion to Unicode, and the
//! dotted-circle guard for combining marks.
//!
//! # Features
//!
//! - **Keymap table**: Immutable 15 x 5 grids, with the Kedmanee layout built in
//! - **Code conversion**: Legacy codes above 127 map onto U+0E01..U+0E5B
//! - **NSM guard**: Per-row detection of combining marks that need a dotted circle
//! - **Custom keymaps**: JSON keymap files, validated for control-key positions
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use thaivkb::keymap::{CodeConverter, KeymapTable, to_unicode};
//!
//! let table = KeymapTable::kedmanee();
//! let code = table.code(false, 0, 0);
//! assert_eq!(to_unicode(code), Some('\u{0E4F}'));
//!
//! let converter = CodeConverter::new(true);
//! let cap = converter.keycap(table.code(false, 1, 7), 1);
//! ```

// Sub-modules
pub mod convert;
pub mod parser;
pub mod table;
pub mod types;
pub mod validation;

// Re-export public API
pub use convert::{CodeConverter, NsmGuardPolicy, needs_nsm_guard, to_unicode};
pub use parser::{parse_keymap_file, parse_keymap_from_string};
pub use table::KeymapTable;
pub use types::{
    KeyClass, KeyCode, KeymapGrid, LogicalKey, ParseError, ParseResult, Severity,
    ValidationIssue,
};
pub use validation::validate_grids;
