// SPDX-License-Identifier: GPL-3.0-only

//! Centralized application settings and constants.

/// Width of the logical keyboard grid, in keys.
pub const COLUMNS: usize = 15;

/// Height of the logical keyboard grid, in keys.
pub const ROWS: usize = 5;

/// Font family used when no preference has been stored.
pub const DEFAULT_FONT_NAME: &str = "Arial";

/// Font point size used when no preference has been stored.
pub const DEFAULT_FONT_SIZE: i32 = 24;

/// Smallest point size the size accelerators will shrink to.
pub const MIN_FONT_SIZE: i32 = 1;

/// Largest point size accepted from preferences or the size accelerators.
pub const MAX_FONT_SIZE: i32 = 512;

/// Preference key for the keyboard font family.
pub const PREF_FONT_NAME: &str = "font/name";

/// Preference key for the keyboard font point size.
pub const PREF_FONT_SIZE: &str = "font/size";

/// Dotted circle placed before a combining mark on its keycap.
pub const DOTTED_CIRCLE: char = '\u{25CC}';

/// Script name passed to the script-support probe.
pub const THAI_SCRIPT: &str = "Thai";
