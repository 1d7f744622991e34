// SPDX-License-Identifier: GPL-3.0-only

//! Interfaces to the host GUI framework.
//!
//! The keyboard core never draws, opens dialogs or touches the filesystem on
//! its own. Font measurement, the font chooser, preference storage and the
//! script-support probe are supplied by the host through the traits below.
//!
//! Headless implementations are provided for tests and the inspection binary:
//!
//! - [`JsonPreferenceStore`] / [`MemoryPreferenceStore`]: preference storage
//! - [`EstimatedMetrics`]: glyph boxes estimated from the point size
//! - [`DecliningChooser`]: a font chooser that is always cancelled
//! - [`FixedScriptSupport`]: a probe with a fixed answer

pub mod headless;
pub mod preferences;

pub use headless::{DecliningChooser, EstimatedMetrics, FixedScriptSupport};
pub use preferences::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceError};

use crate::state::RenderFont;

/// Pixel bounding box of a measured string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphBox {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl GlyphBox {
    /// Creates a glyph box.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Measures text in a given font.
pub trait FontMetrics {
    /// Returns the pixel bounding box of `text` rendered in `font`.
    fn measure(&self, text: &str, font: &RenderFont) -> GlyphBox;
}

/// Modal font selection dialog.
pub trait FontChooser {
    /// Asks the user for a font, starting from `current`.
    ///
    /// Returns `None` when the user cancels.
    fn choose(&mut self, current: &RenderFont) -> Option<RenderFont>;
}

/// Answers whether a font family has glyphs for a script.
pub trait ScriptSupportProbe {
    /// Returns `true` if `family` supports `script` (e.g. "Thai").
    fn supports_script(&self, family: &str, script: &str) -> bool;
}

/// Key/value storage persisted across sessions.
pub trait PreferenceStore {
    /// Reads a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores a value.
    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError>;

    /// Stores several values as one write.
    ///
    /// The default writes them one by one, so a failure can leave earlier
    /// entries stored. Stores that persist on every write should override it.
    fn set_many(&mut self, entries: Vec<(&str, String)>) -> Result<(), PreferenceError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Reads a stored value, falling back to `default`.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}
