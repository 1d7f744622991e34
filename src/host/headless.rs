// SPDX-License-Identifier: GPL-3.0-only

//! Collaborators for running without a GUI toolkit.

use crate::host::{FontChooser, FontMetrics, GlyphBox, ScriptSupportProbe};
use crate::state::RenderFont;

/// Thai marks that stack on the preceding consonant and take no advance.
fn is_combining_mark(c: char) -> bool {
    matches!(c, '\u{0E31}' | '\u{0E34}'..='\u{0E3A}' | '\u{0E47}'..='\u{0E4E}')
}

/// Glyph boxes estimated from the point size alone.
///
/// Each spacing character is 0.8 em wide; text with stacked marks is
/// 1.6 em tall, other text 1.2 em, rounded to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatedMetrics {
    dpi: f32,
}

impl EstimatedMetrics {
    /// Creates an estimator for the given screen resolution.
    #[must_use]
    pub const fn new(dpi: f32) -> Self {
        Self { dpi }
    }
}

impl Default for EstimatedMetrics {
    fn default() -> Self {
        Self::new(96.0)
    }
}

impl FontMetrics for EstimatedMetrics {
    fn measure(&self, text: &str, font: &RenderFont) -> GlyphBox {
        let em = font.point_size.max(0) as f32 * self.dpi / 72.0;
        let spacing = text.chars().filter(|c| !is_combining_mark(*c)).count();
        let stacked = text.chars().any(is_combining_mark);

        let width = (spacing as f32 * em * 0.8).round() as i32;
        let height = (em * if stacked { 1.6 } else { 1.2 }).round() as i32;
        GlyphBox::new(width, height)
    }
}

/// A font chooser whose dialog is always cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecliningChooser;

impl FontChooser for DecliningChooser {
    fn choose(&mut self, current: &RenderFont) -> Option<RenderFont> {
        tracing::debug!("No font dialog available, keeping {}", current);
        None
    }
}

/// A script-support probe with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedScriptSupport(pub bool);

impl ScriptSupportProbe for FixedScriptSupport {
    fn supports_script(&self, _family: &str, _script: &str) -> bool {
        self.0
    }
}

// ============================================================================
// Tests
// ============================================================================
