// SPDX-License-Identifier: GPL-3.0-only

//! Minimum keyboard size and icon tier from measured glyph metrics.
//!
//! # Measurement
//!
//! The glyph height is measured on a string of stacked tall Thai characters;
//! the glyph width is the widest of a fixed probe set (khomut, a numeral,
//! yo ying, lo chula, sara am and sara ai maimalai). Sara am is measured with
//! its dotted circle when the guard is on, since that is what the keycap shows.
//!
//! # Tiers
//!
//! | Glyph box            | Tier   | Border |
//! |----------------------|--------|--------|
//! | both sides > 36 px   | Large  | 8      |
//! | both sides > 20 px   | Medium | 4      |
//! | otherwise            | Small  | 2      |
//!
//! The minimum size is `glyph * cells + border * cells * 2` on each axis.

use std::fmt;

use crate::app_settings::{COLUMNS, DOTTED_CIRCLE, ROWS};
use crate::geometry::layout::PixelSize;
use crate::host::{FontMetrics, GlyphBox};
use crate::keymap::{KeyClass, KeyCode};
use crate::state::RenderFont;

/// String used to measure the glyph height.
pub const HEIGHT_PROBE: &str = "\u{0E44}\u{0E1B}\u{0E26}\u{0E21}\u{0E35}\u{0E49}\u{0E1A}\u{0E39}";

/// Characters measured for the glyph width, apart from sara am.
pub const WIDTH_PROBES: [&str; 5] = ["\u{0E5B}", "\u{0E59}", "\u{0E0D}", "\u{0E2C}", "\u{0E44}"];

/// Sara am.
const SARA_AM: char = '\u{0E33}';

/// Size class of the action-key icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconTier {
    Small,
    Medium,
    Large,
}

impl IconTier {
    /// Picks the tier for a measured glyph box.
    #[must_use]
    pub fn for_glyph(glyph: GlyphBox) -> Self {
        if glyph.width > 36 && glyph.height > 36 {
            IconTier::Large
        } else if glyph.width > 20 && glyph.height > 20 {
            IconTier::Medium
        } else {
            IconTier::Small
        }
    }

    /// Padding around each key, in pixels.
    #[must_use]
    pub const fn border(self) -> i32 {
        match self {
            IconTier::Small => 2,
            IconTier::Medium => 4,
            IconTier::Large => 8,
        }
    }

    /// Suffix of the icon asset names for this tier.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            IconTier::Small => "small",
            IconTier::Medium => "medium",
            IconTier::Large => "large",
        }
    }
}

impl fmt::Display for IconTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Keys drawn with an icon instead of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKey {
    Backspace,
    Tab,
    Enter,
    Shift,
    FontSelector,
}

impl ActionKey {
    /// Returns the action key for a code, if it has an icon.
    #[must_use]
    pub const fn for_code(code: KeyCode) -> Option<Self> {
        match code.class() {
            KeyClass::Backspace => Some(ActionKey::Backspace),
            KeyClass::Tab => Some(ActionKey::Tab),
            KeyClass::Enter => Some(ActionKey::Enter),
            KeyClass::Shift => Some(ActionKey::Shift),
            KeyClass::FontSelector => Some(ActionKey::FontSelector),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKey::Backspace => "backspace",
            ActionKey::Tab => "tab",
            ActionKey::Enter => "enter",
            ActionKey::Shift => "shift",
            ActionKey::FontSelector => "font",
        }
    }

    /// Asset name of the icon for a tier, e.g. `backspace_large`.
    #[must_use]
    pub fn asset_name(self, tier: IconTier) -> String {
        format!("{}_{}", self.name(), tier.suffix())
    }
}

/// Output of a size computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRequirement {
    /// Smallest widget width that fits every glyph
    pub min_width: i32,
    /// Smallest widget height that fits every glyph
    pub min_height: i32,
    /// Icon tier for the action keys
    pub tier: IconTier,
    /// Measured glyph box, clamped to non-negative
    pub glyph: GlyphBox,
}

impl SizeRequirement {
    #[must_use]
    pub fn min_size(&self) -> PixelSize {
        PixelSize::new(self.min_width, self.min_height)
    }

    /// Grows `size` to the minimum where it falls short.
    #[must_use]
    pub fn clamp(&self, size: PixelSize) -> PixelSize {
        PixelSize::new(size.width.max(self.min_width), size.height.max(self.min_height))
    }
}

/// `glyph * cells + border * cells * 2`, saturating at `i32::MAX`.
fn span(glyph: i32, border: i32, cells: i32) -> i32 {
    glyph
        .saturating_mul(cells)
        .saturating_add(border.saturating_mul(cells).saturating_mul(2))
}

/// Computes the minimum keyboard size for a font.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizePolicy;

impl SizePolicy {
    /// Measures the probe strings in `font` and derives the size requirement.
    ///
    /// Missing fonts that measure as empty boxes still yield a positive
    /// minimum size from the borders alone.
    pub fn compute(metrics: &dyn FontMetrics, font: &RenderFont, nsm_guard: bool) -> SizeRequirement {
        let height = metrics.measure(HEIGHT_PROBE, font).height.max(0);

        let mut sara_am = String::with_capacity(6);
        if nsm_guard {
            sara_am.push(DOTTED_CIRCLE);
        }
        sara_am.push(SARA_AM);

        let width = WIDTH_PROBES
            .iter()
            .map(|probe| metrics.measure(probe, font).width)
            .chain(std::iter::once_with(|| metrics.measure(&sara_am, font).width))
            .max()
            .unwrap_or(0)
            .max(0);

        let glyph = GlyphBox::new(width, height);
        let tier = IconTier::for_glyph(glyph);
        let border = tier.border();

        let requirement = SizeRequirement {
            min_width: span(width, border, COLUMNS as i32),
            min_height: span(height, border, ROWS as i32),
            tier,
            glyph,
        };

        tracing::debug!(
            "Size for {}: glyph {}x{}, minimum {}x{}, tier {}",
            font,
            width,
            height,
            requirement.min_width,
            requirement.min_height,
            tier
        );

        requirement
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::EstimatedMetrics;
    use std::cell::RefCell;

    /// Returns fixed boxes and records what was measured.
    struct FixedMetrics {
        glyph: GlyphBox,
        measured: RefCell<Vec<String>>,
    }

    impl FixedMetrics {
        fn new(width: i32, height: i32) -> Self {
            Self {
                glyph: GlyphBox::new(width, height),
                measured: RefCell::new(Vec::new()),
            }
        }
    }

    impl FontMetrics for FixedMetrics {
        fn measure(&self, text: &str, _font: &RenderFont) -> GlyphBox {
            self.measured.borrow_mut().push(text.to_string());
            self.glyph
        }
    }

    /// Test 1: Tier thresholds are strict and need both sides
    #[test]
    fn test_tier_thresholds() {
        assert_eq!(IconTier::for_glyph(GlyphBox::new(37, 37)), IconTier::Large);
        assert_eq!(IconTier::for_glyph(GlyphBox::new(36, 37)), IconTier::Medium);
        assert_eq!(IconTier::for_glyph(GlyphBox::new(40, 21)), IconTier::Medium);
        assert_eq!(IconTier::for_glyph(GlyphBox::new(21, 20)), IconTier::Small);
        assert_eq!(IconTier::for_glyph(GlyphBox::new(0, 0)), IconTier::Small);
    }

    /// Test 2: Minimum size formula per tier
    #[test]
    fn test_minimum_size_formula() {
        let font = RenderFont::default();

        let large = SizePolicy::compute(&FixedMetrics::new(40, 50), &font, true);
        assert_eq!(large.tier, IconTier::Large);
        assert_eq!(large.min_width, 40 * 15 + 8 * 30);
        assert_eq!(large.min_height, 50 * 5 + 8 * 10);

        let medium = SizePolicy::compute(&FixedMetrics::new(25, 30), &font, true);
        assert_eq!(medium.tier, IconTier::Medium);
        assert_eq!(medium.min_size(), PixelSize::new(25 * 15 + 120, 30 * 5 + 40));

        let small = SizePolicy::compute(&FixedMetrics::new(10, 12), &font, true);
        assert_eq!(small.tier, IconTier::Small);
        assert_eq!(small.min_size(), PixelSize::new(150 + 60, 60 + 20));
    }

    /// Test 3: Degenerate metrics still give a positive size
    #[test]
    fn test_degenerate_metrics() {
        let result = SizePolicy::compute(&FixedMetrics::new(-5, 0), &RenderFont::default(), false);

        assert_eq!(result.tier, IconTier::Small);
        assert_eq!(result.glyph, GlyphBox::new(0, 0));
        assert_eq!(result.min_size(), PixelSize::new(60, 20));
    }

    /// Test 4: Huge glyph boxes saturate instead of overflowing
    #[test]
    fn test_huge_glyph_saturates() {
        let font = RenderFont::default();

        let huge = SizePolicy::compute(&FixedMetrics::new(i32::MAX / 2, i32::MAX), &font, true);
        assert_eq!(huge.tier, IconTier::Large);
        assert_eq!(huge.min_size(), PixelSize::new(i32::MAX, i32::MAX));

        let wide = SizePolicy::compute(&FixedMetrics::new(200_000_000, 30), &font, true);
        assert_eq!(wide.min_width, i32::MAX);
        assert_eq!(wide.min_height, 30 * 5 + 40, "Height is unaffected");
    }

    /// Test 5: Sara am is measured with the dotted circle only when guarded
    #[test]
    fn test_sara_am_probe_follows_guard() {
        let font = RenderFont::default();

        let guarded = FixedMetrics::new(10, 10);
        SizePolicy::compute(&guarded, &font, true);
        assert!(guarded.measured.borrow().contains(&"\u{25CC}\u{0E33}".to_string()));

        let plain = FixedMetrics::new(10, 10);
        SizePolicy::compute(&plain, &font, false);
        let measured = plain.measured.borrow();
        assert!(measured.contains(&"\u{0E33}".to_string()));
        assert!(!measured.iter().any(|text| text.contains('\u{25CC}')));
        assert_eq!(measured[0], HEIGHT_PROBE, "Height is measured first");
    }

    /// Test 6: Identical inputs give identical results
    #[test]
    fn test_compute_idempotent() {
        let metrics = EstimatedMetrics::default();
        let font = RenderFont::new("Garuda", 28);

        let first = SizePolicy::compute(&metrics, &font, true);
        let second = SizePolicy::compute(&metrics, &font, true);
        assert_eq!(first, second);
    }

    /// Test 7: Action key asset names
    #[test]
    fn test_action_key_assets() {
        assert_eq!(ActionKey::for_code(KeyCode::BACKSPACE), Some(ActionKey::Backspace));
        assert_eq!(ActionKey::for_code(KeyCode::RIGHT_SHIFT), Some(ActionKey::Shift));
        assert_eq!(ActionKey::for_code(KeyCode::FONT_SELECTOR), Some(ActionKey::FontSelector));
        assert_eq!(ActionKey::for_code(KeyCode::SPACE), None);
        assert_eq!(ActionKey::for_code(KeyCode(161)), None);

        assert_eq!(ActionKey::Backspace.asset_name(IconTier::Large), "backspace_large");
        assert_eq!(ActionKey::FontSelector.asset_name(IconTier::Small), "font_small");
    }

    /// Test 8: Clamping never shrinks a size
    #[test]
    fn test_clamp_to_minimum() {
        let requirement = SizePolicy::compute(&FixedMetrics::new(10, 12), &RenderFont::default(), true);
        assert_eq!(requirement.clamp(PixelSize::new(100, 500)), PixelSize::new(210, 500));
        assert_eq!(requirement.clamp(PixelSize::new(900, 10)), PixelSize::new(900, 80));
    }
}
