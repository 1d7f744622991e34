// SPDX-License-Identifier: GPL-3.0-only

//! Pointer coordinate to logical key resolution.

use crate::geometry::layout::{KeyBounds, LayoutGeometry};
use crate::keymap::LogicalKey;

/// A resolved pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// The logical key under the pointer
    pub key: LogicalKey,
    /// Area of the key, for the press highlight
    pub bounds: KeyBounds,
}

/// Maps pointer coordinates to keys using the per-row column rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct HitTester;

impl HitTester {
    /// Resolves the key at `(x, y)`.
    ///
    /// Returns `None` outside the widget and in the dead zones of rows 3
    /// and 4. Columns past the last key of a row clamp onto that key, so a
    /// press right of column 13 on row 0 is still backspace.
    #[must_use]
    pub fn resolve(x: f32, y: f32, geometry: &LayoutGeometry) -> Option<Hit> {
        let (w, h) = (geometry.width(), geometry.height());
        if !(x >= 0.0 && x < w && y >= 0.0 && y < h) {
            return None;
        }

        let kw = geometry.key_width();
        let kh = geometry.key_height();
        let row = ((y / kh).floor() as u8).min(4);

        let column = |offset: f32| ((x - offset * kw) / kw).floor().max(0.0) as u8;

        let col = match row {
            0 => column(0.0).min(13),
            1 => column(0.5).min(13),
            2 => column(0.0).min(13),
            3 => {
                if x >= 14.0 * kw {
                    return None;
                }
                column(0.5).min(12)
            }
            _ => {
                let band = geometry.space_band();
                let inside = x >= f32::from(band.start_column) * kw
                    && x < f32::from(band.end_column) * kw;
                if !inside {
                    return None;
                }
                0
            }
        };

        let key = LogicalKey::new(row, col);
        let bounds = geometry.bounds(key)?;
        Some(Hit { key, bounds })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::layout::SpaceBand;

    fn geometry() -> LayoutGeometry {
        LayoutGeometry::new(450.0, 200.0, SpaceBand::WIDE)
    }

    fn key_at(x: f32, y: f32) -> Option<LogicalKey> {
        HitTester::resolve(x, y, &geometry()).map(|hit| hit.key)
    }

    /// Test 1: Presses past column 13 on row 0 clamp to backspace
    #[test]
    fn test_backspace_clamp() {
        assert_eq!(key_at(440.0, 10.0), Some(LogicalKey::BACKSPACE), "x=440 is column 14.67");
        assert_eq!(key_at(390.0, 10.0), Some(LogicalKey::BACKSPACE));
        assert_eq!(key_at(389.9, 10.0), Some(LogicalKey::new(0, 12)));
        assert_eq!(key_at(0.0, 0.0), Some(LogicalKey::new(0, 0)));
    }

    /// Test 2: Row 1 offset columns and the tab key
    #[test]
    fn test_row_one_offsets() {
        assert_eq!(key_at(5.0, 50.0), Some(LogicalKey::TAB), "Left of half a key is tab");
        assert_eq!(key_at(44.0, 50.0), Some(LogicalKey::TAB), "Tab is 1.5 keys wide");
        assert_eq!(key_at(45.0, 50.0), Some(LogicalKey::new(1, 1)));
        assert_eq!(key_at(404.0, 50.0), Some(LogicalKey::new(1, 12)));
        assert_eq!(key_at(405.0, 50.0), Some(LogicalKey::ENTER));
    }

    /// Test 3: Row 2 font selector and the lower half of enter
    #[test]
    fn test_row_two() {
        assert_eq!(key_at(29.0, 90.0), Some(LogicalKey::FONT_SELECTOR));
        assert_eq!(key_at(30.0, 90.0), Some(LogicalKey::new(2, 1)));
        assert_eq!(key_at(391.0, 90.0), Some(LogicalKey::ENTER_LOWER));
        assert_eq!(key_at(449.0, 119.0), Some(LogicalKey::ENTER_LOWER));

        let hit = HitTester::resolve(391.0, 90.0, &geometry()).unwrap();
        assert!(hit.bounds.extension.is_some(), "Lower enter highlights the whole L");
    }

    /// Test 4: Row 3 shifts and the dead zone after the right shift
    #[test]
    fn test_row_three() {
        assert_eq!(key_at(10.0, 130.0), Some(LogicalKey::LEFT_SHIFT));
        assert_eq!(key_at(50.0, 130.0), Some(LogicalKey::new(3, 1)));
        assert_eq!(key_at(370.0, 130.0), Some(LogicalKey::new(3, 11)));
        assert_eq!(key_at(375.0, 130.0), Some(LogicalKey::RIGHT_SHIFT));
        assert_eq!(key_at(419.0, 130.0), Some(LogicalKey::RIGHT_SHIFT));
        assert_eq!(key_at(420.0, 130.0), None, "Right of 14 keys is dead");
    }

    /// Test 5: Space bar band and the surrounding dead zone
    #[test]
    fn test_space_band() {
        assert_eq!(key_at(120.0, 170.0), Some(LogicalKey::SPACE));
        assert_eq!(key_at(329.0, 199.0), Some(LogicalKey::SPACE));
        assert_eq!(key_at(119.0, 170.0), None);
        assert_eq!(key_at(330.0, 170.0), None);

        let narrow = LayoutGeometry::new(450.0, 200.0, SpaceBand::NARROW);
        assert!(HitTester::resolve(125.0, 170.0, &narrow).is_none());
        assert!(HitTester::resolve(150.0, 170.0, &narrow).is_some());
    }

    /// Test 6: Points outside the widget resolve to nothing
    #[test]
    fn test_outside_widget() {
        assert_eq!(key_at(-1.0, 10.0), None);
        assert_eq!(key_at(10.0, -0.1), None);
        assert_eq!(key_at(450.0, 10.0), None);
        assert_eq!(key_at(10.0, 200.0), None);
        assert_eq!(key_at(f32::NAN, 10.0), None);
    }

    /// Test 7: Every point inside the widget resolves, and lies inside its key
    #[test]
    fn test_resolution_is_total() {
        for size in [(450.0, 200.0), (451.0, 203.0), (17.0, 9.0)] {
            let geometry = LayoutGeometry::new(size.0, size.1, SpaceBand::WIDE);
            let (mut x, mut keys, mut dead) = (0.0_f32, 0, 0);

            while x < size.0 {
                let mut y = 0.0_f32;
                while y < size.1 {
                    match HitTester::resolve(x, y, &geometry) {
                        Some(hit) => {
                            keys += 1;
                            assert!(
                                hit.bounds.outline().contains(x, y),
                                "({}, {}) resolved to {} outside its bounds",
                                x,
                                y,
                                hit.key
                            );
                        }
                        None => {
                            dead += 1;
                            assert!(
                                geometry.dead_zones().iter().any(|zone| zone.contains(x, y)),
                                "({}, {}) resolved to no key outside any dead zone",
                                x,
                                y
                            );
                        }
                    }
                    y += 0.75;
                }
                x += 0.75;
            }

            assert!(keys > 0 && dead > 0);
        }
    }
}
