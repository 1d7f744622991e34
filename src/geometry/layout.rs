// SPDX-License-Identifier: GPL-3.0-only

//! Key boundaries for a given widget size.
//!
//! The logical grid is always 15 columns by 5 rows, but several physical keys
//! are widened or offset by half a column. All boundaries are kept in floating
//! point and only snapped to pixels when a caller asks for it.
//!
//! # Row rules
//!
//! With `kw = W / 15`:
//!
//! - Row 0: columns 0..=12 are `kw` wide; backspace (column 13) runs to `W`.
//! - Row 1: tab spans `[0, 1.5kw)`; columns 1..=12 are offset by half a key;
//!   enter starts at `13.5kw` and continues into row 2.
//! - Row 2: columns 0..=12 are uniform; from `13kw` on is the lower half of enter.
//! - Row 3: left shift spans `[0, 1.5kw)`; columns 1..=11 are offset by half a
//!   key; right shift spans `[12.5kw, 14kw)`; the rest is dead.
//! - Row 4: a single space bar over the configured [`SpaceBand`].

use serde::{Deserialize, Serialize};

use crate::app_settings::{COLUMNS, ROWS};
use crate::keymap::LogicalKey;

/// Widget or image size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelSize {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl PixelSize {
    /// Creates a pixel size.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in widget coordinates.
///
/// Edges are half-open: `left <= x < right`, `top <= y < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Rounds every edge to the nearest whole pixel.
    #[must_use]
    pub fn snapped(&self) -> Rect {
        Rect::new(
            self.left.round(),
            self.top.round(),
            self.right.round(),
            self.bottom.round(),
        )
    }
}

/// Pixel area covered by one physical key.
///
/// Only enter has an extension: its primary rectangle is in row 1 and the
/// extension is the wider lower half in row 2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyBounds {
    pub primary: Rect,
    pub extension: Option<Rect>,
}

impl KeyBounds {
    const fn single(primary: Rect) -> Self {
        Self {
            primary,
            extension: None,
        }
    }

    /// Returns `true` if the point lies on either part of the key.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.primary.contains(x, y) || self.extension.is_some_and(|ext| ext.contains(x, y))
    }

    /// Smallest rectangle enclosing the whole key.
    #[must_use]
    pub fn outline(&self) -> Rect {
        match self.extension {
            None => self.primary,
            Some(ext) => Rect::new(
                self.primary.left.min(ext.left),
                self.primary.top.min(ext.top),
                self.primary.right.max(ext.right),
                self.primary.bottom.max(ext.bottom),
            ),
        }
    }
}

/// Horizontal extent of the space bar, in logical columns.
///
/// The bar covers `[start_column * kw, end_column * kw)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceBand {
    pub start_column: u8,
    pub end_column: u8,
}

impl SpaceBand {
    /// Columns 4 to 11.
    pub const WIDE: SpaceBand = SpaceBand {
        start_column: 4,
        end_column: 11,
    };

    /// Columns 5 to 10.
    pub const NARROW: SpaceBand = SpaceBand {
        start_column: 5,
        end_column: 10,
    };

    /// Returns `true` if the band is non-empty and lies within the grid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start_column < self.end_column && usize::from(self.end_column) <= COLUMNS
    }
}

impl Default for SpaceBand {
    fn default() -> Self {
        Self::WIDE
    }
}

/// A physical key and where it is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalKey {
    pub key: LogicalKey,
    pub bounds: KeyBounds,
}

/// Key boundaries for one widget size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutGeometry {
    width: f32,
    height: f32,
    space_band: SpaceBand,
}

impl LayoutGeometry {
    /// Creates the geometry for a `width` x `height` widget.
    #[must_use]
    pub fn new(width: f32, height: f32, space_band: SpaceBand) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            space_band,
        }
    }

    /// Creates the geometry for a whole-pixel size.
    #[must_use]
    pub fn from_size(size: PixelSize, space_band: SpaceBand) -> Self {
        Self::new(size.width as f32, size.height as f32, space_band)
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[must_use]
    pub fn space_band(&self) -> SpaceBand {
        self.space_band
    }

    /// Width of one logical column.
    #[must_use]
    pub fn key_width(&self) -> f32 {
        self.width / COLUMNS as f32
    }

    /// Height of one row.
    #[must_use]
    pub fn key_height(&self) -> f32 {
        self.height / ROWS as f32
    }

    /// Rectangle spanning `[left, right)` horizontally on `row`.
    fn row_rect(&self, row: u8, left: f32, right: f32) -> Rect {
        let kh = self.key_height();
        let top = f32::from(row) * kh;
        let bottom = if usize::from(row) + 1 == ROWS {
            self.height
        } else {
            top + kh
        };
        Rect::new(left, top, right, bottom)
    }

    fn enter_bounds(&self) -> KeyBounds {
        let kw = self.key_width();
        KeyBounds {
            primary: self.row_rect(1, 13.5 * kw, self.width),
            extension: Some(self.row_rect(2, 13.0 * kw, self.width)),
        }
    }

    /// Returns the area of a logical key.
    ///
    /// Both halves of enter (`r1c13` and `r2c13`) report the same L-shaped
    /// bounds. Positions absorbed by a wider neighbour return `None`.
    #[must_use]
    pub fn bounds(&self, key: LogicalKey) -> Option<KeyBounds> {
        let kw = self.key_width();
        let c = f32::from(key.column);

        let rect = match (key.row, key.column) {
            (0, 0..=12) | (2, 0..=12) => self.row_rect(key.row, c * kw, (c + 1.0) * kw),
            (0, 13) => self.row_rect(0, 13.0 * kw, self.width),

            (1, 0) | (3, 0) => self.row_rect(key.row, 0.0, 1.5 * kw),
            (1, 1..=12) | (3, 1..=11) => {
                self.row_rect(key.row, (c + 0.5) * kw, (c + 1.5) * kw)
            }
            (1, 13) | (2, 13) => return Some(self.enter_bounds()),

            (3, 12) => self.row_rect(3, 12.5 * kw, 14.0 * kw),

            (4, 0) => {
                let band = self.space_band;
                self.row_rect(
                    4,
                    f32::from(band.start_column) * kw,
                    f32::from(band.end_column) * kw,
                )
            }

            _ => return None,
        };

        Some(KeyBounds::single(rect))
    }

    /// Every physical key, in row-major order.
    ///
    /// Enter appears once, as `r1c13`.
    #[must_use]
    pub fn keys(&self) -> Vec<PhysicalKey> {
        let mut keys = Vec::with_capacity(56);

        for row in 0..ROWS as u8 {
            for column in 0..COLUMNS as u8 {
                let key = LogicalKey::new(row, column);
                if key == LogicalKey::ENTER_LOWER {
                    continue;
                }
                if let Some(bounds) = self.bounds(key) {
                    keys.push(PhysicalKey { key, bounds });
                }
            }
        }

        keys
    }

    /// Areas inside the widget that belong to no key.
    #[must_use]
    pub fn dead_zones(&self) -> Vec<Rect> {
        let kw = self.key_width();
        let band = self.space_band;

        [
            self.row_rect(3, 14.0 * kw, self.width),
            self.row_rect(4, 0.0, f32::from(band.start_column) * kw),
            self.row_rect(4, f32::from(band.end_column) * kw, self.width),
        ]
        .into_iter()
        .filter(|rect| !rect.is_empty())
        .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
