// SPDX-License-Identifier: GPL-3.0-only

//! Key geometry, hit testing and size policy.
//!
//! # Features
//!
//! - **Layout geometry**: Per-row key boundaries on the 15 x 5 logical grid,
//!   including the merged backspace, tab, enter, shift and space keys
//! - **Hit testing**: Pointer coordinates to logical keys and their highlight area
//! - **Size policy**: Minimum widget size and action-key icon tier from font metrics
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use thaivkb::geometry::{HitTester, LayoutGeometry, SpaceBand};
//!
//! let geometry = LayoutGeometry::new(450.0, 200.0, SpaceBand::WIDE);
//! let hit = HitTester::resolve(440.0, 10.0, &geometry).unwrap();
//! assert_eq!((hit.key.row, hit.key.column), (0, 13));
//! ```

pub mod hit_test;
pub mod layout;
pub mod sizing;

pub use hit_test::{Hit, HitTester};
pub use layout::{KeyBounds, LayoutGeometry, PhysicalKey, PixelSize, Rect, SpaceBand};
pub use sizing::{ActionKey, HEIGHT_PROBE, IconTier, SizePolicy, SizeRequirement, WIDTH_PROBES};
