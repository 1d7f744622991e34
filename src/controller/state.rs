// SPDX-License-Identifier: GPL-3.0-only

//! Press state of the keyboard controller.

use crate::geometry::KeyBounds;
use crate::keymap::{KeyCode, LogicalKey};

/// The key held down between a press and its release.
///
/// A controller with no press state is idle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressState {
    /// The pressed logical key
    pub key: LogicalKey,
    /// Area drawn as the depressed-key highlight
    pub highlight: KeyBounds,
    /// Code the key carried in the layer active at press time
    pub code: KeyCode,
}

impl PressState {
    #[must_use]
    pub fn row(&self) -> u8 {
        self.key.row
    }

    #[must_use]
    pub fn column(&self) -> u8 {
        self.key.column
    }
}
