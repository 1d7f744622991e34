// SPDX-License-Identifier: GPL-3.0-only

//! Modifier keys held during a physical keyboard event.
//!
//! The host reports which modifiers accompany each key event; the accelerator
//! path only fires when exactly Ctrl is held, so the set has to tell "Ctrl"
//! apart from "Ctrl+Shift".
//!
//! # Example
//!
//! ```rust,ignore
//! use thaivkb::input::{Modifier, ModifierSet};
//!
//! let mut set = ModifierSet::new();
//! set.activate(Modifier::Ctrl);
//! assert!(set.is_only(Modifier::Ctrl));
//! ```

use std::collections::HashSet;
use std::fmt;

/// A modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// Shift modifier
    Shift,
    /// Control modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Super/Windows/Meta modifier
    Super,
}

impl Modifier {
    /// Parses a modifier name as written in key combinations (`ctrl`, `shift`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "shift" => Some(Modifier::Shift),
            "ctrl" | "control" => Some(Modifier::Ctrl),
            "alt" => Some(Modifier::Alt),
            "super" | "meta" | "logo" => Some(Modifier::Super),
            _ => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Modifier::Shift => "Shift",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Super => "Super",
        };
        f.write_str(name)
    }
}

/// The set of modifiers held with a key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifierSet {
    active: HashSet<Modifier>,
}

impl ModifierSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: HashSet::new(),
        }
    }

    /// Adds a modifier.
    pub fn activate(&mut self, modifier: Modifier) {
        self.active.insert(modifier);
    }

    /// Removes a modifier.
    pub fn deactivate(&mut self, modifier: Modifier) {
        self.active.remove(&modifier);
    }

    #[must_use]
    pub fn is_active(&self, modifier: Modifier) -> bool {
        self.active.contains(&modifier)
    }

    /// Returns `true` if `modifier` is held and nothing else is.
    #[must_use]
    pub fn is_only(&self, modifier: Modifier) -> bool {
        self.active.len() == 1 && self.is_active(modifier)
    }

    /// Returns the active modifiers in a consistent order.
    #[must_use]
    pub fn get_active_modifiers(&self) -> Vec<Modifier> {
        let mut modifiers: Vec<Modifier> = self.active.iter().copied().collect();
        modifiers.sort();
        modifiers
    }

    #[must_use]
    pub fn has_active_modifiers(&self) -> bool {
        !self.active.is_empty()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self {
            active: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .get_active_modifiers()
            .iter()
            .map(ToString::to_string)
            .collect();
        f.write_str(&names.join("+"))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
