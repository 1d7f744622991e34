// SPDX-License-Identifier: GPL-3.0-only

//! Physical keyboard events and the font-size accelerators.
//!
//! | Keys     | Action                                  |
//! |----------|-----------------------------------------|
//! | `Ctrl+0` | Restore the font the session started with |
//! | `Ctrl+9` | Increase the point size by one          |
//! | `Ctrl+8` | Decrease the point size by one          |
//!
//! Every other event is handed back to the host unchanged.

use std::fmt;

use xkbcommon::xkb;
use xkbcommon::xkb::Keysym;
use xkbcommon::xkb::keysyms::{KEY_0, KEY_8, KEY_9, KEY_NoSymbol};

use crate::input::modifier::{Modifier, ModifierSet};

/// A key event from the host's physical keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostKeyEvent {
    /// Keysym of the pressed key
    pub keysym: Keysym,
    /// Modifiers held with it
    pub modifiers: ModifierSet,
}

impl HostKeyEvent {
    /// Creates an event.
    #[must_use]
    pub fn new(keysym: Keysym, modifiers: ModifierSet) -> Self {
        Self { keysym, modifiers }
    }

    /// Parses a combination such as `ctrl+9` or `shift+Return`.
    ///
    /// The last `+`-separated part is an XKB keysym name, matched
    /// case-insensitively; every earlier part must name a modifier.
    #[must_use]
    pub fn parse(combo: &str) -> Option<Self> {
        let mut parts: Vec<&str> = combo.split('+').map(str::trim).collect();
        let key_name = parts.pop().filter(|name| !name.is_empty())?;

        let modifiers = parts
            .into_iter()
            .map(Modifier::from_name)
            .collect::<Option<ModifierSet>>()?;

        let no_symbol: Keysym = KEY_NoSymbol.into();
        let mut keysym = xkb::keysym_from_name(key_name, xkb::KEYSYM_NO_FLAGS);
        if keysym == no_symbol {
            keysym = xkb::keysym_from_name(key_name, xkb::KEYSYM_CASE_INSENSITIVE);
        }
        if keysym == no_symbol {
            return None;
        }

        Some(Self { keysym, modifiers })
    }
}

impl fmt::Display for HostKeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = xkb::keysym_get_name(self.keysym);
        if self.modifiers.has_active_modifiers() {
            write!(f, "{}+{}", self.modifiers, name)
        } else {
            f.write_str(&name)
        }
    }
}

/// Font shortcuts handled by the keyboard itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accelerator {
    /// Restore the session-start font
    ResetFont,
    /// Point size plus one
    IncreaseSize,
    /// Point size minus one
    DecreaseSize,
}

impl Accelerator {
    /// Matches an event against the accelerators.
    ///
    /// Only plain Ctrl counts; Ctrl+Shift+9 is passed through.
    #[must_use]
    pub fn recognize(event: &HostKeyEvent) -> Option<Self> {
        if !event.modifiers.is_only(Modifier::Ctrl) {
            return None;
        }

        let [reset, increase, decrease]: [Keysym; 3] = [KEY_0.into(), KEY_9.into(), KEY_8.into()];
        if event.keysym == reset {
            Some(Accelerator::ResetFont)
        } else if event.keysym == increase {
            Some(Accelerator::IncreaseSize)
        } else if event.keysym == decrease {
            Some(Accelerator::DecreaseSize)
        } else {
            None
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(keysym: u32) -> HostKeyEvent {
        HostKeyEvent::new(keysym.into(), [Modifier::Ctrl].into_iter().collect())
    }

    /// Test the three accelerators
    #[test]
    fn test_recognize_accelerators() {
        assert_eq!(Accelerator::recognize(&ctrl(KEY_0)), Some(Accelerator::ResetFont));
        assert_eq!(Accelerator::recognize(&ctrl(KEY_9)), Some(Accelerator::IncreaseSize));
        assert_eq!(Accelerator::recognize(&ctrl(KEY_8)), Some(Accelerator::DecreaseSize));
        assert_eq!(Accelerator::recognize(&ctrl(0x37)), None, "Ctrl+7 is not bound");
    }

    /// Test that other modifier combinations pass through
    #[test]
    fn test_modifiers_must_be_plain_ctrl() {
        let bare = HostKeyEvent::new(KEY_9.into(), ModifierSet::new());
        assert_eq!(Accelerator::recognize(&bare), None);

        let ctrl_shift = HostKeyEvent::new(
            KEY_9.into(),
            [Modifier::Ctrl, Modifier::Shift].into_iter().collect(),
        );
        assert_eq!(Accelerator::recognize(&ctrl_shift), None);
    }

    /// Test combination parsing
    #[test]
    fn test_parse_combinations() {
        assert_eq!(HostKeyEvent::parse("ctrl+9"), Some(ctrl(KEY_9)));
        assert_eq!(HostKeyEvent::parse("Control + 0"), Some(ctrl(KEY_0)));

        let plain = HostKeyEvent::parse("a").expect("bare keysym parses");
        assert!(!plain.modifiers.has_active_modifiers());
        assert_eq!(plain.keysym, Keysym::from(0x61u32));

        assert_eq!(HostKeyEvent::parse("hyper+9"), None, "Unknown modifier");
        assert_eq!(HostKeyEvent::parse("ctrl+"), None, "Missing key");
        assert_eq!(HostKeyEvent::parse("ctrl+NotAKeysym"), None);
    }
}
