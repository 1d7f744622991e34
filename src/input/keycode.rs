// SPDX-License-Identifier: GPL-3.0-only

//! Key outputs emitted to the host.
//!
//! A pressed key's legacy code is resolved into a [`KeyOutput`]: a Thai
//! character, a reserved ASCII character, or one of the control keys. Each
//! output maps onto an XKB keysym so a host can inject it through a
//! virtual-keyboard protocol.
//!
//! # Keysyms
//!
//! - Control keys use their named keysyms (`BackSpace`, `Tab`, `Return`, `space`)
//! - Printable ASCII keysyms equal the character code
//! - Other characters use the Unicode keysym range, `0x0100_0000 | codepoint`

use std::fmt;

use xkbcommon::xkb::Keysym;
use xkbcommon::xkb::keysyms::{KEY_BackSpace, KEY_Return, KEY_Tab, KEY_space};

use crate::keymap::{KeyClass, KeyCode, to_unicode};

/// Control keys that emit a code but no glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    Backspace,
    Tab,
    Enter,
    Space,
}

impl ControlKey {
    /// Returns the legacy code of the key.
    #[must_use]
    pub const fn code(self) -> KeyCode {
        match self {
            ControlKey::Backspace => KeyCode::BACKSPACE,
            ControlKey::Tab => KeyCode::TAB,
            ControlKey::Enter => KeyCode::ENTER,
            ControlKey::Space => KeyCode::SPACE,
        }
    }

    /// Returns the XKB keysym of the key.
    #[must_use]
    pub fn keysym(self) -> Keysym {
        let raw = match self {
            ControlKey::Backspace => KEY_BackSpace,
            ControlKey::Tab => KEY_Tab,
            ControlKey::Enter => KEY_Return,
            ControlKey::Space => KEY_space,
        };
        raw.into()
    }
}

/// A code emitted by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOutput {
    /// A Thai character and the legacy code it came from
    Thai {
        /// Legacy single-byte code
        legacy: KeyCode,
        /// Converted Unicode character
        ch: char,
    },
    /// A reserved-range code passed through as ASCII
    Ascii(char),
    /// Backspace, tab, enter or space
    Control(ControlKey),
}

impl KeyOutput {
    /// Resolves a legacy code to its output.
    ///
    /// Blank, shift, font-selector and unassigned codes emit nothing.
    #[must_use]
    pub fn from_code(code: KeyCode) -> Option<Self> {
        match code.class() {
            KeyClass::Thai => to_unicode(code).map(|ch| KeyOutput::Thai { legacy: code, ch }),
            KeyClass::Reserved => Some(KeyOutput::Ascii(char::from(code.value()))),
            KeyClass::Backspace => Some(KeyOutput::Control(ControlKey::Backspace)),
            KeyClass::Tab => Some(KeyOutput::Control(ControlKey::Tab)),
            KeyClass::Enter => Some(KeyOutput::Control(ControlKey::Enter)),
            KeyClass::Space => Some(KeyOutput::Control(ControlKey::Space)),
            KeyClass::Blank | KeyClass::Shift | KeyClass::FontSelector | KeyClass::Unassigned => None,
        }
    }

    /// Returns the legacy code behind this output.
    #[must_use]
    pub fn legacy_code(&self) -> KeyCode {
        match *self {
            KeyOutput::Thai { legacy, .. } => legacy,
            KeyOutput::Ascii(c) => KeyCode(c as u8),
            KeyOutput::Control(key) => key.code(),
        }
    }

    /// Returns the Unicode code point for characters, or the control code
    /// for control keys.
    #[must_use]
    pub fn code_point(&self) -> u32 {
        match *self {
            KeyOutput::Thai { ch, .. } | KeyOutput::Ascii(ch) => ch as u32,
            KeyOutput::Control(key) => u32::from(key.code().value()),
        }
    }

    /// Returns the text this output inserts, if any.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match *self {
            KeyOutput::Thai { ch, .. } | KeyOutput::Ascii(ch) => Some(ch),
            KeyOutput::Control(ControlKey::Space) => Some(' '),
            KeyOutput::Control(ControlKey::Tab) => Some('\t'),
            KeyOutput::Control(_) => None,
        }
    }

    /// Returns the XKB keysym to inject for this output.
    #[must_use]
    pub fn keysym(&self) -> Keysym {
        match *self {
            KeyOutput::Control(key) => key.keysym(),
            KeyOutput::Ascii(c) => (c as u32).into(),
            KeyOutput::Thai { ch, .. } => (0x0100_0000 | ch as u32).into(),
        }
    }
}

impl fmt::Display for KeyOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyOutput::Thai { legacy, ch } => write!(f, "{} (U+{:04X}, legacy {})", ch, *ch as u32, legacy),
            KeyOutput::Ascii(c) => write!(f, "{:?}", c),
            KeyOutput::Control(key) => write!(f, "{:?}", key),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
