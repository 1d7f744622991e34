// SPDX-License-Identifier: GPL-3.0-only

//! Legacy code to Unicode conversion and the non-spacing mark guard.
//!
//! The legacy single-byte Thai block (0xA1..=0xFB) maps linearly onto the
//! Unicode Thai block starting at U+0E01. Combining marks drawn on their own
//! keycap need a dotted circle in front of them on renderers that will not
//! supply one, which is what the NSM guard decides.

use serde::{Deserialize, Serialize};

use crate::app_settings::{DOTTED_CIRCLE, THAI_SCRIPT};
use crate::host::ScriptSupportProbe;
use crate::keymap::types::{KeyClass, KeyCode};

/// First code point of the Unicode Thai block used by the keymaps.
pub const THAI_BLOCK_START: u32 = 0x0E01;

/// Last code point of the Unicode Thai block used by the keymaps.
pub const THAI_BLOCK_END: u32 = 0x0E5B;

/// Converts a legacy code above 127 to its Unicode scalar value.
///
/// Codes up to 127 are control or ASCII codes and have no mapping here;
/// callers branch on [`KeyCode::class`] first.
#[must_use]
pub fn to_unicode(code: KeyCode) -> Option<char> {
    if code.value() <= 127 {
        return None;
    }
    char::from_u32(u32::from(code.value()) - 0xA0 + 0x0E00)
}

/// Returns `true` when a code on the given keyboard row is a combining mark
/// that needs a base character to render.
///
/// Each row holds a different subset of marks, so the ranges are per row.
#[must_use]
pub fn needs_nsm_guard(code: KeyCode, row: u8) -> bool {
    let c = code.value();
    match row {
        0 => (212..=218).contains(&c),
        1 => c == 209 || (211..=218).contains(&c) || c == 234 || c == 237,
        2 => (231..=238).contains(&c),
        3 => (212..=218).contains(&c) || (231..=238).contains(&c),
        _ => false,
    }
}

/// How the dotted-circle guard is decided for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NsmGuardPolicy {
    /// Always add the dotted circle
    Always,
    /// Never add it
    Never,
    /// Add it only when the font covers Thai; otherwise the platform's
    /// fallback renderer supplies its own
    ProbeScript,
}

impl Default for NsmGuardPolicy {
    /// macOS fallback fonts draw their own dotted circle, so the guard is
    /// probed there and always on elsewhere.
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            NsmGuardPolicy::ProbeScript
        } else {
            NsmGuardPolicy::Always
        }
    }
}

impl NsmGuardPolicy {
    /// Resolves the policy to a plain on/off flag for one font family.
    pub fn resolve(self, probe: &dyn ScriptSupportProbe, family: &str) -> bool {
        match self {
            NsmGuardPolicy::Always => true,
            NsmGuardPolicy::Never => false,
            NsmGuardPolicy::ProbeScript => probe.supports_script(family, THAI_SCRIPT),
        }
    }
}

/// Converts codes for display with a fixed guard setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeConverter {
    guard_enabled: bool,
}

impl CodeConverter {
    /// Creates a converter with the guard switched on or off.
    #[must_use]
    pub const fn new(guard_enabled: bool) -> Self {
        Self { guard_enabled }
    }

    /// Returns `true` if the dotted circle is added at all.
    #[must_use]
    pub const fn guard_enabled(&self) -> bool {
        self.guard_enabled
    }

    /// Returns `true` if the keycap for this code on this row gets a dotted circle.
    #[must_use]
    pub fn guards(&self, code: KeyCode, row: u8) -> bool {
        self.guard_enabled && needs_nsm_guard(code, row)
    }

    /// Returns the text drawn on a keycap.
    ///
    /// Action keys and the space bar have no text and return `None`. The
    /// dotted circle is display only and never part of an emitted code.
    #[must_use]
    pub fn keycap(&self, code: KeyCode, row: u8) -> Option<String> {
        let glyph = match code.class() {
            KeyClass::Thai => to_unicode(code)?,
            KeyClass::Reserved => char::from(code.value()),
            _ => return None,
        };

        let mut cap = String::with_capacity(8);
        if self.guards(code, row) {
            cap.push(DOTTED_CIRCLE);
        }
        cap.push(glyph);
        Some(cap)
    }
}

impl Default for CodeConverter {
    fn default() -> Self {
        Self::new(true)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::table::KeymapTable;

    struct FixedProbe(bool);

    impl ScriptSupportProbe for FixedProbe {
        fn supports_script(&self, _family: &str, script: &str) -> bool {
            assert_eq!(script, "Thai");
            self.0
        }
    }

    /// Test 1: Fongman converts with the exact block arithmetic
    #[test]
    fn test_fongman_arithmetic() {
        assert_eq!(239 - 160 + 3584, 3663);
        assert_eq!(to_unicode(KeyCode(239)), Some('\u{0E4F}'));
        assert_eq!(to_unicode(KeyCode(161)), Some('\u{0E01}'), "Ko kai starts the block");
        assert_eq!(to_unicode(KeyCode(251)), Some('\u{0E5B}'), "Khomut ends the block");
    }

    /// Test 2: Codes up to 127 have no mapping
    #[test]
    fn test_low_codes_unmapped() {
        for value in [0u8, 1, 8, 10, 32, 47, 127] {
            assert_eq!(to_unicode(KeyCode(value)), None, "Code {} should not convert", value);
        }
    }

    /// Test 3: Every printable code in the built-in table lands in the Thai block
    #[test]
    fn test_table_codes_in_thai_block() {
        let table = KeymapTable::kedmanee();
        for code in table.all_codes().filter(|c| c.value() > 127) {
            let converted = to_unicode(code).expect("codes above 127 convert") as u32;
            assert_eq!(converted, u32::from(code.value()) - 0xA0 + 0xE00);
            assert!(
                (THAI_BLOCK_START..=THAI_BLOCK_END).contains(&converted),
                "Code {} converted to U+{:04X}",
                code,
                converted
            );
        }
    }

    /// Test 4: Per-row guard ranges, including their exclusive edges
    #[test]
    fn test_guard_ranges_per_row() {
        assert!(needs_nsm_guard(KeyCode(213), 1), "Sara ii on row 1");
        assert!(needs_nsm_guard(KeyCode(211), 1), "Sara am is guarded on row 1");
        assert!(needs_nsm_guard(KeyCode(209), 1));
        assert!(needs_nsm_guard(KeyCode(234), 1));
        assert!(needs_nsm_guard(KeyCode(237), 1));
        assert!(!needs_nsm_guard(KeyCode(219), 1));

        assert!(!needs_nsm_guard(KeyCode(211), 0), "Row 0 lower bound is exclusive");
        assert!(needs_nsm_guard(KeyCode(216), 0));
        assert!(!needs_nsm_guard(KeyCode(219), 0));

        assert!(!needs_nsm_guard(KeyCode(230), 2));
        assert!(needs_nsm_guard(KeyCode(233), 2));
        assert!(!needs_nsm_guard(KeyCode(239), 2));

        assert!(needs_nsm_guard(KeyCode(212), 3));
        assert!(needs_nsm_guard(KeyCode(236), 3));
        assert!(!needs_nsm_guard(KeyCode(225), 3));

        assert!(!needs_nsm_guard(KeyCode(216), 4), "Row 4 never guards");
    }

    /// Test 5: Guarded keycap starts with the dotted circle
    #[test]
    fn test_guarded_keycap() {
        let converter = CodeConverter::new(true);
        let cap = converter.keycap(KeyCode(213), 1).expect("Thai code has a keycap");

        let mut chars = cap.chars();
        assert_eq!(chars.next(), Some('\u{25CC}'));
        assert_eq!(chars.next(), Some('\u{0E35}'));
        assert_eq!(chars.next(), None);
    }

    /// Test 6: Disabled guard and non-glyph codes
    #[test]
    fn test_keycap_without_guard() {
        let converter = CodeConverter::new(false);
        assert_eq!(converter.keycap(KeyCode(213), 1).as_deref(), Some("\u{0E35}"));
        assert_eq!(converter.keycap(KeyCode(47), 0).as_deref(), Some("/"));
        assert_eq!(converter.keycap(KeyCode::SPACE, 4), None);
        assert_eq!(converter.keycap(KeyCode::BACKSPACE, 0), None);
        assert_eq!(converter.keycap(KeyCode::LEFT_SHIFT, 3), None);
    }

    /// Test 7: Policy resolution
    #[test]
    fn test_policy_resolution() {
        assert!(NsmGuardPolicy::Always.resolve(&FixedProbe(false), "Any"));
        assert!(!NsmGuardPolicy::Never.resolve(&FixedProbe(true), "Any"));
        assert!(NsmGuardPolicy::ProbeScript.resolve(&FixedProbe(true), "Thonburi"));
        assert!(!NsmGuardPolicy::ProbeScript.resolve(&FixedProbe(false), "Rockwell"));
    }

    /// Test 8: Policy names in configuration files
    #[test]
    fn test_policy_serde_names() {
        let policy: NsmGuardPolicy = serde_json::from_str("\"probe_script\"").unwrap();
        assert_eq!(policy, NsmGuardPolicy::ProbeScript);
        assert_eq!(serde_json::to_string(&NsmGuardPolicy::Never).unwrap(), "\"never\"");
    }
}
