// SPDX-License-Identifier: GPL-3.0-only

//! The unshifted and shifted keymap grids.
//!
//! Both grids are immutable once constructed. The built-in table is the
//! Kedmanee layout in legacy single-byte Thai codes.

use crate::app_settings::{COLUMNS, ROWS};
use crate::keymap::types::{KeyCode, KeymapGrid, ParseError};
use crate::keymap::validation::validate_grids;

/// Builds a grid from raw bytes at compile time.
const fn grid(raw: [[u8; COLUMNS]; ROWS]) -> KeymapGrid {
    let mut out = [[KeyCode::BLANK; COLUMNS]; ROWS];
    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col < COLUMNS {
            out[row][col] = KeyCode(raw[row][col]);
            col += 1;
        }
        row += 1;
    }
    out
}

const KEDMANEE_UNSHIFTED: KeymapGrid = grid([
    [239, 229, 47, 45, 192, 182, 216, 214, 164, 181, 168, 162, 170, 8, 0],
    [9, 230, 228, 211, 190, 208, 209, 213, 195, 185, 194, 186, 197, 10, 10],
    [3, 238, 191, 203, 161, 180, 224, 233, 232, 210, 202, 199, 167, 10, 10],
    [1, 163, 188, 187, 225, 205, 212, 215, 183, 193, 227, 189, 2, 2, 0],
    [32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32],
]);

const KEDMANEE_SHIFTED: KeymapGrid = grid([
    [251, 43, 241, 242, 243, 244, 217, 223, 245, 246, 247, 248, 249, 8, 0],
    [9, 240, 34, 174, 177, 184, 237, 234, 179, 207, 173, 176, 44, 10, 10],
    [3, 250, 196, 166, 175, 226, 172, 231, 235, 201, 200, 171, 46, 10, 10],
    [1, 165, 40, 41, 169, 206, 218, 236, 63, 178, 204, 198, 2, 2, 0],
    [32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32, 32],
]);

/// Two parallel keymap grids, one per shift state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapTable {
    unshifted: KeymapGrid,
    shifted: KeymapGrid,
}

impl KeymapTable {
    /// The built-in Kedmanee layout.
    #[must_use]
    pub const fn kedmanee() -> Self {
        Self {
            unshifted: KEDMANEE_UNSHIFTED,
            shifted: KEDMANEE_SHIFTED,
        }
    }

    /// Builds a table from custom grids.
    ///
    /// Fails when the grids break the control-key-position invariant or
    /// carry unusable codes. Warnings are discarded; use the keymap parser
    /// to see them.
    pub fn from_grids(unshifted: KeymapGrid, shifted: KeymapGrid) -> Result<Self, ParseError> {
        let issues = validate_grids(&unshifted, &shifted);
        let (errors, _warnings): (Vec<_>, Vec<_>) =
            issues.into_iter().partition(|issue| issue.is_error());

        if !errors.is_empty() {
            return Err(ParseError::validation_error(errors));
        }

        Ok(Self { unshifted, shifted })
    }

    /// Looks up the code at a logical position.
    ///
    /// Positions outside the 15 x 5 grid read as [`KeyCode::BLANK`].
    #[must_use]
    pub fn code(&self, shifted: bool, row: u8, column: u8) -> KeyCode {
        self.grid(shifted)
            .get(row as usize)
            .and_then(|cells| cells.get(column as usize))
            .copied()
            .unwrap_or(KeyCode::BLANK)
    }

    /// Returns the grid for one shift state.
    #[must_use]
    pub fn grid(&self, shifted: bool) -> &KeymapGrid {
        if shifted { &self.shifted } else { &self.unshifted }
    }

    /// Iterates over every code in both grids.
    pub fn all_codes(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.unshifted
            .iter()
            .chain(self.shifted.iter())
            .flat_map(|row| row.iter().copied())
    }
}

impl Default for KeymapTable {
    fn default() -> Self {
        Self::kedmanee()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::LogicalKey;

    /// Test 1: Known cells of the built-in table
    #[test]
    fn test_kedmanee_known_cells() {
        let table = KeymapTable::kedmanee();

        assert_eq!(table.code(false, 0, 0), KeyCode(239), "Fongman in the top-left corner");
        assert_eq!(table.code(true, 0, 0), KeyCode(251), "Khomut when shifted");
        assert_eq!(table.code(false, 2, 4), KeyCode(161), "Ko kai on the home row");
        assert_eq!(table.code(true, 3, 8), KeyCode(63), "Question mark when shifted");
    }

    /// Test 2: Control keys sit at identical positions in both grids
    #[test]
    fn test_control_positions_identical() {
        let table = KeymapTable::kedmanee();

        for row in 0..ROWS as u8 {
            for col in 0..COLUMNS as u8 {
                let plain = table.code(false, row, col);
                let shifted = table.code(true, row, col);
                if !plain.is_printable() || !shifted.is_printable() {
                    assert_eq!(plain, shifted, "Control cell r{}c{} differs", row, col);
                }
            }
        }
    }

    /// Test 3: Action sentinels carry their action codes
    #[test]
    fn test_action_sentinels() {
        let table = KeymapTable::kedmanee();

        for shifted in [false, true] {
            let at = |key: LogicalKey| table.code(shifted, key.row, key.column);
            assert_eq!(at(LogicalKey::BACKSPACE), KeyCode::BACKSPACE);
            assert_eq!(at(LogicalKey::TAB), KeyCode::TAB);
            assert_eq!(at(LogicalKey::ENTER), KeyCode::ENTER);
            assert_eq!(at(LogicalKey::ENTER_LOWER), KeyCode::ENTER);
            assert_eq!(at(LogicalKey::FONT_SELECTOR), KeyCode::FONT_SELECTOR);
            assert_eq!(at(LogicalKey::LEFT_SHIFT), KeyCode::LEFT_SHIFT);
            assert_eq!(at(LogicalKey::RIGHT_SHIFT), KeyCode::RIGHT_SHIFT);
            assert_eq!(at(LogicalKey::SPACE), KeyCode::SPACE);
        }
    }

    /// Test 4: Out-of-grid lookups read as blank
    #[test]
    fn test_out_of_range_is_blank() {
        let table = KeymapTable::kedmanee();

        assert_eq!(table.code(false, 5, 0), KeyCode::BLANK);
        assert_eq!(table.code(true, 0, 15), KeyCode::BLANK);
        assert_eq!(table.code(false, 255, 255), KeyCode::BLANK);
    }

    /// Test 5: Custom grids that move a control key are rejected
    #[test]
    fn test_from_grids_rejects_control_mismatch() {
        let unshifted = KEDMANEE_UNSHIFTED;
        let mut shifted = KEDMANEE_SHIFTED;
        shifted[1][0] = KeyCode(161);

        let result = KeymapTable::from_grids(unshifted, shifted);
        assert!(result.is_err(), "Tab replaced in one grid must be rejected");

        let table = KeymapTable::from_grids(KEDMANEE_UNSHIFTED, KEDMANEE_SHIFTED)
            .expect("built-in grids are valid");
        assert_eq!(table, KeymapTable::kedmanee());
    }
}
