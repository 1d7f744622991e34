// SPDX-License-Identifier: GPL-3.0-only

//! Validation rules for keymap grids.
//!
//! Fatal problems (moved control keys, unassigned control codes) are reported
//! as errors; codes that convert outside the Thai block are only warnings.

use crate::app_settings::{COLUMNS, ROWS};
use crate::keymap::convert::{THAI_BLOCK_END, THAI_BLOCK_START, to_unicode};
use crate::keymap::types::{KeyClass, KeyCode, KeymapGrid, LogicalKey, Severity, ValidationIssue};

/// Action keys and the code each must carry in both grids.
const ACTION_CELLS: [(LogicalKey, KeyCode, &str); 8] = [
    (LogicalKey::BACKSPACE, KeyCode::BACKSPACE, "backspace"),
    (LogicalKey::TAB, KeyCode::TAB, "tab"),
    (LogicalKey::ENTER, KeyCode::ENTER, "enter"),
    (LogicalKey::ENTER_LOWER, KeyCode::ENTER, "enter"),
    (LogicalKey::FONT_SELECTOR, KeyCode::FONT_SELECTOR, "font selector"),
    (LogicalKey::LEFT_SHIFT, KeyCode::LEFT_SHIFT, "left shift"),
    (LogicalKey::RIGHT_SHIFT, KeyCode::RIGHT_SHIFT, "right shift"),
    (LogicalKey::SPACE, KeyCode::SPACE, "space"),
];

/// Validates a pair of grids and returns every issue found.
pub fn validate_grids(unshifted: &KeymapGrid, shifted: &KeymapGrid) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    validate_control_positions(unshifted, shifted, &mut issues);
    validate_action_cells("unshifted", unshifted, &mut issues);
    validate_action_cells("shifted", shifted, &mut issues);
    validate_codes("unshifted", unshifted, &mut issues);
    validate_codes("shifted", shifted, &mut issues);

    issues
}

/// Only printable cells may differ between the two grids.
fn validate_control_positions(
    unshifted: &KeymapGrid,
    shifted: &KeymapGrid,
    issues: &mut Vec<ValidationIssue>,
) {
    for row in 0..ROWS {
        for col in 0..COLUMNS {
            let plain = unshifted[row][col];
            let shift = shifted[row][col];

            if (!plain.is_printable() || !shift.is_printable()) && plain != shift {
                issues.push(
                    ValidationIssue::new(
                        Severity::Error,
                        format!(
                            "Control code differs between grids: unshifted {} vs shifted {}",
                            plain, shift
                        ),
                        format!("[{}][{}]", row, col),
                    )
                    .with_suggestion("Control keys must occupy the same cells in both grids"),
                );
            }
        }
    }
}

fn validate_action_cells(name: &str, grid: &KeymapGrid, issues: &mut Vec<ValidationIssue>) {
    for (key, expected, label) in ACTION_CELLS {
        let found = grid[key.row as usize][key.column as usize];
        if found != expected {
            issues.push(ValidationIssue::new(
                Severity::Error,
                format!("The {} key must carry code {}, found {}", label, expected, found),
                format!("{}[{}][{}]", name, key.row, key.column),
            ));
        }
    }
}

fn validate_codes(name: &str, grid: &KeymapGrid, issues: &mut Vec<ValidationIssue>) {
    for (row, cells) in grid.iter().enumerate() {
        for (col, code) in cells.iter().enumerate() {
            let path = format!("{}[{}][{}]", name, row, col);

            match code.class() {
                KeyClass::Unassigned => issues.push(
                    ValidationIssue::new(
                        Severity::Error,
                        format!("Code {} has no meaning on this keyboard", code),
                        path,
                    )
                    .with_suggestion("Use 0 for unused cells or a printable code above 32"),
                ),
                KeyClass::Thai => {
                    let outside = to_unicode(*code)
                        .map(|c| !(THAI_BLOCK_START..=THAI_BLOCK_END).contains(&(c as u32)))
                        .unwrap_or(true);
                    if outside {
                        issues.push(ValidationIssue::new(
                            Severity::Warning,
                            format!("Code {} converts outside the Thai block", code),
                            path,
                        ));
                    }
                }
                _ => {}
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::table::KeymapTable;

    fn kedmanee_grids() -> (KeymapGrid, KeymapGrid) {
        let table = KeymapTable::kedmanee();
        (*table.grid(false), *table.grid(true))
    }

    /// Test 1: The built-in table validates cleanly
    #[test]
    fn test_builtin_table_is_clean() {
        let (unshifted, shifted) = kedmanee_grids();
        let issues = validate_grids(&unshifted, &shifted);
        assert!(issues.is_empty(), "Unexpected issues: {:?}", issues);
    }

    /// Test 2: A shift key replaced in one grid yields errors
    #[test]
    fn test_moved_shift_is_error() {
        let (unshifted, mut shifted) = kedmanee_grids();
        shifted[3][12] = KeyCode(190);

        let issues = validate_grids(&unshifted, &shifted);
        assert!(
            issues
                .iter()
                .any(|i| i.is_error() && i.field_path == "[3][12]"),
            "Control mismatch should be reported: {:?}",
            issues
        );
        assert!(
            issues
                .iter()
                .any(|i| i.is_error() && i.field_path == "shifted[3][12]"),
            "Missing right shift should be reported: {:?}",
            issues
        );
    }

    /// Test 3: Unassigned control codes are errors
    #[test]
    fn test_unassigned_code_is_error() {
        let (mut unshifted, mut shifted) = kedmanee_grids();
        unshifted[0][14] = KeyCode(5);
        shifted[0][14] = KeyCode(5);

        let issues = validate_grids(&unshifted, &shifted);
        let errors: Vec<_> = issues.iter().filter(|i| i.is_error()).collect();
        assert_eq!(errors.len(), 2, "One error per grid: {:?}", errors);
    }

    /// Test 4: Codes past the Thai block only warn
    #[test]
    fn test_out_of_block_code_warns() {
        let (mut unshifted, shifted) = kedmanee_grids();
        unshifted[0][1] = KeyCode(255);

        let issues = validate_grids(&unshifted, &shifted);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].field_path, "unshifted[0][1]");
    }
}
