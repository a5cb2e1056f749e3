// Heuristic lookup of labeled values inside an unstructured sheet.
//
// Scenario sheets place a text label somewhere and the number nearby,
// usually one column to the right but not reliably so. The resolver never
// fails: anything it cannot find or parse degrades to the caller's
// default, and the outcome is reported through `Resolution` so the
// session can tell scraped values from fallbacks.

use crate::data::grid::{Cell, ScenarioGrid};
use shared::models::Resolution;
use shared::utils::brazilian_format;

/// Scan order is row-major: top row first, left to right. The first cell
/// whose text contains `label` (case-insensitive) wins.
fn find_label(grid: &ScenarioGrid, label: &str) -> Option<(usize, usize)> {
    let needle = label.to_lowercase();
    for (r, row) in grid.rows().iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if let Cell::Text(text) = cell {
                if text.to_lowercase().contains(&needle) {
                    return Some((r, c));
                }
            }
        }
    }
    None
}

fn numeric_value(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Number(v) => Some(*v),
        Cell::Text(s) => brazilian_format::parse_currency(s).ok(),
        Cell::Empty => None,
    }
}

/// Locates `label` and returns the value `offset` columns to its right.
/// If that cell is missing or not numeric, the rest of the labeled row is
/// scanned for the first parseable number; failing that, `default`.
pub fn resolve(grid: &ScenarioGrid, label: &str, offset: usize, default: f64) -> Resolution {
    let Some((row, col)) = find_label(grid, label) else {
        return Resolution::Defaulted(default);
    };

    if let Some(value) = grid.get(row, col + offset).and_then(numeric_value) {
        return Resolution::Found(value);
    }

    if let Some(cells) = grid.row(row) {
        for cell in cells.iter().skip(col + 1) {
            if let Some(value) = numeric_value(cell) {
                return Resolution::Found(value);
            }
        }
    }

    Resolution::Defaulted(default)
}

/// Locates `label` and sums every numeric-parseable cell in its column
/// below the label row. Used for aggregate fields such as the total of
/// monthly financing installments. A column with nothing parseable is
/// treated the same as a missing label.
pub fn resolve_column_sum(grid: &ScenarioGrid, label: &str, default: f64) -> Resolution {
    let Some((row, col)) = find_label(grid, label) else {
        return Resolution::Defaulted(default);
    };

    let mut sum = 0.0;
    let mut found_any = false;
    for r in (row + 1)..grid.row_count() {
        if let Some(value) = grid.get(r, col).and_then(numeric_value) {
            sum += value;
            found_any = true;
        }
    }

    if found_any {
        Resolution::Found(sum)
    } else {
        Resolution::Defaulted(default)
    }
}
