//! Prescription table rendering and parsing.
//!
//! The table is a pipe-delimited markdown-like block: header row, `---`
//! separator row, one row per active medicine. Its row/column structure is a
//! contract with the print renderer, which recovers cells by splitting on
//! newlines and pipes.

use crate::models::MedicineEntry;

/// Column headers, in order.
pub const TABLE_COLUMNS: [&str; 5] =
    ["Medicine", "Dosage", "Frequency", "Duration", "Instructions"];

/// Render the prescription table for the given active medicine rows.
///
/// Row order follows the input; the caller filters inactive rows first.
/// Medicine names are uppercased, dosage/frequency/duration cells are built
/// from value + unit and trimmed, instructions are rendered verbatim.
pub fn render_table(medicines: &[&MedicineEntry]) -> String {
    let mut lines = Vec::with_capacity(medicines.len() + 2);
    lines.push(TABLE_COLUMNS.join(" | "));
    lines.push(vec!["---"; TABLE_COLUMNS.len()].join(" | "));

    for entry in medicines {
        let dosage = format!("{} {}", entry.dosage_value.trim(), entry.dosage_unit);
        let frequency = format!(
            "{} time(s) {}",
            entry.frequency_value.trim(),
            entry.frequency_unit
        );
        let duration = format!("{} {}", entry.duration_value.trim(), entry.duration_unit);

        let cells = [
            entry.name.trim().to_uppercase(),
            dosage.trim().to_string(),
            frequency.trim().to_string(),
            duration.trim().to_string(),
            entry.instructions.clone(),
        ];
        lines.push(cells.join(" | "));
    }

    lines.join("\n")
}

/// Parse a pipe-delimited table back into rows of trimmed cells.
///
/// Splits rows on newline and cells on the pipe character, discards the
/// header-separator (second) row and empty leading/trailing cells from each
/// split. Row 0 of the result is the header.
pub fn parse_table(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .enumerate()
        .filter(|(index, line)| *index != 1 && !line.trim().is_empty())
        .map(|(_, line)| {
            let mut cells: Vec<String> =
                line.split('|').map(|cell| cell.trim().to_string()).collect();
            while cells.first().is_some_and(|c| c.is_empty()) {
                cells.remove(0);
            }
            while cells.last().is_some_and(|c| c.is_empty()) {
                cells.pop();
            }
            cells
        })
        .collect()
}
