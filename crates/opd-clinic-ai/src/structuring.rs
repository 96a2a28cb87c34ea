//! Prescription-table parsing from service output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structuring errors.
#[derive(Error, Debug)]
pub enum StructuringError {
    #[error("No prescription table found in response")]
    NoTable,

    #[error("Invalid table format: {0}")]
    InvalidFormat(String),

    #[error("Structuring service failed: {0}")]
    Service(String),
}

pub type StructuringResult<T> = Result<T, StructuringError>;

/// Expected header cells, in order.
pub const EXPECTED_COLUMNS: [&str; 4] = ["Medicine", "Dosage", "Timing", "Duration (Days)"];

/// Request to the structuring service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuringRequest {
    pub speech_input: String,
}

/// Response from the structuring service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuringResponse {
    pub prescription_table: String,
}

/// One parsed row of the prescription table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionRow {
    pub medicine: String,
    pub dosage: String,
    pub timing: String,
    pub duration_days: String,
}

/// Parse the service's pipe-delimited table into structured rows.
///
/// Tolerant of prose around the table and of a markdown separator row; the
/// header must match [`EXPECTED_COLUMNS`] exactly and every data row must
/// carry four cells.
pub fn parse_prescription_table(text: &str) -> StructuringResult<Vec<PrescriptionRow>> {
    let mut lines = text
        .lines()
        .filter(|line| line.contains('|'))
        .map(split_cells)
        .filter(|cells| !is_separator(cells));

    let header = lines.next().ok_or(StructuringError::NoTable)?;
    if header != EXPECTED_COLUMNS {
        return Err(StructuringError::InvalidFormat(format!(
            "unexpected header: {}",
            header.join(" | ")
        )));
    }

    let mut rows = Vec::new();
    for cells in lines {
        if cells.len() != EXPECTED_COLUMNS.len() {
            return Err(StructuringError::InvalidFormat(format!(
                "expected {} cells, got {}: {}",
                EXPECTED_COLUMNS.len(),
                cells.len(),
                cells.join(" | ")
            )));
        }
        let mut cells = cells.into_iter();
        rows.push(PrescriptionRow {
            medicine: cells.next().unwrap_or_default(),
            dosage: cells.next().unwrap_or_default(),
            timing: cells.next().unwrap_or_default(),
            duration_days: cells.next().unwrap_or_default(),
        });
    }

    Ok(rows)
}

/// Split one table line into trimmed cells, dropping empty edge cells from
/// leading/trailing pipes.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells: Vec<String> = line.split('|').map(|c| c.trim().to_string()).collect();
    while cells.first().is_some_and(|c| c.is_empty()) {
        cells.remove(0);
    }
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

/// A markdown header-separator row: every cell is dashes/colons.
fn is_separator(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'))
}

/// Mock structurer for testing without the external service.
pub struct MockStructurer;

impl MockStructurer {
    /// Build a prescription table from simple dictation patterns.
    ///
    /// Recognizes "<name> <amount><unit> ... for <n> days" fragments split
    /// on "and"/commas. Good enough to exercise the parsing contract.
    pub fn structure(speech_input: &str) -> StructuringResponse {
        let mut lines = vec![
            EXPECTED_COLUMNS.join(" | "),
            vec!["---"; EXPECTED_COLUMNS.len()].join(" | "),
        ];

        for fragment in speech_input
            .split(|c| c == ',' || c == ';')
            .flat_map(|part| part.split(" and "))
        {
            if let Some(row) = parse_fragment(fragment) {
                lines.push(format!(
                    "{} | {} | {} | {}",
                    row.medicine, row.dosage, row.timing, row.duration_days
                ));
            }
        }

        StructuringResponse {
            prescription_table: lines.join("\n"),
        }
    }
}

fn parse_fragment(fragment: &str) -> Option<PrescriptionRow> {
    let words: Vec<&str> = fragment.split_whitespace().collect();

    // Dosage word like "500mg" anchors the fragment
    let dose_index = words.iter().position(|w| {
        ["mg", "mcg", "g", "ml"]
            .iter()
            .any(|unit| w.to_lowercase().ends_with(unit) && w.len() > unit.len())
            && w.chars().next().is_some_and(|c| c.is_ascii_digit())
    })?;
    if dose_index == 0 {
        return None;
    }

    let medicine = words[dose_index - 1].to_string();
    let dose_word = words[dose_index].to_lowercase();
    let split_at = dose_word.find(|c: char| c.is_ascii_alphabetic())?;
    let dosage = format!("{} {}", &dose_word[..split_at], &dose_word[split_at..]);

    // "for <n> days" gives the duration; timing is whatever sits between.
    // Unknown cells become "-" so every row keeps its four cells.
    let mut timing = String::new();
    let mut duration_days = String::new();
    let rest = &words[dose_index + 1..];
    if let Some(for_index) = rest.iter().position(|w| w.eq_ignore_ascii_case("for")) {
        timing = rest[..for_index].join(" ");
        if let Some(n) = rest.get(for_index + 1) {
            duration_days = n.to_string();
        }
    } else {
        timing = rest.join(" ");
    }
    if timing.is_empty() {
        timing = "-".into();
    }
    if duration_days.is_empty() {
        duration_days = "-".into();
    }

    Some(PrescriptionRow {
        medicine,
        dosage,
        timing,
        duration_days,
    })
}
