//! OPD summary builder.
//!
//! Pipeline: filter active rows → vitals → diagnosis → tooth notes →
//! radiographs → tests → prescription table → assemble.
//!
//! The builder is pure and synchronous. It assumes already-validated input
//! (see [`crate::validate`]) and never fails for data-shape reasons; the
//! single error kind exists for the caller's generic-failure path.

mod normalize;
mod table;

pub use normalize::*;
pub use table::*;

use thiserror::Error;

use crate::models::{DiagnosisBlock, OpdFormInput, OpdSummary};

/// Builder failure. No partial summary is ever produced.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("summary generation failed")]
    Failed,
}

/// Labels for the diagnosis block.
const FINAL_DIAGNOSIS: &str = "Final Diagnosis";
const PROVISIONAL_DIAGNOSIS: &str = "Provisional Diagnosis";

/// Map a free-text field to its normalized summary value, treating
/// whitespace-only input as absent.
fn capitalized_or_none(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(capitalize_first(s))
    }
}

/// Pass a field through untouched, treating whitespace-only input as absent.
fn raw_or_none(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build the normalized printable summary from one validated form snapshot.
///
/// Deterministic and side-effect free; the input is never mutated.
pub fn build_summary(input: &OpdFormInput) -> Result<OpdSummary, BuildError> {
    // Step 1: filter dynamic lists down to active rows
    let medicines: Vec<_> = input.medicines.iter().filter(|m| m.is_active()).collect();
    let radiographs = &input.radiographs;
    let tests: Vec<_> = input.tests.iter().filter(|t| t.is_active()).collect();

    // Step 2: vitals block, present iff anything was entered
    let vitals = input.vitals.is_present().then(|| input.vitals.clone());

    // Step 3: diagnosis block
    let diagnosis = DiagnosisBlock {
        label: if input.is_final_diagnosis {
            FINAL_DIAGNOSIS.to_string()
        } else {
            PROVISIONAL_DIAGNOSIS.to_string()
        },
        text: capitalize_first(&input.provisional_diagnosis),
    };

    // Step 4: consolidated tooth notes in canonical chart order
    let tooth_notes = {
        let rendered: Vec<String> = input
            .tooth_chart
            .annotated()
            .into_iter()
            .map(|(id, note)| format!("#{}: {}", id, note))
            .collect();
        if rendered.is_empty() {
            None
        } else {
            Some(rendered.join(", "))
        }
    };

    // Step 5: consolidated radiographs
    let radiographs = {
        let rendered: Vec<String> = radiographs
            .iter()
            .map(|r| match r.tooth_number.as_deref().map(str::trim) {
                Some(tooth) if !tooth.is_empty() => {
                    format!("{} (w.r.t #{})", r.kind, tooth)
                }
                _ => r.kind.to_string(),
            })
            .collect();
        if rendered.is_empty() {
            None
        } else {
            Some(rendered.join(", "))
        }
    };

    // Step 6: consolidated tests
    let tests = if tests.is_empty() {
        None
    } else {
        Some(
            tests
                .iter()
                .map(|t| t.value.trim().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        )
    };

    // Step 7: prescription table
    let prescription_table = if medicines.is_empty() {
        None
    } else {
        Some(render_table(&medicines))
    };

    // Step 8: assemble
    Ok(OpdSummary {
        patient_id: input.patient_id.as_deref().and_then(raw_or_none),
        patient_name: title_case(&input.patient_name),
        patient_age: input.patient_age.trim().to_string(),
        contact: raw_or_none(&input.contact),
        address: raw_or_none(&input.address).map(|a| title_case(&a)),
        govt_id: raw_or_none(&input.govt_id),
        vitals,
        chief_complaint: capitalized_or_none(&input.chief_complaint),
        examination_findings: capitalized_or_none(&input.examination_findings),
        medical_history: capitalized_or_none(&input.medical_history),
        diagnosis,
        tooth_notes,
        radiographs,
        tests,
        prescription_table,
        additional_notes: capitalized_or_none(&input.additional_notes),
        follow_up_date: raw_or_none(&input.follow_up_date),
    })
}
