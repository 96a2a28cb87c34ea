//! Normalized OPD summary model.

use serde::{Deserialize, Serialize};

use super::vitals::VitalsRecord;

/// Diagnosis block with its display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisBlock {
    /// Exactly "Final Diagnosis" or "Provisional Diagnosis"
    pub label: String,
    pub text: String,
}

/// The normalized, printable OPD summary.
///
/// Created once per submit and never mutated; the next submit replaces it
/// wholesale. Optional fields are `None` exactly when the user entered
/// nothing, so presence in the output mirrors presence on the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpdSummary {
    /// Unset when no id was supplied or generated
    pub patient_id: Option<String>,
    /// Title-cased patient name
    pub patient_name: String,
    pub patient_age: String,
    pub contact: Option<String>,
    /// Title-cased address
    pub address: Option<String>,
    pub govt_id: Option<String>,

    pub vitals: Option<VitalsRecord>,
    pub chief_complaint: Option<String>,
    pub examination_findings: Option<String>,
    pub medical_history: Option<String>,
    pub diagnosis: DiagnosisBlock,

    /// Consolidated "#ID: note" pairs in canonical chart order
    pub tooth_notes: Option<String>,
    /// Consolidated advised radiographs
    pub radiographs: Option<String>,
    /// Consolidated advised tests
    pub tests: Option<String>,
    /// Pipe-delimited prescription table; parse with
    /// [`crate::builder::parse_table`]
    pub prescription_table: Option<String>,

    pub additional_notes: Option<String>,
    pub follow_up_date: Option<String>,
}
