//! Pre-builder form validation.
//!
//! Two-stage contract: this pure function reports structured field-level
//! errors, and the builder only ever receives input that passed it. The host
//! form renders each error inline next to the offending field and blocks
//! submission while any remain.

use serde::{Deserialize, Serialize};

use crate::models::OpdFormInput;

/// A single field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field identifier, e.g. "patient_name" or "medicines[2].dosage_value"
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a form snapshot, returning all field errors found.
///
/// An empty result means the input may be handed to
/// [`crate::builder::build_summary`]. Medicine rows with an empty name are
/// skipped wholesale; their other cells are never checked.
pub fn validate(input: &OpdFormInput) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if input.patient_name.trim().is_empty() {
        errors.push(FieldError::new("patient_name", "Patient name is required"));
    }
    if input.patient_age.trim().is_empty() {
        errors.push(FieldError::new("patient_age", "Patient age is required"));
    }
    if input.provisional_diagnosis.trim().is_empty() {
        errors.push(FieldError::new(
            "provisional_diagnosis",
            "Diagnosis is required",
        ));
    }

    for (index, medicine) in input.medicines.iter().enumerate() {
        if !medicine.is_active() {
            continue;
        }
        if medicine.dosage_value.trim().is_empty() {
            errors.push(FieldError::new(
                format!("medicines[{}].dosage_value", index),
                "Dosage is required for a named medicine",
            ));
        }
        if medicine.frequency_value.trim().is_empty() {
            errors.push(FieldError::new(
                format!("medicines[{}].frequency_value", index),
                "Frequency is required for a named medicine",
            ));
        }
        if medicine.duration_value.trim().is_empty() {
            errors.push(FieldError::new(
                format!("medicines[{}].duration_value", index),
                "Duration is required for a named medicine",
            ));
        }
    }

    errors
}
