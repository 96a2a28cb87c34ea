//! OPD form input model.

use serde::{Deserialize, Serialize};

use super::prescription::{MedicineEntry, RadiographEntry, TestEntry};
use super::vitals::VitalsRecord;
use crate::chart::ToothChart;

/// Everything the dental OPD form collects for one visit.
///
/// Constructed fresh per form session and passed to the summary builder as
/// an immutable snapshot. List fields keep insertion order; the prescription
/// table's row order is observable output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpdFormInput {
    /// Externally supplied for existing patients, otherwise generated at
    /// form-open time via [`generate_patient_id`]
    pub patient_id: Option<String>,
    pub patient_name: String,
    pub patient_age: String,
    pub contact: String,
    pub address: String,
    pub govt_id: String,

    pub chief_complaint: String,
    pub examination_findings: String,
    pub medical_history: String,
    pub provisional_diagnosis: String,
    pub additional_notes: String,
    pub follow_up_date: String,
    /// Whether the diagnosis text is final rather than provisional
    pub is_final_diagnosis: bool,

    pub vitals: VitalsRecord,
    pub tooth_chart: ToothChart,
    pub medicines: Vec<MedicineEntry>,
    pub radiographs: Vec<RadiographEntry>,
    pub tests: Vec<TestEntry>,
}

impl OpdFormInput {
    /// Append a blank medicine row.
    pub fn add_medicine(&mut self) {
        self.medicines.push(MedicineEntry::default());
    }

    /// Remove the medicine row at `index`, ignoring out-of-range indices.
    pub fn remove_medicine(&mut self, index: usize) {
        if index < self.medicines.len() {
            self.medicines.remove(index);
        }
    }

    /// Append a blank test row.
    pub fn add_test(&mut self) {
        self.tests.push(TestEntry::default());
    }

    /// Remove the test row at `index`, ignoring out-of-range indices.
    pub fn remove_test(&mut self, index: usize) {
        if index < self.tests.len() {
            self.tests.remove(index);
        }
    }

    /// Remove the radiograph row at `index`, ignoring out-of-range indices.
    pub fn remove_radiograph(&mut self, index: usize) {
        if index < self.radiographs.len() {
            self.radiographs.remove(index);
        }
    }
}

/// Generate a session-unique patient id token for a new patient.
pub fn generate_patient_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_unique() {
        let a = generate_patient_id();
        let b = generate_patient_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36); // UUID format
    }

    #[test]
    fn test_list_row_operations_preserve_order() {
        let mut form = OpdFormInput::default();
        form.add_medicine();
        form.add_medicine();
        form.add_medicine();
        form.medicines[0].name = "first".into();
        form.medicines[1].name = "second".into();
        form.medicines[2].name = "third".into();

        form.remove_medicine(1);
        assert_eq!(form.medicines.len(), 2);
        assert_eq!(form.medicines[0].name, "first");
        assert_eq!(form.medicines[1].name, "third");

        // Out-of-range removal is a no-op
        form.remove_medicine(10);
        assert_eq!(form.medicines.len(), 2);
    }
}
