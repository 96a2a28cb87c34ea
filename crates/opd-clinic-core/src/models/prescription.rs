//! Prescription line models: medicines, radiographs, tests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dosage unit for a prescribed medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DosageUnit {
    Mg,
    Mcg,
    G,
    Ml,
    Tsp,
    Tbsp,
    Iu,
    Drops,
}

impl fmt::Display for DosageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DosageUnit::Mg => "mg",
            DosageUnit::Mcg => "mcg",
            DosageUnit::G => "g",
            DosageUnit::Ml => "ml",
            DosageUnit::Tsp => "tsp",
            DosageUnit::Tbsp => "tbsp",
            DosageUnit::Iu => "IU",
            DosageUnit::Drops => "drops",
        };
        f.write_str(label)
    }
}

/// Frequency unit for a prescribed medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequencyUnit {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for FrequencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FrequencyUnit::Daily => "daily",
            FrequencyUnit::Weekly => "weekly",
            FrequencyUnit::Monthly => "monthly",
        };
        f.write_str(label)
    }
}

/// Duration unit for a prescribed medicine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DurationUnit::Days => "Days",
            DurationUnit::Weeks => "Weeks",
            DurationUnit::Months => "Months",
            DurationUnit::Years => "Year(s)",
        };
        f.write_str(label)
    }
}

/// A single medicine row in the prescription list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicineEntry {
    /// Drug name; an empty name makes the whole row inactive
    pub name: String,
    /// Dosage amount as entered (e.g. "500")
    pub dosage_value: String,
    pub dosage_unit: DosageUnit,
    /// Times per frequency unit (e.g. "2")
    pub frequency_value: String,
    pub frequency_unit: FrequencyUnit,
    /// Duration amount as entered (e.g. "5")
    pub duration_value: String,
    pub duration_unit: DurationUnit,
    /// Free-text instructions, rendered verbatim
    pub instructions: String,
}

impl MedicineEntry {
    /// Whether this row contributes to the prescription table.
    ///
    /// A row with an empty name is dropped entirely, even when its other
    /// cells are filled in.
    pub fn is_active(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl Default for MedicineEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            dosage_value: String::new(),
            dosage_unit: DosageUnit::Mg,
            frequency_value: String::new(),
            frequency_unit: FrequencyUnit::Daily,
            duration_value: String::new(),
            duration_unit: DurationUnit::Days,
            instructions: String::new(),
        }
    }
}

/// Advised radiograph kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadiographKind {
    Opg,
    Iopa,
    Cbct,
    Bitewing,
}

impl fmt::Display for RadiographKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RadiographKind::Opg => "OPG",
            RadiographKind::Iopa => "IOPA",
            RadiographKind::Cbct => "CBCT",
            RadiographKind::Bitewing => "Bitewing",
        };
        f.write_str(label)
    }
}

/// An advised radiograph, optionally targeted at a specific tooth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiographEntry {
    pub kind: RadiographKind,
    /// Tooth the radiograph concerns, when targeted
    pub tooth_number: Option<String>,
}

/// An advised lab test, entered as free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestEntry {
    pub value: String,
}

impl TestEntry {
    /// Whether this row contributes to the advised-tests line.
    pub fn is_active(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medicine_active_on_name_only() {
        let mut entry = MedicineEntry::default();
        assert!(!entry.is_active());

        entry.dosage_value = "500".into();
        entry.frequency_value = "2".into();
        entry.duration_value = "5".into();
        assert!(!entry.is_active()); // still no name

        entry.name = "  ".into();
        assert!(!entry.is_active());

        entry.name = "paracetamol".into();
        assert!(entry.is_active());
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(DosageUnit::Iu.to_string(), "IU");
        assert_eq!(DosageUnit::Mg.to_string(), "mg");
        assert_eq!(FrequencyUnit::Daily.to_string(), "daily");
        assert_eq!(DurationUnit::Years.to_string(), "Year(s)");
        assert_eq!(RadiographKind::Opg.to_string(), "OPG");
    }

    #[test]
    fn test_test_entry_active() {
        assert!(!TestEntry { value: " ".into() }.is_active());
        assert!(TestEntry { value: "CBC".into() }.is_active());
    }
}
