//! Property tests for the normalization helpers and table contract.

use proptest::prelude::*;

use opd_clinic_core::builder::{capitalize_first, parse_table, render_table, title_case};
use opd_clinic_core::models::{DosageUnit, DurationUnit, FrequencyUnit, MedicineEntry};

proptest! {
    #[test]
    fn title_case_idempotent(s in "[a-zA-Z0-9 ]{0,60}") {
        let once = title_case(&s);
        prop_assert_eq!(title_case(&once), once);
    }

    #[test]
    fn capitalize_first_idempotent(s in "[a-zA-Z0-9 .,]{0,60}") {
        let once = capitalize_first(&s);
        prop_assert_eq!(capitalize_first(&once), once);
    }

    #[test]
    fn title_case_has_no_edge_whitespace(s in "[a-zA-Z ]{0,60}") {
        let out = title_case(&s);
        prop_assert_eq!(out.trim(), out.as_str());
    }

    // Cell text without pipes or newlines survives a render/parse round trip
    #[test]
    fn table_round_trip(
        name in "[a-zA-Z]{1,12}",
        dose in "[0-9]{1,4}",
        freq in "[0-9]{1,2}",
        duration in "[0-9]{1,3}",
        instructions in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,29}",
    ) {
        let entry = MedicineEntry {
            name: name.clone(),
            dosage_value: dose.clone(),
            dosage_unit: DosageUnit::Mg,
            frequency_value: freq.clone(),
            frequency_unit: FrequencyUnit::Daily,
            duration_value: duration.clone(),
            duration_unit: DurationUnit::Days,
            instructions: instructions.clone(),
        };

        let table = render_table(&[&entry]);
        let rows = parse_table(&table);

        prop_assert_eq!(rows.len(), 2);
        prop_assert_eq!(rows[1][0].clone(), name.to_uppercase());
        prop_assert_eq!(rows[1][1].clone(), format!("{} mg", dose));
        prop_assert_eq!(rows[1][4].clone(), instructions.trim().to_string());
    }
}
