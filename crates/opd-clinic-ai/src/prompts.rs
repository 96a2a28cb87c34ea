//! Prompts for structuring dictated prescriptions.

/// System prompt for the structuring service.
pub const SYSTEM_PROMPT: &str = r#"You are a medical scribe that structures dictated prescriptions into a table.

Given a doctor's dictated free text, extract each prescribed medicine with:
- Medicine: the drug name
- Dosage: amount with unit (e.g. 500 mg)
- Timing: how often to take it (e.g. twice daily, after meals)
- Duration (Days): number of days to continue

Output ONLY a pipe-delimited table with the exact header:
Medicine | Dosage | Timing | Duration (Days)

One row per medicine. Do not add commentary before or after the table."#;

/// Build the user prompt for one dictation.
pub fn make_structuring_prompt(speech_input: &str) -> String {
    format!(
        r#"Structure the prescriptions in this dictation into the table format:

"{}"

Remember: output only the table, with header Medicine | Dosage | Timing | Duration (Days)."#,
        speech_input
    )
}
