//! Vitals models.

use serde::{Deserialize, Serialize};

/// Patient vitals as entered on the form.
///
/// Values are kept verbatim; measurement units are rendered by the consumer,
/// not stored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalsRecord {
    pub height: Option<String>,
    pub weight: Option<String>,
    pub bp: Option<String>,
    pub pulse: Option<String>,
    pub spo2: Option<String>,
    pub temp: Option<String>,
}

impl VitalsRecord {
    /// Whether at least one vitals field was entered.
    pub fn is_present(&self) -> bool {
        [
            &self.height,
            &self.weight,
            &self.bp,
            &self.pulse,
            &self.spo2,
            &self.temp,
        ]
        .iter()
        .any(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}
