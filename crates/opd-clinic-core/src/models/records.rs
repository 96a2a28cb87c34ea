//! Registry records: patients, doctors, appointments.

use serde::{Deserialize, Serialize};

/// A patient known to the clinic registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub id: String,
    pub name: String,
    pub age: String,
    pub contact: String,
    pub address: String,
    /// Creation timestamp, RFC 3339
    pub created_at: String,
}

impl PatientRecord {
    /// Create a new patient record with a generated id.
    pub fn new(name: String, age: String, contact: String, address: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            age,
            contact,
            address,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// A doctor or staff member on the clinic roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub id: String,
    pub name: String,
    pub specialization: String,
    /// Disabled staff stay on the roster but cannot be scheduled
    pub enabled: bool,
}

/// Appointment lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A booked appointment linking a patient to a doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    /// Scheduled time, RFC 3339
    pub scheduled_at: String,
    pub status: AppointmentStatus,
}
