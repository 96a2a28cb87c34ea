//! Seed data for a freshly initialized registry.

use crate::models::{
    AppointmentRecord, AppointmentStatus, DoctorRecord, PatientRecord,
};

/// Default clinic name for an unconfigured installation.
pub const DEFAULT_CLINIC_NAME: &str = "City Dental Clinic";

/// Seed patients.
pub fn seed_patients() -> Vec<PatientRecord> {
    vec![
        PatientRecord {
            id: "pat-001".into(),
            name: "Asha Verma".into(),
            age: "29".into(),
            contact: "555-0101".into(),
            address: "14 Lake Road".into(),
            created_at: "2024-01-10T09:00:00Z".into(),
        },
        PatientRecord {
            id: "pat-002".into(),
            name: "Ravi Nair".into(),
            age: "41".into(),
            contact: "555-0102".into(),
            address: "7 Hill View".into(),
            created_at: "2024-01-12T11:30:00Z".into(),
        },
        PatientRecord {
            id: "pat-003".into(),
            name: "Meera Joshi".into(),
            age: "35".into(),
            contact: "555-0103".into(),
            address: "22 Park Street".into(),
            created_at: "2024-02-01T15:45:00Z".into(),
        },
    ]
}

/// Seed doctors.
pub fn seed_doctors() -> Vec<DoctorRecord> {
    vec![
        DoctorRecord {
            id: "doc-001".into(),
            name: "Dr. Kavita Rao".into(),
            specialization: "General Dentistry".into(),
            enabled: true,
        },
        DoctorRecord {
            id: "doc-002".into(),
            name: "Dr. Sanjay Iyer".into(),
            specialization: "Orthodontics".into(),
            enabled: true,
        },
    ]
}

/// Seed appointments.
pub fn seed_appointments() -> Vec<AppointmentRecord> {
    vec![
        AppointmentRecord {
            id: "apt-001".into(),
            patient_id: "pat-001".into(),
            doctor_id: "doc-001".into(),
            scheduled_at: "2024-02-05T10:00:00Z".into(),
            status: AppointmentStatus::Scheduled,
        },
        AppointmentRecord {
            id: "apt-002".into(),
            patient_id: "pat-002".into(),
            doctor_id: "doc-002".into(),
            scheduled_at: "2024-02-05T11:00:00Z".into(),
            status: AppointmentStatus::Completed,
        },
    ]
}
