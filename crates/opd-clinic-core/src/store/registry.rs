//! In-memory clinic registry mirrored into a key-value store.

use crate::models::{AppointmentRecord, DoctorRecord, PatientRecord};

use super::fixtures;
use super::{KvStore, StoreResult};

const KEY_CLINIC_NAME: &str = "clinic_name";
const KEY_PATIENTS: &str = "patients";
const KEY_DOCTORS: &str = "doctors";
const KEY_APPOINTMENTS: &str = "appointments";

/// Clinic state container.
///
/// Loads once at construction, seeding fixtures when the store is empty,
/// and writes the affected collection back after every change.
pub struct Registry<S: KvStore> {
    store: S,
    clinic_name: String,
    patients: Vec<PatientRecord>,
    doctors: Vec<DoctorRecord>,
    appointments: Vec<AppointmentRecord>,
}

impl<S: KvStore> Registry<S> {
    /// Load registry state from the store, seeding fixtures for any
    /// collection that was never saved.
    pub fn load(mut store: S) -> StoreResult<Self> {
        let clinic_name = match store.load(KEY_CLINIC_NAME)? {
            Some(name) => name,
            None => {
                let name = fixtures::DEFAULT_CLINIC_NAME.to_string();
                store.save(KEY_CLINIC_NAME, &name)?;
                name
            }
        };
        let patients = Self::load_or_seed(&mut store, KEY_PATIENTS, fixtures::seed_patients)?;
        let doctors = Self::load_or_seed(&mut store, KEY_DOCTORS, fixtures::seed_doctors)?;
        let appointments =
            Self::load_or_seed(&mut store, KEY_APPOINTMENTS, fixtures::seed_appointments)?;

        Ok(Self {
            store,
            clinic_name,
            patients,
            doctors,
            appointments,
        })
    }

    fn load_or_seed<T>(store: &mut S, key: &str, seed: fn() -> Vec<T>) -> StoreResult<Vec<T>>
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        match store.load(key)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => {
                let values = seed();
                store.save(key, &serde_json::to_string(&values)?)?;
                Ok(values)
            }
        }
    }

    /// The configured clinic name.
    pub fn clinic_name(&self) -> &str {
        &self.clinic_name
    }

    /// Rename the clinic.
    pub fn set_clinic_name(&mut self, name: String) -> StoreResult<()> {
        self.store.save(KEY_CLINIC_NAME, &name)?;
        self.clinic_name = name;
        Ok(())
    }

    /// All registered patients, in registration order.
    pub fn patients(&self) -> &[PatientRecord] {
        &self.patients
    }

    /// Look up a patient by id.
    pub fn patient(&self, id: &str) -> Option<&PatientRecord> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Register a patient.
    pub fn add_patient(&mut self, patient: PatientRecord) -> StoreResult<()> {
        self.patients.push(patient);
        self.store
            .save(KEY_PATIENTS, &serde_json::to_string(&self.patients)?)?;
        Ok(())
    }

    /// The doctor roster.
    pub fn doctors(&self) -> &[DoctorRecord] {
        &self.doctors
    }

    /// Enable or disable a staff member. Returns false when the id is unknown.
    pub fn set_doctor_enabled(&mut self, id: &str, enabled: bool) -> StoreResult<bool> {
        let Some(doctor) = self.doctors.iter_mut().find(|d| d.id == id) else {
            return Ok(false);
        };
        doctor.enabled = enabled;
        self.store
            .save(KEY_DOCTORS, &serde_json::to_string(&self.doctors)?)?;
        Ok(true)
    }

    /// All appointments, in booking order.
    pub fn appointments(&self) -> &[AppointmentRecord] {
        &self.appointments
    }

    /// Book an appointment.
    pub fn add_appointment(&mut self, appointment: AppointmentRecord) -> StoreResult<()> {
        self.appointments.push(appointment);
        self.store.save(
            KEY_APPOINTMENTS,
            &serde_json::to_string(&self.appointments)?,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_empty_store_seeds_fixtures() {
        let registry = Registry::load(MemoryStore::new()).unwrap();

        assert_eq!(registry.clinic_name(), fixtures::DEFAULT_CLINIC_NAME);
        assert_eq!(registry.patients().len(), 3);
        assert_eq!(registry.doctors().len(), 2);
        assert_eq!(registry.appointments().len(), 2);
    }

    #[test]
    fn test_changes_survive_reload() {
        let mut store = MemoryStore::new();
        {
            let mut registry = Registry::load(&mut store).unwrap();
            registry
                .add_patient(PatientRecord::new(
                    "New Patient".into(),
                    "50".into(),
                    "555-0199".into(),
                    "9 Oak Lane".into(),
                ))
                .unwrap();
            registry.set_clinic_name("Bright Smiles".into()).unwrap();
        }

        let registry = Registry::load(&mut store).unwrap();
        assert_eq!(registry.clinic_name(), "Bright Smiles");
        assert_eq!(registry.patients().len(), 4);
        assert_eq!(registry.patients()[3].name, "New Patient");
    }

    #[test]
    fn test_doctor_enable_disable() {
        let mut registry = Registry::load(MemoryStore::new()).unwrap();

        assert!(registry.set_doctor_enabled("doc-001", false).unwrap());
        assert!(!registry.doctors()[0].enabled);

        assert!(!registry.set_doctor_enabled("doc-999", false).unwrap());
    }

    #[test]
    fn test_patient_lookup() {
        let registry = Registry::load(MemoryStore::new()).unwrap();
        assert_eq!(registry.patient("pat-002").unwrap().name, "Ravi Nair");
        assert!(registry.patient("pat-999").is_none());
    }
}
