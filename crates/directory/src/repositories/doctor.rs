use std::collections::HashSet;

use docslot_core::models::doctor::Doctor;
use eyre::Result;
use tracing::warn;

/// Read-only lookup over the clinic's doctors.
pub trait DoctorDirectory: Send + Sync {
    fn find_by_id(&self, id: &str) -> Option<Doctor>;

    fn list(&self) -> Vec<Doctor>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    doctors: Vec<Doctor>,
}

impl InMemoryDirectory {
    /// Builds a directory, keeping the first record of any repeated id.
    pub fn new(doctors: Vec<Doctor>) -> Self {
        let mut seen = HashSet::new();
        let doctors = doctors
            .into_iter()
            .filter(|doctor| {
                let fresh = seen.insert(doctor.id.clone());
                if !fresh {
                    warn!("Ignoring duplicate doctor id {}", doctor.id);
                }
                fresh
            })
            .collect();
        Self { doctors }
    }

    /// Parses a JSON array of doctor records.
    pub fn from_json(raw: &str) -> Result<Self> {
        let doctors: Vec<Doctor> = serde_json::from_str(raw)?;
        Ok(Self::new(doctors))
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}

impl DoctorDirectory for InMemoryDirectory {
    fn find_by_id(&self, id: &str) -> Option<Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == id).cloned()
    }

    fn list(&self) -> Vec<Doctor> {
        self.doctors.clone()
    }
}

/// Doctors sharing `speciality`, other than `exclude_id`, in directory order.
pub fn related_doctors(
    directory: &dyn DoctorDirectory,
    speciality: &str,
    exclude_id: &str,
    limit: usize,
) -> Vec<Doctor> {
    directory
        .list()
        .into_iter()
        .filter(|doctor| doctor.speciality == speciality && doctor.id != exclude_id)
        .take(limit)
        .collect()
}
