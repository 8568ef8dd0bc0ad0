use futures::future::try_join;

use crate::{
    api::Backend,
    models::{
        appointments::{Appointment, PatientDetails},
        doctors::Doctor,
        patients::Patient,
    },
};

pub const LOAD_FAILED: &str = "Failed to load patients and doctors";
pub const BOOK_FAILED: &str = "Failed to book appointment. Please check if patient and doctor exist.";
pub const BOOKED: &str = "Appointment booked successfully!";

#[derive(Default)]
pub struct AppointmentPage {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub details: Option<PatientDetails>,
    pub form: Appointment,
    pub submitting: bool,
    /// Set by `mount`; booking outcomes never clear it.
    pub load_error: Option<String>,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl AppointmentPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads both pick lists together; either failing fails both.
    pub async fn mount(&mut self, backend: &dyn Backend) {
        match try_join(backend.list_patients(), backend.list_doctors()).await {
            Ok((patients, doctors)) => {
                self.patients = patients;
                self.doctors = doctors;
            }
            Err(err) => {
                log::warn!("{}: {}", LOAD_FAILED, err);
                self.load_error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    /// An empty id clears the panel without touching the backend. A failed
    /// lookup also clears it, silently.
    pub async fn select_patient(&mut self, backend: &dyn Backend, patient_id: &str) {
        self.form.patient_id = patient_id.to_string();
        if patient_id.is_empty() {
            self.details = None;
            return;
        }

        self.details = match backend.patient_details(patient_id).await {
            Ok(details) => Some(details),
            Err(err) => {
                log::debug!("patient details for {} unavailable: {}", patient_id, err);
                None
            }
        };
    }

    pub async fn submit(&mut self, backend: &dyn Backend) -> bool {
        self.error = None;
        self.success = None;
        self.submitting = true;
        let result = backend.book_appointment(&self.form).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                self.success = Some(BOOKED.to_string());
                self.form = Appointment::default();
                true
            }
            Err(err) => {
                log::warn!("{}: {}", BOOK_FAILED, err);
                self.error = Some(BOOK_FAILED.to_string());
                false
            }
        }
    }
}
