use serde::{Deserialize, Serialize};

use super::patients::Patient;

/// Booking request. Every field defaults so a partially filled form can be
/// carried through a query string.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub doctor_id: String,
    #[serde(default)]
    pub appointment_date: String,
    #[serde(default)]
    pub appointment_time: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientDetails {
    pub patient: Patient,
    #[serde(default)]
    pub total_appointments: u64,
    #[serde(default)]
    pub appointments: Vec<AppointmentSummary>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSummary {
    #[serde(default)]
    pub doctor_name: String,
    #[serde(default)]
    pub appointment_date: String,
    #[serde(default)]
    pub appointment_time: String,
    #[serde(default)]
    pub reason: String,
}

pub const RECENT_APPOINTMENTS_SHOWN: usize = 3;

impl PatientDetails {
    pub fn recent(&self) -> &[AppointmentSummary] {
        let end = self.appointments.len().min(RECENT_APPOINTMENTS_SHOWN);
        &self.appointments[..end]
    }
}
