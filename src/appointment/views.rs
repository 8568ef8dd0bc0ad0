use crate::{
    models::appointments::PatientDetails,
    notice::NoticeKind,
    page::html::{self, escape, layout, messages, Nav},
};

use super::AppointmentPage;

const SERVICES_AVAILABLE: usize = 6;

pub fn appointments_page(page: &AppointmentPage, today: &str) -> String {
    let form = &page.form;
    let patients: Vec<(String, String)> = page
        .patients
        .iter()
        .map(|p| (p.id.clone(), format!("{} - {}", p.name, p.email)))
        .collect();
    let doctors: Vec<(String, String)> = page
        .doctors
        .iter()
        .map(|d| (d.id.clone(), format!("{} - {}", d.name, d.specialization)))
        .collect();

    let mut body = String::from("<h1>Appointments Management</h1>");
    if let Some(error) = &page.load_error {
        body.push_str(&html::alert(NoticeKind::Danger, error));
    }
    body.push_str(&messages(&page.error, &page.success));

    body.push_str("<section class=\"booking\"><h5>Book New Appointment</h5>");
    body.push_str("<form id=\"booking-form\" method=\"post\" action=\"/appointments\">");
    body.push_str(&html::select(
        "Select Patient",
        "patientId",
        "Choose a patient...",
        &patients,
        &form.patient_id,
    ));
    body.push_str(
        "<button type=\"submit\" formaction=\"/appointments\" formmethod=\"get\" formnovalidate>Show history</button>",
    );
    body.push_str(&html::select(
        "Select Doctor",
        "doctorId",
        "Choose a doctor...",
        &doctors,
        &form.doctor_id,
    ));
    body.push_str(&html::input(
        "Appointment Date",
        "date",
        "appointmentDate",
        &form.appointment_date,
        &format!(" min=\"{}\" required", today),
    ));
    body.push_str(&html::required(
        "Appointment Time",
        "time",
        "appointmentTime",
        &form.appointment_time,
    ));
    body.push_str(&html::input(
        "Reason for Visit",
        "text",
        "reason",
        &form.reason,
        " placeholder=\"e.g., Regular checkup, Follow-up, Emergency\" required",
    ));
    body.push_str(&html::textarea(
        "Notes (Optional)",
        "notes",
        &form.notes,
        " placeholder=\"Additional notes or special instructions\"",
    ));
    body.push_str("<button type=\"submit\">Book Appointment</button></form></section>");

    body.push_str("<aside>");
    if let Some(details) = &page.details {
        body.push_str(&details_panel(details));
    }
    body.push_str(&format!(
        "<section><h6>Quick Stats</h6><div>Total Patients: {}</div><div>Total Doctors: {}</div><div>Services Available: {}</div></section>",
        page.patients.len(),
        page.doctors.len(),
        SERVICES_AVAILABLE
    ));
    body.push_str("</aside>");

    layout("Appointments", Nav::Appointments, &body)
}

fn details_panel(details: &PatientDetails) -> String {
    let patient = &details.patient;
    let mut out = format!(
        "<section class=\"patient-details\"><h6>{}</h6>\
         <div><strong>Patient Info:</strong><div>Name: {}</div><div>Email: {}</div><div>DOB: {}</div></div>\
         <div><strong>Appointment History:</strong><div>Total Appointments: {}</div></div>",
        escape("Patient Details & History"),
        escape(&patient.name),
        escape(&patient.email),
        escape(&patient.date_of_birth),
        details.total_appointments
    );

    let recent = details.recent();
    if !recent.is_empty() {
        out.push_str("<div><strong>Recent Appointments:</strong>");
        for appointment in recent {
            out.push_str(&format!(
                "<div class=\"history\"><div>{}</div><div>{} at {}</div><div>{}</div></div>",
                escape(&appointment.doctor_name),
                escape(&appointment.appointment_date),
                escape(&appointment.appointment_time),
                escape(&appointment.reason)
            ));
        }
        out.push_str("</div>");
    }
    out.push_str("</section>");
    out
}
