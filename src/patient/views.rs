use crate::{
    models::patients::Patient,
    page::{
        html::{self, escape, layout, messages, opt, Nav},
        ResourcePage,
    },
};

use super::PatientResource;

const HEADERS: [&str; 6] = [
    "Name",
    "Email",
    "Date of Birth",
    "Address",
    "Registered Date",
    "Actions",
];

pub fn patients_page(page: &ResourcePage<PatientResource>) -> String {
    let mut body = String::from(
        "<header><h1>Patients Management</h1><a class=\"button\" href=\"/patients?new=true\">Add New Patient</a></header>",
    );
    body.push_str(&messages(&page.error, &page.success));

    body.push_str(&format!(
        "<section><h5>All Patients ({})</h5>",
        page.records.len()
    ));
    let rows: Vec<String> = page.records.iter().map(patient_row).collect();
    body.push_str(&html::table(&HEADERS, &rows, "No patients found. Add your first patient!"));
    body.push_str("</section>");

    if page.form_open {
        let form = &page.form;
        body.push_str("<dialog open><h3>Add New Patient</h3>");
        body.push_str("<form id=\"create-form\" method=\"post\" action=\"/patients\">");
        body.push_str(&html::required("Full Name", "text", "name", &form.name));
        body.push_str(&html::required("Email", "email", "email", &form.email));
        body.push_str(&html::required(
            "Date of Birth",
            "date",
            "dateOfBirth",
            &form.date_of_birth,
        ));
        body.push_str(&html::textarea("Address", "address", &form.address, " required"));
        body.push_str(&html::required(
            "Registration Date",
            "date",
            "registeredDate",
            &form.registered_date,
        ));
        body.push_str(
            "<a href=\"/patients\">Cancel</a><button type=\"submit\">Create Patient</button></form></dialog>",
        );
    }

    layout("Patients", Nav::Patients, &body)
}

fn patient_row(patient: &Patient) -> String {
    html::row(&[
        escape(&patient.name),
        escape(&patient.email),
        escape(&patient.date_of_birth),
        opt(&patient.address),
        opt(&patient.registered_date),
        format!("<a href=\"/patients/{}\">View</a>", escape(&patient.id)),
    ])
}

pub fn patient_detail(patient: &Patient) -> String {
    let body = format!(
        "<h1>{name}</h1><dl>\
         <dt>Email</dt><dd>{email}</dd>\
         <dt>Date of Birth</dt><dd>{dob}</dd>\
         <dt>Address</dt><dd>{address}</dd>\
         <dt>Registered</dt><dd>{registered}</dd>\
         </dl><a href=\"/patients\">Back to patients</a>",
        name = escape(&patient.name),
        email = escape(&patient.email),
        dob = escape(&patient.date_of_birth),
        address = opt(&patient.address),
        registered = opt(&patient.registered_date),
    );
    layout(&patient.name, Nav::Patients, &body)
}

pub fn patient_missing(id: &str) -> String {
    let body = format!(
        "{}<a href=\"/patients\">Back to patients</a>",
        html::alert(
            crate::notice::NoticeKind::Danger,
            &format!("Failed to load patient {}", id)
        )
    );
    layout("Patients", Nav::Patients, &body)
}
