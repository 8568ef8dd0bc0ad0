use std::time::Instant;

use crate::{
    models::doctors::Specialization,
    notice::Banner,
    page::html::{self, escape, layout, opt, Nav},
};

use super::ShellPage;

fn banner_html(banner: &Banner, now: Instant) -> String {
    let remaining = banner.remaining(now).as_millis();
    format!(
        "<div id=\"banner\" class=\"{class}\" role=\"alert\" data-dismiss-ms=\"{ms}\">{text}</div>\
         <script>setTimeout(function () {{ var b = document.getElementById('banner'); if (b) b.remove(); }}, {ms});</script>",
        class = banner.kind.css_class(),
        ms = remaining,
        text = escape(&banner.text),
    )
}

pub fn shell_page(page: &ShellPage, now: Instant) -> String {
    let mut body = String::from(
        "<h1 class=\"text-center\">Hospital Management System</h1>\
         <p class=\"text-center text-muted\">Patient Service + Doctor Service + Billing Service (gRPC)</p>",
    );
    if let Some(banner) = page.banner(now) {
        body.push_str(&banner_html(banner, now));
    }

    body.push_str(&format!(
        "<div class=\"counters\">\
         <section><h5>Patients</h5><h2>{}</h2><a class=\"button\" href=\"/shell?form=patient\">Add Patient</a></section>\
         <section><h5>Doctors</h5><h2>{}</h2><a class=\"button\" href=\"/shell?form=doctor\">Add Doctor</a></section>\
         <section><h5>Billing</h5><h2>gRPC</h2><small>Auto-created with patients</small></section>\
         </div>",
        page.patients.len(),
        page.doctors.len()
    ));

    let patient_rows: Vec<String> = page
        .patients
        .iter()
        .map(|p| {
            html::row(&[
                escape(&p.name),
                escape(&p.email),
                escape(&p.date_of_birth),
                opt(&p.address),
                opt(&p.registered_date),
            ])
        })
        .collect();
    body.push_str(&format!("<section><h5>Patients ({})</h5>", page.patients.len()));
    body.push_str(&html::table(
        &["Name", "Email", "Date of Birth", "Address", "Registered"],
        &patient_rows,
        "No patients found",
    ));
    body.push_str("</section>");

    let doctor_rows: Vec<String> = page
        .doctors
        .iter()
        .map(|d| {
            html::row(&[
                escape(&d.name),
                escape(&d.specialization),
                opt(&d.department),
                d.experience_years
                    .map(|years| format!("{} years", years))
                    .unwrap_or_default(),
                opt(&d.phone_number),
                opt(&d.license_number),
            ])
        })
        .collect();
    body.push_str(&format!("<section><h5>Doctors ({})</h5>", page.doctors.len()));
    body.push_str(&html::table(
        &["Name", "Specialization", "Department", "Experience", "Phone", "License"],
        &doctor_rows,
        "No doctors found",
    ));
    body.push_str("</section>");

    if page.patient_form_open {
        let form = &page.patient_form;
        body.push_str("<dialog open><h3>Add New Patient</h3>");
        body.push_str("<form id=\"patient-form\" method=\"post\" action=\"/shell/patients\">");
        body.push_str(&html::required("Full Name", "text", "name", &form.name));
        body.push_str(&html::required("Email", "email", "email", &form.email));
        body.push_str(&html::required("Date of Birth", "date", "dateOfBirth", &form.date_of_birth));
        body.push_str(&html::textarea("Address", "address", &form.address, " required"));
        body.push_str(&html::required(
            "Registration Date",
            "date",
            "registeredDate",
            &form.registered_date,
        ));
        body.push_str(
            "<a href=\"/shell\">Cancel</a><button type=\"submit\">Create Patient</button></form></dialog>",
        );
    }

    if page.doctor_form_open {
        let form = &page.doctor_form;
        let options: Vec<(String, String)> = Specialization::ALL
            .iter()
            .map(|spec| (spec.to_string(), spec.to_string()))
            .collect();
        body.push_str("<dialog open><h3>Add New Doctor</h3>");
        body.push_str("<form id=\"doctor-form\" method=\"post\" action=\"/shell/doctors\">");
        body.push_str(&html::required("Full Name", "text", "name", &form.name));
        body.push_str(&html::required("Email", "email", "email", &form.email));
        body.push_str(&html::select(
            "Specialization",
            "specialization",
            "Select Specialization",
            &options,
            &form.specialization,
        ));
        body.push_str(&html::required("Phone Number", "tel", "phoneNumber", &form.phone_number));
        body.push_str(&html::required(
            "License Number",
            "text",
            "licenseNumber",
            &form.license_number,
        ));
        body.push_str(&html::input(
            "Experience (Years)",
            "number",
            "experienceYears",
            &form.experience_years,
            " min=\"0\" required",
        ));
        body.push_str(&html::required("Joined Date", "date", "joinedDate", &form.joined_date));
        body.push_str(&html::required("Department", "text", "department", &form.department));
        body.push_str(&html::textarea("Address", "address", &form.address, ""));
        body.push_str(
            "<a href=\"/shell\">Cancel</a><button type=\"submit\">Create Doctor</button></form></dialog>",
        );
    }

    layout("Overview", Nav::Shell, &body)
}
