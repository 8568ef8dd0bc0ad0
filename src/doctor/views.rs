use crate::{
    models::doctors::{Doctor, Specialization},
    notice::NoticeKind,
    page::{
        html::{self, escape, layout, messages, opt, Nav},
        ResourcePage,
    },
};

use super::DoctorResource;

const HEADERS: [&str; 7] = [
    "Name",
    "Specialization",
    "Department",
    "Experience",
    "Phone",
    "License",
    "Actions",
];

pub fn doctors_page(page: &ResourcePage<DoctorResource>) -> String {
    filtered_doctors_page(page, None)
}

pub fn filtered_doctors_page(page: &ResourcePage<DoctorResource>, filter: Option<&str>) -> String {
    let mut body = String::from(
        "<header><h1>Doctors Management</h1><a class=\"button\" href=\"/doctors?new=true\">Add New Doctor</a></header>",
    );
    body.push_str(&specialization_links(filter));
    body.push_str(&messages(&page.error, &page.success));

    let title = match filter {
        Some(spec) => format!("{} Doctors", escape(spec)),
        None => "All Doctors".to_string(),
    };
    body.push_str(&format!("<section><h5>{} ({})</h5>", title, page.records.len()));
    let rows: Vec<String> = page.records.iter().map(doctor_row).collect();
    body.push_str(&html::table(&HEADERS, &rows, "No doctors found. Add your first doctor!"));
    body.push_str("</section>");

    if page.form_open {
        let form = &page.form;
        let options: Vec<(String, String)> = Specialization::ALL
            .iter()
            .map(|spec| (spec.as_str().to_string(), spec.as_str().to_string()))
            .collect();

        body.push_str("<dialog open><h3>Add New Doctor</h3>");
        body.push_str("<form id=\"create-form\" method=\"post\" action=\"/doctors\">");
        body.push_str(&html::required("Full Name", "text", "name", &form.name));
        body.push_str(&html::required("Email", "email", "email", &form.email));
        body.push_str(&html::select(
            "Specialization",
            "specialization",
            "Select Specialization",
            &options,
            &form.specialization,
        ));
        body.push_str(&html::required("Department", "text", "department", &form.department));
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
        body.push_str(&html::textarea("Address", "address", &form.address, " required"));
        body.push_str(
            "<a href=\"/doctors\">Cancel</a><button type=\"submit\">Create Doctor</button></form></dialog>",
        );
    }

    layout("Doctors", Nav::Doctors, &body)
}

fn specialization_links(active: Option<&str>) -> String {
    let mut out = String::from("<nav class=\"filters\"><a href=\"/doctors\">All</a>");
    for spec in Specialization::ALL.iter() {
        let class = if active == Some(spec.as_str()) {
            " class=\"active\""
        } else {
            ""
        };
        out.push_str(&format!(
            "<a href=\"/doctors/specialization/{}\"{}>{}</a>",
            spec.as_str().replace(' ', "%20"),
            class,
            spec
        ));
    }
    out.push_str("</nav>");
    out
}

fn experience(doctor: &Doctor) -> String {
    match doctor.experience_years {
        Some(years) => format!("{} years", years),
        None => String::new(),
    }
}

fn doctor_row(doctor: &Doctor) -> String {
    html::row(&[
        escape(&doctor.name),
        escape(&doctor.specialization),
        opt(&doctor.department),
        experience(doctor),
        opt(&doctor.phone_number),
        opt(&doctor.license_number),
        format!("<a href=\"/doctors/{}\">View</a>", escape(&doctor.id)),
    ])
}

pub fn doctor_detail(doctor: &Doctor) -> String {
    let body = format!(
        "<h1>{name}</h1><dl>\
         <dt>Email</dt><dd>{email}</dd>\
         <dt>Specialization</dt><dd>{spec}</dd>\
         <dt>Department</dt><dd>{department}</dd>\
         <dt>Experience</dt><dd>{experience}</dd>\
         <dt>Phone</dt><dd>{phone}</dd>\
         <dt>License</dt><dd>{license}</dd>\
         <dt>Joined</dt><dd>{joined}</dd>\
         <dt>Address</dt><dd>{address}</dd>\
         </dl><a href=\"/doctors\">Back to doctors</a>",
        name = escape(&doctor.name),
        email = escape(&doctor.email),
        spec = escape(&doctor.specialization),
        department = opt(&doctor.department),
        experience = experience(doctor),
        phone = opt(&doctor.phone_number),
        license = opt(&doctor.license_number),
        joined = opt(&doctor.joined_date),
        address = opt(&doctor.address),
    );
    layout(&doctor.name, Nav::Doctors, &body)
}

pub fn doctor_missing(id: &str) -> String {
    let body = format!(
        "{}<a href=\"/doctors\">Back to doctors</a>",
        html::alert(NoticeKind::Danger, &format!("Failed to load doctor {}", id))
    );
    layout("Doctors", Nav::Doctors, &body)
}
