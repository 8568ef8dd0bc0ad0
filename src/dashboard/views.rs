use crate::page::html::{layout, Nav};

use super::DashboardPage;

fn counter(id: &str, title: &str, value: usize, caption: &str) -> String {
    format!(
        "<section class=\"counter\"><h5>{}</h5><h2 id=\"{}\">{}</h2><p>{}</p></section>",
        title, id, value, caption
    )
}

pub fn dashboard_page(page: &DashboardPage) -> String {
    let stats = &page.stats;
    let mut body = String::from("<h1>Hospital Dashboard</h1><div class=\"counters\">");
    body.push_str(&counter(
        "patients-count",
        "Patients",
        stats.patients,
        "Total registered patients",
    ));
    body.push_str(&counter(
        "doctors-count",
        "Doctors",
        stats.doctors,
        "Available doctors",
    ));
    body.push_str(&counter(
        "appointments-count",
        "Appointments",
        stats.appointments,
        "Scheduled appointments",
    ));
    body.push_str("</div>");

    body.push_str(
        "<section><h5>Quick Actions</h5>\
         <a class=\"button\" href=\"/patients\">Manage Patients</a>\
         <a class=\"button\" href=\"/doctors\">Manage Doctors</a>\
         <a class=\"button\" href=\"/appointments\">Book Appointment</a>\
         <a class=\"button\" href=\"/\">Refresh Stats</a></section>",
    );

    layout("Dashboard", Nav::Dashboard, &body)
}
