mod booking;
mod views;

use actix_web::{get, post, web, Responder};

use crate::{api::Backends, models::appointments::Appointment, page::html::render};

pub use self::booking::AppointmentPage;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(booking_page).service(book);
}

/// The query carries the booking form as entered so far; `patientId`
/// selects whose history the side panel shows.
#[get("")]
async fn booking_page(
    backends: web::Data<Backends>,
    query: web::Query<Appointment>,
) -> impl Responder {
    let backend = backends.pages.as_ref();
    let mut page = AppointmentPage::new();
    page.mount(backend).await;

    let form = query.into_inner();
    let patient_id = form.patient_id.clone();
    page.form = form;
    page.select_patient(backend, &patient_id).await;

    render(views::appointments_page(&page, &crate::utils::today()))
}

#[post("")]
async fn book(backends: web::Data<Backends>, form: web::Form<Appointment>) -> impl Responder {
    let backend = backends.pages.as_ref();
    let mut page = AppointmentPage::new();
    page.mount(backend).await;
    page.form = form.into_inner();

    if !page.submit(backend).await {
        let patient_id = page.form.patient_id.clone();
        page.select_patient(backend, &patient_id).await;
    }

    render(views::appointments_page(&page, &crate::utils::today()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{details_for, doctor, patient, FakeBackend};

    fn backend() -> FakeBackend {
        FakeBackend::new()
            .with_patients(vec![patient("p-1", "Ada Lovelace"), patient("p-2", "Grace Hopper")])
            .with_doctors(vec![doctor("d-1", "John Watson", "General Medicine")])
            .with_details(details_for(patient("p-1", "Ada Lovelace"), 5))
    }

    fn booking() -> Appointment {
        Appointment {
            patient_id: "p-1".to_string(),
            doctor_id: "d-1".to_string(),
            appointment_date: "2030-01-15".to_string(),
            appointment_time: "10:30".to_string(),
            reason: "Checkup".to_string(),
            notes: "Bring results".to_string(),
        }
    }

    #[actix_web::test]
    async fn page_lists_choices_and_stats_without_panel() {
        let (fake, backends) = backend().into_backends();
        let app = crate::test_app!(backends, "/appointments", config);

        let html = crate::get_html!(&app, "/appointments");

        assert_eq!(fake.count("patient_details"), 0);
        assert!(html.contains("Ada Lovelace - p-1@example.org"));
        assert!(html.contains("John Watson - General Medicine"));
        assert!(html.contains("Total Patients: 2"));
        assert!(html.contains("Total Doctors: 1"));
        assert!(!html.contains("Patient Details &amp; History"));
        assert!(html.contains(&format!("min=\"{}\"", crate::utils::today())));
    }

    #[actix_web::test]
    async fn selecting_patient_renders_recent_history() {
        let (fake, backends) = backend().into_backends();
        let app = crate::test_app!(backends, "/appointments", config);

        let html = crate::get_html!(&app, "/appointments?patientId=p-1&reason=Cough");

        assert_eq!(fake.count("patient_details"), 1);
        assert!(html.contains("Patient Details &amp; History"));
        assert!(html.contains("Total Appointments: 5"));
        assert!(html.contains("Dr. Number 3"));
        assert!(!html.contains("Dr. Number 4"));
        assert!(html.contains("value=\"Cough\""));
        assert!(html.contains("<option value=\"p-1\" selected>"));
    }

    #[actix_web::test]
    async fn missing_details_hide_panel() {
        let (fake, backends) = backend().into_backends();
        let app = crate::test_app!(backends, "/appointments", config);

        let html = crate::get_html!(&app, "/appointments?patientId=p-2");

        assert_eq!(fake.calls().last().map(String::as_str), Some("patient_details:p-2"));
        assert!(!html.contains("Patient Details &amp; History"));
        assert!(!html.contains("alert-danger"));
    }

    #[actix_web::test]
    async fn booking_success_resets_form() {
        let (fake, backends) = backend().into_backends();
        let app = crate::test_app!(backends, "/appointments", config);

        let html = crate::post_html!(&app, "/appointments", booking());

        assert_eq!(*fake.booked.lock().unwrap(), vec![booking()]);
        assert!(html.contains("Appointment booked successfully!"));
        assert!(!html.contains("Bring results"));
        assert_eq!(fake.count("patient_details"), 0);
    }

    #[actix_web::test]
    async fn booking_failure_keeps_entries() {
        let (fake, backends) = backend().failing("book_appointment").into_backends();
        let app = crate::test_app!(backends, "/appointments", config);

        let html = crate::post_html!(&app, "/appointments", booking());

        assert!(html.contains("Failed to book appointment. Please check if patient and doctor exist."));
        assert!(html.contains(">Bring results</textarea>"));
        assert!(html.contains("value=\"10:30\""));
        assert_eq!(fake.count("patient_details"), 1);
    }

    #[actix_web::test]
    async fn successful_booking_still_reports_load_failure() {
        let (fake, backends) = backend().failing("list_doctors").into_backends();
        let app = crate::test_app!(backends, "/appointments", config);

        let html = crate::post_html!(&app, "/appointments", booking());

        assert_eq!(fake.booked.lock().unwrap().len(), 1);
        assert!(html.contains("Appointment booked successfully!"));
        assert!(html.contains("Failed to load patients and doctors"));
    }

    #[actix_web::test]
    async fn load_failure_is_reported() {
        let (_fake, backends) = backend().failing("list_patients").into_backends();
        let app = crate::test_app!(backends, "/appointments", config);

        let html = crate::get_html!(&app, "/appointments");

        assert!(html.contains("Failed to load patients and doctors"));
    }
}
