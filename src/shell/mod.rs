mod views;

use std::time::Instant;

use actix_web::{get, post, web, Responder};
use serde::Deserialize;

use crate::{
    api::{Backend, Backends},
    models::{
        doctors::{Doctor, DoctorForm, Specialization},
        patients::{NewPatient, Patient},
    },
    notice::{Banner, NoticeKind},
    page::html::render,
};

pub const PATIENT_CREATED: &str =
    "Patient created successfully! Billing account auto-created via gRPC!";
pub const PATIENT_CREATE_FAILED: &str = "Failed to create patient";
pub const PATIENTS_LOAD_FAILED: &str = "Failed to load patients";
pub const DOCTOR_DISABLED: &str = "Doctor service temporarily disabled";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(overview)
        .service(create_patient)
        .service(create_doctor);
}

/// Combined patients and doctors overview. Doctor creation is switched off
/// here and only raises a warning.
pub struct ShellPage {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
    pub patient_form: NewPatient,
    pub doctor_form: DoctorForm,
    pub patient_form_open: bool,
    pub doctor_form_open: bool,
    banner: Option<Banner>,
}

impl ShellPage {
    pub fn new(today: &str) -> Self {
        Self {
            patients: Vec::new(),
            doctors: Vec::new(),
            patient_form: NewPatient::blank(today),
            doctor_form: blank_doctor_form(today),
            patient_form_open: false,
            doctor_form_open: false,
            banner: None,
        }
    }

    pub async fn mount(&mut self, backend: &dyn Backend, now: Instant) {
        self.load_patients(backend, now).await;
        self.load_doctors();
    }

    pub async fn load_patients(&mut self, backend: &dyn Backend, now: Instant) {
        match backend.list_patients().await {
            Ok(patients) => self.patients = patients,
            Err(err) => {
                log::warn!("{}: {}", PATIENTS_LOAD_FAILED, err);
                self.show(NoticeKind::Danger, PATIENTS_LOAD_FAILED, now);
            }
        }
    }

    fn load_doctors(&mut self) {
        self.doctors.clear();
    }

    pub fn show(&mut self, kind: NoticeKind, text: &str, now: Instant) {
        self.banner = Some(Banner::raise(kind, text, now));
    }

    pub fn banner(&self, now: Instant) -> Option<&Banner> {
        self.banner.as_ref().filter(|banner| banner.is_visible(now))
    }

    pub async fn create_patient(&mut self, backend: &dyn Backend, today: &str, now: Instant) -> bool {
        match backend.create_patient(&self.patient_form).await {
            Ok(()) => {
                self.show(NoticeKind::Success, PATIENT_CREATED, now);
                self.patient_form_open = false;
                self.patient_form = NewPatient::blank(today);
                self.load_patients(backend, now).await;
                true
            }
            Err(err) => {
                log::warn!("{}: {}", PATIENT_CREATE_FAILED, err);
                self.show(NoticeKind::Danger, PATIENT_CREATE_FAILED, now);
                false
            }
        }
    }

    pub fn create_doctor(&mut self, now: Instant) {
        self.show(NoticeKind::Warning, DOCTOR_DISABLED, now);
    }
}

fn blank_doctor_form(today: &str) -> DoctorForm {
    DoctorForm {
        specialization: Specialization::Cardiology.to_string(),
        ..DoctorForm::blank(today)
    }
}

#[derive(Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
enum OpenForm {
    Patient,
    Doctor,
}

#[derive(Deserialize)]
struct ShellQuery {
    form: Option<OpenForm>,
}

#[get("")]
async fn overview(backends: web::Data<Backends>, query: web::Query<ShellQuery>) -> impl Responder {
    let now = Instant::now();
    let mut page = ShellPage::new(&crate::utils::today());
    page.mount(backends.shell.as_ref(), now).await;
    page.patient_form_open = query.form == Some(OpenForm::Patient);
    page.doctor_form_open = query.form == Some(OpenForm::Doctor);
    render(views::shell_page(&page, now))
}

#[post("/patients")]
async fn create_patient(
    backends: web::Data<Backends>,
    form: web::Form<NewPatient>,
) -> impl Responder {
    let now = Instant::now();
    let today = crate::utils::today();
    let backend = backends.shell.as_ref();
    let mut page = ShellPage::new(&today);
    page.mount(backend, now).await;
    page.patient_form = form.into_inner();
    page.patient_form_open = true;
    page.create_patient(backend, &today, now).await;
    render(views::shell_page(&page, now))
}

#[post("/doctors")]
async fn create_doctor(backends: web::Data<Backends>, form: web::Form<DoctorForm>) -> impl Responder {
    let now = Instant::now();
    let mut page = ShellPage::new(&crate::utils::today());
    page.mount(backends.shell.as_ref(), now).await;
    page.doctor_form = form.into_inner();
    page.doctor_form_open = true;
    page.create_doctor(now);
    render(views::shell_page(&page, now))
}
