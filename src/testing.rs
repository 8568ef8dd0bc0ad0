//! Test doubles: an in-memory `Backend` and a recording HTTP backend.

use std::{
    collections::HashSet,
    net::TcpListener,
    sync::{Arc, Mutex},
};

use actix_web::{dev::ServerHandle, http::header, web, App, HttpRequest, HttpResponse, HttpServer};
use async_trait::async_trait;

use crate::{
    api::{ApiError, ApiResult, Backend, Backends},
    models::{
        appointments::{Appointment, AppointmentSummary, PatientDetails},
        auth::Credentials,
        doctors::{Doctor, NewDoctor},
        patients::{NewPatient, Patient},
    },
};

pub fn patient(id: &str, name: &str) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.org", id),
        date_of_birth: "1980-05-17".to_string(),
        address: Some("12 Elm Road".to_string()),
        registered_date: Some("2024-02-01".to_string()),
    }
}

pub fn doctor(id: &str, name: &str, specialization: &str) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.org", id),
        specialization: specialization.to_string(),
        phone_number: Some("555-0101".to_string()),
        license_number: Some(format!("LIC-{}", id)),
        experience_years: Some(9),
        joined_date: Some("2019-09-01".to_string()),
        department: Some("Outpatients".to_string()),
        address: None,
    }
}

pub fn details_for(patient: Patient, history: usize) -> PatientDetails {
    let appointments = (0..history)
        .map(|i| AppointmentSummary {
            doctor_name: format!("Dr. Number {}", i + 1),
            appointment_date: format!("2025-03-{:02}", i + 1),
            appointment_time: "09:30".to_string(),
            reason: format!("Visit {}", i + 1),
        })
        .collect();
    PatientDetails {
        patient,
        total_appointments: history as u64,
        appointments,
    }
}

/// In-memory backend recording every call as `operation` or `operation:arg`.
#[derive(Default)]
pub struct FakeBackend {
    pub patients: Mutex<Vec<Patient>>,
    pub doctors: Mutex<Vec<Doctor>>,
    pub details: Mutex<Vec<PatientDetails>>,
    pub booked: Mutex<Vec<Appointment>>,
    pub created_patients: Mutex<Vec<NewPatient>>,
    pub created_doctors: Mutex<Vec<NewDoctor>>,
    pub logins: Mutex<Vec<Credentials>>,
    pub token: Mutex<Option<String>>,
    failing: Mutex<HashSet<&'static str>>,
    calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_patients(self, patients: Vec<Patient>) -> Self {
        *self.patients.lock().unwrap() = patients;
        self
    }

    pub fn with_doctors(self, doctors: Vec<Doctor>) -> Self {
        *self.doctors.lock().unwrap() = doctors;
        self
    }

    pub fn with_details(self, details: PatientDetails) -> Self {
        self.details.lock().unwrap().push(details);
        self
    }

    pub fn with_token(self, token: &str) -> Self {
        *self.token.lock().unwrap() = Some(token.to_string());
        self
    }

    pub fn failing(self, operation: &'static str) -> Self {
        self.failing.lock().unwrap().insert(operation);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.split(':').next() == Some(operation))
            .count()
    }

    pub fn into_backends(self) -> (Arc<FakeBackend>, Backends) {
        let fake = Arc::new(self);
        let backends = Backends {
            pages: fake.clone(),
            shell: fake.clone(),
        };
        (fake, backends)
    }

    fn record(&self, operation: &'static str, arg: Option<&str>) -> ApiResult<()> {
        let call = match arg {
            Some(arg) => format!("{}:{}", operation, arg),
            None => operation.to_string(),
        };
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(operation) {
            return Err(ApiError::Status {
                status: 500,
                url: format!("fake://{}", operation),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn list_patients(&self) -> ApiResult<Vec<Patient>> {
        self.record("list_patients", None)?;
        Ok(self.patients.lock().unwrap().clone())
    }

    async fn get_patient(&self, id: &str) -> ApiResult<Patient> {
        self.record("get_patient", Some(id))?;
        let found = self.patients.lock().unwrap().iter().find(|p| p.id == id).cloned();
        found.ok_or_else(|| ApiError::Status {
            status: 404,
            url: format!("fake://patients/{}", id),
        })
    }

    async fn create_patient(&self, new: &NewPatient) -> ApiResult<()> {
        self.record("create_patient", None)?;
        self.created_patients.lock().unwrap().push(new.clone());
        let mut patients = self.patients.lock().unwrap();
        let id = format!("p-new-{}", patients.len() + 1);
        patients.push(Patient {
            id,
            name: new.name.clone(),
            email: new.email.clone(),
            date_of_birth: new.date_of_birth.clone(),
            address: Some(new.address.clone()),
            registered_date: Some(new.registered_date.clone()),
        });
        Ok(())
    }

    async fn list_doctors(&self) -> ApiResult<Vec<Doctor>> {
        self.record("list_doctors", None)?;
        Ok(self.doctors.lock().unwrap().clone())
    }

    async fn get_doctor(&self, id: &str) -> ApiResult<Doctor> {
        self.record("get_doctor", Some(id))?;
        let found = self.doctors.lock().unwrap().iter().find(|d| d.id == id).cloned();
        found.ok_or_else(|| ApiError::Status {
            status: 404,
            url: format!("fake://doctors/{}", id),
        })
    }

    async fn list_doctors_by_specialization(
        &self,
        specialization: &str,
    ) -> ApiResult<Vec<Doctor>> {
        self.record("list_doctors_by_specialization", Some(specialization))?;
        Ok(self
            .doctors
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.specialization == specialization)
            .cloned()
            .collect())
    }

    async fn create_doctor(&self, new: &NewDoctor) -> ApiResult<()> {
        self.record("create_doctor", None)?;
        self.created_doctors.lock().unwrap().push(new.clone());
        let mut doctors = self.doctors.lock().unwrap();
        let id = format!("d-new-{}", doctors.len() + 1);
        doctors.push(Doctor {
            id,
            name: new.name.clone(),
            email: new.email.clone(),
            specialization: new.specialization.to_string(),
            phone_number: Some(new.phone_number.clone()),
            license_number: Some(new.license_number.clone()),
            experience_years: Some(new.experience_years),
            joined_date: Some(new.joined_date.clone()),
            department: Some(new.department.clone()),
            address: Some(new.address.clone()),
        });
        Ok(())
    }

    async fn book_appointment(&self, appointment: &Appointment) -> ApiResult<()> {
        self.record("book_appointment", None)?;
        self.booked.lock().unwrap().push(appointment.clone());
        Ok(())
    }

    async fn patient_details(&self, patient_id: &str) -> ApiResult<PatientDetails> {
        self.record("patient_details", Some(patient_id))?;
        let found = self
            .details
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.patient.id == patient_id)
            .cloned();
        found.ok_or_else(|| ApiError::Status {
            status: 404,
            url: format!("fake://patient-details/{}", patient_id),
        })
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        self.record("login", None)?;
        self.logins.lock().unwrap().push(credentials.clone());
        let token = self.token.lock().unwrap().clone();
        token.ok_or_else(|| ApiError::Status {
            status: 401,
            url: "fake://login".to_string(),
        })
    }

    async fn validate_token(&self, token: &str) -> ApiResult<bool> {
        self.record("validate_token", Some(token))?;
        Ok(self.token.lock().unwrap().as_deref() == Some(token))
    }
}

/// Scripted answer for one method and path on the mock server.
#[derive(Clone)]
pub struct Reply {
    method: &'static str,
    path: &'static str,
    status: u16,
    body: String,
    json: bool,
}

impl Reply {
    pub fn json(method: &'static str, path: &'static str, status: u16, body: serde_json::Value) -> Self {
        Self {
            method,
            path,
            status,
            body: body.to_string(),
            json: true,
        }
    }

    pub fn text(method: &'static str, path: &'static str, status: u16, body: &str) -> Self {
        Self {
            method,
            path,
            status,
            body: body.to_string(),
            json: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
    pub authorization: Option<String>,
}

struct MockState {
    replies: Vec<Reply>,
    requests: Mutex<Vec<Recorded>>,
}

/// A real HTTP backend on an ephemeral port that records what it receives.
pub struct MockServer {
    base: String,
    state: web::Data<MockState>,
    handle: ServerHandle,
}

impl MockServer {
    pub async fn start(replies: Vec<Reply>) -> Self {
        let state = web::Data::new(MockState {
            replies,
            requests: Mutex::new(Vec::new()),
        });
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let app_state = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(app_state.clone())
                .default_service(web::to(respond))
        })
        .workers(1)
        .listen(listener)
        .unwrap()
        .run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base: format!("http://127.0.0.1:{}", port),
            state,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn respond(req: HttpRequest, body: web::Bytes, state: web::Data<MockState>) -> HttpResponse {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    state.requests.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        body: String::from_utf8_lossy(&body).into_owned(),
        authorization: req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
    });

    let reply = state
        .replies
        .iter()
        .find(|reply| reply.method == method && reply.path == path);
    match reply {
        Some(reply) => {
            let status = actix_web::http::StatusCode::from_u16(reply.status).unwrap();
            let content_type = if reply.json {
                "application/json"
            } else {
                "text/plain"
            };
            HttpResponse::build(status)
                .content_type(content_type)
                .body(reply.body.clone())
        }
        None => HttpResponse::NotFound().finish(),
    }
}

pub fn html(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// Test service with `$backends` as app data and `$config` mounted under `$scope`.
#[macro_export]
macro_rules! test_app {
    ($backends:expr, $scope:expr, $config:path) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($backends))
                .service(actix_web::web::scope($scope).configure($config)),
        )
        .await
    };
}

#[macro_export]
macro_rules! get_html {
    ($app:expr, $uri:expr) => {
        $crate::testing::html(
            &actix_web::test::call_and_read_body(
                $app,
                actix_web::test::TestRequest::get().uri($uri).to_request(),
            )
            .await,
        )
    };
}

#[macro_export]
macro_rules! post_html {
    ($app:expr, $uri:expr, $form:expr) => {
        $crate::testing::html(
            &actix_web::test::call_and_read_body(
                $app,
                actix_web::test::TestRequest::post()
                    .uri($uri)
                    .set_form($form)
                    .to_request(),
            )
            .await,
        )
    };
}
