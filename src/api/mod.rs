mod error;
mod routes;

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::Settings,
    models::{
        appointments::{Appointment, PatientDetails},
        auth::{Credentials, LoginResponse},
        doctors::{Doctor, NewDoctor},
        patients::{NewPatient, Patient},
    },
};

pub use self::{
    error::{ApiError, ApiResult},
    routes::Routing,
};
use self::routes::{GATEWAY_LOGIN, VALIDATE_TOKEN};

#[async_trait]
pub trait Backend: Send + Sync {
    async fn list_patients(&self) -> ApiResult<Vec<Patient>>;
    async fn get_patient(&self, id: &str) -> ApiResult<Patient>;
    async fn create_patient(&self, patient: &NewPatient) -> ApiResult<()>;

    async fn list_doctors(&self) -> ApiResult<Vec<Doctor>>;
    async fn get_doctor(&self, id: &str) -> ApiResult<Doctor>;
    async fn list_doctors_by_specialization(&self, specialization: &str)
        -> ApiResult<Vec<Doctor>>;
    async fn create_doctor(&self, doctor: &NewDoctor) -> ApiResult<()>;

    async fn book_appointment(&self, appointment: &Appointment) -> ApiResult<()>;
    async fn patient_details(&self, patient_id: &str) -> ApiResult<PatientDetails>;

    /// Returns the session token handed out by the auth service.
    async fn login(&self, credentials: &Credentials) -> ApiResult<String>;
    /// `Ok(false)` when the auth service rejects the token.
    async fn validate_token(&self, token: &str) -> ApiResult<bool>;
}

/// Backends shared by every worker: one for the regular pages, one pinned to
/// gateway routing for the shell page.
#[derive(Clone)]
pub struct Backends {
    pub pages: Arc<dyn Backend>,
    pub shell: Arc<dyn Backend>,
}

impl Backends {
    pub fn from_client(client: ApiClient) -> Self {
        let shell = client.with_routing(Routing::Gateway);
        Self {
            pages: Arc::new(client),
            shell: Arc::new(shell),
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    routing: Routing,
    login_url: String,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: settings.backend_url.trim_end_matches('/').to_string(),
            routing: settings.routing,
            login_url: settings.login_url.clone(),
        })
    }

    pub fn with_routing(&self, routing: Routing) -> Self {
        Self {
            routing,
            ..self.clone()
        }
    }

    pub fn routing(&self) -> Routing {
        self.routing
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `path` with `id` pushed as a single percent-encoded segment.
    fn record_url(&self, path: &str, id: &str) -> ApiResult<String> {
        let base = self.url(path);
        let mut url = reqwest::Url::parse(&base).map_err(|_| ApiError::Url(base.clone()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(base.clone()))?
            .push(id);
        Ok(url.into())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self.http.get(url).send().await?;
        let response = check_status(response, url)?;
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> ApiResult<reqwest::Response> {
        let response = self.http.post(url).json(body).send().await?;
        check_status(response, url)
    }

    async fn create<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let url = self.url(path);
        let response = self.post_json(&url, body).await?;
        let created = response.text().await?;
        log::debug!("POST {} created: {}", url, created);
        Ok(())
    }
}

fn check_status(response: reqwest::Response, url: &str) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn list_patients(&self) -> ApiResult<Vec<Patient>> {
        self.get_json(&self.url(&self.routing.patients())).await
    }

    async fn get_patient(&self, id: &str) -> ApiResult<Patient> {
        let url = self.record_url(&self.routing.patients(), id)?;
        self.get_json(&url).await
    }

    async fn create_patient(&self, patient: &NewPatient) -> ApiResult<()> {
        self.create(&self.routing.patients(), patient).await
    }

    async fn list_doctors(&self) -> ApiResult<Vec<Doctor>> {
        self.get_json(&self.url(&self.routing.doctors())).await
    }

    async fn get_doctor(&self, id: &str) -> ApiResult<Doctor> {
        let url = self.record_url(&self.routing.doctors(), id)?;
        self.get_json(&url).await
    }

    async fn list_doctors_by_specialization(
        &self,
        specialization: &str,
    ) -> ApiResult<Vec<Doctor>> {
        let url = self.record_url(&self.routing.doctors_by_specialization(), specialization)?;
        self.get_json(&url).await
    }

    async fn create_doctor(&self, doctor: &NewDoctor) -> ApiResult<()> {
        self.create(&self.routing.doctors(), doctor).await
    }

    async fn book_appointment(&self, appointment: &Appointment) -> ApiResult<()> {
        self.create(&self.routing.appointments(), appointment).await
    }

    async fn patient_details(&self, patient_id: &str) -> ApiResult<PatientDetails> {
        let url = self.record_url(&self.routing.patient_details(), patient_id)?;
        self.get_json(&url).await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let response = match self.routing {
            Routing::Direct => {
                // The test login endpoint issues a token for any caller.
                log::debug!(
                    "direct login drops credentials of {}",
                    credentials.email
                );
                self.post_json(&self.login_url, &serde_json::json!({}))
                    .await?
            }
            Routing::Gateway => {
                self.post_json(&self.url(GATEWAY_LOGIN), credentials)
                    .await?
            }
        };
        let body: LoginResponse = response.json().await?;
        Ok(body.token)
    }

    async fn validate_token(&self, token: &str) -> ApiResult<bool> {
        let url = self.url(VALIDATE_TOKEN);
        let response = self.http.get(&url).bearer_auth(token).send().await?;
        match response.status().as_u16() {
            401 | 403 => Ok(false),
            _ => check_status(response, &url).map(|_| true),
        }
    }
}
