mod views;

use actix_web::{get, post, web, Responder};
use async_trait::async_trait;

use crate::{
    api::{ApiResult, Backend, Backends},
    models::patients::{NewPatient, Patient},
    page::{html::render, PageQuery, Resource, ResourcePage},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(patients_list)
        .service(patients_create)
        .service(view_patient);
}

pub struct PatientResource;

#[async_trait]
impl Resource for PatientResource {
    type Record = Patient;
    type Form = NewPatient;

    const LIST_FAILED: &'static str = "Failed to load patients";
    const CREATE_FAILED: &'static str = "Failed to create patient";
    const CREATED: &'static str = "Patient created successfully!";

    fn blank_form(today: &str) -> NewPatient {
        NewPatient::blank(today)
    }

    async fn list(backend: &dyn Backend) -> ApiResult<Vec<Patient>> {
        backend.list_patients().await
    }

    async fn create(backend: &dyn Backend, form: &NewPatient) -> anyhow::Result<()> {
        backend.create_patient(form).await?;
        Ok(())
    }
}

crate::resource_funcs! {
    (patients, PatientResource, views::patients_page),
}

#[get("/{id}")]
async fn view_patient(backends: web::Data<Backends>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match backends.pages.get_patient(&id).await {
        Ok(patient) => render(views::patient_detail(&patient)),
        Err(err) => {
            log::warn!("Failed to load patient {}: {}", id, err);
            render(views::patient_missing(&id))
        }
    }
}
