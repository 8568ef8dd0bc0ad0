mod views;

use actix_web::{get, post, web, Responder};
use async_trait::async_trait;

use crate::{
    api::{ApiResult, Backend, Backends},
    models::doctors::{Doctor, DoctorForm},
    page::{html::render, PageQuery, Resource, ResourcePage},
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(doctors_list)
        .service(doctors_create)
        .service(doctors_by_specialization)
        .service(view_doctor);
}

pub struct DoctorResource;

#[async_trait]
impl Resource for DoctorResource {
    type Record = Doctor;
    type Form = DoctorForm;

    const LIST_FAILED: &'static str = "Failed to load doctors";
    const CREATE_FAILED: &'static str = "Failed to create doctor";
    const CREATED: &'static str = "Doctor created successfully!";

    fn blank_form(today: &str) -> DoctorForm {
        DoctorForm::blank(today)
    }

    async fn list(backend: &dyn Backend) -> ApiResult<Vec<Doctor>> {
        backend.list_doctors().await
    }

    async fn create(backend: &dyn Backend, form: &DoctorForm) -> anyhow::Result<()> {
        let doctor = form.to_request()?;
        backend.create_doctor(&doctor).await?;
        Ok(())
    }
}

crate::resource_funcs! {
    (doctors, DoctorResource, views::doctors_page),
}

#[get("/specialization/{specialization}")]
async fn doctors_by_specialization(
    backends: web::Data<Backends>,
    path: web::Path<String>,
) -> impl Responder {
    let specialization = path.into_inner();
    let mut page = ResourcePage::<DoctorResource>::new(&crate::utils::today());
    let result = backends
        .pages
        .list_doctors_by_specialization(&specialization)
        .await;
    page.load(result);
    render(views::filtered_doctors_page(&page, Some(&specialization)))
}

#[get("/{id}")]
async fn view_doctor(backends: web::Data<Backends>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match backends.pages.get_doctor(&id).await {
        Ok(doctor) => render(views::doctor_detail(&doctor)),
        Err(err) => {
            log::warn!("Failed to load doctor {}: {}", id, err);
            render(views::doctor_missing(&id))
        }
    }
}
