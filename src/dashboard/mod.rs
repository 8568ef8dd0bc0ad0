mod views;

use actix_web::{get, web, Responder};
use futures::future::try_join;

use crate::{
    api::{Backend, Backends},
    page::html::render,
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard);
}

#[derive(Debug, Default, PartialEq)]
pub struct Stats {
    pub patients: usize,
    pub doctors: usize,
    /// No appointment listing is wired in, so this stays zero.
    pub appointments: usize,
}

pub struct DashboardPage {
    pub stats: Stats,
    pub loading: bool,
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            stats: Stats::default(),
            loading: true,
        }
    }

    pub async fn load_stats(&mut self, backend: &dyn Backend) {
        match try_join(backend.list_patients(), backend.list_doctors()).await {
            Ok((patients, doctors)) => {
                self.stats = Stats {
                    patients: patients.len(),
                    doctors: doctors.len(),
                    appointments: 0,
                };
            }
            Err(err) => log::warn!("Error loading stats: {}", err),
        }
        self.loading = false;
    }
}

#[get("/")]
async fn dashboard(backends: web::Data<Backends>) -> impl Responder {
    let mut page = DashboardPage::new();
    page.load_stats(backends.pages.as_ref()).await;
    render(views::dashboard_page(&page))
}
