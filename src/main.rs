mod api;
mod appointment;
mod config;
mod dashboard;
mod doctor;
mod login;
mod models;
mod notice;
mod page;
mod patient;
mod shell;
#[cfg(test)]
mod testing;
mod utils;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;

use crate::{
    api::{ApiClient, Backends},
    config::Settings,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;
    let client = ApiClient::new(&settings)?;
    log::info!(
        "using backend {} with {} routing",
        settings.backend_url,
        client.routing()
    );
    let backends = web::Data::new(Backends::from_client(client));

    let bind = settings.bind.clone();
    log::info!("listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(backends.clone())
            // dashboard, login, session
            .configure(dashboard::config)
            .configure(login::config)
            // resource pages
            .service(web::scope("/patients").configure(patient::config))
            .service(web::scope("/doctors").configure(doctor::config))
            .service(web::scope("/appointments").configure(appointment::config))
            // combined overview
            .service(web::scope("/shell").configure(shell::config))
    })
    .bind(&bind)
    .with_context(|| format!("Failed to bind {}", bind))?
    .run()
    .await
    .context("Server stopped with an error")
}
