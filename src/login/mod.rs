mod views;

use actix_web::{
    cookie::Cookie, get, http::header, post, web, HttpRequest, HttpResponse, Responder,
};

use crate::{
    api::{Backend, Backends},
    models::auth::Credentials,
    page::html::render,
};

pub const TOKEN_COOKIE: &str = "token";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(login_page)
        .service(login)
        .service(logout)
        .service(session);
}

pub struct LoginPage {
    pub credentials: Credentials,
    pub loading: bool,
    pub error: Option<String>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self {
            credentials: Credentials::default(),
            loading: false,
            error: None,
        }
    }

    /// The token on success; any failure gets the same message.
    pub async fn submit(&mut self, backend: &dyn Backend) -> Option<String> {
        self.loading = true;
        self.error = None;
        let result = backend.login(&self.credentials).await;
        self.loading = false;

        match result {
            Ok(token) => Some(token),
            Err(err) => {
                log::warn!("Login error: {}", err);
                self.error = Some(LOGIN_FAILED.to_string());
                None
            }
        }
    }
}

#[get("/login")]
async fn login_page() -> impl Responder {
    render(views::login_page(&LoginPage::new()))
}

#[post("/login")]
async fn login(backends: web::Data<Backends>, form: web::Form<Credentials>) -> HttpResponse {
    let mut page = LoginPage::new();
    page.credentials = form.into_inner();

    match page.submit(backends.pages.as_ref()).await {
        Some(token) => {
            let cookie = Cookie::build(TOKEN_COOKIE, token)
                .path("/")
                .http_only(true)
                .finish();
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/"))
                .cookie(cookie)
                .finish()
        }
        None => render(views::login_page(&page)),
    }
}

#[post("/logout")]
async fn logout() -> HttpResponse {
    let mut cookie = Cookie::build(TOKEN_COOKIE, "").path("/").finish();
    cookie.make_removal();
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/login"))
        .cookie(cookie)
        .finish()
}

#[derive(Debug, PartialEq)]
pub enum SessionStatus {
    SignedOut,
    Valid,
    Rejected,
    Unknown,
}

#[get("/session")]
async fn session(req: HttpRequest, backends: web::Data<Backends>) -> impl Responder {
    let status = match req.cookie(TOKEN_COOKIE) {
        None => SessionStatus::SignedOut,
        Some(cookie) => match backends.pages.validate_token(cookie.value()).await {
            Ok(true) => SessionStatus::Valid,
            Ok(false) => SessionStatus::Rejected,
            Err(err) => {
                log::warn!("Token validation failed: {}", err);
                SessionStatus::Unknown
            }
        },
    };
    render(views::session_page(&status))
}
