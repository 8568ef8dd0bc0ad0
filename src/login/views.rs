use crate::{
    models::auth::{DEMO_EMAIL, DEMO_PASSWORD},
    notice::NoticeKind,
    page::html::{self, layout, Nav},
};

use super::{LoginPage, SessionStatus};

pub fn login_page(page: &LoginPage) -> String {
    let mut body = String::from(
        "<h2>Hospital Management</h2><p class=\"text-muted\">Please sign in to continue</p>",
    );
    if let Some(error) = &page.error {
        body.push_str(&html::alert(NoticeKind::Danger, error));
    }
    body.push_str("<form id=\"login-form\" method=\"post\" action=\"/login\">");
    body.push_str(&html::required("Email", "email", "email", &page.credentials.email));
    body.push_str(&html::required(
        "Password",
        "password",
        "password",
        &page.credentials.password,
    ));
    body.push_str("<button type=\"submit\">Sign In</button></form>");
    body.push_str(&format!(
        "<small class=\"text-muted\">Demo credentials: {} / {}</small>",
        DEMO_EMAIL, DEMO_PASSWORD
    ));

    layout("Sign in", Nav::Login, &body)
}

pub fn session_page(status: &SessionStatus) -> String {
    let notice = match status {
        SessionStatus::SignedOut => html::alert(NoticeKind::Warning, "Not signed in"),
        SessionStatus::Valid => html::alert(NoticeKind::Success, "Session is valid"),
        SessionStatus::Rejected => html::alert(NoticeKind::Danger, "Session was rejected"),
        SessionStatus::Unknown => {
            html::alert(NoticeKind::Danger, "Could not reach the auth service")
        }
    };
    let body = format!(
        "<h1>Session</h1>{}<a href=\"/login\">Sign in</a>",
        notice
    );
    layout("Session", Nav::Dashboard, &body)
}
