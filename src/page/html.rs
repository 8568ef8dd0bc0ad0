use std::fmt::Write;

use actix_web::HttpResponse;

use crate::notice::NoticeKind;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Dashboard,
    Patients,
    Doctors,
    Appointments,
    Shell,
    Login,
}

const NAV_LINKS: [(Nav, &str, &str); 5] = [
    (Nav::Dashboard, "/", "Dashboard"),
    (Nav::Patients, "/patients", "Patients"),
    (Nav::Doctors, "/doctors", "Doctors"),
    (Nav::Appointments, "/appointments", "Appointments"),
    (Nav::Shell, "/shell", "Overview"),
];

pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn opt(value: &Option<String>) -> String {
    value.as_deref().map(escape).unwrap_or_default()
}

pub fn layout(title: &str, active: Nav, body: &str) -> String {
    let mut nav = String::new();
    for (item, href, label) in NAV_LINKS.iter() {
        let class = if *item == active { " class=\"active\"" } else { "" };
        let _ = write!(nav, "<a href=\"{}\"{}>{}</a>", href, class, label);
    }
    let session = if active == Nav::Login {
        ""
    } else {
        "<form method=\"post\" action=\"/logout\"><button type=\"submit\">Sign out</button></form>"
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title} | Hospital Management</title></head>\n<body>\n<nav>{nav}{session}</nav>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = escape(title),
        nav = nav,
        session = session,
        body = body,
    )
}

pub fn alert(kind: NoticeKind, text: &str) -> String {
    format!(
        "<div class=\"{}\" role=\"alert\">{}</div>",
        kind.css_class(),
        escape(text)
    )
}

/// Error then success alert, skipping whichever is unset.
pub fn messages(error: &Option<String>, success: &Option<String>) -> String {
    let mut out = String::new();
    if let Some(error) = error {
        out.push_str(&alert(NoticeKind::Danger, error));
    }
    if let Some(success) = success {
        out.push_str(&alert(NoticeKind::Success, success));
    }
    out
}

pub fn input(label: &str, kind: &str, name: &str, value: &str, extra: &str) -> String {
    format!(
        "<label>{label}<input type=\"{kind}\" name=\"{name}\" value=\"{value}\"{extra}></label>",
        label = label,
        kind = kind,
        name = name,
        value = escape(value),
        extra = extra,
    )
}

pub fn required(label: &str, kind: &str, name: &str, value: &str) -> String {
    input(label, kind, name, value, " required")
}

pub fn textarea(label: &str, name: &str, value: &str, extra: &str) -> String {
    format!(
        "<label>{}<textarea name=\"{}\" rows=\"3\"{}>{}</textarea></label>",
        label,
        name,
        extra,
        escape(value)
    )
}

/// `options` are `(value, text)` pairs; an empty placeholder option comes first.
pub fn select(label: &str, name: &str, placeholder: &str, options: &[(String, String)], selected: &str) -> String {
    let mut out = format!(
        "<label>{}<select name=\"{}\" required><option value=\"\">{}</option>",
        label,
        name,
        escape(placeholder)
    );
    for (value, text) in options {
        let mark = if value == selected { " selected" } else { "" };
        let _ = write!(
            out,
            "<option value=\"{}\"{}>{}</option>",
            escape(value),
            mark,
            escape(text)
        );
    }
    out.push_str("</select></label>");
    out
}

/// Table with one placeholder row spanning all columns when `rows` is empty.
pub fn table(headers: &[&str], rows: &[String], empty: &str) -> String {
    let mut out = String::from("<table><thead><tr>");
    for header in headers {
        let _ = write!(out, "<th>{}</th>", header);
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str(row);
    }
    if rows.is_empty() {
        let _ = write!(
            out,
            "<tr><td colspan=\"{}\" class=\"text-center\">{}</td></tr>",
            headers.len(),
            escape(empty)
        );
    }
    out.push_str("</tbody></table>");
    out
}

pub fn row(cells: &[String]) -> String {
    let mut out = String::from("<tr>");
    for cell in cells {
        let _ = write!(out, "<td>{}</td>", cell);
    }
    out.push_str("</tr>");
    out
}

pub fn render(page: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}
