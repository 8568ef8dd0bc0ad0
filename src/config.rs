use anyhow::{bail, Context};

use crate::api::Routing;

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_BACKEND_URL: &str = "http://localhost:4004";
const DEFAULT_LOGIN_URL: &str = "http://localhost:4005/test/login";

#[derive(Clone, Debug)]
pub struct Settings {
    pub bind: String,
    pub backend_url: String,
    pub routing: Routing,
    pub login_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            routing: Routing::Direct,
            login_url: DEFAULT_LOGIN_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind = lookup("BIND_ADDR").unwrap_or(defaults.bind);
        let backend_url = lookup("BACKEND_URL").unwrap_or(defaults.backend_url);
        let login_url = lookup("LOGIN_URL").unwrap_or(defaults.login_url);
        let routing = match lookup("API_ROUTING") {
            Some(value) => value.parse().context("Wrong format on 'API_ROUTING'")?,
            None => defaults.routing,
        };

        check_http_url(&backend_url).context("Wrong format on 'BACKEND_URL'")?;
        check_http_url(&login_url).context("Wrong format on 'LOGIN_URL'")?;

        Ok(Self {
            bind,
            backend_url: backend_url.trim_end_matches('/').to_string(),
            routing,
            login_url,
        })
    }
}

fn check_http_url(url: &str) -> anyhow::Result<()> {
    let parsed = reqwest::Url::parse(url).with_context(|| format!("'{}' is not a URL", url))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        bail!("unsupported scheme '{}'", parsed.scheme());
    }
    Ok(())
}
