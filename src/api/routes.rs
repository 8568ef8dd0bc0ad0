use std::{fmt, str::FromStr};

use anyhow::bail;

/// Which path family backend calls use. Both resolve against the same base URL.
/// Paths here are collections; `ApiClient` appends record ids as encoded segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Routing {
    /// `/api/...` and `/auth/...` paths fronted by the gateway.
    Gateway,
    /// Bare service paths, with login going to a fixed URL.
    Direct,
}

impl Routing {
    fn prefix(self) -> &'static str {
        match self {
            Routing::Gateway => "/api",
            Routing::Direct => "",
        }
    }

    pub fn patients(self) -> String {
        format!("{}/patients", self.prefix())
    }

    pub fn doctors(self) -> String {
        format!("{}/doctors", self.prefix())
    }

    pub fn doctors_by_specialization(self) -> String {
        format!("{}/doctors/specialization", self.prefix())
    }

    pub fn appointments(self) -> String {
        format!("{}/appointments", self.prefix())
    }

    pub fn patient_details(self) -> String {
        format!("{}/appointments/patient-details", self.prefix())
    }
}

pub const GATEWAY_LOGIN: &str = "/auth/login";
pub const VALIDATE_TOKEN: &str = "/auth/validate";

impl FromStr for Routing {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gateway" => Ok(Routing::Gateway),
            "direct" => Ok(Routing::Direct),
            other => bail!("expected 'gateway' or 'direct', got '{}'", other),
        }
    }
}

impl fmt::Display for Routing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Routing::Gateway => f.write_str("gateway"),
            Routing::Direct => f.write_str("direct"),
        }
    }
}
