use serde::{Deserialize, Serialize};

pub const DEMO_EMAIL: &str = "testuser@test.com";
pub const DEMO_PASSWORD: &str = "password";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
