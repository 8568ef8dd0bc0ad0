use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub email: String,
    pub date_of_birth: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub registered_date: Option<String>,
}

/// Create-form state for a patient. Posted to the backend as is.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub date_of_birth: String,
    pub address: String,
    pub registered_date: String,
}

impl NewPatient {
    pub fn blank(today: &str) -> Self {
        Self {
            registered_date: today.to_string(),
            ..Default::default()
        }
    }
}
