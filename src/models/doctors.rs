use std::{fmt, str::FromStr};

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Specialization {
    Cardiology,
    Neurology,
    Pediatrics,
    Orthopedics,
    Dermatology,
    #[serde(rename = "General Medicine")]
    GeneralMedicine,
}

impl Specialization {
    pub const ALL: [Specialization; 6] = [
        Specialization::Cardiology,
        Specialization::Neurology,
        Specialization::Pediatrics,
        Specialization::Orthopedics,
        Specialization::Dermatology,
        Specialization::GeneralMedicine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Specialization::Cardiology => "Cardiology",
            Specialization::Neurology => "Neurology",
            Specialization::Pediatrics => "Pediatrics",
            Specialization::Orthopedics => "Orthopedics",
            Specialization::Dermatology => "Dermatology",
            Specialization::GeneralMedicine => "General Medicine",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specialization {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match Self::ALL.iter().find(|spec| spec.as_str() == s) {
            Some(spec) => Ok(*spec),
            None => bail!("Unknown specialization '{}'", s),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub specialization: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub joined_date: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Raw create-form fields, kept as entered so a failed submit can be re-rendered.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorForm {
    pub name: String,
    pub email: String,
    pub specialization: String,
    pub phone_number: String,
    pub license_number: String,
    pub experience_years: String,
    pub joined_date: String,
    pub department: String,
    pub address: String,
}

impl DoctorForm {
    pub fn blank(today: &str) -> Self {
        Self {
            joined_date: today.to_string(),
            ..Default::default()
        }
    }

    pub fn to_request(&self) -> anyhow::Result<NewDoctor> {
        let specialization = self
            .specialization
            .parse::<Specialization>()
            .context("Wrong format on 'specialization'")?;
        let experience_years = self
            .experience_years
            .trim()
            .parse::<u32>()
            .context("Wrong format on 'experienceYears'")?;

        Ok(NewDoctor {
            name: self.name.clone(),
            email: self.email.clone(),
            specialization,
            phone_number: self.phone_number.clone(),
            license_number: self.license_number.clone(),
            experience_years,
            joined_date: self.joined_date.clone(),
            department: self.department.clone(),
            address: self.address.clone(),
        })
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub specialization: Specialization,
    pub phone_number: String,
    pub license_number: String,
    pub experience_years: u32,
    pub joined_date: String,
    pub department: String,
    pub address: String,
}
