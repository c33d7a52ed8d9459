use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::core_task::CoreTask;
use super::de::{lenient_level, lenient_u32, nullable, parse_timestamp};
use crate::parser::html::html_to_text;
use crate::types::Level;

/// Recognised training company (leerbedrijf)
///
/// Appears as a search result and nested inside internships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organisation {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename(deserialize = "leerbedrijfId"), deserialize_with = "nullable")]
    pub company_id: String,
    #[serde(rename(deserialize = "naam"), deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename(deserialize = "logoUrl"))]
    pub logo_url: Option<String>,
    #[serde(rename(deserialize = "vestigingsadres"))]
    pub address: Option<Address>,
    #[serde(rename(deserialize = "aantalLeerplaatsen"), deserialize_with = "lenient_u32")]
    pub internship_count: u32,
    #[serde(rename(deserialize = "afstand"))]
    pub distance: Option<f64>,
    #[serde(rename(deserialize = "bedrijfsgrootte"))]
    pub company_size: Option<String>,
    #[serde(alias = "emailadres")]
    pub email: Option<String>,
    #[serde(rename(deserialize = "kenmerken"), deserialize_with = "nullable")]
    pub features: Vec<String>,
    #[serde(rename(deserialize = "leidenVaakOp"), deserialize_with = "nullable")]
    pub often_trains: bool,
    pub website: Option<String>,
    #[serde(rename(deserialize = "omschrijving"))]
    pub description: Option<String>,
}

impl Organisation {
    /// Description with markup removed
    pub fn description_text(&self) -> Option<String> {
        self.description.as_deref().map(html_to_text)
    }
}

/// Organisation with the fields only the detail endpoint returns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganisationDetail {
    #[serde(flatten)]
    pub organisation: Organisation,
    /// E-mail as the detail endpoint names it (`emailadres`);
    /// [`OrganisationDetail::normalize`] moves it into `organisation.email`
    #[serde(rename(deserialize = "emailadres"), skip_serializing)]
    pub email_address: Option<String>,
    #[serde(rename(deserialize = "telefoonnummer"))]
    pub phone: Option<String>,
    #[serde(rename(deserialize = "soortBedrijf"))]
    pub company_type: Option<String>,
    #[serde(rename(deserialize = "informatieLerenWerken"))]
    pub work_learning_info: Option<String>,
    #[serde(rename(deserialize = "informatieStudent"))]
    pub student_info: Option<String>,
    #[serde(rename(deserialize = "personen"), deserialize_with = "nullable")]
    pub contact_people: Vec<ContactPerson>,
    /// Open placements, kept as returned
    #[serde(rename(deserialize = "leerplaatsen"), deserialize_with = "nullable")]
    pub vacancies: Vec<serde_json::Value>,
    #[serde(rename(deserialize = "erkenning"))]
    pub accreditation: Option<Accreditation>,
}

impl OrganisationDetail {
    /// Fill `organisation.email` from the detail-only field name
    pub fn normalize(mut self) -> Self {
        if self.organisation.email.is_none() {
            self.organisation.email = self.email_address.take();
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPerson {
    pub email: Option<String>,
    #[serde(rename(deserialize = "firstName"))]
    pub first_name: Option<String>,
    pub initials: Option<String>,
    /// Surname prefix such as "van der"
    pub insertion: Option<String>,
    #[serde(rename(deserialize = "lastName"))]
    pub last_name: Option<String>,
    pub mobile: Option<String>,
    pub phone: Option<String>,
}

impl ContactPerson {
    /// First name (or initials), insertion and last name joined by spaces
    pub fn full_name(&self) -> String {
        let first = self.first_name.as_deref().or(self.initials.as_deref());
        [first, self.insertion.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Accreditation (erkenning) of a training company
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Accreditation {
    #[serde(rename(deserialize = "startdatum"))]
    pub start_date: Option<String>,
    #[serde(rename(deserialize = "einddatum"))]
    pub end_date: Option<String>,
    #[serde(rename(deserialize = "kwalificaties"), deserialize_with = "nullable")]
    pub qualifications: Vec<AccreditedQualification>,
}

impl Accreditation {
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        self.start_date.as_deref().and_then(parse_timestamp)
    }

    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.end_date.as_deref().and_then(parse_timestamp)
    }
}

/// Qualification a company is accredited to train for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccreditedQualification {
    #[serde(rename(deserialize = "crebocode"), deserialize_with = "nullable")]
    pub crebo_code: String,
    #[serde(rename(deserialize = "kwalificatie"), deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename(deserialize = "niveau"), deserialize_with = "lenient_level")]
    pub level: Option<Level>,
    pub sector: Option<String>,
    #[serde(rename(deserialize = "sectorId"))]
    pub sector_id: Option<String>,
    #[serde(rename(deserialize = "startdatum"))]
    pub start_date: Option<String>,
    #[serde(rename(deserialize = "einddatum"))]
    pub end_date: Option<String>,
    #[serde(rename(deserialize = "equivalenten"), deserialize_with = "nullable")]
    pub equivalents: Vec<Equivalent>,
    #[serde(rename(deserialize = "kerntaken"), deserialize_with = "nullable")]
    pub core_tasks: Vec<CoreTask>,
}

impl AccreditedQualification {
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        self.start_date.as_deref().and_then(parse_timestamp)
    }

    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.end_date.as_deref().and_then(parse_timestamp)
    }
}

/// Qualification that counts as equivalent to an accredited one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Equivalent {
    #[serde(rename(deserialize = "crebocode"), deserialize_with = "nullable")]
    pub crebo_code: String,
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename(deserialize = "naam"), deserialize_with = "nullable")]
    pub name: String,
}
