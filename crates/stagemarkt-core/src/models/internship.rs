use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::core_task::CoreTask;
use super::de::{lenient_learning_path, lenient_u32, nullable, parse_timestamp};
use super::organisation::Organisation;
use crate::parser::html::html_to_text;
use crate::query::InternshipQuery;
use crate::types::{Catalogue, Feature, LearningPath};
use crate::url::build_internship_link;

/// Internship or apprenticeship job (leerplaats) as listed by a search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Internship {
    #[serde(rename(deserialize = "leerplaatsId"), deserialize_with = "nullable")]
    pub internship_id: String,
    #[serde(rename(deserialize = "titel"), deserialize_with = "nullable")]
    pub title: String,
    /// Catchier title shown on the site
    #[serde(rename(deserialize = "wervendeTitel"), deserialize_with = "nullable")]
    pub recruiting_title: String,
    /// Kilometres from the searched place
    #[serde(rename(deserialize = "afstand"))]
    pub distance: Option<f64>,
    #[serde(rename(deserialize = "vergoedingen"), deserialize_with = "nullable")]
    pub allowances: Vec<Allowance>,
    #[serde(rename(deserialize = "bedragVan"))]
    pub amount_from: Option<u32>,
    #[serde(rename(deserialize = "bedragTot"))]
    pub amount_to: Option<u32>,
    #[serde(rename(deserialize = "adres"))]
    pub address: Option<Address>,
    #[serde(rename(deserialize = "leerweg"), deserialize_with = "lenient_learning_path")]
    pub learning_path: LearningPath,
    #[serde(rename(deserialize = "startdatum"))]
    pub start_date: Option<String>,
    /// Feature GUIDs, see [`Internship::known_features`]
    #[serde(rename(deserialize = "kenmerken"), deserialize_with = "nullable")]
    pub features: Vec<String>,
    #[serde(rename(deserialize = "kwalificatie"))]
    pub qualification: Option<Qualification>,
    #[serde(rename(deserialize = "organisatie"))]
    pub organisation: Option<Organisation>,
    #[serde(rename(deserialize = "afbeeldingen"), deserialize_with = "nullable")]
    pub images: Vec<Image>,
    #[serde(rename(deserialize = "gewijzigdDatum"))]
    pub modified_date: Option<String>,
    #[serde(rename(deserialize = "dagenPerWeek"), deserialize_with = "lenient_u32")]
    pub days_per_week: u32,
}

impl Internship {
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        self.start_date.as_deref().and_then(parse_timestamp)
    }

    pub fn modified_at(&self) -> Option<NaiveDateTime> {
        self.modified_date.as_deref().and_then(parse_timestamp)
    }

    /// Features that map to a known [`Feature`]; unknown GUIDs are skipped
    pub fn known_features(&self) -> Vec<Feature> {
        self.features
            .iter()
            .filter_map(|id| Feature::from_id(id))
            .collect()
    }

    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features
            .iter()
            .any(|id| id.eq_ignore_ascii_case(feature.id()))
    }

    /// Public page of this internship in the context of `query`
    pub fn link(&self, query: &InternshipQuery) -> String {
        build_internship_link(&self.internship_id, &self.title, query)
    }

    pub fn organisation_name(&self) -> Option<&str> {
        self.organisation.as_ref().map(|o| o.name.as_str())
    }
}

/// Qualification the internship trains for
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Qualification {
    #[serde(rename(deserialize = "niveaunaam"), deserialize_with = "nullable")]
    pub level_name: String,
    #[serde(rename(deserialize = "crebocode"), deserialize_with = "lenient_u32")]
    pub crebo_code: u32,
}

/// Allowance offered on top of or instead of pay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Allowance {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(rename(deserialize = "omschrijving"), deserialize_with = "nullable")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(rename(deserialize = "opslagId"), deserialize_with = "nullable")]
    pub storage_id: String,
    #[serde(rename(deserialize = "volgnummer"), deserialize_with = "lenient_u32")]
    pub sequence: u32,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
}

/// Internship with the fields only the detail endpoint returns
///
/// The detail payload names the internship id `id` instead of
/// `leerplaatsId`; [`InternshipDetail::normalize`] copies it over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternshipDetail {
    #[serde(flatten)]
    pub internship: Internship,
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    /// Number of open places
    #[serde(rename(deserialize = "aantal"), deserialize_with = "lenient_u32")]
    pub count: u32,
    #[serde(rename(deserialize = "contactpersoon"), deserialize_with = "nullable")]
    pub contact_person: String,
    #[serde(rename(deserialize = "emailadres"), deserialize_with = "nullable")]
    pub email: String,
    #[serde(rename(deserialize = "telefoon"), deserialize_with = "nullable")]
    pub phone: String,
    #[serde(rename(deserialize = "omschrijving"), deserialize_with = "nullable")]
    pub description: String,
    #[serde(rename(deserialize = "vaardigheden"), deserialize_with = "nullable")]
    pub skills: String,
    /// What the company offers the student
    #[serde(rename(deserialize = "aanbieden"), deserialize_with = "nullable")]
    pub offering: String,
    #[serde(deserialize_with = "nullable")]
    pub website: String,
    #[serde(rename(deserialize = "kerntaken"), deserialize_with = "nullable")]
    pub core_tasks: Vec<CoreTask>,
    #[serde(deserialize_with = "nullable")]
    pub media: Vec<String>,
    #[serde(rename(deserialize = "studyDescription"))]
    pub study_description: Option<String>,
    #[serde(rename(deserialize = "einddatum"))]
    pub end_date: Option<String>,
}

impl InternshipDetail {
    /// Fill the internship id from `id` when the payload left it out
    pub fn normalize(mut self) -> Self {
        if self.internship.internship_id.is_empty() {
            self.internship.internship_id = self.id.clone();
        }
        self
    }

    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.end_date.as_deref().and_then(parse_timestamp)
    }

    pub fn description_text(&self) -> String {
        html_to_text(&self.description)
    }

    pub fn skills_text(&self) -> String {
        html_to_text(&self.skills)
    }

    pub fn offering_text(&self) -> String {
        html_to_text(&self.offering)
    }
}
