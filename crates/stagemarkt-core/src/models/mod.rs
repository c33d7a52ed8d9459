//! Typed records for the query-hub responses
//!
//! Records deserialize from the service's Dutch camelCase names and
//! serialize with their Rust field names, which the exporter uses as
//! column paths (`organisation.name`, `address.city`).

mod address;
mod core_task;
pub(crate) mod de;
mod internship;
mod organisation;
mod study_location;
mod suggestion;

use serde::{Deserialize, Serialize};

pub use address::{Address, Coordinates, Country};
pub use core_task::{CoreTask, Subtask};
pub use de::parse_timestamp;
pub use internship::{Allowance, Image, Internship, InternshipDetail, Qualification};
pub use organisation::{
    AccreditedQualification, Accreditation, ContactPerson, Equivalent, Organisation,
    OrganisationDetail,
};
pub use study_location::StudyLocation;
pub use suggestion::{Course, CourseSuggestions, Location, LocationSuggestions, Place};

use de::{lenient_u32, nullable};

/// One page of a paginated search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchPage<T> {
    #[serde(rename(deserialize = "totalCount"), default, deserialize_with = "nullable")]
    pub total_count: u64,
    #[serde(rename(deserialize = "totalPages"), default, deserialize_with = "lenient_u32")]
    pub total_pages: u32,
    #[serde(rename(deserialize = "pageNumber"), default, deserialize_with = "lenient_u32")]
    pub page_number: u32,
    #[serde(rename(deserialize = "hasNextPage"), default)]
    pub has_next_page: Option<bool>,
    #[serde(rename(deserialize = "hasPreviousPage"), default)]
    pub has_previous_page: Option<bool>,
    /// Facets with hit counts for the current search
    #[serde(default, deserialize_with = "nullable")]
    pub filters: Vec<Filter>,
    #[serde(default, deserialize_with = "nullable")]
    pub items: Vec<T>,
}

impl<T> SearchPage<T> {
    pub fn filter(&self, id: &str) -> Option<&Filter> {
        self.filters.iter().find(|f| f.id == id)
    }
}

/// Search facet such as `sectoren` or `sbi`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub options: Vec<FilterOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOption {
    #[serde(deserialize_with = "lenient_u32")]
    pub hits: u32,
    /// GUID usable as a filter value
    #[serde(deserialize_with = "nullable")]
    pub id: String,
    #[serde(deserialize_with = "nullable")]
    pub label: String,
}
