use serde::{Deserialize, Serialize};

use super::de::{lenient_location_type, lenient_opt_u32, nullable};
use crate::types::LocationType;

/// Suggestions for a place, region or postcode search term
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationSuggestions {
    #[serde(deserialize_with = "nullable")]
    pub items: Vec<Location>,
}

impl LocationSuggestions {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Suggestions of one kind only
    pub fn of_kind(&self, kind: LocationType) -> impl Iterator<Item = &Location> {
        self.items.iter().filter(move |l| l.kind == Some(kind))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Text to show and to pass back as `place`
    #[serde(rename(deserialize = "suggestie"), deserialize_with = "nullable")]
    pub suggestion: String,
    #[serde(rename(deserialize = "type"), deserialize_with = "lenient_location_type")]
    pub kind: Option<LocationType>,
    #[serde(rename(deserialize = "plaats"))]
    pub place: Option<Place>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Place {
    #[serde(rename(deserialize = "naam"))]
    pub name: Option<String>,
    #[serde(rename(deserialize = "gemeente"))]
    pub municipality: Option<String>,
    #[serde(rename(deserialize = "regio"))]
    pub region: Option<String>,
    #[serde(rename(deserialize = "provincie"))]
    pub province: Option<String>,
    pub postcode: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// One page of course (opleiding) suggestions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseSuggestions {
    #[serde(rename(deserialize = "hasNextPage"), deserialize_with = "nullable")]
    pub has_next_page: bool,
    #[serde(rename(deserialize = "hasPreviousPage"), deserialize_with = "nullable")]
    pub has_previous_page: bool,
    #[serde(rename(deserialize = "pageNumber"), deserialize_with = "nullable")]
    pub page_number: u32,
    #[serde(rename(deserialize = "totalCount"), deserialize_with = "nullable")]
    pub total_count: u64,
    #[serde(rename(deserialize = "totalPages"), deserialize_with = "nullable")]
    pub total_pages: u32,
    #[serde(deserialize_with = "nullable")]
    pub items: Vec<Course>,
}

impl CourseSuggestions {
    /// First course with the given crebo code
    pub fn find_crebo(&self, crebo_code: u32) -> Option<&Course> {
        self.items.iter().find(|c| c.crebo_code == Some(crebo_code))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    #[serde(rename(deserialize = "creboCode"), deserialize_with = "lenient_opt_u32")]
    pub crebo_code: Option<u32>,
    pub label: Option<String>,
    /// Label followed by the crebo code, as the site shows it
    pub value: Option<String>,
    #[serde(rename(deserialize = "equivalenten"), deserialize_with = "nullable")]
    pub equivalents: Vec<String>,
    #[serde(rename(deserialize = "synoniemen"), deserialize_with = "nullable")]
    pub synonyms: Vec<String>,
}
