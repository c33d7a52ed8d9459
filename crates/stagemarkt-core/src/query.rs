//! Request builders for the search endpoints
//!
//! Turns search criteria into the query parameter lists the query-hub
//! endpoints expect. Pagination parameters are appended by the client.

use crate::error::{Result, StagemarktError};
use crate::filters::SearchFilters;
use crate::types::{Catalogue, LearningPath, Level, Radius, SearchType};

/// Site identifier sent with every query-hub request except study locations
pub const SITE_ID: &str = "STAGEMARKT";

/// Default maximum number of search results
pub const DEFAULT_LIMIT: usize = 20;

/// Default page size for course suggestions
pub const DEFAULT_COURSE_LIMIT: usize = 1000;

pub type Params = Vec<(String, String)>;

fn param(key: &str, value: impl ToString) -> (String, String) {
    (key.to_string(), value.to_string())
}

fn base_params() -> Params {
    vec![param("siteId", SITE_ID)]
}

fn require_non_empty(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StagemarktError::InvalidInput(format!(
            "{} cannot be empty",
            what
        )));
    }
    Ok(())
}

/// Search for internships (leerplaatsen)
///
/// # Example
/// ```
/// use stagemarkt_core::{InternshipQuery, Level, Radius};
///
/// let query = InternshipQuery::new(Level::Mbo4, "Amsterdam", 25998)
///     .radius(Radius::Km15)
///     .limit(Some(50));
/// let params = query.to_params().unwrap();
/// assert!(params.contains(&("range".to_string(), "15".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InternshipQuery {
    pub level: Level,
    /// Place name or postcode
    pub place: String,
    pub crebo_code: u32,
    pub radius: Radius,
    /// Maximum number of results; `None` walks every page
    pub limit: Option<usize>,
    pub search_type: Option<SearchType>,
    pub foreign_companies: bool,
    pub filters: SearchFilters,
}

impl InternshipQuery {
    pub fn new(level: Level, place: impl Into<String>, crebo_code: u32) -> Self {
        Self {
            level,
            place: place.into(),
            crebo_code,
            radius: Radius::default(),
            limit: Some(DEFAULT_LIMIT),
            search_type: None,
            foreign_companies: false,
            filters: SearchFilters::default(),
        }
    }

    pub fn radius(mut self, radius: impl Into<Radius>) -> Self {
        self.radius = radius.into();
        self
    }

    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }

    pub fn foreign_companies(mut self, include: bool) -> Self {
        self.foreign_companies = include;
        self
    }

    pub fn filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Query parameters without `pageSize`/`page`
    ///
    /// # Errors
    /// `InvalidInput` if the place is empty or whitespace only
    pub fn to_params(&self) -> Result<Params> {
        require_non_empty(&self.place, "place")?;

        let mut params = base_params();
        params.push(param("niveau", self.level.value()));
        params.push(param("plaatsPostcode", self.place.trim()));
        params.push(param("range", self.radius.km()));
        params.push(param("crebocode", self.crebo_code));
        if let Some(search_type) = self.search_type {
            params.push(param("type", search_type.value()));
        }
        params.push(param("buitenlandseBedrijven", self.foreign_companies));
        params.extend(self.filters.to_params());
        Ok(params)
    }
}

/// Search for organisations (leerbedrijven)
#[derive(Debug, Clone, PartialEq)]
pub struct OrganisationQuery {
    pub place: String,
    pub crebo_code: u32,
    pub radius: Radius,
    pub learning_path: Option<LearningPath>,
    pub filters: SearchFilters,
    pub limit: Option<usize>,
}

impl OrganisationQuery {
    pub fn new(place: impl Into<String>, crebo_code: u32) -> Self {
        Self {
            place: place.into(),
            crebo_code,
            radius: Radius::default(),
            learning_path: None,
            filters: SearchFilters::default(),
            limit: Some(DEFAULT_LIMIT),
        }
    }

    pub fn radius(mut self, radius: impl Into<Radius>) -> Self {
        self.radius = radius.into();
        self
    }

    pub fn learning_path(mut self, learning_path: LearningPath) -> Self {
        self.learning_path = Some(learning_path);
        self
    }

    pub fn filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Query parameters without `pageSize`/`page`
    ///
    /// Learning paths inside the filters are dropped; only the explicit
    /// `learning_path` is sent.
    pub fn to_params(&self) -> Result<Params> {
        require_non_empty(&self.place, "place")?;

        let mut params = base_params();
        params.push(param("plaatsPostcode", self.place.trim()));
        params.push(param("range", self.radius.km()));
        params.push(param("crebocode", self.crebo_code));
        if let Some(path) = self.learning_path {
            params.push(param("learningPath", path.id()));
        }
        params.extend(
            self.filters
                .to_params()
                .into_iter()
                .filter(|(key, _)| key != "learningPath"),
        );
        Ok(params)
    }
}

/// Parameters for the location suggestion endpoint
pub fn location_params(term: &str) -> Result<Params> {
    require_non_empty(term, "location term")?;
    let mut params = base_params();
    params.push(param("term", term.trim()));
    Ok(params)
}

/// Parameters for the course suggestion endpoint
///
/// Without a term the endpoint lists up to `limit` courses of the level.
pub fn course_params(level: Level, term: Option<&str>, limit: usize) -> Params {
    let mut params = base_params();
    params.push(param("niveau", level.value()));
    params.push(param("pageSize", limit.max(1)));
    if let Some(term) = term.map(str::trim).filter(|t| !t.is_empty()) {
        params.push(param("term", term));
    }
    params
}

/// Parameters for the detail endpoints
pub fn detail_params(id: &str) -> Result<Params> {
    require_non_empty(id, "id")?;
    let mut params = base_params();
    params.push(param("id", id.trim()));
    Ok(params)
}

/// Parameters for the study location endpoint (no `siteId`)
pub fn study_location_params(crebo_code: u32, lat: f64, lon: f64) -> Params {
    vec![
        param("crebo", crebo_code),
        param("lat", lat),
        param("lon", lon),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CompanyType, Sector};

    fn pairs(params: &[(String, String)]) -> Vec<(&str, &str)> {
        params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn test_internship_defaults() {
        let query = InternshipQuery::new(Level::Mbo4, "Amsterdam", 25998);
        assert_eq!(query.radius, Radius::Km25);
        assert_eq!(query.limit, Some(20));
        assert!(!query.foreign_companies);

        let params = query.to_params().unwrap();
        assert_eq!(
            pairs(&params),
            vec![
                ("siteId", "STAGEMARKT"),
                ("niveau", "4"),
                ("plaatsPostcode", "Amsterdam"),
                ("range", "25"),
                ("crebocode", "25998"),
                ("buitenlandseBedrijven", "false"),
            ]
        );
    }

    #[test]
    fn test_internship_all_options() {
        let query = InternshipQuery::new(Level::Mbo2, " 1012AB ", 25180)
            .radius(10)
            .search_type(SearchType::Apprenticeship)
            .foreign_companies(true)
            .filters(SearchFilters::new().sector(Sector::Ict).keyword("magazijn"));

        let params = query.to_params().unwrap();
        assert_eq!(
            pairs(&params),
            vec![
                ("siteId", "STAGEMARKT"),
                ("niveau", "2"),
                ("plaatsPostcode", "1012AB"),
                ("range", "10"),
                ("crebocode", "25180"),
                ("type", "2"),
                ("buitenlandseBedrijven", "true"),
                ("sector", "87c539b1-192b-4418-be0e-01e2df29bee7"),
                ("keyword", "magazijn"),
            ]
        );
    }

    #[test]
    fn test_internship_empty_place() {
        let query = InternshipQuery::new(Level::Mbo1, "   ", 1);
        match query.to_params() {
            Err(StagemarktError::InvalidInput(msg)) => assert!(msg.contains("empty")),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_organisation_params_drop_filter_learning_paths() {
        let query = OrganisationQuery::new("Utrecht", 25998)
            .radius(Radius::Km15)
            .learning_path(LearningPath::Bbl)
            .filters(
                SearchFilters::new()
                    .learning_path(LearningPath::Bol)
                    .company_type(CompanyType::ItConsultancy),
            );

        let params = query.to_params().unwrap();
        assert_eq!(
            pairs(&params),
            vec![
                ("siteId", "STAGEMARKT"),
                ("plaatsPostcode", "Utrecht"),
                ("range", "15"),
                ("crebocode", "25998"),
                ("learningPath", "acf992a3-efee-4537-9275-9e6b1b7a8fe3"),
                ("companyType", "2fab4f5e-b356-e011-87cd-001372415b01"),
            ]
        );
        assert!(!params.iter().any(|(k, _)| k == "niveau"));
    }

    #[test]
    fn test_location_params() {
        let params = location_params("Amster").unwrap();
        assert_eq!(pairs(&params), vec![("siteId", "STAGEMARKT"), ("term", "Amster")]);
        assert!(location_params("").is_err());
    }

    #[test]
    fn test_course_params() {
        let params = course_params(Level::Mbo3, Some("software"), 50);
        assert_eq!(
            pairs(&params),
            vec![
                ("siteId", "STAGEMARKT"),
                ("niveau", "3"),
                ("pageSize", "50"),
                ("term", "software"),
            ]
        );

        let without_term = course_params(Level::Mbo3, Some("  "), DEFAULT_COURSE_LIMIT);
        assert!(!without_term.iter().any(|(k, _)| k == "term"));
        assert!(without_term.contains(&("pageSize".to_string(), "1000".to_string())));
    }

    #[test]
    fn test_detail_params() {
        let params = detail_params("abc-123").unwrap();
        assert_eq!(pairs(&params), vec![("siteId", "STAGEMARKT"), ("id", "abc-123")]);
        assert!(matches!(detail_params(" "), Err(StagemarktError::InvalidInput(_))));
    }

    #[test]
    fn test_study_location_params() {
        let params = study_location_params(25998, 52.37, 4.89);
        assert_eq!(
            pairs(&params),
            vec![("crebo", "25998"), ("lat", "52.37"), ("lon", "4.89")]
        );
    }
}
