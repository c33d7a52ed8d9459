//! Extra search filters
//!
//! Company types, sectors, learning paths and keywords, convertible to
//! query parameters and recoverable from a stagemarkt.nl search URL.

use reqwest::Url;

use crate::error::{Result, StagemarktError};
use crate::types::{Catalogue, CompanyType, LearningPath, Sector};

/// A filter value: either a known catalogue entry or a raw GUID
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue<T> {
    Known(T),
    Raw(String),
}

impl<T: Catalogue> FilterValue<T> {
    /// Wire value sent to the API
    pub fn id(&self) -> &str {
        match self {
            FilterValue::Known(item) => item.id(),
            FilterValue::Raw(raw) => raw,
        }
    }

    /// Map a GUID to the catalogue when possible, keep it raw otherwise
    pub fn parse(id: &str) -> Self {
        T::from_id(id)
            .map(FilterValue::Known)
            .unwrap_or_else(|| FilterValue::Raw(id.to_string()))
    }
}

impl<T> From<T> for FilterValue<T>
where
    T: Catalogue,
{
    fn from(item: T) -> Self {
        FilterValue::Known(item)
    }
}

/// Additional filters for internship and organisation searches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub company_types: Vec<FilterValue<CompanyType>>,
    pub sectors: Vec<FilterValue<Sector>>,
    pub learning_paths: Vec<FilterValue<LearningPath>>,
    pub keywords: Vec<String>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.company_types.is_empty()
            && self.sectors.is_empty()
            && self.learning_paths.is_empty()
            && self.keywords.is_empty()
    }

    /// Builder-style variant of [`SearchFilters::add_company_type`]
    pub fn company_type(mut self, value: impl Into<FilterValue<CompanyType>>) -> Self {
        self.add_company_type(value);
        self
    }

    pub fn sector(mut self, value: impl Into<FilterValue<Sector>>) -> Self {
        self.add_sector(value);
        self
    }

    pub fn learning_path(mut self, value: impl Into<FilterValue<LearningPath>>) -> Self {
        self.add_learning_path(value);
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.add_keyword(keyword);
        self
    }

    pub fn add_company_type(&mut self, value: impl Into<FilterValue<CompanyType>>) {
        push_unique(&mut self.company_types, value.into());
    }

    pub fn add_sector(&mut self, value: impl Into<FilterValue<Sector>>) {
        push_unique(&mut self.sectors, value.into());
    }

    pub fn add_learning_path(&mut self, value: impl Into<FilterValue<LearningPath>>) {
        push_unique(&mut self.learning_paths, value.into());
    }

    /// Add a keyword; blank keywords are ignored
    pub fn add_keyword(&mut self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        let trimmed = keyword.trim();
        if !trimmed.is_empty() {
            push_unique(&mut self.keywords, trimmed.to_string());
        }
    }

    /// Add every value from `other` that is not present yet, keeping order
    pub fn merge(&mut self, other: &SearchFilters) {
        for value in &other.company_types {
            push_unique(&mut self.company_types, value.clone());
        }
        for value in &other.sectors {
            push_unique(&mut self.sectors, value.clone());
        }
        for value in &other.learning_paths {
            push_unique(&mut self.learning_paths, value.clone());
        }
        for keyword in &other.keywords {
            push_unique(&mut self.keywords, keyword.clone());
        }
    }

    /// Convert to query parameters
    ///
    /// List filters repeat their key once per value. Keywords travel as one
    /// space-separated `keyword` value, which the form encoder turns into
    /// `a+b` like the site's own search URLs.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        params.extend(
            self.company_types
                .iter()
                .map(|v| ("companyType".to_string(), v.id().to_string())),
        );
        params.extend(
            self.sectors
                .iter()
                .map(|v| ("sector".to_string(), v.id().to_string())),
        );
        params.extend(
            self.learning_paths
                .iter()
                .map(|v| ("learningPath".to_string(), v.id().to_string())),
        );
        if !self.keywords.is_empty() {
            params.push(("keyword".to_string(), self.keywords.join(" ")));
        }
        params
    }

    /// Rebuild filters from a stagemarkt.nl search URL
    ///
    /// A `keyword` value is kept whole, so `software+developer` becomes the
    /// single keyword `software developer`.
    ///
    /// # Example
    /// ```
    /// use stagemarkt_core::{SearchFilters, Sector};
    /// use stagemarkt_core::filters::FilterValue;
    ///
    /// let filters = SearchFilters::from_url(
    ///     "https://stagemarkt.nl/stages?sector=87c539b1-192b-4418-be0e-01e2df29bee7&keyword=software",
    /// ).unwrap();
    /// assert_eq!(filters.sectors, vec![FilterValue::Known(Sector::Ict)]);
    /// assert_eq!(filters.keywords, vec!["software".to_string()]);
    /// ```
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed =
            Url::parse(url).map_err(|e| StagemarktError::InvalidUrl(format!("{}: {}", url, e)))?;

        let mut filters = SearchFilters::default();
        for (key, value) in parsed.query_pairs() {
            match key.as_ref() {
                "companyType" => filters.add_company_type(FilterValue::<CompanyType>::parse(&value)),
                "sector" => filters.add_sector(FilterValue::<Sector>::parse(&value)),
                "learningPath" => filters.add_learning_path(FilterValue::<LearningPath>::parse(&value)),
                "keyword" => filters.add_keyword(value.into_owned()),
                _ => {}
            }
        }
        Ok(filters)
    }
}

fn push_unique<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if !values.contains(&value) {
        values.push(value);
    }
}
