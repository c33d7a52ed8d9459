//! Main client API for stagemarkt
//!
//! Combines the paced HTTP client, the request builders, the paginator
//! and the response parsers.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::{ClientConfig, QueryHubClient};
use crate::error::{Result, StagemarktError};
use crate::models::{
    CourseSuggestions, Internship, InternshipDetail, LocationSuggestions, Organisation,
    OrganisationDetail, SearchPage, StudyLocation,
};
use crate::pagination::Paginator;
use crate::parser::{
    parse_course_suggestions, parse_internship_detail, parse_location_suggestions,
    parse_organisation_detail, parse_search_page, parse_study_locations,
};
use crate::query::{
    InternshipQuery, OrganisationQuery, Params, course_params, detail_params, location_params,
    study_location_params,
};
use crate::types::Level;
use crate::url::{
    COURSE_SUGGESTIONS_PATH, INTERNSHIP_DETAIL_PATH, INTERNSHIP_SEARCH_PATH,
    LOCATION_SUGGESTIONS_PATH, ORGANISATION_DETAIL_PATH, ORGANISATION_SEARCH_PATH,
    STUDY_LOCATIONS_PATH,
};

/// Main client API for stagemarkt.nl
///
/// Searches internships and organisations, fetches their details and
/// looks up locations, courses and study locations.
pub struct StagemarktClient {
    http: QueryHubClient,
    max_page_size: usize,
}

impl StagemarktClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    /// * `config` - Base URL, pacing, timeout and page size settings
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = QueryHubClient::with_config(&config)?;
        Ok(Self {
            http,
            max_page_size: config.max_page_size,
        })
    }

    /// Search internships
    ///
    /// Walks result pages until `query.limit` items are collected or the
    /// results run out. With `limit: None` every page is fetched, which can
    /// take long for broad searches.
    ///
    /// # Errors
    /// - `InvalidInput` if the place is empty or whitespace only
    /// - `HttpError`, `RateLimited`, `UnexpectedStatus` for request failures
    /// - `JsonError` if a page does not match the expected shape
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> stagemarkt_core::Result<()> {
    /// use stagemarkt_core::{InternshipQuery, Level, StagemarktClient};
    /// let client = StagemarktClient::new()?;
    /// let query = InternshipQuery::new(Level::Mbo4, "Rotterdam", 25998).limit(Some(10));
    /// for internship in client.search_internships(&query).await? {
    ///     println!("{}: {}", internship.title, internship.link(&query));
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_internships(&self, query: &InternshipQuery) -> Result<Vec<Internship>> {
        let params = query.to_params()?;
        self.collect(INTERNSHIP_SEARCH_PATH, params, query.limit).await
    }

    /// Search internships and fetch the detail of every hit
    ///
    /// Details are requested one after another, so this costs one extra
    /// request per result. Hits without an id are skipped.
    pub async fn search_internships_detailed(
        &self,
        query: &InternshipQuery,
    ) -> Result<Vec<InternshipDetail>> {
        let hits = self.search_internships(query).await?;
        let mut details = Vec::with_capacity(hits.len());
        for hit in &hits {
            if hit.internship_id.trim().is_empty() {
                warn!(title = %hit.title, "internship without id, skipping detail");
                continue;
            }
            details.push(self.internship_detail(&hit.internship_id).await?);
        }
        Ok(details)
    }

    /// Fetch a single result page of an internship search
    ///
    /// The page size follows `query.limit`, capped at the configured maximum.
    ///
    /// # Arguments
    /// * `page` - 1-based page number
    pub async fn fetch_internship_page(
        &self,
        query: &InternshipQuery,
        page: u32,
    ) -> Result<SearchPage<Internship>> {
        let params = query.to_params()?;
        self.fetch_page(INTERNSHIP_SEARCH_PATH, params, query.limit, page)
            .await
    }

    /// Fetch the detail of one internship
    ///
    /// # Arguments
    /// * `id` - Internship id (`Internship::internship_id`)
    ///
    /// # Errors
    /// - `InvalidInput` if id is empty
    /// - `NotFound` if the service does not know the id
    pub async fn internship_detail(&self, id: &str) -> Result<InternshipDetail> {
        let params = detail_params(id)?;
        let body = self.http.get(INTERNSHIP_DETAIL_PATH, &params).await?;
        parse_internship_detail(&body)
    }

    /// Search recognised training companies
    pub async fn search_organisations(
        &self,
        query: &OrganisationQuery,
    ) -> Result<Vec<Organisation>> {
        let params = query.to_params()?;
        self.collect(ORGANISATION_SEARCH_PATH, params, query.limit)
            .await
    }

    /// Search organisations and fetch the detail of every hit
    pub async fn search_organisations_detailed(
        &self,
        query: &OrganisationQuery,
    ) -> Result<Vec<OrganisationDetail>> {
        let hits = self.search_organisations(query).await?;
        let mut details = Vec::with_capacity(hits.len());
        for hit in &hits {
            if hit.id.trim().is_empty() {
                warn!(name = %hit.name, "organisation without id, skipping detail");
                continue;
            }
            details.push(self.organisation_detail(&hit.id).await?);
        }
        Ok(details)
    }

    /// Fetch a single result page of an organisation search
    pub async fn fetch_organisation_page(
        &self,
        query: &OrganisationQuery,
        page: u32,
    ) -> Result<SearchPage<Organisation>> {
        let params = query.to_params()?;
        self.fetch_page(ORGANISATION_SEARCH_PATH, params, query.limit, page)
            .await
    }

    /// Fetch the detail of one organisation
    pub async fn organisation_detail(&self, id: &str) -> Result<OrganisationDetail> {
        let params = detail_params(id)?;
        let body = self.http.get(ORGANISATION_DETAIL_PATH, &params).await?;
        parse_organisation_detail(&body)
    }

    /// Suggest places, regions and postcodes for a search term
    ///
    /// The endpoint answers HTTP 500 for terms without matches; that is
    /// returned as an empty result.
    pub async fn search_locations(&self, term: &str) -> Result<LocationSuggestions> {
        let params = location_params(term)?;
        match self.http.get(LOCATION_SUGGESTIONS_PATH, &params).await {
            Ok(body) => parse_location_suggestions(&body),
            Err(StagemarktError::UnexpectedStatus { status: 500, .. }) => {
                warn!(term, "location suggestions answered 500, treating as no matches");
                Ok(LocationSuggestions::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Suggest courses of a level, optionally narrowed by a term
    ///
    /// # Arguments
    /// * `level` - MBO level
    /// * `term` - Name or crebo code fragment; `None` lists the level's courses
    /// * `limit` - Page size asked from the service
    pub async fn search_courses(
        &self,
        level: Level,
        term: Option<&str>,
        limit: usize,
    ) -> Result<CourseSuggestions> {
        let params = course_params(level, term, limit);
        let body = self.http.get(COURSE_SUGGESTIONS_PATH, &params).await?;
        parse_course_suggestions(&body)
    }

    /// School locations offering a course near a coordinate
    pub async fn search_study_locations(
        &self,
        crebo_code: u32,
        lat: f64,
        lon: f64,
    ) -> Result<Vec<StudyLocation>> {
        let params = study_location_params(crebo_code, lat, lon);
        let body = self.http.get(STUDY_LOCATIONS_PATH, &params).await?;
        parse_study_locations(&body)
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
        limit: Option<usize>,
        page: u32,
    ) -> Result<SearchPage<T>> {
        if page == 0 {
            return Err(StagemarktError::InvalidInput(
                "page numbers start at 1".to_string(),
            ));
        }
        let page_size = Paginator::<T>::new(limit, self.max_page_size).page_size();
        let body = self
            .http
            .get(path, &with_paging(params, page_size, page))
            .await?;
        parse_search_page(&body)
    }

    async fn collect<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
        limit: Option<usize>,
    ) -> Result<Vec<T>> {
        let mut paginator = Paginator::new(limit, self.max_page_size);
        let page_size = paginator.page_size();

        while let Some(page) = paginator.next_page() {
            let body = self
                .http
                .get(path, &with_paging(params.clone(), page_size, page))
                .await?;
            let result: SearchPage<T> = parse_search_page(&body)?;
            debug!(
                endpoint = path,
                page,
                items = result.items.len(),
                total = result.total_count,
                "collected page"
            );
            paginator.absorb(result);
        }

        debug!(endpoint = path, collected = paginator.collected(), "search finished");
        Ok(paginator.into_items())
    }
}

fn with_paging(mut params: Params, page_size: usize, page: u32) -> Params {
    params.push(("pageSize".to_string(), page_size.to_string()));
    params.push(("page".to_string(), page.to_string()));
    params
}
