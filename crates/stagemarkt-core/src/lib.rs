//! Stagemarkt Core Library
//!
//! Async client for the internship search of stagemarkt.nl, with export of
//! the results to CSV, JSON and Excel.
//!
//! # Overview
//!
//! This crate covers the whole path from a search to a file:
//! - Request builders for internship, organisation, location, course and
//!   study-location queries
//! - Rate-limited HTTP client with page-by-page collection up to a limit
//! - Typed records mapped from the Dutch JSON payloads
//! - Column-based exporters for CSV, JSON and Excel
//!
//! # Example
//!
//! ```no_run
//! use stagemarkt_core::export::{Column, export};
//! use stagemarkt_core::{InternshipQuery, Level, Radius, SearchFilters, Sector, StagemarktClient};
//!
//! #[tokio::main]
//! async fn main() -> stagemarkt_core::Result<()> {
//!     let client = StagemarktClient::new()?;
//!
//!     let query = InternshipQuery::new(Level::Mbo4, "Amsterdam", 25998)
//!         .radius(Radius::Km10)
//!         .limit(Some(50))
//!         .filters(SearchFilters::new().sector(Sector::Ict));
//!
//!     let internships = client.search_internships(&query).await?;
//!     for internship in &internships {
//!         println!("{} - {}", internship.title, internship.link(&query));
//!     }
//!
//!     let columns = vec![
//!         Column::path("title"),
//!         Column::new("Bedrijf", "organisation.name"),
//!         Column::new("Plaats", "address.city"),
//!     ];
//!     export("stages.xlsx", &internships, &columns)?;
//!     Ok(())
//! }
//! ```
//!
//! # Pacing
//!
//! Requests are spaced by [`RateLimiter`], one per second unless
//! [`ClientConfig::requests_per_second`] says otherwise. A search without a
//! limit walks every result page.

mod client;
mod error;
pub mod export;
pub mod filters;
pub mod models;
pub mod pagination;
pub mod parser;
pub mod query;
mod stagemarkt;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, QueryHubClient, RateLimiter};

// Re-export error types
pub use error::{Result, StagemarktError};

// Re-export main client API
pub use stagemarkt::StagemarktClient;

// Re-export search vocabulary
pub use filters::{FilterValue, SearchFilters};
pub use query::{InternshipQuery, OrganisationQuery};
pub use types::{
    Catalogue, CompanyType, Feature, LearningPath, Level, LocationType, Radius, SearchType, Sector,
};

// Re-export records
pub use models::{
    Address, Course, CourseSuggestions, Internship, InternshipDetail, Location,
    LocationSuggestions, Organisation, OrganisationDetail, SearchPage, StudyLocation,
};

// Re-export exporters
pub use export::{Column, CsvExporter, ExportFormat, JsonExporter, XlsxExporter};
