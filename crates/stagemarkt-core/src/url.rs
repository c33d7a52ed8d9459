//! URL helper functions for stagemarkt.nl
//!
//! Endpoint paths of the query-hub API and builders for the public
//! internship pages.

use regex::Regex;
use reqwest::Url;

use crate::query::InternshipQuery;
use crate::types::SearchType;

/// Root of the JSON API
pub const BASE_URL: &str = "https://stagemarkt.nl/api/query-hub";

/// Root of the public site, used for links and the `Referer` header
pub const SITE_URL: &str = "https://stagemarkt.nl";

pub const INTERNSHIP_SEARCH_PATH: &str = "/education-search";
pub const INTERNSHIP_DETAIL_PATH: &str = "/education-detail";
pub const ORGANISATION_SEARCH_PATH: &str = "/organization-search";
pub const ORGANISATION_DETAIL_PATH: &str = "/organization-detail";
pub const LOCATION_SUGGESTIONS_PATH: &str = "/locatie-suggesties";
pub const COURSE_SUGGESTIONS_PATH: &str = "/opleiding-suggesties";
pub const STUDY_LOCATIONS_PATH: &str = "/study-locations";

/// Builds the endpoint URL from a base and a path
///
/// # Example
/// ```
/// use stagemarkt_core::url::{build_endpoint_url, BASE_URL, INTERNSHIP_SEARCH_PATH};
/// let url = build_endpoint_url(BASE_URL, INTERNSHIP_SEARCH_PATH);
/// assert_eq!(url, "https://stagemarkt.nl/api/query-hub/education-search");
/// ```
pub fn build_endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// URL-friendly form of an internship title
///
/// Lowercases the title, replaces slashes and whitespace runs with `-`
/// and percent-encodes whatever is left.
///
/// # Example
/// ```
/// use stagemarkt_core::url::slugify;
/// assert_eq!(slugify("Medewerker ICT/Support"), "medewerker-ict-support");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let Ok(separators) = Regex::new(r"[/\s]+") else {
        return urlencoding::encode(&lowered).into_owned();
    };
    let dashed = separators.replace_all(&lowered, "-");
    urlencoding::encode(&dashed).into_owned()
}

/// Builds the public page URL of an internship
///
/// The query string repeats the search context so the page opens with the
/// same level, type, radius, crebo code and place.
///
/// # Arguments
/// * `id` - Internship id (`leerplaatsId`)
/// * `title` - Internship title, turned into the slug
/// * `query` - Search the internship came from
///
/// # Example
/// ```
/// use stagemarkt_core::{InternshipQuery, Level};
/// use stagemarkt_core::url::build_internship_link;
///
/// let query = InternshipQuery::new(Level::Mbo4, "Den Haag", 25998);
/// let link = build_internship_link("abc-123", "Software Developer", &query);
/// assert_eq!(
///     link,
///     "https://stagemarkt.nl/stages/software-developer_abc-123?niveau=4&type=1&range=25&crebocode=25998&plaatsPostcode=Den+Haag"
/// );
/// ```
pub fn build_internship_link(id: &str, title: &str, query: &InternshipQuery) -> String {
    let page = format!("{}/stages/{}_{}", SITE_URL, slugify(title), id.trim());
    let search_type = query.search_type.unwrap_or(SearchType::Internship);
    let params = [
        ("niveau", query.level.value().to_string()),
        ("type", search_type.value().to_string()),
        ("range", query.radius.km().to_string()),
        ("crebocode", query.crebo_code.to_string()),
        ("plaatsPostcode", query.place.trim().to_string()),
    ];

    match Url::parse_with_params(&page, &params) {
        Ok(url) => url.to_string(),
        Err(_) => page,
    }
}
