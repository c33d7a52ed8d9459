//! Response parsers for stagemarkt
//!
//! JSON bodies of the query-hub endpoints and the HTML fragments some
//! of their fields carry.

pub mod html;
pub mod json;

pub use html::html_to_text;
pub use json::{
    parse_course_suggestions, parse_internship_detail, parse_location_suggestions,
    parse_organisation_detail, parse_search_page, parse_study_locations,
};
