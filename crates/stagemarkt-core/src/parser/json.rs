//! Response body parsers for the query-hub endpoints
//!
//! Search and detail endpoints answer with the record at the top level.
//! The suggestion endpoints wrap theirs in `{"status", "body": {"data"}}`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, StagemarktError};
use crate::models::{
    CourseSuggestions, InternshipDetail, Location, LocationSuggestions, OrganisationDetail,
    SearchPage, StudyLocation,
};

/// Parses one page of a paginated search
///
/// # Errors
/// `JsonError` if the body is not JSON or does not match the page shape
pub fn parse_search_page<T: DeserializeOwned>(body: &str) -> Result<SearchPage<T>> {
    Ok(serde_json::from_str(body)?)
}

/// Parses an internship detail and fills its internship id
pub fn parse_internship_detail(body: &str) -> Result<InternshipDetail> {
    let detail: InternshipDetail = serde_json::from_str(body)?;
    Ok(detail.normalize())
}

/// Parses an organisation detail and fills its e-mail
pub fn parse_organisation_detail(body: &str) -> Result<OrganisationDetail> {
    let detail: OrganisationDetail = serde_json::from_str(body)?;
    Ok(detail.normalize())
}

/// Parses location suggestions from `body.data[]`
///
/// A response without the envelope yields no suggestions.
pub fn parse_location_suggestions(body: &str) -> Result<LocationSuggestions> {
    let items: Vec<Location> = envelope_data(body)?;
    Ok(LocationSuggestions { items })
}

/// Parses course suggestions from `body.data`
pub fn parse_course_suggestions(body: &str) -> Result<CourseSuggestions> {
    envelope_data(body)
}

/// Parses the study location list, a bare JSON array
pub fn parse_study_locations(body: &str) -> Result<Vec<StudyLocation>> {
    let value: Value = serde_json::from_str(body)?;
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Null => Ok(Vec::new()),
        other => Err(StagemarktError::ParseError(format!(
            "expected a list of study locations, got {}",
            kind_of(&other)
        ))),
    }
}

fn envelope_data<T: DeserializeOwned + Default>(body: &str) -> Result<T> {
    let value: Value = serde_json::from_str(body)?;
    match value.pointer("/body/data") {
        Some(Value::Null) | None => {
            debug!("response has no body.data, using empty result");
            Ok(T::default())
        }
        Some(data) => Ok(T::deserialize(data)?),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Internship, Organisation};
    use crate::types::LocationType;

    #[test]
    fn test_parse_search_page() {
        let body = r#"{
            "totalCount": 1, "totalPages": 1, "pageNumber": 1,
            "hasNextPage": false, "hasPreviousPage": false,
            "filters": [],
            "items": [{"id": "o1", "naam": "Acme", "aantalLeerplaatsen": 2}]
        }"#;
        let page: SearchPage<Organisation> = parse_search_page(body).unwrap();
        assert_eq!(page.items[0].name, "Acme");
        assert_eq!(page.has_next_page, Some(false));
    }

    #[test]
    fn test_parse_search_page_rejects_wrong_shape() {
        let result = parse_search_page::<Internship>(r#"{"items": "nope"}"#);
        assert!(matches!(result, Err(StagemarktError::JsonError(_))));
    }

    #[test]
    fn test_parse_internship_detail_fills_id() {
        let detail = parse_internship_detail(r#"{"id": "lp-1", "titel": "Stage"}"#).unwrap();
        assert_eq!(detail.internship.internship_id, "lp-1");
        assert_eq!(detail.id, "lp-1");
    }

    #[test]
    fn test_parse_internship_detail_keeps_existing_id() {
        let detail =
            parse_internship_detail(r#"{"id": "x", "leerplaatsId": "lp-2"}"#).unwrap();
        assert_eq!(detail.internship.internship_id, "lp-2");
    }

    #[test]
    fn test_parse_organisation_detail_email() {
        let detail =
            parse_organisation_detail(r#"{"id": "o", "naam": "N", "emailadres": "a@b.nl"}"#)
                .unwrap();
        assert_eq!(detail.organisation.email.as_deref(), Some("a@b.nl"));
    }

    #[test]
    fn test_parse_location_suggestions() {
        let body = r#"{"status": 200, "body": {"data": [
            {"suggestie": "Utrecht", "type": "Plaats", "plaats": {"naam": "Utrecht"}}
        ]}}"#;
        let suggestions = parse_location_suggestions(body).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions.items[0].kind, Some(LocationType::Place));
    }

    #[test]
    fn test_parse_location_suggestions_without_envelope() {
        let suggestions = parse_location_suggestions(r#"{"status": 200}"#).unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_parse_course_suggestions() {
        let body = r#"{"status": 200, "body": {"data": {
            "hasNextPage": true, "pageNumber": 1, "totalCount": 30, "totalPages": 2,
            "items": [{"creboCode": 25604, "label": "Allround kapper"}]
        }}}"#;
        let courses = parse_course_suggestions(body).unwrap();
        assert!(courses.has_next_page);
        assert_eq!(courses.items[0].crebo_code, Some(25604));
    }

    #[test]
    fn test_parse_study_locations() {
        let locations =
            parse_study_locations(r#"[{"schoolName": "Mondriaan"}, {"schoolName": "ROC"}]"#)
                .unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[1].school_name, "ROC");

        match parse_study_locations(r#"{"error": true}"#) {
            Err(StagemarktError::ParseError(msg)) => assert!(msg.contains("an object")),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }
}
