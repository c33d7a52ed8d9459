use serde::{Deserialize, Serialize};

use super::address::Address;
use super::de::nullable;

/// School location offering a course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyLocation {
    #[serde(rename(deserialize = "locationName"), deserialize_with = "nullable")]
    pub location_name: String,
    #[serde(rename(deserialize = "schoolName"), deserialize_with = "nullable")]
    pub school_name: String,
    #[serde(rename(deserialize = "emailadres"), deserialize_with = "nullable")]
    pub email: String,
    #[serde(rename(deserialize = "telefoonnummer"), deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub website: String,
    #[serde(rename(deserialize = "logoUrl"), deserialize_with = "nullable")]
    pub logo_url: String,
    #[serde(rename(deserialize = "vestigingsadres"))]
    pub address: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_location_mapping() {
        let location: StudyLocation = serde_json::from_str(
            r#"{
                "locationName": "Campus Zuid",
                "schoolName": "ROC Amsterdam",
                "emailadres": null,
                "telefoonnummer": "020-1234567",
                "vestigingsadres": {"straat": "Europaboulevard", "huisnummer": "1", "postcode": "1079PC", "plaats": "Amsterdam"}
            }"#,
        )
        .unwrap();

        assert_eq!(location.school_name, "ROC Amsterdam");
        assert_eq!(location.email, "");
        assert_eq!(location.website, "");
        assert_eq!(
            location.address.map(|a| a.one_line()),
            Some("Europaboulevard 1, 1079PC Amsterdam".to_string())
        );
    }
}
