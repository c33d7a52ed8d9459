use serde::{Deserialize, Serialize};

use super::de::nullable;

/// Postal address of an organisation, internship or school
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    #[serde(rename(deserialize = "straat"), deserialize_with = "nullable")]
    pub street: String,
    #[serde(rename(deserialize = "huisnummer"), deserialize_with = "nullable")]
    pub house_number: String,
    #[serde(deserialize_with = "nullable")]
    pub postcode: String,
    #[serde(rename(deserialize = "plaats"), deserialize_with = "nullable")]
    pub city: String,
    pub extra: Option<String>,
    /// Place used for distance calculations, can differ from `city`
    #[serde(rename(deserialize = "locatiePlaats"))]
    pub location_place: Option<String>,
    #[serde(rename(deserialize = "regioId"))]
    pub region_id: Option<String>,
    #[serde(rename(deserialize = "coordinaten"))]
    pub coordinates: Option<Coordinates>,
    #[serde(rename(deserialize = "land"))]
    pub country: Option<Country>,
}

impl Address {
    /// Single line form: `Street 1, 1234AB City`
    pub fn one_line(&self) -> String {
        let street = [self.street.trim(), self.house_number.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        let town = [self.postcode.trim(), self.city.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        [street, town]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn lat(&self) -> Option<f64> {
        self.coordinates.as_ref().map(|c| c.lat)
    }

    pub fn lon(&self) -> Option<f64> {
        self.coordinates.as_ref().map(|c| c.lon)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    #[serde(deserialize_with = "nullable")]
    pub lat: f64,
    #[serde(deserialize_with = "nullable")]
    pub lon: f64,
}

/// Country of an address
///
/// Search responses name it `naam`, some nested organisation payloads `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CountryPayload")]
pub struct Country {
    pub code: String,
    pub id: String,
    pub name: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CountryPayload {
    code: Option<String>,
    id: Option<String>,
    naam: Option<String>,
    name: Option<String>,
}

impl From<CountryPayload> for Country {
    fn from(payload: CountryPayload) -> Self {
        let name = payload
            .naam
            .filter(|n| !n.trim().is_empty())
            .or(payload.name)
            .unwrap_or_default();
        Self {
            code: payload.code.unwrap_or_default(),
            id: payload.id.unwrap_or_default(),
            name,
        }
    }
}
