//! Search parameter vocabulary for stagemarkt
//!
//! Levels, radii, learning paths and the GUID catalogues the search
//! endpoints accept as filter values.

use serde::{Deserialize, Serialize};

/// MBO education level, 1 through 4
///
/// Serialized as the bare integer, which is also the `niveau` wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    Mbo1,
    Mbo2,
    Mbo3,
    Mbo4,
}

impl Level {
    pub fn value(self) -> u8 {
        match self {
            Level::Mbo1 => 1,
            Level::Mbo2 => 2,
            Level::Mbo3 => 3,
            Level::Mbo4 => 4,
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::Mbo1),
            2 => Ok(Level::Mbo2),
            3 => Ok(Level::Mbo3),
            4 => Ok(Level::Mbo4),
            other => Err(format!("unknown MBO level: {}", other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.value()
    }
}

/// Search radius around the given place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Radius {
    Km5,
    Km10,
    Km15,
    #[default]
    Km25,
    Km100,
    /// Any other distance; the site itself only offers the presets
    Custom(u32),
}

impl Radius {
    /// Radius in kilometres, the `range` wire value
    pub fn km(self) -> u32 {
        match self {
            Radius::Km5 => 5,
            Radius::Km10 => 10,
            Radius::Km15 => 15,
            Radius::Km25 => 25,
            Radius::Km100 => 100,
            Radius::Custom(km) => km,
        }
    }
}

impl From<u32> for Radius {
    fn from(km: u32) -> Self {
        match km {
            5 => Radius::Km5,
            10 => Radius::Km10,
            15 => Radius::Km15,
            25 => Radius::Km25,
            100 => Radius::Km100,
            other => Radius::Custom(other),
        }
    }
}

/// Learning path: school-based (BOL) or work-based (BBL)
///
/// Responses name the path literally (`"BOL"`), search parameters use the GUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LearningPath {
    #[default]
    #[serde(rename = "BOL")]
    Bol,
    #[serde(rename = "BBL")]
    Bbl,
}

impl Catalogue for LearningPath {
    const ALL: &'static [LearningPath] = &[LearningPath::Bol, LearningPath::Bbl];

    /// GUID sent as `learningPath`
    fn id(self) -> &'static str {
        match self {
            LearningPath::Bbl => "acf992a3-efee-4537-9275-9e6b1b7a8fe3",
            LearningPath::Bol => "2468c1a0-ad7b-4209-b27b-b12ae0e3d1d2",
        }
    }
}

/// Kind of placement to search for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
    /// Regular internship (stage)
    Internship,
    /// Apprenticeship job (leerbaan)
    Apprenticeship,
}

impl SearchType {
    /// The `type` wire value
    pub fn value(self) -> u8 {
        match self {
            SearchType::Internship => 1,
            SearchType::Apprenticeship => 2,
        }
    }
}

/// A fixed set of values the service identifies by GUID
pub trait Catalogue: Copy + 'static {
    const ALL: &'static [Self];

    /// GUID used as the filter parameter value
    fn id(self) -> &'static str;

    /// Case-insensitive reverse lookup of [`Catalogue::id`]
    fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|item| item.id().eq_ignore_ascii_case(id))
    }
}

macro_rules! guid_catalogue {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $id:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Catalogue for $name {
            const ALL: &'static [$name] = &[$($name::$variant),+];

            fn id(self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }
        }
    };
}

guid_catalogue! {
    /// Placement features (kenmerken)
    Feature {
        TailoredGuidance => "fb16c3ec-9641-e911-a965-000d3a38ad05",
        PhysicalAccessibility => "467acfda-9641-e911-a965-000d3a38ad05",
        PermanentJob => "6293559d-90fe-eb11-94ef-00224880e5e5",
        MboCertificate => "d7abaf39-89fe-eb11-94ef-00224880e5e5",
        PracticeStatement => "76b79697-89fe-eb11-94ef-00224880e5e5",
    }
}

guid_catalogue! {
    /// Sectors accepted by the `sector` filter
    Sector {
        Ict => "87c539b1-192b-4418-be0e-01e2df29bee7",
        CareAndWelfare => "0dd6dc35-bcc9-4042-b80b-7b091dae99bc",
    }
}

guid_catalogue! {
    /// Company types (SBI codes) accepted by the `companyType` filter
    CompanyType {
        ComputerWholesale => "08aa4f5e-b356-e011-87cd-001372415b01",
        SoftwareDevelopment => "2eab4f5e-b356-e011-87cd-001372415b01",
        DataProcessing => "34ab4f5e-b356-e011-87cd-001372415b01",
        GraphicDesign => "29c32618-98bb-e511-80cd-909e0336d287",
        ClothingRetail => "f96fed50-96bb-e511-80cd-909e0336d287",
        ManagementConsultancy => "97ab4f5e-b356-e011-87cd-001372415b01",
        ItConsultancy => "2fab4f5e-b356-e011-87cd-001372415b01",
        IntangibleLeasing => "14f54764-b356-e011-87cd-001372415b01",
        PrivateSecurity => "27f54764-b356-e011-87cd-001372415b01",
        MagazinePublishing => "0fab4f5e-b356-e011-87cd-001372415b01",
    }
}

/// Kind of location suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    #[serde(rename = "Plaats")]
    Place,
    #[serde(rename = "Regio")]
    Region,
    #[serde(rename = "Postcode")]
    Postcode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_values() {
        assert_eq!(Level::Mbo1.value(), 1);
        assert_eq!(Level::Mbo4.value(), 4);
        assert_eq!(Level::try_from(3), Ok(Level::Mbo3));
        assert!(Level::try_from(5).is_err());
    }

    #[test]
    fn test_level_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Level::Mbo2).unwrap(), "2");
        let level: Level = serde_json::from_str("4").unwrap();
        assert_eq!(level, Level::Mbo4);
        assert!(serde_json::from_str::<Level>("0").is_err());
    }

    #[test]
    fn test_radius_km() {
        assert_eq!(Radius::default().km(), 25);
        assert_eq!(Radius::Km100.km(), 100);
        assert_eq!(Radius::Custom(42).km(), 42);
        assert_eq!(Radius::from(15), Radius::Km15);
        assert_eq!(Radius::from(7), Radius::Custom(7));
    }

    #[test]
    fn test_learning_path_wire_forms() {
        assert_eq!(serde_json::to_string(&LearningPath::Bbl).unwrap(), "\"BBL\"");
        let path: LearningPath = serde_json::from_str("\"BOL\"").unwrap();
        assert_eq!(path, LearningPath::Bol);
        assert_eq!(
            LearningPath::from_id("2468C1A0-AD7B-4209-B27B-B12AE0E3D1D2"),
            Some(LearningPath::Bol)
        );
        assert_eq!(LearningPath::from_id("nope"), None);
    }

    #[test]
    fn test_search_type_value() {
        assert_eq!(SearchType::Internship.value(), 1);
        assert_eq!(SearchType::Apprenticeship.value(), 2);
    }

    #[test]
    fn test_catalogue_lookup() {
        assert_eq!(Sector::from_id(Sector::Ict.id()), Some(Sector::Ict));
        assert_eq!(
            CompanyType::from_id("2eab4f5e-b356-e011-87cd-001372415b01"),
            Some(CompanyType::SoftwareDevelopment)
        );
        assert_eq!(CompanyType::ALL.len(), 10);
        assert_eq!(Feature::from_id("unknown"), None);
    }

    #[test]
    fn test_location_type_deserialize() {
        let kind: LocationType = serde_json::from_str("\"Regio\"").unwrap();
        assert_eq!(kind, LocationType::Region);
    }
}
