//! # NASA NeoWs feed
//!
//! Raw data model of the NeoWs `neo/browse` endpoint, plus the retrieval client and the
//! record classification step that sits between the feed and the scene builder.
//!
//! ## Structure
//!
//! ```text
//! neo_feed
//! ├── feed_client  (NeoFeedClient, FeedConfig, load_browse_file)
//! └── neo_record   (NeoRecord::{Complete, Incomplete})
//! ```
//!
//! The raw types below mirror the JSON returned by the provider, restricted to the fields
//! the scene needs. Numeric values that NeoWs encodes as decimal strings (velocities,
//! orbital elements) are kept as [`NumericField`] and only parsed during classification,
//! so a single malformed record never invalidates a whole page.
//!
//! ## Example payload (trimmed)
//!
//! ```json
//! {
//!   "page": { "size": 20, "total_elements": 41318, "total_pages": 2066, "number": 0 },
//!   "near_earth_objects": [{
//!     "id": "2000433",
//!     "name": "433 Eros (A898 PA)",
//!     "estimated_diameter": { "meters": {
//!       "estimated_diameter_min": 22006.4795, "estimated_diameter_max": 49208.4105 } },
//!     "close_approach_data": [{
//!       "close_approach_date": "1900-12-27",
//!       "relative_velocity": { "kilometers_per_second": "5.5786191875" },
//!       "orbiting_body": "Earth" }],
//!     "orbital_data": { "eccentricity": ".2228359407071628", "semi_major_axis": "1.458120998474684" }
//!   }]
//! }
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};

/// Retrieval of browse pages over HTTP or from a saved response file.
pub mod feed_client;

/// Classification of raw records into complete and incomplete ones.
pub mod neo_record;

/// A number that the provider may encode either as a JSON number or as a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    /// Numeric value, or `None` if the text is not a decimal number.
    ///
    /// Leading/trailing whitespace is ignored and a bare leading dot (`".22"`) is accepted,
    /// as NeoWs emits eccentricities that way.
    pub fn value(&self) -> Option<f64> {
        match self {
            NumericField::Number(v) => Some(*v),
            NumericField::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericField::Number(v) => write!(f, "{v}"),
            NumericField::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for NumericField {
    fn from(v: f64) -> Self {
        NumericField::Number(v)
    }
}

impl From<&str> for NumericField {
    fn from(s: &str) -> Self {
        NumericField::Text(s.to_string())
    }
}

/// One page of the `neo/browse` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NeoBrowsePage {
    #[serde(default)]
    pub links: Option<PageLinks>,
    #[serde(default)]
    pub page: Option<PageInfo>,
    #[serde(default)]
    pub near_earth_objects: Vec<RawNeo>,
}

impl NeoBrowsePage {
    /// Whether the provider advertises a page after this one.
    pub fn has_next_page(&self) -> bool {
        match (&self.page, &self.links) {
            (Some(info), _) => info.number + 1 < info.total_pages,
            (None, Some(links)) => links.next.is_some(),
            (None, None) => false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default, rename = "self")]
    pub self_link: Option<String>,
}

/// Pagination metadata of a browse page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
}

/// A near-Earth object as delivered by NeoWs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawNeo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    pub close_approach_data: Vec<RawCloseApproach>,
    #[serde(default)]
    pub orbital_data: Option<RawOrbitalData>,
}

/// Diameter estimates in several units; only meters are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatedDiameter {
    #[serde(default)]
    pub meters: Option<DiameterRange>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

impl DiameterRange {
    /// Mean of the minimum and maximum estimates.
    pub fn mean(&self) -> f64 {
        (self.estimated_diameter_min + self.estimated_diameter_max) / 2.
    }
}

/// One close-approach event, ordered chronologically by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCloseApproach {
    #[serde(default)]
    pub close_approach_date: Option<String>,
    #[serde(default)]
    pub relative_velocity: Option<RelativeVelocity>,
    #[serde(default)]
    pub orbiting_body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelativeVelocity {
    #[serde(default)]
    pub kilometers_per_second: Option<NumericField>,
}

/// Orbital elements of the object; only the planar shape is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOrbitalData {
    #[serde(default)]
    pub eccentricity: Option<NumericField>,
    #[serde(default)]
    pub semi_major_axis: Option<NumericField>,
}

#[cfg(test)]
mod neo_feed_test {
    use super::*;

    #[test]
    fn test_numeric_field_parsing() {
        assert_eq!(NumericField::from(".2228359407071628").value(), Some(0.2228359407071628));
        assert_eq!(NumericField::from(" 5.5786191875 ").value(), Some(5.5786191875));
        assert_eq!(NumericField::from(1.5).value(), Some(1.5));
        assert_eq!(NumericField::from("n/a").value(), None);
        assert_eq!(NumericField::from("").value(), None);
    }

    #[test]
    fn test_deserialize_string_and_number() {
        let data: RawOrbitalData =
            serde_json::from_str(r#"{"eccentricity": ".5", "semi_major_axis": 2.0}"#).unwrap();
        assert_eq!(data.eccentricity.unwrap().value(), Some(0.5));
        assert_eq!(data.semi_major_axis.unwrap().value(), Some(2.0));
    }

    #[test]
    fn test_missing_optional_sections() {
        let neo: RawNeo = serde_json::from_str(r#"{"id": "42", "name": "(2024 XY)"}"#).unwrap();
        assert!(neo.estimated_diameter.is_none());
        assert!(neo.close_approach_data.is_empty());
        assert!(neo.orbital_data.is_none());
    }

    #[test]
    fn test_has_next_page() {
        let mut page = NeoBrowsePage {
            page: Some(PageInfo {
                size: 20,
                total_elements: 45,
                total_pages: 3,
                number: 1,
            }),
            ..Default::default()
        };
        assert!(page.has_next_page());

        page.page = Some(PageInfo {
            size: 20,
            total_elements: 45,
            total_pages: 3,
            number: 2,
        });
        assert!(!page.has_next_page());

        page.page = None;
        assert!(!page.has_next_page());
        page.links = Some(PageLinks {
            next: Some("https://api.nasa.gov/neo/rest/v1/neo/browse?page=3".into()),
            self_link: None,
        });
        assert!(page.has_next_page());
    }

    #[test]
    fn test_diameter_mean() {
        let range = DiameterRange {
            estimated_diameter_min: 100.0,
            estimated_diameter_max: 300.0,
        };
        assert_eq!(range.mean(), 200.0);
    }
}
