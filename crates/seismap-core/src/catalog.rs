//! Catalogue records: the JSON shape hosts use to seed the map view.
//!
//! The registries themselves are in-memory only; a catalogue file is just a
//! convenient way to replay a batch of add operations.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;
use crate::event::RowRef;

/// One station to place on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
}

/// One catalogue event to place on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    /// Display-group tag; unrecognized tags still plot, grouped under none.
    #[serde(default)]
    pub group: String,
    /// Opaque payload reported back to the host on selection.
    #[serde(default)]
    pub row_ref: RowRef,
    pub lat: f64,
    pub lon: f64,
    pub active_color: String,
    pub passive_color: String,
}

/// A batch of stations and events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub events: Vec<EventRecord>,
}

impl Catalog {
    /// Parse a catalogue from a JSON string.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a catalogue file.
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_catalog_json() {
        let json = r#"{
            "stations": [{"id": "AU.ARMA", "lat": -30.42, "lon": 151.63}],
            "events": [{
                "id": "ev1",
                "group": "isc",
                "row_ref": 5,
                "lat": 10.0,
                "lon": 20.0,
                "active_color": "Red",
                "passive_color": "Blue"
            }]
        }"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.stations.len(), 1);
        assert_eq!(catalog.events.len(), 1);
        assert_eq!(catalog.events[0].row_ref, json!(5));
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let catalog = Catalog::from_json_str("{}").unwrap();
        assert!(catalog.stations.is_empty());
        assert!(catalog.events.is_empty());
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let err = Catalog::from_json_str("not json").unwrap_err();
        assert!(matches!(err, crate::error::CatalogError::Parse(_)));
    }
}
