//! Sample catalogue for demonstration when no file is supplied.

use serde_json::json;
use seismap_core::{Catalog, EventRecord, StationRecord};

/// A small Australian network with events from each display group, plus one
/// event under the ungrouped "cat" tag the reference host uses.
pub fn sample_catalog() -> Catalog {
    let station = |id: &str, lat: f64, lon: f64| StationRecord {
        id: id.to_string(),
        lat,
        lon,
    };

    let event = |id: &str, group: &str, row: i64, lat: f64, lon: f64, p_color: &str| EventRecord {
        id: id.to_string(),
        group: group.to_string(),
        row_ref: json!(row),
        lat,
        lon,
        active_color: "Red".to_string(),
        passive_color: p_color.to_string(),
    };

    Catalog {
        stations: vec![
            station("AU.ARMA", -30.4198, 151.6281),
            station("AU.EIDS", -25.3693, 151.0817),
            station("AU.QIS", -17.5966, 146.0247),
            station("AU.CMSA", -31.5424, 145.6927),
            station("AU.MILA", -37.0545, 149.1546),
            station("AU.RMQ", -20.7117, 143.1546),
        ],
        events: vec![
            event("smi:local/ev0", "matched", 0, -28.1, 148.9, "#008000"),
            event("smi:local/ev1", "matched", 1, -24.6, 150.2, "#008000"),
            event("smi:local/ev2", "isc", 2, -19.8, 145.1, "Blue"),
            event("smi:local/ev3", "isc", 3, -32.9, 151.7, "Blue"),
            event("smi:local/ev4", "oth", 4, -26.4, 146.8, "Orange"),
            event("smi:local/ev5", "oth", 5, -21.2, 149.3, "Orange"),
            event("smi:local/ev6", "cat", 6, -29.5, 144.2, "#008000"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seismap_core::{EventGroup, MapController};

    #[test]
    fn test_sample_catalog_loads() {
        let mut controller = MapController::new();
        controller.load_catalog(&sample_catalog());

        assert_eq!(controller.stations.len(), 6);
        assert_eq!(controller.events.len(), 7);
        assert_eq!(controller.events.members_of(EventGroup::Matched).count(), 2);
        // The "cat" event joins no named group.
        assert_eq!(
            controller
                .events
                .iter()
                .filter(|e| e.group.is_none())
                .count(),
            1
        );
    }
}
