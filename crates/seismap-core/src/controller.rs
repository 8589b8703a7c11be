//! The map controller: single owner of both registries and the host seam.
//!
//! Constructed once per map view. Callers (panels, click handlers, the
//! embedding host) go through these methods only; there is no teardown.

use crate::event::{EventRegistry, RowRef};
use crate::host::{MapHost, MarkerSelection};
use crate::icons::StationIconSet;
use crate::station::StationRegistry;

/// A request to show a popup at a marker's geographic position.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub text: String,
    pub lat: f64,
    pub lon: f64,
}

/// Owns the station and event registries, the station glyph pair, and the
/// optional host callback.
pub struct MapController {
    pub stations: StationRegistry,
    pub events: EventRegistry,
    pub icons: StationIconSet,
    host: Option<Box<dyn MapHost>>,
}

impl Default for MapController {
    fn default() -> Self {
        Self::new()
    }
}

impl MapController {
    /// A controller with no host attached; event clicks are popup-only.
    pub fn new() -> Self {
        Self {
            stations: StationRegistry::new(),
            events: EventRegistry::new(),
            icons: StationIconSet::default(),
            host: None,
        }
    }

    /// A controller that reports event selections to `host`.
    pub fn with_host(host: Box<dyn MapHost>) -> Self {
        Self {
            host: Some(host),
            ..Self::new()
        }
    }

    pub fn has_host(&self) -> bool {
        self.host.is_some()
    }

    /// Place a station marker. Starts passive.
    pub fn add_station(&mut self, id: impl Into<String>, lat: f64, lon: f64) {
        self.stations.add(id, lat, lon);
    }

    /// Place an event marker. Starts passive with the default radius.
    #[allow(clippy::too_many_arguments)]
    pub fn add_event(
        &mut self,
        id: impl Into<String>,
        group_tag: impl Into<String>,
        row_ref: RowRef,
        lat: f64,
        lon: f64,
        active_color: &str,
        passive_color: &str,
    ) {
        self.events
            .add(id, group_tag, row_ref, lat, lon, active_color, passive_color);
    }

    /// Make `id` the only active station.
    pub fn highlight_station(&mut self, id: &str) -> bool {
        self.stations.highlight(id)
    }

    /// Make `id` the only active event.
    pub fn highlight_event(&mut self, id: &str) -> bool {
        self.events.highlight(id)
    }

    pub fn set_stations_active(&mut self) {
        self.stations.set_all_active();
    }

    pub fn set_stations_passive(&mut self) {
        self.stations.set_all_passive();
    }

    pub fn set_events_active(&mut self) {
        self.events.set_all_active();
    }

    pub fn set_events_passive(&mut self) {
        self.events.set_all_passive();
    }

    /// Reset every event circle back to the default radius.
    pub fn reset_marker_sizes(&mut self) {
        self.events.reset_marker_sizes();
    }

    /// Replay the add operations described by a catalogue.
    pub fn load_catalog(&mut self, catalog: &crate::catalog::Catalog) {
        for station in &catalog.stations {
            self.add_station(station.id.clone(), station.lat, station.lon);
        }
        for event in &catalog.events {
            self.add_event(
                event.id.clone(),
                event.group.clone(),
                event.row_ref.clone(),
                event.lat,
                event.lon,
                &event.active_color,
                &event.passive_color,
            );
        }
        tracing::info!(
            stations = catalog.stations.len(),
            events = catalog.events.len(),
            "catalogue loaded"
        );
    }

    /// Input bridge for a station marker click: highlight it exclusively and
    /// open a popup with its identifier. Purely local.
    pub fn station_clicked(&mut self, id: &str) -> Option<Popup> {
        let entry = self.stations.get(id)?;
        let popup = Popup {
            text: entry.id.clone(),
            lat: entry.lat,
            lon: entry.lon,
        };
        self.stations.highlight(id);
        Some(popup)
    }

    /// Input bridge for an event marker click: open a popup with its
    /// identifier and notify the host, if one is attached.
    ///
    /// Clicking never highlights the event; exclusivity comes only from an
    /// explicit `highlight_event` call by the host.
    pub fn event_clicked(&mut self, id: &str) -> Option<Popup> {
        let entry = self.events.get(id)?;
        let selection = MarkerSelection {
            lat: entry.lat,
            lon: entry.lon,
            event_id: entry.id.clone(),
            group_tag: entry.group_tag.clone(),
            row_ref: entry.row_ref.clone(),
        };
        let popup = Popup {
            text: entry.id.clone(),
            lat: entry.lat,
            lon: entry.lon,
        };
        if let Some(host) = self.host.as_mut() {
            host.marker_selected(&selection);
        }
        Some(popup)
    }
}
