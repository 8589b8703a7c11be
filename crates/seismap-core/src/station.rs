//! Station registry: seismic stations keyed by identifier.

use std::collections::HashMap;

use crate::marker::MarkerStatus;

/// One registered station and its marker state.
#[derive(Debug, Clone, PartialEq)]
pub struct StationEntry {
    /// Station code, unique within the registry.
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    pub status: MarkerStatus,
}

impl StationEntry {
    /// Switch to the active glyph. No-op if already active.
    ///
    /// Returns whether a transition happened.
    pub fn set_active(&mut self) -> bool {
        if self.status.is_active() {
            return false;
        }
        self.status = MarkerStatus::Active;
        true
    }

    /// Switch to the passive glyph. No-op if already passive.
    pub fn set_passive(&mut self) -> bool {
        if !self.status.is_active() {
            return false;
        }
        self.status = MarkerStatus::Passive;
        true
    }
}

/// Identifier-keyed mapping of all stations on the map.
#[derive(Debug, Default)]
pub struct StationRegistry {
    entries: HashMap<String, StationEntry>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station at `(lat, lon)` with passive status.
    ///
    /// A duplicate id overwrites the previous entry; no uniqueness check is
    /// enforced.
    pub fn add(&mut self, id: impl Into<String>, lat: f64, lon: f64) {
        let id = id.into();
        let entry = StationEntry {
            id: id.clone(),
            lat,
            lon,
            status: MarkerStatus::Passive,
        };
        if self.entries.insert(id.clone(), entry).is_some() {
            tracing::warn!(station = %id, "duplicate station id overwrote existing entry");
        }
    }

    pub fn get(&self, id: &str) -> Option<&StationEntry> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut StationEntry> {
        self.entries.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Activate every station.
    pub fn set_all_active(&mut self) {
        for entry in self.entries.values_mut() {
            entry.set_active();
        }
    }

    /// Deactivate every station.
    pub fn set_all_passive(&mut self) {
        for entry in self.entries.values_mut() {
            entry.set_passive();
        }
    }

    /// Deactivate all stations, then activate the one named `id`.
    ///
    /// At most one station is active after this returns; an unknown id
    /// leaves everything passive and returns `false`.
    pub fn highlight(&mut self, id: &str) -> bool {
        self.set_all_passive();
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.set_active();
                true
            }
            None => {
                tracing::debug!(station = id, "highlight requested for unknown station");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(ids: &[&str]) -> StationRegistry {
        let mut registry = StationRegistry::new();
        for (i, id) in ids.iter().enumerate() {
            registry.add(*id, 10.0 + i as f64, 20.0 + i as f64);
        }
        registry
    }

    #[test]
    fn test_added_stations_start_passive_with_coordinates() {
        let registry = registry_with(&["AU.ARMA", "AU.EIDS", "AU.QIS"]);
        assert_eq!(registry.len(), 3);

        let entry = registry.get("AU.EIDS").unwrap();
        assert_eq!(entry.status, MarkerStatus::Passive);
        assert_eq!(entry.lat, 11.0);
        assert_eq!(entry.lon, 21.0);
    }

    #[test]
    fn test_duplicate_add_overwrites() {
        let mut registry = StationRegistry::new();
        registry.add("AU.ARMA", 1.0, 2.0);
        registry.add("AU.ARMA", 3.0, 4.0);

        assert_eq!(registry.len(), 1);
        let entry = registry.get("AU.ARMA").unwrap();
        assert_eq!((entry.lat, entry.lon), (3.0, 4.0));
        assert_eq!(entry.status, MarkerStatus::Passive);
    }

    #[test]
    fn test_highlight_is_exclusive_and_idempotent() {
        let mut registry = registry_with(&["a", "b", "c"]);
        registry.set_all_active();

        assert!(registry.highlight("b"));
        assert!(registry.highlight("b"));

        let active: Vec<_> = registry
            .iter()
            .filter(|e| e.status.is_active())
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(active, vec!["b"]);
    }

    #[test]
    fn test_highlight_unknown_id_deactivates_everything() {
        let mut registry = registry_with(&["a", "b"]);
        registry.set_all_active();

        assert!(!registry.highlight("nope"));
        assert!(registry.iter().all(|e| !e.status.is_active()));
    }

    #[test]
    fn test_bulk_transitions_are_inverses() {
        let mut registry = registry_with(&["a", "b", "c", "d"]);

        registry.set_all_active();
        assert!(registry.iter().all(|e| e.status.is_active()));

        registry.set_all_passive();
        assert!(registry.iter().all(|e| !e.status.is_active()));
    }

    #[test]
    fn test_set_active_reports_transition() {
        let mut registry = registry_with(&["a"]);
        let entry = registry.get_mut("a").unwrap();

        assert!(entry.set_active());
        assert!(!entry.set_active());
        assert!(entry.set_passive());
        assert!(!entry.set_passive());
    }
}
