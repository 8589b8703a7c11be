//! Event registry: catalogue events keyed by identifier, partitioned into
//! display groups.

use std::collections::HashMap;

use crate::color::Rgb;
use crate::marker::{MarkerStatus, MarkerStyle, DEFAULT_EVENT_RADIUS};

/// Opaque pass-through value attached to an event, forwarded untouched when
/// reporting a selection to the host. Typically a table row index.
pub type RowRef = serde_json::Value;

/// Named display groups for event markers.
///
/// The group determines which named layer the marker joins; hosts can show,
/// hide, or address each group independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventGroup {
    /// Events matched across catalogues.
    Matched,
    /// Events from the ISC reference catalogue.
    Isc,
    /// Events from other sources.
    Oth,
}

impl EventGroup {
    /// Map a host-supplied tag to a group. Unrecognized tags map to `None`:
    /// the marker is still created and drawn but joins no named group.
    pub fn from_tag(tag: &str) -> Option<EventGroup> {
        match tag {
            "matched" => Some(EventGroup::Matched),
            "isc" => Some(EventGroup::Isc),
            "oth" => Some(EventGroup::Oth),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventGroup::Matched => "matched",
            EventGroup::Isc => "isc",
            EventGroup::Oth => "oth",
        }
    }
}

/// One registered event and its marker state.
#[derive(Debug, Clone, PartialEq)]
pub struct EventEntry {
    /// Event identifier, unique within the registry.
    pub id: String,
    /// The tag the host supplied at creation, forwarded verbatim on click.
    pub group_tag: String,
    /// Display group resolved from the tag, if recognized.
    pub group: Option<EventGroup>,
    /// Opaque host payload reported back on selection.
    pub row_ref: RowRef,
    pub lat: f64,
    pub lon: f64,
    pub active_color: Rgb,
    pub passive_color: Rgb,
    /// Circle radius in screen units; only `reset_marker_sizes` touches this
    /// in scope, undoing any external mutation.
    pub radius: f32,
    pub status: MarkerStatus,
}

impl EventEntry {
    /// Switch to the active style. No-op if already active.
    ///
    /// Returns whether a transition happened. An active event also draws
    /// above all passive event circles.
    pub fn set_active(&mut self) -> bool {
        if self.status.is_active() {
            return false;
        }
        self.status = MarkerStatus::Active;
        true
    }

    /// Switch to the passive style. No-op if already passive.
    pub fn set_passive(&mut self) -> bool {
        if !self.status.is_active() {
            return false;
        }
        self.status = MarkerStatus::Passive;
        true
    }

    /// Resolved stroke/fill styling for the current status.
    pub fn style(&self) -> MarkerStyle {
        MarkerStyle::for_status(self.status, self.active_color, self.passive_color)
    }

    /// Whether this event belongs to the given named group.
    pub fn in_group(&self, group: EventGroup) -> bool {
        self.group == Some(group)
    }
}

/// Identifier-keyed mapping of all events on the map.
#[derive(Debug, Default)]
pub struct EventRegistry {
    entries: HashMap<String, EventEntry>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event at `(lat, lon)` with passive status and the default
    /// radius.
    ///
    /// A duplicate id overwrites the previous entry. Unparseable color
    /// strings fall back to black.
    #[allow(clippy::too_many_arguments)]
    pub fn add(
        &mut self,
        id: impl Into<String>,
        group_tag: impl Into<String>,
        row_ref: RowRef,
        lat: f64,
        lon: f64,
        active_color: &str,
        passive_color: &str,
    ) {
        let id = id.into();
        let group_tag = group_tag.into();
        let group = EventGroup::from_tag(&group_tag);
        let entry = EventEntry {
            id: id.clone(),
            group_tag,
            group,
            row_ref,
            lat,
            lon,
            active_color: Rgb::parse_or_black(active_color),
            passive_color: Rgb::parse_or_black(passive_color),
            radius: DEFAULT_EVENT_RADIUS,
            status: MarkerStatus::Passive,
        };
        if self.entries.insert(id.clone(), entry).is_some() {
            tracing::warn!(event = %id, "duplicate event id overwrote existing entry");
        }
    }

    pub fn get(&self, id: &str) -> Option<&EventEntry> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut EventEntry> {
        self.entries.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Events belonging to the given named group.
    pub fn members_of(&self, group: EventGroup) -> impl Iterator<Item = &EventEntry> {
        self.entries.values().filter(move |e| e.in_group(group))
    }

    /// Activate every event, regardless of group.
    pub fn set_all_active(&mut self) {
        for entry in self.entries.values_mut() {
            entry.set_active();
        }
    }

    /// Deactivate every event, regardless of group.
    pub fn set_all_passive(&mut self) {
        for entry in self.entries.values_mut() {
            entry.set_passive();
        }
    }

    /// Deactivate all events, then activate the one named `id`.
    ///
    /// An unknown id leaves everything passive and returns `false`.
    pub fn highlight(&mut self, id: &str) -> bool {
        self.set_all_passive();
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.set_active();
                true
            }
            None => {
                tracing::debug!(event = id, "highlight requested for unknown event");
                false
            }
        }
    }

    /// Reset every event marker's radius to the default, discarding any
    /// transient size change applied from outside.
    pub fn reset_marker_sizes(&mut self) {
        for entry in self.entries.values_mut() {
            entry.radius = DEFAULT_EVENT_RADIUS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn add_sample(registry: &mut EventRegistry, id: &str, tag: &str) {
        registry.add(id, tag, json!(0), -20.0, 140.0, "Red", "#008000");
    }

    #[test]
    fn test_group_tag_resolution() {
        assert_eq!(EventGroup::from_tag("matched"), Some(EventGroup::Matched));
        assert_eq!(EventGroup::from_tag("isc"), Some(EventGroup::Isc));
        assert_eq!(EventGroup::from_tag("oth"), Some(EventGroup::Oth));
        assert_eq!(EventGroup::from_tag("cat"), None);
        assert_eq!(EventGroup::from_tag("unknown_tag"), None);
    }

    #[test]
    fn test_matched_event_joins_only_matched_group() {
        let mut registry = EventRegistry::new();
        add_sample(&mut registry, "ev1", "matched");

        let entry = registry.get("ev1").unwrap();
        assert!(entry.in_group(EventGroup::Matched));
        assert!(!entry.in_group(EventGroup::Isc));
        assert!(!entry.in_group(EventGroup::Oth));
        assert_eq!(registry.members_of(EventGroup::Matched).count(), 1);
    }

    #[test]
    fn test_unrecognized_tag_joins_no_group() {
        let mut registry = EventRegistry::new();
        add_sample(&mut registry, "ev1", "unknown_tag");

        let entry = registry.get("ev1").unwrap();
        assert_eq!(entry.group, None);
        assert_eq!(entry.group_tag, "unknown_tag");
        assert_eq!(registry.members_of(EventGroup::Matched).count(), 0);
        assert_eq!(registry.members_of(EventGroup::Isc).count(), 0);
        assert_eq!(registry.members_of(EventGroup::Oth).count(), 0);
    }

    #[test]
    fn test_add_scenario_from_catalogue_host() {
        let mut registry = EventRegistry::new();
        registry.add("ev1", "isc", json!(5), 10.0, 20.0, "Red", "Blue");

        let entry = registry.get("ev1").unwrap();
        assert_eq!(entry.status, MarkerStatus::Passive);
        assert_eq!(entry.active_color, Rgb::new(255, 0, 0));
        assert_eq!(entry.passive_color, Rgb::new(0, 0, 255));
        assert_eq!(entry.row_ref, json!(5));
        assert_eq!(entry.radius, DEFAULT_EVENT_RADIUS);
        assert!(entry.in_group(EventGroup::Isc));
    }

    #[test]
    fn test_activation_styles_and_is_noop_when_repeated() {
        let mut registry = EventRegistry::new();
        registry.add("ev1", "isc", json!(5), 10.0, 20.0, "Red", "Blue");

        let entry = registry.get_mut("ev1").unwrap();
        assert!(entry.set_active());
        assert_eq!(entry.status, MarkerStatus::Active);
        let style = entry.style();
        assert_eq!(style.color, Rgb::new(255, 0, 0));
        assert_eq!(style.stroke_opacity, 0.8);
        assert_eq!(style.fill_opacity, 0.5);

        // Second activation is a no-op.
        assert!(!entry.set_active());
        assert_eq!(entry.status, MarkerStatus::Active);
    }

    #[test]
    fn test_highlight_unknown_id_leaves_all_passive() {
        let mut registry = EventRegistry::new();
        add_sample(&mut registry, "ev1", "matched");
        add_sample(&mut registry, "ev2", "isc");
        registry.set_all_active();

        assert!(!registry.highlight("missing"));
        assert!(registry.iter().all(|e| !e.status.is_active()));
    }

    #[test]
    fn test_reset_marker_sizes() {
        let mut registry = EventRegistry::new();
        add_sample(&mut registry, "ev1", "matched");
        add_sample(&mut registry, "ev2", "oth");

        registry.get_mut("ev1").unwrap().radius = 25.0;
        registry.get_mut("ev2").unwrap().radius = 3.0;

        registry.reset_marker_sizes();
        assert!(registry.iter().all(|e| e.radius == DEFAULT_EVENT_RADIUS));
    }

    #[test]
    fn test_unparseable_colors_fall_back_to_black() {
        let mut registry = EventRegistry::new();
        registry.add("ev1", "isc", json!(null), 0.0, 0.0, "bogus", "alsobogus");

        let entry = registry.get("ev1").unwrap();
        assert_eq!(entry.active_color, Rgb::BLACK);
        assert_eq!(entry.passive_color, Rgb::BLACK);
    }
}
