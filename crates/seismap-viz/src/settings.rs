//! Visibility toggles for the marker layers.

use seismap_core::EventGroup;

/// Which marker layers are drawn.
///
/// Grouped event layers can be shown or hidden independently; ungrouped
/// events (unrecognized tags) get their own toggle since they belong to no
/// named group.
#[derive(Debug, Clone, Copy)]
pub struct LayerVisibility {
    pub stations: bool,
    pub matched: bool,
    pub isc: bool,
    pub oth: bool,
    pub ungrouped: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            stations: true,
            matched: true,
            isc: true,
            oth: true,
            ungrouped: true,
        }
    }
}

impl LayerVisibility {
    /// Whether events with the given group resolution are drawn.
    pub fn event_visible(&self, group: Option<EventGroup>) -> bool {
        match group {
            Some(EventGroup::Matched) => self.matched,
            Some(EventGroup::Isc) => self.isc,
            Some(EventGroup::Oth) => self.oth,
            None => self.ungrouped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_visible_by_default() {
        let visibility = LayerVisibility::default();
        assert!(visibility.stations);
        assert!(visibility.event_visible(Some(EventGroup::Matched)));
        assert!(visibility.event_visible(None));
    }

    #[test]
    fn test_hiding_one_group_leaves_others() {
        let visibility = LayerVisibility {
            isc: false,
            ..Default::default()
        };
        assert!(!visibility.event_visible(Some(EventGroup::Isc)));
        assert!(visibility.event_visible(Some(EventGroup::Oth)));
        assert!(visibility.event_visible(None));
    }
}
