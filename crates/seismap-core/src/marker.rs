//! Marker status and the styling rules shared by both entity kinds.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Default radius of an event circle marker, in screen units.
pub const DEFAULT_EVENT_RADIUS: f32 = 10.0;

/// Stroke opacity applied to an active event marker.
pub const ACTIVE_STROKE_OPACITY: f32 = 0.8;
/// Fill opacity applied to an active event marker.
pub const ACTIVE_FILL_OPACITY: f32 = 0.5;
/// Stroke opacity applied to a passive event marker.
pub const PASSIVE_STROKE_OPACITY: f32 = 0.6;
/// Fill opacity applied to a passive event marker.
pub const PASSIVE_FILL_OPACITY: f32 = 0.3;

// Draw-priority bases for station markers. The +1 gap guarantees an active
// station stacks above a passive one even at equal screen height.
const PASSIVE_Z_BASE: f32 = 100.0;
const ACTIVE_Z_BASE: f32 = 101.0;

/// The two mutually exclusive visual states of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerStatus {
    /// Distinguishing style and raised draw priority.
    Active,
    /// The resting style every marker starts in.
    Passive,
}

impl MarkerStatus {
    pub fn is_active(self) -> bool {
        matches!(self, MarkerStatus::Active)
    }

    pub fn label(self) -> &'static str {
        match self {
            MarkerStatus::Active => "active",
            MarkerStatus::Passive => "passive",
        }
    }
}

/// Resolved stroke/fill styling for an event circle marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub color: Rgb,
    pub stroke_opacity: f32,
    pub fill_opacity: f32,
}

impl MarkerStyle {
    /// Style for the given status, driven by the entry's own color pair.
    pub fn for_status(status: MarkerStatus, active_color: Rgb, passive_color: Rgb) -> Self {
        match status {
            MarkerStatus::Active => MarkerStyle {
                color: active_color,
                stroke_opacity: ACTIVE_STROKE_OPACITY,
                fill_opacity: ACTIVE_FILL_OPACITY,
            },
            MarkerStatus::Passive => MarkerStyle {
                color: passive_color,
                stroke_opacity: PASSIVE_STROKE_OPACITY,
                fill_opacity: PASSIVE_FILL_OPACITY,
            },
        }
    }
}

/// Draw priority for a station marker.
///
/// Markers higher on screen (smaller `screen_y`) draw above markers below
/// them, and an active marker always beats a passive one at the same height.
/// Stations are painted in ascending priority order so the highest priority
/// lands on top.
pub fn station_draw_priority(screen_y: f32, status: MarkerStatus) -> f32 {
    let base = if status.is_active() {
        ACTIVE_Z_BASE
    } else {
        PASSIVE_Z_BASE
    };
    base - screen_y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_outranks_passive_at_equal_height() {
        let passive = station_draw_priority(50.0, MarkerStatus::Passive);
        let active = station_draw_priority(50.0, MarkerStatus::Active);
        assert!(active > passive);
    }

    #[test]
    fn test_higher_on_screen_draws_above() {
        let high = station_draw_priority(10.0, MarkerStatus::Passive);
        let low = station_draw_priority(200.0, MarkerStatus::Passive);
        assert!(high > low);
    }

    #[test]
    fn test_style_follows_status() {
        let active_color = Rgb::new(255, 0, 0);
        let passive_color = Rgb::new(0, 0, 255);

        let style = MarkerStyle::for_status(MarkerStatus::Active, active_color, passive_color);
        assert_eq!(style.color, active_color);
        assert_eq!(style.stroke_opacity, ACTIVE_STROKE_OPACITY);
        assert_eq!(style.fill_opacity, ACTIVE_FILL_OPACITY);

        let style = MarkerStyle::for_status(MarkerStatus::Passive, active_color, passive_color);
        assert_eq!(style.color, passive_color);
        assert_eq!(style.stroke_opacity, PASSIVE_STROKE_OPACITY);
        assert_eq!(style.fill_opacity, PASSIVE_FILL_OPACITY);
    }
}
