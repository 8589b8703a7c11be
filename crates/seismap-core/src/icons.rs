//! Station marker glyph definitions.
//!
//! Stations render as a 20x20 downward-pointing triangle whose tip sits on
//! the station's geographic point. There are exactly two glyphs, one per
//! marker status, computed once and never parameterized at runtime.

use crate::color::Rgb;
use crate::marker::MarkerStatus;

/// Side length of the square bounding box around a station glyph.
pub const STATION_ICON_SIZE: f32 = 20.0;

/// Immutable visual definition of one station glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationIcon {
    pub fill: Rgb,
    pub outline: Rgb,
    pub outline_width: f32,
    pub outline_opacity: f32,
}

/// The active/passive glyph pair produced by the icon factory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationIconSet {
    pub active: StationIcon,
    pub passive: StationIcon,
}

impl Default for StationIconSet {
    fn default() -> Self {
        let outline = Rgb::new(0x66, 0x66, 0x66);
        Self {
            active: StationIcon {
                fill: Rgb::new(255, 0, 0),
                outline,
                outline_width: 2.0,
                outline_opacity: 0.5,
            },
            passive: StationIcon {
                fill: Rgb::new(0x3d, 0x8e, 0xc9),
                outline,
                outline_width: 2.0,
                outline_opacity: 0.5,
            },
        }
    }
}

impl StationIconSet {
    /// Glyph for the given marker status.
    pub fn for_status(&self, status: MarkerStatus) -> &StationIcon {
        match status {
            MarkerStatus::Active => &self.active,
            MarkerStatus::Passive => &self.passive,
        }
    }
}

/// Triangle vertices for a glyph anchored at `(anchor_x, anchor_y)`.
///
/// The anchor is the bottom-center tip; the body extends upward, so the
/// geographic point sits exactly under the triangle.
pub fn triangle_points(anchor_x: f32, anchor_y: f32) -> [(f32, f32); 3] {
    let half = STATION_ICON_SIZE / 2.0;
    [
        (anchor_x, anchor_y),
        (anchor_x - half, anchor_y - STATION_ICON_SIZE),
        (anchor_x + half, anchor_y - STATION_ICON_SIZE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_set_is_fixed() {
        let icons = StationIconSet::default();
        assert_eq!(icons.active.fill, Rgb::new(255, 0, 0));
        assert_eq!(icons.passive.fill, Rgb::new(0x3d, 0x8e, 0xc9));
        assert_eq!(icons.active.outline, icons.passive.outline);
    }

    #[test]
    fn test_for_status_selects_glyph() {
        let icons = StationIconSet::default();
        assert_eq!(*icons.for_status(MarkerStatus::Active), icons.active);
        assert_eq!(*icons.for_status(MarkerStatus::Passive), icons.passive);
    }

    #[test]
    fn test_triangle_tip_is_the_anchor() {
        let points = triangle_points(100.0, 40.0);
        assert_eq!(points[0], (100.0, 40.0));
        // Body extends upward and spans the full icon width.
        assert_eq!(points[1], (90.0, 20.0));
        assert_eq!(points[2], (110.0, 20.0));
    }
}
