//! Color conversion and glyph geometry helpers for the marker layer.

use egui::{Color32, Pos2};
use seismap_core::{triangle_points, Rgb};

/// Convert a core color plus opacity into an egui color.
pub fn color32(rgb: Rgb, opacity: f32) -> Color32 {
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(rgb.r, rgb.g, rgb.b, a)
}

/// Screen-space triangle for a station glyph anchored at `anchor`.
pub fn station_triangle(anchor: Pos2) -> [Pos2; 3] {
    let points = triangle_points(anchor.x, anchor.y);
    [
        Pos2::new(points[0].0, points[0].1),
        Pos2::new(points[1].0, points[1].1),
        Pos2::new(points[2].0, points[2].1),
    ]
}

/// Point-in-triangle test via the ray-casting rule.
pub fn triangle_contains(triangle: &[Pos2; 3], point: Pos2) -> bool {
    let mut inside = false;
    let mut j = 2;
    for i in 0..3 {
        let pi = triangle[i];
        let pj = triangle[j];
        if ((pi.y > point.y) != (pj.y > point.y))
            && (point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x)
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion_applies_opacity() {
        let c = color32(Rgb::new(255, 0, 0), 0.5);
        assert_eq!(c, Color32::from_rgba_unmultiplied(255, 0, 0, 128));
    }

    #[test]
    fn test_triangle_hit_test() {
        let triangle = station_triangle(Pos2::new(100.0, 40.0));

        // Center of the glyph body.
        assert!(triangle_contains(&triangle, Pos2::new(100.0, 30.0)));
        // Just outside the left edge.
        assert!(!triangle_contains(&triangle, Pos2::new(88.0, 30.0)));
        // Above the glyph entirely.
        assert!(!triangle_contains(&triangle, Pos2::new(100.0, 10.0)));
    }
}
