//! Marker painting and click hit-testing on top of the slippy map.
//!
//! Runs as a `walkers` plugin so it can project geographic coordinates into
//! screen space with the map's own transform. Event circles paint first
//! (passive before active, so an active event sits in front), then station
//! triangles in ascending draw priority, then the open popup.

use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Response, Shape, Stroke, StrokeKind, Ui};
use walkers::{lat_lon, Plugin, Projector};

use seismap_core::{
    station_draw_priority, EventEntry, MapController, Popup, StationEntry, STATION_ICON_SIZE,
};

use crate::settings::LayerVisibility;
use crate::style::{color32, station_triangle, triangle_contains};

const EVENT_STROKE_WIDTH: f32 = 2.0;
const POPUP_FONT_SIZE: f32 = 12.0;

/// What a map click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerHit {
    Station(String),
    Event(String),
    /// The map itself; dismisses any open popup.
    Background,
}

/// The marker layer plugin. Borrows controller state immutably and reports
/// the click outcome back through `clicked`; the app applies registry
/// mutations after the map widget returns.
pub struct MarkerLayer<'a> {
    pub controller: &'a MapController,
    pub visibility: &'a LayerVisibility,
    pub popup: Option<&'a Popup>,
    pub clicked: &'a mut Option<MarkerHit>,
}

struct PaintedStation<'e> {
    entry: &'e StationEntry,
    triangle: [Pos2; 3],
    priority: f32,
}

struct PaintedEvent<'e> {
    entry: &'e EventEntry,
    center: Pos2,
}

impl Plugin for MarkerLayer<'_> {
    fn run(self: Box<Self>, ui: &mut Ui, response: &Response, projector: &Projector) {
        let rect = ui.max_rect();
        let to_screen = |lat: f64, lon: f64| -> Pos2 {
            let projected = projector.project(lat_lon(lat, lon));
            egui::pos2(projected.x, projected.y)
        };

        // Events: passive first, active last so activation brings to front.
        let mut passive_events = Vec::new();
        let mut active_events = Vec::new();
        for entry in self.controller.events.iter() {
            if !self.visibility.event_visible(entry.group) {
                continue;
            }
            let center = to_screen(entry.lat, entry.lon);
            if !rect.expand(entry.radius).contains(center) {
                continue;
            }
            let painted = PaintedEvent { entry, center };
            if entry.status.is_active() {
                active_events.push(painted);
            } else {
                passive_events.push(painted);
            }
        }

        // Stations sorted by draw priority; highest paints last.
        let mut stations = Vec::new();
        if self.visibility.stations {
            for entry in self.controller.stations.iter() {
                let anchor = to_screen(entry.lat, entry.lon);
                if !rect.expand(STATION_ICON_SIZE).contains(anchor) {
                    continue;
                }
                stations.push(PaintedStation {
                    entry,
                    triangle: station_triangle(anchor),
                    priority: station_draw_priority(anchor.y - rect.min.y, entry.status),
                });
            }
            stations.sort_by(|a, b| {
                a.priority
                    .partial_cmp(&b.priority)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }

        let painter = ui.painter();

        for painted in passive_events.iter().chain(active_events.iter()) {
            let style = painted.entry.style();
            painter.circle_filled(
                painted.center,
                painted.entry.radius,
                color32(style.color, style.fill_opacity),
            );
            painter.circle_stroke(
                painted.center,
                painted.entry.radius,
                Stroke::new(EVENT_STROKE_WIDTH, color32(style.color, style.stroke_opacity)),
            );
        }

        for painted in &stations {
            let icon = self.controller.icons.for_status(painted.entry.status);
            painter.add(Shape::convex_polygon(
                painted.triangle.to_vec(),
                color32(icon.fill, 1.0),
                Stroke::new(
                    icon.outline_width,
                    color32(icon.outline, icon.outline_opacity),
                ),
            ));
        }

        if let Some(popup) = self.popup {
            draw_popup(painter, to_screen(popup.lat, popup.lon), &popup.text);
        }

        painter.text(
            rect.right_bottom() - egui::vec2(4.0, 2.0),
            Align2::RIGHT_BOTTOM,
            "© OpenStreetMap contributors",
            FontId::proportional(10.0),
            Color32::from_gray(90),
        );

        // Hit-test clicks against the reverse of paint order: stations sit
        // above event circles, topmost first within each kind.
        if response.clicked() {
            if let Some(click_pos) = response.interact_pointer_pos() {
                *self.clicked = Some(hit_test(
                    click_pos,
                    &stations,
                    &active_events,
                    &passive_events,
                ));
            }
        }
    }
}

fn hit_test(
    click_pos: Pos2,
    stations: &[PaintedStation<'_>],
    active_events: &[PaintedEvent<'_>],
    passive_events: &[PaintedEvent<'_>],
) -> MarkerHit {
    for painted in stations.iter().rev() {
        if triangle_contains(&painted.triangle, click_pos) {
            return MarkerHit::Station(painted.entry.id.clone());
        }
    }
    for painted in active_events.iter().rev().chain(passive_events.iter().rev()) {
        if painted.center.distance(click_pos) <= painted.entry.radius {
            return MarkerHit::Event(painted.entry.id.clone());
        }
    }
    MarkerHit::Background
}

/// Identifier callout above the marker, tip offset so the glyph stays
/// visible.
fn draw_popup(painter: &egui::Painter, marker_pos: Pos2, text: &str) {
    let galley = painter.layout_no_wrap(
        text.to_owned(),
        FontId::proportional(POPUP_FONT_SIZE),
        Color32::BLACK,
    );
    let size = galley.size();

    let center = marker_pos - egui::vec2(0.0, STATION_ICON_SIZE + 8.0 + size.y / 2.0);
    let rect = egui::Rect::from_center_size(center, size + egui::vec2(14.0, 8.0));

    painter.rect_filled(
        rect,
        CornerRadius::same(4),
        Color32::from_rgba_unmultiplied(255, 255, 255, 235),
    );
    painter.rect_stroke(
        rect,
        CornerRadius::same(4),
        Stroke::new(1.0, Color32::from_gray(110)),
        StrokeKind::Outside,
    );
    painter.galley(rect.center() - size / 2.0, galley, Color32::BLACK);
}
