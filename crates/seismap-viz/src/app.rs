//! Main application state and frame loop.

use eframe::{App, CreationContext, Frame};
use egui::{Context, RichText, ScrollArea};
use walkers::{lat_lon, sources::OpenStreetMap, HttpOptions, HttpTiles, Map, MapMemory, Position};

use seismap_core::{MapController, Popup};

use crate::layer::{MarkerHit, MarkerLayer};
use crate::settings::LayerVisibility;

/// The seismap view: slippy-map canvas plus the marker control panel.
pub struct SeisMapApp {
    controller: MapController,
    tiles: HttpTiles,
    map_memory: MapMemory,
    home: Position,
    visibility: LayerVisibility,
    popup: Option<Popup>,
    show_sidebar: bool,
}

impl SeisMapApp {
    /// Create the view centered on `(lat, lon)`.
    ///
    /// The controller arrives fully constructed; whether a host callback is
    /// attached was decided by the caller.
    pub fn new(cc: &CreationContext<'_>, controller: MapController, lat: f64, lon: f64) -> Self {
        let tiles = HttpTiles::with_options(
            OpenStreetMap,
            HttpOptions::default(),
            cc.egui_ctx.clone(),
        );

        // Start at continent scale rather than the widget's street-level
        // default.
        let mut map_memory = MapMemory::default();
        if map_memory.set_zoom(4.0).is_err() {
            tracing::debug!("initial zoom out of range, keeping default");
        }

        Self {
            controller,
            tiles,
            map_memory,
            home: lat_lon(lat, lon),
            visibility: LayerVisibility::default(),
            popup: None,
            show_sidebar: true,
        }
    }

    fn side_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Layers");
        ui.checkbox(&mut self.visibility.stations, "stations");
        ui.checkbox(&mut self.visibility.matched, "matched events");
        ui.checkbox(&mut self.visibility.isc, "isc events");
        ui.checkbox(&mut self.visibility.oth, "oth events");
        ui.checkbox(&mut self.visibility.ungrouped, "ungrouped events");

        ui.separator();
        ui.heading("Stations");
        ui.horizontal(|ui| {
            if ui.button("all active").clicked() {
                self.controller.set_stations_active();
            }
            if ui.button("all passive").clicked() {
                self.controller.set_stations_passive();
            }
        });

        let mut station_ids: Vec<String> = self
            .controller
            .stations
            .iter()
            .map(|e| e.id.clone())
            .collect();
        station_ids.sort();
        ScrollArea::vertical()
            .id_salt("station_list")
            .max_height(140.0)
            .show(ui, |ui| {
                for id in &station_ids {
                    let active = self
                        .controller
                        .stations
                        .get(id)
                        .is_some_and(|e| e.status.is_active());
                    let label = if active {
                        RichText::new(id).strong()
                    } else {
                        RichText::new(id)
                    };
                    if ui.selectable_label(active, label).clicked() {
                        self.popup = self.controller.station_clicked(id);
                    }
                }
            });

        ui.separator();
        ui.heading("Events");
        ui.horizontal(|ui| {
            if ui.button("all active").clicked() {
                self.controller.set_events_active();
            }
            if ui.button("all passive").clicked() {
                self.controller.set_events_passive();
            }
        });
        if ui.button("reset marker sizes").clicked() {
            self.controller.reset_marker_sizes();
        }

        let mut event_ids: Vec<String> =
            self.controller.events.iter().map(|e| e.id.clone()).collect();
        event_ids.sort();
        ScrollArea::vertical()
            .id_salt("event_list")
            .max_height(200.0)
            .show(ui, |ui| {
                for id in &event_ids {
                    let active = self
                        .controller
                        .events
                        .get(id)
                        .is_some_and(|e| e.status.is_active());
                    if ui.selectable_label(active, id).clicked() {
                        // The list stands in for the host's catalogue table:
                        // selecting a row highlights the event exclusively.
                        self.controller.highlight_event(id);
                    }
                }
            });
    }
}

impl App for SeisMapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("seismap").strong());
                ui.separator();
                ui.toggle_value(&mut self.show_sidebar, "controls");
                ui.separator();
                ui.label(format!(
                    "{} stations, {} events",
                    self.controller.stations.len(),
                    self.controller.events.len()
                ));
            });
        });

        if self.show_sidebar {
            egui::SidePanel::right("controls")
                .default_width(220.0)
                .show(ctx, |ui| self.side_panel(ui));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let mut clicked: Option<MarkerHit> = None;
                let map = Map::new(Some(&mut self.tiles), &mut self.map_memory, self.home)
                    .with_plugin(MarkerLayer {
                        controller: &self.controller,
                        visibility: &self.visibility,
                        popup: self.popup.as_ref(),
                        clicked: &mut clicked,
                    });
                ui.add(map);

                match clicked {
                    Some(MarkerHit::Station(id)) => {
                        self.popup = self.controller.station_clicked(&id);
                    }
                    Some(MarkerHit::Event(id)) => {
                        self.popup = self.controller.event_clicked(&id);
                    }
                    Some(MarkerHit::Background) => {
                        self.popup = None;
                    }
                    None => {}
                }
            });
    }
}
