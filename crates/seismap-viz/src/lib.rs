//! egui presentation layer for the seismap catalogue map view.
//!
//! Tiles, panning, and zoom come from the `walkers` slippy-map widget;
//! markers are painted on top from `seismap-core` state every frame by the
//! marker layer plugin.

mod app;
mod layer;
mod sample;
mod settings;
mod style;

pub use app::SeisMapApp;
pub use sample::sample_catalog;
pub use settings::LayerVisibility;
