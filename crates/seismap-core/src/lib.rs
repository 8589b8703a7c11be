//! Core domain model for the seismap catalogue map view.
//!
//! Everything in this crate is plain state with no GUI dependency: two
//! identifier-keyed registries (seismic stations and catalogue events), the
//! styling rules that distinguish an *active* marker from a *passive* one,
//! and a controller that owns both registries plus an optional host callback
//! for click notifications. The presentation layer redraws markers from this
//! state every frame.

mod catalog;
mod color;
mod controller;
mod error;
mod event;
mod host;
mod icons;
mod marker;
mod station;

pub use catalog::{Catalog, EventRecord, StationRecord};
pub use color::Rgb;
pub use controller::{MapController, Popup};
pub use error::{CatalogError, CatalogResult};
pub use event::{EventEntry, EventGroup, EventRegistry, RowRef};
pub use host::{MapHost, MarkerSelection};
pub use icons::{triangle_points, StationIcon, StationIconSet, STATION_ICON_SIZE};
pub use marker::{
    station_draw_priority, MarkerStatus, MarkerStyle, ACTIVE_FILL_OPACITY, ACTIVE_STROKE_OPACITY,
    DEFAULT_EVENT_RADIUS, PASSIVE_FILL_OPACITY, PASSIVE_STROKE_OPACITY,
};
pub use station::{StationEntry, StationRegistry};
