//! The outbound notification seam to the embedding host application.

use crate::event::RowRef;

/// Everything the host learns about a clicked event marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSelection {
    pub lat: f64,
    pub lon: f64,
    pub event_id: String,
    /// The group tag exactly as supplied at creation.
    pub group_tag: String,
    /// The opaque row reference supplied at creation.
    pub row_ref: RowRef,
}

/// Callback contract for the embedding host.
///
/// Supplied optionally at controller construction; when absent, event clicks
/// degrade to popup-only and nothing is reported. This is the system's only
/// outbound notification.
pub trait MapHost {
    /// Invoked when an event marker is clicked.
    fn marker_selected(&mut self, selection: &MarkerSelection);
}
