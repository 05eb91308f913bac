//! The map widget seen as a narrow capability.
//!
//! The widget's asynchronous life cycle (ready, load error, marker clicks) is
//! delivered to the locator as events; this trait only covers the synchronous
//! commands the locator issues once the widget is up.

use serde::Serialize;

use crate::geo::{fit_zoom, Bounds, LatLng};
use crate::view::FilteredStoreView;

/// Highest zoom level most tile providers serve.
pub const MAX_MAP_ZOOM: f64 = 21.0;

pub trait MapCapability {
    fn set_center(&mut self, point: LatLng);
    /// Move and zoom so `bounds` fills the viewport.
    fn fit_bounds(&mut self, bounds: &Bounds);
    /// Current zoom, or `None` if the widget has not settled on one yet.
    fn zoom(&self) -> Option<f64>;
    fn set_zoom(&mut self, zoom: f64);
    fn pan_to(&mut self, point: LatLng);
    fn render_markers(&mut self, markers: &[Marker]);
}

/// A pin for one store. Clicking it should be reported back as a
/// marker-click event carrying `store_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub store_id: String,
    pub title: String,
    pub position: LatLng,
}

/// Pins for every store in `view` that has usable coordinates.
#[must_use]
pub fn markers_for(view: &FilteredStoreView<'_>) -> Vec<Marker> {
    view.positioned()
        .into_iter()
        .map(|(store, position)| Marker {
            store_id: store.id.clone(),
            title: store.name.clone(),
            position,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    SetCenter(LatLng),
    FitBounds(Bounds),
    SetZoom(f64),
    PanTo(LatLng),
    RenderMarkers(Vec<Marker>),
}

/// In-memory map that records every command and tracks the resulting
/// camera, resolving `fit_bounds` to the zoom a real widget of the same
/// pixel size would choose.
#[derive(Debug, Clone)]
pub struct RecordingMap {
    center: LatLng,
    zoom: f64,
    width_px: f64,
    height_px: f64,
    markers: Vec<Marker>,
    calls: Vec<MapCall>,
}

impl RecordingMap {
    /// A 640×500 viewport at the given camera position.
    #[must_use]
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self::with_viewport(center, zoom, 640.0, 500.0)
    }

    #[must_use]
    pub fn with_viewport(center: LatLng, zoom: f64, width_px: f64, height_px: f64) -> Self {
        Self {
            center,
            zoom,
            width_px,
            height_px,
            markers: Vec::new(),
            calls: Vec::new(),
        }
    }

    #[must_use]
    pub fn center(&self) -> LatLng {
        self.center
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn calls(&self) -> &[MapCall] {
        &self.calls
    }

    /// Drain the recorded calls.
    pub fn take_calls(&mut self) -> Vec<MapCall> {
        std::mem::take(&mut self.calls)
    }
}

impl MapCapability for RecordingMap {
    fn set_center(&mut self, point: LatLng) {
        self.center = point;
        self.calls.push(MapCall::SetCenter(point));
    }

    fn fit_bounds(&mut self, bounds: &Bounds) {
        self.center = bounds.center();
        self.zoom = fit_zoom(bounds, self.width_px, self.height_px, MAX_MAP_ZOOM);
        self.calls.push(MapCall::FitBounds(*bounds));
    }

    fn zoom(&self) -> Option<f64> {
        Some(self.zoom)
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom;
        self.calls.push(MapCall::SetZoom(zoom));
    }

    fn pan_to(&mut self, point: LatLng) {
        self.center = point;
        self.calls.push(MapCall::PanTo(point));
    }

    fn render_markers(&mut self, markers: &[Marker]) {
        self.markers = markers.to_vec();
        self.calls.push(MapCall::RenderMarkers(markers.to_vec()));
    }
}
