pub mod error;
pub mod geo;
pub mod hours;
pub mod index;
pub mod locator;
pub mod map;
pub mod selection;
pub mod surface;
pub mod view;
pub mod viewport;

#[cfg(test)]
mod test_support;

pub use error::{InvalidCoordinate, MapLoadError};
pub use geo::{fit_zoom, store_position, Bounds, LatLng};
pub use hours::format_operation_hours;
pub use index::LocationIndex;
pub use locator::{LocatorEvent, LocatorSettings, MapStatus, StoreLocator};
pub use map::{markers_for, MapCall, MapCapability, Marker, RecordingMap};
pub use selection::{
    resolve_selection, SelectionController, SelectionEvent, SelectionScope, SelectionState,
};
pub use surface::{heading, RenderedSurface, SelectOption, StoreCard};
pub use view::FilteredStoreView;
pub use viewport::{apply_command, plan_viewport, ViewportCommand, ViewportController, ZoomPolicy};
