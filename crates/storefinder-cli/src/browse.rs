//! `browse`: drive a full locator session from the terminal.
//!
//! There is no map widget in a terminal, so the session talks to a
//! [`LoggingMap`] that records the camera like a real widget would and
//! emits every command as a `tracing` event.

use std::sync::Arc;

use storefinder_locator::{
    Bounds, LatLng, LocationIndex, LocatorEvent, LocatorSettings, MapCapability, Marker,
    RecordingMap, RenderedSurface, StoreLocator,
};

use crate::listing::truncate;
use crate::SelectionArgs;

/// Headless map that logs each command it receives.
#[derive(Debug, Clone)]
pub(crate) struct LoggingMap {
    inner: RecordingMap,
}

impl LoggingMap {
    pub(crate) fn new(center: LatLng, zoom: f64) -> Self {
        Self {
            inner: RecordingMap::new(center, zoom),
        }
    }

    pub(crate) fn center(&self) -> LatLng {
        self.inner.center()
    }
}

impl MapCapability for LoggingMap {
    fn set_center(&mut self, point: LatLng) {
        tracing::info!(lat = point.lat, lng = point.lng, "map: set center");
        self.inner.set_center(point);
    }

    fn fit_bounds(&mut self, bounds: &Bounds) {
        self.inner.fit_bounds(bounds);
        tracing::info!(
            south = bounds.south_west.lat,
            west = bounds.south_west.lng,
            north = bounds.north_east.lat,
            east = bounds.north_east.lng,
            zoom = ?self.inner.zoom(),
            "map: fit bounds"
        );
    }

    fn zoom(&self) -> Option<f64> {
        self.inner.zoom()
    }

    fn set_zoom(&mut self, zoom: f64) {
        tracing::info!(zoom, "map: set zoom");
        self.inner.set_zoom(zoom);
    }

    fn pan_to(&mut self, point: LatLng) {
        tracing::info!(lat = point.lat, lng = point.lng, "map: pan");
        self.inner.pan_to(point);
    }

    fn render_markers(&mut self, markers: &[Marker]) {
        tracing::info!(count = markers.len(), "map: render markers");
        self.inner.render_markers(markers);
    }
}

/// Open a session, signal the map ready, apply the requested picks and
/// optional marker click, then print what the page would show.
pub(crate) fn run_browse(
    index: Arc<LocationIndex>,
    settings: LocatorSettings,
    selection: &SelectionArgs,
    focus: Option<&str>,
) {
    let map = LoggingMap::new(settings.default_center, settings.default_zoom);
    let mut locator = StoreLocator::new(index, settings, Some(map));

    for event in session_events(selection, focus) {
        let clicked = match &event {
            LocatorEvent::MarkerClicked(id) => Some(id.clone()),
            _ => None,
        };
        let command = locator.handle(event);
        if let (Some(store_id), None) = (clicked, &command) {
            tracing::warn!(%store_id, "store is not placeable in the current listing; focus skipped");
        }
    }

    print_surface(&locator.surface());
    if let Some(map) = locator.map() {
        let center = map.center();
        let zoom = map.zoom().unwrap_or(f64::NAN);
        println!();
        println!("map: center ({:.4}, {:.4}) zoom {zoom}", center.lat, center.lng);
    }
}

/// Events a browse run feeds into the session, in order.
pub(crate) fn session_events(selection: &SelectionArgs, focus: Option<&str>) -> Vec<LocatorEvent> {
    let mut events = vec![LocatorEvent::MapReady];
    if let Some(state) = &selection.state {
        events.push(LocatorEvent::SelectState(state.clone()));
    }
    if let Some(city) = &selection.city {
        events.push(LocatorEvent::SelectCity(city.clone()));
    }
    if let Some(store_id) = focus {
        events.push(LocatorEvent::MarkerClicked(store_id.to_string()));
    }
    events
}

fn print_surface(surface: &RenderedSurface) {
    println!("{}", surface.heading);
    if let Some(message) = &surface.empty_message {
        println!("{message}");
        return;
    }
    for card in &surface.stores {
        println!();
        match &card.store_type {
            Some(kind) => println!("{} [{kind}]  #{}", card.name, card.id),
            None => println!("{}  #{}", card.name, card.id),
        }
        println!("  {}", truncate(&card.address, 70));
        if let Some(area) = &card.area {
            println!("  {area}");
        }
        println!("  {}", card.locality);
        if !card.hours.is_empty() {
            println!("  hours: {}", card.hours);
        }
        println!("  phone: {}", card.phones);
        if let Some(rating) = &card.rating {
            println!("  rating: {rating}");
        }
        if let Some(url) = &card.store_page_url {
            println!("  {url}");
        }
    }
}
