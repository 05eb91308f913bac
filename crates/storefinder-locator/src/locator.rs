//! One interactive locator session.
//!
//! [`StoreLocator`] owns the selection, the viewport controller and an
//! optional map handle. Everything that happens to it (user picks, widget
//! life-cycle signals, marker clicks) arrives through [`StoreLocator::handle`].

use std::sync::Arc;

use serde::Serialize;
use storefinder_core::AppConfig;

use crate::error::MapLoadError;
use crate::geo::LatLng;
use crate::index::LocationIndex;
use crate::map::{markers_for, MapCapability};
use crate::selection::{SelectionController, SelectionEvent, SelectionState};
use crate::surface::RenderedSurface;
use crate::view::FilteredStoreView;
use crate::viewport::{ViewportCommand, ViewportController, ZoomPolicy};

pub const MAP_ERROR_TITLE: &str = "Error loading map";
pub const MAP_ERROR_DETAIL: &str = "Please check your internet connection and try again.";

/// Session defaults taken from configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocatorSettings {
    pub default_selection: SelectionState,
    pub policy: ZoomPolicy,
    /// Camera before the first fit.
    pub default_center: LatLng,
    pub default_zoom: f64,
}

impl Default for LocatorSettings {
    fn default() -> Self {
        Self {
            default_selection: SelectionState::new("Delhi", "New Delhi"),
            policy: ZoomPolicy::default(),
            default_center: LatLng::new(28.6139, 77.2090),
            default_zoom: 5.0,
        }
    }
}

impl LocatorSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            default_selection: SelectionState::new(
                config.default_state.clone(),
                config.default_city.clone(),
            ),
            policy: ZoomPolicy::from_config(config),
            default_center: LatLng::new(config.default_center_lat, config.default_center_lng),
            default_zoom: config.default_zoom,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorEvent {
    SelectState(String),
    SelectCity(String),
    MapReady,
    MapFailed(MapLoadError),
    MarkerClicked(String),
}

/// What the map region should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MapStatus {
    Loading,
    Ready,
    Failed { title: String, detail: String },
}

impl MapStatus {
    fn failed() -> Self {
        Self::Failed {
            title: MAP_ERROR_TITLE.to_string(),
            detail: MAP_ERROR_DETAIL.to_string(),
        }
    }
}

pub struct StoreLocator<M> {
    index: Arc<LocationIndex>,
    settings: LocatorSettings,
    selection: SelectionController,
    viewport: ViewportController,
    map: Option<M>,
    status: MapStatus,
}

impl<M: MapCapability> StoreLocator<M> {
    /// Start a session at the configured default selection. The map, if
    /// any, receives no commands until it reports ready.
    #[must_use]
    pub fn new(index: Arc<LocationIndex>, settings: LocatorSettings, map: Option<M>) -> Self {
        let selection = SelectionController::new(settings.default_selection.clone(), &index);
        let viewport = ViewportController::new(settings.policy);
        Self {
            index,
            settings,
            selection,
            viewport,
            map,
            status: MapStatus::Loading,
        }
    }

    /// Feed one event into the session. Returns the viewport command the
    /// event caused, if any.
    pub fn handle(&mut self, event: LocatorEvent) -> Option<ViewportCommand> {
        match event {
            LocatorEvent::SelectState(state) => self.select(&SelectionEvent::SelectState(state)),
            LocatorEvent::SelectCity(city) => self.select(&SelectionEvent::SelectCity(city)),
            LocatorEvent::MapReady => self.map_ready(),
            LocatorEvent::MapFailed(error) => {
                self.status = MapStatus::failed();
                self.viewport.on_error(error);
                None
            }
            LocatorEvent::MarkerClicked(store_id) => self.marker_clicked(&store_id),
        }
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        self.selection.current()
    }

    #[must_use]
    pub fn view(&self) -> FilteredStoreView<'_> {
        FilteredStoreView::new(&self.index, self.selection.current())
    }

    #[must_use]
    pub fn surface(&self) -> RenderedSurface {
        RenderedSurface::build(&self.index, self.selection.current(), &self.settings.policy)
    }

    #[must_use]
    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn map_mut(&mut self) -> Option<&mut M> {
        self.map.as_mut()
    }

    /// Tear down the map. Later selection changes only update the listing.
    pub fn detach_map(&mut self) -> Option<M> {
        self.viewport.detach();
        self.map.take()
    }

    #[must_use]
    pub fn map_status(&self) -> &MapStatus {
        &self.status
    }

    #[must_use]
    pub fn last_viewport(&self) -> Option<&ViewportCommand> {
        self.viewport.last_command()
    }

    fn select(&mut self, event: &SelectionEvent) -> Option<ViewportCommand> {
        if !self.selection.dispatch(event, &self.index) {
            return None;
        }
        self.redraw_map(false)
    }

    fn map_ready(&mut self) -> Option<ViewportCommand> {
        if self.map.is_none() {
            tracing::debug!("ready signal without an attached map");
            return None;
        }
        if matches!(self.status, MapStatus::Failed { .. }) {
            return None;
        }
        self.status = MapStatus::Ready;
        self.redraw_map(true)
    }

    /// Re-render markers and reframe. `first` marks the initial ready signal.
    fn redraw_map(&mut self, first: bool) -> Option<ViewportCommand> {
        let map = self.map.as_mut()?;
        if !first && !self.viewport.is_ready() {
            return None;
        }
        let selection = self.selection.current();
        let view = FilteredStoreView::new(&self.index, selection);
        map.render_markers(&markers_for(&view));
        if first {
            self.viewport.on_ready(map, &view, selection)
        } else {
            self.viewport.refresh(map, &view, selection)
        }
    }

    fn marker_clicked(&mut self, store_id: &str) -> Option<ViewportCommand> {
        let map = self.map.as_mut()?;
        let view = FilteredStoreView::new(&self.index, self.selection.current());
        let Some(store) = view.find(store_id) else {
            tracing::debug!(store_id, "click on a store outside the current listing");
            return None;
        };
        self.viewport.focus_store(map, store)
    }
}

#[cfg(test)]
#[path = "locator_test.rs"]
mod tests;
