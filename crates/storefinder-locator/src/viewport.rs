//! Map framing for the visible store subset.
//!
//! [`plan_viewport`] is the pure framing heuristic; [`ViewportController`]
//! tracks the widget's readiness and applies the planned commands.

use serde::{Deserialize, Serialize};
use storefinder_core::{AppConfig, Store};

use crate::error::MapLoadError;
use crate::geo::{store_position, Bounds, LatLng};
use crate::map::MapCapability;
use crate::selection::{SelectionScope, SelectionState};
use crate::view::FilteredStoreView;

/// Zoom levels used when framing stores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomPolicy {
    /// Zoom for a view with exactly one placeable store.
    pub single_store_zoom: f64,
    /// Zoom after the user clicks a marker.
    pub marker_focus_zoom: f64,
    /// Ceiling when no state is selected.
    pub all_states_ceiling: f64,
    /// Ceiling when a state but no city is selected.
    pub state_ceiling: f64,
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self {
            single_store_zoom: 15.0,
            marker_focus_zoom: 16.0,
            all_states_ceiling: 5.0,
            state_ceiling: 8.0,
        }
    }
}

impl ZoomPolicy {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            single_store_zoom: config.single_store_zoom,
            marker_focus_zoom: config.marker_focus_zoom,
            all_states_ceiling: config.all_states_zoom_ceiling,
            state_ceiling: config.state_zoom_ceiling,
        }
    }

    /// Ceiling applied after a bounds fit. A fully narrowed selection keeps
    /// the natural fit.
    #[must_use]
    pub fn ceiling_for(&self, scope: SelectionScope) -> Option<f64> {
        match scope {
            SelectionScope::AllStates => Some(self.all_states_ceiling),
            SelectionScope::State => Some(self.state_ceiling),
            SelectionScope::City => None,
        }
    }
}

/// One-shot instruction for the map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewportCommand {
    /// Centre on a point and zoom to exactly `zoom_ceiling`; a one-point fit
    /// would otherwise run to the widget's maximum zoom.
    Center { center: LatLng, zoom_ceiling: f64 },
    /// Fit the box, then zoom out to `zoom_ceiling` if the fit went past it.
    Bounds {
        bounds: Bounds,
        zoom_ceiling: Option<f64>,
    },
}

/// Decide how to frame `view`, or `None` to leave the map where it is.
#[must_use]
pub fn plan_viewport(
    view: &FilteredStoreView<'_>,
    selection: &SelectionState,
    policy: &ZoomPolicy,
) -> Option<ViewportCommand> {
    let points: Vec<LatLng> = view
        .positioned()
        .into_iter()
        .map(|(_, point)| point)
        .collect();

    match points.as_slice() {
        [] => None,
        [only] => Some(ViewportCommand::Center {
            center: *only,
            zoom_ceiling: policy.single_store_zoom,
        }),
        _ => Bounds::covering(points.iter().copied()).map(|bounds| ViewportCommand::Bounds {
            bounds,
            zoom_ceiling: policy.ceiling_for(selection.scope()),
        }),
    }
}

/// Issue `command` against the map.
pub fn apply_command<M>(map: &mut M, command: &ViewportCommand)
where
    M: MapCapability + ?Sized,
{
    match command {
        ViewportCommand::Center {
            center,
            zoom_ceiling,
        } => {
            map.set_center(*center);
            map.set_zoom(*zoom_ceiling);
        }
        ViewportCommand::Bounds {
            bounds,
            zoom_ceiling,
        } => {
            map.fit_bounds(bounds);
            if let (Some(ceiling), Some(current)) = (*zoom_ceiling, map.zoom()) {
                if current > ceiling {
                    map.set_zoom(ceiling);
                }
            }
        }
    }
}

/// Whether the widget can currently take commands.
#[derive(Debug, Clone, PartialEq, Eq)]
enum MapReadiness {
    Pending,
    Ready,
    Failed(MapLoadError),
    Detached,
}

/// Applies viewport commands once the map widget is ready.
#[derive(Debug, Clone)]
pub struct ViewportController {
    policy: ZoomPolicy,
    readiness: MapReadiness,
    last_command: Option<ViewportCommand>,
}

impl ViewportController {
    #[must_use]
    pub fn new(policy: ZoomPolicy) -> Self {
        Self {
            policy,
            readiness: MapReadiness::Pending,
            last_command: None,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.readiness == MapReadiness::Ready
    }

    #[must_use]
    pub fn failure(&self) -> Option<&MapLoadError> {
        match &self.readiness {
            MapReadiness::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Most recent command applied to the map.
    #[must_use]
    pub fn last_command(&self) -> Option<&ViewportCommand> {
        self.last_command.as_ref()
    }

    /// The widget finished initialising: frame the current view.
    pub fn on_ready<M>(
        &mut self,
        map: &mut M,
        view: &FilteredStoreView<'_>,
        selection: &SelectionState,
    ) -> Option<ViewportCommand>
    where
        M: MapCapability + ?Sized,
    {
        if let MapReadiness::Failed(e) = &self.readiness {
            tracing::warn!(error = %e, "ignoring ready signal from a map that failed to load");
            return None;
        }
        self.readiness = MapReadiness::Ready;
        self.refresh(map, view, selection)
    }

    /// The widget could not load. No further commands are issued.
    pub fn on_error(&mut self, error: MapLoadError) {
        tracing::warn!(error = %error, "map unavailable; store list remains usable");
        self.readiness = MapReadiness::Failed(error);
    }

    /// The widget was torn down.
    pub fn detach(&mut self) {
        if self.readiness == MapReadiness::Ready {
            self.readiness = MapReadiness::Detached;
        }
    }

    /// Reframe after the filtered view changed. No-op until the map is ready.
    pub fn refresh<M>(
        &mut self,
        map: &mut M,
        view: &FilteredStoreView<'_>,
        selection: &SelectionState,
    ) -> Option<ViewportCommand>
    where
        M: MapCapability + ?Sized,
    {
        if !self.is_ready() {
            return None;
        }
        let command = plan_viewport(view, selection, &self.policy)?;
        self.issue(map, command)
    }

    /// Close-up on a clicked marker. Holds until the next reframe.
    pub fn focus_store<M>(&mut self, map: &mut M, store: &Store) -> Option<ViewportCommand>
    where
        M: MapCapability + ?Sized,
    {
        if !self.is_ready() {
            return None;
        }
        let center = match store_position(store) {
            Ok(center) => center,
            Err(e) => {
                tracing::debug!(error = %e, "clicked store cannot be focused");
                return None;
            }
        };
        map.set_zoom(self.policy.marker_focus_zoom);
        map.pan_to(center);
        let command = ViewportCommand::Center {
            center,
            zoom_ceiling: self.policy.marker_focus_zoom,
        };
        tracing::debug!(store_id = %store.id, ?command, "focused marker");
        self.last_command = Some(command.clone());
        Some(command)
    }

    fn issue<M>(&mut self, map: &mut M, command: ViewportCommand) -> Option<ViewportCommand>
    where
        M: MapCapability + ?Sized,
    {
        tracing::debug!(?command, "applying viewport command");
        apply_command(map, &command);
        self.last_command = Some(command.clone());
        Some(command)
    }
}

#[cfg(test)]
#[path = "viewport_test.rs"]
mod tests;
