use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use storefinder_locator::{resolve_selection, LatLng, RenderedSurface, ZoomPolicy};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

/// `?state=&city=` on the locator route. An absent parameter keeps the
/// configured default; an empty one clears that level.
#[derive(Debug, Default, Deserialize)]
pub(super) struct LocatorQuery {
    pub state: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct MapConfigData {
    pub default_center: LatLng,
    pub default_zoom: f64,
    pub zoom_policy: ZoomPolicy,
    pub api_key: Option<String>,
}

pub(super) async fn list_states(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    let states = state.index.states().into_iter().map(str::to_owned).collect();
    ApiResponse::new(states, req_id.0)
}

pub(super) async fn list_cities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(state_name): Path<String>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    if !state.index.has_state(&state_name) {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("state '{state_name}' not found"),
        ));
    }
    let cities = state
        .index
        .cities(&state_name)
        .into_iter()
        .map(str::to_owned)
        .collect();
    Ok(ApiResponse::new(cities, req_id.0))
}

/// The full locator surface for one selection.
///
/// Requests are independent: the selection is replayed from the configured
/// default, so `?state=Maharashtra` lands on its first city exactly as an
/// interactive session would.
pub(super) async fn get_locator(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<LocatorQuery>,
) -> Json<ApiResponse<RenderedSurface>> {
    let selection = resolve_selection(
        state.settings.default_selection.clone(),
        &state.index,
        query.state.as_deref(),
        query.city.as_deref(),
    );
    tracing::debug!(state = %selection.state, city = %selection.city, "rendering locator");
    let surface = RenderedSurface::build(&state.index, &selection, &state.settings.policy);
    ApiResponse::new(surface, req_id.0)
}

pub(super) async fn get_map_config(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<MapConfigData>> {
    ApiResponse::new(
        MapConfigData {
            default_center: state.settings.default_center,
            default_zoom: state.settings.default_zoom,
            zoom_policy: state.settings.policy,
            api_key: state.maps_api_key.clone(),
        },
        req_id.0,
    )
}
