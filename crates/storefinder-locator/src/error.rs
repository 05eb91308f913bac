use thiserror::Error;

/// A store coordinate that cannot be placed on the map.
///
/// Non-fatal: the store stays in the listing but is left out of marker
/// rendering and viewport framing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidCoordinate {
    #[error("store {store_id}: {axis} \"{raw}\" is not a number")]
    NotANumber {
        store_id: String,
        axis: &'static str,
        raw: String,
    },

    #[error("store {store_id}: {axis} {value} is outside ±{limit}")]
    OutOfRange {
        store_id: String,
        axis: &'static str,
        value: f64,
        limit: f64,
    },
}

/// The map widget reported that it could not initialise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("map failed to load: {reason}")]
pub struct MapLoadError {
    pub reason: String,
}

impl MapLoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
