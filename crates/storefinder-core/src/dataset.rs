//! Dataset shape validation and loading.
//!
//! The dealer feed is a two-level map `state → city → [store]`, either at the
//! document root or wrapped under a `cityStateMap` key. Validation is
//! all-or-nothing: a single malformed bucket or store rejects the dataset.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::store::Store;

/// Key under which some exports nest the state map.
pub const WRAPPER_KEY: &str = "cityStateMap";

/// Validated dataset, keyed (and therefore ordered) by state then city.
pub type StoreTree = BTreeMap<String, BTreeMap<String, Vec<Store>>>;

#[derive(Debug, Error)]
pub enum MalformedDatasetError {
    #[error("dataset root must be an object keyed by state, found {found}")]
    RootNotObject { found: &'static str },

    #[error("state '{state}' must map to an object keyed by city, found {found}")]
    StateNotObject { state: String, found: &'static str },

    #[error("city '{city}' in state '{state}' must map to an array of stores, found {found}")]
    CityNotArray {
        state: String,
        city: String,
        found: &'static str,
    },

    #[error("store #{position} in {city}, {state} is invalid: {source}")]
    InvalidStore {
        state: String,
        city: String,
        position: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "store '{store_id}' is listed under {city}, {state} but declares {declared_city}, {declared_state}"
    )]
    BucketMismatch {
        store_id: String,
        state: String,
        city: String,
        declared_state: String,
        declared_city: String,
    },
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Malformed(#[from] MalformedDatasetError),
}

/// Validate a parsed JSON document and convert it into a [`StoreTree`].
///
/// Stores with an empty `state` or `city` inherit the keys of the bucket they
/// are listed under.
///
/// # Errors
///
/// Returns [`MalformedDatasetError`] if the document is not a two-level map of
/// store arrays, a store record cannot be decoded, or a store declares a
/// different state/city than its bucket.
pub fn parse_dataset(raw: &Value) -> Result<StoreTree, MalformedDatasetError> {
    let root = match raw {
        Value::Object(map) => match map.get(WRAPPER_KEY) {
            Some(inner) => inner,
            None => raw,
        },
        other => return Err(MalformedDatasetError::RootNotObject { found: kind(other) }),
    };
    let Value::Object(states) = root else {
        return Err(MalformedDatasetError::RootNotObject { found: kind(root) });
    };

    let mut tree = StoreTree::new();
    for (state, cities) in states {
        let Value::Object(cities) = cities else {
            return Err(MalformedDatasetError::StateNotObject {
                state: state.clone(),
                found: kind(cities),
            });
        };

        let mut by_city = BTreeMap::new();
        for (city, stores) in cities {
            let Value::Array(stores) = stores else {
                return Err(MalformedDatasetError::CityNotArray {
                    state: state.clone(),
                    city: city.clone(),
                    found: kind(stores),
                });
            };

            let bucket = stores
                .iter()
                .enumerate()
                .map(|(position, value)| decode_store(state, city, position, value))
                .collect::<Result<Vec<_>, _>>()?;
            by_city.insert(city.clone(), bucket);
        }
        tree.insert(state.clone(), by_city);
    }

    Ok(tree)
}

fn decode_store(
    state: &str,
    city: &str,
    position: usize,
    value: &Value,
) -> Result<Store, MalformedDatasetError> {
    let mut store: Store = serde_json::from_value(value.clone()).map_err(|source| {
        MalformedDatasetError::InvalidStore {
            state: state.to_string(),
            city: city.to_string(),
            position,
            source,
        }
    })?;

    if store.state.trim().is_empty() {
        store.state = state.to_string();
    }
    if store.city.trim().is_empty() {
        store.city = city.to_string();
    }
    if store.state != state || store.city != city {
        return Err(MalformedDatasetError::BucketMismatch {
            store_id: store.id,
            state: state.to_string(),
            city: city.to_string(),
            declared_state: store.state,
            declared_city: store.city,
        });
    }

    Ok(store)
}

/// Parse and validate a dataset from JSON text.
///
/// # Errors
///
/// Returns [`DatasetError::Json`] for invalid JSON and
/// [`DatasetError::Malformed`] for a document of the wrong shape.
pub fn parse_dataset_str(content: &str) -> Result<StoreTree, DatasetError> {
    let raw: Value = serde_json::from_str(content)?;
    Ok(parse_dataset(&raw)?)
}

/// Read, parse and validate the dataset file at `path`.
///
/// # Errors
///
/// Returns [`DatasetError`] if the file cannot be read, is not JSON, or does
/// not have the expected shape.
pub fn load_dataset(path: &Path) -> Result<StoreTree, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let tree = parse_dataset_str(&content)?;

    tracing::info!(
        path = %path.display(),
        states = tree.len(),
        stores = tree.values().flat_map(BTreeMap::values).map(Vec::len).sum::<usize>(),
        "loaded store dataset"
    );
    Ok(tree)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod tests;
