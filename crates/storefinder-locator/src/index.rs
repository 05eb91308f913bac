//! Read-only `state → city → stores` index over the dataset.

use serde_json::Value;
use storefinder_core::{parse_dataset, MalformedDatasetError, Store, StoreTree};

/// Immutable two-level view over the store dataset.
///
/// States and cities iterate alphabetically; stores within a bucket keep
/// their dataset order.
#[derive(Debug, Clone, Default)]
pub struct LocationIndex {
    tree: StoreTree,
}

impl LocationIndex {
    #[must_use]
    pub fn new(tree: StoreTree) -> Self {
        Self { tree }
    }

    /// Build an index from a raw JSON dataset (flat or `cityStateMap`-wrapped).
    ///
    /// # Errors
    ///
    /// Returns [`MalformedDatasetError`] if the document is not a two-level
    /// mapping of store arrays. No partial index is produced.
    pub fn from_json(raw: &Value) -> Result<Self, MalformedDatasetError> {
        parse_dataset(raw).map(Self::new)
    }

    /// Distinct state names, sorted.
    #[must_use]
    pub fn states(&self) -> Vec<&str> {
        self.tree.keys().map(String::as_str).collect()
    }

    /// Distinct city names under `state`, sorted. Empty for an empty or
    /// unknown state.
    #[must_use]
    pub fn cities(&self, state: &str) -> Vec<&str> {
        if state.is_empty() {
            return Vec::new();
        }
        self.tree
            .get(state)
            .map(|cities| cities.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Stores matching the (state, city) filter.
    ///
    /// - empty state: every store, in index order
    /// - state only: every store of that state
    /// - both: exactly that bucket, or nothing if it does not exist
    #[must_use]
    pub fn stores(&self, state: &str, city: &str) -> Vec<&Store> {
        if state.is_empty() {
            return self
                .tree
                .values()
                .flat_map(|cities| cities.values())
                .flatten()
                .collect();
        }
        let Some(cities) = self.tree.get(state) else {
            return Vec::new();
        };
        if city.is_empty() {
            return cities.values().flatten().collect();
        }
        cities
            .get(city)
            .map(|bucket| bucket.iter().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_state(&self, state: &str) -> bool {
        self.tree.contains_key(state)
    }

    #[must_use]
    pub fn has_city(&self, state: &str, city: &str) -> bool {
        self.tree
            .get(state)
            .is_some_and(|cities| cities.contains_key(city))
    }

    /// First city of `state` in display order.
    #[must_use]
    pub fn first_city(&self, state: &str) -> Option<&str> {
        self.tree
            .get(state)
            .and_then(|cities| cities.keys().next())
            .map(String::as_str)
    }

    #[must_use]
    pub fn find_store(&self, store_id: &str) -> Option<&Store> {
        self.stores("", "").into_iter().find(|s| s.id == store_id)
    }

    /// Total number of stores.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree
            .values()
            .flat_map(|cities| cities.values())
            .map(Vec::len)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
