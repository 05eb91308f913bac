//! The subset of stores visible under the current selection.

use storefinder_core::Store;

use crate::geo::{store_position, LatLng};
use crate::index::LocationIndex;
use crate::selection::SelectionState;

/// Stores matching a selection, freshly derived on every change.
#[derive(Debug, Clone)]
pub struct FilteredStoreView<'a> {
    stores: Vec<&'a Store>,
}

impl<'a> FilteredStoreView<'a> {
    #[must_use]
    pub fn new(index: &'a LocationIndex, selection: &SelectionState) -> Self {
        Self {
            stores: index.stores(&selection.state, &selection.city),
        }
    }

    /// Every matching store, including those with unusable coordinates.
    #[must_use]
    pub fn stores(&self) -> &[&'a Store] {
        &self.stores
    }

    /// Matching stores that can be placed on the map, with their positions.
    ///
    /// Stores whose coordinates do not parse are skipped here only.
    #[must_use]
    pub fn positioned(&self) -> Vec<(&'a Store, LatLng)> {
        self.stores
            .iter()
            .filter_map(|&store| match store_position(store) {
                Ok(position) => Some((store, position)),
                Err(e) => {
                    tracing::debug!(error = %e, "store left off the map");
                    None
                }
            })
            .collect()
    }

    #[must_use]
    pub fn find(&self, store_id: &str) -> Option<&'a Store> {
        self.stores.iter().copied().find(|s| s.id == store_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}
