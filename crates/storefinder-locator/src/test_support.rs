//! Shared fixtures for unit tests.

use std::collections::BTreeMap;

use storefinder_core::{OperationHours, Store, StoreTree};

use crate::index::LocationIndex;

pub(crate) fn store(id: &str, state: &str, city: &str, lat: &str, lng: &str) -> Store {
    Store {
        id: id.to_string(),
        name: format!("Store {id}"),
        address: format!("{id} Main Road"),
        area: String::new(),
        pincode: "000000".to_string(),
        latitude: lat.to_string(),
        longitude: lng.to_string(),
        phone_number: "000-0000".to_string(),
        additional_phones: String::new(),
        dealer_operation_hours: OperationHours::default(),
        average_rating: 0.0,
        state: state.to_string(),
        city: city.to_string(),
        store_type: None,
        store_page_url: None,
        services: BTreeMap::new(),
    }
}

pub(crate) fn index_of(stores: Vec<Store>) -> LocationIndex {
    let mut tree = StoreTree::new();
    for s in stores {
        tree.entry(s.state.clone())
            .or_default()
            .entry(s.city.clone())
            .or_default()
            .push(s);
    }
    LocationIndex::new(tree)
}

/// Delhi/New Delhi: A; Maharashtra/Mumbai: B; Maharashtra/Pune: C.
pub(crate) fn india_index() -> LocationIndex {
    index_of(vec![
        store("A", "Delhi", "New Delhi", "28.61", "77.20"),
        store("B", "Maharashtra", "Mumbai", "19.05", "72.82"),
        store("C", "Maharashtra", "Pune", "18.52", "73.85"),
    ])
}

pub(crate) fn ids(stores: &[&Store]) -> Vec<String> {
    stores.iter().map(|s| s.id.clone()).collect()
}
