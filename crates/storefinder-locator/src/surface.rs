//! Everything a front end needs to draw the locator for one selection.

use serde::Serialize;
use storefinder_core::Store;

use crate::hours::format_operation_hours;
use crate::index::LocationIndex;
use crate::map::{markers_for, Marker};
use crate::selection::{SelectionScope, SelectionState};
use crate::view::FilteredStoreView;
use crate::viewport::{plan_viewport, ViewportCommand, ZoomPolicy};

pub const ALL_STATES_LABEL: &str = "All States";
pub const ALL_CITIES_LABEL: &str = "All Cities";
pub const EMPTY_LISTING_MESSAGE: &str = "No stores found";

/// One entry of a selector. An empty `value` means "no filter".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn named(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }

    fn any(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

/// Display-ready fields of one store in the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreCard {
    pub id: String,
    pub name: String,
    pub store_type: Option<String>,
    pub address: String,
    pub area: Option<String>,
    pub locality: String,
    pub hours: String,
    pub phones: String,
    pub rating: Option<String>,
    pub store_page_url: Option<String>,
}

impl From<&Store> for StoreCard {
    fn from(store: &Store) -> Self {
        let area = store.area.trim();
        Self {
            id: store.id.clone(),
            name: store.name.clone(),
            store_type: store.store_type.clone().filter(|t| !t.trim().is_empty()),
            address: store.address.clone(),
            area: (!area.is_empty()).then(|| area.to_string()),
            locality: store.locality_line(),
            hours: format_operation_hours(&store.dealer_operation_hours),
            phones: store.phone_line(),
            rating: store
                .has_rating()
                .then(|| format!("{:.1} ★", store.average_rating)),
            store_page_url: store.store_page_url.clone().filter(|u| !u.trim().is_empty()),
        }
    }
}

/// Listing heading for a selection.
#[must_use]
pub fn heading(selection: &SelectionState) -> String {
    match selection.scope() {
        SelectionScope::City => format!("Stores in {}, {}", selection.city, selection.state),
        SelectionScope::State => format!("Stores in {}", selection.state),
        SelectionScope::AllStates => "All Stores".to_string(),
    }
}

/// Snapshot of the locator UI for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSurface {
    pub selection: SelectionState,
    pub state_options: Vec<SelectOption>,
    pub city_options: Vec<SelectOption>,
    pub city_selector_enabled: bool,
    pub heading: String,
    pub stores: Vec<StoreCard>,
    /// Shown in place of the listing when it is empty.
    pub empty_message: Option<String>,
    pub markers: Vec<Marker>,
    /// How the map should frame the listing; `None` leaves it unchanged.
    pub viewport: Option<ViewportCommand>,
}

impl RenderedSurface {
    #[must_use]
    pub fn build(index: &LocationIndex, selection: &SelectionState, policy: &ZoomPolicy) -> Self {
        let view = FilteredStoreView::new(index, selection);

        let state_options = std::iter::once(SelectOption::any(ALL_STATES_LABEL))
            .chain(index.states().into_iter().map(SelectOption::named))
            .collect();
        let city_options = std::iter::once(SelectOption::any(ALL_CITIES_LABEL))
            .chain(
                index
                    .cities(&selection.state)
                    .into_iter()
                    .map(SelectOption::named),
            )
            .collect();

        let stores: Vec<StoreCard> = view.stores().iter().map(|&s| StoreCard::from(s)).collect();
        let empty_message = stores
            .is_empty()
            .then(|| EMPTY_LISTING_MESSAGE.to_string());

        Self {
            selection: selection.clone(),
            state_options,
            city_options,
            city_selector_enabled: !selection.state.is_empty(),
            heading: heading(selection),
            stores,
            empty_message,
            markers: markers_for(&view),
            viewport: plan_viewport(&view, selection, policy),
        }
    }
}

#[cfg(test)]
mod tests {
    use storefinder_core::OperationHours;

    use super::*;
    use crate::test_support::{india_index, store};

    fn values(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn headings_by_scope() {
        assert_eq!(
            heading(&SelectionState::new("Maharashtra", "Mumbai")),
            "Stores in Mumbai, Maharashtra"
        );
        assert_eq!(
            heading(&SelectionState::new("Maharashtra", "")),
            "Stores in Maharashtra"
        );
        assert_eq!(heading(&SelectionState::default()), "All Stores");
    }

    #[test]
    fn options_lead_with_catch_all() {
        let index = india_index();
        let surface = RenderedSurface::build(
            &index,
            &SelectionState::new("Maharashtra", "Pune"),
            &ZoomPolicy::default(),
        );
        assert_eq!(values(&surface.state_options), ["", "Delhi", "Maharashtra"]);
        assert_eq!(surface.state_options[0].label, ALL_STATES_LABEL);
        assert_eq!(values(&surface.city_options), ["", "Mumbai", "Pune"]);
        assert_eq!(surface.city_options[0].label, ALL_CITIES_LABEL);
        assert!(surface.city_selector_enabled);
        assert_eq!(surface.heading, "Stores in Pune, Maharashtra");
        assert_eq!(surface.stores.len(), 1);
        assert_eq!(surface.markers.len(), 1);
        assert!(surface.empty_message.is_none());
    }

    #[test]
    fn all_states_disables_city_selector() {
        let index = india_index();
        let surface =
            RenderedSurface::build(&index, &SelectionState::default(), &ZoomPolicy::default());
        assert!(!surface.city_selector_enabled);
        assert_eq!(values(&surface.city_options), [""]);
        assert_eq!(surface.stores.len(), 3);
        assert!(matches!(
            surface.viewport,
            Some(ViewportCommand::Bounds { .. })
        ));
    }

    #[test]
    fn empty_listing_has_message_and_no_viewport() {
        let index = india_index();
        let surface = RenderedSurface::build(
            &index,
            &SelectionState::new("Maharashtra", "Atlantis"),
            &ZoomPolicy::default(),
        );
        assert!(surface.stores.is_empty());
        assert_eq!(surface.empty_message.as_deref(), Some("No stores found"));
        assert!(surface.viewport.is_none());
        assert!(surface.markers.is_empty());
    }

    #[test]
    fn card_formats_store_fields() {
        let mut s = store("42", "Maharashtra", "Pune", "18.52", "73.85");
        s.pincode = "411001".to_string();
        s.area = "Camp".to_string();
        s.additional_phones = "020-5555".to_string();
        s.average_rating = 4.34;
        s.store_type = Some("Flagship".to_string());
        s.dealer_operation_hours = OperationHours::every_day("10:00", "21:00");

        let card = StoreCard::from(&s);
        assert_eq!(card.locality, "Pune, Maharashtra - 411001");
        assert_eq!(card.area.as_deref(), Some("Camp"));
        assert_eq!(card.phones, "000-0000, 020-5555");
        assert_eq!(card.rating.as_deref(), Some("4.3 ★"));
        assert_eq!(card.hours, "Mon-Sat: 10:00-21:00");
        assert_eq!(card.store_type.as_deref(), Some("Flagship"));
    }

    #[test]
    fn card_omits_empty_optionals() {
        let card = StoreCard::from(&store("7", "Delhi", "New Delhi", "28.6", "77.2"));
        assert!(card.area.is_none());
        assert!(card.rating.is_none());
        assert!(card.store_type.is_none());
        assert!(card.store_page_url.is_none());
        assert_eq!(card.phones, "000-0000");
        assert_eq!(card.hours, "");
    }
}
