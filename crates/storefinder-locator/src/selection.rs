//! State → city selection with cascading reset.
//!
//! Transitions are pure functions over [`SelectionState`]. The controller
//! applies a transition and then settles the auto-default-city effect, so
//! callers always observe a state in which that effect has nothing left to do.

use serde::{Deserialize, Serialize};

use crate::index::LocationIndex;

/// Current (state, city) filter. Empty strings mean "no selection".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionState {
    pub state: String,
    pub city: String,
}

/// How much of the hierarchy a selection pins down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionScope {
    AllStates,
    State,
    City,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    SelectState(String),
    SelectCity(String),
}

impl SelectionState {
    pub fn new(state: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            city: city.into(),
        }
    }

    #[must_use]
    pub fn scope(&self) -> SelectionScope {
        match (self.state.is_empty(), self.city.is_empty()) {
            (true, _) => SelectionScope::AllStates,
            (false, true) => SelectionScope::State,
            (false, false) => SelectionScope::City,
        }
    }

    /// Apply one user selection.
    ///
    /// Picking a different state clears the city. Picking a city is taken as
    /// given, except that no city can be chosen while no state is selected.
    #[must_use]
    pub fn transition(self, event: &SelectionEvent) -> Self {
        match event {
            SelectionEvent::SelectState(state) => {
                let city = if *state == self.state {
                    self.city
                } else {
                    String::new()
                };
                Self {
                    state: state.clone(),
                    city,
                }
            }
            SelectionEvent::SelectCity(city) => {
                if self.state.is_empty() {
                    return self;
                }
                Self {
                    city: city.clone(),
                    ..self
                }
            }
        }
    }

    /// Fill an empty city with the first city of the selected state.
    #[must_use]
    pub fn with_default_city(self, index: &LocationIndex) -> Self {
        if self.state.is_empty() || !self.city.is_empty() {
            return self;
        }
        match index.first_city(&self.state) {
            Some(first) => Self {
                city: first.to_string(),
                ..self
            },
            None => self,
        }
    }
}

/// Owns the selection for the lifetime of a locator session.
#[derive(Debug, Clone)]
pub struct SelectionController {
    current: SelectionState,
}

impl SelectionController {
    /// Start from the configured default pair, then settle the default-city
    /// effect against `index`.
    #[must_use]
    pub fn new(initial: SelectionState, index: &LocationIndex) -> Self {
        Self {
            current: initial.with_default_city(index),
        }
    }

    #[must_use]
    pub fn current(&self) -> &SelectionState {
        &self.current
    }

    /// Apply `event` and settle. Returns `true` if the selection changed.
    pub fn dispatch(&mut self, event: &SelectionEvent, index: &LocationIndex) -> bool {
        let next = self
            .current
            .clone()
            .transition(event)
            .with_default_city(index);
        if next == self.current {
            return false;
        }
        tracing::debug!(
            from_state = %self.current.state,
            from_city = %self.current.city,
            to_state = %next.state,
            to_city = %next.city,
            "selection changed"
        );
        self.current = next;
        true
    }

    pub fn select_state(&mut self, state: &str, index: &LocationIndex) -> bool {
        self.dispatch(&SelectionEvent::SelectState(state.to_string()), index)
    }

    pub fn select_city(&mut self, city: &str, index: &LocationIndex) -> bool {
        self.dispatch(&SelectionEvent::SelectCity(city.to_string()), index)
    }
}

/// The selection a user reaches by starting at `initial`, picking `state`,
/// then picking `city`. A `None` pick is skipped.
#[must_use]
pub fn resolve_selection(
    initial: SelectionState,
    index: &LocationIndex,
    state: Option<&str>,
    city: Option<&str>,
) -> SelectionState {
    let mut controller = SelectionController::new(initial, index);
    if let Some(state) = state {
        controller.select_state(state, index);
    }
    if let Some(city) = city {
        controller.select_city(city, index);
    }
    controller.current
}
