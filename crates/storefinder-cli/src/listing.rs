//! Read-only listing commands.

use storefinder_locator::{
    heading, plan_viewport, FilteredStoreView, LocationIndex, SelectionState, StoreCard,
    ViewportCommand, ZoomPolicy,
};

pub(crate) fn print_states(index: &LocationIndex) {
    for state in index.states() {
        println!("{state}");
    }
}

/// # Errors
///
/// Returns an error if `state` is not in the dataset.
pub(crate) fn print_cities(index: &LocationIndex, state: &str) -> anyhow::Result<()> {
    if !index.has_state(state) {
        anyhow::bail!("state '{state}' not found; run `states` to list them");
    }
    for city in index.cities(state) {
        println!("{city}");
    }
    Ok(())
}

/// Print the stores visible under `selection`, either as a table or as the
/// raw dataset records.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn print_stores(
    index: &LocationIndex,
    selection: &SelectionState,
    json: bool,
) -> anyhow::Result<()> {
    let view = FilteredStoreView::new(index, selection);

    if json {
        println!("{}", serde_json::to_string_pretty(view.stores())?);
        return Ok(());
    }

    println!("{}", heading(selection));
    if view.is_empty() {
        println!("No stores found");
        return Ok(());
    }

    println!();
    let header = format!("{:<10}{:<30}{:<32}{:<8}HOURS", "ID", "NAME", "LOCALITY", "RATING");
    println!("{header}");
    for store in view.stores() {
        let card = StoreCard::from(*store);
        println!(
            "{:<10}{:<30}{:<32}{:<8}{}",
            card.id,
            truncate(&card.name, 28),
            truncate(&card.locality, 30),
            card.rating.as_deref().unwrap_or("-"),
            card.hours
        );
    }
    println!();
    println!("{} stores", view.len());
    Ok(())
}

/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn print_frame(
    index: &LocationIndex,
    selection: &SelectionState,
    policy: &ZoomPolicy,
) -> anyhow::Result<()> {
    let view = FilteredStoreView::new(index, selection);
    let command: Option<ViewportCommand> = plan_viewport(&view, selection, policy);
    println!("{}", serde_json::to_string_pretty(&command)?);
    Ok(())
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}
