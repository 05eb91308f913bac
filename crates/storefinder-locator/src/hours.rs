//! Collapses a weekly schedule into a short display string.

use std::collections::BTreeSet;

use storefinder_core::{OperationHours, Weekday};

/// Format a store's weekly hours for the listing.
///
/// When every open day shares one `open-close` pair the result is
/// `"Mon-Sat: open-close"`; this does not check which days are actually open,
/// so a store open six days and closed on Sunday renders the same way as one
/// open all week. Otherwise each open day is listed as `"Monday: open-close"`,
/// comma separated, skipping closed days. No open days yields `""`.
#[must_use]
pub fn format_operation_hours(hours: &OperationHours) -> String {
    let open_days: Vec<(Weekday, String)> = Weekday::ALL
        .into_iter()
        .filter_map(|day| {
            hours
                .for_day(day)
                .map(|(open, close)| (day, format!("{open}-{close}")))
        })
        .collect();

    let distinct: BTreeSet<&str> = open_days.iter().map(|(_, pair)| pair.as_str()).collect();
    if let (1, Some(only)) = (distinct.len(), distinct.first()) {
        return format!("Mon-Sat: {only}");
    }

    open_days
        .iter()
        .map(|(day, pair)| format!("{}: {pair}", day.label()))
        .collect::<Vec<_>>()
        .join(", ")
}
