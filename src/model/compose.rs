//! Turns structured filter selections into a natural-language query

use super::filters::{DateRange, FilterState};

const ISO_DATE: &str = "%Y-%m-%d";

/// Format a range as `YYYY-MM-DD`, or `YYYY-MM-DD to YYYY-MM-DD` when the
/// ends differ. Incomplete ranges have no textual form.
pub fn format_range(range: &DateRange) -> Option<String> {
    let (from, to) = (range.from?, range.to?);
    let from_str = from.format(ISO_DATE).to_string();
    if from == to {
        Some(from_str)
    } else {
        Some(format!("{} to {}", from_str, to.format(ISO_DATE)))
    }
}

/// Build the assisted query for a filter snapshot.
///
/// Clauses always come out as film, cinemas, dates. Presets precede explicit
/// ranges inside the date clause. Returns an empty string when nothing is
/// selected.
pub fn compose(state: &FilterState) -> String {
    let mut clauses: Vec<String> = Vec::new();

    let film = state.film_title().trim();
    if !film.is_empty() {
        clauses.push(film.to_string());
    }

    if !state.selected_cinemas().is_empty() {
        clauses.push(format!("at {}", state.selected_cinemas().join(" or ")));
    }

    let date_parts: Vec<String> = state
        .selected_date_presets()
        .iter()
        .cloned()
        .chain(state.explicit_ranges().iter().filter_map(format_range))
        .collect();

    if !date_parts.is_empty() {
        clauses.push(date_parts.join(" or "));
    }

    clauses.join(", ")
}
