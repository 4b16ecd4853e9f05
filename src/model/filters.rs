//! Structured filter selections behind the assisted query builder

use chrono::NaiveDate;

/// A pair of calendar dates picked by the user.
///
/// A range only counts once both ends are set; half-finished ranges live in
/// the date picker and never reach [`FilterState`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn starting(from: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= day && day <= to,
            (Some(from), None) => from == day,
            _ => false,
        }
    }
}

/// Current selections: cinemas, date presets, explicit ranges and film title
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    selected_cinemas: Vec<String>,
    selected_date_presets: Vec<String>,
    explicit_ranges: Vec<DateRange>,
    film_title: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_cinemas(&self) -> &[String] {
        &self.selected_cinemas
    }

    pub fn selected_date_presets(&self) -> &[String] {
        &self.selected_date_presets
    }

    pub fn explicit_ranges(&self) -> &[DateRange] {
        &self.explicit_ranges
    }

    pub fn film_title(&self) -> &str {
        &self.film_title
    }

    pub fn is_cinema_selected(&self, cinema: &str) -> bool {
        self.selected_cinemas.iter().any(|c| c == cinema)
    }

    pub fn is_preset_selected(&self, preset: &str) -> bool {
        self.selected_date_presets.iter().any(|p| p == preset)
    }

    pub fn toggle_cinema(&mut self, cinema: &str) {
        toggle_value(&mut self.selected_cinemas, cinema);
    }

    pub fn toggle_date_preset(&mut self, preset: &str) {
        toggle_value(&mut self.selected_date_presets, preset);
    }

    /// Append a range if both ends are set. Returns whether it was added.
    pub fn add_range(&mut self, range: DateRange) -> bool {
        if !range.is_complete() {
            return false;
        }
        self.explicit_ranges.push(range);
        true
    }

    /// Remove the range at `index`. Out-of-bounds indices are ignored.
    pub fn remove_range(&mut self, index: usize) -> Option<DateRange> {
        if index < self.explicit_ranges.len() {
            Some(self.explicit_ranges.remove(index))
        } else {
            None
        }
    }

    pub fn set_film_title(&mut self, title: impl Into<String>) {
        self.film_title = title.into();
    }

    pub fn push_film_char(&mut self, c: char) {
        self.film_title.push(c);
    }

    pub fn pop_film_char(&mut self) {
        self.film_title.pop();
    }
}

/// Symmetric membership toggle that keeps insertion order.
fn toggle_value(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut state = FilterState::new();
        state.toggle_cinema("ICA");
        let before = state.clone();

        state.toggle_cinema("Barbican");
        assert_eq!(state.selected_cinemas(), ["ICA", "Barbican"]);
        state.toggle_cinema("Barbican");

        assert_eq!(state, before);
    }

    #[test]
    fn toggle_keeps_insertion_order() {
        let mut state = FilterState::new();
        state.toggle_date_preset("this week");
        state.toggle_date_preset("today");
        state.toggle_date_preset("tomorrow");
        state.toggle_date_preset("today");

        assert_eq!(state.selected_date_presets(), ["this week", "tomorrow"]);
        assert!(state.is_preset_selected("tomorrow"));
        assert!(!state.is_preset_selected("today"));
    }

    #[test]
    fn toggle_accepts_values_outside_catalog() {
        let mut state = FilterState::new();
        state.toggle_cinema("Prince Charles");
        assert!(state.is_cinema_selected("Prince Charles"));
    }

    #[test]
    fn incomplete_range_is_ignored() {
        let mut state = FilterState::new();
        assert!(!state.add_range(DateRange::starting(day(2026, 1, 17))));
        assert!(!state.add_range(DateRange::default()));
        assert!(state.explicit_ranges().is_empty());
    }

    #[test]
    fn ranges_may_duplicate() {
        let mut state = FilterState::new();
        let range = DateRange::new(day(2026, 1, 17), day(2026, 1, 18));
        assert!(state.add_range(range));
        assert!(state.add_range(range));
        assert_eq!(state.explicit_ranges().len(), 2);
    }

    #[test]
    fn remove_range_out_of_bounds_is_noop() {
        let mut state = FilterState::new();
        state.add_range(DateRange::new(day(2026, 1, 17), day(2026, 1, 17)));
        state.add_range(DateRange::new(day(2026, 1, 20), day(2026, 1, 21)));

        assert!(state.remove_range(1).is_some());
        assert!(state.remove_range(1).is_none());
        assert_eq!(
            state.explicit_ranges(),
            [DateRange::new(day(2026, 1, 17), day(2026, 1, 17))]
        );
    }

    #[test]
    fn film_title_is_stored_verbatim() {
        let mut state = FilterState::new();
        state.set_film_title("  Sentimental Value ");
        assert_eq!(state.film_title(), "  Sentimental Value ");

        state.pop_film_char();
        state.push_film_char('!');
        assert_eq!(state.film_title(), "  Sentimental Value!");
    }

    #[test]
    fn range_contains_days_between_ends() {
        let range = DateRange::new(day(2026, 1, 17), day(2026, 1, 19));
        assert!(range.contains(day(2026, 1, 18)));
        assert!(!range.contains(day(2026, 1, 20)));
        assert!(DateRange::starting(day(2026, 1, 17)).contains(day(2026, 1, 17)));
    }
}
