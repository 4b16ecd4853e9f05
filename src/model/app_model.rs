//! Main application model with state management

use std::sync::Arc;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::config::AppConfig;
use super::compose::compose;
use super::date_picker::DatePicker;
use super::filters::FilterState;
use super::kinologue_client::KinologueClient;
use super::request::{ComposePolicy, RequestLifecycle, RequestTicket};
use super::types::{ActiveSection, Catalog, UiState};

/// Main application model containing all state
pub struct AppModel {
    pub kinologue: Option<KinologueClient>,
    catalog: Catalog,
    compose_policy: ComposePolicy,
    filters: Arc<Mutex<FilterState>>,
    date_picker: Arc<Mutex<DatePicker>>,
    request: Arc<Mutex<RequestLifecycle>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(config: &AppConfig, today: NaiveDate) -> Self {
        Self {
            kinologue: None,
            catalog: Catalog {
                cinemas: config.cinemas.clone(),
                date_presets: config.date_presets.clone(),
            },
            compose_policy: config.compose_policy,
            filters: Arc::new(Mutex::new(FilterState::new())),
            date_picker: Arc::new(Mutex::new(DatePicker::new(today))),
            request: Arc::new(Mutex::new(RequestLifecycle::new())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_kinologue_client(&mut self, client: KinologueClient) {
        self.kinologue = Some(client);
    }

    pub async fn get_kinologue_client(&self) -> Option<KinologueClient> {
        self.kinologue.clone()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn get_filter_state(&self) -> FilterState {
        self.filters.lock().await.clone()
    }

    pub async fn get_date_picker(&self) -> DatePicker {
        self.date_picker.lock().await.clone()
    }

    pub async fn get_request_state(&self) -> RequestLifecycle {
        self.request.lock().await.clone()
    }

    // ========================================================================
    // Focus & Selection
    // ========================================================================

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        match state.active_section {
            ActiveSection::Cinemas => {
                state.cinema_selected = state.cinema_selected.saturating_sub(1);
            }
            ActiveSection::Presets => {
                state.preset_selected = state.preset_selected.saturating_sub(1);
            }
            ActiveSection::Ranges => {
                state.range_selected = state.range_selected.saturating_sub(1);
            }
            _ => {}
        }
    }

    pub async fn move_selection_down(&self) {
        let range_count = self.filters.lock().await.explicit_ranges().len();
        let mut state = self.ui_state.lock().await;
        match state.active_section {
            ActiveSection::Cinemas => {
                if state.cinema_selected < self.catalog.cinemas.len().saturating_sub(1) {
                    state.cinema_selected += 1;
                }
            }
            ActiveSection::Presets => {
                if state.preset_selected < self.catalog.date_presets.len().saturating_sub(1) {
                    state.preset_selected += 1;
                }
            }
            ActiveSection::Ranges => {
                if state.range_selected < range_count.saturating_sub(1) {
                    state.range_selected += 1;
                }
            }
            _ => {}
        }
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Toggle the highlighted cinema or preset, depending on the active section.
    pub async fn toggle_selected(&self) {
        let ui_state = self.get_ui_state().await;
        let toggled = match ui_state.active_section {
            ActiveSection::Cinemas => self.catalog.cinemas.get(ui_state.cinema_selected).map(|cinema| {
                (cinema, true)
            }),
            ActiveSection::Presets => self.catalog.date_presets.get(ui_state.preset_selected).map(|preset| {
                (preset, false)
            }),
            _ => None,
        };

        let Some((value, is_cinema)) = toggled else {
            return;
        };
        tracing::debug!(value = %value, is_cinema, "Toggling filter value");
        if is_cinema {
            self.toggle_cinema(value).await;
        } else {
            self.toggle_date_preset(value).await;
        }
    }

    pub async fn toggle_cinema(&self, cinema: &str) {
        self.filters.lock().await.toggle_cinema(cinema);
        self.recompute_query().await;
    }

    pub async fn toggle_date_preset(&self, preset: &str) {
        self.filters.lock().await.toggle_date_preset(preset);
        self.recompute_query().await;
    }

    pub async fn calendar_move_days(&self, delta: i64) {
        self.date_picker.lock().await.move_days(delta);
    }

    pub async fn calendar_move_weeks(&self, delta: i64) {
        self.date_picker.lock().await.move_weeks(delta);
    }

    pub async fn calendar_pick(&self) {
        self.date_picker.lock().await.pick();
    }

    pub async fn clear_pending_range(&self) {
        self.date_picker.lock().await.clear_pending();
    }

    /// Move the completed pending range into the filters. Returns whether one was added.
    pub async fn add_pending_range(&self) -> bool {
        let Some(range) = self.date_picker.lock().await.take_completed() else {
            return false;
        };
        let added = self.filters.lock().await.add_range(range);
        if added {
            tracing::debug!(?range, "Added explicit date range");
            self.recompute_query().await;
        }
        added
    }

    pub async fn remove_selected_range(&self) {
        let index = self.ui_state.lock().await.range_selected;
        let (removed, remaining) = {
            let mut filters = self.filters.lock().await;
            let removed = filters.remove_range(index);
            (removed, filters.explicit_ranges().len())
        };

        if removed.is_some() {
            let mut state = self.ui_state.lock().await;
            if state.range_selected >= remaining {
                state.range_selected = remaining.saturating_sub(1);
            }
            drop(state);
            tracing::debug!(index, "Removed explicit date range");
            self.recompute_query().await;
        }
    }

    pub async fn set_film_title(&self, title: String) {
        self.filters.lock().await.set_film_title(title);
        self.recompute_query().await;
    }

    pub async fn append_to_film(&self, c: char) {
        self.filters.lock().await.push_film_char(c);
        self.recompute_query().await;
    }

    pub async fn backspace_film(&self) {
        self.filters.lock().await.pop_film_char();
        self.recompute_query().await;
    }

    async fn recompute_query(&self) {
        let composed = compose(&*self.filters.lock().await);
        let mut request = self.request.lock().await;
        if request.apply_composed(&composed, self.compose_policy) {
            tracing::trace!(query = %composed, "Query rebuilt from filters");
        }
    }

    // ========================================================================
    // Query text & Request
    // ========================================================================

    pub async fn append_to_query(&self, c: char) {
        self.request.lock().await.push_char(c);
    }

    pub async fn backspace_query(&self) {
        self.request.lock().await.pop_char();
    }

    pub async fn set_query(&self, text: String) {
        self.request.lock().await.set_query(text);
    }

    pub async fn clear_query(&self) {
        self.request.lock().await.clear_query();
    }

    /// Replace the query with the composition of the current filters.
    pub async fn rebuild_query(&self) {
        let composed = compose(&*self.filters.lock().await);
        self.request.lock().await.rebuild(&composed);
    }

    pub async fn current_query(&self) -> String {
        self.request.lock().await.query().to_string()
    }

    /// Start a request for the current query text, if there is one.
    pub async fn begin_request(&self) -> Option<RequestTicket> {
        let ticket = {
            let mut request = self.request.lock().await;
            let query = request.query().to_string();
            request.begin(&query)
        };
        if ticket.is_some() {
            self.ui_state.lock().await.response_scroll = 0;
        }
        ticket
    }

    pub async fn resolve_request(&self, ticket: &RequestTicket, result: Result<String, String>) -> bool {
        self.request.lock().await.resolve(ticket, result)
    }

    pub async fn scroll_response(&self, delta: i32) {
        let mut state = self.ui_state.lock().await;
        state.response_scroll = if delta < 0 {
            state.response_scroll.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            state.response_scroll.saturating_add(delta as u16)
        };
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RequestOutcome;

    fn model_with(policy: ComposePolicy) -> AppModel {
        let config = AppConfig {
            compose_policy: policy,
            ..AppConfig::default()
        };
        AppModel::new(&config, NaiveDate::from_ymd_opt(2026, 1, 17).unwrap())
    }

    #[tokio::test]
    async fn filter_changes_overwrite_query() {
        let model = model_with(ComposePolicy::LastChangeWins);
        model.set_film_title("Sentimental Value".to_string()).await;
        model.toggle_cinema("ICA").await;
        model.toggle_cinema("Barbican").await;
        model.toggle_date_preset("today").await;

        assert_eq!(
            model.current_query().await,
            "Sentimental Value, at ICA or Barbican, today"
        );

        model.append_to_query('?').await;
        model.toggle_cinema("Barbican").await;
        assert_eq!(model.current_query().await, "Sentimental Value, at ICA, today");
    }

    #[tokio::test]
    async fn emptied_filters_leave_query_alone() {
        let model = model_with(ComposePolicy::LastChangeWins);
        model.toggle_cinema("Rio").await;
        model.toggle_cinema("Rio").await;
        assert_eq!(model.current_query().await, "at Rio");
    }

    #[tokio::test]
    async fn keep_manual_edits_policy() {
        let model = model_with(ComposePolicy::KeepManualEdits);
        model.toggle_cinema("Rio").await;
        model.set_query("Anything late at the Rio?".to_string()).await;
        model.toggle_cinema("ICA").await;
        assert_eq!(model.current_query().await, "Anything late at the Rio?");

        model.rebuild_query().await;
        assert_eq!(model.current_query().await, "at Rio or ICA");
    }

    #[tokio::test]
    async fn toggle_selected_uses_highlighted_catalog_entry() {
        let model = model_with(ComposePolicy::LastChangeWins);
        model.set_active_section(ActiveSection::Cinemas).await;
        model.move_selection_down().await;
        model.toggle_selected().await;

        model.set_active_section(ActiveSection::Presets).await;
        model.toggle_selected().await;

        assert_eq!(model.current_query().await, "at BFI Southbank, today");
    }

    #[tokio::test]
    async fn selection_stops_at_catalog_end() {
        let model = model_with(ComposePolicy::LastChangeWins);
        model.set_active_section(ActiveSection::Presets).await;
        for _ in 0..20 {
            model.move_selection_down().await;
        }
        assert_eq!(model.get_ui_state().await.preset_selected, 4);
    }

    #[tokio::test]
    async fn calendar_ranges_flow_into_query() {
        let model = model_with(ComposePolicy::LastChangeWins);
        model.calendar_pick().await;
        assert!(!model.add_pending_range().await);

        model.calendar_move_days(1).await;
        model.calendar_pick().await;
        assert!(model.add_pending_range().await);
        assert_eq!(model.current_query().await, "2026-01-17 to 2026-01-18");

        model.calendar_pick().await;
        model.calendar_pick().await;
        assert!(model.add_pending_range().await);
        assert_eq!(
            model.current_query().await,
            "2026-01-17 to 2026-01-18 or 2026-01-18"
        );

        model.set_active_section(ActiveSection::Ranges).await;
        model.move_selection_down().await;
        model.remove_selected_range().await;
        model.remove_selected_range().await;
        assert!(model.get_filter_state().await.explicit_ranges().is_empty());
        assert_eq!(model.get_ui_state().await.range_selected, 0);
    }

    #[tokio::test]
    async fn empty_query_does_not_begin() {
        let model = model_with(ComposePolicy::LastChangeWins);
        assert!(model.begin_request().await.is_none());
        assert_eq!(model.get_request_state().await.outcome(), &RequestOutcome::Idle);
    }

    #[tokio::test]
    async fn request_resolution_reaches_state() {
        let model = model_with(ComposePolicy::LastChangeWins);
        model.set_query("What is on at BFI and ICA?".to_string()).await;
        model.scroll_response(5).await;

        let ticket = model.begin_request().await.unwrap();
        assert_eq!(ticket.query, "What is on at BFI and ICA?");
        assert_eq!(model.get_ui_state().await.response_scroll, 0);
        assert!(model.get_request_state().await.is_loading());

        assert!(model.resolve_request(&ticket, Ok("Lots".to_string())).await);
        assert_eq!(
            model.get_request_state().await.outcome(),
            &RequestOutcome::Success("Lots".to_string())
        );
    }
}
