//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared helpers (focus styles, selectable lists)
//! - `layout`: Header and query input bar
//! - `filters`: Assisted query builder panels (cinemas, presets, ranges, film)
//! - `calendar`: Month grid for picking explicit date ranges
//! - `response`: Request status and response text
//! - `overlays`: Modal overlays (help)

mod utils;
mod layout;
mod filters;
mod calendar;
mod response;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{Catalog, DatePicker, FilterState, RequestLifecycle, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        ui_state: &UiState,
        catalog: &Catalog,
        filters: &FilterState,
        date_picker: &DatePicker,
        request: &RequestLifecycle,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),  // Title, intro and example prompts
                Constraint::Length(13), // Assisted query builder
                Constraint::Length(3),  // Query input
                Constraint::Min(0),     // Status + response
            ])
            .split(frame.area());

        layout::render_header(frame, chunks[0]);

        let builder_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(24), // Cinemas
                Constraint::Percentage(26), // Presets + ranges
                Constraint::Percentage(26), // Calendar
                Constraint::Percentage(24), // Film + preview
            ])
            .split(chunks[1]);

        filters::render_cinemas(frame, builder_chunks[0], ui_state, catalog, filters);
        filters::render_dates(frame, builder_chunks[1], ui_state, catalog, filters);
        calendar::render_calendar(frame, builder_chunks[2], ui_state, date_picker);
        filters::render_film(frame, builder_chunks[3], ui_state, filters);

        layout::render_query_bar(frame, chunks[2], ui_state, request);

        response::render_response(frame, chunks[3], ui_state, request);

        // Help popup overlay (if open)
        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}
