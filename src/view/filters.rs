//! Assisted query builder panels

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{ListItem, Paragraph, Wrap},
    Frame,
};

use crate::model::{compose, format_range, ActiveSection, Catalog, FilterState, UiState};
use super::utils::{item_style, render_scrollable_list, section_block, truncate_string};

fn checkbox(is_active: bool) -> &'static str {
    if is_active { "[x] " } else { "[ ] " }
}

pub fn render_cinemas(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    catalog: &Catalog,
    filters: &FilterState,
) {
    let is_focused = ui_state.active_section == ActiveSection::Cinemas;
    let width = area.width.saturating_sub(8) as usize;

    let items: Vec<ListItem> = catalog
        .cinemas
        .iter()
        .enumerate()
        .map(|(i, cinema)| {
            let is_active = filters.is_cinema_selected(cinema);
            let style = item_style(i == ui_state.cinema_selected, is_focused, is_active);
            ListItem::new(format!("{}{}", checkbox(is_active), truncate_string(cinema, width)))
                .style(style)
        })
        .collect();

    render_scrollable_list(
        frame,
        area,
        items,
        ui_state.cinema_selected,
        section_block(" Cinemas ", is_focused),
    );
}

pub fn render_dates(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    catalog: &Catalog,
    filters: &FilterState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(catalog.date_presets.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    let presets_focused = ui_state.active_section == ActiveSection::Presets;
    let preset_items: Vec<ListItem> = catalog
        .date_presets
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            let is_active = filters.is_preset_selected(preset);
            let style = item_style(i == ui_state.preset_selected, presets_focused, is_active);
            ListItem::new(format!("{}{}", checkbox(is_active), preset)).style(style)
        })
        .collect();

    render_scrollable_list(
        frame,
        chunks[0],
        preset_items,
        ui_state.preset_selected,
        section_block(" Dates ", presets_focused),
    );

    let ranges_focused = ui_state.active_section == ActiveSection::Ranges;
    let ranges = filters.explicit_ranges();
    if ranges.is_empty() {
        let hint = Paragraph::new("No ranges yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(section_block(" Ranges ", ranges_focused));
        frame.render_widget(hint, chunks[1]);
        return;
    }

    let range_items: Vec<ListItem> = ranges
        .iter()
        .enumerate()
        .filter_map(|(i, range)| format_range(range).map(|text| (i, text)))
        .map(|(i, text)| {
            let style = item_style(i == ui_state.range_selected, ranges_focused, false);
            ListItem::new(format!("× {}", text)).style(style)
        })
        .collect();

    render_scrollable_list(
        frame,
        chunks[1],
        range_items,
        ui_state.range_selected,
        section_block(" Ranges (x to remove) ", ranges_focused),
    );
}

pub fn render_film(frame: &mut Frame, area: Rect, ui_state: &UiState, filters: &FilterState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let is_focused = ui_state.active_section == ActiveSection::Film;
    let film = if filters.film_title().is_empty() {
        Paragraph::new("Optional film title").style(Style::default().fg(Color::DarkGray))
    } else {
        let style = if is_focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        Paragraph::new(filters.film_title()).style(style)
    };
    frame.render_widget(film.block(section_block(" Film name ", is_focused)), chunks[0]);

    let composed = compose(filters);
    let preview_text = if composed.is_empty() {
        Line::from(Span::styled(
            "Pick cinemas, dates or a film",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(composed, Style::default().fg(Color::Cyan)))
    };
    let preview = Paragraph::new(preview_text)
        .wrap(Wrap { trim: true })
        .block(section_block(" Assisted query ", false));
    frame.render_widget(preview, chunks[1]);
}
