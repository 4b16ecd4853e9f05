//! Month grid for picking explicit date ranges

use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{format_range, ActiveSection, DatePicker, UiState};
use super::utils::section_block;

const WEEKDAYS: &str = "Mo Tu We Th Fr Sa Su";

pub fn render_calendar(frame: &mut Frame, area: Rect, ui_state: &UiState, picker: &DatePicker) {
    let is_focused = ui_state.active_section == ActiveSection::Calendar;
    let cursor = picker.cursor();
    let pending = picker.pending();

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        WEEKDAYS,
        Style::default().fg(Color::Yellow),
    ))];

    for week in picker.month_grid() {
        let spans: Vec<Span> = week
            .iter()
            .enumerate()
            .flat_map(|(i, slot)| {
                let separator = if i == 0 { "" } else { " " };
                let cell = match slot {
                    None => Span::raw("  "),
                    Some(day) => {
                        let mut style = if !picker.is_selectable(*day) {
                            Style::default().fg(Color::DarkGray)
                        } else if pending.contains(*day) {
                            Style::default().fg(Color::Black).bg(Color::Cyan)
                        } else {
                            Style::default().fg(Color::White)
                        };
                        if *day == cursor && is_focused {
                            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                        } else if *day == cursor {
                            style = style.add_modifier(Modifier::UNDERLINED);
                        }
                        Span::styled(format!("{:>2}", day.day()), style)
                    }
                };
                [Span::raw(separator), cell]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let status = match (pending.from, format_range(&pending)) {
        (_, Some(text)) if picker.can_add() => Line::from(vec![
            Span::styled(text, Style::default().fg(Color::Cyan)),
            Span::styled("  a: add", Style::default().fg(Color::DarkGray)),
        ]),
        (Some(from), _) => Line::from(Span::styled(
            format!("From {} …", from.format("%Y-%m-%d")),
            Style::default().fg(Color::Cyan),
        )),
        _ => Line::from(Span::styled(
            "Space: pick start/end",
            Style::default().fg(Color::DarkGray),
        )),
    };
    lines.push(status);

    let title = format!(" {} ", cursor.format("%B %Y"));
    let calendar = Paragraph::new(lines).block(section_block(&title, is_focused));
    frame.render_widget(calendar, area);
}
