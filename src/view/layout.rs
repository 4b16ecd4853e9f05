//! Layout rendering (header, query input bar)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, RequestLifecycle, UiState};
use super::utils::border_style;

const EXAMPLE_PROMPTS: [&str; 4] = [
    "Is Sentimental Value showing at the ICA or Barbican on 18th Jan?",
    "what is on at BFI, ICA, Close-Up 17th and 18th Jan",
    "when is Sentimental Value at ICA or Barbican?",
    "What is on at BFI and ICA?",
];

pub fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Kinologue AI",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  Ask what's showing at London's best independent cinemas."),
        ]),
        Line::from(Span::styled(
            "Data sourced from kinologue.co.uk",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled("Try: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(EXAMPLE_PROMPTS.join("  ·  "), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let header = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(header, area);
}

pub fn render_query_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, request: &RequestLifecycle) {
    let is_focused = ui_state.active_section == ActiveSection::Query;

    let query = if request.query().is_empty() {
        Paragraph::new("Type or build your question…").style(Style::default().fg(Color::DarkGray))
    } else {
        let style = if is_focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        Paragraph::new(request.query()).style(style)
    };

    let mut title = String::from(" Ask Kinologue ");
    if request.is_edited() {
        title.push_str("(edited) ");
    }

    let hint = if request.is_loading() {
        " Sending… "
    } else if request.can_send() {
        " Enter: send "
    } else {
        ""
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_bottom(Line::from(hint).right_aligned())
        .padding(Padding::horizontal(1))
        .border_style(border_style(is_focused));

    frame.render_widget(query.block(block), area);
}
