//! Request status and response text

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{RequestLifecycle, RequestOutcome, UiState};

const KEY_HINTS: &str = " Tab: next section · h/F1: help · Ctrl+S: send · Ctrl+Q: quit ";

pub fn render_response(frame: &mut Frame, area: Rect, ui_state: &UiState, request: &RequestLifecycle) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Response ")
        .title_bottom(Line::from(KEY_HINTS).right_aligned())
        .padding(Padding::horizontal(1));

    let paragraph = match request.outcome() {
        RequestOutcome::Idle => Paragraph::new(
            "Build a question with the pickers above or type one, then press Enter.",
        )
        .style(Style::default().fg(Color::DarkGray)),
        RequestOutcome::Loading => Paragraph::new("● ● ● Thinking…")
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        RequestOutcome::Failure(message) => Paragraph::new(message.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false }),
        RequestOutcome::Success(text) => Paragraph::new(text.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false })
            .scroll((ui_state.response_scroll, 0)),
    };

    frame.render_widget(paragraph.block(block), area);
}
