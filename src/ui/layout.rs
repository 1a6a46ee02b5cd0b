//! Layout components (header, status bar)

use crate::app::App;
use crate::platform;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header and content, reserving the bottom line
/// for the status bar when it is enabled
pub fn create_layout(area: Rect, with_status_bar: bool) -> (Rect, Rect) {
    let status_height = if with_status_bar { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Header
            Constraint::Min(0),                // Content
            Constraint::Length(status_height), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the form title header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Contact Form",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Draw the bottom status bar with key hints and submit feedback
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![
        Span::styled(" Tab", Style::default().fg(Color::Cyan)),
        Span::styled(": next field  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(": submit  ", Style::default().fg(Color::DarkGray)),
        Span::styled(platform::SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::styled(": submit  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(": quit", Style::default().fg(Color::DarkGray)),
    ];

    if let Some(msg) = &app.status_message {
        let color = if app.form.error_count() > 0 {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
