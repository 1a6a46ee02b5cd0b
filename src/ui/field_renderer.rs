//! Field rendering: bordered input box plus its error line

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field: the labeled input box with a one-line error slot
/// beneath it. At most one error is ever shown per field.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, accent: Color) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Input box
            Constraint::Length(1), // Error line
        ])
        .split(area);

    draw_input_box(frame, chunks[0], field, is_active, accent);

    if let Some(error) = &field.error {
        let line = Paragraph::new(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, chunks[1]);
    }
}

/// Draw the bordered value box with the field label as its title
fn draw_input_box(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    accent: Color,
) {
    let style = if is_active {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        style
    };

    let display_value = field.as_text();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)"
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.id.is_multiline() {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(accent)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(accent),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(accent)),
        ]))
    };

    let marker = if field.id.is_required() { "*" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", field.id.label(), marker))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
