//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldId, Form};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the form fields and the submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // First name
            Constraint::Length(4), // Last name
            Constraint::Length(4), // Email
            Constraint::Min(5),    // Message
            Constraint::Length(3), // Submit button
        ])
        .margin(1)
        .split(area);

    let accent = app.accent_color();
    let active_index = app.form.active_field();

    for (index, id) in FieldId::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[index],
            app.form.field(*id),
            active_index == index,
            accent,
        );
    }

    draw_submit_button(frame, chunks[4], app.form.is_on_submit_row(), accent);
}

/// Draw the submit button row
fn draw_submit_button(frame: &mut Frame, area: Rect, is_active: bool, accent: Color) {
    let (border_style, label_style) = if is_active {
        (
            Style::default().fg(accent),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let button = Paragraph::new(Line::from(Span::styled("Submit", label_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(button, area);
}
