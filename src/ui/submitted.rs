//! Submitted values panel

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the panel showing the last accepted submission.
///
/// The panel stays a dim placeholder until the first accepted submit;
/// the message row appears only when a message was provided.
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(snapshot) = &app.form.submitted else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "Nothing submitted yet",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let label_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("First Name: ", label_style),
            Span::raw(snapshot.first_name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Last Name:  ", label_style),
            Span::raw(snapshot.last_name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Email:      ", label_style),
            Span::raw(snapshot.email.clone()),
        ]),
    ];

    if snapshot.has_message() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Message:", label_style)));
        for message_line in snapshot.message.lines() {
            lines.push(Line::from(message_line.to_string()));
        }
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(panel, area);
}
