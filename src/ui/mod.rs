//! UI module for rendering the TUI

mod field_renderer;
mod form;
mod layout;
mod submitted;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, content_area) = layout::create_layout(area, app.show_help_bar());

    layout::draw_header(frame, header_area);

    // Form on the left, submitted values on the right
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(44),    // Form
            Constraint::Length(38), // Submitted panel
        ])
        .split(content_area);

    form::draw(frame, content_chunks[0], app);
    submitted::draw(frame, content_chunks[1], app);

    if app.show_help_bar() {
        layout::draw_status_bar(frame, app);
    }
}
