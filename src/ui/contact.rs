//! Contact form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::BUTTONS_ROW;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // First name
            Constraint::Length(3),             // Last name
            Constraint::Length(3),             // Email
            Constraint::Length(BUTTON_HEIGHT), // Submit button
            Constraint::Length(2),             // Help text
            Constraint::Min(0),                // remaining space
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    for index in 0..BUTTONS_ROW {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[index], field, form.active_field_index == index);
        }
    }

    // Submit button row
    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(chunks[BUTTONS_ROW])[0];
    render_button(
        frame,
        button_area,
        "Submit",
        form.is_buttons_row_active(),
        true,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": back"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}
