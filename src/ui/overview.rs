//! Account overview rendering (profile, recent orders, progress task)

use crate::app::App;
use crate::state::ProgressTask;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

/// Number of recent orders shown
const MAX_ORDERS: usize = 5;

/// Draw the overview view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Welcome header
            Constraint::Length(6), // Profile
            Constraint::Min(4),    // Orders
            Constraint::Length(3), // Progress gauge
        ])
        .margin(1)
        .split(area);

    draw_header(frame, chunks[0], app);
    draw_profile(frame, chunks[1], app);
    draw_orders(frame, chunks[2], app);
    draw_progress(frame, chunks[3], app.state.progress.as_ref());
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.state.page_data {
        Some(data) => format!("Welcome, {}!", data.full_name),
        None => "Welcome!".to_string(),
    };
    let header = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(header, area);
}

fn draw_profile(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Profile ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match &app.state.page_data {
        Some(data) => vec![
            Line::from(data.full_name.clone()),
            Line::from(format!("Email: {}", data.email)),
            Line::from(format!("Location: {}", data.location)),
            Line::from(Span::styled(
                data.avatar_url.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "No account data.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_orders(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Recent Orders ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let orders = app
        .state
        .page_data
        .as_ref()
        .map(|d| d.orders.as_slice())
        .unwrap_or_default();

    let items: Vec<ListItem> = orders
        .iter()
        .take(MAX_ORDERS)
        .map(|order| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}  ", order.order_id),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(order.products.join(", ")),
                Span::styled(
                    format!("  ${}", order.total),
                    Style::default().fg(Color::Green),
                ),
            ]))
        })
        .collect();

    if items.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No orders yet.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
    } else {
        frame.render_widget(List::new(items).block(block), area);
    }
}

fn draw_progress(frame: &mut Frame, area: Rect, task: Option<&ProgressTask>) {
    let block = Block::default()
        .title(" Task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    match task {
        Some(task) => {
            let gauge = Gauge::default()
                .block(block)
                .gauge_style(Style::default().fg(Color::Cyan))
                .ratio(task.ratio())
                .label(format!("{}/{}", task.counter, ProgressTask::TARGET));
            frame.render_widget(gauge, area);
        }
        None => {
            let idle = Paragraph::new(Span::styled(
                "Press r to run the demo task.",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            frame.render_widget(idle, area);
        }
    }
}
