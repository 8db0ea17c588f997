//! Monitor list UI

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Stylize,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::status::{Severity, describe};
use crate::view::EmptyReason;
use crate::viewer::state::AppState;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Ok => Color::Green,
        Severity::Down => Color::Red,
        Severity::Degraded => Color::Yellow,
        Severity::Unknown => Color::Gray,
    }
}

/// Render the monitor list and details panel
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.visible.is_empty() {
        render_empty(frame, area, state);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Monitor list
            Constraint::Length(8), // Monitor details
        ])
        .split(area);

    render_monitor_list(frame, chunks[0], state);
    render_monitor_details(frame, chunks[1], state);
}

/// Render the explanation for an empty list
fn render_empty(frame: &mut Frame, area: Rect, state: &AppState) {
    let (title, message, color) = match state.empty_reason() {
        EmptyReason::LoadError(detail) => ("Error Loading Monitors", detail, Color::Red),
        EmptyReason::AllHealthy { total } => (
            "All Systems Operational",
            format!("All {total} monitors are up and running."),
            Color::Green,
        ),
        EmptyReason::NoSearchMatch { query } => (
            "No Matching Monitors",
            format!("No monitors match your search \"{query}\"."),
            Color::Gray,
        ),
        EmptyReason::NoData => (
            "No Monitors Found",
            "Make sure your API key is correct.".to_string(),
            Color::Gray,
        ),
    };

    let body = Paragraph::new(message)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(color));

    frame.render_widget(body, area);
}

/// Render monitor list
fn render_monitor_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let header = Row::new(vec!["Status", "Name", "URL", "Uptime"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .visible
        .iter()
        .enumerate()
        .map(|(i, monitor)| {
            let descriptor = describe(monitor.status);

            let mut style = Style::default();
            if i == state.selected {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }

            let ratio = if monitor.uptime_ratio.is_empty() {
                "n/a".to_string()
            } else {
                format!("{}%", monitor.uptime_ratio)
            };

            Row::new(vec![
                format!("● {}", descriptor.label),
                monitor.name.clone(),
                monitor.url.clone(),
                ratio,
            ])
            .style(style)
            .fg(severity_color(descriptor.severity))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Monitors ({})", state.visible.len())),
    );

    frame.render_widget(table, area);
}

/// Render monitor details panel
fn render_monitor_details(frame: &mut Frame, area: Rect, state: &AppState) {
    let monitor = state.selected_monitor();

    if let Some(monitor) = monitor {
        let descriptor = describe(monitor.status);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Monitor: ", Style::default().fg(Color::Cyan)),
                Span::raw(&monitor.name),
            ]),
            Line::from(vec![
                Span::styled("URL: ", Style::default().fg(Color::Cyan)),
                Span::raw(&monitor.url),
            ]),
            Line::from(vec![
                Span::styled("Status: ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    descriptor.label.clone(),
                    Style::default().fg(severity_color(descriptor.severity)),
                ),
            ]),
            Line::from(vec![
                Span::styled("ID: ", Style::default().fg(Color::Cyan)),
                Span::raw(monitor.id.to_string()),
            ]),
        ];

        if !monitor.uptime_ratio.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Uptime Ratio: ", Style::default().fg(Color::Cyan)),
                Span::raw(format!("{}%", monitor.uptime_ratio)),
            ]));
        }

        let details = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Monitor Details"),
        );

        frame.render_widget(details, area);
    } else {
        let message = Paragraph::new("Select a monitor to view details")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Monitor Details"),
            )
            .style(Style::default().fg(Color::Gray));

        frame.render_widget(message, area);
    }
}
