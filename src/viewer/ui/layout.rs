//! Main screen layout

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::viewer::state::{AppState, NoticeKind};

use super::monitors;

/// Render the monitor screen
pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state);
    monitors::render(frame, chunks[1], state);
    render_footer(frame, chunks[2], state);
}

/// Render header with view mode and status summary
fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let summary = state.summary;

    let mut header_text = vec![
        Span::styled(
            state.mode_title(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("● {} up", summary.up),
            Style::default().fg(Color::Green),
        ),
        Span::raw(" | "),
        Span::styled(
            format!("● {} problems", summary.problems),
            Style::default().fg(if summary.problems > 0 {
                Color::Red
            } else {
                Color::Gray
            }),
        ),
    ];

    if summary.other > 0 {
        header_text.push(Span::raw(" | "));
        header_text.push(Span::styled(
            format!("● {} other", summary.other),
            Style::default().fg(Color::Gray),
        ));
    }

    header_text.push(Span::raw(" | "));
    header_text.push(Span::raw(format!("{} total", summary.total)));

    if let Some(refreshed) = state.last_refresh {
        header_text.push(Span::raw(" | "));
        header_text.push(Span::styled(
            format!("updated {}", refreshed.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(header_text))
        .block(Block::default().borders(Borders::ALL).title("Upwatch"));

    frame.render_widget(header, area);
}

/// Render footer with keybindings, search input, and transient notices
fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.searching {
        let input = Paragraph::new(Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Yellow)),
            Span::raw(state.query.clone()),
            Span::styled("▌", Style::default().fg(Color::Yellow)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search (Enter to keep, Esc to clear)"),
        );

        frame.render_widget(input, area);
        return;
    }

    let mut footer_text = vec![
        Span::raw("Move: "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" | Search: "),
        Span::styled("/", Style::default().fg(Color::Yellow)),
        Span::raw(" | View: "),
        Span::styled("A", Style::default().fg(Color::Yellow)),
        Span::raw(" | Refresh: "),
        Span::styled("R", Style::default().fg(Color::Yellow)),
        Span::raw(" | Dashboard: "),
        Span::styled("O", Style::default().fg(Color::Yellow)),
        Span::raw(" | Open: "),
        Span::styled("U", Style::default().fg(Color::Yellow)),
        Span::raw(" | Copy: "),
        Span::styled("C", Style::default().fg(Color::Yellow)),
        Span::raw(" | Quit: "),
        Span::styled("Q", Style::default().fg(Color::Yellow)),
    ];

    if state.is_loading {
        footer_text.push(Span::raw(" | "));
        footer_text.push(Span::styled(
            "⟳ Loading...",
            Style::default().fg(Color::Cyan),
        ));
    }

    if !state.query.is_empty() {
        footer_text.push(Span::raw(" | "));
        footer_text.push(Span::styled(
            format!("Filter: \"{}\"", state.query),
            Style::default().fg(Color::Cyan),
        ));
    }

    if let Some(notice) = &state.notice {
        let color = match notice.kind {
            NoticeKind::Info => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        footer_text.push(Span::raw(" | "));
        footer_text.push(Span::styled(
            notice.text.clone(),
            Style::default().fg(color),
        ));
    }

    let footer =
        Paragraph::new(Line::from(footer_text)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}
