//! Top-level dashboard layout
//!
//! Composes the header, search bar, weather panels and footer into one page,
//! branching on the fetch state for the body.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, FetchState, InputMode};

use super::{conditions, daily, hourly, status};

/// Renders the whole dashboard
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // search bar
            Constraint::Min(10),   // body
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_search_bar(frame, chunks[1], app);
    render_body(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);
}

/// Renders the title bar with the unit indicator
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            "\u{2600} WeatherPro",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", app.query.unit.suffix()),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Renders the search bar, highlighting it while editing
fn render_search_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, border_color) = match app.mode {
        InputMode::Editing => {
            // Trailing block shows the insertion point.
            (format!("{}\u{2588}", app.input), Color::Magenta)
        }
        InputMode::Normal => {
            let placeholder = if app.query.location.is_empty() {
                "Press / to search for a city".to_string()
            } else {
                app.query.location.clone()
            };
            (placeholder, Color::DarkGray)
        }
    };

    let search = Paragraph::new(text).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(search, area);
}

/// Renders the body according to the fetch state
fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    match &app.fetch {
        FetchState::Idle => {
            let hint = Paragraph::new("No city selected yet. Press / to search.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(hint, area);
        }
        FetchState::Loading => {
            status::render_loading(frame, area, app.spinner_frame);
        }
        FetchState::Failed { reason } => {
            status::render_error(frame, area, reason);
        }
        FetchState::Ready(bundle) => {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(12), Constraint::Min(8)])
                .split(area);

            conditions::render(frame, rows[0], app, bundle);

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[1]);

            hourly::render(frame, columns[0], app, bundle);
            daily::render(frame, columns[1], app, bundle);
        }
    }
}

/// Renders the keybinding hints
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.mode {
        InputMode::Editing => "Enter submit | Esc cancel",
        InputMode::Normal => "/ search | u units | l current location | r refresh | q quit",
    };

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
