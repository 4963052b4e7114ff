//! Loading and error panels
//!
//! The loading spinner cycles through braille frames on each tick while a
//! fetch is in flight; the error panel shows the failure reason and the retry
//! affordance.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Braille spinner frames
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Returns the spinner glyph for the given frame counter
fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Renders the loading spinner centered in the area
pub fn render_loading(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let text = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_glyph(spinner_frame)),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled(
            "Loading weather data...",
            Style::default().fg(Color::Cyan),
        ),
    ]);

    let loading = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(loading, chunks[1]);
}

/// Renders the error panel with a retry hint
pub fn render_error(frame: &mut Frame, area: Rect, reason: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(7),
            Constraint::Percentage(35),
        ])
        .split(area);

    let lines = vec![
        Line::from(Span::styled(
            "Oops! Something went wrong",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            reason.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press r to try again",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let panel = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(panel, chunks[1]);
}
