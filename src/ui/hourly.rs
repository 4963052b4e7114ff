//! Hourly forecast strip
//!
//! Renders as many hourly columns as fit the panel width, each with the time,
//! a condition glyph, the animated temperature and the description.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{icon_glyph, WeatherBundle};

/// Width of one hourly column, including padding
const COLUMN_WIDTH: u16 = 12;

/// Renders the hourly forecast panel
pub fn render(frame: &mut Frame, area: Rect, app: &App, bundle: &WeatherBundle) {
    let block = Block::default()
        .title(" Hourly Forecast ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let visible = usize::from(inner.width / COLUMN_WIDTH).min(bundle.hourly.len());
    if visible == 0 {
        return;
    }

    let constraints: Vec<Constraint> = (0..visible)
        .map(|_| Constraint::Length(COLUMN_WIDTH))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (i, entry) in bundle.hourly.iter().take(visible).enumerate() {
        let displayed = app
            .gauges
            .hourly_temps
            .get(i)
            .map(|gauge| gauge.displayed())
            .unwrap_or(0);

        let lines = vec![
            Line::from(Span::styled(
                entry.time.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::raw(icon_glyph(&entry.icon).to_string())),
            Line::from(Span::styled(
                format!("{}{}", displayed, app.query.unit.suffix()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                entry.description.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), columns[i]);
    }
}
