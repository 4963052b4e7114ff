//! Five-day forecast list
//!
//! One row per day: label, condition glyph, description, humidity, wind and
//! the animated high/low temperatures.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{icon_glyph, WeatherBundle};
use crate::units::mps_to_kmh;

/// Renders the five-day forecast panel
pub fn render(frame: &mut Frame, area: Rect, app: &App, bundle: &WeatherBundle) {
    let block = Block::default()
        .title(" 5-Day Forecast ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(bundle.daily.len());
    for (i, entry) in bundle.daily.iter().enumerate() {
        let high = app
            .gauges
            .daily_highs
            .get(i)
            .map(|gauge| gauge.displayed())
            .unwrap_or(0);
        let low = app
            .gauges
            .daily_lows
            .get(i)
            .map(|gauge| gauge.displayed())
            .unwrap_or(0);

        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", entry.day),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{}  ", icon_glyph(&entry.icon))),
            Span::styled(
                format!("{:<14}", entry.description),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("\u{1F4A7}{:>3}%  ", entry.humidity),
                Style::default().fg(Color::Blue),
            ),
            Span::styled(
                format!("{:>3} km/h  ", mps_to_kmh(entry.wind_speed).round() as i64),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("{}{}", high, app.query.unit.suffix()),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!(" / {}{}", low, app.query.unit.suffix()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
