//! Current conditions card
//!
//! Shows the headline temperature with its animated readout, the feels-like
//! value, and the metric tiles (wind, humidity, visibility, pressure) plus
//! sunrise/sunset times.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{icon_glyph, WeatherBundle};

/// Color for temperature (warmer = more red, cooler = more blue)
fn temperature_color(celsius: f64) -> Color {
    if celsius >= 30.0 {
        Color::Red
    } else if celsius >= 25.0 {
        Color::LightRed
    } else if celsius >= 20.0 {
        Color::Yellow
    } else if celsius >= 10.0 {
        Color::Green
    } else if celsius >= 0.0 {
        Color::Cyan
    } else {
        Color::Blue
    }
}

/// Renders the current conditions card
pub fn render(frame: &mut Frame, area: Rect, app: &App, bundle: &WeatherBundle) {
    let snapshot = &bundle.conditions;
    let unit = app.query.unit;

    let block = Block::default()
        .title(format!(" {}, {} ", snapshot.location, snapshot.country))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // headline
            Constraint::Length(3), // metric tiles
            Constraint::Length(3), // sun times
        ])
        .split(inner);

    let headline = vec![
        Line::from(vec![
            Span::raw(format!("{}  ", icon_glyph(&snapshot.icon))),
            Span::styled(
                format!(
                    "{}{}",
                    app.gauges.temperature.displayed(),
                    unit.suffix()
                ),
                Style::default()
                    .fg(temperature_color(snapshot.temperature))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            snapshot.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!(
                "Feels like {}{}",
                app.gauges.feels_like.displayed(),
                unit.suffix()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(headline).alignment(Alignment::Center),
        rows[0],
    );

    render_metric_tiles(frame, rows[1], app);
    render_sun_times(frame, rows[2], bundle);
}

/// Renders the four metric tiles side by side
fn render_metric_tiles(frame: &mut Frame, area: Rect, app: &App) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    metric_tile(
        frame,
        tiles[0],
        "Wind",
        format!("{} km/h", app.gauges.wind.displayed()),
        Color::Cyan,
    );
    metric_tile(
        frame,
        tiles[1],
        "Humidity",
        format!("{}%", app.gauges.humidity.displayed()),
        Color::Blue,
    );
    metric_tile(
        frame,
        tiles[2],
        "Visibility",
        format!("{} km", app.gauges.visibility.displayed()),
        Color::Magenta,
    );
    metric_tile(
        frame,
        tiles[3],
        "Pressure",
        format!("{} hPa", app.gauges.pressure.displayed()),
        Color::Green,
    );
}

/// Renders one labelled metric value
fn metric_tile(frame: &mut Frame, area: Rect, label: &str, value: String, color: Color) {
    let lines = vec![
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Renders sunrise and sunset times
fn render_sun_times(frame: &mut Frame, area: Rect, bundle: &WeatherBundle) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let sunrise = Paragraph::new(Line::from(vec![
        Span::styled("\u{2600} Sunrise ", Style::default().fg(Color::Yellow)),
        Span::raw(bundle.conditions.sunrise.format("%H:%M").to_string()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(sunrise, halves[0]);

    let sunset = Paragraph::new(Line::from(vec![
        Span::styled("\u{1F319} Sunset ", Style::default().fg(Color::Magenta)),
        Span::raw(bundle.conditions.sunset.format("%H:%M").to_string()),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(sunset, halves[1]);
}
