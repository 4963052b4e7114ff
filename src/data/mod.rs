//! Core data models for WeatherPro
//!
//! This module contains the immutable weather records produced by a fetch:
//! current conditions, the hourly strip, and the five-day forecast. Values
//! are stored canonically (Celsius, metres per second); display-unit
//! conversion happens at presentation time only.

pub mod location;
pub mod source;

pub use location::{LocationError, LocationProvider, StubLocationProvider};
pub use source::{FetchError, MockWeatherSource, WeatherSource};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Current weather conditions for a location
///
/// Immutable once produced; a new fetch supersedes the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionsSnapshot {
    /// Display name of the location
    pub location: String,
    /// ISO country code
    pub country: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Feels-like temperature in Celsius
    pub feels_like: f64,
    /// Textual description (e.g. "Partly cloudy")
    pub description: String,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in metres per second
    pub wind_speed: f64,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Visibility in kilometres
    pub visibility: f64,
    /// UV index
    pub uv_index: f64,
    /// Sunrise time (local)
    pub sunrise: NaiveTime,
    /// Sunset time (local)
    pub sunset: NaiveTime,
    /// OpenWeather-style icon code (e.g. "02d")
    pub icon: String,
}

/// One day in the five-day forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Calendar date of the forecast
    pub date: NaiveDate,
    /// Day label shown to the user ("Today", "Tomorrow", weekday name)
    pub day: String,
    /// High temperature in Celsius
    pub high: f64,
    /// Low temperature in Celsius
    pub low: f64,
    /// Textual description
    pub description: String,
    /// Icon code
    pub icon: String,
    /// Relative humidity percentage
    pub humidity: u8,
    /// Wind speed in metres per second
    pub wind_speed: f64,
}

/// One hour in the hourly forecast strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    /// Time label ("12:00")
    pub time: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Icon code
    pub icon: String,
    /// Textual description
    pub description: String,
}

/// Everything a single successful fetch resolves to
///
/// The `daily` and `hourly` sequences are chronological and must stay that
/// way through any transformation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherBundle {
    /// Current conditions
    pub conditions: ConditionsSnapshot,
    /// Five-day forecast, oldest first
    pub daily: Vec<DailyEntry>,
    /// Hourly forecast, earliest first
    pub hourly: Vec<HourlyEntry>,
}

/// Maps an OpenWeather-style icon code to a terminal glyph
///
/// Unknown codes fall back to the partly-cloudy glyph.
pub fn icon_glyph(code: &str) -> &'static str {
    match code {
        "01d" => "\u{2600}",                                 // ☀
        "01n" => "\u{1F319}",                                // 🌙
        "02d" => "\u{26C5}",                                 // ⛅
        "02n" | "03d" | "03n" | "04d" | "04n" => "\u{2601}", // ☁
        "09d" | "09n" | "10n" => "\u{1F327}",                // 🌧
        "10d" => "\u{1F326}",                                // 🌦
        "11d" | "11n" => "\u{26C8}",                         // ⛈
        "13d" | "13n" => "\u{1F328}",                        // 🌨
        "50d" | "50n" => "\u{1F32B}",                        // 🌫
        _ => "\u{26C5}",                                     // ⛅
    }
}
