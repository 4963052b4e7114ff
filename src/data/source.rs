//! Weather data source abstraction and the shipped mock implementation
//!
//! The state machine treats the source as opaque: an async call that takes an
//! unspecified amount of time and either resolves to a [`WeatherBundle`] or
//! fails with a reason. The shipped implementation returns fixed in-memory
//! data after a configurable delay, which keeps the whole dashboard runnable
//! without any network access and makes every outcome injectable in tests.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use super::{ConditionsSnapshot, DailyEntry, HourlyEntry, WeatherBundle};

/// Default artificial latency of the mock source
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1000);

/// Errors a weather source can produce
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The fetch failed; carries a short human-readable reason
    #[error("Failed to fetch weather data: {0}")]
    Failed(String),

    /// The source is not able to serve any requests right now
    #[error("Weather source unavailable")]
    Unavailable,
}

impl FetchError {
    /// The short reason string shown in the error panel
    pub fn reason(&self) -> String {
        match self {
            FetchError::Failed(reason) => reason.clone(),
            FetchError::Unavailable => "Weather source unavailable".to_string(),
        }
    }
}

/// An asynchronous provider of weather data for a named location
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetches conditions plus hourly and five-day forecasts for `location`
    async fn fetch(&self, location: &str) -> Result<WeatherBundle, FetchError>;
}

/// Mock weather source returning constant data after a fixed delay
///
/// The returned bundle always carries the requested location name so the
/// dashboard reflects what the user searched for.
#[derive(Debug, Clone)]
pub struct MockWeatherSource {
    /// Artificial latency before resolving
    delay: Duration,
    /// When set, every fetch fails with this reason instead of resolving
    fail_reason: Option<String>,
}

impl Default for MockWeatherSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWeatherSource {
    /// Creates a mock source with the default 1000ms delay
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_MOCK_DELAY,
            fail_reason: None,
        }
    }

    /// Overrides the artificial latency
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Makes every fetch fail deterministically with the given reason
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            delay: Duration::ZERO,
            fail_reason: Some(reason.into()),
        }
    }
}

#[async_trait]
impl WeatherSource for MockWeatherSource {
    async fn fetch(&self, location: &str) -> Result<WeatherBundle, FetchError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(reason) = &self.fail_reason {
            return Err(FetchError::Failed(reason.clone()));
        }

        Ok(mock_bundle(location))
    }
}

/// Builds the fixed demonstration bundle for the given location
pub fn mock_bundle(location: &str) -> WeatherBundle {
    let conditions = ConditionsSnapshot {
        location: location.to_string(),
        country: "GB".to_string(),
        temperature: 22.0,
        feels_like: 25.0,
        description: "Partly cloudy".to_string(),
        humidity: 65,
        wind_speed: 3.5,
        pressure: 1013,
        visibility: 10.0,
        uv_index: 6.0,
        sunrise: NaiveTime::from_hms_opt(6, 30, 0).expect("valid sunrise"),
        sunset: NaiveTime::from_hms_opt(20, 15, 0).expect("valid sunset"),
        icon: "02d".to_string(),
    };

    let daily = vec![
        daily(2024, 1, 15, "Today", 24.0, 18.0, "Partly cloudy", "02d", 65, 3.5),
        daily(2024, 1, 16, "Tomorrow", 26.0, 20.0, "Sunny", "01d", 55, 2.8),
        daily(2024, 1, 17, "Wednesday", 23.0, 17.0, "Light rain", "10d", 78, 4.2),
        daily(2024, 1, 18, "Thursday", 21.0, 15.0, "Cloudy", "04d", 70, 3.8),
        daily(2024, 1, 19, "Friday", 25.0, 19.0, "Partly cloudy", "02d", 60, 3.2),
    ];

    let hourly = vec![
        hourly("12:00", 22.0, "02d", "Partly cloudy"),
        hourly("13:00", 23.0, "02d", "Partly cloudy"),
        hourly("14:00", 24.0, "01d", "Sunny"),
        hourly("15:00", 25.0, "01d", "Sunny"),
        hourly("16:00", 24.0, "02d", "Partly cloudy"),
        hourly("17:00", 23.0, "02d", "Partly cloudy"),
        hourly("18:00", 22.0, "03d", "Cloudy"),
        hourly("19:00", 21.0, "03d", "Cloudy"),
    ];

    WeatherBundle {
        conditions,
        daily,
        hourly,
    }
}

#[allow(clippy::too_many_arguments)]
fn daily(
    year: i32,
    month: u32,
    day_of_month: u32,
    day: &str,
    high: f64,
    low: f64,
    description: &str,
    icon: &str,
    humidity: u8,
    wind_speed: f64,
) -> DailyEntry {
    DailyEntry {
        date: NaiveDate::from_ymd_opt(year, month, day_of_month).expect("valid date"),
        day: day.to_string(),
        high,
        low,
        description: description.to_string(),
        icon: icon.to_string(),
        humidity,
        wind_speed,
    }
}

fn hourly(time: &str, temperature: f64, icon: &str, description: &str) -> HourlyEntry {
    HourlyEntry {
        time: time.to_string(),
        temperature,
        icon: icon.to_string(),
        description: description.to_string(),
    }
}
