//! Unit preference and presentation-time conversions
//!
//! All weather values are stored canonically in Celsius and metres per second.
//! Conversion to the user's preferred display unit happens only when a value
//! is about to be shown (or handed to an animated gauge as a target).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Temperature unit preference selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// Returns the opposite unit
    pub fn toggled(self) -> Self {
        match self {
            Unit::Celsius => Unit::Fahrenheit,
            Unit::Fahrenheit => Unit::Celsius,
        }
    }

    /// Display suffix for temperatures in this unit
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
        }
    }

    /// Converts a canonical Celsius temperature into this unit
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Unit::Celsius => celsius,
            Unit::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }
}

/// Converts Celsius to Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Converts Fahrenheit to Celsius
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Converts metres per second to kilometres per hour
pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * 3.6
}
