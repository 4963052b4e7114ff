//! Command-line interface parsing for WeatherPro
//!
//! This module handles parsing of CLI arguments using clap: the initial city,
//! the unit preference, and the mock-source knobs used for demos and tests.

use clap::Parser;

use crate::units::Unit;

/// WeatherPro - terminal weather dashboard with animated readouts
#[derive(Parser, Debug)]
#[command(name = "weatherpro")]
#[command(about = "Terminal weather dashboard")]
#[command(version)]
pub struct Cli {
    /// City to show on startup
    #[arg(default_value = "London")]
    pub city: String,

    /// Temperature unit
    #[arg(long, value_enum, default_value_t = Unit::Celsius)]
    pub unit: Unit,

    /// Artificial latency of the mock weather source, in milliseconds
    #[arg(long, value_name = "MS")]
    pub mock_delay_ms: Option<u64>,

    /// Force the mock weather source to fail with this reason
    ///
    /// Useful for demonstrating the error panel and the retry flow.
    #[arg(long, value_name = "REASON")]
    pub fail: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Initial city to query
    pub city: String,
    /// Initial unit preference
    pub unit: Unit,
    /// Mock source latency override
    pub mock_delay_ms: Option<u64>,
    /// Forced mock failure reason
    pub fail_reason: Option<String>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            city: "London".to_string(),
            unit: Unit::Celsius,
            mock_delay_ms: None,
            fail_reason: None,
        }
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            city: cli.city.clone(),
            unit: cli.unit,
            mock_delay_ms: cli.mock_delay_ms,
            fail_reason: cli.fail.clone(),
        }
    }
}
