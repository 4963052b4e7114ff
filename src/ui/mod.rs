//! UI rendering module for WeatherPro
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components. All renderers are
//! read-only over the application state.

pub mod conditions;
pub mod daily;
pub mod dashboard;
pub mod hourly;
pub mod status;

pub use dashboard::render as render_dashboard;
