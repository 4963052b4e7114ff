//! WeatherPro Library
//!
//! This module exposes the state machine, animation, data and CLI modules
//! for use in integration tests.

pub mod anim;
pub mod app;
pub mod cli;
pub mod data;
pub mod units;
