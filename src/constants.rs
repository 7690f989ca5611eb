//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// REST Countries endpoint the simulated source stands in for
#[allow(dead_code)]
pub const COUNTRIES_API_URL: &str = "https://restcountries.com/v3.1/all";

/// Simulated network latency applied to every fetch
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

/// Probability that a simulated fetch fails with a connection error
pub const FAILURE_RATE: f64 = 0.3;

/// Application name
pub const APP_NAME: &str = "Atlas TUI";

/// Application version
#[allow(dead_code)]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
