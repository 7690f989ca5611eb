//! # Atlas TUI
//!
//! A terminal-based country browser backed by a (for now simulated)
//! REST Countries endpoint.
//!
//! ## Features
//! - Country list with flag, capital, population and region
//! - Session-only favorites keyed by country code
//! - Simulated fetch with latency and failure injection
//! - Loading / error / empty / populated views
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Source Layer (Tokio runtime)

pub mod app;
pub mod constants;
pub mod messages;
pub mod models;
pub mod source;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use messages::{RenderState, SourceCommand, SourceResponse, UiEvent, View};
pub use models::{Country, CountryName};
pub use source::{CountriesApi, SourceActor};
