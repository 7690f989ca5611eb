//! Render state - data structure sent from App layer to UI for rendering

use std::collections::HashSet;

use chrono::{DateTime, Local};

use crate::models::Country;

/// Which of the four mutually-exclusive views should be drawn
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum View {
    Loading,
    Error,
    Populated,
    Empty,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub countries: Vec<Country>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub favorites: HashSet<String>,
    pub selected: usize,
    pub last_updated: Option<DateTime<Local>>,
    pub show_help: bool,
}

impl RenderState {
    /// Select the view from (loading, error, list length).
    /// Loading takes precedence, then error, so a frame is never ambiguous.
    pub fn view(&self) -> View {
        if self.is_loading {
            View::Loading
        } else if self.error.is_some() {
            View::Error
        } else if self.countries.is_empty() {
            View::Empty
        } else {
            View::Populated
        }
    }

    /// Number of favorited countries
    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }
}
