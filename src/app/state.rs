//! App state - pure data structure with no I/O logic

use std::collections::HashSet;

use chrono::{DateTime, Local};

use crate::messages::RenderState;
use crate::models::Country;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Country data
    pub countries: Vec<Country>,
    pub is_loading: bool,
    pub error: Option<String>,

    // Favorites (session-only, keyed by cca3)
    pub favorites: HashSet<String>,

    // List selection
    pub selected: usize,

    // Fetch bookkeeping
    pub next_fetch_id: u64,
    pub pending_fetch_id: Option<u64>,
    pub last_updated: Option<DateTime<Local>>,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            countries: Vec::new(),
            is_loading: false,
            error: None,
            favorites: HashSet::new(),
            selected: 0,
            next_fetch_id: 1,
            pending_fetch_id: None,
            last_updated: None,
            show_help: false,
        }
    }

    /// Generate a unique fetch ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_fetch_id;
        self.next_fetch_id += 1;
        id
    }

    /// Currently selected country, if the list is non-empty
    pub fn selected_country(&self) -> Option<&Country> {
        self.countries.get(self.selected)
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            countries: self.countries.clone(),
            is_loading: self.is_loading,
            error: self.error.clone(),
            favorites: self.favorites.clone(),
            selected: self.selected,
            last_updated: self.last_updated,
            show_help: self.show_help,
        }
    }
}
