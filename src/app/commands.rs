//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::{SourceCommand, SourceResponse};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_country(&mut self) {
        if !self.countries.is_empty() {
            self.selected = (self.selected + 1) % self.countries.len();
        }
    }

    pub fn prev_country(&mut self) {
        if !self.countries.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.countries.len() - 1);
        }
    }

    // ========================
    // Favorites
    // ========================

    /// Flip favorite membership for a country code
    pub fn toggle_favorite(&mut self, code: &str) {
        if !self.favorites.remove(code) {
            self.favorites.insert(code.to_string());
        }
    }

    /// Toggle the currently selected country
    pub fn toggle_selected_favorite(&mut self) {
        if let Some(code) = self.selected_country().map(|c| c.cca3.clone()) {
            self.toggle_favorite(&code);
        }
    }

    pub fn is_favorite(&self, code: &str) -> bool {
        self.favorites.contains(code)
    }

    // ========================
    // Fetching
    // ========================

    /// Start a fetch unless one is already in flight
    pub fn prepare_fetch(&mut self) -> Option<SourceCommand> {
        if self.is_loading {
            return None;
        }

        self.is_loading = true;
        self.error = None;

        let id = self.next_id();
        self.pending_fetch_id = Some(id);

        Some(SourceCommand::FetchCountries { id })
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: SourceResponse) {
        // Only the pending fetch may mutate state: a stale completion must
        // not overwrite the outcome of a newer fetch.
        if self.pending_fetch_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Dropping stale fetch response");
            return;
        }

        match response {
            SourceResponse::Loaded {
                countries, time_ms, ..
            } => {
                tracing::info!(count = countries.len(), time_ms, "Countries loaded");
                self.countries = countries;
                if self.selected >= self.countries.len() {
                    self.selected = 0;
                }
                self.error = None;
                self.last_updated = Some(chrono::Local::now());
            }
            SourceResponse::Error {
                message, time_ms, ..
            } => {
                tracing::warn!(%message, time_ms, "Fetch failed");
                self.error = Some(message);
            }
        }

        self.finalize_fetch();
    }

    /// Finalize a completed fetch
    fn finalize_fetch(&mut self) {
        self.is_loading = false;
        self.pending_fetch_id = None;
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Country, CountryName};

    fn country(code: &str, name: &str) -> Country {
        Country {
            name: CountryName {
                common: name.to_string(),
            },
            capital: vec![String::from("Capital")],
            population: 1_000_000,
            region: String::from("Americas"),
            flag: String::from("🏳"),
            cca3: code.to_string(),
        }
    }

    fn sample_countries() -> Vec<Country> {
        vec![country("BRA", "Brazil"), country("FRA", "France")]
    }

    #[test]
    fn test_toggle_twice_restores_favorites() {
        let mut state = AppState::new();
        state.toggle_favorite("BRA");
        state.toggle_favorite("BRA");
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn test_toggle_affects_exactly_one_code() {
        let mut state = AppState::new();
        state.toggle_favorite("BRA");
        state.toggle_favorite("FRA");
        assert!(state.is_favorite("BRA"));
        assert!(state.is_favorite("FRA"));

        state.toggle_favorite("BRA");
        assert!(!state.is_favorite("BRA"));
        assert!(state.is_favorite("FRA"));
        assert_eq!(state.favorites.len(), 1);
    }

    #[test]
    fn test_toggle_selected_uses_selected_country() {
        let mut state = AppState::new();
        state.countries = sample_countries();
        state.selected = 1;
        state.toggle_selected_favorite();
        assert!(state.is_favorite("FRA"));
        assert!(!state.is_favorite("BRA"));
    }

    #[test]
    fn test_prepare_fetch_sets_loading_and_clears_error() {
        let mut state = AppState::new();
        state.error = Some(String::from("Connection to the server failed"));

        let cmd = state.prepare_fetch();
        assert!(matches!(
            cmd,
            Some(SourceCommand::FetchCountries { id: 1 })
        ));
        assert!(state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.pending_fetch_id, Some(1));
    }

    #[test]
    fn test_prepare_fetch_refused_while_loading() {
        let mut state = AppState::new();
        assert!(state.prepare_fetch().is_some());
        assert!(state.prepare_fetch().is_none());
        assert_eq!(state.pending_fetch_id, Some(1));
    }

    #[test]
    fn test_success_populates_and_clears_loading() {
        let mut state = AppState::new();
        state.prepare_fetch();

        state.handle_response(SourceResponse::Loaded {
            id: 1,
            countries: sample_countries(),
            time_ms: 1500,
        });

        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.pending_fetch_id, None);
        assert!(state.last_updated.is_some());
        let codes: Vec<&str> = state.countries.iter().map(|c| c.cca3.as_str()).collect();
        assert_eq!(codes, vec!["BRA", "FRA"]);
    }

    #[test]
    fn test_error_sets_message_and_clears_loading() {
        let mut state = AppState::new();
        state.prepare_fetch();

        state.handle_response(SourceResponse::Error {
            id: 1,
            message: String::from("Connection to the server failed"),
            time_ms: 1500,
        });

        assert!(!state.is_loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Connection to the server failed")
        );
        // The list and the error are never set together on a first fetch
        assert!(state.countries.is_empty());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = AppState::new();
        state.prepare_fetch();
        state.handle_response(SourceResponse::Error {
            id: 1,
            message: String::from("Connection to the server failed"),
            time_ms: 1500,
        });

        // Retry is in flight under a new id
        state.prepare_fetch();
        assert_eq!(state.pending_fetch_id, Some(2));

        // A leftover completion from the first fetch must be ignored
        state.handle_response(SourceResponse::Loaded {
            id: 1,
            countries: sample_countries(),
            time_ms: 3000,
        });
        assert!(state.is_loading);
        assert!(state.countries.is_empty());

        // The pending fetch still lands normally
        state.handle_response(SourceResponse::Loaded {
            id: 2,
            countries: sample_countries(),
            time_ms: 1500,
        });
        assert!(!state.is_loading);
        assert_eq!(state.countries.len(), 2);
    }

    #[test]
    fn test_selection_clamped_when_list_shrinks() {
        let mut state = AppState::new();
        state.selected = 5;
        state.prepare_fetch();
        state.handle_response(SourceResponse::Loaded {
            id: 1,
            countries: sample_countries(),
            time_ms: 1500,
        });
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_navigation_wraps_around() {
        let mut state = AppState::new();
        state.countries = sample_countries();

        state.next_country();
        assert_eq!(state.selected, 1);
        state.next_country();
        assert_eq!(state.selected, 0);
        state.prev_country();
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_navigation_noop_on_empty_list() {
        let mut state = AppState::new();
        state.next_country();
        state.prev_country();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_render_state_favorite_count_tracks_set() {
        let mut state = AppState::new();
        state.countries = sample_countries();
        state.toggle_favorite("BRA");
        assert_eq!(state.to_render_state().favorite_count(), 1);

        state.toggle_favorite("FRA");
        assert_eq!(state.to_render_state().favorite_count(), 2);
    }
}
