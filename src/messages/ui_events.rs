//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // List navigation
    NextCountry,
    PrevCountry,

    // Actions
    ToggleFavorite,
    /// Load or reload the country list (also used for retry after an error)
    Fetch,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return Some(UiEvent::Quit);
        }
    }

    // Help popup swallows every key
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('r') | KeyCode::Char('l') => Some(UiEvent::Fetch),
        KeyCode::Char('f') | KeyCode::Char(' ') | KeyCode::Enter => Some(UiEvent::ToggleFavorite),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevCountry),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextCountry),
        _ => None,
    }
}
