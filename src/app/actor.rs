//! App actor - message loop processing UI events and source responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderState, SourceCommand, SourceResponse, UiEvent};

/// App actor that processes UI events and source responses
pub struct AppActor {
    state: AppState,
    source_tx: mpsc::UnboundedSender<SourceCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        source_tx: mpsc::UnboundedSender<SourceCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            source_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut source_rx: mpsc::UnboundedReceiver<SourceResponse>,
    ) {
        // Fetch on startup, then publish the first frame
        if let Some(cmd) = self.state.prepare_fetch() {
            let _ = self.source_tx.send(cmd);
        }
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.source_tx.send(SourceCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = source_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Navigation
            UiEvent::NextCountry => self.state.next_country(),
            UiEvent::PrevCountry => self.state.prev_country(),

            // Actions
            UiEvent::ToggleFavorite => self.state.toggle_selected_favorite(),
            UiEvent::Fetch => {
                if let Some(cmd) = self.state.prepare_fetch() {
                    let _ = self.source_tx.send(cmd);
                }
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
