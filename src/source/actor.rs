//! Source actor - runs simulated fetches in the Tokio runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{SourceCommand, SourceResponse};
use crate::source::api::{execute_fetch, CountriesApi};

/// Source actor that processes fetch commands
pub struct SourceActor {
    api: CountriesApi,
    response_tx: mpsc::UnboundedSender<SourceResponse>,
    active_fetches: JoinSet<()>,
}

impl SourceActor {
    pub fn new(response_tx: mpsc::UnboundedSender<SourceResponse>) -> Self {
        SourceActor {
            api: CountriesApi::new(),
            response_tx,
            active_fetches: JoinSet::new(),
        }
    }

    /// Run the source actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<SourceCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(SourceCommand::FetchCountries { id }) => {
                            let response_tx = self.response_tx.clone();
                            let api = self.api.clone();

                            self.active_fetches.spawn(async move {
                                tracing::info!(id, "Fetching countries");
                                let result = execute_fetch(&api, id).await;
                                tracing::info!(id, "Fetch completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(SourceCommand::Shutdown) | None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_fetches.join_next() => {}
            }
        }
    }
}
