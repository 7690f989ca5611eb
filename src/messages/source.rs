//! Source messages - communication between App and Source layers

use crate::models::Country;

/// Commands sent from App layer to Source layer
#[derive(Debug, Clone)]
pub enum SourceCommand {
    /// Fetch the country list
    FetchCountries { id: u64 },
    /// Shutdown the source actor
    Shutdown,
}

/// Responses sent from Source layer to App layer
#[derive(Debug, Clone)]
pub enum SourceResponse {
    /// Fetch completed with a country list
    Loaded {
        id: u64,
        countries: Vec<Country>,
        time_ms: u64,
    },
    /// Fetch failed
    Error {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl SourceResponse {
    /// Get the fetch ID from the response
    pub fn id(&self) -> u64 {
        match self {
            SourceResponse::Loaded { id, .. } => *id,
            SourceResponse::Error { id, .. } => *id,
        }
    }
}
