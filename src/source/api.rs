//! Simulated countries client - stands in for the REST Countries endpoint
//!
//! Keeps the latency and failure characteristics of a real HTTP call so the
//! loading, error and populated views are exercised end to end. The payload
//! goes through the same serde model a real response body would.

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use rand::Rng;

use crate::constants::{FAILURE_RATE, SIMULATED_LATENCY};
use crate::messages::SourceResponse;
use crate::models::Country;

/// Canned payload in the REST Countries v3.1 shape
const COUNTRIES_FIXTURE: &str = r#"[
  {
    "name": { "common": "Brazil" },
    "capital": ["Brasília"],
    "population": 215353593,
    "region": "Americas",
    "flag": "🇧🇷",
    "cca3": "BRA"
  },
  {
    "name": { "common": "France" },
    "capital": ["Paris"],
    "population": 67391582,
    "region": "Europe",
    "flag": "🇫🇷",
    "cca3": "FRA"
  }
]"#;

/// Simulated countries API client
#[derive(Clone, Debug)]
pub struct CountriesApi {
    latency: Duration,
    failure_rate: f64,
}

impl CountriesApi {
    pub fn new() -> Self {
        CountriesApi {
            latency: SIMULATED_LATENCY,
            failure_rate: FAILURE_RATE,
        }
    }

    /// Client with a forced failure rate (0.0 never fails, 1.0 always fails)
    pub fn with_failure_rate(failure_rate: f64) -> Self {
        CountriesApi {
            latency: SIMULATED_LATENCY,
            failure_rate,
        }
    }

    /// Fetch the country list, simulating latency and flaky connectivity
    pub async fn fetch_countries(&self) -> Result<Vec<Country>> {
        tokio::time::sleep(self.latency).await;

        if rand::thread_rng().gen::<f64>() < self.failure_rate {
            bail!("Connection to the server failed");
        }

        let countries = serde_json::from_str(COUNTRIES_FIXTURE)?;
        Ok(countries)
    }
}

impl Default for CountriesApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Execute a fetch and package the outcome for the app layer
pub async fn execute_fetch(api: &CountriesApi, fetch_id: u64) -> SourceResponse {
    let start = Instant::now();
    let result = api.fetch_countries().await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(countries) => SourceResponse::Loaded {
            id: fetch_id,
            countries,
            time_ms: elapsed,
        },
        Err(e) => SourceResponse::Error {
            id: fetch_id,
            message: e.to_string(),
            time_ms: elapsed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_success_yields_fixture_countries() {
        let api = CountriesApi::with_failure_rate(0.0);
        let countries = api.fetch_countries().await.unwrap();
        let codes: Vec<&str> = countries.iter().map(|c| c.cca3.as_str()).collect();
        assert_eq!(codes, vec!["BRA", "FRA"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_forced_failure_is_a_connection_error() {
        let api = CountriesApi::with_failure_rate(1.0);
        let err = api.fetch_countries().await.unwrap_err();
        assert!(err.to_string().contains("Connection"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_execute_fetch_tags_outcome_with_id() {
        let api = CountriesApi::with_failure_rate(1.0);
        match execute_fetch(&api, 7).await {
            SourceResponse::Error { id, message, .. } => {
                assert_eq!(id, 7);
                assert!(message.contains("Connection"));
            }
            other => panic!("expected error response, got {:?}", other),
        }
    }
}
