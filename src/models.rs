use serde::{Deserialize, Serialize};

/// Country name object as returned by the REST Countries API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
}

/// A single country entry (REST Countries v3.1 shape)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    /// Some territories have no capital, a few list several
    #[serde(default)]
    pub capital: Vec<String>,
    pub population: u64,
    pub region: String,
    /// Emoji flag
    pub flag: String,
    /// Three-letter country code, unique per entry
    pub cca3: String,
}

impl Country {
    /// First listed capital, if any
    pub fn capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }
}
