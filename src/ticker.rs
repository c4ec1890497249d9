use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Upper-cased stock symbol, e.g. `AAPL`.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(symbol: &str) -> Self {
        Self(symbol.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&String> for Ticker {
    fn from(value: &String) -> Self {
        Self::new(value.as_str())
    }
}

impl From<String> for Ticker {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}
