use std::fmt::Display;

use colored::Colorize;
use tracing::debug;

use crate::{catalog::Catalog, error::TrackerError, ticker::Ticker};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Holding {
    pub ticker: Ticker,
    pub quantity: u64,
}

/// Holdings keyed by ticker, kept in the order they were first entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self { holdings: vec![] }
    }

    /// Records `quantity` shares of `ticker`, replacing any previous quantity.
    pub fn add(
        &mut self,
        catalog: &Catalog,
        ticker: Ticker,
        quantity: u64,
    ) -> Result<(), TrackerError> {
        if !catalog.contains(&ticker) {
            return Err(TrackerError::UnknownSymbol(ticker));
        }
        if quantity == 0 {
            return Err(TrackerError::NonPositiveQuantity(0));
        }

        match self.holdings.iter_mut().find(|h| h.ticker == ticker) {
            Some(holding) => {
                debug!("{} quantity {} -> {}", ticker, holding.quantity, quantity);
                holding.quantity = quantity;
            }
            None => {
                debug!("new holding {} x{}", ticker, quantity);
                self.holdings.push(Holding { ticker, quantity });
            }
        }
        Ok(())
    }

    pub fn quantity(&self, ticker: &Ticker) -> Option<u64> {
        self.holdings
            .iter()
            .find(|h| &h.ticker == ticker)
            .map(|h| h.quantity)
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }
}

impl Display for Portfolio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: Vec<String> = self
            .holdings
            .iter()
            .map(|h| format!("{}: {}", h.ticker, h.quantity.to_string().purple()))
            .collect();
        write!(f, "{}", s.join(" / "))
    }
}
