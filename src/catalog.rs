use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::ticker::Ticker;

#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub symbol: &'static str,
    pub company: &'static str,
    pub price: Decimal,
}

const STANDARD_LISTINGS: [Listing; 8] = [
    Listing {
        symbol: "AAPL",
        company: "Apple Inc.",
        price: dec!(180.50),
    },
    Listing {
        symbol: "TSLA",
        company: "Tesla Inc.",
        price: dec!(250.75),
    },
    Listing {
        symbol: "GOOGL",
        company: "Alphabet Inc.",
        price: dec!(140.25),
    },
    Listing {
        symbol: "MSFT",
        company: "Microsoft Corp.",
        price: dec!(375.80),
    },
    Listing {
        symbol: "AMZN",
        company: "Amazon.com Inc.",
        price: dec!(155.30),
    },
    Listing {
        symbol: "META",
        company: "Meta Platforms Inc.",
        price: dec!(485.20),
    },
    Listing {
        symbol: "NVDA",
        company: "NVIDIA Corp.",
        price: dec!(495.50),
    },
    Listing {
        symbol: "NFLX",
        company: "Netflix Inc.",
        price: dec!(480.75),
    },
];

/// Read-only symbol to price lookup.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    listings: &'static [Listing],
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            listings: &STANDARD_LISTINGS,
        }
    }

    pub fn listing(&self, ticker: &Ticker) -> Option<&Listing> {
        self.listings
            .iter()
            .find(|listing| listing.symbol == ticker.as_str())
    }

    pub fn price(&self, ticker: &Ticker) -> Option<Decimal> {
        self.listing(ticker).map(|listing| listing.price)
    }

    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.listing(ticker).is_some()
    }

    /// Listings ordered by symbol.
    pub fn listings(&self) -> Vec<&Listing> {
        let mut listings: Vec<&Listing> = self.listings.iter().collect();
        listings.sort_by_key(|listing| listing.symbol);
        listings
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
