use rust_decimal::Decimal;

use crate::{catalog::Catalog, error::TrackerError, portfolio::Portfolio, ticker::Ticker};

#[derive(Clone, Debug, PartialEq)]
pub struct ValuationRow {
    pub ticker: Ticker,
    pub quantity: u64,
    pub price: Decimal,
    pub value: Decimal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Valuation {
    pub rows: Vec<ValuationRow>,
    pub total: Decimal,
}

impl Valuation {
    /// Prices every holding against `catalog`, keeping portfolio order.
    pub fn compute(portfolio: &Portfolio, catalog: &Catalog) -> Result<Self, TrackerError> {
        let rows = portfolio
            .holdings()
            .iter()
            .map(|holding| -> Result<ValuationRow, TrackerError> {
                let price = catalog
                    .price(&holding.ticker)
                    .ok_or_else(|| TrackerError::UnknownSymbol(holding.ticker.clone()))?;
                Ok(ValuationRow {
                    ticker: holding.ticker.clone(),
                    quantity: holding.quantity,
                    price,
                    value: price * Decimal::from(holding.quantity),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total = rows.iter().fold(Decimal::ZERO, |acc, row| acc + row.value);

        Ok(Self { rows, total })
    }
}
