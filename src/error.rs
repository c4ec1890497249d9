use thiserror::Error;

use crate::ticker::Ticker;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("'{0}' is not available")]
    UnknownSymbol(Ticker),

    #[error("'{0}' is not a valid number")]
    InvalidQuantity(String),

    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(i64),
}
