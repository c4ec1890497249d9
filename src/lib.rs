pub mod catalog;
pub mod error;
pub mod portfolio;
pub mod prompt;
pub mod report;
pub mod session;
pub mod ticker;
pub mod valuation;
