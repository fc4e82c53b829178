//! Ledger error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during ledger computation.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}
