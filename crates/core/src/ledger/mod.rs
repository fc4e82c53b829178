//! Journal lines and ledger computation.
//!
//! This module implements the numeric core of the engine:
//! - Journal line domain types
//! - Balance accumulation over arbitrary line sets
//! - Per-account ledger building (opening, movements, closing)
//! - Error types for ledger operations

pub mod accumulate;
pub mod builder;
pub mod error;
pub mod line;

#[cfg(test)]
mod builder_props;

pub use accumulate::{accumulate, AccountActivity};
pub use builder::{
    build_account_ledger, build_ledgers, AccountLedger, LedgerMovement, ReportingPeriod,
};
pub use error::LedgerError;
pub use line::{DocumentKind, DocumentRef, JournalLine};
