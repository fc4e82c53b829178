//! Chart of accounts.
//!
//! This module implements account classification:
//! - Account domain types
//! - Normal-balance classification (debit-normal vs credit-normal)
//! - Account registry for id lookup and code-ordered iteration
//! - Error types for account operations

pub mod error;
pub mod normal_balance;
pub mod registry;
pub mod types;

pub use error::AccountError;
pub use normal_balance::NormalBalance;
pub use registry::AccountRegistry;
pub use types::{Account, AccountType};
