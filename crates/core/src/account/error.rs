//! Account error types.

use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Account type string is outside the closed set.
    ///
    /// Classification never defaults: an unrecognized type would silently
    /// flip balance signs, so it is rejected here.
    #[error("Unknown account type: {0}")]
    UnknownAccountType(String),
}
