//! Normal-balance classification.
//!
//! Every balance in the engine is signed in the direction the account
//! naturally increases. This single classification drives the sign
//! convention everywhere balances are accumulated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::AccountType;

/// The direction in which an account type's balance naturally increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalBalance {
    /// Debit-normal accounts (assets and all expense-like types).
    DebitNormal,
    /// Credit-normal accounts (liabilities, equity, revenue-like types).
    CreditNormal,
}

impl NormalBalance {
    /// Calculates the signed balance change for a debit/credit pair.
    ///
    /// Debit-normal: `debit - credit`. Credit-normal: `credit - debit`.
    #[must_use]
    pub fn signed_change(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::DebitNormal => debit - credit,
            Self::CreditNormal => credit - debit,
        }
    }
}

impl AccountType {
    /// Returns the normal balance for this account type.
    ///
    /// Total over the closed enum: there is no default arm to hide an
    /// unclassified type.
    #[must_use]
    pub const fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Liability | Self::Equity | Self::Revenue | Self::OtherIncome => {
                NormalBalance::CreditNormal
            }
            Self::Asset | Self::Expense | Self::Cogs | Self::DirectCost | Self::OtherExpense => {
                NormalBalance::DebitNormal
            }
        }
    }

    /// Returns true if the account type increases on the credit side.
    #[must_use]
    pub const fn is_credit_normal(self) -> bool {
        matches!(self.normal_balance(), NormalBalance::CreditNormal)
    }
}
