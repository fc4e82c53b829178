//! Account domain types.

use serde::{Deserialize, Serialize};

use lading_shared::types::AccountId;

use super::error::AccountError;

/// Account classification in the chart of accounts.
///
/// The set is closed. Every posted journal line references an account with
/// exactly one of these types, and the type fixes the account's normal
/// balance for all historical lines, which is why it must never change once
/// the account has activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Asset account (cash, receivables, equipment).
    Asset,
    /// Liability account (payables, loans).
    Liability,
    /// Equity account (capital, retained earnings).
    Equity,
    /// Revenue account (freight income, handling fees).
    Revenue,
    /// Operating expense account.
    Expense,
    /// Cost of goods sold.
    Cogs,
    /// Direct cost attributable to revenue (trucking, port charges).
    DirectCost,
    /// Non-operating income (interest, forex gains).
    OtherIncome,
    /// Non-operating expense (bank charges, forex losses).
    OtherExpense,
}

impl AccountType {
    /// All account types, in statement presentation order.
    pub const ALL: [Self; 9] = [
        Self::Asset,
        Self::Liability,
        Self::Equity,
        Self::Revenue,
        Self::Cogs,
        Self::DirectCost,
        Self::Expense,
        Self::OtherIncome,
        Self::OtherExpense,
    ];
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Asset => "ASSET",
            Self::Liability => "LIABILITY",
            Self::Equity => "EQUITY",
            Self::Revenue => "REVENUE",
            Self::Expense => "EXPENSE",
            Self::Cogs => "COGS",
            Self::DirectCost => "DIRECT_COST",
            Self::OtherIncome => "OTHER_INCOME",
            Self::OtherExpense => "OTHER_EXPENSE",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AccountType {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ASSET" => Ok(Self::Asset),
            "LIABILITY" => Ok(Self::Liability),
            "EQUITY" => Ok(Self::Equity),
            "REVENUE" => Ok(Self::Revenue),
            "EXPENSE" => Ok(Self::Expense),
            "COGS" => Ok(Self::Cogs),
            "DIRECT_COST" => Ok(Self::DirectCost),
            "OTHER_INCOME" => Ok(Self::OtherIncome),
            "OTHER_EXPENSE" => Ok(Self::OtherExpense),
            _ => Err(AccountError::UnknownAccountType(s.to_string())),
        }
    }
}

/// An entry in the chart of accounts.
///
/// Accounts are created by chart-of-accounts setup and are read-only to the
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Account code (unique, sortable, e.g. "1100").
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_str_round_trip() {
        for account_type in AccountType::ALL {
            let parsed = AccountType::from_str(&account_type.to_string()).unwrap();
            assert_eq!(parsed, account_type);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(
            AccountType::from_str("asset").unwrap(),
            AccountType::Asset
        );
        assert_eq!(
            AccountType::from_str("direct_cost").unwrap(),
            AccountType::DirectCost
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(matches!(
            AccountType::from_str("CONTRA_ASSET"),
            Err(AccountError::UnknownAccountType(_))
        ));
        assert!(AccountType::from_str("").is_err());
    }

    #[test]
    fn test_all_covers_every_variant() {
        assert_eq!(AccountType::ALL.len(), 9);
    }
}
