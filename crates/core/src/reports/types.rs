//! Statement data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lading_shared::types::AccountId;

use crate::account::{Account, AccountType};
use crate::ledger::AccountLedger;

/// One account's period summary: the input row for every statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountClosing {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Account classification.
    pub account_type: AccountType,
    /// Balance immediately before the period.
    pub opening: Decimal,
    /// Total debits within the period.
    pub period_debit: Decimal,
    /// Total credits within the period.
    pub period_credit: Decimal,
    /// Balance at the end of the period.
    pub closing: Decimal,
}

impl AccountClosing {
    /// Distills a ledger into its statement row.
    #[must_use]
    pub fn from_ledger(account: &Account, ledger: &AccountLedger) -> Self {
        Self {
            account_id: account.id,
            code: account.code.clone(),
            name: account.name.clone(),
            account_type: account.account_type,
            opening: ledger.opening,
            period_debit: ledger.period_debit,
            period_credit: ledger.period_credit,
            closing: ledger.closing,
        }
    }

    /// Returns true if any of the four summary values is non-zero.
    #[must_use]
    pub fn has_activity(&self) -> bool {
        !self.opening.is_zero()
            || !self.period_debit.is_zero()
            || !self.period_credit.is_zero()
            || !self.closing.is_zero()
    }
}

/// Trial balance rows for one account type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceSection {
    /// The account type this section groups.
    pub account_type: AccountType,
    /// Rows in account-code order.
    pub rows: Vec<AccountClosing>,
}

/// Trial balance totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceTotals {
    /// Total period debit across all accounts.
    pub total_debit: Decimal,
    /// Total period credit across all accounts.
    pub total_credit: Decimal,
    /// Signed discrepancy, `total_debit - total_credit`.
    pub difference: Decimal,
    /// Whether debits equal credits within epsilon.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceReport {
    /// Period start date.
    pub period_start: NaiveDate,
    /// Period end date.
    pub period_end: NaiveDate,
    /// Sections grouped by account type, in presentation order.
    pub sections: Vec<TrialBalanceSection>,
    /// Totals.
    pub totals: TrialBalanceTotals,
}

/// One statement line: an account and its period amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementRow {
    /// Account ID.
    pub account_id: AccountId,
    /// Account code.
    pub code: String,
    /// Account name.
    pub name: String,
    /// Sign-normalized amount.
    pub amount: Decimal,
}

/// A statement section with its rows and total.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatementSection {
    /// Section total.
    pub total: Decimal,
    /// Rows in account-code order.
    pub rows: Vec<StatementRow>,
}

/// Balance sheet section (assets, liabilities).
pub type BalanceSheetSection = StatementSection;

/// The equity section of the balance sheet.
///
/// Carries the synthetic current-period earnings line separately from
/// persisted equity accounts; `total` includes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquitySection {
    /// Persisted equity account rows.
    pub rows: Vec<StatementRow>,
    /// Net income for the same reporting period, injected here.
    ///
    /// This is not a persisted account: it is the accrual link between the
    /// profit & loss statement and the balance sheet.
    pub current_period_earnings: Decimal,
    /// Section total including current-period earnings.
    pub total: Decimal,
}

/// Balance sheet report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheetReport {
    /// Period start date.
    pub period_start: NaiveDate,
    /// Period end date.
    pub period_end: NaiveDate,
    /// Assets section.
    pub assets: BalanceSheetSection,
    /// Liabilities section.
    pub liabilities: BalanceSheetSection,
    /// Equity section, including injected current-period earnings.
    pub equity: EquitySection,
    /// Total assets.
    pub total_assets: Decimal,
    /// Total liabilities.
    pub total_liabilities: Decimal,
    /// Total equity including current-period earnings.
    pub total_equity: Decimal,
    /// Liabilities plus equity.
    pub liabilities_and_equity: Decimal,
    /// Signed discrepancy, `total_assets - liabilities_and_equity`.
    ///
    /// Reported, never zeroed: a non-zero difference means the underlying
    /// journal violates double-entry.
    pub difference: Decimal,
    /// Whether the accounting identity holds within epsilon.
    pub is_balanced: bool,
}

/// Profit & loss report with tiered subtotals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitAndLossReport {
    /// Period start date.
    pub period_start: NaiveDate,
    /// Period end date.
    pub period_end: NaiveDate,
    /// Revenue section.
    pub revenue: StatementSection,
    /// Cost of goods sold and direct cost section.
    pub cost_of_goods_sold: StatementSection,
    /// Gross profit (revenue - COGS).
    pub gross_profit: Decimal,
    /// Operating expenses section.
    pub operating_expenses: StatementSection,
    /// Operating profit (gross profit - operating expenses).
    pub operating_profit: Decimal,
    /// Other income section.
    pub other_income: StatementSection,
    /// Other expense section.
    pub other_expense: StatementSection,
    /// Net income (operating profit + other income - other expense).
    pub net_income: Decimal,
}
