//! Statement composition service.

use rust_decimal::Decimal;
use tracing::warn;

use crate::account::{AccountRegistry, AccountType};
use crate::ledger::{AccountLedger, ReportingPeriod};

use super::types::{
    AccountClosing, BalanceSheetReport, BalanceSheetSection, EquitySection, ProfitAndLossReport,
    StatementRow, StatementSection, TrialBalanceReport, TrialBalanceSection, TrialBalanceTotals,
};

/// Service for composing financial statements.
///
/// All statements are derived from per-account closing summaries over one
/// reporting period. Structural problems are rejected before this point
/// (period validation, account classification); accounting-invariant
/// violations are surfaced in the statement itself so finance users can see
/// where the business data is wrong.
pub struct ReportService;

impl ReportService {
    /// Joins ledgers with their accounts into statement input rows.
    ///
    /// Rows come back in the ledger order (account-code order when built by
    /// `build_ledgers`). Ledgers for unregistered accounts are skipped.
    #[must_use]
    pub fn account_closings(
        registry: &AccountRegistry,
        ledgers: &[AccountLedger],
    ) -> Vec<AccountClosing> {
        ledgers
            .iter()
            .filter_map(|ledger| {
                registry
                    .get(ledger.account_id)
                    .map(|account| AccountClosing::from_ledger(account, ledger))
            })
            .collect()
    }

    /// Composes a trial balance.
    ///
    /// Accounts with no activity are omitted. An imbalance between total
    /// debits and credits means the underlying journal violates
    /// double-entry; it is surfaced in the totals and logged, and the
    /// report still renders.
    #[must_use]
    pub fn trial_balance(
        closings: &[AccountClosing],
        period: ReportingPeriod,
        epsilon: Decimal,
    ) -> TrialBalanceReport {
        let active: Vec<&AccountClosing> =
            closings.iter().filter(|c| c.has_activity()).collect();

        let total_debit: Decimal = active.iter().map(|c| c.period_debit).sum();
        let total_credit: Decimal = active.iter().map(|c| c.period_credit).sum();
        let difference = total_debit - total_credit;
        let is_balanced = difference.abs() <= epsilon;

        if !is_balanced {
            warn!(
                total_debit = %total_debit,
                total_credit = %total_credit,
                difference = %difference,
                "trial balance debits and credits differ"
            );
        }

        let sections = AccountType::ALL
            .into_iter()
            .filter_map(|account_type| {
                let rows: Vec<AccountClosing> = active
                    .iter()
                    .filter(|c| c.account_type == account_type)
                    .map(|c| (*c).clone())
                    .collect();
                (!rows.is_empty()).then_some(TrialBalanceSection { account_type, rows })
            })
            .collect();

        TrialBalanceReport {
            period_start: period.start(),
            period_end: period.end(),
            sections,
            totals: TrialBalanceTotals {
                total_debit,
                total_credit,
                difference,
                is_balanced,
            },
        }
    }

    /// Composes a balance sheet.
    ///
    /// Net income over the same period is injected into equity as
    /// current-period earnings, computed by the same profit & loss
    /// composition callers see, so the two statements cannot disagree. A
    /// non-zero difference in the accounting identity is reported, never
    /// hidden.
    #[must_use]
    pub fn balance_sheet(
        closings: &[AccountClosing],
        period: ReportingPeriod,
        epsilon: Decimal,
    ) -> BalanceSheetReport {
        let mut assets = BalanceSheetSection::default();
        let mut liabilities = BalanceSheetSection::default();
        let mut equity_rows: Vec<StatementRow> = Vec::new();
        let mut equity_accounts_total = Decimal::ZERO;

        for closing in closings.iter().filter(|c| !c.closing.is_zero()) {
            match closing.account_type {
                AccountType::Asset => Self::add_row(&mut assets, closing),
                AccountType::Liability => Self::add_row(&mut liabilities, closing),
                AccountType::Equity => {
                    equity_accounts_total += closing.closing;
                    equity_rows.push(Self::statement_row(closing));
                }
                _ => {}
            }
        }

        let current_period_earnings = Self::profit_and_loss(closings, period).net_income;
        let total_equity = equity_accounts_total + current_period_earnings;

        let total_assets = assets.total;
        let total_liabilities = liabilities.total;
        let liabilities_and_equity = total_liabilities + total_equity;
        let difference = total_assets - liabilities_and_equity;
        let is_balanced = difference.abs() <= epsilon;

        if !is_balanced {
            warn!(
                total_assets = %total_assets,
                liabilities_and_equity = %liabilities_and_equity,
                difference = %difference,
                "balance sheet accounting identity does not hold"
            );
        }

        BalanceSheetReport {
            period_start: period.start(),
            period_end: period.end(),
            assets,
            liabilities,
            equity: EquitySection {
                rows: equity_rows,
                current_period_earnings,
                total: total_equity,
            },
            total_assets,
            total_liabilities,
            total_equity,
            liabilities_and_equity,
            difference,
            is_balanced,
        }
    }

    /// Composes a profit & loss statement.
    ///
    /// Tiers are computed strictly in order: gross profit, then operating
    /// profit, then net income. Each tier is exposed individually.
    #[must_use]
    pub fn profit_and_loss(
        closings: &[AccountClosing],
        period: ReportingPeriod,
    ) -> ProfitAndLossReport {
        let mut revenue = StatementSection::default();
        let mut cogs = StatementSection::default();
        let mut operating_expenses = StatementSection::default();
        let mut other_income = StatementSection::default();
        let mut other_expense = StatementSection::default();

        for closing in closings.iter().filter(|c| !c.closing.is_zero()) {
            match closing.account_type {
                AccountType::Revenue => Self::add_row(&mut revenue, closing),
                AccountType::Cogs | AccountType::DirectCost => Self::add_row(&mut cogs, closing),
                AccountType::Expense => Self::add_row(&mut operating_expenses, closing),
                AccountType::OtherIncome => Self::add_row(&mut other_income, closing),
                AccountType::OtherExpense => Self::add_row(&mut other_expense, closing),
                AccountType::Asset | AccountType::Liability | AccountType::Equity => {}
            }
        }

        let gross_profit = revenue.total - cogs.total;
        let operating_profit = gross_profit - operating_expenses.total;
        let net_income = operating_profit + other_income.total - other_expense.total;

        ProfitAndLossReport {
            period_start: period.start(),
            period_end: period.end(),
            revenue,
            cost_of_goods_sold: cogs,
            gross_profit,
            operating_expenses,
            operating_profit,
            other_income,
            other_expense,
            net_income,
        }
    }

    fn statement_row(closing: &AccountClosing) -> StatementRow {
        StatementRow {
            account_id: closing.account_id,
            code: closing.code.clone(),
            name: closing.name.clone(),
            amount: closing.closing,
        }
    }

    fn add_row(section: &mut StatementSection, closing: &AccountClosing) {
        section.total += closing.closing;
        section.rows.push(Self::statement_row(closing));
    }
}
