//! Per-account ledger building.
//!
//! A ledger splits an account's history at a reporting period: everything
//! before the period folds into the opening balance, lines within the period
//! become dated movements with running balances, and the closing balance is
//! the opening carried through every movement.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lading_shared::types::{AccountId, JournalLineId};

use crate::account::{Account, AccountRegistry};

use super::accumulate::accumulate;
use super::error::LedgerError;
use super::line::JournalLine;

/// A validated reporting window, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportingPeriod {
    /// Creates a reporting period.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidDateRange` if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LedgerError> {
        if start > end {
            return Err(LedgerError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Start date (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// End date (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A ledger movement: one journal line annotated with its running balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerMovement {
    /// The underlying journal line id.
    pub line_id: JournalLineId,
    /// Posting date.
    pub entry_date: NaiveDate,
    /// Display entry number.
    pub entry_number: String,
    /// Line description.
    pub description: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Balance after this movement, signed in the account's
    /// natural-increase direction.
    pub running_balance: Decimal,
}

/// One account's ledger over a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountLedger {
    /// The account this ledger belongs to.
    pub account_id: AccountId,
    /// Balance immediately before the period.
    pub opening: Decimal,
    /// Total debits within the period.
    pub period_debit: Decimal,
    /// Total credits within the period.
    pub period_credit: Decimal,
    /// Movements within the period, in `(entry_date, insertion order)`.
    pub movements: Vec<LedgerMovement>,
    /// Balance at the end of the period.
    pub closing: Decimal,
}

/// Builds one account's ledger over a period.
///
/// `lines` must contain only lines posted to `account`; callers partition
/// per account first. Movements are sorted by entry date with insertion
/// order preserved on ties, so running-balance snapshots are reproducible
/// across report runs. An account with no lines yields zero opening and
/// closing with no movements.
#[must_use]
pub fn build_account_ledger(
    account: &Account,
    lines: &[JournalLine],
    period: ReportingPeriod,
) -> AccountLedger {
    let refs: Vec<&JournalLine> = lines.iter().collect();
    build_from_refs(account, &refs, period)
}

/// Builds ledgers for every registered account over a period.
///
/// Lines are partitioned per account with insertion order preserved, then
/// each account is built independently. Ledgers come back in account-code
/// order. Lines referencing unregistered accounts are skipped here; the
/// integrity verifier reports them.
#[must_use]
pub fn build_ledgers(
    registry: &AccountRegistry,
    lines: &[JournalLine],
    period: ReportingPeriod,
) -> Vec<AccountLedger> {
    let mut by_account: HashMap<AccountId, Vec<&JournalLine>> = HashMap::new();
    for line in lines {
        if registry.contains(line.account_id) {
            by_account.entry(line.account_id).or_default().push(line);
        }
    }

    registry
        .iter()
        .map(|account| {
            let refs = by_account.get(&account.id).map_or(&[][..], Vec::as_slice);
            build_from_refs(account, refs, period)
        })
        .collect()
}

fn build_from_refs(
    account: &Account,
    lines: &[&JournalLine],
    period: ReportingPeriod,
) -> AccountLedger {
    debug_assert!(
        lines.iter().all(|l| l.account_id == account.id),
        "ledger build received lines for a different account"
    );

    let normal = account.account_type.normal_balance();

    let opening = accumulate(
        lines
            .iter()
            .copied()
            .filter(|l| l.entry_date < period.start()),
        normal,
    )
    .net_signed;

    let mut in_period: Vec<&JournalLine> = lines
        .iter()
        .copied()
        .filter(|l| period.contains_date(l.entry_date))
        .collect();
    // Stable sort: same-date lines keep their insertion order.
    in_period.sort_by_key(|l| l.entry_date);

    let mut running = opening;
    let mut period_debit = Decimal::ZERO;
    let mut period_credit = Decimal::ZERO;

    let movements: Vec<LedgerMovement> = in_period
        .iter()
        .map(|line| {
            let debit = line.debit_amount();
            let credit = line.credit_amount();
            period_debit += debit;
            period_credit += credit;
            running += normal.signed_change(debit, credit);

            LedgerMovement {
                line_id: line.id,
                entry_date: line.entry_date,
                entry_number: line.entry_number.clone(),
                description: line.description.clone(),
                debit,
                credit,
                running_balance: running,
            }
        })
        .collect();

    AccountLedger {
        account_id: account.id,
        opening,
        period_debit,
        period_credit,
        movements,
        closing: running,
    }
}
