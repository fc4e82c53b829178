//! Property-based tests for ledger building.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use lading_shared::types::{AccountId, BatchId, JournalLineId};

use super::accumulate::accumulate;
use super::builder::{build_account_ledger, ReportingPeriod};
use super::line::JournalLine;
use crate::account::{Account, AccountType, NormalBalance};

/// Strategy for an optional amount in cents (absent, or 0.00 to 10,000.00).
fn amount_strategy() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![
        Just(None),
        (0i64..1_000_000i64).prop_map(|cents| Some(Decimal::new(cents, 2))),
    ]
}

/// Strategy for a posting date across three months around the test period.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..90u64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap() + chrono::Days::new(offset)
    })
}

fn account_type_strategy() -> impl Strategy<Value = AccountType> {
    prop::sample::select(AccountType::ALL.to_vec())
}

/// Strategy for a batch of lines; account ids are filled in by the caller.
fn lines_strategy() -> impl Strategy<Value = Vec<JournalLine>> {
    prop::collection::vec(
        (amount_strategy(), amount_strategy(), date_strategy()).prop_map(
            |(debit, credit, entry_date)| JournalLine {
                id: JournalLineId::new(),
                account_id: AccountId::new(),
                debit,
                credit,
                entry_date,
                batch_id: BatchId::new(),
                reference: None,
                description: "Generated line".to_string(),
                entry_number: "JRN-00000".to_string(),
            },
        ),
        0..40,
    )
}

fn test_period() -> ReportingPeriod {
    ReportingPeriod::new(
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
    )
    .unwrap()
}

fn make_account(account_type: AccountType) -> Account {
    Account {
        id: AccountId::new(),
        code: "1100".to_string(),
        name: "Property account".to_string(),
        account_type,
    }
}

/// Reassigns generated lines to the given account.
fn assign_to(account: &Account, lines: Vec<JournalLine>) -> Vec<JournalLine> {
    lines
        .into_iter()
        .map(|mut l| {
            l.account_id = account.id;
            l
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Closing always equals opening plus the net of in-period movements.
    #[test]
    fn prop_closing_equals_opening_plus_movements(
        account_type in account_type_strategy(),
        lines in lines_strategy(),
    ) {
        let account = make_account(account_type);
        let lines = assign_to(&account, lines);
        let period = test_period();

        let ledger = build_account_ledger(&account, &lines, period);

        let normal = account.account_type.normal_balance();
        let net = accumulate(
            lines.iter().filter(|l| period.contains_date(l.entry_date)),
            normal,
        )
        .net_signed;

        prop_assert_eq!(ledger.closing, ledger.opening + net);
    }

    /// Closing equals the last running balance, or the opening when there
    /// are no movements.
    #[test]
    fn prop_closing_equals_last_running_balance(
        account_type in account_type_strategy(),
        lines in lines_strategy(),
    ) {
        let account = make_account(account_type);
        let lines = assign_to(&account, lines);

        let ledger = build_account_ledger(&account, &lines, test_period());

        match ledger.movements.last() {
            Some(last) => prop_assert_eq!(ledger.closing, last.running_balance),
            None => prop_assert_eq!(ledger.closing, ledger.opening),
        }
    }

    /// Accumulation is order-independent.
    #[test]
    fn prop_accumulate_order_independent(
        lines in lines_strategy(),
        normal in prop_oneof![Just(NormalBalance::DebitNormal), Just(NormalBalance::CreditNormal)],
    ) {
        let forward = accumulate(&lines, normal);
        let reversed: Vec<JournalLine> = lines.iter().rev().cloned().collect();
        let backward = accumulate(&reversed, normal);

        prop_assert_eq!(forward.debit_total, backward.debit_total);
        prop_assert_eq!(forward.credit_total, backward.credit_total);
        prop_assert_eq!(forward.net_signed, backward.net_signed);
    }

    /// Building the same ledger twice yields identical running balances.
    #[test]
    fn prop_ledger_build_deterministic(
        account_type in account_type_strategy(),
        lines in lines_strategy(),
    ) {
        let account = make_account(account_type);
        let lines = assign_to(&account, lines);

        let first = build_account_ledger(&account, &lines, test_period());
        let second = build_account_ledger(&account, &lines, test_period());

        prop_assert_eq!(first.opening, second.opening);
        prop_assert_eq!(first.closing, second.closing);
        prop_assert_eq!(first.movements.len(), second.movements.len());
        for (a, b) in first.movements.iter().zip(second.movements.iter()) {
            prop_assert_eq!(a.line_id, b.line_id);
            prop_assert_eq!(a.running_balance, b.running_balance);
        }
    }
}
