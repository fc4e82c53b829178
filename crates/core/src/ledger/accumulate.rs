//! Balance accumulation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::NormalBalance;

use super::line::JournalLine;

/// Debit/credit totals and the sign-normalized net for one account.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AccountActivity {
    /// Total debit amount.
    pub debit_total: Decimal,
    /// Total credit amount.
    pub credit_total: Decimal,
    /// Net balance, signed in the account's natural-increase direction.
    pub net_signed: Decimal,
}

impl AccountActivity {
    /// Returns the raw difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit_total - self.credit_total
    }

    /// Returns true if debits and credits agree within `epsilon`.
    #[must_use]
    pub fn is_balanced(&self, epsilon: Decimal) -> bool {
        self.difference().abs() <= epsilon
    }
}

/// Folds journal lines into per-account totals.
///
/// The fold is order-independent. Absent debit/credit amounts read as zero.
/// All lines must belong to a single account whose normal balance is
/// `normal`; callers partition lines per account before accumulating.
pub fn accumulate<'a, I>(lines: I, normal: NormalBalance) -> AccountActivity
where
    I: IntoIterator<Item = &'a JournalLine>,
{
    let mut debit_total = Decimal::ZERO;
    let mut credit_total = Decimal::ZERO;

    for line in lines {
        debit_total += line.debit_amount();
        credit_total += line.credit_amount();
    }

    AccountActivity {
        debit_total,
        credit_total,
        net_signed: normal.signed_change(debit_total, credit_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lading_shared::types::{AccountId, BatchId, JournalLineId};
    use rust_decimal_macros::dec;

    fn make_line(
        account_id: AccountId,
        debit: Option<Decimal>,
        credit: Option<Decimal>,
    ) -> JournalLine {
        JournalLine {
            id: JournalLineId::new(),
            account_id,
            debit,
            credit,
            entry_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            batch_id: BatchId::new(),
            reference: None,
            description: "Test line".to_string(),
            entry_number: "JRN-00001".to_string(),
        }
    }

    #[test]
    fn test_accumulate_debit_normal() {
        let account_id = AccountId::new();
        let lines = vec![
            make_line(account_id, Some(dec!(100)), None),
            make_line(account_id, None, Some(dec!(40))),
        ];

        let activity = accumulate(&lines, NormalBalance::DebitNormal);
        assert_eq!(activity.debit_total, dec!(100));
        assert_eq!(activity.credit_total, dec!(40));
        assert_eq!(activity.net_signed, dec!(60));
    }

    #[test]
    fn test_accumulate_credit_normal() {
        let account_id = AccountId::new();
        let lines = vec![
            make_line(account_id, Some(dec!(100)), None),
            make_line(account_id, None, Some(dec!(250))),
        ];

        let activity = accumulate(&lines, NormalBalance::CreditNormal);
        assert_eq!(activity.net_signed, dec!(150));
    }

    #[test]
    fn test_accumulate_empty() {
        let activity = accumulate([].iter(), NormalBalance::DebitNormal);
        assert_eq!(activity.debit_total, Decimal::ZERO);
        assert_eq!(activity.credit_total, Decimal::ZERO);
        assert_eq!(activity.net_signed, Decimal::ZERO);
    }

    #[test]
    fn test_accumulate_absent_amounts_are_zero() {
        let account_id = AccountId::new();
        let lines = vec![
            make_line(account_id, None, None),
            make_line(account_id, Some(dec!(25)), None),
        ];

        let activity = accumulate(&lines, NormalBalance::DebitNormal);
        assert_eq!(activity.net_signed, dec!(25));
    }

    #[test]
    fn test_accumulate_order_independent() {
        let account_id = AccountId::new();
        let mut lines = vec![
            make_line(account_id, Some(dec!(10)), None),
            make_line(account_id, None, Some(dec!(3))),
            make_line(account_id, Some(dec!(7.50)), None),
        ];

        let forward = accumulate(&lines, NormalBalance::DebitNormal);
        lines.reverse();
        let backward = accumulate(&lines, NormalBalance::DebitNormal);

        assert_eq!(forward.net_signed, backward.net_signed);
        assert_eq!(forward.debit_total, backward.debit_total);
        assert_eq!(forward.credit_total, backward.credit_total);
    }

    #[test]
    fn test_is_balanced_within_epsilon() {
        let activity = AccountActivity {
            debit_total: dec!(100.00),
            credit_total: dec!(100.005),
            net_signed: dec!(-0.005),
        };
        assert!(activity.is_balanced(dec!(0.01)));
        assert!(!activity.is_balanced(dec!(0.001)));
    }
}
