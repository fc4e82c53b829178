//! Journal line domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lading_shared::types::{AccountId, BatchId, DocumentId, JournalLineId};

/// Kind of business document a journal line originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Sales invoice (receivable).
    Invoice,
    /// Purchase order (payable).
    PurchaseOrder,
    /// Manual adjustment entry.
    ManualAdjustment,
}

/// Reference from a journal line to its originating document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Document kind.
    pub kind: DocumentKind,
    /// Document identifier.
    pub id: DocumentId,
}

/// One leg of a double-entry posting.
///
/// Lines are immutable once posted; corrections are new reversing batches.
/// Within a batch the debit and credit sums must net to zero. That invariant
/// belongs to the posting side and is audited here, never assumed silently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// Unique identifier.
    pub id: JournalLineId,
    /// The account this leg posts to.
    pub account_id: AccountId,
    /// Debit amount. Absent reads as zero.
    #[serde(default)]
    pub debit: Option<Decimal>,
    /// Credit amount. Absent reads as zero.
    #[serde(default)]
    pub credit: Option<Decimal>,
    /// Posting date.
    pub entry_date: NaiveDate,
    /// Batch grouping the legs of one economic transaction.
    pub batch_id: BatchId,
    /// Originating document, if any.
    pub reference: Option<DocumentRef>,
    /// Line description.
    pub description: String,
    /// Display entry number (e.g. "JRN-00042").
    pub entry_number: String,
}

impl JournalLine {
    /// Debit amount with absent values read as zero.
    #[must_use]
    pub fn debit_amount(&self) -> Decimal {
        self.debit.unwrap_or(Decimal::ZERO)
    }

    /// Credit amount with absent values read as zero.
    #[must_use]
    pub fn credit_amount(&self) -> Decimal {
        self.credit.unwrap_or(Decimal::ZERO)
    }

    /// Net effect of the line, `debit - credit`.
    ///
    /// A line with both sides set is treated as its net effect; a line with
    /// neither is a no-op.
    #[must_use]
    pub fn net_amount(&self) -> Decimal {
        self.debit_amount() - self.credit_amount()
    }
}
