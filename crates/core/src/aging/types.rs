//! Aging domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lading_shared::types::{DocumentId, Money};

use crate::ledger::DocumentKind;

/// Days-overdue bucket.
///
/// Boundaries are inclusive on the upper end. Ordering follows severity:
/// `Current` is the least overdue, `Over90` the most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgingBucket {
    /// Not yet due.
    #[serde(rename = "current")]
    Current,
    /// 0 to 30 days overdue.
    #[serde(rename = "1-30")]
    Days1To30,
    /// 31 to 60 days overdue.
    #[serde(rename = "31-60")]
    Days31To60,
    /// 61 to 90 days overdue.
    #[serde(rename = "61-90")]
    Days61To90,
    /// More than 90 days overdue.
    #[serde(rename = "90+")]
    Over90,
}

impl AgingBucket {
    /// All buckets, from least to most overdue.
    pub const ALL: [Self; 5] = [
        Self::Current,
        Self::Days1To30,
        Self::Days31To60,
        Self::Days61To90,
        Self::Over90,
    ];

    /// Buckets a days-overdue count.
    #[must_use]
    pub const fn for_days_overdue(days: i64) -> Self {
        match days {
            i64::MIN..=-1 => Self::Current,
            0..=30 => Self::Days1To30,
            31..=60 => Self::Days31To60,
            61..=90 => Self::Days61To90,
            _ => Self::Over90,
        }
    }

    /// Display label used by export collaborators.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Days1To30 => "1-30",
            Self::Days31To60 => "31-60",
            Self::Days61To90 => "61-90",
            Self::Over90 => "90+",
        }
    }
}

/// A document that can be aged.
///
/// Receivables and payables both implement this; the bucketing logic never
/// needs to know which side of the ledger it is looking at.
pub trait Ageable {
    /// Due date, if the document has one.
    fn due_date(&self) -> Option<NaiveDate>;
    /// Outstanding amount still unsettled.
    fn outstanding(&self) -> Decimal;
    /// Whether the document still participates in aging.
    fn is_open(&self) -> bool;
}

/// Settlement status of a receivable/payable document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Outstanding balance remains.
    Open,
    /// Fully settled.
    Settled,
    /// Cancelled before settlement.
    Cancelled,
}

impl DocumentStatus {
    /// Returns true if the document still participates in aging.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// An open receivable or payable document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenDocument {
    /// Unique identifier.
    pub id: DocumentId,
    /// Document kind (invoice for receivables, purchase order for payables).
    pub kind: DocumentKind,
    /// Display document number (e.g. "INV-2026-0001").
    pub document_number: String,
    /// Customer or vendor name.
    pub counterparty: String,
    /// Due date. Documents without one are excluded from aging.
    pub due_date: Option<NaiveDate>,
    /// Outstanding amount with its billing currency.
    pub outstanding: Money,
    /// Settlement status.
    pub status: DocumentStatus,
}

impl Ageable for OpenDocument {
    fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    fn outstanding(&self) -> Decimal {
        self.outstanding.amount
    }

    fn is_open(&self) -> bool {
        self.status.is_open()
    }
}

/// One bucket's accumulated totals and member documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketSummary<D> {
    /// The bucket.
    pub bucket: AgingBucket,
    /// Number of documents in the bucket.
    pub count: usize,
    /// Sum of outstanding amounts in the bucket.
    pub amount: Decimal,
    /// Member documents, for drill-down.
    pub documents: Vec<D>,
}

impl<D> BucketSummary<D> {
    /// Creates an empty summary for a bucket.
    #[must_use]
    pub fn empty(bucket: AgingBucket) -> Self {
        Self {
            bucket,
            count: 0,
            amount: Decimal::ZERO,
            documents: Vec::new(),
        }
    }
}

/// Aging report: five buckets plus overall totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgingReport<D> {
    /// The date documents were aged against.
    pub reference_date: NaiveDate,
    /// Bucket summaries, always all five in `AgingBucket::ALL` order.
    pub buckets: Vec<BucketSummary<D>>,
    /// Total number of aged documents.
    pub total_count: usize,
    /// Total outstanding across all buckets.
    pub total_outstanding: Decimal,
}

impl<D> AgingReport<D> {
    /// Returns the summary for one bucket.
    #[must_use]
    pub fn bucket(&self, bucket: AgingBucket) -> &BucketSummary<D> {
        // Construction keeps buckets in ALL order.
        &self.buckets[bucket as usize]
    }
}
