//! Aging bucket computation.

use chrono::NaiveDate;

use super::types::{Ageable, AgingBucket, AgingReport, BucketSummary};

/// Service for aging open documents.
pub struct AgingService;

impl AgingService {
    /// Buckets open documents by days overdue relative to `reference_date`.
    ///
    /// Documents that are not open, or that have no due date, are excluded.
    /// `days_overdue` is the whole-day difference between the reference date
    /// and the due date; a document due today is already in the `1-30`
    /// bucket, while one due tomorrow is still current.
    #[must_use]
    pub fn age<D>(documents: &[D], reference_date: NaiveDate) -> AgingReport<D>
    where
        D: Ageable + Clone,
    {
        let mut buckets: Vec<BucketSummary<D>> = AgingBucket::ALL
            .into_iter()
            .map(BucketSummary::empty)
            .collect();

        for document in documents {
            if !document.is_open() {
                continue;
            }
            let Some(due_date) = document.due_date() else {
                continue;
            };

            let days_overdue = reference_date.signed_duration_since(due_date).num_days();
            let bucket = AgingBucket::for_days_overdue(days_overdue);

            let summary = &mut buckets[bucket as usize];
            summary.count += 1;
            summary.amount += document.outstanding();
            summary.documents.push(document.clone());
        }

        let total_count = buckets.iter().map(|b| b.count).sum();
        let total_outstanding = buckets.iter().map(|b| b.amount).sum();

        AgingReport {
            reference_date,
            buckets,
            total_count,
            total_outstanding,
        }
    }
}
