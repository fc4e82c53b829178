//! Receivable/payable aging.
//!
//! This module buckets open documents by how many days past due they are
//! relative to a reference date. The bucketing is implemented once and
//! parameterized over the document type; receivables and payables share it.

pub mod service;
pub mod types;

pub use service::AgingService;
pub use types::{Ageable, AgingBucket, AgingReport, BucketSummary, DocumentStatus, OpenDocument};
