//! Integrity report types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use lading_shared::types::{AccountId, BatchId, JournalLineId};

use crate::ledger::DocumentRef;

/// A batch whose debits and credits do not net to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnbalancedBatch {
    /// The batch.
    pub batch_id: BatchId,
    /// Total debit across the batch.
    pub debit_total: Decimal,
    /// Total credit across the batch.
    pub credit_total: Decimal,
    /// Signed discrepancy, `debit_total - credit_total`.
    pub difference: Decimal,
    /// Member line ids.
    pub line_ids: Vec<JournalLineId>,
}

/// A line referencing an account that is not in the chart of accounts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrphanedAccountRef {
    /// The offending line.
    pub line_id: JournalLineId,
    /// The unknown account.
    pub account_id: AccountId,
}

/// A line whose document reference cannot be resolved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrphanedDocumentRef {
    /// The offending line.
    pub line_id: JournalLineId,
    /// The unresolvable reference.
    pub reference: DocumentRef,
}

/// Findings from one verification pass.
///
/// Findings are informational: they are collected, never thrown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntegrityReport {
    /// Batches violating the double-entry law.
    pub unbalanced_batches: Vec<UnbalancedBatch>,
    /// Lines referencing unknown accounts.
    pub orphaned_account_refs: Vec<OrphanedAccountRef>,
    /// Lines referencing unresolvable documents.
    pub orphaned_document_refs: Vec<OrphanedDocumentRef>,
}

impl IntegrityReport {
    /// Returns true if no findings were recorded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unbalanced_batches.is_empty()
            && self.orphaned_account_refs.is_empty()
            && self.orphaned_document_refs.is_empty()
    }
}
