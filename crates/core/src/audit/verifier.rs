//! Integrity verification pass.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use tracing::debug;

use lading_shared::types::{AccountId, BatchId, JournalLineId};

use crate::ledger::{DocumentRef, JournalLine};

use super::types::{IntegrityReport, OrphanedAccountRef, OrphanedDocumentRef, UnbalancedBatch};

/// Verifier for structural journal invariants.
pub struct IntegrityVerifier;

struct BatchTotals {
    debit_total: Decimal,
    credit_total: Decimal,
    line_ids: Vec<JournalLineId>,
}

impl IntegrityVerifier {
    /// Runs one verification pass over posted journal lines.
    ///
    /// Every batch must net to zero within `epsilon`, every line must
    /// reference a known account, and every document reference must resolve
    /// through `document_exists`. Document resolution is injected so the
    /// engine stays free of storage concerns.
    #[must_use]
    pub fn verify<F>(
        lines: &[JournalLine],
        known_account_ids: &HashSet<AccountId>,
        document_exists: F,
        epsilon: Decimal,
    ) -> IntegrityReport
    where
        F: Fn(&DocumentRef) -> bool,
    {
        let mut batch_order: Vec<BatchId> = Vec::new();
        let mut batches: HashMap<BatchId, BatchTotals> = HashMap::new();
        let mut orphaned_account_refs = Vec::new();
        let mut orphaned_document_refs = Vec::new();

        for line in lines {
            let totals = batches.entry(line.batch_id).or_insert_with(|| {
                batch_order.push(line.batch_id);
                BatchTotals {
                    debit_total: Decimal::ZERO,
                    credit_total: Decimal::ZERO,
                    line_ids: Vec::new(),
                }
            });
            totals.debit_total += line.debit_amount();
            totals.credit_total += line.credit_amount();
            totals.line_ids.push(line.id);

            if !known_account_ids.contains(&line.account_id) {
                orphaned_account_refs.push(OrphanedAccountRef {
                    line_id: line.id,
                    account_id: line.account_id,
                });
            }

            if let Some(reference) = line.reference {
                if !document_exists(&reference) {
                    orphaned_document_refs.push(OrphanedDocumentRef {
                        line_id: line.id,
                        reference,
                    });
                }
            }
        }

        // First-seen batch order keeps the report stable across runs.
        let unbalanced_batches: Vec<UnbalancedBatch> = batch_order
            .into_iter()
            .filter_map(|batch_id| {
                let totals = batches.remove(&batch_id)?;
                let difference = totals.debit_total - totals.credit_total;
                (difference.abs() > epsilon).then_some(UnbalancedBatch {
                    batch_id,
                    debit_total: totals.debit_total,
                    credit_total: totals.credit_total,
                    difference,
                    line_ids: totals.line_ids,
                })
            })
            .collect();

        debug!(
            lines = lines.len(),
            unbalanced_batches = unbalanced_batches.len(),
            orphaned_account_refs = orphaned_account_refs.len(),
            orphaned_document_refs = orphaned_document_refs.len(),
            "integrity verification pass complete"
        );

        IntegrityReport {
            unbalanced_batches,
            orphaned_account_refs,
            orphaned_document_refs,
        }
    }
}
