//! Journal integrity verification.
//!
//! A read-only diagnostic pass over posted journal lines. It reports
//! unbalanced batches and dangling references; it never mutates data and
//! never blocks report computation.

pub mod types;
pub mod verifier;

pub use types::{IntegrityReport, OrphanedAccountRef, OrphanedDocumentRef, UnbalancedBatch};
pub use verifier::IntegrityVerifier;
