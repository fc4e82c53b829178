//! Financial statement composition.
//!
//! This module provides pure business logic for composing financial
//! statements from per-account closing summaries:
//! - Trial Balance
//! - Balance Sheet (with current-period earnings injected into equity)
//! - Profit & Loss (gross/operating/net tiers)
//!
//! Statements are always derived from ledger closings, never from raw
//! journal lines, so they cannot disagree with the account ledgers.

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{
    AccountClosing, BalanceSheetReport, BalanceSheetSection, EquitySection, ProfitAndLossReport,
    StatementRow, StatementSection, TrialBalanceReport, TrialBalanceSection, TrialBalanceTotals,
};
