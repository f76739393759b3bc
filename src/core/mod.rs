//! Loan prioritization and recommendation logic

pub mod alert;
pub mod config;
pub mod error;
pub mod loan;
pub mod log;
pub mod priority;
pub mod sample;
pub mod strategy;
pub mod summary;

// Re-export main types for cleaner imports
pub use alert::{Alert, UrgencyTier, classify_alert, collect_alerts};
pub use error::LoanError;
pub use loan::{DerivedValues, Loan, LoanId, LoanTerms, compute_derived};
pub use priority::{RankedLoan, by_principal_ascending, by_rate_descending, sort_avalanche, sort_snowball};
pub use strategy::{
    Assessment, LoanStatistics, Rationale, Recommendation, Strategy, StrategyThresholds,
    UrgentNotice, recommend_strategy, recommend_strategy_with,
};
pub use summary::{LoanSummary, summarize};
