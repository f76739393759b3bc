use crate::core::loan::{LoanId, MAX_AMOUNT};
use rust_decimal::Decimal;
use thiserror::Error;

/// Precondition violations raised while building or mutating loans.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoanError {
    #[error("Loan name must not be empty")]
    EmptyName,

    #[error("Principal must be positive, got {0}")]
    NonPositivePrincipal(Decimal),

    #[error("Interest rate must not be negative, got {0}%")]
    NegativeRate(Decimal),

    #[error("Term must be at least one month")]
    ZeroTerm,

    #[error("Principal, rate and total payoff must not exceed {}", MAX_AMOUNT)]
    AmountTooLarge,

    #[error("No loan with id {0}")]
    UnknownLoan(LoanId),

    #[error("Loan '{0}' needs either due_date or due_in_days")]
    MissingDueDate(String),

    #[error("Loan '{0}' sets both due_date and due_in_days")]
    AmbiguousDueDate(String),

    #[error("Loan '{0}' has a due date outside the supported calendar range")]
    DueDateOutOfRange(String),
}
