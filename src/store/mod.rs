pub mod memory;

use crate::core::config::AppConfig;
use crate::core::error::LoanError;
use crate::core::loan::{Loan, LoanId, LoanTerms};
use anyhow::{Context, Result};
use chrono::NaiveDate;
pub use memory::MemoryLoanStore;

/// Ordered collection of loans read and updated by the reporting commands.
pub trait LoanRepository {
    /// All loans in insertion order.
    fn all_loans(&self) -> &[Loan];

    fn get_loan(&self, id: LoanId) -> Option<&Loan>;

    /// Stores a new loan and returns its id.
    fn append_loan(&mut self, terms: LoanTerms) -> LoanId;

    fn set_paid(&mut self, id: LoanId, paid: bool) -> Result<&Loan, LoanError>;

    /// Flips the paid status and returns the updated loan.
    fn toggle_paid(&mut self, id: LoanId) -> Result<&Loan, LoanError> {
        let paid = self
            .get_loan(id)
            .map(Loan::is_paid)
            .ok_or(LoanError::UnknownLoan(id))?;
        self.set_paid(id, !paid)
    }

    fn unpaid_loans(&self) -> Vec<&Loan> {
        self.all_loans().iter().filter(|l| !l.is_paid()).collect()
    }

    fn is_empty(&self) -> bool {
        self.all_loans().is_empty()
    }
}

/// Builds an in-memory repository from configured loans, resolving relative
/// due dates against `today`.
pub fn load_repository(config: &AppConfig, today: NaiveDate) -> Result<MemoryLoanStore> {
    let mut store = MemoryLoanStore::new();
    for loan in &config.loans {
        let terms = loan
            .to_terms(today)
            .with_context(|| format!("Invalid loan in config: {}", loan.name))?;
        let id = store.append_loan(terms);
        if loan.paid {
            store.set_paid(id, true)?;
        }
    }
    Ok(store)
}
