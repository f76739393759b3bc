use super::LoanRepository;
use crate::core::error::LoanError;
use crate::core::loan::{Loan, LoanId, LoanTerms};
use tracing::debug;

/// In-memory loan repository backed by a `Vec`. Ids are handed out
/// sequentially and never reused.
#[derive(Debug, Default)]
pub struct MemoryLoanStore {
    loans: Vec<Loan>,
    next_id: u32,
}

impl MemoryLoanStore {
    pub fn new() -> Self {
        Self {
            loans: Vec::new(),
            next_id: 1,
        }
    }

    fn position(&self, id: LoanId) -> Option<usize> {
        self.loans.iter().position(|l| l.id() == id)
    }
}

impl LoanRepository for MemoryLoanStore {
    fn all_loans(&self) -> &[Loan] {
        &self.loans
    }

    fn get_loan(&self, id: LoanId) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id() == id)
    }

    fn append_loan(&mut self, terms: LoanTerms) -> LoanId {
        let id = LoanId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        debug!("Loan APPEND {} ({})", id, terms.name());
        self.loans.push(Loan::new(id, terms));
        id
    }

    fn set_paid(&mut self, id: LoanId, paid: bool) -> Result<&Loan, LoanError> {
        let index = self.position(id).ok_or(LoanError::UnknownLoan(id))?;
        self.loans[index].set_paid(paid);
        debug!("Loan {} marked paid={}", id, paid);
        Ok(&self.loans[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn terms(name: &str) -> LoanTerms {
        let due = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        LoanTerms::new(name, dec!(1000), dec!(10), 12, due).unwrap()
    }

    #[test]
    fn test_append_and_get() {
        let mut store = MemoryLoanStore::new();
        assert!(store.is_empty());

        let a = store.append_loan(terms("A"));
        let b = store.append_loan(terms("B"));
        assert_ne!(a, b);
        assert_eq!(store.get_loan(a).map(Loan::name), Some("A"));
        assert_eq!(store.get_loan(b).map(Loan::name), Some("B"));
        assert!(store.get_loan(LoanId(999)).is_none());

        let names: Vec<&str> = store.all_loans().iter().map(Loan::name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_default_store_hands_out_positive_ids() {
        let mut store = MemoryLoanStore::default();
        assert_eq!(store.append_loan(terms("A")), LoanId(1));
        assert_eq!(store.append_loan(terms("B")), LoanId(2));
    }

    #[test]
    fn test_toggle_paid() {
        let mut store = MemoryLoanStore::new();
        let a = store.append_loan(terms("A"));
        store.append_loan(terms("B"));

        assert!(store.toggle_paid(a).unwrap().is_paid());
        assert_eq!(store.unpaid_loans().len(), 1);
        assert!(!store.toggle_paid(a).unwrap().is_paid());
        assert_eq!(store.unpaid_loans().len(), 2);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let mut store = MemoryLoanStore::new();
        assert_eq!(
            store.toggle_paid(LoanId(7)).unwrap_err(),
            LoanError::UnknownLoan(LoanId(7))
        );
        assert_eq!(
            store.set_paid(LoanId(7), true).unwrap_err(),
            LoanError::UnknownLoan(LoanId(7))
        );
    }
}
