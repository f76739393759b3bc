//! Totals across every loan, paid or not.
use crate::core::loan::Loan;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoanSummary {
    pub total_count: usize,
    pub paid_count: usize,
    pub unpaid_count: usize,
    pub total_principal: Decimal,
    pub total_interest: Decimal,
    pub total_amount: Decimal,
}

impl LoanSummary {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// Aggregates counts and sums in one pass. An empty collection yields zeros.
///
/// Simple interest does not depend on the current date, so this takes no `today`.
pub fn summarize<'a, I>(loans: I) -> LoanSummary
where
    I: IntoIterator<Item = &'a Loan>,
{
    loans
        .into_iter()
        .fold(LoanSummary::default(), |mut summary, loan| {
            summary.total_count += 1;
            if loan.is_paid() {
                summary.paid_count += 1;
            } else {
                summary.unpaid_count += 1;
            }
            summary.total_principal += loan.principal();
            summary.total_interest += loan.interest();
            summary.total_amount += loan.total();
            summary
        })
}
