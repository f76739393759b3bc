//! Loan records and the simple-interest arithmetic derived from them.
use crate::core::error::LoanError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Months per year times the percent scale.
const RATE_DIVISOR: Decimal = dec!(1200);

/// Upper bound on a loan's principal, rate and total payoff.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

fn checked_interest(principal: Decimal, rate: Decimal, term_months: u32) -> Option<Decimal> {
    principal
        .checked_mul(rate)?
        .checked_mul(Decimal::from(term_months))?
        .checked_div(RATE_DIVISOR)
}

/// Stable identifier assigned by the repository when a loan is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct LoanId(pub u32);

impl Display for LoanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Validated financial terms of a loan. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoanTerms {
    name: String,
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
    due_date: NaiveDate,
}

impl LoanTerms {
    /// Builds loan terms, rejecting an empty name, a non-positive principal,
    /// a negative rate, a zero-month term, or amounts above [`MAX_AMOUNT`].
    pub fn new(
        name: impl Into<String>,
        principal: Decimal,
        annual_rate_percent: Decimal,
        term_months: u32,
        due_date: NaiveDate,
    ) -> Result<Self, LoanError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LoanError::EmptyName);
        }
        if principal <= Decimal::ZERO {
            return Err(LoanError::NonPositivePrincipal(principal));
        }
        if annual_rate_percent < Decimal::ZERO {
            return Err(LoanError::NegativeRate(annual_rate_percent));
        }
        if term_months == 0 {
            return Err(LoanError::ZeroTerm);
        }
        let total = checked_interest(principal, annual_rate_percent, term_months)
            .and_then(|interest| principal.checked_add(interest));
        if annual_rate_percent > MAX_AMOUNT || !total.is_some_and(|total| total <= MAX_AMOUNT) {
            return Err(LoanError::AmountTooLarge);
        }

        Ok(Self {
            name,
            principal,
            annual_rate_percent,
            term_months,
            due_date,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn principal(&self) -> Decimal {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    pub fn term_months(&self) -> u32 {
        self.term_months
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

/// A loan held by the repository: its terms plus the paid flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Loan {
    id: LoanId,
    #[serde(flatten)]
    terms: LoanTerms,
    is_paid: bool,
}

impl Loan {
    pub fn new(id: LoanId, terms: LoanTerms) -> Self {
        Self {
            id,
            terms,
            is_paid: false,
        }
    }

    pub fn id(&self) -> LoanId {
        self.id
    }

    pub fn terms(&self) -> &LoanTerms {
        &self.terms
    }

    pub fn name(&self) -> &str {
        self.terms.name()
    }

    pub fn principal(&self) -> Decimal {
        self.terms.principal()
    }

    pub fn annual_rate_percent(&self) -> Decimal {
        self.terms.annual_rate_percent()
    }

    pub fn term_months(&self) -> u32 {
        self.terms.term_months()
    }

    pub fn due_date(&self) -> NaiveDate {
        self.terms.due_date()
    }

    pub fn is_paid(&self) -> bool {
        self.is_paid
    }

    pub fn set_paid(&mut self, paid: bool) {
        self.is_paid = paid;
    }

    /// Simple interest over the whole term, never compounded.
    /// Cannot overflow: `LoanTerms::new` bounds the total by [`MAX_AMOUNT`].
    pub fn interest(&self) -> Decimal {
        self.principal() * self.annual_rate_percent() * Decimal::from(self.term_months())
            / RATE_DIVISOR
    }

    pub fn total(&self) -> Decimal {
        self.principal() + self.interest()
    }

    /// Signed whole days from `today` to the due date. Negative means overdue.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date() - today).num_days()
    }
}

/// Values derived from a loan for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedValues {
    pub interest: Decimal,
    pub total: Decimal,
    pub days_until_due: i64,
}

/// Computes interest, total payoff and days-to-due. No rounding is applied.
pub fn compute_derived(loan: &Loan, today: NaiveDate) -> DerivedValues {
    DerivedValues {
        interest: loan.interest(),
        total: loan.total(),
        days_until_due: loan.days_until_due(today),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{loan, today};
    use super::*;

    #[test]
    fn test_interest_and_total() {
        let l = loan(1, "Loan", dec!(1000), dec!(12), 12, 30);
        assert_eq!(l.interest(), dec!(120));
        assert_eq!(l.total(), dec!(1120));
    }

    #[test]
    fn test_interest_is_prorated_by_term() {
        let credit_card = loan(1, "Credit Card", dec!(5000), dec!(24), 12, 2);
        assert_eq!(credit_card.interest(), dec!(1200));

        let electric = loan(2, "Electric Bill", dec!(1500), dec!(5), 1, 1);
        assert_eq!(electric.interest(), dec!(6.25));
        assert_eq!(electric.total(), dec!(1506.25));

        let zero_rate = loan(3, "Family", dec!(800), dec!(0), 6, 1);
        assert_eq!(zero_rate.interest(), Decimal::ZERO);
        assert_eq!(zero_rate.total(), dec!(800));
    }

    #[test]
    fn test_total_is_principal_plus_interest() {
        let loans = [
            loan(1, "A", dec!(15000), dec!(12), 36, 20),
            loan(2, "B", dec!(8000), dec!(18), 24, 15),
            loan(3, "C", dec!(20000), dec!(8), 48, 30),
            loan(4, "D", dec!(2500), dec!(10), 6, 3),
            loan(5, "E", dec!(333.33), dec!(7.7), 7, 3),
        ];
        for l in &loans {
            assert_eq!(l.total(), l.principal() + l.interest());
            assert_eq!(
                l.interest(),
                l.principal() * l.annual_rate_percent() * Decimal::from(l.term_months())
                    / dec!(1200)
            );
        }
    }

    #[test]
    fn test_days_until_due_is_signed() {
        assert_eq!(loan(1, "A", dec!(1), dec!(1), 1, 5).days_until_due(today()), 5);
        assert_eq!(loan(1, "A", dec!(1), dec!(1), 1, 0).days_until_due(today()), 0);
        assert_eq!(loan(1, "A", dec!(1), dec!(1), 1, -3).days_until_due(today()), -3);
    }

    #[test]
    fn test_compute_derived() {
        let l = loan(1, "Loan", dec!(1000), dec!(12), 12, -1);
        let derived = compute_derived(&l, today());
        assert_eq!(derived.interest, dec!(120));
        assert_eq!(derived.total, dec!(1120));
        assert_eq!(derived.days_until_due, -1);
    }

    #[test]
    fn test_paid_flag_does_not_change_amounts() {
        let mut l = loan(1, "Loan", dec!(1000), dec!(12), 12, 10);
        let before = compute_derived(&l, today());
        l.set_paid(true);
        assert!(l.is_paid());
        assert_eq!(compute_derived(&l, today()), before);
    }

    #[test]
    fn test_terms_validation() {
        let due = today();
        assert_eq!(
            LoanTerms::new("  ", dec!(100), dec!(5), 12, due),
            Err(LoanError::EmptyName)
        );
        assert_eq!(
            LoanTerms::new("Loan", dec!(0), dec!(5), 12, due),
            Err(LoanError::NonPositivePrincipal(dec!(0)))
        );
        assert_eq!(
            LoanTerms::new("Loan", dec!(-10), dec!(5), 12, due),
            Err(LoanError::NonPositivePrincipal(dec!(-10)))
        );
        assert_eq!(
            LoanTerms::new("Loan", dec!(100), dec!(-0.5), 12, due),
            Err(LoanError::NegativeRate(dec!(-0.5)))
        );
        assert_eq!(
            LoanTerms::new("Loan", dec!(100), dec!(5), 0, due),
            Err(LoanError::ZeroTerm)
        );
        assert!(LoanTerms::new("Loan", dec!(100), dec!(0), 1, due).is_ok());
    }

    #[test]
    fn test_oversized_amounts_are_rejected() {
        let due = today();
        assert_eq!(
            LoanTerms::new("Big", Decimal::MAX, dec!(24), 12, due),
            Err(LoanError::AmountTooLarge)
        );
        assert_eq!(
            LoanTerms::new("Big", dec!(1), Decimal::MAX, u32::MAX, due),
            Err(LoanError::AmountTooLarge)
        );
        // Principal at the limit leaves no room for interest.
        assert_eq!(
            LoanTerms::new("Big", MAX_AMOUNT, dec!(1), 12, due),
            Err(LoanError::AmountTooLarge)
        );
        assert_eq!(
            LoanTerms::new("Tiny", dec!(0.01), MAX_AMOUNT + dec!(1), 1, due),
            Err(LoanError::AmountTooLarge)
        );

        let terms = LoanTerms::new("Edge", MAX_AMOUNT, dec!(0), u32::MAX, due).unwrap();
        let edge = Loan::new(LoanId(1), terms);
        assert_eq!(edge.interest(), Decimal::ZERO);
        assert_eq!(edge.total(), MAX_AMOUNT);
    }
}
