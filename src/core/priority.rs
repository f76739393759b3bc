//! Payoff orderings over unpaid loans.
//!
//! Both orderings sort a snapshot of references with a stable sort, so loans
//! with equal keys keep their repository order and the source collection is
//! never touched.
use crate::core::loan::Loan;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// Highest annual rate first.
pub fn by_rate_descending(a: &Loan, b: &Loan) -> Ordering {
    b.annual_rate_percent().cmp(&a.annual_rate_percent())
}

/// Smallest principal first.
pub fn by_principal_ascending(a: &Loan, b: &Loan) -> Ordering {
    a.principal().cmp(&b.principal())
}

/// A loan and its 1-based position in a payoff order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedLoan<'a> {
    pub rank: usize,
    pub loan: &'a Loan,
}

fn rank_by<'a, I>(loans: I, order: fn(&Loan, &Loan) -> Ordering) -> Vec<RankedLoan<'a>>
where
    I: IntoIterator<Item = &'a Loan>,
{
    let mut snapshot: Vec<&'a Loan> = loans.into_iter().collect();
    snapshot.sort_by(|a, b| order(a, b));
    snapshot
        .into_iter()
        .enumerate()
        .map(|(i, loan)| RankedLoan { rank: i + 1, loan })
        .collect()
}

/// Avalanche method: pay the highest interest rate first.
pub fn sort_avalanche<'a, I>(unpaid: I) -> Vec<RankedLoan<'a>>
where
    I: IntoIterator<Item = &'a Loan>,
{
    let ranked = rank_by(unpaid, by_rate_descending);
    debug!("Ranked {} loan(s) by rate", ranked.len());
    ranked
}

/// Snowball method: pay the smallest balance first.
pub fn sort_snowball<'a, I>(unpaid: I) -> Vec<RankedLoan<'a>>
where
    I: IntoIterator<Item = &'a Loan>,
{
    let ranked = rank_by(unpaid, by_principal_ascending);
    debug!("Ranked {} loan(s) by principal", ranked.len());
    ranked
}
