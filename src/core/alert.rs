//! Due-date urgency classification for unpaid loans.
use crate::core::loan::Loan;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Display;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyTier {
    Overdue,
    Critical,
    High,
    Medium,
    NotUrgent,
}

impl UrgencyTier {
    /// Maps a signed day count to its tier. First match wins.
    pub fn from_days(days_until_due: i64) -> Self {
        match days_until_due {
            d if d < 0 => UrgencyTier::Overdue,
            0 => UrgencyTier::Critical,
            1 => UrgencyTier::High,
            2..=3 => UrgencyTier::Medium,
            _ => UrgencyTier::NotUrgent,
        }
    }

    pub fn is_urgent(&self) -> bool {
        !matches!(self, UrgencyTier::NotUrgent)
    }
}

impl Display for UrgencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                UrgencyTier::Overdue => "OVERDUE",
                UrgencyTier::Critical => "CRITICAL",
                UrgencyTier::High => "HIGH",
                UrgencyTier::Medium => "MEDIUM",
                UrgencyTier::NotUrgent => "NOT_URGENT",
            }
        )
    }
}

/// Returns the tier of an unpaid loan when it should be surfaced as an alert.
/// Paid loans and loans due in more than three days yield `None`.
pub fn classify_alert(loan: &Loan, today: NaiveDate) -> Option<UrgencyTier> {
    if loan.is_paid() {
        return None;
    }
    let tier = UrgencyTier::from_days(loan.days_until_due(today));
    tier.is_urgent().then_some(tier)
}

#[derive(Debug, Clone, Serialize)]
pub struct Alert<'a> {
    pub loan: &'a Loan,
    pub tier: UrgencyTier,
    pub days_until_due: i64,
    pub amount: Decimal,
}

/// Collects alerts for every urgent unpaid loan, in repository order.
pub fn collect_alerts<'a, I>(loans: I, today: NaiveDate) -> Vec<Alert<'a>>
where
    I: IntoIterator<Item = &'a Loan>,
{
    let alerts: Vec<Alert<'a>> = loans
        .into_iter()
        .filter_map(|loan| {
            classify_alert(loan, today).map(|tier| Alert {
                loan,
                tier,
                days_until_due: loan.days_until_due(today),
                amount: loan.total(),
            })
        })
        .collect();
    debug!("Found {} urgent loan(s)", alerts.len());
    alerts
}
