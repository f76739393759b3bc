//! Chooses between the avalanche and snowball payoff methods.
//!
//! The recommendation is a pure function of statistics gathered over the
//! unpaid loans. Rendering the rationale as prose is left to the caller.
use crate::core::loan::Loan;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    Avalanche,
    Snowball,
    Either,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Strategy::Avalanche => "AVALANCHE METHOD",
                Strategy::Snowball => "SNOWBALL METHOD",
                Strategy::Either => "EITHER METHOD WORKS",
            }
        )
    }
}

/// Cut-offs used by the decision rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyThresholds {
    /// Rate spread (max - min, in percentage points) above which avalanche wins.
    pub rate_spread: Decimal,
    pub high_interest_rate: Decimal,
    pub small_balance: Decimal,
    pub min_snowball_loans: usize,
    pub urgent_window_days: i64,
}

impl Default for StrategyThresholds {
    fn default() -> Self {
        Self {
            rate_spread: dec!(10),
            high_interest_rate: dec!(15),
            small_balance: dec!(3000),
            min_snowball_loans: 3,
            urgent_window_days: 7,
        }
    }
}

/// Statistics over the unpaid loans that drive the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoanStatistics {
    pub unpaid_count: usize,
    pub urgent_count: usize,
    pub has_high_interest: bool,
    pub has_small_balance: bool,
    pub avg_rate: Decimal,
    pub avg_principal: Decimal,
    pub min_principal: Decimal,
    pub max_rate: Decimal,
    pub min_rate: Decimal,
    /// Simple range, not a statistical variance.
    pub rate_variance: Decimal,
}

impl LoanStatistics {
    /// Returns `None` when there are no loans to describe.
    pub fn gather(
        unpaid: &[&Loan],
        today: NaiveDate,
        thresholds: &StrategyThresholds,
    ) -> Option<Self> {
        let first = unpaid.first()?;

        let mut stats = LoanStatistics {
            unpaid_count: unpaid.len(),
            urgent_count: 0,
            has_high_interest: false,
            has_small_balance: false,
            avg_rate: Decimal::ZERO,
            avg_principal: Decimal::ZERO,
            min_principal: first.principal(),
            max_rate: first.annual_rate_percent(),
            min_rate: first.annual_rate_percent(),
            rate_variance: Decimal::ZERO,
        };
        let mut rate_sum = Decimal::ZERO;
        let mut principal_sum = Decimal::ZERO;

        for loan in unpaid {
            let rate = loan.annual_rate_percent();
            let principal = loan.principal();

            if loan.days_until_due(today) <= thresholds.urgent_window_days {
                stats.urgent_count += 1;
            }
            stats.has_high_interest |= rate >= thresholds.high_interest_rate;
            stats.has_small_balance |= principal <= thresholds.small_balance;

            rate_sum += rate;
            principal_sum += principal;
            stats.min_principal = stats.min_principal.min(principal);
            stats.max_rate = stats.max_rate.max(rate);
            stats.min_rate = stats.min_rate.min(rate);
        }

        let count = Decimal::from(unpaid.len());
        stats.avg_rate = rate_sum / count;
        stats.avg_principal = principal_sum / count;
        stats.rate_variance = stats.max_rate - stats.min_rate;
        Some(stats)
    }
}

/// Why a strategy was chosen, with the figures that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rationale {
    /// Rates differ widely and at least one is high.
    RateSpread {
        max_rate: Decimal,
        min_rate: Decimal,
        rate_variance: Decimal,
    },
    /// Several loans, at least one of them small.
    ManageableBalances {
        unpaid_count: usize,
        min_principal: Decimal,
        rate_variance: Decimal,
    },
    Balanced { rate_variance: Decimal },
}

/// Urgent loans must be handled before applying the recommended ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UrgentNotice {
    pub urgent_count: usize,
    pub window_days: i64,
    pub then_apply: Strategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub strategy: Strategy,
    pub statistics: LoanStatistics,
    pub rationale: Rationale,
    pub urgent_notice: Option<UrgentNotice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Assessment {
    DebtFree,
    Recommended(Recommendation),
}

/// Applies the decision rule to gathered statistics. First match wins.
pub fn decide(stats: &LoanStatistics, thresholds: &StrategyThresholds) -> (Strategy, Rationale) {
    if stats.rate_variance > thresholds.rate_spread && stats.has_high_interest {
        (
            Strategy::Avalanche,
            Rationale::RateSpread {
                max_rate: stats.max_rate,
                min_rate: stats.min_rate,
                rate_variance: stats.rate_variance,
            },
        )
    } else if stats.has_small_balance && stats.unpaid_count >= thresholds.min_snowball_loans {
        (
            Strategy::Snowball,
            Rationale::ManageableBalances {
                unpaid_count: stats.unpaid_count,
                min_principal: stats.min_principal,
                rate_variance: stats.rate_variance,
            },
        )
    } else {
        (
            Strategy::Either,
            Rationale::Balanced {
                rate_variance: stats.rate_variance,
            },
        )
    }
}

/// Recommends a payoff strategy for the unpaid loans using the default thresholds.
pub fn recommend_strategy<'a, I>(unpaid: I, today: NaiveDate) -> Assessment
where
    I: IntoIterator<Item = &'a Loan>,
{
    recommend_strategy_with(unpaid, today, &StrategyThresholds::default())
}

/// Recommends a payoff strategy for the unpaid loans. Paid loans in the input are ignored.
pub fn recommend_strategy_with<'a, I>(
    unpaid: I,
    today: NaiveDate,
    thresholds: &StrategyThresholds,
) -> Assessment
where
    I: IntoIterator<Item = &'a Loan>,
{
    let unpaid: Vec<&Loan> = unpaid.into_iter().filter(|l| !l.is_paid()).collect();
    let Some(statistics) = LoanStatistics::gather(&unpaid, today, thresholds) else {
        debug!("No unpaid loans, nothing to recommend");
        return Assessment::DebtFree;
    };

    let (strategy, rationale) = decide(&statistics, thresholds);
    let urgent_notice = (statistics.urgent_count > 0).then_some(UrgentNotice {
        urgent_count: statistics.urgent_count,
        window_days: thresholds.urgent_window_days,
        then_apply: strategy,
    });
    debug!(?strategy, ?statistics, "Recommended strategy");

    Assessment::Recommended(Recommendation {
        strategy,
        statistics,
        rationale,
        urgent_notice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loan::test_support::{loan, today};

    fn recommended(assessment: Assessment) -> Recommendation {
        match assessment {
            Assessment::Recommended(r) => r,
            Assessment::DebtFree => panic!("Expected a recommendation"),
        }
    }

    #[test]
    fn test_wide_rate_spread_recommends_avalanche() {
        let loans = vec![
            loan(1, "Credit Card", dec!(5000), dec!(24), 12, 2),
            loan(2, "Electric Bill", dec!(1500), dec!(5), 1, 1),
        ];
        let r = recommended(recommend_strategy(&loans, today()));

        assert_eq!(r.strategy, Strategy::Avalanche);
        assert_eq!(r.statistics.rate_variance, dec!(19));
        assert!(r.statistics.has_high_interest);
        assert_eq!(
            r.rationale,
            Rationale::RateSpread {
                max_rate: dec!(24),
                min_rate: dec!(5),
                rate_variance: dec!(19),
            }
        );
        assert_eq!(
            r.urgent_notice,
            Some(UrgentNotice {
                urgent_count: 2,
                window_days: 7,
                then_apply: Strategy::Avalanche,
            })
        );
    }

    #[test]
    fn test_similar_rates_with_small_balances_recommends_snowball() {
        let loans = vec![
            loan(1, "A", dec!(1000), dec!(10), 6, 60),
            loan(2, "B", dec!(2000), dec!(10), 6, 60),
            loan(3, "C", dec!(2500), dec!(10), 6, 60),
        ];
        let r = recommended(recommend_strategy(&loans, today()));

        assert_eq!(r.strategy, Strategy::Snowball);
        assert_eq!(r.statistics.rate_variance, Decimal::ZERO);
        assert!(r.statistics.has_small_balance);
        assert_eq!(r.statistics.unpaid_count, 3);
        assert_eq!(r.statistics.urgent_count, 0);
        assert_eq!(r.urgent_notice, None);
    }

    #[test]
    fn test_balanced_loans_recommend_either() {
        let loans = vec![
            loan(1, "A", dec!(10000), dec!(9), 24, 40),
            loan(2, "B", dec!(12000), dec!(11), 24, 40),
        ];
        let r = recommended(recommend_strategy(&loans, today()));
        assert_eq!(r.strategy, Strategy::Either);
        assert_eq!(
            r.rationale,
            Rationale::Balanced {
                rate_variance: dec!(2)
            }
        );
    }

    #[test]
    fn test_spread_without_high_interest_is_not_avalanche() {
        // 14% - 2% = 12 > 10 but nothing reaches 15%.
        let loans = vec![
            loan(1, "A", dec!(1000), dec!(14), 12, 40),
            loan(2, "B", dec!(2000), dec!(2), 12, 40),
        ];
        let r = recommended(recommend_strategy(&loans, today()));
        assert_eq!(r.strategy, Strategy::Either);
    }

    #[test]
    fn test_rate_spread_must_exceed_threshold() {
        let loans = vec![
            loan(1, "A", dec!(9000), dec!(20), 12, 40),
            loan(2, "B", dec!(9000), dec!(10), 12, 40),
        ];
        let r = recommended(recommend_strategy(&loans, today()));
        assert_eq!(r.statistics.rate_variance, dec!(10));
        assert!(r.statistics.has_high_interest);
        assert_eq!(r.strategy, Strategy::Either);
    }

    #[test]
    fn test_high_interest_includes_threshold() {
        let loans = vec![
            loan(1, "A", dec!(9000), dec!(15), 12, 40),
            loan(2, "B", dec!(9000), dec!(4), 12, 40),
        ];
        let r = recommended(recommend_strategy(&loans, today()));
        assert!(r.statistics.has_high_interest);
        assert_eq!(r.strategy, Strategy::Avalanche);
    }

    #[test]
    fn test_small_balance_includes_threshold() {
        let loans = vec![
            loan(1, "A", dec!(3000), dec!(8), 12, 40),
            loan(2, "B", dec!(5000), dec!(8), 12, 40),
            loan(3, "C", dec!(7000), dec!(8), 12, 40),
        ];
        let r = recommended(recommend_strategy(&loans, today()));
        assert!(r.statistics.has_small_balance);
        assert_eq!(r.strategy, Strategy::Snowball);

        let loans = vec![
            loan(1, "A", dec!(3000.01), dec!(8), 12, 40),
            loan(2, "B", dec!(5000), dec!(8), 12, 40),
            loan(3, "C", dec!(7000), dec!(8), 12, 40),
        ];
        let r = recommended(recommend_strategy(&loans, today()));
        assert!(!r.statistics.has_small_balance);
        assert_eq!(r.strategy, Strategy::Either);
    }

    #[test]
    fn test_small_balance_needs_three_loans() {
        let loans = vec![
            loan(1, "A", dec!(1000), dec!(10), 6, 60),
            loan(2, "B", dec!(2000), dec!(10), 6, 60),
        ];
        let r = recommended(recommend_strategy(&loans, today()));
        assert_eq!(r.strategy, Strategy::Either);
    }

    #[test]
    fn test_statistics() {
        let loans = vec![
            loan(1, "Credit Card", dec!(5000), dec!(24), 12, 2),
            loan(2, "Electric Bill", dec!(1500), dec!(5), 1, 1),
            loan(3, "Car Loan", dec!(15000), dec!(12), 36, 20),
            loan(4, "Personal Loan", dec!(8000), dec!(18), 24, 15),
            loan(5, "Student Loan", dec!(20000), dec!(8), 48, 30),
            loan(6, "Medical Bill", dec!(2500), dec!(10), 6, 3),
        ];
        let r = recommended(recommend_strategy(&loans, today()));
        let s = r.statistics;

        assert_eq!(s.unpaid_count, 6);
        assert_eq!(s.urgent_count, 3);
        assert_eq!(s.avg_rate, dec!(77) / dec!(6));
        assert_eq!(s.avg_principal, dec!(52000) / dec!(6));
        assert_eq!(s.avg_principal.round_dp(2), dec!(8666.67));
        assert_eq!(s.min_principal, dec!(1500));
        assert_eq!(s.max_rate, dec!(24));
        assert_eq!(s.min_rate, dec!(5));
        assert_eq!(s.rate_variance, dec!(19));
        assert_eq!(r.strategy, Strategy::Avalanche);
    }

    #[test]
    fn test_urgent_window_includes_overdue_and_day_seven() {
        let loans = vec![
            loan(1, "A", dec!(9000), dec!(10), 12, -4),
            loan(2, "B", dec!(9000), dec!(10), 12, 7),
            loan(3, "C", dec!(9000), dec!(10), 12, 8),
        ];
        let r = recommended(recommend_strategy(&loans, today()));
        assert_eq!(r.statistics.urgent_count, 2);
        assert_eq!(r.strategy, Strategy::Either);
        assert_eq!(r.urgent_notice.map(|n| n.then_apply), Some(Strategy::Either));
    }

    #[test]
    fn test_empty_is_debt_free() {
        assert_eq!(
            recommend_strategy(&Vec::<Loan>::new(), today()),
            Assessment::DebtFree
        );

        let mut paid = loan(1, "A", dec!(1000), dec!(10), 6, 60);
        paid.set_paid(true);
        assert_eq!(recommend_strategy(&vec![paid], today()), Assessment::DebtFree);
    }

    #[test]
    fn test_recommendation_is_deterministic() {
        let loans = vec![
            loan(1, "A", dec!(1000), dec!(22), 6, 5),
            loan(2, "B", dec!(4000), dec!(3), 6, 60),
            loan(3, "C", dec!(2500), dec!(9), 6, 1),
        ];
        let first = recommend_strategy(&loans, today());
        for _ in 0..5 {
            assert_eq!(recommend_strategy(&loans, today()), first);
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let loans = vec![
            loan(1, "A", dec!(1000), dec!(10), 6, 60),
            loan(2, "B", dec!(2000), dec!(10), 6, 60),
        ];
        let thresholds = StrategyThresholds {
            min_snowball_loans: 2,
            ..StrategyThresholds::default()
        };
        let r = recommended(recommend_strategy_with(&loans, today(), &thresholds));
        assert_eq!(r.strategy, Strategy::Snowball);
    }
}
