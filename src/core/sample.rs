//! Demonstration loans used when no configuration file exists.
use crate::core::config::{AppConfig, LoanConfig};
use crate::core::strategy::StrategyThresholds;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn sample_loan(name: &str, principal: Decimal, rate: Decimal, months: u32, days: i64) -> LoanConfig {
    LoanConfig {
        name: name.to_string(),
        principal,
        rate,
        term_months: months,
        due_date: None,
        due_in_days: Some(days),
        paid: false,
    }
}

/// Six loans with due dates relative to the day they are loaded.
pub fn sample_config() -> AppConfig {
    AppConfig {
        loans: vec![
            // High interest, due soon
            sample_loan("Credit Card", dec!(5000), dec!(24.0), 12, 2),
            sample_loan("Electric Bill", dec!(1500), dec!(5.0), 1, 1),
            sample_loan("Car Loan", dec!(15000), dec!(12.0), 36, 20),
            sample_loan("Personal Loan", dec!(8000), dec!(18.0), 24, 15),
            sample_loan("Student Loan", dec!(20000), dec!(8.0), 48, 30),
            sample_loan("Medical Bill", dec!(2500), dec!(10.0), 6, 3),
        ],
        thresholds: StrategyThresholds::default(),
    }
}
