//! Terminal rendering of the reports and the interactive menu.

pub mod alerts;
pub mod loans;
pub mod menu;
pub mod priority;
pub mod setup;
pub mod strategy;
pub mod summary;
pub mod ui;

use crate::core::strategy::StrategyThresholds;
use crate::store::LoanRepository;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything a report needs: the loans, the reference day and how to print.
pub struct Report<'a> {
    pub repo: &'a dyn LoanRepository,
    pub today: NaiveDate,
    pub thresholds: StrategyThresholds,
    pub format: OutputFormat,
}

/// Writes a structured value as pretty JSON.
pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{json}")?;
    Ok(())
}
