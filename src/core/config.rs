use crate::core::error::LoanError;
use crate::core::loan::LoanTerms;
use crate::core::strategy::StrategyThresholds;
use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoanConfig {
    pub name: String,
    pub principal: Decimal,
    /// Annual rate in percent, e.g. `24.0` for 24%.
    pub rate: Decimal,
    pub term_months: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_in_days: Option<i64>,
    #[serde(default)]
    pub paid: bool,
}

impl LoanConfig {
    /// Resolves the due date against `today` and validates the terms.
    pub fn to_terms(&self, today: NaiveDate) -> Result<LoanTerms, LoanError> {
        let due_date = match (self.due_date, self.due_in_days) {
            (Some(date), None) => date,
            (None, Some(days)) => Duration::try_days(days)
                .and_then(|offset| today.checked_add_signed(offset))
                .ok_or_else(|| LoanError::DueDateOutOfRange(self.name.clone()))?,
            (None, None) => return Err(LoanError::MissingDueDate(self.name.clone())),
            (Some(_), Some(_)) => return Err(LoanError::AmbiguousDueDate(self.name.clone())),
        };
        LoanTerms::new(
            self.name.clone(),
            self.principal,
            self.rate,
            self.term_months,
            due_date,
        )
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub loans: Vec<LoanConfig>,
    #[serde(default)]
    pub thresholds: StrategyThresholds,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "debtplan", "debtplan")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::from_yaml(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        debug!("Successfully loaded config with {} loan(s)", config.loans.len());
        Ok(config)
    }
}
