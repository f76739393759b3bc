use super::{OutputFormat, Report, ui};
use crate::core::priority::{RankedLoan, sort_avalanche, sort_snowball};
use anyhow::Result;
use chrono::NaiveDate;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Avalanche,
    Snowball,
}

impl Method {
    fn title(&self) -> &'static str {
        match self {
            Method::Avalanche => "AVALANCHE METHOD - PRIORITY ORDER",
            Method::Snowball => "SNOWBALL METHOD - PRIORITY ORDER",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Method::Avalanche => "Strategy: Pay highest interest rate first",
            Method::Snowball => "Strategy: Pay smallest balance first",
        }
    }
}

pub fn render_priority(ranked: &[RankedLoan], today: NaiveDate) -> String {
    if ranked.is_empty() {
        return "No unpaid loans.".to_string();
    }

    let mut output = String::new();
    for entry in ranked {
        let loan = entry.loan;
        output.push_str(&format!(
            "Priority #{}: {}\n  Principal: {}\n  Rate: {}\n  Total Amount: {}\n  Due: {} ({})\n\n",
            entry.rank,
            ui::style_text(loan.name(), ui::StyleType::TotalLabel),
            ui::money(loan.principal()),
            ui::percent(loan.annual_rate_percent()),
            ui::money(loan.total()),
            loan.due_date(),
            ui::days(loan.days_until_due(today)),
        ));
    }
    output
}

pub fn run(method: Method, report: &Report, out: &mut dyn Write) -> Result<()> {
    let unpaid = report.repo.unpaid_loans();
    let ranked = match method {
        Method::Avalanche => sort_avalanche(unpaid),
        Method::Snowball => sort_snowball(unpaid),
    };

    match report.format {
        OutputFormat::Json => super::write_json(out, &ranked),
        OutputFormat::Text => {
            write!(out, "{}", ui::heading(method.title()))?;
            writeln!(out, "{}\n", method.description())?;
            write!(out, "{}", render_priority(&ranked, report.today))?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loan::test_support::{loan, today};
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_empty() {
        assert_eq!(render_priority(&[], today()), "No unpaid loans.");
    }

    #[test]
    fn test_render_ranked() {
        let loans = vec![
            loan(1, "Credit Card", dec!(5000), dec!(24), 12, 2),
            loan(2, "Electric Bill", dec!(1500), dec!(5), 1, 1),
        ];
        let output = render_priority(&sort_snowball(&loans), today());

        let first = output.find("Priority #1").unwrap();
        let second = output.find("Priority #2").unwrap();
        assert!(first < second);
        assert!(output[first..second].contains("Electric Bill"));
        assert!(output.contains("Rate: 24.00%"));
        assert!(output.contains("Total Amount: 1506.25"));
        assert!(output.contains("Due: 2025-03-11 (1 day)"));
    }
}
