use super::{OutputFormat, Report, ui};
use crate::core::summary::{LoanSummary, summarize};
use anyhow::Result;
use std::io::Write;

impl LoanSummary {
    pub fn display(&self) -> String {
        if self.is_empty() {
            return "No loans added yet.".to_string();
        }

        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Metric"), ui::header_cell("Value")]);
        table.add_row(vec!["Total Loans".to_string(), self.total_count.to_string()]);
        table.add_row(vec!["  Paid".to_string(), self.paid_count.to_string()]);
        table.add_row(vec!["  Unpaid".to_string(), self.unpaid_count.to_string()]);
        table.add_row(vec![
            "Total Principal".to_string(),
            ui::money(self.total_principal),
        ]);
        table.add_row(vec![
            "Total Interest".to_string(),
            ui::money(self.total_interest),
        ]);

        format!(
            "{}\n\n{}: {}",
            table,
            ui::style_text("TOTAL AMOUNT DUE", ui::StyleType::TotalLabel),
            ui::style_text(&ui::money(self.total_amount), ui::StyleType::TotalValue),
        )
    }
}

pub fn run(report: &Report, out: &mut dyn Write) -> Result<()> {
    let summary = summarize(report.repo.all_loans());
    match report.format {
        OutputFormat::Json => super::write_json(out, &summary),
        OutputFormat::Text => {
            write!(out, "{}", ui::heading("FINANCIAL SUMMARY"))?;
            writeln!(out, "{}", summary.display())?;
            Ok(())
        }
    }
}
