use super::{OutputFormat, Report, ui};
use crate::core::loan::{Loan, compute_derived};
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct LoanRow<'a> {
    #[serde(flatten)]
    loan: &'a Loan,
    interest: rust_decimal::Decimal,
    total: rust_decimal::Decimal,
    days_until_due: i64,
}

pub fn render_loans(loans: &[Loan]) -> String {
    if loans.is_empty() {
        return "No loans added yet.".to_string();
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("Loan"),
        ui::header_cell("Principal"),
        ui::header_cell("Rate (%)"),
        ui::header_cell("Term (mo)"),
        ui::header_cell("Interest"),
        ui::header_cell("Total"),
        ui::header_cell("Due Date"),
        ui::header_cell("Status"),
    ]);

    for (i, loan) in loans.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(loan.name()),
            ui::amount_cell(loan.principal()),
            ui::amount_cell(loan.annual_rate_percent()),
            Cell::new(loan.term_months()).set_alignment(CellAlignment::Right),
            ui::amount_cell(loan.interest()),
            ui::amount_cell(loan.total()),
            Cell::new(loan.due_date()),
            ui::status_cell(loan.is_paid()),
        ]);
    }

    table.to_string()
}

fn rows(loans: &[Loan], today: NaiveDate) -> Vec<LoanRow<'_>> {
    loans
        .iter()
        .map(|loan| {
            let derived = compute_derived(loan, today);
            LoanRow {
                loan,
                interest: derived.interest,
                total: derived.total,
                days_until_due: derived.days_until_due,
            }
        })
        .collect()
}

pub fn run(report: &Report, out: &mut dyn Write) -> Result<()> {
    let loans = report.repo.all_loans();
    match report.format {
        OutputFormat::Json => super::write_json(out, &rows(loans, report.today)),
        OutputFormat::Text => {
            write!(out, "{}", ui::heading("ALL LOANS"))?;
            writeln!(out, "{}", render_loans(loans))?;
            Ok(())
        }
    }
}
