//! Interactive menu over an in-memory repository.
//!
//! Input is read line by line from any `BufRead`, so the loop can be driven
//! by stdin or by a scripted buffer. End of input behaves like "Exit".
use super::priority::Method;
use super::{OutputFormat, Report, ui};
use crate::core::loan::LoanTerms;
use crate::core::strategy::StrategyThresholds;
use crate::store::LoanRepository;
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddLoan,
    ViewLoans,
    Alerts,
    Strategy,
    Avalanche,
    Snowball,
    TogglePaid,
    Summary,
    Exit,
}

impl MenuChoice {
    fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::AddLoan),
            2 => Some(MenuChoice::ViewLoans),
            3 => Some(MenuChoice::Alerts),
            4 => Some(MenuChoice::Strategy),
            5 => Some(MenuChoice::Avalanche),
            6 => Some(MenuChoice::Snowball),
            7 => Some(MenuChoice::TogglePaid),
            8 => Some(MenuChoice::Summary),
            9 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\
1. Add New Loan
2. View All Loans
3. Check Payment Alerts
4. Get Strategy Suggestion
5. View Avalanche Priority
6. View Snowball Priority
7. Mark Loan as Paid
8. View Financial Summary
9. Exit";

/// Reads one trimmed line, `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead>(input: &mut R, out: &mut dyn Write, message: &str) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;
    read_line(input)
}

/// Re-prompts until the line parses as `T`.
fn prompt_parsed<R: BufRead, T: FromStr>(
    input: &mut R,
    out: &mut dyn Write,
    message: &str,
) -> Result<Option<T>> {
    let mut current = message.to_string();
    loop {
        let Some(line) = prompt(input, out, &current)? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => current = format!("Invalid input. {message}"),
        }
    }
}

pub struct Menu<'a, R: BufRead> {
    input: R,
    out: &'a mut dyn Write,
    repo: &'a mut dyn LoanRepository,
    today: NaiveDate,
    thresholds: StrategyThresholds,
    sample_notice: bool,
}

impl<'a, R: BufRead> Menu<'a, R> {
    pub fn new(
        input: R,
        out: &'a mut dyn Write,
        repo: &'a mut dyn LoanRepository,
        today: NaiveDate,
        thresholds: StrategyThresholds,
    ) -> Self {
        Self {
            input,
            out,
            repo,
            today,
            thresholds,
            sample_notice: false,
        }
    }

    /// Tells the user at startup that the loans are demonstration data.
    pub fn with_sample_notice(mut self, enabled: bool) -> Self {
        self.sample_notice = enabled;
        self
    }

    /// Runs the loop until "Exit" or end of input.
    pub fn run(&mut self) -> Result<()> {
        write!(self.out, "{}", ui::heading("PERSONAL DEBT MANAGEMENT"))?;
        if self.sample_notice {
            writeln!(
                self.out,
                "{}",
                ui::style_text(
                    "Sample loans have been pre-loaded for demonstration.",
                    ui::StyleType::Subtle
                )
            )?;
        }
        loop {
            writeln!(self.out, "\n{}\n{MENU}", ui::heading("MAIN MENU"))?;
            let Some(number) = prompt_parsed::<R, u32>(&mut self.input, self.out, "Enter your choice: ")?
            else {
                break;
            };
            writeln!(self.out)?;

            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.out, "Invalid choice. Please try again.")?;
                continue;
            };
            debug!(?choice, "Menu selection");

            match choice {
                MenuChoice::AddLoan => self.add_loan()?,
                MenuChoice::TogglePaid => self.toggle_paid()?,
                MenuChoice::Exit => break,
                view => self.show(view)?,
            }
        }
        writeln!(self.out, "Thank you for using debtplan!")?;
        Ok(())
    }

    fn show(&mut self, choice: MenuChoice) -> Result<()> {
        let report = Report {
            repo: &*self.repo,
            today: self.today,
            thresholds: self.thresholds,
            format: OutputFormat::Text,
        };
        let out = &mut *self.out;
        match choice {
            MenuChoice::ViewLoans => super::loans::run(&report, out),
            MenuChoice::Alerts => super::alerts::run(&report, out),
            MenuChoice::Strategy => super::strategy::run(&report, out),
            MenuChoice::Avalanche => super::priority::run(Method::Avalanche, &report, out),
            MenuChoice::Snowball => super::priority::run(Method::Snowball, &report, out),
            MenuChoice::Summary => super::summary::run(&report, out),
            MenuChoice::AddLoan | MenuChoice::TogglePaid | MenuChoice::Exit => Ok(()),
        }
    }

    fn add_loan(&mut self) -> Result<()> {
        write!(self.out, "{}", ui::heading("ADD NEW LOAN"))?;
        let input = &mut self.input;
        let out = &mut *self.out;

        let Some(name) = prompt(input, out, "Enter loan name (e.g., Electric Bill, Credit Card): ")?
        else {
            return Ok(());
        };
        let Some(principal) = prompt_parsed::<R, Decimal>(input, out, "Enter principal amount: ")?
        else {
            return Ok(());
        };
        let Some(rate) = prompt_parsed::<R, Decimal>(input, out, "Enter interest rate (%): ")?
        else {
            return Ok(());
        };
        let Some(term) = prompt_parsed::<R, u32>(input, out, "Enter time period (months): ")?
        else {
            return Ok(());
        };
        let Some(due) = prompt(input, out, "Enter due date (YYYY-MM-DD): ")? else {
            return Ok(());
        };

        let due_date = match NaiveDate::parse_from_str(&due, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => {
                writeln!(out, "\nInvalid date '{due}', expected YYYY-MM-DD.")?;
                return Ok(());
            }
        };

        let terms = match LoanTerms::new(name, principal, rate, term, due_date) {
            Ok(terms) => terms,
            Err(e) => {
                writeln!(out, "\nCould not add loan: {e}")?;
                return Ok(());
            }
        };

        let id = self.repo.append_loan(terms);
        if let Some(loan) = self.repo.get_loan(id) {
            writeln!(self.out, "\nLoan added successfully!")?;
            writeln!(self.out, "Interest: {}", ui::money(loan.interest()))?;
            writeln!(self.out, "Total Amount: {}", ui::money(loan.total()))?;
        }
        Ok(())
    }

    fn toggle_paid(&mut self) -> Result<()> {
        write!(self.out, "{}", ui::heading("MARK LOAN AS PAID"))?;
        if self.repo.is_empty() {
            writeln!(self.out, "No loans available.")?;
            return Ok(());
        }

        let ids: Vec<_> = self.repo.all_loans().iter().map(|l| l.id()).collect();
        for (i, loan) in self.repo.all_loans().iter().enumerate() {
            writeln!(
                self.out,
                "{}. {} - {} [{}]",
                i + 1,
                loan.name(),
                ui::money(loan.total()),
                if loan.is_paid() { "PAID" } else { "PENDING" }
            )?;
        }

        let Some(number) = prompt_parsed::<R, usize>(
            &mut self.input,
            self.out,
            "\nEnter loan number to toggle paid status: ",
        )?
        else {
            return Ok(());
        };

        match number.checked_sub(1).and_then(|i| ids.get(i)) {
            Some(id) => {
                let loan = self.repo.toggle_paid(*id)?;
                let status = if loan.is_paid() { "PAID" } else { "PENDING" };
                writeln!(self.out, "\n{} marked as {status}", loan.name())?;
            }
            None => writeln!(self.out, "Invalid loan number.")?,
        }
        Ok(())
    }
}
