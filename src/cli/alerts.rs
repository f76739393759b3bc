use super::{OutputFormat, Report, ui};
use crate::core::alert::{Alert, UrgencyTier, collect_alerts};
use anyhow::Result;
use std::io::Write;

fn describe_due(alert: &Alert) -> String {
    match alert.tier {
        UrgencyTier::Overdue => format!("Overdue by {}", ui::days(alert.days_until_due.abs())),
        UrgencyTier::Critical => "Due TODAY!".to_string(),
        UrgencyTier::High => "Due TOMORROW".to_string(),
        UrgencyTier::Medium | UrgencyTier::NotUrgent => {
            format!("Due in {}", ui::days(alert.days_until_due))
        }
    }
}

fn tier_label(tier: UrgencyTier) -> String {
    let style_type = match tier {
        UrgencyTier::Overdue | UrgencyTier::Critical => ui::StyleType::Error,
        UrgencyTier::High | UrgencyTier::Medium => ui::StyleType::Warning,
        UrgencyTier::NotUrgent => ui::StyleType::Subtle,
    };
    ui::style_text(&tier.to_string(), style_type)
}

pub fn render_alerts(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return "No urgent payments at this time.".to_string();
    }

    alerts
        .iter()
        .map(|alert| {
            format!(
                "{}: {}\n    {}\n    Amount: {}\n    Due Date: {}\n",
                tier_label(alert.tier),
                alert.loan.name(),
                describe_due(alert),
                ui::money(alert.amount),
                alert.loan.due_date(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run(report: &Report, out: &mut dyn Write) -> Result<()> {
    let alerts = collect_alerts(report.repo.all_loans(), report.today);
    match report.format {
        OutputFormat::Json => super::write_json(out, &alerts),
        OutputFormat::Text => {
            write!(out, "{}", ui::heading("PAYMENT ALERTS"))?;
            writeln!(out, "{}", render_alerts(&alerts))?;
            Ok(())
        }
    }
}
