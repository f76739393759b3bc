use super::{OutputFormat, Report, ui};
use crate::core::strategy::{
    Assessment, LoanStatistics, Rationale, Recommendation, UrgentNotice, recommend_strategy_with,
};
use anyhow::Result;
use std::io::Write;

fn render_statistics(stats: &LoanStatistics) -> String {
    format!(
        "SITUATION ANALYSIS:\n\
         Total unpaid loans: {}\n\
         Urgent deadlines: {}\n\
         Average interest rate: {}\n\
         Highest interest rate: {}\n\
         Interest rate variance: {}\n\
         Smallest loan: {}\n\
         Average loan size: {}\n",
        stats.unpaid_count,
        stats.urgent_count,
        ui::percent(stats.avg_rate),
        ui::percent(stats.max_rate),
        ui::percent(stats.rate_variance),
        ui::money(stats.min_principal),
        ui::money(stats.avg_principal),
    )
}

fn render_rationale(rationale: &Rationale) -> String {
    match rationale {
        Rationale::RateSpread {
            max_rate, min_rate, ..
        } => format!(
            "Significant interest rate differences detected.\n\
             Your highest rate ({}) is much higher than your lowest ({}).\n\n\
             BENEFITS:\n\
             - Saves the most money on interest in the long run\n\
             - Mathematically optimal under simple interest\n\
             - Suits a financially disciplined payer\n\n\
             STRATEGY: Pay loans with the highest interest rates first.",
            ui::percent(*max_rate),
            ui::percent(*min_rate),
        ),
        Rationale::ManageableBalances {
            unpaid_count,
            rate_variance,
            ..
        } => format!(
            "You have {unpaid_count} loans, some with manageable balances.\n\
             Interest rates are relatively similar (variance: {}).\n\n\
             BENEFITS:\n\
             - Quick wins as debts disappear one by one\n\
             - Builds momentum and motivation\n\
             - Fewer accounts to manage sooner\n\n\
             STRATEGY: Pay the smallest loans first, then move to larger ones.",
            ui::percent(*rate_variance),
        ),
        Rationale::Balanced { rate_variance } => format!(
            "Your loans are balanced in terms of:\n\
             - Similar interest rates (variance: {})\n\
             - Comparable loan sizes\n\n\
             SUGGESTION: Choose based on your personality:\n\
             - AVALANCHE if you are disciplined and want to save more\n\
             - SNOWBALL if you need motivation from quick wins",
            ui::percent(*rate_variance),
        ),
    }
}

fn render_notice(notice: &UrgentNotice) -> String {
    format!(
        "{}\n\
         You have {} loan(s) with deadlines within {}!\n\
         Handle urgent deadlines FIRST to avoid:\n\
         - Late payment fees\n\
         - Interest rate increases\n\
         - Credit score damage\n\n\
         Then apply the {} to the remaining loans.\n",
        ui::style_text("IMPORTANT NOTICE:", ui::StyleType::Warning),
        notice.urgent_count,
        ui::days(notice.window_days),
        notice.then_apply,
    )
}

fn render_recommendation(recommendation: &Recommendation) -> String {
    let mut output = render_statistics(&recommendation.statistics);
    output.push('\n');
    output.push_str(&format!(
        "RECOMMENDED PAYMENT STRATEGY: {}\n\n",
        ui::style_text(
            &recommendation.strategy.to_string(),
            ui::StyleType::TotalValue
        )
    ));
    output.push_str("REASON:\n");
    output.push_str(&render_rationale(&recommendation.rationale));
    output.push_str("\n\n");

    if let Some(notice) = &recommendation.urgent_notice {
        output.push_str(&render_notice(notice));
        output.push('\n');
    }

    output.push_str(&ui::style_text(
        &format!(
            "TIP: Always pay the minimum on every loan to avoid defaults, then put extra \
             money toward your priority loan based on the {}.",
            recommendation.strategy
        ),
        ui::StyleType::Subtle,
    ));
    output
}

pub fn render_assessment(assessment: &Assessment) -> String {
    match assessment {
        Assessment::DebtFree => "No unpaid loans. You're debt-free!".to_string(),
        Assessment::Recommended(recommendation) => render_recommendation(recommendation),
    }
}

pub fn run(report: &Report, out: &mut dyn Write) -> Result<()> {
    let assessment = recommend_strategy_with(
        report.repo.unpaid_loans(),
        report.today,
        &report.thresholds,
    );
    match report.format {
        OutputFormat::Json => super::write_json(out, &assessment),
        OutputFormat::Text => {
            write!(out, "{}", ui::heading("SMART STRATEGY RECOMMENDATION"))?;
            writeln!(out, "{}", render_assessment(&assessment))?;
            Ok(())
        }
    }
}
