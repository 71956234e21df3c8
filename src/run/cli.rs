use anyhow::Result;
use chrono::NaiveDate;
use std::fmt::{self, Write as _};
use std::path::PathBuf;

use crate::aggregate::{self, TREND_MONTHS};
use crate::args::Command;
use crate::export::{default_export_path, CsvExporter};
use crate::insights::{self, NO_INSIGHTS_MESSAGE, SAVINGS_POTENTIAL_NOTE, SAVINGS_TIPS};
use crate::models::Amount;
use crate::session::Session;
use crate::ui::util::{budget_detail, format_money, progress_bar};

pub(crate) fn as_cli(command: &Command, session: &Session, today: NaiveDate) -> Result<()> {
    match command {
        Command::Summary => print!("{}", summary_text(session)?),
        Command::Report => print!("{}", report_text(session, today)?),
        Command::Insights => print!("{}", insights_text(session)?),
        Command::Export { path } => {
            let path = path
                .clone()
                .unwrap_or_else(|| PathBuf::from(default_export_path(today)));
            let count =
                CsvExporter::export_to_path(&path, &session.categories, &session.transactions)?;
            println!("Exported {count} transactions to {}", path.display());
        }
    }
    Ok(())
}

pub(crate) fn summary_text(session: &Session) -> Result<String, fmt::Error> {
    let summary = session.summary();
    let mut out = String::new();

    writeln!(out, "BudgetKat summary")?;
    writeln!(out)?;
    writeln!(out, "  {:<16}{:>14}", "Total income", format_money(summary.total_income))?;
    writeln!(
        out,
        "  {:<16}{:>14}",
        "Total expenses",
        format_money(summary.total_expenses)
    )?;
    writeln!(out, "  {:<16}{:>14}", "Balance", format_money(summary.balance()))?;
    writeln!(out)?;
    writeln!(out, "Budget status:")?;
    for c in &summary.categories {
        writeln!(
            out,
            "  {} {:<16}{:>12} / {:<12} {}",
            c.category.icon,
            c.category.name,
            format_money(c.spent),
            format_money(Amount::new(c.budget())),
            progress_bar(c.usage_ratio().unwrap_or(0.0), 20)
        )?;
    }
    Ok(out)
}

pub(crate) fn report_text(session: &Session, today: NaiveDate) -> Result<String, fmt::Error> {
    let summary = session.summary();
    let mut out = String::new();

    writeln!(out, "Expenses by category:")?;
    for slice in aggregate::spending_breakdown(&summary) {
        writeln!(
            out,
            "  {:<16}{:>12}  {:>4.0}%",
            slice.name,
            format_money(Amount::new(slice.value)),
            slice.share * 100.0
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Category details:")?;
    for c in &summary.categories {
        writeln!(out, "  {} {}: {}", c.category.icon, c.category.name, budget_detail(c))?;
    }

    writeln!(out)?;
    writeln!(out, "Monthly expense trend:")?;
    let trend = aggregate::monthly_trend(
        &session.categories,
        &session.transactions,
        today,
        TREND_MONTHS,
    );
    for point in trend {
        writeln!(
            out,
            "  {} {:>12} of {}",
            point.month,
            format_money(point.expense),
            format_money(Amount::new(point.budget))
        )?;
    }
    Ok(out)
}

pub(crate) fn insights_text(session: &Session) -> Result<String, fmt::Error> {
    let summary = session.summary();
    let mut out = String::new();

    writeln!(out, "Budget analysis:")?;
    let found = insights::generate(&summary);
    if found.is_empty() {
        writeln!(out, "  {NO_INSIGHTS_MESSAGE}")?;
    }
    for insight in found {
        writeln!(out, "  [{}] {}", insight.kind, insight.message)?;
    }

    let recs = insights::recommendations(&summary);
    if !recs.is_empty() {
        writeln!(out)?;
        writeln!(out, "Spending recommendations:")?;
        for rec in recs {
            writeln!(out, "  {} {}: {}", rec.icon, rec.name, rec.message)?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "You could save an extra {} per month",
        format_money(insights::savings_potential(summary.total_income))
    )?;
    writeln!(out, "{SAVINGS_POTENTIAL_NOTE}")?;
    writeln!(out, "Tips to increase savings:")?;
    for tip in SAVINGS_TIPS {
        writeln!(out, "  - {tip}")?;
    }
    Ok(out)
}
