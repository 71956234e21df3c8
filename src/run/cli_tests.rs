#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use super::cli::*;
use crate::args::Command;
use crate::session::{default_categories, Session};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
}

// ── summary ───────────────────────────────────────────────────

#[test]
fn test_summary_totals() {
    let text = summary_text(&Session::seeded(today())).unwrap();
    assert!(text.contains("$2,000.00"));
    assert!(text.contains("$270.50"));
    assert!(text.contains("$1,729.50"));
    assert!(text.contains("Utilities"));
}

#[test]
fn test_summary_empty_session() {
    let text = summary_text(&Session::new(default_categories(), today())).unwrap();
    assert_eq!(text.matches("$0.00").count(), 3 + 4);
}

// ── report ────────────────────────────────────────────────────

#[test]
fn test_report_details_and_trend() {
    let text = report_text(&Session::seeded(today()), today()).unwrap();
    assert!(text.contains("Utilities: 60% of budget used, $80.00 remaining"));
    assert!(text.contains("Food: 15% of budget used, $424.50 remaining"));
    assert!(text.contains("2025-04      $270.50 of $1,150.00"));
    assert!(text.contains("2024-11"));
}

#[test]
fn test_report_breakdown_shares() {
    let text = report_text(&Session::seeded(today()), today()).unwrap();
    let utilities = text
        .lines()
        .find(|l| l.trim_start().starts_with("Utilities "))
        .unwrap();
    // 120 of 270.50
    assert!(utilities.contains("$120.00"));
    assert!(utilities.ends_with("44%"));
}

// ── insights ──────────────────────────────────────────────────

#[test]
fn test_insights_seeded() {
    let text = insights_text(&Session::seeded(today())).unwrap();
    assert!(text.contains("[savings] You're saving well in Food, Transport, Entertainment!"));
    assert!(text.contains("[balance] Great job! You're saving more than 30% of your income."));
    assert!(text.contains("You could save an extra $400.00 per month"));
}

#[test]
fn test_insights_empty_session() {
    let text = insights_text(&Session::new(default_categories(), today())).unwrap();
    // Every remaining budget is untouched, so the savings rule still fires
    assert!(text.contains("You're saving well in Food, Transport, Utilities, Entertainment!"));
    assert!(text.contains("You could save an extra $0.00 per month"));
}

// ── export ────────────────────────────────────────────────────

#[test]
fn test_export_command_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cli.csv");
    let command = Command::Export {
        path: Some(path.clone()),
    };

    as_cli(&command, &Session::seeded(today()), today()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("id,date,description,category,kind,amount"));
    assert_eq!(contents.lines().count(), 6);
}
