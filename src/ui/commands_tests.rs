#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::commands::*;
use crate::models::TransactionKind;
use crate::session::{Draft, Session, View};
use crate::ui::app::{App, InputMode};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
}

fn seeded_app() -> App {
    App::new(Session::seeded(today())).with_clock(today)
}

// ── Registry ──────────────────────────────────────────────────

#[test]
fn test_every_command_has_description() {
    for (name, cmd) in COMMANDS.iter() {
        assert!(!cmd.description.is_empty(), "{name} has no description");
    }
}

#[test]
fn test_view_commands_switch_view() {
    let mut app = seeded_app();
    for (input, view) in [
        ("t", View::Transactions),
        ("reports", View::Reports),
        ("i", View::Insights),
        ("dashboard", View::Dashboard),
    ] {
        handle_command(input, &mut app).unwrap();
        assert_eq!(app.view(), view, "after :{input}");
    }
}

#[test]
fn test_leaving_transactions_exits_form() {
    let mut app = seeded_app();
    handle_command("t", &mut app).unwrap();
    app.input_mode = InputMode::Editing;
    handle_command("r", &mut app).unwrap();
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_quit_and_help() {
    let mut app = seeded_app();
    handle_command("help", &mut app).unwrap();
    assert!(app.show_help);
    handle_command("q", &mut app).unwrap();
    assert!(!app.running);
}

#[test]
fn test_unknown_command_suggests() {
    let mut app = seeded_app();
    handle_command("reprots", &mut app).unwrap();
    assert_eq!(
        app.status_message,
        "Unknown command: :reprots. Did you mean :reports?"
    );
    assert!(app.running);
}

// ── :add ──────────────────────────────────────────────────────

#[test]
fn test_add_expense() {
    let mut app = seeded_app();
    handle_command("add 2025-04-18 Bus pass 60 transport", &mut app).unwrap();

    let added = app.session.transactions.last().unwrap();
    assert_eq!(added.id, 6);
    assert_eq!(added.description, "Bus pass");
    assert_eq!(added.amount, dec!(60));
    assert_eq!(added.category_id, 2);
    assert_eq!(added.kind, TransactionKind::Expense);
    assert_eq!(added.date, NaiveDate::from_ymd_opt(2025, 4, 18).unwrap());
    assert_eq!(app.status_message, "Added transaction: Bus pass");
}

#[test]
fn test_add_income() {
    let mut app = seeded_app();
    handle_command("a 2025-04-20 Bonus 250 Food income", &mut app).unwrap();

    let added = app.session.transactions.last().unwrap();
    assert_eq!(added.kind, TransactionKind::Income);
    assert_eq!(app.session.summary().total_income, dec!(2250));
}

#[test]
fn test_add_non_numeric_amount_becomes_nan() {
    let mut app = seeded_app();
    handle_command("add 2025-04-18 Mystery abc Food", &mut app).unwrap();

    assert!(app.session.transactions.last().unwrap().amount.is_nan());
    assert!(app.session.summary().total_expenses.is_nan());
}

#[test]
fn test_add_rejected_by_form_rules() {
    let mut app = seeded_app();

    handle_command("add 2025-04-18 Refund -5 Food", &mut app).unwrap();
    assert_eq!(app.status_message, "Amount must be 0 or more");

    handle_command("add 18/04/2025 Lunch 5 Food", &mut app).unwrap();
    assert_eq!(
        app.status_message,
        "Invalid date: 18/04/2025. Use YYYY-MM-DD"
    );

    assert_eq!(app.session.transactions.len(), 5);
}

#[test]
fn test_add_unknown_category() {
    let mut app = seeded_app();
    handle_command("add 2025-04-18 Vet 80 Pets", &mut app).unwrap();
    assert_eq!(app.status_message, "Category 'Pets' not found");
    assert_eq!(app.session.transactions.len(), 5);
}

#[test]
fn test_add_too_few_args() {
    let mut app = seeded_app();
    handle_command("add 2025-04-18 60 Food", &mut app).unwrap();
    assert!(app.status_message.starts_with("Usage: :add"));
    handle_command("add", &mut app).unwrap();
    assert!(app.status_message.starts_with("Usage: :add"));
}

#[test]
fn test_parse_add_args_keeps_multiword_description() {
    let app = seeded_app();
    let draft: Draft = parse_add_args(
        "2025-04-18 Dinner with the cats 42.10 Entertainment expense",
        &app.session.categories,
    )
    .unwrap();
    assert_eq!(draft.description, "Dinner with the cats");
    assert_eq!(draft.amount, "42.10");
    assert_eq!(draft.category_id, 4);
    assert_eq!(draft.date, "2025-04-18");
}

// ── :export ───────────────────────────────────────────────────

#[test]
fn test_export_to_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let mut app = seeded_app();

    handle_command(&format!("export {}", path.display()), &mut app).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 6);
    assert!(app.status_message.starts_with("Exported 5 transactions"));
}

#[test]
fn test_export_error_propagates() {
    let mut app = seeded_app();
    let result = handle_command("export /nonexistent-dir/budgetkat/out.csv", &mut app);
    assert!(result.is_err());
}
