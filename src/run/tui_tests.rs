#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal_macros::dec;

use super::tui::handle_key;
use crate::models::TransactionKind;
use crate::session::{DraftField, Session, View};
use crate::ui::app::{App, InputMode};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
}

fn app() -> App {
    App::new(Session::seeded(today())).with_clock(today)
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), app);
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

// ── Navigation ────────────────────────────────────────────────

#[test]
fn test_number_keys_switch_view() {
    let mut app = app();
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.view(), View::Reports);
    press(&mut app, KeyCode::Char('4'));
    assert_eq!(app.view(), View::Insights);
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.view(), View::Dashboard);
}

#[test]
fn test_tab_cycles_and_wraps() {
    let mut app = app();
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.view(), View::Insights);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.view(), View::Dashboard);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.view(), View::Transactions);
}

#[test]
fn test_view_switching_leaves_data_alone() {
    let mut app = app();
    let before = app.session.transactions.clone();
    for key in ['2', '3', '4', '1'] {
        press(&mut app, KeyCode::Char(key));
    }
    assert_eq!(app.session.transactions, before);
    assert_eq!(app.session.categories.len(), 4);
}

#[test]
fn test_ctrl_q_and_ctrl_c_quit() {
    for c in ['q', 'c'] {
        let mut app = app();
        handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), &mut app);
        assert!(!app.running);
    }
}

#[test]
fn test_help_closes_on_any_key() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, KeyCode::Char('3'));
    assert!(!app.show_help);
    assert_eq!(app.view(), View::Dashboard);
}

#[test]
fn test_command_mode_runs_command() {
    let mut app = app();
    press(&mut app, KeyCode::Char(':'));
    assert_eq!(app.input_mode, InputMode::Command);
    type_text(&mut app, "reports");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.view(), View::Reports);
}

#[test]
fn test_command_error_shown_in_status() {
    let mut app = app();
    press(&mut app, KeyCode::Char(':'));
    type_text(&mut app, "export /nonexistent-dir/budgetkat/out.csv");
    press(&mut app, KeyCode::Enter);
    assert!(app.running);
    assert!(app.status_message.starts_with("Error: Failed to create export file"));
}

#[test]
fn test_scrolling_transactions() {
    let mut app = app();
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.transaction_index, 2);
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.transaction_index, 4);
    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.transaction_index, 0);
}

// ── Entry form ────────────────────────────────────────────────

#[test]
fn test_a_focuses_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.view(), View::Transactions);
    assert_eq!(app.input_mode, InputMode::Editing);
    assert_eq!(app.focused_field(), DraftField::Description);
}

#[test]
fn test_fill_and_submit_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Cat food");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "12.5");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right); // Transport
    press(&mut app, KeyCode::Right); // Utilities
    press(&mut app, KeyCode::Left); // back to Transport
    press(&mut app, KeyCode::Enter);

    let added = app.session.transactions.last().unwrap();
    assert_eq!(added.description, "Cat food");
    assert_eq!(added.amount, dec!(12.5));
    assert_eq!(added.category_id, 2);
    assert_eq!(added.kind, TransactionKind::Expense);
    assert_eq!(added.date, today());

    assert_eq!(app.status_message, "Added transaction: Cat food");
    assert_eq!(app.input_mode, InputMode::Editing);
    assert_eq!(app.focused_field(), DraftField::Description);
    assert!(app.session.draft.description.is_empty());
}

#[test]
fn test_submitted_form_resets_date_to_current_day() {
    fn next_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 16).unwrap()
    }

    // Seeded on the 15th, submitted after midnight
    let mut app = App::new(Session::seeded(today())).with_clock(next_day);
    assert_eq!(app.session.draft.date, "2025-04-15");

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Late snack");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "3");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.session.transactions.len(), 6);
    assert_eq!(app.session.draft.date, "2025-04-16");
}

#[test]
fn test_update_keeps_categories_and_transactions() {
    let mut app = app();
    app.update(|s| s.with_view(View::Reports));
    assert_eq!(app.view(), View::Reports);
    assert_eq!(app.session.categories.len(), 4);
    assert_eq!(app.session.transactions.len(), 5);
    assert_eq!(app.session.draft.date, "2025-04-15");
}

#[test]
fn test_kind_toggle_in_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Up); // wraps to Date
    press(&mut app, KeyCode::Up); // Kind
    assert_eq!(app.focused_field(), DraftField::Kind);
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.session.draft.kind, TransactionKind::Income);
    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.session.draft.kind, TransactionKind::Expense);
}

#[test]
fn test_backspace_edits_text_field() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Gass");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.session.draft.description, "Gas");
}

#[test]
fn test_rejected_form_keeps_draft() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Treats");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.status_message, "Amount is required");
    assert_eq!(app.session.transactions.len(), 5);
    assert_eq!(app.session.draft.description, "Treats");
}

#[test]
fn test_esc_leaves_form_and_number_keys_type() {
    let mut app = app();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "3");
    assert_eq!(app.session.draft.amount, "3");
    assert_eq!(app.view(), View::Transactions);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.input_mode, InputMode::Normal);
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.view(), View::Reports);
}
