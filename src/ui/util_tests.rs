#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;
use crate::aggregate::CategoryTotal;
use crate::models::{Amount, Category, Transaction, TransactionKind};

fn total(budget: rust_decimal::Decimal, spent: Amount) -> CategoryTotal {
    CategoryTotal {
        category: Category::new(1, "Food", "🐟", budget, "#FF6384"),
        spent,
        remaining: Amount::new(budget) - spent,
    }
}

// ── format ────────────────────────────────────────────────────

#[test]
fn test_format_amount_thousands() {
    assert_eq!(format_amount(dec!(1729.5)), "$1,729.50");
    assert_eq!(format_amount(dec!(1234567.891)), "$1,234,567.89");
}

#[test]
fn test_format_amount_small_and_negative() {
    assert_eq!(format_amount(dec!(0)), "$0.00");
    assert_eq!(format_amount(dec!(75.5)), "$75.50");
    assert_eq!(format_amount(dec!(-25.25)), "-$25.25");
}

#[test]
fn test_format_money_nan() {
    assert_eq!(format_money(Amount::NAN), "$NaN");
    assert_eq!(format_money(Amount::new(dec!(2000))), "$2,000.00");
}

#[test]
fn test_signed_money() {
    let mut txn = Transaction {
        id: 1,
        description: "Gas".into(),
        amount: Amount::new(dec!(45)),
        category_id: 2,
        kind: TransactionKind::Expense,
        date: chrono::NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
    };
    assert_eq!(signed_money(&txn), "-$45.00");
    txn.kind = TransactionKind::Income;
    assert_eq!(signed_money(&txn), "+$45.00");
}

// ── budget_detail ─────────────────────────────────────────────

#[test]
fn test_budget_detail_within_budget() {
    let t = total(dec!(200), Amount::new(dec!(120)));
    assert_eq!(budget_detail(&t), "60% of budget used, $80.00 remaining");
}

#[test]
fn test_budget_detail_exactly_spent() {
    let t = total(dec!(150), Amount::new(dec!(150)));
    assert_eq!(budget_detail(&t), "100% of budget used, $0.00 remaining");
}

#[test]
fn test_budget_detail_over_budget() {
    let t = total(dec!(300), Amount::new(dec!(345)));
    assert_eq!(budget_detail(&t), "Over budget by $45.00");
}

#[test]
fn test_budget_detail_nan_spend() {
    let t = total(dec!(500), Amount::NAN);
    assert_eq!(budget_detail(&t), "Over budget by $NaN");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate("Gas", 10), "Gas");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long() {
    assert_eq!(truncate("Electricity bill", 8), "Electri…");
    assert_eq!(truncate("hello", 1), "…");
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("🐟🧶🐾🧸", 3), "🐟🧶…");
}

// ── progress_bar ──────────────────────────────────────────────

#[test]
fn test_progress_bar_fill() {
    assert_eq!(progress_bar(0.0, 4), "[░░░░]");
    assert_eq!(progress_bar(0.5, 4), "[██░░]");
    assert_eq!(progress_bar(1.0, 4), "[████]");
}

#[test]
fn test_progress_bar_clamps() {
    assert_eq!(progress_bar(3.2, 4), "[████]");
    assert_eq!(progress_bar(-1.0, 4), "[░░░░]");
    assert_eq!(progress_bar(f64::NAN, 4), "[░░░░]");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_keeps_cursor_visible() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (1, 0);
    scroll_down(&mut index, &mut scroll, 2, 10);
    assert_eq!(index, 1);
}

#[test]
fn test_scroll_up_and_jumps() {
    let (mut index, mut scroll) = (4, 4);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (3, 3));

    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));

    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}
