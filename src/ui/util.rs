use rust_decimal::Decimal;

use crate::aggregate::CategoryTotal;
use crate::models::{Amount, Transaction};

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs();
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}

/// Like [`format_amount`], but a NaN amount shows as `$NaN`.
pub(crate) fn format_money(val: Amount) -> String {
    match val.value() {
        Some(v) => format_amount(v),
        None => "$NaN".to_string(),
    }
}

/// `+$12.00` for income, `-$12.00` for an expense.
pub(crate) fn signed_money(txn: &Transaction) -> String {
    format!("{}{}", txn.kind.sign(), format_money(txn.amount))
}

/// Budget usage line for one category: `N% of budget used, $R remaining`, or
/// `Over budget by $X` once nothing remains.
pub(crate) fn budget_detail(total: &CategoryTotal) -> String {
    if total.remaining >= Decimal::ZERO {
        let percent = match total.usage_ratio() {
            Some(ratio) => format!("{:.0}%", ratio * 100.0),
            None => "NaN%".to_string(),
        };
        format!(
            "{percent} of budget used, {} remaining",
            format_money(total.remaining)
        )
    } else {
        format!("Over budget by {}", format_money(total.remaining.abs()))
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Text progress bar, `ratio` clamped to 0..=1.
pub(crate) fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        let page = page.max(1);
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page - 1);
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Jump cursor to the top of a list.
pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

/// Jump cursor to the bottom of a list.
pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}
