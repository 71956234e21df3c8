//! Entry-form checks. These stand in for the input widgets' own rules
//! (required fields, a non-negative number box, a date picker); the session
//! itself accepts whatever the form lets through.

use chrono::NaiveDate;

use crate::models::Amount;
use crate::session::{Draft, DraftField, DATE_FORMAT};

/// Why the form refuses to submit `draft`, or `None` if it may be submitted.
/// Text that is not a number at all passes: the amount box only enforces
/// presence and its minimum.
pub(crate) fn rejection(draft: &Draft) -> Option<String> {
    if draft.description.trim().is_empty() {
        return Some(required(DraftField::Description));
    }
    if draft.amount.trim().is_empty() {
        return Some(required(DraftField::Amount));
    }
    if Amount::parse(&draft.amount).is_negative() {
        return Some("Amount must be 0 or more".into());
    }
    if draft.date.trim().is_empty() {
        return Some(required(DraftField::Date));
    }
    if NaiveDate::parse_from_str(draft.date.trim(), DATE_FORMAT).is_err() {
        return Some(format!("Invalid date: {}. Use YYYY-MM-DD", draft.date));
    }
    None
}

fn required(field: DraftField) -> String {
    format!("{field} is required")
}

/// Step the focused form field index by `delta`, wrapping around.
pub(crate) fn step_field(index: usize, delta: i32) -> usize {
    let len = DraftField::all().len() as i64;
    (index as i64 + delta as i64).rem_euclid(len) as usize
}
