use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{Amount, Category, Transaction, TransactionKind};

/// Number of months shown by the monthly trend chart.
pub(crate) const TREND_MONTHS: usize = 6;

/// A category together with what has been spent against its budget.
#[derive(Debug, Clone)]
pub(crate) struct CategoryTotal {
    pub(crate) category: Category,
    pub(crate) spent: Amount,
    pub(crate) remaining: Amount,
}

impl CategoryTotal {
    pub(crate) fn budget(&self) -> Decimal {
        self.category.budget
    }

    pub(crate) fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Spent divided by budget. `None` for a zero budget or a NaN spend.
    pub(crate) fn usage_ratio(&self) -> Option<f64> {
        let spent = self.spent.value()?;
        if self.category.budget.is_zero() {
            return None;
        }
        (spent / self.category.budget).to_f64()
    }
}

/// Everything derived from the category store and transaction log.
#[derive(Debug, Clone)]
pub(crate) struct Summary {
    pub(crate) total_income: Amount,
    pub(crate) total_expenses: Amount,
    pub(crate) categories: Vec<CategoryTotal>,
}

impl Summary {
    pub(crate) fn balance(&self) -> Amount {
        self.total_income - self.total_expenses
    }
}

pub(crate) fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Amount {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Sum of expense amounts booked against `category_id`. Income never counts,
/// whatever category it carries.
pub(crate) fn spent_in_category(transactions: &[Transaction], category_id: i64) -> Amount {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.category_id == category_id)
        .map(|t| t.amount)
        .sum()
}

pub(crate) fn category_totals(
    categories: &[Category],
    transactions: &[Transaction],
) -> Vec<CategoryTotal> {
    categories
        .iter()
        .map(|category| {
            let spent = spent_in_category(transactions, category.id);
            CategoryTotal {
                category: category.clone(),
                spent,
                remaining: Amount::new(category.budget) - spent,
            }
        })
        .collect()
}

pub(crate) fn summarize(categories: &[Category], transactions: &[Transaction]) -> Summary {
    Summary {
        total_income: total_by_kind(transactions, TransactionKind::Income),
        total_expenses: total_by_kind(transactions, TransactionKind::Expense),
        categories: category_totals(categories, transactions),
    }
}

// ── Chart series ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Slice {
    pub(crate) name: String,
    pub(crate) color: String,
    pub(crate) value: Decimal,
    /// Fraction of all slice values, 0.0 to 1.0.
    pub(crate) share: f64,
}

/// Expenses by category, one slice per category in category order.
pub(crate) fn spending_breakdown(summary: &Summary) -> Vec<Slice> {
    let values: Vec<Decimal> = summary
        .categories
        .iter()
        .map(|c| match c.spent.value() {
            Some(v) if v > Decimal::ZERO => v,
            _ => Decimal::ZERO,
        })
        .collect();
    let total: Decimal = values.iter().sum();

    summary
        .categories
        .iter()
        .zip(values)
        .map(|(c, value)| {
            let share = if total.is_zero() {
                0.0
            } else {
                (value / total).to_f64().unwrap_or(0.0)
            };
            Slice {
                name: c.category.name.clone(),
                color: c.category.color.clone(),
                value,
                share,
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub(crate) struct MonthPoint {
    /// Short month name, e.g. `Apr`.
    pub(crate) label: String,
    /// `YYYY-MM`
    pub(crate) month: String,
    pub(crate) expense: Amount,
    pub(crate) budget: Decimal,
}

/// Expenses per calendar month for the `months` months ending with the month
/// of `end`, oldest first, each paired with the combined category budget.
pub(crate) fn monthly_trend(
    categories: &[Category],
    transactions: &[Transaction],
    end: NaiveDate,
    months: usize,
) -> Vec<MonthPoint> {
    let budget: Decimal = categories.iter().map(|c| c.budget).sum();
    let Some(end_month) = end.with_day0(0) else {
        return Vec::new();
    };

    (0..months)
        .rev()
        .filter_map(|back| end_month.checked_sub_months(Months::new(back as u32)))
        .map(|first_day| {
            let month = first_day.format("%Y-%m").to_string();
            let expense = transactions
                .iter()
                .filter(|t| t.is_expense() && t.month() == month)
                .map(|t| t.amount)
                .sum();
            MonthPoint {
                label: first_day.format("%b").to_string(),
                month,
                expense,
                budget,
            }
        })
        .collect()
}
