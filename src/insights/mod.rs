//! Rule-based budget advice derived from a [`Summary`].
//!
//! Every rule is a plain function that either produces one insight or
//! nothing. Rules run in the fixed order of [`RULES`]; all that apply fire.

use rust_decimal::Decimal;

use crate::aggregate::{CategoryTotal, Summary};
use crate::models::Amount;

/// Remaining budget above this fraction counts as saving well.
const SAVING_WELL_RATIO: Decimal = Decimal::from_parts(5, 0, 0, false, 1);
/// Balance above this fraction of income counts as a healthy savings rate.
const SAVINGS_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 1);
/// Spend above this fraction of the budget is close to the limit.
const NEAR_LIMIT_RATIO: Decimal = Decimal::from_parts(8, 0, 0, false, 1);
/// Spend below this fraction of the budget looks like an oversized budget.
const UNDERUSED_RATIO: Decimal = Decimal::from_parts(2, 0, 0, false, 1);
/// Share of income the savings-potential panel suggests putting aside.
const SAVINGS_POTENTIAL_RATIO: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

pub(crate) const NO_INSIGHTS_MESSAGE: &str =
    "No insights available. Add more transactions to get personalized budget advice.";

pub(crate) const SAVINGS_POTENTIAL_NOTE: &str = "Based on your income and current spending patterns, you have the potential to save 20% of your income.";

pub(crate) const SAVINGS_TIPS: [&str; 4] = [
    "Set up automatic transfers to a savings account on payday",
    "Review your subscription services and cancel unused ones",
    "Set specific savings goals to stay motivated",
    "Look for ways to reduce your highest expense categories",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsightKind {
    Alert,
    Savings,
    Balance,
}

impl InsightKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Savings => "savings",
            Self::Balance => "balance",
        }
    }
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Insight {
    pub(crate) kind: InsightKind,
    pub(crate) message: String,
}

impl Insight {
    fn new(kind: InsightKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

type Rule = fn(&Summary) -> Option<Insight>;

const RULES: [Rule; 3] = [overspent_rule, saving_well_rule, balance_rule];

/// Evaluate every rule in order and collect the insights that fire.
pub(crate) fn generate(summary: &Summary) -> Vec<Insight> {
    RULES.iter().filter_map(|rule| rule(summary)).collect()
}

fn join_names<'a>(totals: impl Iterator<Item = &'a CategoryTotal>) -> Option<String> {
    let names: Vec<&str> = totals.map(|c| c.category.name.as_str()).collect();
    if names.is_empty() {
        None
    } else {
        Some(names.join(", "))
    }
}

fn overspent_rule(summary: &Summary) -> Option<Insight> {
    let names = join_names(summary.categories.iter().filter(|c| c.is_over_budget()))?;
    Some(Insight::new(
        InsightKind::Alert,
        format!("You've overspent in {names}!"),
    ))
}

fn saving_well_rule(summary: &Summary) -> Option<Insight> {
    let names = join_names(
        summary
            .categories
            .iter()
            .filter(|c| c.remaining > c.budget() * SAVING_WELL_RATIO),
    )?;
    Some(Insight::new(
        InsightKind::Savings,
        format!("You're saving well in {names}!"),
    ))
}

fn balance_rule(summary: &Summary) -> Option<Insight> {
    let balance = summary.balance();
    if balance.is_negative() {
        Some(Insight::new(
            InsightKind::Balance,
            "Watch out! You're spending more than you earn this month.",
        ))
    } else if balance > summary.total_income * SAVINGS_RATE {
        Some(Insight::new(
            InsightKind::Balance,
            "Great job! You're saving more than 30% of your income.",
        ))
    } else {
        None
    }
}

// ── Per-category recommendations ──────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RecommendationKind {
    Overspent,
    NearLimit,
    Underused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Recommendation {
    pub(crate) name: String,
    pub(crate) icon: String,
    pub(crate) kind: RecommendationKind,
    pub(crate) message: String,
}

/// One recommendation per category that needs attention, in category order.
/// The first matching condition wins.
pub(crate) fn recommendations(summary: &Summary) -> Vec<Recommendation> {
    summary.categories.iter().filter_map(recommend).collect()
}

fn recommend(total: &CategoryTotal) -> Option<Recommendation> {
    let name = &total.category.name;
    let budget = total.budget();
    let (kind, message) = if total.is_over_budget() {
        (
            RecommendationKind::Overspent,
            format!("You've overspent in {name}. Try to cut back for the rest of the month."),
        )
    } else if total.spent > budget * NEAR_LIMIT_RATIO {
        (
            RecommendationKind::NearLimit,
            format!("You're close to your {name} budget. Be careful with additional spending."),
        )
    } else if total.spent < budget * UNDERUSED_RATIO {
        (
            RecommendationKind::Underused,
            format!("You've used very little of your {name} budget. Is this budget set correctly?"),
        )
    } else {
        return None;
    };

    Some(Recommendation {
        name: name.clone(),
        icon: total.category.icon.clone(),
        kind,
        message,
    })
}

/// How much could be saved per month: a fixed share of total income.
pub(crate) fn savings_potential(total_income: Amount) -> Amount {
    total_income * SAVINGS_POTENTIAL_RATIO
}
