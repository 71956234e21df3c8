//! The in-memory state of one BudgetKat session.
//!
//! A [`Session`] is a plain value. Every user action consumes the current
//! snapshot and returns the next one; nothing here touches the terminal or
//! the filesystem.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::aggregate::{self, Summary};
use crate::models::{Amount, Category, Transaction, TransactionKind};

/// How many transactions the dashboard lists as "recent".
pub(crate) const RECENT_COUNT: usize = 5;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum View {
    #[default]
    Dashboard,
    Transactions,
    Reports,
    Insights,
}

impl View {
    pub(crate) fn all() -> &'static [View] {
        &[
            Self::Dashboard,
            Self::Transactions,
            Self::Reports,
            Self::Insights,
        ]
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" | "overview" | "d" => Some(Self::Dashboard),
            "transactions" | "t" => Some(Self::Transactions),
            "reports" | "r" => Some(Self::Reports),
            "insights" | "i" => Some(Self::Insights),
            _ => None,
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Reports => write!(f, "Reports"),
            Self::Insights => write!(f, "Insights"),
        }
    }
}

/// Fields of the transaction entry form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DraftField {
    Description,
    Amount,
    Category,
    Kind,
    Date,
}

impl DraftField {
    pub(crate) fn all() -> &'static [DraftField] {
        &[
            Self::Description,
            Self::Amount,
            Self::Category,
            Self::Kind,
            Self::Date,
        ]
    }

    /// Whether the field takes free text rather than a choice.
    pub(crate) fn is_text(&self) -> bool {
        matches!(self, Self::Description | Self::Amount | Self::Date)
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Description => write!(f, "Description"),
            Self::Amount => write!(f, "Amount"),
            Self::Category => write!(f, "Category"),
            Self::Kind => write!(f, "Type"),
            Self::Date => write!(f, "Date"),
        }
    }
}

/// The entry form's not-yet-submitted transaction. Amount and date hold the
/// raw text typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Draft {
    pub(crate) description: String,
    pub(crate) amount: String,
    pub(crate) category_id: i64,
    pub(crate) kind: TransactionKind,
    pub(crate) date: String,
}

impl Draft {
    pub(crate) fn new(default_category: i64, today: NaiveDate) -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            category_id: default_category,
            kind: TransactionKind::Expense,
            date: today.format(DATE_FORMAT).to_string(),
        }
    }

    pub(crate) fn get(&self, field: DraftField) -> String {
        match field {
            DraftField::Description => self.description.clone(),
            DraftField::Amount => self.amount.clone(),
            DraftField::Category => self.category_id.to_string(),
            DraftField::Kind => self.kind.as_str().to_string(),
            DraftField::Date => self.date.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub(crate) categories: Vec<Category>,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) draft: Draft,
    pub(crate) view: View,
}

impl Session {
    pub(crate) fn new(categories: Vec<Category>, today: NaiveDate) -> Self {
        let draft = Draft::new(default_category_id(&categories), today);
        Self {
            categories,
            transactions: Vec::new(),
            draft,
            view: View::Dashboard,
        }
    }

    /// Default categories plus the sample transactions a new session starts with.
    pub(crate) fn seeded(today: NaiveDate) -> Self {
        let mut session = Self::new(default_categories(), today);
        session.transactions = sample_transactions();
        info!(
            transactions = session.transactions.len(),
            "Seeded session with sample data"
        );
        session
    }

    pub(crate) fn with_view(mut self, view: View) -> Self {
        if self.view != view {
            debug!(from = %self.view, to = %view, "Switching view");
        }
        self.view = view;
        self
    }

    /// Set one draft field from its textual value. Category takes a category
    /// id, kind takes `income` or `expense`; values that do not parse leave
    /// the field unchanged.
    pub(crate) fn with_draft_field(mut self, field: DraftField, value: &str) -> Self {
        match field {
            DraftField::Description => self.draft.description = value.to_string(),
            DraftField::Amount => self.draft.amount = value.to_string(),
            DraftField::Date => self.draft.date = value.to_string(),
            DraftField::Category => match value.trim().parse::<i64>() {
                Ok(id) => self.draft.category_id = id,
                Err(_) => debug!(value, "Ignoring non-numeric category id"),
            },
            DraftField::Kind => match TransactionKind::parse(value) {
                Some(kind) => self.draft.kind = kind,
                None => debug!(value, "Ignoring unknown transaction kind"),
            },
        }
        self
    }

    /// Move the draft's category selection `delta` steps through the category
    /// list, wrapping at both ends.
    pub(crate) fn with_draft_category_step(mut self, delta: i32) -> Self {
        let len = self.categories.len();
        if len == 0 {
            return self;
        }
        let current = self
            .categories
            .iter()
            .position(|c| c.id == self.draft.category_id)
            .unwrap_or(0);
        let next = (current as i64 + delta as i64).rem_euclid(len as i64) as usize;
        self.draft.category_id = self.categories[next].id;
        self
    }

    /// Turn the draft into a transaction, append it to the log and reset the
    /// draft. The amount text is coerced without validation; text that is not
    /// a number becomes NaN. A draft date that does not parse falls back to
    /// `today`.
    pub(crate) fn submit_draft(mut self, today: NaiveDate) -> Self {
        let amount = Amount::parse(&self.draft.amount);
        let date = NaiveDate::parse_from_str(self.draft.date.trim(), DATE_FORMAT).unwrap_or(today);
        let transaction = Transaction {
            id: self.next_id(),
            description: self.draft.description.clone(),
            amount,
            category_id: self.draft.category_id,
            kind: self.draft.kind,
            date,
        };

        if amount.is_nan() {
            warn!(
                id = transaction.id,
                input = %self.draft.amount,
                "Amount is not a number; totals for this transaction will be NaN"
            );
        }
        info!(
            id = transaction.id,
            kind = %transaction.kind,
            amount = %transaction.amount,
            category = transaction.category_id,
            "Added transaction"
        );

        self.transactions.push(transaction);
        self.draft = Draft::new(default_category_id(&self.categories), today);
        self
    }

    /// Ids are one past the highest existing id, which is the log length
    /// plus one while nothing is ever removed.
    pub(crate) fn next_id(&self) -> i64 {
        self.transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    pub(crate) fn category(&self, id: i64) -> Option<&Category> {
        Category::find_by_id(&self.categories, id)
    }

    pub(crate) fn summary(&self) -> Summary {
        aggregate::summarize(&self.categories, &self.transactions)
    }

    /// The last `n` transactions, newest first.
    pub(crate) fn recent(&self, n: usize) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().rev().take(n)
    }
}

fn default_category_id(categories: &[Category]) -> i64 {
    categories.first().map_or(1, |c| c.id)
}

pub(crate) fn default_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Food", "🐟", Decimal::from(500), "#FF6384"),
        Category::new(2, "Transport", "🧶", Decimal::from(300), "#36A2EB"),
        Category::new(3, "Utilities", "🐾", Decimal::from(200), "#FFCE56"),
        Category::new(4, "Entertainment", "🧸", Decimal::from(150), "#4BC0C0"),
    ]
}

pub(crate) fn sample_transactions() -> Vec<Transaction> {
    let rows: [(&str, i64, i64, TransactionKind, u32); 5] = [
        ("Grocery shopping", 7550, 1, TransactionKind::Expense, 5),
        ("Gas", 4500, 2, TransactionKind::Expense, 7),
        ("Electricity bill", 12000, 3, TransactionKind::Expense, 10),
        ("Movie tickets", 3000, 4, TransactionKind::Expense, 1),
        // Salary carries a category id but, being income, never counts as spend.
        ("Salary", 200000, 1, TransactionKind::Income, 1),
    ];

    rows.iter()
        .zip(1..)
        .filter_map(|(&(description, cents, category_id, kind, day), id)| {
            Some(Transaction {
                id,
                description: description.to_string(),
                amount: Amount::new(Decimal::new(cents, 2)),
                category_id,
                kind,
                date: NaiveDate::from_ymd_opt(2025, 4, day)?,
            })
        })
        .collect()
}
