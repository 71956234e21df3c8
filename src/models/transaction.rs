use chrono::NaiveDate;

use super::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "out" => Some(Self::Expense),
            _ => None,
        }
    }

    /// The other kind; used by the entry form to cycle the selection.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// Prefix shown in front of amounts in transaction lists.
    pub fn sign(&self) -> &'static str {
        match self {
            Self::Income => "+",
            Self::Expense => "-",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub description: String,
    pub amount: Amount,
    pub category_id: i64,
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// `YYYY-MM` of the transaction date.
    pub fn month(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}
