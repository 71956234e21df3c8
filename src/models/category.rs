use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: String,
    /// Monthly spending limit.
    pub budget: Decimal,
    /// Display color as `#RRGGBB`.
    pub color: String,
}

impl Category {
    pub fn new(id: i64, name: &str, icon: &str, budget: Decimal, color: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            budget,
            color: color.to_string(),
        }
    }

    /// Find a category by name (case-insensitive) in a slice.
    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        let lower = name.to_lowercase();
        categories.iter().find(|c| c.name.to_lowercase() == lower)
    }

    /// Find a category by ID in a slice.
    pub fn find_by_id(categories: &[Category], id: i64) -> Option<&Category> {
        categories.iter().find(|c| c.id == id)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
