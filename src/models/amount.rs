use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// A currency amount that may be "not a number".
///
/// Amounts typed into the entry form are not validated beyond the widget
/// checks, so text like `abc` still produces a stored amount. That amount is
/// NaN: it poisons every sum it takes part in, compares false against
/// everything and is never equal to anything, itself included.
#[derive(Debug, Clone, Copy)]
pub struct Amount(Option<Decimal>);

impl Amount {
    pub const ZERO: Amount = Amount(Some(Decimal::ZERO));
    pub const NAN: Amount = Amount(None);

    pub fn new(value: Decimal) -> Self {
        Self(Some(value))
    }

    /// Coerce user text to an amount. Surrounding whitespace is ignored and
    /// an empty string is zero. Plain and scientific notation are numbers;
    /// digit separators (`1_000`, `1,000`) and anything else make NaN.
    ///
    /// Numbers outside what a `Decimal` holds still count as numbers: values
    /// too small in magnitude round to zero and values too large clamp to
    /// `Decimal::MAX` / `Decimal::MIN`.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return Self::ZERO;
        }
        if s.contains('_') {
            return Self::NAN;
        }
        if let Ok(v) = Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)) {
            return Self::new(v);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Self::new(Self::fit(v)),
            _ => Self::NAN,
        }
    }

    fn fit(v: f64) -> Decimal {
        if let Some(d) = Decimal::from_f64(v) {
            return d;
        }
        if v.abs() < 1.0 {
            Decimal::ZERO
        } else if v > 0.0 {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    }

    pub fn value(&self) -> Option<Decimal> {
        self.0
    }

    pub fn is_nan(&self) -> bool {
        self.0.is_none()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_some_and(|v| v < Decimal::ZERO)
    }

    pub fn abs(&self) -> Self {
        Self(self.0.map(|v| v.abs()))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.0, other.0), (Some(a), Some(b)) if a == b)
    }
}

impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => None,
        }
    }
}

impl PartialEq<Decimal> for Amount {
    fn eq(&self, other: &Decimal) -> bool {
        self.0 == Some(*other)
    }
}

impl PartialOrd<Decimal> for Amount {
    fn partial_cmp(&self, other: &Decimal) -> Option<Ordering> {
        self.0.map(|v| v.cmp(other))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        match (self.0, rhs.0) {
            (Some(a), Some(b)) => a.checked_add(b).map_or(Self::NAN, Self::new),
            _ => Self::NAN,
        }
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        match (self.0, rhs.0) {
            (Some(a), Some(b)) => a.checked_sub(b).map_or(Self::NAN, Self::new),
            _ => Self::NAN,
        }
    }
}

impl Mul<Decimal> for Amount {
    type Output = Amount;

    fn mul(self, rhs: Decimal) -> Amount {
        self.0
            .and_then(|v| v.checked_mul(rhs))
            .map_or(Self::NAN, Self::new)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, a| acc + a)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.2}"),
            None => write!(f, "NaN"),
        }
    }
}
