//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that totals over many entries
//! never drift. Provides safe arithmetic, parsing of form input and
//! locale-neutral formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from user input, 999.999.999.999,99
    pub const MAX_INPUT: Money = Money(99_999_999_999_999);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// let amount = Money::from_units_cents(150, 50);
    /// assert_eq!(amount.cents(), 15050);
    /// ```
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add two amounts, returning `None` on overflow
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Share of `total` represented by this amount, as a percentage
    ///
    /// Returns 0.0 when `total` is zero.
    pub fn percentage_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            0.0
        } else {
            (self.0 as f64 / total.0 as f64) * 100.0
        }
    }

    /// Parse a money amount with `.` as the decimal separator
    ///
    /// See [`Money::parse_localized`].
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        Self::parse_localized(s, '.')
    }

    /// Parse a money amount from form input
    ///
    /// Accepts "12", "12.5", "R$ 12,50", "$1,234.56" and "1.234,56". When
    /// both `.` and `,` appear, the last one is the decimal separator. When
    /// only one of them appears, a single `decimal_separator` is the decimal
    /// point; otherwise text shaped like digit grouping ("1,234",
    /// "1.000.000") is read as whole units, and a lone separator that is
    /// not grouping ("12.50" with `,` as decimal) is still a decimal point.
    /// A third decimal digit rounds the cents half up.
    ///
    /// Amounts above [`Money::MAX_INPUT`] are rejected as out of range.
    ///
    /// # Examples
    /// ```
    /// use expense_ledger::models::Money;
    /// assert_eq!(Money::parse_localized("1.234", ',').unwrap().cents(), 123400);
    /// assert_eq!(Money::parse_localized("1,234", '.').unwrap().cents(), 123400);
    /// assert_eq!(Money::parse_localized("12.50", ',').unwrap().cents(), 1250);
    /// ```
    pub fn parse_localized(s: &str, decimal_separator: char) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, s),
        };

        let rest = rest
            .strip_prefix("R$")
            .or_else(|| rest.strip_prefix('$'))
            .unwrap_or(rest)
            .trim();

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let decimal_pos = match (rest.contains('.'), rest.contains(',')) {
            (false, false) => None,
            (true, true) => rest.rfind(['.', ',']),
            (has_dot, _) => {
                let separator = if has_dot { '.' } else { ',' };
                let count = rest.matches(separator).count();
                if count == 1 && separator == decimal_separator {
                    rest.rfind(separator)
                } else if is_digit_grouping(rest, separator) {
                    None
                } else if count == 1 {
                    rest.rfind(separator)
                } else {
                    return Err(invalid());
                }
            }
        };

        let normalized = match decimal_pos {
            Some(pos) => {
                let grouping = if rest.as_bytes()[pos] == b'.' { ',' } else { '.' };
                let (whole, fraction) = rest.split_at(pos);
                let whole: String = whole.chars().filter(|c| *c != grouping).collect();
                format!("{}.{}", whole, &fraction[1..])
            }
            None => rest.chars().filter(|c| *c != '.' && *c != ',').collect(),
        };

        let (whole, fraction) = match normalized.split_once('.') {
            Some((w, f)) => (w, f),
            None => (normalized.as_str(), ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let out_of_range = || MoneyParseError::OutOfRange(s.to_string());

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        let digits: Vec<i64> = fraction
            .chars()
            .take(3)
            .map(|c| i64::from(c as u8 - b'0'))
            .collect();
        let mut cents = digits.first().copied().unwrap_or(0) * 10
            + digits.get(1).copied().unwrap_or(0);
        if digits.get(2).copied().unwrap_or(0) >= 5 {
            cents += 1;
        }

        let total = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .filter(|c| *c <= Self::MAX_INPUT.0)
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with explicit separators, e.g. `format_grouped('.', ',')`
    /// gives "1,234.56" and `format_grouped(',', '.')` gives "1.234,56"
    pub fn format_grouped(&self, decimal_separator: char, grouping_separator: char) -> String {
        let digits = self.units().abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(grouping_separator);
            }
            grouped.push(c);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}{:02}",
            sign,
            grouped,
            decimal_separator,
            self.cents_part()
        )
    }
}

/// "1,234" or "1.234.567": a 1-3 digit lead group, then groups of exactly 3
fn is_digit_grouping(s: &str, separator: char) -> bool {
    let all_digits = |g: &str| g.bytes().all(|b| b.is_ascii_digit());
    let mut groups = s.split(separator);
    let lead_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && all_digits(g));
    lead_ok && groups.all(|g| g.len() == 3 && all_digits(g))
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "not a number: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "amount too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
