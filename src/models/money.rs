//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (kopecks, cents) as i64 to avoid
//! floating-point precision issues.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use thiserror::Error;

/// Currency symbol used by `Display`
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₽";

/// A monetary amount stored as minor units (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use expenses::models::Money;
    /// let amount = Money::from_minor(150050); // 1500.50
    /// assert_eq!(amount.to_string(), "1500.50 ₽");
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole units and minor units
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        Self(major * 100 + minor)
    }

    /// Convert a decimal amount such as `1500.5`, rounding to the nearest minor unit
    pub fn from_major(value: f64) -> Result<Self, MoneyParseError> {
        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(value.to_string()));
        }
        let scaled = (value * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if scaled >= i64::MAX as f64 || scaled < i64::MIN as f64 {
            return Err(MoneyParseError::InvalidFormat(value.to_string()));
        }
        Ok(Self(scaled as i64))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// The minor part (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a decimal number, for machine-readable exports
    pub fn to_major_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Divide by a positive count, rounding half away from zero
    pub fn div_round(&self, divisor: i64) -> Self {
        if divisor <= 0 {
            return *self;
        }
        let half = divisor / 2;
        let rounded = if self.0 >= 0 {
            self.0.saturating_add(half) / divisor
        } else {
            self.0.saturating_sub(half) / divisor
        };
        Self(rounded)
    }

    /// Share of `total` as a percentage (0.0 when total is zero)
    pub fn percentage_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            0.0
        } else {
            self.0 as f64 / total.0 as f64 * 100.0
        }
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "1500", "1500.5", "1500,50", "1 500,50", "-10.50" and a
    /// trailing "₽" or leading "$".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let cleaned: String = s
            .trim()
            .trim_end_matches(DEFAULT_CURRENCY_SYMBOL)
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        let (negative, rest) = match cleaned.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, cleaned.as_str()),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        if rest.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());
        let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());

        let minor = match rest.split_once('.') {
            Some((major_str, minor_str)) => {
                if !digits(major_str) || !digits(minor_str) {
                    return Err(invalid());
                }
                let major: i64 = if major_str.is_empty() {
                    0
                } else {
                    major_str.parse().map_err(|_| invalid())?
                };
                let minor: i64 = match minor_str.len() {
                    0 => 0,
                    1 => minor_str.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => minor_str[..2].parse().map_err(|_| invalid())?,
                };
                major
                    .checked_mul(100)
                    .and_then(|m| m.checked_add(minor))
                    .ok_or_else(invalid)?
            }
            None if !digits(rest) => return Err(invalid()),
            None => rest
                .parse::<i64>()
                .ok()
                .and_then(|m| m.checked_mul(100))
                .ok_or_else(invalid)?,
        };

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Format with a currency symbol placed after the amount
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let number = format!("{}{}.{:02}", sign, self.major().abs(), self.minor_part());
        if symbol.is_empty() {
            number
        } else {
            format!("{} {}", number, symbol)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

// Amounts saturate at the i64 bounds instead of wrapping
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
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
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Amount is empty")]
    Empty,
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}
