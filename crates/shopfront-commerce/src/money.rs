//! Money type for representing monetary values.
//!
//! Amounts are held as integer cents in a single implicit currency. Decimal
//! inputs are rounded to cents with round-half-up (midpoint away from zero),
//! never truncated.

use crate::error::CommerceError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Number of decimal places in a displayed amount.
pub const DECIMAL_PLACES: u32 = 2;

/// Currency symbol used for display.
pub const CURRENCY_SYMBOL: &str = "$";

/// Round an exact decimal amount to cents, half-up.
///
/// ```
/// use rust_decimal::Decimal;
/// use shopfront_commerce::money::round_half_up;
///
/// assert_eq!(round_half_up(Decimal::new(10005, 3)), Decimal::new(1001, 2));
/// assert_eq!(round_half_up(Decimal::new(10004, 3)), Decimal::new(1000, 2));
/// ```
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// A monetary value in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub const fn from_cents(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a zero amount.
    pub const fn zero() -> Self {
        Self::from_cents(0)
    }

    /// Create a Money value from an exact decimal amount, rounding half-up.
    pub fn from_decimal(amount: Decimal) -> Result<Self, CommerceError> {
        round_half_up(amount)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .map(Self::from_cents)
            .ok_or(CommerceError::Overflow)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value with two places.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.amount_cents, DECIMAL_PLACES)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        self.to_decimal().to_string()
    }

    /// Try to add another Money value, returning None on overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(Money::from_cents)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.amount_cents + other.amount_cents)
    }
}

impl FromStr for Money {
    type Err = CommerceError;

    /// Parse a non-negative decimal amount such as `"2.00"` or `"$2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);
        let amount = Decimal::from_str(digits)
            .map_err(|e| CommerceError::InvalidAmount(format!("{:?}: {}", s, e)))?;
        if amount.is_sign_negative() {
            return Err(CommerceError::InvalidAmount(format!(
                "{:?}: must not be negative",
                s
            )));
        }
        Money::from_decimal(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal_exact() {
        let m = Money::from_decimal(Decimal::new(1550, 2)).unwrap();
        assert_eq!(m.amount_cents, 1550);
    }

    #[test]
    fn test_money_rounds_half_up() {
        assert_eq!(
            Money::from_decimal(Decimal::new(2345, 3)).unwrap().amount_cents,
            235
        );
        assert_eq!(
            Money::from_decimal(Decimal::new(2344, 3)).unwrap().amount_cents,
            234
        );
        // Banker's rounding would give 2.34 here.
        assert_eq!(
            Money::from_decimal(Decimal::new(23450, 4)).unwrap().amount_cents,
            235
        );
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(1750).display(), "$17.50");
        assert_eq!(Money::from_cents(200).display(), "$2.00");
        assert_eq!(Money::from_cents(5).display(), "$0.05");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::from_cents(1550);
        let b = Money::from_cents(200);
        assert_eq!((a + b).amount_cents, 1750);
        assert_eq!(a.try_add(&b), Some(Money::from_cents(1750)));
        assert_eq!(Money::from_cents(i64::MAX).try_add(&b), None);
    }

    #[test]
    fn test_money_parse() {
        assert_eq!("2.00".parse::<Money>().unwrap(), Money::from_cents(200));
        assert_eq!("$3.5".parse::<Money>().unwrap(), Money::from_cents(350));
        assert_eq!(" 0 ".parse::<Money>().unwrap(), Money::zero());
        assert!("-1.00".parse::<Money>().is_err());
        assert!("two".parse::<Money>().is_err());
    }

    #[test]
    fn test_money_overflow() {
        assert_eq!(
            Money::from_decimal(Decimal::MAX),
            Err(CommerceError::Overflow)
        );
    }
}
