//! Monetary amounts held in cents.
//!
//! `Money` wraps `rust_decimal::Decimal` at a fixed scale of 2. Every value
//! that exists has exactly two decimal places, and arithmetic is checked:
//! results that cannot keep cent precision are refused instead of rounded or
//! allowed to panic.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when reading an amount from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseMoneyError {
    #[error("not a decimal number: {0}")]
    Invalid(String),

    /// Too many integer digits to keep two decimal places.
    #[error("amount {0} is out of range")]
    OutOfRange(String),
}

/// An amount of money with cent precision.
///
/// Signed, so that zero and negative requests can reach the account rules
/// and be rejected there. Inputs with more than two decimal places are
/// rounded to cents.
///
/// # Range
///
/// The magnitude is bounded by `792281625142643375935439503.35`, the largest
/// 96-bit mantissa at scale 2. Parsing refuses anything larger and
/// [`Money::checked_add`] returns `None` when a sum would pass it.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bank_ledger::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// assert!(Money::from_str("79228162514264337593543950335").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// Decimal places kept by every value.
    pub const SCALE: u32 = 2;

    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Brings `value` to cent scale, or `None` if it is too large to carry
    /// two decimal places.
    fn from_decimal(value: Decimal) -> Option<Self> {
        let mut cents = value;
        cents.rescale(Self::SCALE);
        (cents.scale() == Self::SCALE).then_some(Money(cents))
    }

    /// Creates a value from whole currency units.
    pub fn from_units(units: i64) -> Self {
        let mut cents = Decimal::from(units);
        cents.rescale(Self::SCALE);
        Money(cents)
    }

    /// Sum of two amounts, `None` if it leaves the representable range.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).and_then(Money::from_decimal)
    }

    /// Difference of two amounts, `None` if it leaves the representable range.
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).and_then(Money::from_decimal)
    }

    /// Returns `true` if this value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = Decimal::from_str(trimmed)
            .map_err(|e| ParseMoneyError::Invalid(e.to_string()))?;
        Money::from_decimal(value).ok_or_else(|| ParseMoneyError::OutOfRange(trimmed.to_string()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LARGEST: &str = "792281625142643375935439503.35";

    fn money(s: &str) -> Money {
        Money::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_keeps_cents() {
        assert_eq!(money("1").to_string(), "1.00");
        assert_eq!(money("  2.5  ").to_string(), "2.50");
        assert_eq!(money("1.124").to_string(), "1.12");
        assert_eq!(money("1.126").to_string(), "1.13");
        assert_eq!(Money::from_units(500).to_string(), "500.00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Money::from_str("abc"),
            Err(ParseMoneyError::Invalid(_))
        ));
        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("10,00").is_err());
    }

    #[test]
    fn test_parse_range_limit() {
        assert_eq!(money(LARGEST).to_string(), LARGEST);
        assert_eq!(
            Money::from_str("79228162514264337593543950335"),
            Err(ParseMoneyError::OutOfRange(
                "79228162514264337593543950335".to_string()
            ))
        );
        assert!(Money::from_str("792281625142643375935439504").is_err());
    }

    #[test]
    fn test_checked_add_and_sub() {
        assert_eq!(money("1.5").checked_add(money("2.5")), Some(money("4")));
        assert_eq!(money("2.5").checked_sub(money("1.5")), Some(money("1")));
        assert_eq!(money("1").checked_sub(money("3")), Some(money("-2")));
    }

    #[test]
    fn test_checked_add_refuses_overflow() {
        assert_eq!(money(LARGEST).checked_add(money("0.01")), None);
        assert_eq!(money(LARGEST).checked_add(money(LARGEST)), None);
        assert_eq!(
            money(LARGEST).checked_sub(money("0.01")),
            Some(money("792281625142643375935439503.34"))
        );
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::from_units(1).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(Money::ZERO.is_zero());
        assert!(!money("-0.01").is_positive());
    }
}
