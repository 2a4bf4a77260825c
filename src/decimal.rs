//! Fixed-point money type with 2 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so balances never
//! pick up floating-point drift.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// A monetary amount that maintains exactly 2 decimal places.
///
/// Values that carry more precision are rounded half away from zero.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bank_ledger::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money` from a `Decimal`, rounding to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized =
            value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        normalized.rescale(Self::SCALE);
        Money(normalized)
    }

    /// Whole currency units, usable in constants.
    pub const fn from_whole(units: u32) -> Self {
        Money(Decimal::from_parts(units * 100, 0, 0, false, Self::SCALE))
    }

    /// Returns `true` if this value is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `true` if this value is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Grows the amount by `rate`, i.e. `self * (1 + rate)`.
    pub fn with_rate(self, rate: Decimal) -> Self {
        Money::new(self.0 * (Decimal::ONE + rate))
    }

    /// `self + rhs`, or `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Money::new)
    }

    /// `self - rhs`, or `None` on overflow.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Money::new)
    }

    /// [`with_rate`](Self::with_rate), or `None` on overflow.
    pub fn checked_with_rate(self, rate: Decimal) -> Option<Self> {
        let factor = Decimal::ONE.checked_add(rate)?;
        self.0.checked_mul(factor).map(Money::new)
    }

    /// Returns the underlying decimal.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money::new(value)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money::new(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::new(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}
