use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Neg, Sub, SubAssign};

/// A signed monetary value in a single currency unit.
///
/// Wraps `rust_decimal::Decimal` so balances and fees never lose precision to
/// binary floating point or integer division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.normalize(), f)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Splits an amount evenly; the caller guarantees a non-zero divisor.
impl Div<u32> for Money {
    type Output = Self;
    fn div(self, rhs: u32) -> Self::Output {
        Self(self.0 / Decimal::from(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(dec!(10.0));
        let b = Money::new(dec!(2.5));
        assert_eq!(a + b, Money::new(dec!(12.5)));
        assert_eq!(a - b, Money::new(dec!(7.5)));
        assert_eq!(-b, Money::new(dec!(-2.5)));
    }

    #[test]
    fn test_money_division_keeps_fraction() {
        assert_eq!(Money::from(30) / 4, Money::new(dec!(7.5)));
        assert_eq!(Money::from(30) / 3, Money::from(10));
    }

    #[test]
    fn test_money_sign() {
        assert!(Money::new(dec!(-0.01)).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(!Money::new(dec!(-0.0)).is_negative());
    }

    #[test]
    fn test_money_display_is_normalized() {
        assert_eq!(Money::new(dec!(15.00)).to_string(), "15");
        assert_eq!(Money::new(dec!(0.50)).to_string(), "0.5");
    }
}
