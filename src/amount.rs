//! Signed decimal currency values.
//!
//! Negativity is deliberately not ruled out by the type: account rules decide
//! whether a negative amount is an invalid operation, and in which order that
//! check runs relative to the funds check.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency amount with decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero units of currency.
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Create an amount of `units * 10^-scale` currency units.
    pub fn new(units: i64, scale: u32) -> Amount {
        Amount(Decimal::new(units, scale))
    }

    /// `true` when the amount is below zero.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Amount)
    }
}

impl Add for Amount {
    type Output = Amount;
    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Amount;
    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::Amount;

    #[test]
    fn parses_and_trims() {
        let a: Amount = " 100.5 ".parse().unwrap();
        assert_eq!(a, Amount::new(1005, 1));
        assert!("abc".parse::<Amount>().is_err());
    }

    #[test]
    fn negative_amounts_are_representable() {
        let a: Amount = "-5".parse().unwrap();
        assert!(a.is_negative());
        assert!(!Amount::ZERO.is_negative());
    }

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(Amount::new(15, 1).to_string(), "1.50");
        assert_eq!(Amount::new(1000, 0).to_string(), "1000.00");
    }

    #[test]
    fn arithmetic() {
        let mut a = Amount::new(100, 0);
        a += Amount::new(50, 0);
        a -= Amount::new(25, 0);
        assert_eq!(a, Amount::new(125, 0));
        assert_eq!(a - a, Amount::ZERO);
    }
}
