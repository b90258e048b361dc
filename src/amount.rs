//! Protect before using zero or negative amount for deposits and withdraws.

use std::{borrow::Borrow, fmt, ops::Deref};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represent strictly positive financial amount of money
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Create new amount from `num` with `scale` decimal places.
    ///
    /// Returns `None` when `num` is zero or `scale` is above 28.
    pub fn new(num: u64, scale: u32) -> Option<Amount> {
        Decimal::try_from_i128_with_scale(num.into(), scale)
            .ok()
            .and_then(|value| value.try_into().ok())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("amount must be greater than zero")]
/// represent error when transaction want to operate on zero or negative amount of money
pub struct NonPositiveAmountErr;

impl TryFrom<Decimal> for Amount {
    type Error = NonPositiveAmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value <= Decimal::ZERO {
            Err(NonPositiveAmountErr)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod test {
    use super::{Amount, NonPositiveAmountErr};
    use rust_decimal::Decimal;

    #[test]
    fn zero_and_negative_are_rejected() {
        assert_eq!(Amount::try_from(Decimal::ZERO), Err(NonPositiveAmountErr));
        assert_eq!(Amount::try_from(Decimal::new(-1, 2)), Err(NonPositiveAmountErr));
        assert_eq!(Amount::new(0, 3), None);
    }

    #[test]
    fn scale_out_of_range() {
        assert_eq!(Amount::new(1, 29), None);
        assert!(Amount::new(1, 28).is_some());
    }

    #[test]
    fn positive_keeps_scale() {
        let a = Amount::new(1050, 2).unwrap();
        assert_eq!(*a, Decimal::new(1050, 2));
        assert_eq!(format!("{:.2}", a), "10.50");
    }
}
