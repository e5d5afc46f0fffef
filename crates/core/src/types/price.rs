//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price must be a non-negative number")]
    Negative,
    /// The amount is not representable as a decimal (NaN, infinity).
    #[error("price is not a valid number")]
    NotANumber,
}

/// A non-negative monetary amount with 2-place precision.
///
/// Prices are stored as fixed-precision decimals and only converted to
/// floating point at the serialization boundary, so arithmetic and
/// comparisons never suffer binary-float drift.
///
/// ## Examples
///
/// ```
/// use stockroom_core::Price;
///
/// let price = Price::from_f64(19.99).unwrap();
/// assert_eq!(price.to_f64(), 19.99);
///
/// assert!(Price::from_f64(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Number of decimal places a price is stored with.
    pub const SCALE: u32 = 2;

    /// Create a `Price` from a decimal amount, rescaling to 2 places.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::Negative);
        }

        Ok(Self(amount.round_dp(Self::SCALE)))
    }

    /// Create a `Price` from a floating-point amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotANumber`] for NaN or infinite inputs and
    /// [`PriceError::Negative`] for amounts below zero.
    pub fn from_f64(amount: f64) -> Result<Self, PriceError> {
        let decimal = Decimal::from_f64_retain(amount).ok_or(PriceError::NotANumber)?;
        Self::new(decimal)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Render the price as a floating-point number.
    ///
    /// This is the representation used in API responses; the stored value
    /// keeps its fixed precision.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rescales_to_two_places() {
        let price = Price::new(Decimal::new(19_999, 3)).unwrap(); // 19.999
        assert_eq!(price.amount(), Decimal::new(2000, 2)); // 20.00
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(
            Price::new(Decimal::new(-1, 0)),
            Err(PriceError::Negative)
        ));
    }

    #[test]
    fn test_zero_is_valid() {
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::from_f64(0.0).is_ok());
    }

    #[test]
    fn test_from_f64() {
        let price = Price::from_f64(19.99).unwrap();
        assert_eq!(price.to_f64(), 19.99);
    }

    #[test]
    fn test_from_f64_rejects_negative() {
        assert!(matches!(Price::from_f64(-0.01), Err(PriceError::Negative)));
    }

    #[test]
    fn test_from_f64_rejects_nan_and_infinity() {
        assert!(matches!(
            Price::from_f64(f64::NAN),
            Err(PriceError::NotANumber)
        ));
        assert!(matches!(
            Price::from_f64(f64::INFINITY),
            Err(PriceError::NotANumber)
        ));
    }

    #[test]
    fn test_display() {
        let price = Price::from_f64(5.0).unwrap();
        assert_eq!(format!("{price}"), "5.00");
    }
}
