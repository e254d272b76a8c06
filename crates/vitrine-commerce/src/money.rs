//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The remote API
//! serves prices as plain decimal numbers, so wire-facing fields go
//! through the [`serde_decimal`] / [`serde_decimal_opt`] adapters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    MXN,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::MXN => "MXN",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::MXN => "MX$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents
/// for USD). Arithmetic saturates rather than wrapping, so totals stay
/// well-defined for any input the UI can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use vitrine_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }

    /// Multiply by a scalar, saturating on overflow.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Try to subtract another Money value, returning None if currencies
    /// don't match.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents - other.amount_cents,
            self.currency,
        ))
    }

    /// Sum an iterator of Money values, saturating on overflow.
    ///
    /// Values in a different currency than the requested one are ignored;
    /// a cart never mixes currencies in practice.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.filter(|m| m.currency == currency)
            .fold(Money::zero(currency), |acc, m| {
                Money::new(acc.amount_cents.saturating_add(m.amount_cents), currency)
            })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde adapter for price fields the API serves as decimal numbers.
///
/// The store currency is fixed (`Currency::default()`); the wire carries
/// no currency code.
pub mod serde_decimal {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_decimal(amount, Currency::default()))
    }
}

/// Like [`serde_decimal`], for optional price fields.
pub mod serde_decimal_opt {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        money: &Option<Money>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match money {
            Some(m) => serializer.serialize_some(&m.to_decimal()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Money>, D::Error> {
        let amount = Option::<f64>::deserialize(deserializer)?;
        Ok(amount.map(|a| Money::from_decimal(a, Currency::default())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.amount_cents, 4999);
        assert_eq!(m.currency, Currency::USD);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_cents, 4999);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(4999, Currency::USD);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(1000, Currency::USD);
        assert_eq!(m.multiply(3).amount_cents, 3000);
    }

    #[test]
    fn test_money_multiply_saturates() {
        let m = Money::new(i64::MAX, Currency::USD);
        assert_eq!(m.multiply(2).amount_cents, i64::MAX);
    }

    #[test]
    fn test_money_subtract_mismatched_currency() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(500, Currency::EUR);
        assert_eq!(usd.try_subtract(&eur), None);
    }

    #[test]
    fn test_money_sum() {
        let values = vec![
            Money::new(1000, Currency::USD),
            Money::new(2500, Currency::USD),
        ];
        let total = Money::sum(values.iter(), Currency::USD);
        assert_eq!(total.amount_cents, 3500);
    }

    #[test]
    fn test_serde_decimal_roundtrip() {
        #[derive(Serialize, Deserialize)]
        struct Priced {
            #[serde(with = "serde_decimal")]
            price: Money,
        }

        let parsed: Priced = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        assert_eq!(parsed.price.amount_cents, 1250);

        let json = serde_json::to_string(&Priced {
            price: Money::new(999, Currency::USD),
        })
        .unwrap();
        assert_eq!(json, r#"{"price":9.99}"#);
    }
}
