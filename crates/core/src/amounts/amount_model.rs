//! Monetary amounts as delivered by the fundraising integration.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::constants::DEFAULT_CURRENCY;
use crate::errors::ValidationError;

/// Numeric part of an [`Amount`].
///
/// The integration sends values either as JSON strings (`"12.34"`) or as
/// plain numbers. Both are normalized into a [`Decimal`] when the snapshot is
/// decoded. Anything that does not parse as a non-negative number is kept in
/// its raw form so the card can still render and flag it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountValue {
    Parsed(Decimal),
    Malformed(String),
}

impl AmountValue {
    /// Parses a textual amount, accepting plain and scientific notation.
    pub fn parse(raw: &str) -> Result<Decimal, ValidationError> {
        let trimmed = raw.trim();
        let value = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed))?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::NegativeAmount(trimmed.to_string()));
        }
        Ok(value)
    }

    fn from_text(raw: &str) -> Self {
        match Self::parse(raw) {
            Ok(value) => AmountValue::Parsed(value),
            Err(_) => AmountValue::Malformed(raw.to_string()),
        }
    }
}

impl Default for AmountValue {
    fn default() -> Self {
        AmountValue::Parsed(Decimal::ZERO)
    }
}

impl From<Decimal> for AmountValue {
    fn from(value: Decimal) -> Self {
        AmountValue::Parsed(value)
    }
}

impl Serialize for AmountValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AmountValue::Parsed(value) => serializer.serialize_str(&value.normalize().to_string()),
            AmountValue::Malformed(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for AmountValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        Ok(match raw {
            Value::String(text) => AmountValue::from_text(&text),
            Value::Number(number) => AmountValue::from_text(&number.to_string()),
            other => AmountValue::Malformed(other.to_string()),
        })
    }
}

/// A currency amount, e.g. `{ "currency": "GBP", "value": "12.34" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: String,
    #[serde(default)]
    pub value: AmountValue,
}

impl Amount {
    pub fn new(currency: impl Into<String>, value: Decimal) -> Self {
        Self {
            currency: currency.into(),
            value: AmountValue::Parsed(value),
        }
    }

    /// A zero amount in the given currency.
    pub fn zero(currency: impl Into<String>) -> Self {
        Self::new(currency, Decimal::ZERO)
    }

    /// Numeric value used for arithmetic. Malformed values read as zero.
    pub fn value(&self) -> Decimal {
        match &self.value {
            AmountValue::Parsed(value) => *value,
            AmountValue::Malformed(_) => Decimal::ZERO,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self.value, AmountValue::Malformed(_))
    }

    /// Raw text of a malformed value, if any.
    pub fn malformed_text(&self) -> Option<&str> {
        match &self.value {
            AmountValue::Malformed(raw) => Some(raw),
            AmountValue::Parsed(_) => None,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero(DEFAULT_CURRENCY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_deserialize_string_value() {
        let amount: Amount =
            serde_json::from_value(json!({"currency": "GBP", "value": "12.34"})).unwrap();
        assert_eq!(amount.currency, "GBP");
        assert_eq!(amount.value(), dec!(12.34));
        assert!(!amount.is_malformed());
    }

    #[test]
    fn test_deserialize_numeric_value() {
        let amount: Amount =
            serde_json::from_value(json!({"currency": "USD", "value": 250})).unwrap();
        assert_eq!(amount.value(), dec!(250));

        let amount: Amount =
            serde_json::from_value(json!({"currency": "USD", "value": 99.5})).unwrap();
        assert_eq!(amount.value(), dec!(99.5));
    }

    #[test]
    fn test_deserialize_missing_value_is_zero() {
        let amount: Amount = serde_json::from_value(json!({"currency": "EUR"})).unwrap();
        assert_eq!(amount.value(), Decimal::ZERO);
    }

    #[test]
    fn test_malformed_value_reads_as_zero() {
        let amount: Amount =
            serde_json::from_value(json!({"currency": "GBP", "value": "twelve"})).unwrap();
        assert!(amount.is_malformed());
        assert_eq!(amount.malformed_text(), Some("twelve"));
        assert_eq!(amount.value(), Decimal::ZERO);

        let amount: Amount =
            serde_json::from_value(json!({"currency": "GBP", "value": null})).unwrap();
        assert!(amount.is_malformed());
    }

    #[test]
    fn test_negative_value_is_malformed() {
        let amount: Amount =
            serde_json::from_value(json!({"currency": "GBP", "value": "-5"})).unwrap();
        assert!(amount.is_malformed());
        assert!(matches!(
            AmountValue::parse("-5"),
            Err(ValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(AmountValue::parse("1.5e3").unwrap(), dec!(1500));
        assert_eq!(AmountValue::parse(" 42 ").unwrap(), dec!(42));
    }

    #[test]
    fn test_serializes_value_as_string() {
        let amount = Amount::new("GBP", dec!(12.50));
        let json = serde_json::to_value(&amount).unwrap();
        assert_eq!(json, json!({"currency": "GBP", "value": "12.5"}));
    }

    #[test]
    fn test_default_is_gbp_zero() {
        let amount = Amount::default();
        assert_eq!(amount.currency, "GBP");
        assert_eq!(amount.value(), Decimal::ZERO);
    }
}
