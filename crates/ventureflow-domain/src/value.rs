//! Values captured by the listing form.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Field id → captured value.
pub type ListingData = BTreeMap<String, FieldValue>;

/// Amount + currency composite used by price fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceValue {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: String,
}

impl PriceValue {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            currency: currency.into(),
        }
    }
}

/// A single captured form value. Serialized without a tag so the persisted
/// blob reads like plain JSON (`true`, `2`, `"Lakeview"`, `["Suite"]`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
    Price(PriceValue),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }

    /// Loose truthiness used by checkbox/boolean validation.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Bool(value) => *value,
            FieldValue::Number(value) => *value != 0.0 && !value.is_nan(),
            FieldValue::Text(value) => !value.is_empty(),
            FieldValue::List(values) => !values.is_empty(),
            FieldValue::Price(_) => true,
        }
    }

    /// Returns `true` when the value carries no user input.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Bool(_) | FieldValue::Number(_) => false,
            FieldValue::Text(value) => value.trim().is_empty(),
            FieldValue::List(values) => values.is_empty(),
            FieldValue::Price(price) => price.amount.is_none(),
        }
    }

    /// Numeric view of the value; text is parsed leniently.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(value) => value.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Selected options. A single text value counts as a one-element selection.
    pub fn as_list(&self) -> Vec<&str> {
        match self {
            FieldValue::List(values) => values.iter().map(String::as_str).collect(),
            FieldValue::Text(value) if !value.trim().is_empty() => vec![value.as_str()],
            _ => Vec::new(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Human-readable rendering used by review summaries.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Bool(true) => "Yes".into(),
            FieldValue::Bool(false) => "No".into(),
            FieldValue::Number(value) => format_number(*value),
            FieldValue::Text(value) => value.clone(),
            FieldValue::List(values) => values.join(", "),
            FieldValue::Price(price) => match price.amount {
                Some(amount) => format!("{:.2} {}", amount, price.currency).trim().to_string(),
                None => format!("- {}", price.currency).trim().to_string(),
            },
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<PriceValue> for FieldValue {
    fn from(value: PriceValue) -> Self {
        FieldValue::Price(value)
    }
}

/// Formats whole numbers without a trailing `.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_values_round_trip_as_plain_json() {
        let mut data = ListingData::new();
        data.insert("name".into(), FieldValue::text("Lakeview Inn"));
        data.insert("beds".into(), FieldValue::Number(2.0));
        data.insert("roomTypes".into(), FieldValue::list(["Suite"]));
        data.insert("pets".into(), FieldValue::Bool(true));
        data.insert("price".into(), FieldValue::Price(PriceValue::new(120.0, "USD")));

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["name"], "Lakeview Inn");
        assert_eq!(json["beds"], 2.0);
        assert_eq!(json["price"]["currency"], "USD");

        let parsed: ListingData = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, data);
    }

    #[test]
    fn blank_and_truthy_follow_input_semantics() {
        assert!(FieldValue::text("   ").is_blank());
        assert!(FieldValue::List(vec![]).is_blank());
        assert!(!FieldValue::Number(0.0).is_blank());
        assert!(!FieldValue::Number(0.0).is_truthy());
        assert!(!FieldValue::Bool(false).is_truthy());
        assert!(FieldValue::Price(PriceValue {
            amount: None,
            currency: "USD".into()
        })
        .is_blank());
    }

    #[test]
    fn display_formats_numbers_and_prices() {
        assert_eq!(FieldValue::Number(3.0).display(), "3");
        assert_eq!(FieldValue::Number(2.5).display(), "2.5");
        assert_eq!(
            FieldValue::Price(PriceValue::new(99.5, "EUR")).display(),
            "99.50 EUR"
        );
        assert_eq!(FieldValue::list(["Single", "Suite"]).display(), "Single, Suite");
        let unpriced = FieldValue::Price(PriceValue {
            amount: None,
            currency: "USD".into(),
        });
        assert_eq!(unpriced.display(), "- USD");
    }
}
