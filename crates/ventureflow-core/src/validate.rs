//! Per-step validation run before the wizard moves forward.

use std::collections::BTreeMap;

use chrono::NaiveTime;
use ventureflow_domain::{FieldType, FieldValue, FormField, ListingData};

use crate::expand::RenderedItem;

const RATING_RANGE: std::ops::RangeInclusive<f64> = 1.0..=5.0;

/// Field id → message shown under the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field_id: &str) -> Option<&str> {
        self.0.get(field_id).map(String::as_str)
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.0.contains_key(field_id)
    }

    pub fn insert(&mut self, field_id: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field_id.into(), message.into());
    }

    pub fn remove(&mut self, field_id: &str) -> Option<String> {
        self.0.remove(field_id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, message)| (id.as_str(), message.as_str()))
    }
}

/// Validates every active field row in `items`. Group labels and fields whose
/// dependency is unmet are skipped.
pub fn validate_items(items: &[RenderedItem<'_>], values: &ListingData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for rendered in items.iter().filter_map(RenderedItem::as_field) {
        if !rendered.active {
            continue;
        }
        if let Err(message) = validate_field(rendered.field, values.get(&rendered.field.id)) {
            errors.insert(rendered.field.id.clone(), message);
        }
    }
    errors
}

/// Checks a single field. Required rules run first, then format rules for any
/// value that was actually provided.
pub fn validate_field(field: &FormField, value: Option<&FieldValue>) -> Result<(), String> {
    if field.required && !satisfies_required(field.field_type, value) {
        return Err(required_message(field));
    }
    match value {
        Some(value) if !value.is_blank() => check_format(field, value),
        _ => Ok(()),
    }
}

fn satisfies_required(field_type: FieldType, value: Option<&FieldValue>) -> bool {
    let Some(value) = value else {
        return false;
    };
    match field_type {
        FieldType::Checkbox | FieldType::Boolean => value.is_truthy(),
        FieldType::MultiSelect => matches!(value, FieldValue::List(items) if !items.is_empty()),
        FieldType::File => !value.is_blank(),
        FieldType::Number => !matches!(value, FieldValue::Text(text) if text.is_empty()),
        FieldType::Price => matches!(value, FieldValue::Price(price) if price.amount.is_some()),
        _ => !value.is_blank(),
    }
}

fn required_message(field: &FormField) -> String {
    match field.field_type {
        FieldType::MultiSelect => format!("Select at least one option for {}", field.label),
        FieldType::File => format!("Upload at least one file for {}", field.label),
        FieldType::Checkbox | FieldType::Boolean => format!("{} must be checked", field.label),
        _ => format!("{} is required", field.label),
    }
}

fn check_format(field: &FormField, value: &FieldValue) -> Result<(), String> {
    match field.field_type {
        FieldType::Number => value
            .as_number()
            .map(|_| ())
            .ok_or_else(|| format!("{} must be a number", field.label)),
        FieldType::Rating => match value.as_number() {
            Some(rating) if RATING_RANGE.contains(&rating) => Ok(()),
            _ => Err(format!("{} must be between 1 and 5", field.label)),
        },
        FieldType::Time => {
            let raw = value.as_text().unwrap_or_default().trim();
            NaiveTime::parse_from_str(raw, "%H:%M")
                .map(|_| ())
                .map_err(|_| format!("{} must use 24-hour HH:MM format", field.label))
        }
        FieldType::Select if !field.options.is_empty() => {
            let chosen = value.as_text().unwrap_or_default().trim();
            if field.options.iter().any(|option| option == chosen) {
                Ok(())
            } else {
                Err(format!(
                    "{} must be one of: {}",
                    field.label,
                    field.options.join(", ")
                ))
            }
        }
        FieldType::MultiSelect if !field.options.is_empty() => {
            match value
                .as_list()
                .into_iter()
                .find(|chosen| !field.options.iter().any(|option| option == chosen))
            {
                Some(unknown) => Err(format!("{} has unknown option `{}`", field.label, unknown)),
                None => Ok(()),
            }
        }
        FieldType::Price => match value {
            FieldValue::Price(price) => {
                if price.amount.map(|amount| amount < 0.0).unwrap_or(false) {
                    Err(format!("{} cannot be negative", field.label))
                } else if price.currency.trim().is_empty() {
                    Err(format!("{} needs a currency", field.label))
                } else {
                    Ok(())
                }
            }
            _ => Err(format!("{} must be an amount with a currency", field.label)),
        },
        _ => Ok(()),
    }
}
