//! One prompt per field type.

use ventureflow_config::Config;
use ventureflow_domain::{format_number, FieldType, FieldValue, FormField, PriceValue};

use crate::cli::{output, prompts};
use crate::errors::CliError;

/// Typed in place of an answer to remove a stored value.
pub const CLEAR_TOKEN: &str = ":clear";
const SKIP_OPTION: &str = "(skip)";
const RATING_OPTIONS: [&str; 5] = ["1", "2", "3", "4", "5"];

/// What a widget decided for its field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Set(FieldValue),
    Keep,
    Clear,
}

pub fn prompt_label(field: &FormField) -> String {
    let mut label = field.label.clone();
    if let Some(placeholder) = field.placeholder.as_deref().filter(|hint| !hint.is_empty()) {
        label.push_str(&format!(" [{placeholder}]"));
    }
    if !field.required {
        label.push_str(" (optional)");
    }
    label
}

pub fn prompt_field(field: &FormField, current: Option<&FieldValue>, config: &Config) -> Result<FieldInput, CliError> {
    let label = prompt_label(field);
    match field.field_type {
        FieldType::Select if !field.options.is_empty() => select(field, &label, current),
        FieldType::MultiSelect if !field.options.is_empty() => multi_select(field, &label, current),
        FieldType::Rating => rating(field, &label, current),
        FieldType::Number => number(&label, current),
        FieldType::Checkbox | FieldType::Boolean => {
            let answer = prompts::confirm(&label, current.map(FieldValue::is_truthy).unwrap_or(false))?;
            Ok(FieldInput::Set(FieldValue::Bool(answer)))
        }
        FieldType::File => file_list(&format!("{label} (comma separated)"), current),
        FieldType::Price => price(&label, current, config),
        _ => text(&label, current),
    }
}

fn current_text(current: Option<&FieldValue>) -> Option<String> {
    current.filter(|value| !value.is_blank()).map(FieldValue::display)
}

fn blank_answer(current: Option<&FieldValue>) -> FieldInput {
    if current_text(current).is_some() {
        FieldInput::Keep
    } else {
        FieldInput::Clear
    }
}

fn text(label: &str, current: Option<&FieldValue>) -> Result<FieldInput, CliError> {
    let default = current_text(current);
    let answer = prompts::text(label, default.as_deref())?;
    Ok(match answer.trim() {
        "" => blank_answer(current),
        CLEAR_TOKEN => FieldInput::Clear,
        value => FieldInput::Set(FieldValue::text(value)),
    })
}

fn number(label: &str, current: Option<&FieldValue>) -> Result<FieldInput, CliError> {
    let default = current.and_then(FieldValue::as_number).map(format_number);
    loop {
        let answer = prompts::text(label, default.as_deref())?;
        match answer.trim() {
            "" => return Ok(blank_answer(current)),
            CLEAR_TOKEN => return Ok(FieldInput::Clear),
            raw => match raw.parse::<f64>() {
                Ok(number) if number.is_finite() => return Ok(FieldInput::Set(FieldValue::Number(number))),
                _ => output::warning(format!("`{raw}` is not a number.")),
            },
        }
    }
}

fn rating(field: &FormField, label: &str, current: Option<&FieldValue>) -> Result<FieldInput, CliError> {
    let mut options: Vec<String> = RATING_OPTIONS.iter().map(|option| option.to_string()).collect();
    if !field.required {
        options.push(SKIP_OPTION.into());
    }
    let default = current
        .and_then(FieldValue::as_number)
        .map(|stars| (stars.round().clamp(1.0, 5.0) as usize) - 1)
        .unwrap_or(0);
    let index = prompts::select(label, &options, default)?;
    Ok(match RATING_OPTIONS.get(index) {
        Some(_) => FieldInput::Set(FieldValue::Number((index + 1) as f64)),
        None => FieldInput::Clear,
    })
}

fn select(field: &FormField, label: &str, current: Option<&FieldValue>) -> Result<FieldInput, CliError> {
    let mut options = field.options.clone();
    if !field.required {
        options.push(SKIP_OPTION.into());
    }
    let default = current
        .and_then(FieldValue::as_text)
        .and_then(|chosen| field.options.iter().position(|option| option == chosen))
        .unwrap_or(0);
    let index = prompts::select(label, &options, default)?;
    Ok(match field.options.get(index) {
        Some(option) => FieldInput::Set(FieldValue::text(option.clone())),
        None => FieldInput::Clear,
    })
}

fn multi_select(field: &FormField, label: &str, current: Option<&FieldValue>) -> Result<FieldInput, CliError> {
    let chosen_before = current.map(FieldValue::as_list).unwrap_or_default();
    let defaults: Vec<bool> = field
        .options
        .iter()
        .map(|option| chosen_before.contains(&option.as_str()))
        .collect();
    let indices = prompts::multi_select(label, &field.options, &defaults)?;
    if indices.is_empty() {
        return Ok(FieldInput::Clear);
    }
    let chosen = indices
        .into_iter()
        .filter_map(|index| field.options.get(index).cloned())
        .collect::<Vec<_>>();
    Ok(FieldInput::Set(FieldValue::List(chosen)))
}

fn file_list(label: &str, current: Option<&FieldValue>) -> Result<FieldInput, CliError> {
    let default = current.map(|value| value.as_list().join(", ")).filter(|joined| !joined.is_empty());
    let answer = prompts::text(label, default.as_deref())?;
    Ok(match answer.trim() {
        "" => blank_answer(current),
        CLEAR_TOKEN => FieldInput::Clear,
        raw => FieldInput::Set(FieldValue::list(
            raw.split(',').map(str::trim).filter(|name| !name.is_empty()),
        )),
    })
}

fn price(label: &str, current: Option<&FieldValue>, config: &Config) -> Result<FieldInput, CliError> {
    let existing = match current {
        Some(FieldValue::Price(price)) => Some(price.clone()),
        _ => None,
    };
    let current_amount = existing
        .as_ref()
        .and_then(|price| price.amount)
        .map(FieldValue::Number);
    let amount = match number(&format!("{label} – amount"), current_amount.as_ref())? {
        FieldInput::Set(value) => value.as_number(),
        FieldInput::Keep => existing.as_ref().and_then(|price| price.amount),
        FieldInput::Clear => return Ok(FieldInput::Clear),
    };

    let preferred = existing
        .as_ref()
        .map(|price| price.currency.as_str())
        .filter(|code| !code.is_empty())
        .unwrap_or(&config.default_currency);
    let default = config
        .currencies
        .iter()
        .position(|code| code.eq_ignore_ascii_case(preferred))
        .unwrap_or(0);
    let index = prompts::select(&format!("{label} – currency"), &config.currencies, default)?;
    let currency = config
        .currencies
        .get(index)
        .cloned()
        .unwrap_or_else(|| config.default_currency.clone());

    Ok(FieldInput::Set(FieldValue::Price(PriceValue { amount, currency })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_mark_optional_fields_and_hints() {
        let field = FormField::new("checkInTime", "Check-in Time", FieldType::Time).with_placeholder("14:00");
        assert_eq!(prompt_label(&field), "Check-in Time [14:00]");
        let optional = FormField::new("description", "Description", FieldType::Textarea).with_optional();
        assert_eq!(prompt_label(&optional), "Description (optional)");
    }

    #[test]
    fn blank_answers_keep_existing_values() {
        assert_eq!(blank_answer(Some(&FieldValue::text("Inn"))), FieldInput::Keep);
        assert_eq!(blank_answer(Some(&FieldValue::text(""))), FieldInput::Clear);
        assert_eq!(blank_answer(None), FieldInput::Clear);
    }
}
