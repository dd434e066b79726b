//! Terminal prompts. Each prompt first consults the scripted input queue so
//! flows can be driven end to end without a terminal.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

use crate::cli::test_mode::{self, ScriptedInput};
use crate::errors::CliError;

fn theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn echo(label: &str, answer: &str) {
    println!("{label}: {answer}");
}

/// Free text. With a default, an empty answer returns the default.
pub fn text(label: &str, default: Option<&str>) -> Result<String, CliError> {
    if let Some(scripted) = test_mode::next_input(label) {
        let answer = match scripted {
            ScriptedInput::Value(value) => value,
            ScriptedInput::Blank => default.unwrap_or_default().to_string(),
            ScriptedInput::Cancel => return Err(CliError::Cancelled),
        };
        echo(label, &answer);
        return Ok(answer);
    }

    let theme = theme();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt(label)
        .allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

/// Single choice; returns the chosen index.
pub fn select(label: &str, options: &[String], default: usize) -> Result<usize, CliError> {
    if let Some(scripted) = test_mode::next_input(label) {
        let index = match scripted {
            ScriptedInput::Value(value) => resolve_option(label, options, &value)?,
            ScriptedInput::Blank => default,
            ScriptedInput::Cancel => return Err(CliError::Cancelled),
        };
        echo(label, options.get(index).map(String::as_str).unwrap_or_default());
        return Ok(index);
    }

    let theme = theme();
    Select::with_theme(&theme)
        .with_prompt(label)
        .items(options)
        .default(default.min(options.len().saturating_sub(1)))
        .interact_opt()?
        .ok_or(CliError::Cancelled)
}

/// Several choices; returns the chosen indices in option order.
pub fn multi_select(label: &str, options: &[String], defaults: &[bool]) -> Result<Vec<usize>, CliError> {
    if let Some(scripted) = test_mode::next_input(label) {
        let mut chosen = match scripted {
            ScriptedInput::Value(value) => value
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| resolve_option(label, options, part))
                .collect::<Result<Vec<_>, _>>()?,
            ScriptedInput::Blank => defaults
                .iter()
                .enumerate()
                .filter_map(|(index, selected)| selected.then_some(index))
                .collect(),
            ScriptedInput::Cancel => return Err(CliError::Cancelled),
        };
        chosen.sort_unstable();
        chosen.dedup();
        let shown = chosen
            .iter()
            .filter_map(|index| options.get(*index).map(String::as_str))
            .collect::<Vec<_>>()
            .join(", ");
        echo(label, &shown);
        return Ok(chosen);
    }

    let theme = theme();
    MultiSelect::with_theme(&theme)
        .with_prompt(label)
        .items(options)
        .defaults(defaults)
        .interact_opt()?
        .ok_or(CliError::Cancelled)
}

pub fn confirm(label: &str, default: bool) -> Result<bool, CliError> {
    if let Some(scripted) = test_mode::next_input(label) {
        let answer = match scripted {
            ScriptedInput::Value(value) => parse_yes_no(&value)
                .ok_or_else(|| CliError::Input(format!("`{value}` is not a yes/no answer for {label}")))?,
            ScriptedInput::Blank => default,
            ScriptedInput::Cancel => return Err(CliError::Cancelled),
        };
        echo(label, if answer { "yes" } else { "no" });
        return Ok(answer);
    }

    let theme = theme();
    Confirm::with_theme(&theme)
        .with_prompt(label)
        .default(default)
        .interact_opt()?
        .ok_or(CliError::Cancelled)
}

fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "true" | "1" => Some(true),
        "n" | "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Matches a scripted answer against `options` by 1-based index or label.
fn resolve_option(label: &str, options: &[String], answer: &str) -> Result<usize, CliError> {
    let answer = answer.trim();
    if let Ok(position) = answer.parse::<usize>() {
        if (1..=options.len()).contains(&position) && !options.iter().any(|option| option == answer) {
            return Ok(position - 1);
        }
    }
    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(answer))
        .ok_or_else(|| CliError::Input(format!("`{answer}` is not an option for {label}")))
}
