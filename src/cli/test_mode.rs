//! Scripted answers for non-interactive runs. When `VENTUREFLOW_TEST_INPUTS`
//! is set, every prompt consumes the next shell-word from it instead of
//! reading the terminal.

use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

pub const TEST_INPUTS_ENV: &str = "VENTUREFLOW_TEST_INPUTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    Value(String),
    /// Accept the prompt's default.
    Blank,
    Cancel,
}

struct InputQueue {
    enabled: bool,
    inputs: VecDeque<ScriptedInput>,
}

impl InputQueue {
    fn from_env() -> Self {
        match env::var(TEST_INPUTS_ENV) {
            Ok(raw) => Self {
                enabled: true,
                inputs: parse_inputs(&raw),
            },
            Err(_) => Self {
                enabled: false,
                inputs: VecDeque::new(),
            },
        }
    }
}

static INPUTS: Lazy<Mutex<InputQueue>> = Lazy::new(|| Mutex::new(InputQueue::from_env()));

fn queue() -> std::sync::MutexGuard<'static, InputQueue> {
    INPUTS.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn is_enabled() -> bool {
    queue().enabled
}

/// Next scripted answer for `label`. `None` when scripting is off; an
/// exhausted script cancels the prompt.
pub fn next_input(label: &str) -> Option<ScriptedInput> {
    let mut guard = queue();
    if !guard.enabled {
        return None;
    }
    Some(guard.inputs.pop_front().unwrap_or_else(|| {
        tracing::debug!(prompt = label, "scripted inputs exhausted");
        ScriptedInput::Cancel
    }))
}

fn parse_input(token: &str) -> ScriptedInput {
    match token.to_ascii_uppercase().as_str() {
        "<BLANK>" | "<KEEP>" => ScriptedInput::Blank,
        "<NONE>" | "<EMPTY>" => ScriptedInput::Value(String::new()),
        "<CANCEL>" | "<ESC>" => ScriptedInput::Cancel,
        _ => ScriptedInput::Value(token.to_string()),
    }
}

fn parse_inputs(raw: &str) -> VecDeque<ScriptedInput> {
    let tokens = shell_words::split(raw)
        .unwrap_or_else(|_| raw.split_whitespace().map(str::to_string).collect());
    tokens.iter().map(|token| parse_input(token)).collect()
}
