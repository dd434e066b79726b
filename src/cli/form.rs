//! Runs the multi-step listing form on top of [`ListingWizard`].

use tracing::debug;
use ventureflow_config::Config;
use ventureflow_core::{ListingWizard, NavOutcome, RenderedItem, Route};
use ventureflow_domain::Catalog;

use crate::cli::context::AppContext;
use crate::cli::widgets::{self, FieldInput};
use crate::cli::{output, prompts, render};
use crate::errors::CliError;

const STEP_ACTIONS: [&str; 3] = ["Next", "Back", "Cancel"];
const REVIEW_ACTIONS: [&str; 3] = ["Submit", "Back", "Cancel"];

/// How the user left the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormExit {
    /// Review confirmed; the data is in the store.
    Submitted,
    /// Backed out of step 1.
    Back,
    Cancelled,
}

pub fn run_listing_form(ctx: &mut AppContext, catalog: &Catalog) -> Result<FormExit, CliError> {
    let mut wizard = ListingWizard::start(catalog, ctx.store.state(), ctx.config.total_steps)?;
    let mut shown_step = 0;

    loop {
        if wizard.current_step() != shown_step {
            render::clear_screen();
            shown_step = wizard.current_step();
        }

        if wizard.is_review() {
            render::review(&wizard);
            match action("Review", &REVIEW_ACTIONS)? {
                0 => {
                    let outcome = wizard.next(&mut ctx.store);
                    debug!(?outcome, "review confirmed");
                    return Ok(FormExit::Submitted);
                }
                1 => {
                    wizard.back();
                }
                _ => return Ok(FormExit::Cancelled),
            }
            continue;
        }

        render::step_header(&wizard);
        fill_step(&mut wizard, &ctx.config)?;

        match action("Continue", &STEP_ACTIONS)? {
            0 => {
                if let NavOutcome::Blocked(errors) = wizard.next(&mut ctx.store) {
                    output::warning(format!("{} field(s) need attention before continuing.", errors.len()));
                }
            }
            1 => {
                if let NavOutcome::Exit(Route::SubcategorySelection) = wizard.back() {
                    return Ok(FormExit::Back);
                }
            }
            _ => return Ok(FormExit::Cancelled),
        }
    }
}

fn action(label: &str, actions: &[&str]) -> Result<usize, CliError> {
    let options: Vec<String> = actions.iter().map(|action| action.to_string()).collect();
    prompts::select(label, &options, 0)
}

/// Prompts every active field of the current step. The item list is rebuilt
/// after each answer so dynamic groups appear right after their trigger.
fn fill_step(wizard: &mut ListingWizard<'_>, config: &Config) -> Result<(), CliError> {
    let mut position = 0;
    loop {
        let items = wizard.rendered_fields();
        let Some(item) = items.get(position) else {
            return Ok(());
        };
        position += 1;

        let rendered = match item {
            RenderedItem::GroupLabel { label, .. } => {
                render::group_label(label);
                continue;
            }
            RenderedItem::Field(rendered) if rendered.active => rendered,
            RenderedItem::Field(_) => continue,
        };

        let field = rendered.field;
        if let Some(message) = wizard.errors().get(&field.id) {
            render::field_error(message);
        }

        match widgets::prompt_field(field, wizard.value(&field.id), config)? {
            FieldInput::Set(value) => {
                for adjusted in wizard.set_value(&field.id, value) {
                    let label = items
                        .iter()
                        .filter_map(RenderedItem::as_field)
                        .find(|candidate| candidate.field.id == adjusted)
                        .map(|candidate| candidate.field.label.as_str())
                        .unwrap_or(adjusted.as_str());
                    if let Some(value) = wizard.value(&adjusted) {
                        output::info(format!("{label} set to {}", value.display()));
                    }
                }
            }
            FieldInput::Keep => {}
            FieldInput::Clear => wizard.clear_value(&field.id),
        }
    }
}
