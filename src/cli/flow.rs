//! The listing flow: category → subcategory → form → package → publish.

use tracing::info;
use uuid::Uuid;
use ventureflow_core::{WizardAction, WizardState};
use ventureflow_domain::{Catalog, Package, UserMirror};

use crate::api::{ApiError, ListingApi, ListingSubmission, RequestScope};
use crate::cli::context::AppContext;
use crate::cli::form::{run_listing_form, FormExit};
use crate::cli::{output, prompts, render};
use crate::errors::CliError;

const BACK_OPTION: &str = "← Back";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Category,
    Subcategory,
    Form,
    Package,
}

enum PageExit {
    Goto(Page),
    Done,
}

/// Starts a fresh listing.
pub fn run_create(ctx: &mut AppContext) -> Result<(), CliError> {
    ensure_signed_in(ctx)?;
    ctx.store.dispatch(WizardAction::StartListingFlow);
    let catalog = ctx.load_catalog()?;
    run_from(ctx, &catalog, Page::Category)
}

/// Continues from the persisted selections.
pub fn run_resume(ctx: &mut AppContext) -> Result<(), CliError> {
    if ctx.store.state().selected_category_id.is_none() && !ctx.store.state().listing_flow_active {
        output::info("Nothing to resume; starting a new listing.");
        return run_create(ctx);
    }
    ensure_signed_in(ctx)?;
    let catalog = ctx.load_catalog()?;
    if let Some(hint) = stale_selection_hint(ctx.store.state(), &catalog) {
        output::warning(hint);
    }
    let page = resume_page(ctx.store.state(), &catalog);
    run_from(ctx, &catalog, page)
}

/// First page that still needs input for `state`.
pub fn resume_page(state: &WizardState, catalog: &Catalog) -> Page {
    let (Some(category_id), subcategory_id) = (
        state.selected_category_id.as_deref(),
        state.selected_subcategory_id.as_deref(),
    ) else {
        return Page::Category;
    };
    if catalog.category(category_id).is_none() {
        return Page::Category;
    }
    let Some(subcategory_id) = subcategory_id else {
        return Page::Subcategory;
    };
    if catalog.subcategory(category_id, subcategory_id).is_none() {
        return Page::Subcategory;
    }
    if state.listing_form_data.is_empty() {
        Page::Form
    } else {
        Page::Package
    }
}

/// Warning for a persisted category or subcategory the catalog no longer has.
pub fn stale_selection_hint(state: &WizardState, catalog: &Catalog) -> Option<String> {
    let category_id = state.selected_category_id.as_deref()?;
    if catalog.category(category_id).is_none() {
        return Some(no_longer_offered(category_id, catalog.suggest_category(category_id)));
    }
    let subcategory_id = state.selected_subcategory_id.as_deref()?;
    if catalog.subcategory(category_id, subcategory_id).is_none() {
        let suggestion = catalog.suggest_subcategory(category_id, subcategory_id);
        return Some(no_longer_offered(subcategory_id, suggestion));
    }
    None
}

fn no_longer_offered(id: &str, suggestion: Option<&str>) -> String {
    match suggestion {
        Some(suggestion) => format!("`{id}` is no longer offered; did you mean `{suggestion}`?"),
        None => format!("`{id}` is no longer offered."),
    }
}

fn run_from(ctx: &mut AppContext, catalog: &Catalog, start: Page) -> Result<(), CliError> {
    let mut page = start;
    loop {
        let exit = match page {
            Page::Category => choose_category(ctx, catalog)?,
            Page::Subcategory => choose_subcategory(ctx, catalog)?,
            Page::Form => match run_listing_form(ctx, catalog)? {
                FormExit::Submitted => PageExit::Goto(Page::Package),
                FormExit::Back => PageExit::Goto(Page::Subcategory),
                FormExit::Cancelled => return Err(CliError::Cancelled),
            },
            Page::Package => choose_package(ctx)?,
        };
        match exit {
            PageExit::Goto(next) => page = next,
            PageExit::Done => return Ok(()),
        }
    }
}

fn choose_category(ctx: &mut AppContext, catalog: &Catalog) -> Result<PageExit, CliError> {
    output::section("Choose a category");
    let options: Vec<String> = catalog
        .categories
        .iter()
        .map(|category| category.title.clone())
        .collect();
    let default = ctx
        .store
        .state()
        .selected_category_id
        .as_deref()
        .and_then(|id| catalog.categories.iter().position(|category| category.id == id))
        .unwrap_or(0);

    let index = prompts::select("Category", &options, default)?;
    let category = catalog
        .categories
        .get(index)
        .ok_or_else(|| CliError::Input("no category chosen".into()))?;
    ctx.store.dispatch(WizardAction::SetCategory(category.id.clone()));
    Ok(PageExit::Goto(Page::Subcategory))
}

fn choose_subcategory(ctx: &mut AppContext, catalog: &Catalog) -> Result<PageExit, CliError> {
    let Some(category) = ctx
        .store
        .state()
        .selected_category_id
        .as_deref()
        .and_then(|id| catalog.category(id))
    else {
        return Ok(PageExit::Goto(Page::Category));
    };

    output::section(format!("{} – choose a subcategory", category.title));
    if category.subcategories.is_empty() {
        output::warning("This category has no subcategories yet.");
        return Ok(PageExit::Goto(Page::Category));
    }

    let mut options: Vec<String> = category.subcategories.iter().map(|sub| sub.title.clone()).collect();
    options.push(BACK_OPTION.into());
    let default = ctx
        .store
        .state()
        .selected_subcategory_id
        .as_deref()
        .and_then(|id| category.subcategories.iter().position(|sub| sub.id == id))
        .unwrap_or(0);

    let index = prompts::select("Subcategory", &options, default)?;
    match category.subcategories.get(index) {
        Some(subcategory) => {
            ctx.store
                .dispatch(WizardAction::SetSubcategory(subcategory.id.clone()));
            Ok(PageExit::Goto(Page::Form))
        }
        None => Ok(PageExit::Goto(Page::Category)),
    }
}

fn choose_package(ctx: &mut AppContext) -> Result<PageExit, CliError> {
    output::section("Choose a package");
    render::packages();

    let mut options: Vec<String> = Package::ALL.iter().map(|package| package.label().to_string()).collect();
    options.push(BACK_OPTION.into());
    let default = ctx
        .store
        .state()
        .selected_package
        .and_then(|chosen| Package::ALL.iter().position(|package| *package == chosen))
        .unwrap_or(0);

    let index = prompts::select("Package", &options, default)?;
    let Some(package) = Package::ALL.get(index).copied() else {
        return Ok(PageExit::Goto(Page::Form));
    };
    ctx.store.dispatch(WizardAction::SetPackage(Some(package)));
    publish(ctx)?;
    Ok(PageExit::Done)
}

/// Sends the listing when a backend is configured. Transient failures may be
/// retried; the stored listing is kept until a submission succeeds.
fn publish(ctx: &mut AppContext) -> Result<(), CliError> {
    let Some(client) = ctx.api.as_ref() else {
        output::success("Listing saved locally. Set api_base_url to publish it.");
        return Ok(());
    };
    let submission = ListingSubmission::from_state(ctx.store.state())?;

    loop {
        let scope = RequestScope::new();
        match ctx.block_on(ListingApi::new(client).submit(&submission, &scope)) {
            Ok(receipt) => {
                match receipt.listing_id.as_deref() {
                    Some(id) => output::success(format!("Listing published as {id}.")),
                    None => output::success("Listing published."),
                }
                if !receipt.message.is_empty() {
                    output::info(&receipt.message);
                }
                ctx.store.dispatch(WizardAction::ResetForm);
                return Ok(());
            }
            Err(err) if err.is_retryable() => {
                output::error(format!("Could not publish listing: {err}"));
                if !prompts::confirm("Try again?", true)? {
                    output::info("Your listing is saved. Run `ventureflow_cli resume` to publish later.");
                    return Ok(());
                }
            }
            Err(ApiError::Rejected(reason)) => {
                output::error(format!("The backend rejected the listing: {reason}"));
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn ensure_signed_in(ctx: &mut AppContext) -> Result<(), CliError> {
    if ctx.store.state().is_authenticated {
        return Ok(());
    }
    output::info("Sign in to list your venture.");
    let name = prompts::text("Name", None)?;
    let email = prompts::text("Email", None)?;
    sign_in(ctx, &name, &email)
}

/// Records the signed-in user in the store.
pub fn sign_in(ctx: &mut AppContext, name: &str, email: &str) -> Result<(), CliError> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err(CliError::Input("Name cannot be empty.".into()));
    }
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(CliError::Input(format!("`{email}` is not an email address.")));
    }
    let user = UserMirror::new(Uuid::new_v4().to_string(), name, email);
    info!(user = %user.id, "signed in");
    ctx.store.dispatch(WizardAction::Login(user));
    output::success(format!("Signed in as {name} <{email}>."));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ventureflow_domain::FieldValue;

    fn state(category: Option<&str>, subcategory: Option<&str>) -> WizardState {
        WizardState {
            selected_category_id: category.map(str::to_string),
            selected_subcategory_id: subcategory.map(str::to_string),
            ..WizardState::default()
        }
    }

    #[test]
    fn resume_picks_first_incomplete_page() {
        let catalog = Catalog::builtin();
        assert_eq!(resume_page(&state(None, None), &catalog), Page::Category);
        assert_eq!(resume_page(&state(Some("gone"), None), &catalog), Page::Category);
        assert_eq!(
            resume_page(&state(Some("accommodation"), None), &catalog),
            Page::Subcategory
        );
        assert_eq!(
            resume_page(&state(Some("accommodation"), Some("castles")), &catalog),
            Page::Subcategory
        );
        assert_eq!(
            resume_page(&state(Some("accommodation"), Some("hotels")), &catalog),
            Page::Form
        );

        let mut filled = state(Some("accommodation"), Some("hotels"));
        filled
            .listing_form_data
            .insert("name".into(), FieldValue::text("Lakeview Inn"));
        assert_eq!(resume_page(&filled, &catalog), Page::Package);
    }

    #[test]
    fn stale_selections_get_a_suggestion() {
        let catalog = Catalog::builtin();
        assert_eq!(
            stale_selection_hint(&state(Some("acommodation"), None), &catalog).as_deref(),
            Some("`acommodation` is no longer offered; did you mean `accommodation`?")
        );
        assert_eq!(
            stale_selection_hint(&state(Some("accommodation"), Some("hotel")), &catalog).as_deref(),
            Some("`hotel` is no longer offered; did you mean `hotels`?")
        );
        assert_eq!(
            stale_selection_hint(&state(Some("accommodation"), Some("submarines")), &catalog).as_deref(),
            Some("`submarines` is no longer offered.")
        );
        assert_eq!(stale_selection_hint(&state(Some("accommodation"), Some("hotels")), &catalog), None);
        assert_eq!(stale_selection_hint(&state(None, None), &catalog), None);
    }
}
