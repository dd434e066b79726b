//! Command-line parsing and the non-interactive commands.

use ventureflow_core::WizardAction;
use ventureflow_domain::Catalog;

use crate::cli::context::AppContext;
use crate::cli::output;
use crate::errors::CliError;

const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create,
    Resume,
    Status { json: bool },
    Catalog,
    Login { name: String, email: String },
    Logout,
    Reset,
    Version,
    Help,
}

pub const COMMAND_NAMES: [&str; 9] = [
    "create", "resume", "status", "catalog", "login", "logout", "reset", "version", "help",
];

/// Parses the arguments after the program name. No arguments means `create`.
pub fn parse_command(args: &[String]) -> Result<Command, CliError> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(Command::Create);
    };

    let command = match name.as_str() {
        "create" | "new" => Command::Create,
        "resume" => Command::Resume,
        "status" => Command::Status {
            json: rest.iter().any(|arg| arg == "--json"),
        },
        "catalog" | "categories" => Command::Catalog,
        "login" => match rest {
            [name, email, ..] => Command::Login {
                name: name.clone(),
                email: email.clone(),
            },
            _ => return Err(CliError::Input("Usage: login <name> <email>".into())),
        },
        "logout" => Command::Logout,
        "reset" => Command::Reset,
        "version" | "--version" | "-V" => Command::Version,
        "help" | "--help" | "-h" => Command::Help,
        unknown => {
            let hint = suggest_command(unknown)
                .map(|candidate| format!(" Did you mean `{candidate}`?"))
                .unwrap_or_default();
            return Err(CliError::Input(format!("Unknown command `{unknown}`.{hint}")));
        }
    };
    Ok(command)
}

fn suggest_command(input: &str) -> Option<&'static str> {
    COMMAND_NAMES
        .iter()
        .map(|name| (*name, strsim::levenshtein(input, name)))
        .filter(|(_, distance)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(_, distance)| *distance)
        .map(|(name, _)| name)
}

pub fn usage() -> &'static str {
    "Usage: ventureflow_cli [command]\n\
     Commands:\n  \
     create                 start a new listing (default)\n  \
     resume                 continue the saved listing\n  \
     status [--json]        show the saved wizard state\n  \
     catalog                list categories and subcategories\n  \
     login <name> <email>   sign in\n  \
     logout                 sign out and clear saved state\n  \
     reset                  clear the listing selections\n  \
     version                show build information"
}

pub fn version_line() -> String {
    format!(
        "ventureflow {} ({} {}, built {} for {})",
        env!("CARGO_PKG_VERSION"),
        env!("VENTUREFLOW_BUILD_HASH"),
        env!("VENTUREFLOW_BUILD_STATUS"),
        env!("VENTUREFLOW_BUILD_TIMESTAMP"),
        env!("VENTUREFLOW_BUILD_TARGET"),
    )
}

pub fn show_status(ctx: &AppContext, json: bool) -> Result<(), CliError> {
    let state = ctx.store.state();
    if json {
        println!("{}", serde_json::to_string_pretty(state).map_err(crate::errors::AppError::from)?);
        return Ok(());
    }

    let catalog = Catalog::builtin();
    output::section("Listing status");
    match &state.user {
        Some(user) if state.is_authenticated => println!("Signed in:    {} <{}>", user.name, user.email),
        _ => println!("Signed in:    no"),
    }

    let category = state.selected_category_id.as_deref();
    let category_title = category
        .map(|id| catalog.category(id).map(|c| c.title.as_str()).unwrap_or(id))
        .unwrap_or("-");
    let subcategory_title = match (category, state.selected_subcategory_id.as_deref()) {
        (Some(category), Some(id)) => catalog
            .subcategory(category, id)
            .map(|sub| sub.title.as_str())
            .unwrap_or(id),
        (_, Some(id)) => id,
        _ => "-",
    };
    println!("Category:     {category_title}");
    println!("Subcategory:  {subcategory_title}");
    println!("Fields saved: {}", state.listing_form_data.len());
    println!(
        "Package:      {}",
        state.selected_package.map(|package| package.label()).unwrap_or("-")
    );
    println!("Data dir:     {}", ctx.base_dir().display());
    println!("State file:   {}", ctx.state_path().display());
    Ok(())
}

pub fn show_catalog(ctx: &AppContext) -> Result<(), CliError> {
    let catalog = ctx.load_catalog()?;
    for category in &catalog.categories {
        output::section(&category.title);
        if !category.description.is_empty() {
            println!("{}", category.description);
        }
        for sub in &category.subcategories {
            println!("  {:<14} {} ({} fields)", sub.id, sub.title, sub.fields.len());
        }
    }
    Ok(())
}

pub fn logout(ctx: &mut AppContext) {
    ctx.store.dispatch(WizardAction::Logout);
    output::success("Signed out.");
}

pub fn reset(ctx: &mut AppContext) {
    ctx.store.dispatch(WizardAction::ResetForm);
    output::success("Listing selections cleared.");
}
