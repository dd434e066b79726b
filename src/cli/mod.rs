pub mod commands;
pub mod context;
pub mod flow;
pub mod form;
pub mod output;
pub mod prompts;
pub mod render;
pub mod test_mode;
pub mod widgets;

use commands::Command;
use context::AppContext;
use output::OutputPreferences;

use crate::errors::CliError;

/// Parses `args` (without the program name) and runs the command.
/// Cancelling a prompt ends the run without an error; the wizard state
/// stays on disk for `resume`.
pub fn run_cli<I>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let command = commands::parse_command(&args)?;

    match command {
        Command::Help => {
            println!("{}", commands::usage());
            return Ok(());
        }
        Command::Version => {
            println!("{}", commands::version_line());
            return Ok(());
        }
        _ => {}
    }

    let mut ctx = AppContext::load()?;
    output::set_preferences(OutputPreferences {
        color: ctx.config.ui_color_enabled && !test_mode::is_enabled(),
        quiet: false,
    });

    let result = match command {
        Command::Create => flow::run_create(&mut ctx),
        Command::Resume => flow::run_resume(&mut ctx),
        Command::Status { json } => commands::show_status(&ctx, json),
        Command::Catalog => commands::show_catalog(&ctx),
        Command::Login { name, email } => flow::sign_in(&mut ctx, &name, &email),
        Command::Logout => {
            commands::logout(&mut ctx);
            Ok(())
        }
        Command::Reset => {
            commands::reset(&mut ctx);
            Ok(())
        }
        Command::Help | Command::Version => Ok(()),
    };

    match result {
        Err(CliError::Cancelled) => {
            output::info("Cancelled. Run `ventureflow_cli resume` to continue later.");
            Ok(())
        }
        other => other,
    }
}
