//! Screen rendering for the listing wizard.

use std::io::{self, IsTerminal};

use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use ventureflow_core::{ListingWizard, ReviewEntry};
use ventureflow_domain::Package;

use crate::cli::{output, test_mode};

/// Marker shown in the review for fields left empty.
pub const UNFILLED: &str = "[unfilled]";

/// Clears an interactive terminal; a no-op for scripted or piped runs.
pub fn clear_screen() {
    if test_mode::is_enabled() || !io::stdout().is_terminal() {
        return;
    }
    let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

pub fn step_title(wizard: &ListingWizard<'_>) -> String {
    if wizard.is_review() {
        format!("Review – {}", wizard.subcategory().title)
    } else {
        format!(
            "Step {} of {} – {}",
            wizard.current_step(),
            wizard.total_steps(),
            wizard.subcategory().title
        )
    }
}

pub fn step_header(wizard: &ListingWizard<'_>) {
    output::section(step_title(wizard));
}

pub fn group_label(label: &str) {
    println!("{}", format!("-- {label} --").bold());
}

pub fn field_error(message: &str) {
    println!("  {} {}", "✖".bright_red(), message.bright_red());
}

pub fn review_lines(entries: &[ReviewEntry]) -> Vec<String> {
    let width = entries
        .iter()
        .filter_map(|entry| match entry {
            ReviewEntry::Field { label, .. } => Some(label.chars().count()),
            ReviewEntry::Heading(_) => None,
        })
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| match entry {
            ReviewEntry::Heading(heading) => format!("{heading}:"),
            ReviewEntry::Field { label, value, .. } => {
                let pad = width.saturating_sub(label.chars().count());
                format!(
                    "  {label}{}  {}",
                    " ".repeat(pad),
                    value.as_deref().unwrap_or(UNFILLED)
                )
            }
        })
        .collect()
}

pub fn review(wizard: &ListingWizard<'_>) {
    step_header(wizard);
    for line in review_lines(&wizard.review_summary()) {
        println!("{line}");
    }
}

pub fn packages() {
    for package in Package::ALL {
        println!("{}", package.label().bold());
        for perk in package.perks() {
            println!("  • {perk}");
        }
    }
}
