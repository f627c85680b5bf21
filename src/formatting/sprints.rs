use colored::*;

use crate::sprint::report::sprint_url;
use crate::sprint::{RunOutcome, SprintWindow};

pub fn format_window(window: &SprintWindow) -> String {
    format!("{} to {}", window.start, window.end)
}

/// Final human-facing result of a copy run.
pub fn print_outcome(outcome: &RunOutcome, api_url: &str) {
    match outcome {
        RunOutcome::Skipped { .. } => {
            println!("{} {}", "⏭".yellow(), outcome.message().yellow());
        }
        RunOutcome::DryRun {
            template,
            sprint_name,
            window,
        } => {
            println!("{} {}", "ℹ".blue(), "Dry-run mode, nothing was changed.".blue().bold());
            println!("{}: {} ({})", "Template".bold(), template.name, sprint_url(api_url, template).bright_black());
            println!("{}: {}", "Would create".bold(), sprint_name.bright_blue());
            println!("{}: {}", "Dates".bold(), format_window(window));
        }
        RunOutcome::Completed { report, notified } => {
            println!("{} {}", "✅".green(), "Sprint copied successfully!".green().bold());
            println!("{}: {}", "From".bold(), report.template.name);
            println!(
                "{}: {} ({})",
                "To".bold(),
                report.sprint.name.bright_blue().bold(),
                sprint_url(api_url, &report.sprint).bright_black()
            );
            println!("{}: {}", "Dates".bold(), format_window(&report.window));
            println!("{}: {}", "Stories".bold(), report.stories.len());
            println!("{}: {}", "Tasks".bold(), report.tasks.len());
            println!("{}: {}", "Dividers".bold(), report.dividers.len());
            if !notified {
                println!("{}", "Summary email could not be sent, see the log above.".yellow());
            }
        }
    }
}
