use chrono::{Local, NaiveDate};
use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::config::{Settings, TemplateColor};
use crate::error::{RedmanError, RedmanResult};
use crate::formatting::print_outcome;
use crate::notify::SmtpNotifier;
use crate::sprint::{copy_sprint, parse_cadence_date, CopyRequest};

pub async fn handle_copy(matches: &ArgMatches, context: &mut CliContext) -> RedmanResult<()> {
    let request = build_request(matches, context.settings())?;
    let client = context.client()?;
    let notifier = SmtpNotifier::new();

    let outcome = copy_sprint(&*client, &notifier, context.settings(), &request).await?;
    print_outcome(&outcome, &context.settings().api_url);

    Ok(())
}

/// Resolve the template, dates and cadence of a run from the command line,
/// falling back to the target's settings.
pub fn build_request(matches: &ArgMatches, settings: &Settings) -> RedmanResult<CopyRequest> {
    let color: TemplateColor = matches
        .get_one::<String>("template")
        .ok_or_else(|| RedmanError::InvalidInput("Template is required".to_string()))?
        .parse()?;

    let as_of = match matches.get_one::<String>("as-of") {
        Some(value) => parse_date_arg("--as-of", value)?,
        None => Local::now().date_naive(),
    };

    let cadence_start = match matches.get_one::<String>("start-date").or(settings.start_date.as_ref()) {
        Some(value) => Some(parse_cadence_date(value)?),
        None => None,
    };

    let repeat_after = matches
        .get_one::<i64>("repeat-after")
        .copied()
        .or(settings.repeat_after);

    Ok(CopyRequest {
        template_name: settings.template_name(color).to_string(),
        as_of,
        cadence_start,
        repeat_after,
        dry_run: matches.get_one::<bool>("dry-run").copied().unwrap_or(true),
        project: matches.get_one::<String>("project").cloned(),
    })
}

fn parse_date_arg(flag: &str, value: &str) -> RedmanResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        RedmanError::InvalidInput(format!("{} expects a date as YYYY-MM-DD, got '{}'", flag, value))
    })
}
