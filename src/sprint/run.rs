use chrono::NaiveDate;
use tracing::info;

use super::report::wrap_email;
use super::{
    days_elapsed, find_sprint, long_sprint_name, needs_to_run, sprint_window, DividerCloner,
    IssueCloner, RunReport, SprintRecreator, SprintWindow,
};
use crate::client::Tracker;
use crate::config::Settings;
use crate::error::{RedmanError, RedmanResult};
use crate::models::Sprint;
use crate::notify::{deliver, Email, Notifier};

/// Parameters of one copy run.
#[derive(Debug, Clone)]
pub struct CopyRequest {
    pub template_name: String,
    /// Reference date, normally today
    pub as_of: NaiveDate,
    pub cadence_start: Option<NaiveDate>,
    pub repeat_after: Option<i64>,
    pub dry_run: bool,
    /// Only copy stories belonging to this project
    pub project: Option<String>,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// Not a scheduled day; nothing was touched.
    Skipped {
        days_elapsed: Option<i64>,
        repeat_after: Option<i64>,
    },
    /// Dry run; reports what would have been created.
    DryRun {
        template: Sprint,
        sprint_name: String,
        window: SprintWindow,
    },
    Completed {
        report: RunReport,
        notified: bool,
    },
}

impl RunOutcome {
    pub fn message(&self) -> String {
        match self {
            RunOutcome::Skipped {
                days_elapsed,
                repeat_after,
            } => format!(
                "No need to run since days passed {} != {} days specified in the configuration",
                display_or_unset(days_elapsed),
                display_or_unset(repeat_after)
            ),
            RunOutcome::DryRun {
                sprint_name,
                window,
                ..
            } => format!(
                "Dry-run mode. In real mode will create sprint [{}] for dates {} to {}",
                sprint_name, window.start, window.end
            ),
            RunOutcome::Completed { report, .. } => format!(
                "Sprint [{}] created from [{}] with {} issues",
                report.sprint.name,
                report.template.name,
                report.total()
            ),
        }
    }
}

fn display_or_unset(value: &Option<i64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<unset>".to_string())
}

/// Copy the template sprint named in `request` into a fresh sprint.
///
/// Every remote call runs in sequence. A failed create or delete aborts the
/// run; issues created before the failure are left in place.
pub async fn copy_sprint(
    client: &dyn Tracker,
    notifier: &dyn Notifier,
    settings: &Settings,
    request: &CopyRequest,
) -> RedmanResult<RunOutcome> {
    if !needs_to_run(request.cadence_start, Some(request.as_of), request.repeat_after)? {
        let outcome = RunOutcome::Skipped {
            days_elapsed: request
                .cadence_start
                .map(|start| days_elapsed(start, request.as_of)),
            repeat_after: request.repeat_after,
        };
        info!("{}", outcome.message());
        return Ok(outcome);
    }

    let project = settings.project_name.as_str();
    let template = find_sprint(client, project, &request.template_name)
        .await?
        .ok_or_else(|| RedmanError::SprintNotFound(request.template_name.clone()))?;

    let window = sprint_window(request.as_of);

    if request.dry_run {
        let outcome = RunOutcome::DryRun {
            sprint_name: long_sprint_name(&template.name, &window),
            template,
            window,
        };
        info!("{}", outcome.message());
        return Ok(outcome);
    }

    let recreator = SprintRecreator::new(client, project, &settings.trackers, &settings.recreate);
    let new_sprint = recreator.recreate(&template.name, &window).await?;
    info!("Sprint [{}] was saved with id [{}]", new_sprint.name, new_sprint.id);

    let cloner = IssueCloner::new(client, &settings.trackers, &settings.issue_defaults);
    let copied = cloner
        .copy_stories(template.id, &new_sprint, &window, request.project.as_deref())
        .await?;

    let dividers = DividerCloner::new(client, &settings.trackers, &settings.issue_defaults)
        .copy_dividers(template.id, &new_sprint, &window)
        .await?;

    let report = RunReport {
        template,
        sprint: new_sprint,
        window,
        stories: copied.stories,
        tasks: copied.tasks,
        dividers,
    };
    for line in report.summary().lines() {
        info!("{}", line);
    }

    let html = report.render_html(&settings.api_url, &settings.trackers);
    let text = report.render_text(&settings.api_url, &settings.trackers);
    let email = Email::new(&settings.email, wrap_email(&html), text);
    let notified = deliver(notifier, &email).await;

    Ok(RunOutcome::Completed { report, notified })
}
