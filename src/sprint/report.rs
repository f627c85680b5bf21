use super::SprintWindow;
use crate::models::{Issue, Sprint, TrackerIds};

/// Everything created by one copy run.
#[derive(Debug)]
pub struct RunReport {
    pub template: Sprint,
    pub sprint: Sprint,
    pub window: SprintWindow,
    pub stories: Vec<Issue>,
    pub tasks: Vec<Issue>,
    pub dividers: Vec<Issue>,
}

impl RunReport {
    /// Created issues in report order: stories, tasks, then dividers.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.stories
            .iter()
            .chain(self.tasks.iter())
            .chain(self.dividers.iter())
    }

    pub fn total(&self) -> usize {
        self.stories.len() + self.tasks.len() + self.dividers.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "Copied [{}] stories and [{}] tasks\nCopied [{}] dividers",
            self.stories.len(),
            self.tasks.len(),
            self.dividers.len()
        )
    }

    /// HTML fragment listing every copied issue, linking both sprints.
    pub fn render_html(&self, api_url: &str, trackers: &TrackerIds) -> String {
        let items: String = self
            .issues()
            .map(|issue| format!("<li>{}</li>", escape_html(&describe_issue(issue, trackers))))
            .collect::<Vec<_>>()
            .join("\n    ");

        format!(
            r#"
    <p>
    Hello Team,
    <br />
    This email serves a notification about the "sprint template copy" job
    being completed by redman.
    </p>
    <p> List of issues copied from sprint {} to sprint {} </p>
    <p> {} </p>
    <ul>
    {}
    </ul>
    "#,
            sprint_link(api_url, &self.template),
            sprint_link(api_url, &self.sprint),
            escape_html(&self.summary()).replace('\n', "<br />"),
            items
        )
    }

    /// Plain text counterpart of [`RunReport::render_html`].
    pub fn render_text(&self, api_url: &str, trackers: &TrackerIds) -> String {
        let mut text = format!(
            "List of issues copied from sprint {} ({}) to sprint {} ({})\n{}\n\n",
            self.template.name,
            sprint_url(api_url, &self.template),
            self.sprint.name,
            sprint_url(api_url, &self.sprint),
            self.summary()
        );
        for issue in self.issues() {
            text.push_str(&describe_issue(issue, trackers));
            text.push('\n');
        }
        text
    }
}

pub fn sprint_url(api_url: &str, sprint: &Sprint) -> String {
    format!("{}/versions/{}", api_url.trim_end_matches('/'), sprint.id)
}

fn sprint_link(api_url: &str, sprint: &Sprint) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        sprint_url(api_url, sprint),
        escape_html(&sprint.name)
    )
}

/// One line per issue: kind, id, subject, then assignee and estimate if set.
pub fn describe_issue(issue: &Issue, trackers: &TrackerIds) -> String {
    let kind = trackers
        .kind_of(issue.tracker.id)
        .map(|kind| kind.as_str())
        .unwrap_or("issue");
    let mut text = format!("  {} #{}: {}", kind, issue.id, issue.subject);

    if let Some(assignee) = &issue.assigned_to {
        text.push_str(&format!(", assigned: {}", assignee.name));
    }
    if let Some(hours) = issue.estimated_hours {
        text.push_str(&format!(", estimated_hours: {}", hours));
    }
    text
}

/// Wrap a report fragment into the full email document.
pub fn wrap_email(content: &str) -> String {
    format!(
        r#"
    <html>
    {}
    <hr />
    Have a great day!
    </html>
    "#,
        content
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
