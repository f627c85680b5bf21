use tracing::{info, warn};

use super::{find_sprint, long_sprint_name, SprintWindow};
use crate::client::Tracker;
use crate::config::RecreateSettings;
use crate::constants::CREATED_BY;
use crate::error::{RedmanError, RedmanResult};
use crate::models::{
    Issue, IssueFilter, IssueRef, NewSprint, Sprint, SprintSharing, SprintStatus, TrackerIds,
};
use crate::redman_error;

/// Issues removed together with a stale sprint.
#[derive(Debug, Default)]
pub struct DeletedIssues {
    pub stories: Vec<Issue>,
    pub tasks: Vec<IssueRef>,
    pub dividers: Vec<Issue>,
}

impl DeletedIssues {
    pub fn total(&self) -> usize {
        self.stories.len() + self.tasks.len() + self.dividers.len()
    }
}

/// Creates the destination sprint, replacing a previous copy with the same name.
pub struct SprintRecreator<'a> {
    client: &'a dyn Tracker,
    project: &'a str,
    trackers: &'a TrackerIds,
    settings: &'a RecreateSettings,
}

impl<'a> SprintRecreator<'a> {
    pub fn new(
        client: &'a dyn Tracker,
        project: &'a str,
        trackers: &'a TrackerIds,
        settings: &'a RecreateSettings,
    ) -> Self {
        Self {
            client,
            project,
            trackers,
            settings,
        }
    }

    pub async fn recreate(&self, template_name: &str, window: &SprintWindow) -> RedmanResult<Sprint> {
        let name = long_sprint_name(template_name, window);

        if let Some(stale) = find_sprint(self.client, self.project, &name).await? {
            let deleted = self.delete_sprint(&stale).await?;
            info!(
                "Deleted sprint [{}] with {} stories, {} tasks and {} dividers",
                stale.name,
                deleted.stories.len(),
                deleted.tasks.len(),
                deleted.dividers.len()
            );
            self.wait_until_gone(&name).await?;
        }

        let new_sprint = NewSprint {
            name: name.clone(),
            status: SprintStatus::Open,
            sharing: SprintSharing::System,
            description: CREATED_BY.to_string(),
            sprint_start_date: window.start,
            effective_date: window.end,
        };

        self.client
            .create_sprint(self.project, &new_sprint)
            .await
            .map_err(|e| redman_error!(ApiError, "Unable to save sprint [{}] due: {}", name, e))
    }

    /// Delete a sprint and everything in it: tasks before their stories,
    /// then dividers, then the sprint itself.
    pub async fn delete_sprint(&self, sprint: &Sprint) -> RedmanResult<DeletedIssues> {
        info!("Deleting sprint [{}]: {}", sprint.id, sprint.name);
        let mut deleted = DeletedIssues::default();

        let stories = self
            .client
            .list_issues(&IssueFilter::new(self.trackers.story, sprint.id))
            .await?;
        for story in stories {
            let story = self.client.get_issue(story.id).await?;
            for task in &story.children {
                info!("Deleting task #{}", task.id);
                self.client.delete_issue(task.id).await?;
                deleted.tasks.push(task.clone());
            }
            info!("Deleting story #{}: {}", story.id, story.subject);
            self.client.delete_issue(story.id).await?;
            deleted.stories.push(story);
        }

        let dividers = self
            .client
            .list_issues(&IssueFilter::new(self.trackers.placeholder, sprint.id))
            .await?;
        for divider in dividers {
            info!("Deleting divider #{}: {}", divider.id, divider.subject);
            self.client.delete_issue(divider.id).await?;
            deleted.dividers.push(divider);
        }

        self.client.delete_sprint(sprint.id).await?;
        Ok(deleted)
    }

    /// Poll the name lookup until the deleted sprint is no longer listed.
    async fn wait_until_gone(&self, name: &str) -> RedmanResult<()> {
        let attempts = self.settings.poll_attempts.max(1);
        for attempt in 1..=attempts {
            if find_sprint(self.client, self.project, name).await?.is_none() {
                return Ok(());
            }
            warn!(
                "Sprint [{}] still listed after delete (attempt {}/{})",
                name, attempt, attempts
            );
            if attempt < attempts {
                tokio::time::sleep(self.settings.poll_interval()).await;
            }
        }
        Err(RedmanError::StaleSprintPersists(name.to_string()))
    }
}
