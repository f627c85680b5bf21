use tracing::{debug, error, info};

use super::report::describe_issue;
use super::SprintWindow;
use crate::client::Tracker;
use crate::config::IssueDefaults;
use crate::constants::CREATED_BY;
use crate::error::RedmanResult;
use crate::redman_error;
use crate::models::{Issue, IssueFilter, NewIssue, Sprint, TrackerIds, TrackerKind};

#[derive(Debug, Default)]
pub struct CopiedStories {
    pub stories: Vec<Issue>,
    pub tasks: Vec<Issue>,
}

/// Copies template stories, and the tasks under them, into a new sprint.
pub struct IssueCloner<'a> {
    client: &'a dyn Tracker,
    trackers: &'a TrackerIds,
    defaults: &'a IssueDefaults,
}

impl<'a> IssueCloner<'a> {
    pub fn new(client: &'a dyn Tracker, trackers: &'a TrackerIds, defaults: &'a IssueDefaults) -> Self {
        Self {
            client,
            trackers,
            defaults,
        }
    }

    /// Copy stories with any status from `template_sprint_id` into `new_sprint`,
    /// optionally restricted to the stories of one project.
    pub async fn copy_stories(
        &self,
        template_sprint_id: u64,
        new_sprint: &Sprint,
        window: &SprintWindow,
        for_project: Option<&str>,
    ) -> RedmanResult<CopiedStories> {
        let filter = IssueFilter::new(self.trackers.id(TrackerKind::Story), template_sprint_id)
            .project(for_project);
        let stories = self.client.list_issues(&filter).await?;

        let mut copied = CopiedStories::default();
        for stub in stories {
            // List results carry no children
            let story = self.client.get_issue(stub.id).await?;
            info!(
                "==> Copying {} tasks from story #{}: {}",
                story.children.len(),
                story.id,
                story.subject
            );

            let Some(new_story) = self.create_story(&story, new_sprint, window).await? else {
                error!(
                    "Unable to create story [{}] for sprint [{}]",
                    story.id, new_sprint.id
                );
                continue;
            };

            let tasks = self.create_story_tasks(&story, &new_story, new_sprint, window).await?;
            copied.tasks.extend(tasks);
            copied.stories.push(new_story);
        }

        Ok(copied)
    }

    /// Create a childless copy of `source` in `new_sprint`. Dividers are copied
    /// the same way and keep their placeholder tracker.
    ///
    /// `Ok(None)` when the server accepted the request but returned no issue.
    pub async fn create_story(
        &self,
        source: &Issue,
        new_sprint: &Sprint,
        window: &SprintWindow,
    ) -> RedmanResult<Option<Issue>> {
        let tracker_id = match self.trackers.kind_of(source.tracker.id) {
            Some(TrackerKind::Placeholder) => self.trackers.placeholder,
            _ => self.trackers.story,
        };

        let new_story = NewIssue {
            project_id: source.project.id,
            subject: source.subject.clone(),
            tracker_id,
            description: CREATED_BY.to_string(),
            status_id: self.defaults.new_status_id,
            priority_id: self.defaults.story_priority_id,
            start_date: window.start,
            due_date: Some(window.end),
            fixed_version_id: new_sprint.id,
            parent_issue_id: None,
            assigned_to_id: None,
            estimated_hours: None,
            done_ratio: None,
            is_private: None,
        };

        let created = self
            .client
            .create_issue(&new_story)
            .await
            .map_err(|e| redman_error!(ApiError, "Unable to save story [{}] due: {}", source.id, e))?;
        if let Some(story) = &created {
            debug!("Created story #{}: {}", story.id, story.subject);
        }
        Ok(created)
    }

    /// Copy every task of `template_story` under `new_story`.
    pub async fn create_story_tasks(
        &self,
        template_story: &Issue,
        new_story: &Issue,
        new_sprint: &Sprint,
        window: &SprintWindow,
    ) -> RedmanResult<Vec<Issue>> {
        let fixed_version_id = new_story
            .fixed_version
            .as_ref()
            .map(|version| version.id)
            .unwrap_or(new_sprint.id);

        let mut new_tasks = Vec::with_capacity(template_story.children.len());
        for stub in &template_story.children {
            let task = self.client.get_issue(stub.id).await?;
            info!("{}", describe_issue(&task, self.trackers));

            let new_task = NewIssue {
                project_id: template_story.project.id,
                subject: task.subject.clone(),
                tracker_id: self.trackers.task,
                description: CREATED_BY.to_string(),
                status_id: self.defaults.new_status_id,
                priority_id: self.defaults.task_priority_id,
                start_date: window.start,
                due_date: None,
                fixed_version_id,
                parent_issue_id: Some(new_story.id),
                assigned_to_id: task.assigned_to.as_ref().map(|user| user.id),
                estimated_hours: task.estimated_hours,
                done_ratio: Some(0),
                is_private: Some(false),
            };

            let created = self
                .client
                .create_issue(&new_task)
                .await
                .map_err(|e| redman_error!(ApiError, "Unable to save task [{}] due: {}", task.id, e))?
                .ok_or_else(|| redman_error!(ApiError, "Unable to save task [{}]: no issue returned", task.id))?;
            new_tasks.push(created);
        }

        Ok(new_tasks)
    }
}
