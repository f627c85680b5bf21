use tracing::{error, info};

use super::{IssueCloner, SprintWindow};
use crate::client::Tracker;
use crate::config::IssueDefaults;
use crate::error::RedmanResult;
use crate::models::{Issue, IssueFilter, Sprint, StatusFilter, TrackerIds, TrackerKind};

/// Copies placeholder issues ("dividers") into a new sprint.
///
/// The issue filter takes a single tracker id, so dividers need their own
/// query. Their children, if any, are never looked at.
pub struct DividerCloner<'a> {
    client: &'a dyn Tracker,
    trackers: &'a TrackerIds,
    defaults: &'a IssueDefaults,
}

impl<'a> DividerCloner<'a> {
    pub fn new(client: &'a dyn Tracker, trackers: &'a TrackerIds, defaults: &'a IssueDefaults) -> Self {
        Self {
            client,
            trackers,
            defaults,
        }
    }

    pub async fn copy_dividers(
        &self,
        template_sprint_id: u64,
        new_sprint: &Sprint,
        window: &SprintWindow,
    ) -> RedmanResult<Vec<Issue>> {
        let filter = IssueFilter::new(self.trackers.id(TrackerKind::Placeholder), template_sprint_id)
            .status(StatusFilter::Id(self.defaults.new_status_id));
        let dividers = self.client.list_issues(&filter).await?;

        let cloner = IssueCloner::new(self.client, self.trackers, self.defaults);
        let mut new_dividers = Vec::with_capacity(dividers.len());
        for divider in dividers {
            info!(
                "==> Copying divider [{}] for project [{}]",
                divider.subject, divider.project.name
            );
            match cloner.create_story(&divider, new_sprint, window).await? {
                Some(created) => new_dividers.push(created),
                None => error!(
                    "Unable to create divider [{}] for sprint [{}]",
                    divider.id, new_sprint.id
                ),
            }
        }

        Ok(new_dividers)
    }
}
