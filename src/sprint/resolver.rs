use tracing::debug;

use crate::client::Tracker;
use crate::error::RedmanResult;
use crate::models::Sprint;

/// Look up a sprint by exact, case-sensitive name within `project`.
///
/// `Ok(None)` means the server answered and no sprint has that name; a failed
/// request is returned as an error so an outage is never reported as a
/// missing sprint.
pub async fn find_sprint(
    client: &dyn Tracker,
    project: &str,
    name: &str,
) -> RedmanResult<Option<Sprint>> {
    let sprints = client.list_sprints(project).await?;
    debug!("Searching {} sprints of [{}] for [{}]", sprints.len(), project, name);
    Ok(sprints.into_iter().find(|sprint| sprint.name == name))
}
