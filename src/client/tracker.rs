use async_trait::async_trait;

use crate::error::RedmanResult;
use crate::models::{Issue, IssueFilter, NewIssue, NewSprint, Project, Sprint};

/// Remote operations the sprint copier needs from the issue tracker.
///
/// Every call may fail with a transport or validation error; callers treat
/// failures of mutating calls as fatal to the run.
#[async_trait]
pub trait Tracker: Send + Sync {
    async fn list_projects(&self) -> RedmanResult<Vec<Project>>;

    /// All versions visible in `project` (including shared ones).
    async fn list_sprints(&self, project: &str) -> RedmanResult<Vec<Sprint>>;

    async fn create_sprint(&self, project: &str, sprint: &NewSprint) -> RedmanResult<Sprint>;

    async fn delete_sprint(&self, sprint_id: u64) -> RedmanResult<()>;

    async fn list_issues(&self, filter: &IssueFilter) -> RedmanResult<Vec<Issue>>;

    /// Full issue record, including child stubs.
    async fn get_issue(&self, issue_id: u64) -> RedmanResult<Issue>;

    /// `Ok(None)` when the server accepted the request but returned no record.
    async fn create_issue(&self, issue: &NewIssue) -> RedmanResult<Option<Issue>>;

    async fn delete_issue(&self, issue_id: u64) -> RedmanResult<()>;
}
