pub mod issue;
pub mod project;
pub mod redmine;
pub mod sprint;
pub mod tracker;

// Re-export commonly used types
pub use issue::{Issue, IssueFilter, IssueRef, NewIssue, StatusFilter};
pub use project::Project;
pub use redmine::{ErrorBody, IssueEnvelope, IssuesPage, ProjectsPage, VersionEnvelope, VersionsPage};
pub use sprint::{NewSprint, Sprint, SprintSharing, SprintStatus};
pub use tracker::{TrackerIds, TrackerKind};

use serde::{Deserialize, Serialize};

/// Reference to another record as Redmine embeds it: `{"id": 3, "name": "..."}`.
/// Some references (e.g. `parent`) carry only the id.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NamedRef {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

impl NamedRef {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}
