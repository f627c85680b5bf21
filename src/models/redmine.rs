use serde::{Deserialize, Serialize};

// Response envelopes of the Redmine REST API

#[derive(Debug, Deserialize)]
pub struct ProjectsPage {
    pub projects: Vec<super::Project>,
    #[serde(default)]
    pub total_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct VersionsPage {
    pub versions: Vec<super::Sprint>,
}

#[derive(Debug, Deserialize)]
pub struct IssuesPage {
    pub issues: Vec<super::Issue>,
    #[serde(default)]
    pub total_count: usize,
}

// Request/response envelopes for single records

#[derive(Debug, Deserialize, Serialize)]
pub struct IssueEnvelope<T> {
    pub issue: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VersionEnvelope<T> {
    pub version: T,
}

/// Body of a 422 response.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<String>,
}
