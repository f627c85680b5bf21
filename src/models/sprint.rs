use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::NamedRef;

/// A Redmine "version", used as a sprint container.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Sprint {
    pub id: u64,
    pub project: Option<NamedRef>,
    pub name: String,
    pub description: Option<String>,
    pub status: SprintStatus,
    pub sharing: SprintSharing,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub sprint_start_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SprintStatus {
    Open,
    Locked,
    Closed,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SprintSharing {
    None,
    Descendants,
    Hierarchy,
    Tree,
    /// Shared with every project on the server
    System,
}

/// Payload for `POST /projects/{id}/versions.json`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NewSprint {
    pub name: String,
    pub status: SprintStatus,
    pub sharing: SprintSharing,
    pub description: String,
    pub sprint_start_date: NaiveDate,
    /// Redmine's name for the due date on write.
    pub effective_date: NaiveDate,
}
