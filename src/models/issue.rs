use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::NamedRef;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Issue {
    pub id: u64,
    pub project: NamedRef,
    pub tracker: NamedRef,
    pub status: NamedRef,
    pub priority: NamedRef,
    pub subject: String,
    pub description: Option<String>,
    pub assigned_to: Option<NamedRef>,
    pub estimated_hours: Option<f64>,
    pub parent: Option<NamedRef>,
    pub fixed_version: Option<NamedRef>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub done_ratio: Option<u8>,
    /// Only populated when the issue was fetched with `include=children`.
    #[serde(default)]
    pub children: Vec<IssueRef>,
}

/// Child stub embedded in a parent issue. Only `id` is reliable.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IssueRef {
    pub id: u64,
    pub tracker: Option<NamedRef>,
    pub subject: Option<String>,
}

/// Payload for `POST /issues.json`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NewIssue {
    pub project_id: u64,
    pub subject: String,
    pub tracker_id: u64,
    pub description: String,
    pub status_id: u64,
    pub priority_id: u64,
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub fixed_version_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_issue_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done_ratio: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Backend default (open issues only)
    Open,
    Any,
    Id(u64),
}

impl StatusFilter {
    pub fn as_query_value(&self) -> Option<String> {
        match self {
            StatusFilter::Open => None,
            StatusFilter::Any => Some("*".to_string()),
            StatusFilter::Id(id) => Some(id.to_string()),
        }
    }
}

/// Query for `GET /issues.json`. The backend accepts a single tracker id per call.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueFilter {
    pub project_id: Option<String>,
    pub tracker_id: u64,
    pub status: StatusFilter,
    pub fixed_version_id: u64,
}

impl IssueFilter {
    pub fn new(tracker_id: u64, fixed_version_id: u64) -> Self {
        Self {
            project_id: None,
            tracker_id,
            status: StatusFilter::Any,
            fixed_version_id,
        }
    }

    pub fn project(mut self, project_id: Option<&str>) -> Self {
        self.project_id = project_id.map(str::to_string);
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Query pairs for the filter, excluding paging parameters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("tracker_id", self.tracker_id.to_string()),
            ("fixed_version_id", self.fixed_version_id.to_string()),
        ];
        if let Some(project) = &self.project_id {
            pairs.push(("project_id", project.clone()));
        }
        if let Some(status) = self.status.as_query_value() {
            pairs.push(("status_id", status));
        }
        pairs
    }
}
