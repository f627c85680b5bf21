#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use redman::config::{EmailSettings, IssueDefaults, RecreateSettings, Settings, Templates};
use redman::error::{RedmanError, RedmanResult};
use redman::models::*;
use redman::notify::{Email, Notifier};
use redman::Tracker;

pub const ADMIN: &str = "admin_project";
pub const CLOSED_STATUS: u64 = 5;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn settings() -> Settings {
    Settings {
        api_url: "https://redmine.test".to_string(),
        api_key: Some("secret".to_string()),
        verify_tls: false,
        project_name: ADMIN.to_string(),
        start_date: Some("2015-09-04".to_string()),
        repeat_after: Some(14),
        templates: Templates {
            brown: "TEMPLATE_SPRINT_BROWN".to_string(),
            green: "TEMPLATE_SPRINT_GREEN".to_string(),
            misc: "TEMPLATE_SPRINT_MISC".to_string(),
        },
        email: EmailSettings {
            sender: "sender@example.com".to_string(),
            recipient: "team@example.com".to_string(),
            subject: "Redman Automatic Email".to_string(),
            server: "smtp.example.com:25".to_string(),
        },
        trackers: TrackerIds::default(),
        issue_defaults: IssueDefaults::default(),
        recreate: RecreateSettings {
            poll_attempts: 3,
            poll_interval_ms: 0,
        },
    }
}

#[derive(Default)]
struct State {
    next_id: u64,
    sprints: Vec<Sprint>,
    issues: BTreeMap<u64, Issue>,
    users: HashMap<u64, String>,
    mutations: Vec<String>,
    fetched: Vec<u64>,
    // Subjects for which create_issue answers with no record
    empty_creates: HashSet<String>,
    // Subjects for which create_issue fails
    failing_creates: HashSet<String>,
    // Number of lookups that still list a sprint after it was deleted
    lingering_lookups: u32,
    lingering: Option<Sprint>,
}

/// In-memory stand-in for a Redmine server.
pub struct FakeRedmine {
    state: Mutex<State>,
}

impl FakeRedmine {
    pub fn new() -> Self {
        let state = State {
            next_id: 1000,
            ..State::default()
        };
        Self {
            state: Mutex::new(state),
        }
    }

    fn next_id(state: &mut State) -> u64 {
        state.next_id += 1;
        state.next_id
    }

    pub fn add_user(&self, id: u64, name: &str) {
        self.state.lock().unwrap().users.insert(id, name.to_string());
    }

    pub fn add_sprint(&self, name: &str) -> Sprint {
        let mut state = self.state.lock().unwrap();
        let sprint = Sprint {
            id: Self::next_id(&mut state),
            project: Some(NamedRef::new(1, ADMIN)),
            name: name.to_string(),
            description: None,
            status: SprintStatus::Open,
            sharing: SprintSharing::System,
            due_date: None,
            sprint_start_date: None,
        };
        state.sprints.push(sprint.clone());
        sprint
    }

    pub fn add_issue(
        &self,
        project_id: u64,
        tracker_id: u64,
        sprint_id: u64,
        subject: &str,
        parent: Option<u64>,
    ) -> u64 {
        let mut state = self.state.lock().unwrap();
        let id = Self::next_id(&mut state);
        let issue = Issue {
            id,
            project: NamedRef::new(project_id, format!("project-{}", project_id)),
            tracker: NamedRef::new(tracker_id, ""),
            status: NamedRef::new(1, "New"),
            priority: NamedRef::new(3, "High"),
            subject: subject.to_string(),
            description: None,
            assigned_to: None,
            estimated_hours: None,
            parent: parent.map(|p| NamedRef::new(p, "")),
            fixed_version: Some(NamedRef::new(sprint_id, "")),
            start_date: None,
            due_date: None,
            done_ratio: Some(40),
            children: Vec::new(),
        };
        state.issues.insert(id, issue);
        id
    }

    pub fn set_assignee(&self, issue_id: u64, user_id: u64) {
        let mut state = self.state.lock().unwrap();
        let name = state.users.get(&user_id).cloned().unwrap_or_default();
        if let Some(issue) = state.issues.get_mut(&issue_id) {
            issue.assigned_to = Some(NamedRef::new(user_id, name));
        }
    }

    pub fn set_estimate(&self, issue_id: u64, hours: f64) {
        let mut state = self.state.lock().unwrap();
        if let Some(issue) = state.issues.get_mut(&issue_id) {
            issue.estimated_hours = Some(hours);
        }
    }

    pub fn set_status(&self, issue_id: u64, status_id: u64) {
        let mut state = self.state.lock().unwrap();
        if let Some(issue) = state.issues.get_mut(&issue_id) {
            issue.status = NamedRef::new(status_id, "");
        }
    }

    pub fn answer_empty_for(&self, subject: &str) {
        self.state.lock().unwrap().empty_creates.insert(subject.to_string());
    }

    pub fn fail_create_for(&self, subject: &str) {
        self.state.lock().unwrap().failing_creates.insert(subject.to_string());
    }

    pub fn linger_after_delete(&self, lookups: u32) {
        self.state.lock().unwrap().lingering_lookups = lookups;
    }

    pub fn sprints(&self) -> Vec<Sprint> {
        self.state.lock().unwrap().sprints.clone()
    }

    pub fn sprints_named(&self, name: &str) -> Vec<Sprint> {
        self.sprints().into_iter().filter(|s| s.name == name).collect()
    }

    pub fn issue(&self, id: u64) -> Option<Issue> {
        self.state.lock().unwrap().issues.get(&id).cloned()
    }

    pub fn issues_in(&self, sprint_id: u64) -> Vec<Issue> {
        self.state
            .lock()
            .unwrap()
            .issues
            .values()
            .filter(|i| i.fixed_version.as_ref().map(|v| v.id) == Some(sprint_id))
            .cloned()
            .collect()
    }

    pub fn mutations(&self) -> Vec<String> {
        self.state.lock().unwrap().mutations.clone()
    }

    pub fn fetched(&self) -> Vec<u64> {
        self.state.lock().unwrap().fetched.clone()
    }

    fn children_of(state: &State, id: u64) -> Vec<IssueRef> {
        state
            .issues
            .values()
            .filter(|i| i.parent.as_ref().map(|p| p.id) == Some(id))
            .map(|i| IssueRef {
                id: i.id,
                tracker: Some(i.tracker.clone()),
                subject: None,
            })
            .collect()
    }
}

#[async_trait]
impl Tracker for FakeRedmine {
    async fn list_projects(&self) -> RedmanResult<Vec<Project>> {
        Ok(vec![Project {
            id: 1,
            name: "Admin".to_string(),
            identifier: ADMIN.to_string(),
            description: None,
        }])
    }

    async fn list_sprints(&self, project: &str) -> RedmanResult<Vec<Sprint>> {
        let mut state = self.state.lock().unwrap();
        if project != ADMIN {
            return Err(RedmanError::ApiError(format!("HTTP 404 on {}: not found", project)));
        }
        let mut sprints = state.sprints.clone();
        if let Some(ghost) = state.lingering.clone() {
            if state.lingering_lookups > 0 {
                state.lingering_lookups -= 1;
                sprints.push(ghost);
            }
        }
        Ok(sprints)
    }

    async fn create_sprint(&self, _project: &str, sprint: &NewSprint) -> RedmanResult<Sprint> {
        let mut state = self.state.lock().unwrap();
        let created = Sprint {
            id: Self::next_id(&mut state),
            project: Some(NamedRef::new(1, ADMIN)),
            name: sprint.name.clone(),
            description: Some(sprint.description.clone()),
            status: sprint.status,
            sharing: sprint.sharing,
            due_date: Some(sprint.effective_date),
            sprint_start_date: Some(sprint.sprint_start_date),
        };
        state.mutations.push(format!("create_sprint {}", created.name));
        state.sprints.push(created.clone());
        Ok(created)
    }

    async fn delete_sprint(&self, sprint_id: u64) -> RedmanResult<()> {
        let mut state = self.state.lock().unwrap();
        if state
            .issues
            .values()
            .any(|i| i.fixed_version.as_ref().map(|v| v.id) == Some(sprint_id))
        {
            return Err(RedmanError::ApiError(
                "HTTP 422 on version: Unable to delete version".to_string(),
            ));
        }
        let position = state
            .sprints
            .iter()
            .position(|s| s.id == sprint_id)
            .ok_or_else(|| RedmanError::ApiError("HTTP 404: not found".to_string()))?;
        let removed = state.sprints.remove(position);
        state.lingering = Some(removed);
        state.mutations.push(format!("delete_sprint {}", sprint_id));
        Ok(())
    }

    async fn list_issues(&self, filter: &IssueFilter) -> RedmanResult<Vec<Issue>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .issues
            .values()
            .filter(|i| i.tracker.id == filter.tracker_id)
            .filter(|i| i.fixed_version.as_ref().map(|v| v.id) == Some(filter.fixed_version_id))
            .filter(|i| match &filter.project_id {
                Some(project) => i.project.id.to_string() == *project,
                None => true,
            })
            .filter(|i| match filter.status {
                StatusFilter::Any => true,
                StatusFilter::Open => i.status.id != CLOSED_STATUS,
                StatusFilter::Id(id) => i.status.id == id,
            })
            .cloned()
            .collect())
    }

    async fn get_issue(&self, issue_id: u64) -> RedmanResult<Issue> {
        let mut state = self.state.lock().unwrap();
        state.fetched.push(issue_id);
        let mut issue = state
            .issues
            .get(&issue_id)
            .cloned()
            .ok_or_else(|| RedmanError::ApiError(format!("HTTP 404 on issue {}", issue_id)))?;
        issue.children = Self::children_of(&state, issue_id);
        Ok(issue)
    }

    async fn create_issue(&self, new: &NewIssue) -> RedmanResult<Option<Issue>> {
        let mut state = self.state.lock().unwrap();
        if state.failing_creates.contains(&new.subject) {
            return Err(RedmanError::ApiError(format!(
                "HTTP 422 on issues.json: {} is invalid",
                new.subject
            )));
        }
        if state.empty_creates.contains(&new.subject) {
            return Ok(None);
        }
        if let Some(parent) = new.parent_issue_id {
            if !state.issues.contains_key(&parent) {
                return Err(RedmanError::ApiError("HTTP 422: Parent task is invalid".to_string()));
            }
        }

        let id = Self::next_id(&mut state);
        let version_name = state
            .sprints
            .iter()
            .find(|s| s.id == new.fixed_version_id)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        let issue = Issue {
            id,
            project: NamedRef::new(new.project_id, format!("project-{}", new.project_id)),
            tracker: NamedRef::new(new.tracker_id, ""),
            status: NamedRef::new(new.status_id, "New"),
            priority: NamedRef::new(new.priority_id, ""),
            subject: new.subject.clone(),
            description: Some(new.description.clone()),
            assigned_to: new.assigned_to_id.map(|user| {
                NamedRef::new(user, state.users.get(&user).cloned().unwrap_or_default())
            }),
            estimated_hours: new.estimated_hours,
            parent: new.parent_issue_id.map(|p| NamedRef::new(p, "")),
            fixed_version: Some(NamedRef::new(new.fixed_version_id, version_name)),
            start_date: Some(new.start_date),
            due_date: new.due_date,
            done_ratio: new.done_ratio,
            children: Vec::new(),
        };
        state.mutations.push(format!("create_issue {}", new.subject));
        state.issues.insert(id, issue.clone());
        Ok(Some(issue))
    }

    async fn delete_issue(&self, issue_id: u64) -> RedmanResult<()> {
        let mut state = self.state.lock().unwrap();
        if state
            .issues
            .values()
            .any(|i| i.parent.as_ref().map(|p| p.id) == Some(issue_id))
        {
            return Err(RedmanError::ApiError(format!(
                "HTTP 422: issue {} still has subtasks",
                issue_id
            )));
        }
        state
            .issues
            .remove(&issue_id)
            .ok_or_else(|| RedmanError::ApiError(format!("HTTP 404 on issue {}", issue_id)))?;
        state.mutations.push(format!("delete_issue {}", issue_id));
        Ok(())
    }
}

/// Notifier that keeps every email instead of sending it.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Email>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, email: &Email) -> RedmanResult<()> {
        if self.fail {
            return Err(RedmanError::NotificationError("connection refused".to_string()));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}
