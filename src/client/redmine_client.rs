use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::Tracker;
use crate::constants::PAGE_LIMIT;
use crate::error::{RedmanError, RedmanResult};
use crate::models::*;

const API_KEY_HEADER: &str = "x-redmine-api-key";

/// JSON client for the Redmine REST API.
pub struct RedmineClient {
    client: reqwest::Client,
    api_url: String,
}

impl RedmineClient {
    pub fn new(api_url: &str, api_key: &str, verify_tls: bool) -> RedmanResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(api_key)
            .map_err(|_| RedmanError::ConfigError("Invalid API key format".to_string()))?;
        headers.insert(API_KEY_HEADER, key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(!verify_tls)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> RedmanResult<T> {
        debug!("GET {} {:?}", path, query);
        let response = self.client.get(self.url(path)).query(query).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> RedmanResult<String> {
        debug!("POST {}", path);
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.text().await?)
    }

    async fn delete(&self, path: &str) -> RedmanResult<()> {
        debug!("DELETE {}", path);
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: Response) -> RedmanResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) if !parsed.errors.is_empty() => parsed.errors.join(", "),
            _ if status == StatusCode::NOT_FOUND => "not found".to_string(),
            _ => body,
        };
        Err(RedmanError::ApiError(format!(
            "HTTP {} on {}: {}",
            status, url, detail
        )))
    }
}

#[async_trait]
impl Tracker for RedmineClient {
    async fn list_projects(&self) -> RedmanResult<Vec<Project>> {
        let mut projects = Vec::new();
        loop {
            let query = [
                ("offset", projects.len().to_string()),
                ("limit", PAGE_LIMIT.to_string()),
            ];
            let page: ProjectsPage = self.get_json("projects.json", &query).await?;
            let fetched = page.projects.len();
            projects.extend(page.projects);
            if fetched == 0 || projects.len() >= page.total_count {
                break;
            }
        }
        Ok(projects)
    }

    async fn list_sprints(&self, project: &str) -> RedmanResult<Vec<Sprint>> {
        let page: VersionsPage = self
            .get_json(&format!("projects/{}/versions.json", project), &[])
            .await?;
        Ok(page.versions)
    }

    async fn create_sprint(&self, project: &str, sprint: &NewSprint) -> RedmanResult<Sprint> {
        let body = self
            .post_json(
                &format!("projects/{}/versions.json", project),
                &VersionEnvelope { version: sprint },
            )
            .await?;
        let created: VersionEnvelope<Sprint> = serde_json::from_str(&body)?;
        Ok(created.version)
    }

    async fn delete_sprint(&self, sprint_id: u64) -> RedmanResult<()> {
        self.delete(&format!("versions/{}.json", sprint_id)).await
    }

    async fn list_issues(&self, filter: &IssueFilter) -> RedmanResult<Vec<Issue>> {
        let mut issues = Vec::new();
        loop {
            let mut query = filter.query_pairs();
            query.push(("offset", issues.len().to_string()));
            query.push(("limit", PAGE_LIMIT.to_string()));

            let page: IssuesPage = self.get_json("issues.json", &query).await?;
            let fetched = page.issues.len();
            issues.extend(page.issues);
            if fetched == 0 || issues.len() >= page.total_count {
                break;
            }
        }
        Ok(issues)
    }

    async fn get_issue(&self, issue_id: u64) -> RedmanResult<Issue> {
        let query = [("include", "children".to_string())];
        let envelope: IssueEnvelope<Issue> = self
            .get_json(&format!("issues/{}.json", issue_id), &query)
            .await?;
        Ok(envelope.issue)
    }

    async fn create_issue(&self, issue: &NewIssue) -> RedmanResult<Option<Issue>> {
        let body = self
            .post_json("issues.json", &IssueEnvelope { issue })
            .await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let created: IssueEnvelope<Option<Issue>> = serde_json::from_str(&body)?;
        Ok(created.issue)
    }

    async fn delete_issue(&self, issue_id: u64) -> RedmanResult<()> {
        self.delete(&format!("issues/{}.json", issue_id)).await
    }
}
