//! Jira Cloud REST v3 adapter.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use reqwest::{Client, header};
use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, warn};

use crate::tracker::{
    domain::{IssueDraft, IssueRef, TrackerAccount},
    ports::{IssueTracker, IssueTrackerError, IssueTrackerResult},
};

const ISSUE_PATH: &str = "/rest/api/3/issue";
const ISSUE_TYPE: &str = "Task";
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Issue tracker adapter for Jira Cloud.
#[derive(Debug, Clone)]
pub struct JiraCloudClient {
    http: Client,
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    key: Option<String>,
}

impl JiraCloudClient {
    /// Request timeout used when none is configured.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`IssueTrackerError::Transport`] when the HTTP client cannot
    /// be built.
    pub fn new(timeout: Duration) -> IssueTrackerResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(IssueTrackerError::transport)?;
        Ok(Self { http })
    }

    /// Wraps a preconfigured HTTP client.
    #[cfg(test)]
    pub(crate) const fn from_client(http: Client) -> Self {
        Self { http }
    }
}

/// Builds the `Authorization` header value for basic auth.
pub(crate) fn basic_auth_header(account: &TrackerAccount) -> String {
    let credentials = format!("{}:{}", account.email(), account.api_token().expose());
    format!("Basic {}", BASE64_STANDARD.encode(credentials))
}

/// Returns the issue creation endpoint for a site URL.
pub(crate) fn issue_endpoint(base_url: &str) -> String {
    format!("{}{ISSUE_PATH}", base_url.trim_end_matches('/'))
}

/// Builds the create-issue request body; descriptions use the Atlassian
/// document format with a single paragraph.
pub(crate) fn issue_payload(draft: &IssueDraft) -> Value {
    json!({
        "fields": {
            "project": { "key": draft.project_key() },
            "summary": draft.title(),
            "description": {
                "type": "doc",
                "version": 1,
                "content": [{
                    "type": "paragraph",
                    "content": [{ "type": "text", "text": draft.description() }]
                }]
            },
            "issuetype": { "name": ISSUE_TYPE },
            "assignee": { "id": draft.assignee_id() }
        }
    })
}

#[async_trait]
impl IssueTracker for JiraCloudClient {
    async fn create_issue(
        &self,
        account: &TrackerAccount,
        draft: &IssueDraft,
    ) -> IssueTrackerResult<IssueRef> {
        let url = issue_endpoint(account.base_url());
        debug!(%url, project = draft.project_key(), "creating issue");

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, basic_auth_header(account))
            .header(header::CONTENT_TYPE, "application/json")
            .json(&issue_payload(draft))
            .send()
            .await
            .map_err(IssueTrackerError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "tracker rejected issue creation");
            return Err(IssueTrackerError::Rejected {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let created: CreatedIssue = response
            .json()
            .await
            .map_err(|err| IssueTrackerError::MalformedResponse(err.to_string()))?;
        Ok(IssueRef::new(
            created
                .key
                .unwrap_or_else(|| IssueRef::UNKNOWN_KEY.to_owned()),
        ))
    }
}
