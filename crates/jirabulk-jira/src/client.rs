//! Jira bulk issue creation client

use crate::auth::JiraAuth;
use crate::types::{BulkCreateRequest, BulkCreateResponse, IssuePayload};
use crate::{Error, Result};
use jirabulk_core::models::{Credentials, JiraConfig};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;

pub struct JiraClient {
    http: reqwest::Client,
    endpoint: String,
    auth: JiraAuth,
}

impl JiraClient {
    pub fn new(config: &JiraConfig, credentials: &Credentials) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.bulk_endpoint(),
            auth: JiraAuth::from_credentials(credentials)?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Create all `issues` in one request.
    ///
    /// Only HTTP 201 counts as success; any other status is returned as
    /// [`Error::ApiRejected`] with the raw response body.
    pub async fn bulk_create(&self, issues: &[IssuePayload]) -> Result<BulkCreateResponse> {
        tracing::info!(count = issues.len(), endpoint = %self.endpoint, "Submitting bulk issue creation");

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.auth.to_basic_auth())
            .header(CONTENT_TYPE, "application/json")
            .json(&BulkCreateRequest {
                issue_updates: issues,
            })
            .send()
            .await?;

        let status = response.status();
        // Once the status line has arrived, a broken body must not hide it.
        let body = response.text().await;

        if status != StatusCode::CREATED {
            tracing::warn!(status = status.as_u16(), "Jira rejected bulk creation");
            let body = body.unwrap_or_else(|e| format!("<unreadable body: {}>", e));
            return Err(Error::ApiRejected {
                status: status.as_u16(),
                body,
            });
        }

        // The issues exist at this point, so an unexpected body is not a failure.
        let created = match body {
            Ok(body) => match serde_json::from_str::<BulkCreateResponse>(&body) {
                Ok(created) => created,
                Err(e) => {
                    tracing::warn!(error = %e, "Could not parse bulk creation response");
                    BulkCreateResponse::default()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Could not read bulk creation response");
                BulkCreateResponse::default()
            }
        };

        tracing::info!(keys = ?created.keys(), "Issues created");
        Ok(created)
    }
}
