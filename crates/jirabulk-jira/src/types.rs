//! Jira API types for bulk issue creation

use crate::adf::AdfDocument;
use serde::{Deserialize, Serialize};

/// Issue type given to every created issue
pub const ISSUE_TYPE_TASK: &str = "Task";

/// One entry of `issueUpdates`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssuePayload {
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueFields {
    pub project: ProjectRef,
    pub summary: String,
    pub description: AdfDocument,
    #[serde(rename = "issuetype")]
    pub issue_type: IssueTypeRef,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRef {
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IssueTypeRef {
    pub name: String,
}

/// Body of `POST /rest/api/3/issue/bulk`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkCreateRequest<'a> {
    pub issue_updates: &'a [IssuePayload],
}

/// Successful bulk-create response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BulkCreateResponse {
    #[serde(default)]
    pub issues: Vec<CreatedIssue>,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
    #[serde(rename = "self")]
    pub url: String,
}

impl BulkCreateResponse {
    pub fn keys(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.key.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_created_issues() {
        let body = json!({
            "issues": [
                {"id": "10000", "key": "FLIC-1", "self": "https://example.atlassian.net/rest/api/3/issue/10000"},
                {"id": "10001", "key": "FLIC-2", "self": "https://example.atlassian.net/rest/api/3/issue/10001"}
            ],
            "errors": []
        });

        let response: BulkCreateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.keys(), ["FLIC-1", "FLIC-2"]);
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_request_body_key() {
        let body = serde_json::to_value(BulkCreateRequest { issue_updates: &[] }).unwrap();
        assert_eq!(body, json!({"issueUpdates": []}));
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let response: BulkCreateResponse = serde_json::from_str("{}").unwrap();
        assert!(response.issues.is_empty());
    }
}
