//! Jira basic authentication

use crate::{Error, Result};
use jirabulk_core::models::Credentials;

pub struct JiraAuth {
    email: String,
    api_token: String,
}

impl JiraAuth {
    pub fn new(email: String, api_token: String) -> Result<Self> {
        if email.trim().is_empty() {
            return Err(Error::Auth("Jira email cannot be empty".to_string()));
        }
        if api_token.trim().is_empty() {
            return Err(Error::Auth("Jira API token cannot be empty".to_string()));
        }
        Ok(Self { email, api_token })
    }

    pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
        Self::new(credentials.email.clone(), credentials.api_token.clone())
    }

    pub fn to_basic_auth(&self) -> String {
        use base64::Engine;
        let credentials = format!("{}:{}", self.email, self.api_token);
        format!(
            "Basic {}",
            base64::engine::general_purpose::STANDARD.encode(credentials)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        let auth = JiraAuth::new("me@example.com".to_string(), "token".to_string()).unwrap();
        // base64("me@example.com:token")
        assert_eq!(auth.to_basic_auth(), "Basic bWVAZXhhbXBsZS5jb206dG9rZW4=");
    }

    #[test]
    fn test_rejects_blank_values() {
        assert!(JiraAuth::new(" ".to_string(), "token".to_string()).is_err());
        assert!(JiraAuth::new("me@example.com".to_string(), String::new()).is_err());
        assert!(JiraAuth::new("me@example.com".to_string(), "   ".to_string()).is_err());
    }

    #[test]
    fn test_token_edge_whitespace_is_kept() {
        let auth = JiraAuth::new("me@example.com".to_string(), " token".to_string()).unwrap();
        // base64("me@example.com: token")
        assert_eq!(auth.to_basic_auth(), "Basic bWVAZXhhbXBsZS5jb206IHRva2Vu");
    }
}
