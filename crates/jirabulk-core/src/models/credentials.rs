//! Jira credentials

use std::fmt;

/// Complete set of values needed to talk to one Jira project
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub api_token: String,
    pub project_key: String,
}

impl Credentials {
    pub fn new(
        email: impl Into<String>,
        api_token: impl Into<String>,
        project_key: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            api_token: api_token.into(),
            project_key: project_key.into(),
        }
    }
}

// Keep the token out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .field("project_key", &self.project_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let creds = Credentials::new("me@example.com", "s3cret-token", "FLIC");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("me@example.com"));
        assert!(debug.contains("FLIC"));
        assert!(!debug.contains("s3cret-token"));
    }
}
