//! Optional dotenv file holding Jira credentials

use crate::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const EMAIL_VAR: &str = "JIRA_EMAIL";
pub const API_TOKEN_VAR: &str = "JIRA_API_TOKEN";
pub const PROJECT_KEY_VAR: &str = "JIRA_PROJECT_KEY";

/// Variables read from the environment file, in reporting order
pub const CREDENTIAL_VARS: [&str; 3] = [EMAIL_VAR, API_TOKEN_VAR, PROJECT_KEY_VAR];

/// Values from an environment file that exists on disk
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl EnvSource {
    /// Look for the environment file once at startup.
    ///
    /// Returns `None` when the file does not exist. Variables already set in
    /// the process environment take precedence over the file, matching dotenv
    /// semantics.
    pub fn discover(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No environment file");
            return Ok(None);
        }

        let mut source = Self::read(path)?;
        for var in CREDENTIAL_VARS {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    source.values.insert(var.to_string(), value);
                }
            }
        }

        tracing::info!(path = %path.display(), "Loaded environment file");
        Ok(Some(source))
    }

    fn read(path: &Path) -> Result<Self> {
        let env_error = |e: dotenvy::Error| Error::EnvFile {
            path: PathBuf::from(path),
            reason: e.to_string(),
        };

        let mut values = HashMap::new();
        for item in dotenvy::from_path_iter(path).map_err(env_error)? {
            let (key, value) = item.map_err(env_error)?;
            values.insert(key, value);
        }

        Ok(Self {
            path: PathBuf::from(path),
            values,
        })
    }

    pub fn from_pairs<I, K, V>(path: impl Into<PathBuf>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            path: path.into(),
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-empty value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn clear_process_env() {
        for var in CREDENTIAL_VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        assert!(EnvSource::discover(&dir.path().join(".env")).unwrap().is_none());
    }

    #[test]
    #[serial]
    fn test_reads_values_from_file() {
        clear_process_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# jira\nJIRA_EMAIL=me@example.com\nJIRA_API_TOKEN=\"abc 123\"\nJIRA_PROJECT_KEY=FLIC\n",
        )
        .unwrap();

        let source = EnvSource::discover(&path).unwrap().unwrap();
        assert_eq!(source.get(EMAIL_VAR), Some("me@example.com"));
        assert_eq!(source.get(API_TOKEN_VAR), Some("abc 123"));
        assert_eq!(source.get(PROJECT_KEY_VAR), Some("FLIC"));
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    #[serial]
    fn test_process_env_takes_precedence() {
        clear_process_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "JIRA_PROJECT_KEY=FILE\n").unwrap();

        unsafe {
            std::env::set_var(PROJECT_KEY_VAR, "PROC");
        }
        let source = EnvSource::discover(&path).unwrap().unwrap();
        clear_process_env();

        assert_eq!(source.get(PROJECT_KEY_VAR), Some("PROC"));
        assert_eq!(source.get(EMAIL_VAR), None);
    }

    #[test]
    #[serial]
    fn test_unparseable_file_is_error() {
        clear_process_env();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "JIRA_EMAIL='unterminated\n").unwrap();

        assert!(matches!(
            EnvSource::discover(&path),
            Err(Error::EnvFile { .. })
        ));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let source = EnvSource::from_pairs(".env", [(EMAIL_VAR, "")]);
        assert_eq!(source.get(EMAIL_VAR), None);
    }
}
