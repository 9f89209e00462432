//! Task list loading (JSON arrays of tasks)

use crate::{
    models::{Task, TaskCategory, TasksConfig},
    Error, Result,
};
use std::path::{Path, PathBuf};

pub struct TaskStorage {
    config: TasksConfig,
}

impl TaskStorage {
    pub fn new(config: TasksConfig) -> Self {
        Self { config }
    }

    pub fn path(&self, category: TaskCategory) -> &Path {
        match category {
            TaskCategory::Backend => &self.config.backend,
            TaskCategory::Frontend => &self.config.frontend,
        }
    }

    pub fn load(&self, category: TaskCategory) -> Result<Vec<Task>> {
        let tasks = Self::load_file(self.path(category))?;
        tracing::info!(category = category.name(), count = tasks.len(), "Loaded tasks");
        Ok(tasks)
    }

    /// Load both lists, backend first
    pub fn load_all(&self) -> Result<(Vec<Task>, Vec<Task>)> {
        let backend = self.load(TaskCategory::Backend)?;
        let frontend = self.load(TaskCategory::Frontend)?;
        Ok((backend, frontend))
    }

    pub fn load_file(path: &Path) -> Result<Vec<Task>> {
        let invalid = |reason: String| Error::TaskFileInvalid {
            path: PathBuf::from(path),
            reason,
        };

        let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_both_lists() {
        let dir = TempDir::new().unwrap();
        let backend = write(
            &dir,
            "backend.json",
            r#"[{"summary": "Add login", "description": "Implement auth", "tags": ["backend"],
                 "subtasks": [{"summary": "JWT", "description": "add JWT issuing"}]}]"#,
        );
        let frontend = write(
            &dir,
            "frontend.json",
            r#"[{"summary": "Login form", "description": "Build form", "tags": ["ui"]},
                {"summary": "Logout", "description": "Add button", "tags": []}]"#,
        );

        let storage = TaskStorage::new(TasksConfig { backend, frontend });
        let (backend, frontend) = storage.load_all().unwrap();

        assert_eq!(backend.len(), 1);
        assert_eq!(backend[0].subtasks.len(), 1);
        assert_eq!(frontend.len(), 2);
        assert_eq!(frontend[1].summary, "Logout");
    }

    #[test]
    fn test_missing_file_names_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.json");

        match TaskStorage::load_file(&path) {
            Err(Error::TaskFileInvalid { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected TaskFileInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_names_offending_file() {
        let dir = TempDir::new().unwrap();
        let backend = write(&dir, "backend.json", "[]");
        let frontend = write(&dir, "frontend.json", "[{\"summary\": ");

        let storage = TaskStorage::new(TasksConfig {
            backend,
            frontend: frontend.clone(),
        });

        let err = storage.load_all().unwrap_err();
        assert!(err.to_string().contains("frontend.json"));
        assert!(matches!(err, Error::TaskFileInvalid { path, .. } if path == frontend));
    }

    #[test]
    fn test_null_subtasks_accepted() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "backend.json",
            r#"[{"summary": "A", "description": "d", "tags": [], "subtasks": null}]"#,
        );

        let tasks = TaskStorage::load_file(&path).unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].subtasks.is_empty());
    }

    #[test]
    fn test_missing_required_field() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "backend.json", r#"[{"summary": "No description", "tags": []}]"#);

        let err = TaskStorage::load_file(&path).unwrap_err();
        assert!(err.to_string().contains("description"));
    }
}
