//! Translate local tasks into Jira issue payloads

use crate::adf::AdfDocument;
use crate::types::{IssueFields, IssuePayload, IssueTypeRef, ProjectRef, ISSUE_TYPE_TASK};
use jirabulk_core::models::Task;

/// Task description followed by one `- summary: description` line per subtask
pub fn combined_description(task: &Task) -> String {
    if task.subtasks.is_empty() {
        return task.description.clone();
    }

    let lines: Vec<String> = task
        .subtasks
        .iter()
        .map(|sub| format!("- {}: {}", sub.summary, sub.description))
        .collect();

    format!("{}\n\n{}", task.description, lines.join("\n"))
}

pub fn build_issue(task: &Task, project_key: &str) -> IssuePayload {
    IssuePayload {
        fields: IssueFields {
            project: ProjectRef {
                key: project_key.to_string(),
            },
            summary: task.summary.clone(),
            description: AdfDocument::from_text(combined_description(task)),
            issue_type: IssueTypeRef {
                name: ISSUE_TYPE_TASK.to_string(),
            },
            labels: task.tags.clone(),
        },
    }
}

/// One payload per task, in the same order
pub fn build_issues<'a, I>(tasks: I, project_key: &str) -> Vec<IssuePayload>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .map(|task| build_issue(task, project_key))
        .collect()
}
