//! Interactive menu loop

use anyhow::Result;
use jirabulk_core::{
    models::{Credentials, Task, TaskCategory},
    prompt::Prompter,
    selection::select_tasks,
};
use jirabulk_jira::{build_issues, BulkCreateResponse, JiraClient};
use std::io::Write;

pub const MENU_PROMPT: &str = "Which tasks do you want to create?";
pub const SELECTION_PROMPT: &str = r#"Enter comma-separated numbers to create (or "all")"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create(TaskCategory),
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 3] = [
        MenuChoice::Create(TaskCategory::Backend),
        MenuChoice::Create(TaskCategory::Frontend),
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> String {
        match self {
            MenuChoice::Create(category) => category.to_string(),
            MenuChoice::Exit => "Exit".to_string(),
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Result of one pass through a category
#[derive(Debug)]
pub enum Outcome {
    NothingSelected,
    Created(BulkCreateResponse),
    Failed(jirabulk_jira::Error),
}

pub struct App {
    backend: Vec<Task>,
    frontend: Vec<Task>,
    credentials: Credentials,
    client: JiraClient,
}

impl App {
    pub fn new(
        backend: Vec<Task>,
        frontend: Vec<Task>,
        credentials: Credentials,
        client: JiraClient,
    ) -> Self {
        Self {
            backend,
            frontend,
            credentials,
            client,
        }
    }

    pub fn tasks(&self, category: TaskCategory) -> &[Task] {
        match category {
            TaskCategory::Backend => &self.backend,
            TaskCategory::Frontend => &self.frontend,
        }
    }

    /// Show the menu until the user picks Exit.
    ///
    /// Submission failures are reported and the menu is shown again; only
    /// prompt and output errors end the loop early.
    pub async fn run<W: Write>(&self, prompter: &mut dyn Prompter, out: &mut W) -> Result<()> {
        let items: Vec<String> = MenuChoice::ALL.iter().map(MenuChoice::label).collect();

        loop {
            writeln!(out)?;
            let index = prompter.choose(MENU_PROMPT, &items)?;

            match MenuChoice::from_index(index) {
                Some(MenuChoice::Create(category)) => {
                    self.create_from(category, prompter, out).await?;
                }
                Some(MenuChoice::Exit) => break,
                None => writeln!(out, "Invalid choice.")?,
            }
        }

        tracing::info!("Exiting");
        Ok(())
    }

    /// List one category, ask for a selection and submit it
    pub async fn create_from<W: Write>(
        &self,
        category: TaskCategory,
        prompter: &mut dyn Prompter,
        out: &mut W,
    ) -> Result<Outcome> {
        let tasks = self.tasks(category);

        writeln!(out, "\nAvailable {} tasks:", category.name())?;
        for (i, task) in tasks.iter().enumerate() {
            writeln!(out, "{}. {} [{}]", i + 1, task.summary, task.tag_list())?;
        }

        let input = prompter.input(SELECTION_PROMPT)?;
        let selected = select_tasks(tasks, &input);
        tracing::info!(category = category.name(), selected = selected.len(), "Tasks selected");

        if selected.is_empty() {
            writeln!(out, "No tasks selected.")?;
            return Ok(Outcome::NothingSelected);
        }

        let issues = build_issues(selected, &self.credentials.project_key);

        match self.client.bulk_create(&issues).await {
            Ok(created) => {
                writeln!(out, "Issues created successfully!")?;
                for issue in &created.issues {
                    writeln!(out, "  {} {}", issue.key, issue.url)?;
                }
                if !created.errors.is_empty() {
                    writeln!(out, "Jira reported {} error(s):", created.errors.len())?;
                    for error in &created.errors {
                        writeln!(out, "  {}", error)?;
                    }
                }
                Ok(Outcome::Created(created))
            }
            Err(e) => {
                tracing::error!(error = %e, "Bulk creation failed");
                writeln!(out, "Error: {}", e)?;
                Ok(Outcome::Failed(e))
            }
        }
    }
}
