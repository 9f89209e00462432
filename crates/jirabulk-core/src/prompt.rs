//! Input provider used by credential resolution and the menu loop

use crate::{Error, Result};
use std::collections::VecDeque;

/// Source of interactive answers.
///
/// The CLI implements this over the terminal; tests use [`ScriptedPrompter`].
pub trait Prompter {
    /// Free-form line of text, may be empty
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Line of text that must not be echoed
    fn secret(&mut self, prompt: &str) -> Result<String>;

    /// Index of the chosen item
    fn choose(&mut self, prompt: &str, items: &[String]) -> Result<usize>;
}

/// Scripted answer for [`ScriptedPrompter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Secret(String),
    Choice(usize),
}

/// Replays a fixed list of answers and records every prompt shown
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> Result<Answer> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| Error::Prompt(format!("no scripted answer for '{}'", prompt)))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Text(text) => Ok(text),
            other => Err(Error::Prompt(format!("expected text for '{}', got {:?}", prompt, other))),
        }
    }

    fn secret(&mut self, prompt: &str) -> Result<String> {
        match self.next(prompt)? {
            Answer::Secret(text) => Ok(text),
            other => Err(Error::Prompt(format!("expected secret for '{}', got {:?}", prompt, other))),
        }
    }

    fn choose(&mut self, prompt: &str, items: &[String]) -> Result<usize> {
        match self.next(prompt)? {
            Answer::Choice(index) if index < items.len() => Ok(index),
            Answer::Choice(index) => Err(Error::Prompt(format!(
                "choice {} out of range for '{}'",
                index, prompt
            ))),
            other => Err(Error::Prompt(format!("expected choice for '{}', got {:?}", prompt, other))),
        }
    }
}
