//! User input and interaction handling.

use crate::error::{Error, Result};
use crate::question::{Question, QuestionKind};
use dialoguer::{Confirm, Input, Select};
use serde_json::Value;

/// Trait for asking the user questions.
pub trait Prompter {
    /// Asks `question` and returns the answer as a JSON value.
    ///
    /// # Arguments
    /// * `question` - The question to ask
    /// * `default` - Default answer, already resolved against earlier answers
    fn answer(&self, question: &Question, default: Value) -> Result<Value>;

    /// Asks a yes/no question outside the questionnaire.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn answer(&self, question: &Question, default: Value) -> Result<Value> {
        match &question.kind {
            QuestionKind::Text { .. } => {
                let input: String = Input::new()
                    .with_prompt(question.message)
                    .default(default.as_str().unwrap_or_default().to_string())
                    .interact_text()
                    .map_err(|e| Error::PromptError(e.to_string()))?;
                Ok(Value::String(input))
            }
            QuestionKind::Select { choices, .. } => {
                let default_index = default
                    .as_str()
                    .and_then(|value| choices.iter().position(|choice| choice.value == value))
                    .unwrap_or(0);
                let labels: Vec<&str> = choices.iter().map(|choice| choice.label).collect();

                let selection = Select::new()
                    .with_prompt(question.message)
                    .default(default_index)
                    .items(&labels)
                    .interact()
                    .map_err(|e| Error::PromptError(e.to_string()))?;

                Ok(Value::String(choices[selection].value.to_string()))
            }
            QuestionKind::Confirm { .. } => {
                let result = self.confirm(question.message, default.as_bool().unwrap_or(false))?;
                Ok(Value::Bool(result))
            }
        }
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
