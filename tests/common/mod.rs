use std::cell::RefCell;
use std::collections::HashMap;

use docker_scaffold::error::Result;
use docker_scaffold::prompt::Prompter;
use docker_scaffold::question::Question;
use serde_json::Value;

/// Prompter that answers from a script and falls back to the offered default.
/// Records every question name it was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: HashMap<&'static str, Value>,
    overwrite: bool,
    asked: RefCell<Vec<String>>,
    confirmations: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.answers.insert(name, value.into());
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    pub fn was_asked(&self, name: &str) -> bool {
        self.asked.borrow().iter().any(|asked| asked == name)
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn answer(&self, question: &Question, default: Value) -> Result<Value> {
        self.asked.borrow_mut().push(question.name.to_string());
        Ok(self.answers.get(question.name).cloned().unwrap_or(default))
    }

    fn confirm(&self, message: &str, _default: bool) -> Result<bool> {
        self.confirmations.borrow_mut().push(message.to_string());
        Ok(self.overwrite)
    }
}
