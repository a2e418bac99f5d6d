//! Question descriptors and the answer context their predicates run against.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Relevance predicate: the question is asked only when this returns `true`.
pub type Predicate = fn(&Context<'_>) -> bool;

/// Computes questions whose set depends on earlier answers.
pub type Expansion = fn(&Context<'_>) -> Vec<Question>;

/// View over the explicit options and the answers collected so far.
///
/// Explicit options always win over answers. Hardcoded defaults are not
/// visible here: a field that was neither supplied nor answered reads as unset.
pub struct Context<'a> {
    explicit: &'a Map<String, Value>,
    answers: &'a IndexMap<String, Value>,
}

impl<'a> Context<'a> {
    pub fn new(explicit: &'a Map<String, Value>, answers: &'a IndexMap<String, Value>) -> Self {
        Self { explicit, answers }
    }

    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.explicit.get(name).or_else(|| self.answers.get(name))
    }

    /// Boolean value of `name`; unset reads as `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Non-empty string value of `name`.
    pub fn text(&self, name: &str) -> Option<&'a str> {
        self.get(name).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    pub fn is_explicit(&self, name: &str) -> bool {
        self.explicit.contains_key(name)
    }

    pub fn is_answered(&self, name: &str) -> bool {
        self.answers.contains_key(name)
    }
}

/// One entry of an enumerated question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Text shown to the user
    pub label: &'static str,
    /// Value stored in the configuration
    pub value: &'static str,
}

impl Choice {
    pub const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }

    /// A choice displayed as its own value.
    pub const fn plain(value: &'static str) -> Self {
        Self { label: value, value }
    }
}

/// Default of a free-text question.
pub enum TextDefault {
    Fixed(String),
    /// Computed from earlier answers when the question comes up
    Derived(fn(&Context<'_>) -> String),
}

pub enum QuestionKind {
    Text { default: TextDefault },
    Select { choices: Vec<Choice>, default: &'static str },
    Confirm { default: bool },
}

/// A single question about one configuration field.
pub struct Question {
    /// Configuration field the answer is stored under
    pub name: &'static str,
    pub message: &'static str,
    pub kind: QuestionKind,
    pub when: Option<Predicate>,
}

impl Question {
    pub fn text(name: &'static str, message: &'static str, default: impl Into<String>) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Text { default: TextDefault::Fixed(default.into()) },
            when: None,
        }
    }

    pub fn derived_text(
        name: &'static str,
        message: &'static str,
        default: fn(&Context<'_>) -> String,
    ) -> Self {
        Self {
            name,
            message,
            kind: QuestionKind::Text { default: TextDefault::Derived(default) },
            when: None,
        }
    }

    pub fn select(
        name: &'static str,
        message: &'static str,
        choices: Vec<Choice>,
        default: &'static str,
    ) -> Self {
        Self { name, message, kind: QuestionKind::Select { choices, default }, when: None }
    }

    pub fn confirm(name: &'static str, message: &'static str, default: bool) -> Self {
        Self { name, message, kind: QuestionKind::Confirm { default }, when: None }
    }

    /// Attaches a relevance predicate.
    pub fn when(mut self, predicate: Predicate) -> Self {
        self.when = Some(predicate);
        self
    }

    pub fn is_relevant(&self, context: &Context<'_>) -> bool {
        self.when.map_or(true, |predicate| predicate(context))
    }

    /// Answer used when the user accepts the default.
    pub fn default_answer(&self, context: &Context<'_>) -> Value {
        match &self.kind {
            QuestionKind::Text { default: TextDefault::Fixed(value) } => {
                Value::String(value.clone())
            }
            QuestionKind::Text { default: TextDefault::Derived(derive) } => {
                Value::String(derive(context))
            }
            QuestionKind::Select { default, .. } => Value::String(default.to_string()),
            QuestionKind::Confirm { default } => Value::Bool(*default),
        }
    }
}

/// An entry of the question queue.
pub enum Step {
    Ask(Question),
    /// Placeholder replaced by the questions it computes once reached
    Expand(Expansion),
}
