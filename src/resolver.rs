//! Configuration resolution.
//!
//! Merges explicit options, interactive answers and hardcoded defaults into a
//! total [`Config`], asking only the questions that are still relevant.

use std::collections::VecDeque;

use indexmap::IndexMap;
use log::debug;
use serde_json::{Map, Value};

use crate::config::{Config, ExplicitOptions, DEFAULT_MAIN_BRANCH, DEFAULT_PROJECT_NAME};
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::question::{Context, Step};
use crate::questionnaire::build_steps;

/// Runs `steps` in order and returns the collected answers.
///
/// Questions whose predicate is false are skipped and left out of the result.
/// Questions that were explicitly supplied or already answered are never
/// asked. An [`Step::Expand`] placeholder appends the questions it computes
/// to the end of the queue.
pub fn ask_questions(
    prompter: &dyn Prompter,
    explicit: &Map<String, Value>,
    steps: Vec<Step>,
) -> Result<IndexMap<String, Value>> {
    let mut answers = IndexMap::new();
    let mut queue: VecDeque<Step> = steps.into();

    while let Some(step) = queue.pop_front() {
        match step {
            Step::Ask(question) => {
                let context = Context::new(explicit, &answers);
                if context.is_explicit(question.name) || context.is_answered(question.name) {
                    debug!("Skipping '{}': already resolved", question.name);
                    continue;
                }
                if !question.is_relevant(&context) {
                    debug!("Skipping '{}': not relevant", question.name);
                    continue;
                }
                let default = question.default_answer(&context);
                let value = prompter.answer(&question, default)?;
                debug!("Answered '{}' with {}", question.name, value);
                answers.insert(question.name.to_string(), value);
            }
            Step::Expand(expand) => {
                let context = Context::new(explicit, &answers);
                let expanded: Vec<Step> = expand(&context)
                    .into_iter()
                    .filter(|question| !context.is_explicit(question.name))
                    .map(Step::Ask)
                    .collect();
                debug!("Expanded {} deployment question(s)", expanded.len());
                queue.extend(expanded);
            }
        }
    }

    Ok(answers)
}

/// Merges the three configuration sources with precedence
/// explicit options > answers > defaults.
pub fn merge(explicit: &Map<String, Value>, answers: &IndexMap<String, Value>) -> Result<Config> {
    let context = Context::new(explicit, answers);
    let project_name = context.text("projectName").unwrap_or(DEFAULT_PROJECT_NAME);
    let main_branch = context.text("mainBranch").unwrap_or(DEFAULT_MAIN_BRANCH);

    let mut merged = match Config::defaults_for(project_name, main_branch).to_context()? {
        Value::Object(map) => map,
        other => {
            return Err(Error::ConfigError(format!("defaults serialized to {other}")));
        }
    };
    for (key, value) in answers {
        merged.insert(key.clone(), value.clone());
    }
    for (key, value) in explicit {
        merged.insert(key.clone(), value.clone());
    }

    Config::from_context(Value::Object(merged))
}

/// Resolves the final configuration for one run of `init`.
///
/// # Arguments
/// * `prompter` - Asks the questions that are still open
/// * `options` - Values supplied on the command line
/// * `directory_name` - Offered as the default project name
pub fn resolve(
    prompter: &dyn Prompter,
    options: &ExplicitOptions,
    directory_name: &str,
) -> Result<Config> {
    let explicit = options.to_map()?;
    debug!("Explicit options: {:?}", explicit.keys().collect::<Vec<_>>());

    let steps = build_steps(directory_name, |name| explicit.contains_key(name));
    let answers = ask_questions(prompter, &explicit, steps)?;

    merge(&explicit, &answers)
}

/// Name of `dir`'s last component, used as the default project name.
pub fn directory_name(dir: &std::path::Path) -> String {
    dir.file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_PROJECT_NAME)
        .to_string()
}
