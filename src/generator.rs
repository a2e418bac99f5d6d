//! File generation: renders every template and writes it below the output root.

use log::debug;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::constants::{COMPOSE_FILE, DOCKERFILE, DOCKERIGNORE_FILE, WORKFLOW_FILE};
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::renderer::TemplateRenderer;

/// Maps a template to the file it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateTarget {
    /// Template identifier known to the renderer
    pub template: &'static str,
    /// Output path relative to the output root
    pub dest: &'static str,
}

/// Templates rendered on every run, in write order.
pub const TEMPLATES: [TemplateTarget; 4] = [
    TemplateTarget { template: "Dockerfile.j2", dest: DOCKERFILE },
    TemplateTarget { template: "docker-compose.yml.j2", dest: COMPOSE_FILE },
    TemplateTarget { template: "dockerignore", dest: DOCKERIGNORE_FILE },
    TemplateTarget { template: "deploy.yml.j2", dest: WORKFLOW_FILE },
];

/// Result of a generation run.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every template was written; holds the paths in write order
    Written(Vec<PathBuf>),
    /// The user declined to overwrite existing files; nothing was touched
    Cancelled,
}

/// Output paths from `templates` that already exist below `output_root`.
pub fn existing_outputs<P: AsRef<Path>>(output_root: P, templates: &[TemplateTarget]) -> Vec<&'static str> {
    let output_root = output_root.as_ref();
    templates
        .iter()
        .filter(|target| output_root.join(target.dest).exists())
        .map(|target| target.dest)
        .collect()
}

fn write_file(content: &str, dest_path: &Path) -> Result<()> {
    if let Some(parent) = dest_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content)?;
    Ok(())
}

/// Renders templates into an output directory.
pub struct Generator<'a> {
    engine: &'a dyn TemplateRenderer,
    prompt: &'a dyn Prompter,
    output_root: PathBuf,
    skip_overwrite_check: bool,
    templates: &'a [TemplateTarget],
}

impl<'a> Generator<'a> {
    pub fn new<P: AsRef<Path>>(
        engine: &'a dyn TemplateRenderer,
        prompt: &'a dyn Prompter,
        output_root: P,
        skip_overwrite_check: bool,
    ) -> Self {
        Self {
            engine,
            prompt,
            output_root: output_root.as_ref().to_path_buf(),
            skip_overwrite_check,
            templates: &TEMPLATES,
        }
    }

    /// Replaces the default template list.
    pub fn with_templates(mut self, templates: &'a [TemplateTarget]) -> Self {
        self.templates = templates;
        self
    }

    /// Asks whether existing outputs may be overwritten. Returns `true` when
    /// nothing exists or the check is skipped.
    fn confirm_overwrite(&self) -> Result<bool> {
        if self.skip_overwrite_check {
            return Ok(true);
        }
        let existing = existing_outputs(&self.output_root, self.templates);
        if existing.is_empty() {
            return Ok(true);
        }

        println!(
            "\n{}",
            console::style("Warning: The following files already exist:").yellow()
        );
        for file in &existing {
            println!("  - {file}");
        }
        self.prompt.confirm("Do you want to overwrite these files?", false)
    }

    /// Renders and writes every template.
    ///
    /// # Errors
    /// * `Error::GenerationError` naming the first file that failed to render
    ///   or write. Files written before it are left in place.
    pub fn generate(&self, config: &Config) -> Result<Outcome> {
        if !self.confirm_overwrite()? {
            debug!("Overwrite declined, leaving {} untouched", self.output_root.display());
            return Ok(Outcome::Cancelled);
        }

        let context = config.to_context()?;
        let mut written = Vec::with_capacity(self.templates.len());

        for target in self.templates {
            let dest_path = self.output_root.join(target.dest);
            debug!("Rendering {} into {}", target.template, dest_path.display());

            self.engine
                .render(target.template, &context)
                .and_then(|content| write_file(&content, &dest_path))
                .map_err(|e| Error::GenerationError {
                    file: target.dest.to_string(),
                    source: Box::new(e),
                })?;

            println!("  - Generated {}", console::style(target.dest).green());
            written.push(dest_path);
        }

        Ok(Outcome::Written(written))
    }
}
