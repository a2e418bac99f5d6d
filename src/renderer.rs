//! Template renderer for docker-scaffold.
//! The templates ship inside the binary and are rendered with MiniJinja.
use crate::error::Result;
use minijinja::{AutoEscape, Environment};

/// Templates embedded at build time, keyed by name.
pub const EMBEDDED_TEMPLATES: [(&str, &str); 4] = [
    ("Dockerfile.j2", include_str!("../templates/Dockerfile.j2")),
    ("docker-compose.yml.j2", include_str!("../templates/docker-compose.yml.j2")),
    ("dockerignore", include_str!("../templates/dockerignore")),
    ("deploy.yml.j2", include_str!("../templates/deploy.yml.j2")),
];

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template called `name` with the given context.
    ///
    /// # Arguments
    /// * `name` - Identifier of the template
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer preloaded with the embedded templates.
    pub fn new() -> Result<Self> {
        Self::with_templates(EMBEDDED_TEMPLATES)
    }

    /// Creates a renderer with the given templates only.
    pub fn with_templates<I>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let mut env = Self::environment();
        for (name, source) in templates {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    fn environment() -> Environment<'static> {
        let mut env = Environment::new();
        // Outputs are YAML and Dockerfiles, not markup
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` if:
    ///   - No template with that name is registered
    ///   - Rendering fails
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}
