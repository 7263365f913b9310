//! Template rendering for generated configuration files.
use crate::error::{BaseAppError, BaseAppResult};
use minijinja::Environment;
use serde::Serialize;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `BaseAppResult<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> BaseAppResult<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that keeps trailing newlines, so rendered files end
    /// exactly as their templates do.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `BaseAppError::MinijinjaError` if the template fails to parse or render
    fn render(&self, template: &str, context: &serde_json::Value) -> BaseAppResult<String> {
        self.env
            .render_str(template, context)
            .map_err(BaseAppError::MinijinjaError)
    }
}

/// Converts any serializable value into a rendering context.
pub fn to_context<T: Serialize>(value: &T) -> BaseAppResult<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| BaseAppError::ConfigError(e.to_string()))
}
