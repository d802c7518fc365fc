use crate::error::Result;
use crate::renderer::templates::Template;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders one of the built-in templates with the given context.
    ///
    /// # Arguments
    /// * `template` - Built-in template to render
    /// * `context` - Context built from one of the typed context structs
    ///   via [`minijinja::Value::from_serialize`]
    ///
    /// # Returns
    /// * `Result<String>` - Rendered file content
    fn render(&self, template: Template, context: minijinja::Value) -> Result<String>;
}
