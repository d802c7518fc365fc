use crate::{
    error::Result,
    renderer::{interface::TemplateRenderer, templates::Template},
};
use minijinja::{AutoEscape, Environment};

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment with every built-in template registered
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with the built-in templates loaded.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        // Generated files are source code, never HTML.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);

        for template in Template::ALL {
            env.add_template(template.name(), template.source())?;
        }

        Ok(Self { env })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: Template, context: minijinja::Value) -> Result<String> {
        let tmpl = self.env.get_template(template.name())?;
        log::trace!("Rendering template '{}'", template.name());
        Ok(tmpl.render(context)?)
    }
}
