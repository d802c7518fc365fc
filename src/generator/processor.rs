use crate::{
    error::{Error, Result},
    generator::{
        operation::GenerateOperation,
        params::{ComponentParams, TargetPaths},
    },
    ioutils::{append_to_file, create_new_file, ends_with_newline, existing_file_len},
    renderer::{
        ComponentContext, IndexImportContext, StylesheetContext, Template,
        TemplateRenderer, TypesInterfaceContext,
    },
};
use minijinja::Value;

/// Generates one component into a feature folder.
///
/// Generation is a single pass: preconditions are checked first, then every
/// operation is planned, then the operations run in order. A failure in the
/// last phase leaves the files written so far in place.
pub struct ComponentGenerator<'a> {
    renderer: &'a dyn TemplateRenderer,
    params: &'a ComponentParams,
    paths: TargetPaths,
    class_name: String,
    props_name: String,
}

impl<'a> ComponentGenerator<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, params: &'a ComponentParams) -> Self {
        Self {
            renderer,
            params,
            paths: params.target_paths(),
            class_name: params.class_name(),
            props_name: params.props_name(),
        }
    }

    /// Checks, plans and performs the generation. Returns the operations in
    /// the order they were applied (or would be, in a dry run).
    pub fn generate(&self) -> Result<Vec<GenerateOperation>> {
        self.check_preconditions()?;
        let operations = self.plan()?;

        for operation in &operations {
            log::debug!("Handling operation: {:?}", operation.target_path());
            if let Err(e) = self.apply(operation) {
                log::error!("Failed to {}", operation.error_context());
                return Err(e);
            }
            log::info!("{}", operation.get_message(self.params.dry_run));
        }
        Ok(operations)
    }

    /// Fails when the feature folder is missing or the component file is
    /// already there. Nothing is touched before these checks pass.
    pub fn check_preconditions(&self) -> Result<()> {
        log::debug!("Resolved feature folder: {}", self.paths.feature_dir.display());

        if !self.paths.feature_dir.is_dir() {
            return Err(Error::FeatureFolderNotFound {
                feature_dir: self.paths.feature_dir.display().to_string(),
            });
        }
        if self.paths.component_file.exists() {
            return Err(Error::ComponentExists {
                component_file: self.paths.component_file.display().to_string(),
            });
        }
        Ok(())
    }

    /// Renders every file change without applying any of them.
    pub fn plan(&self) -> Result<Vec<GenerateOperation>> {
        let mut operations = vec![GenerateOperation::Create {
            target: self.paths.component_file.clone(),
            content: self.render_component()?,
        }];

        if let Some(stylesheet_file) = &self.paths.stylesheet_file {
            let context = StylesheetContext { class_name: &self.class_name };
            operations.push(GenerateOperation::Create {
                target: stylesheet_file.clone(),
                content: self
                    .renderer
                    .render(Template::Stylesheet, Value::from_serialize(&context))?,
            });
        }

        if let Some(len) = existing_file_len(&self.paths.index_file)? {
            let context = IndexImportContext {
                component_name: &self.params.component_name,
                not_empty: len != 0,
            };
            operations.push(GenerateOperation::Append {
                target: self.paths.index_file.clone(),
                content: self
                    .renderer
                    .render(Template::IndexImport, Value::from_serialize(&context))?,
            });
        } else {
            log::debug!(
                "No index file at {}, skipping import",
                self.paths.index_file.display()
            );
        }

        if let Some(types_file) = &self.paths.types_file {
            if let Some(len) = existing_file_len(types_file)? {
                let separator = match (len, ends_with_newline(types_file)?) {
                    (0, _) => "",
                    (_, true) => "\n",
                    (_, false) => "\n\n",
                };
                let context =
                    TypesInterfaceContext { props_name: &self.props_name, separator };
                operations.push(GenerateOperation::Append {
                    target: types_file.clone(),
                    content: self.renderer.render(
                        Template::TypesInterface,
                        Value::from_serialize(&context),
                    )?,
                });
            } else {
                log::debug!("No types file at {}, skipping interface", types_file.display());
            }
        }

        Ok(operations)
    }

    fn render_component(&self) -> Result<String> {
        let context = ComponentContext {
            component_name: &self.params.component_name,
            class_name: &self.class_name,
            props_name: &self.props_name,
            create_css: self.params.create_css,
            use_typescript: self.params.use_typescript,
        };
        self.renderer.render(Template::Component, Value::from_serialize(&context))
    }

    fn apply(&self, operation: &GenerateOperation) -> Result<()> {
        if self.params.dry_run {
            return Ok(());
        }
        match operation {
            GenerateOperation::Create { target, content } => create_new_file(content, target),
            GenerateOperation::Append { target, content } => append_to_file(content, target),
        }
    }
}
