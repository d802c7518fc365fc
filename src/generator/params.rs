use std::path::PathBuf;

use crate::{
    constants::files::{
        CSS_EXTENSION, INDEX_JS, INDEX_TS, JSX_EXTENSION, TSX_EXTENSION, TYPES_TS,
    },
    error::Result,
    naming,
    validation::{validate_component_name, validate_feature_name},
};

/// Everything one `add` invocation needs, resolved once from the command
/// line and the project config.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentParams {
    pub component_name: String,
    pub feature_folder_name: String,
    pub create_css: bool,
    pub use_typescript: bool,
    /// Project root the features directory is resolved against.
    pub project_dir: PathBuf,
    /// Feature-folder root relative to `project_dir`.
    pub features_dir: PathBuf,
    pub dry_run: bool,
}

/// Paths derived from [`ComponentParams`] by plain joins.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetPaths {
    pub feature_dir: PathBuf,
    pub component_file: PathBuf,
    /// Set only when a stylesheet is requested.
    pub stylesheet_file: Option<PathBuf>,
    pub index_file: PathBuf,
    /// Set only in TypeScript mode.
    pub types_file: Option<PathBuf>,
}

impl ComponentParams {
    /// Validates both names and returns the parameters unchanged.
    pub fn validated(self) -> Result<Self> {
        validate_feature_name(&self.feature_folder_name)?;
        validate_component_name(&self.component_name)?;
        Ok(self)
    }

    pub fn class_name(&self) -> String {
        naming::class_name(&self.feature_folder_name, &self.component_name)
    }

    pub fn props_name(&self) -> String {
        naming::props_name(&self.component_name, self.use_typescript)
    }

    pub fn component_extension(&self) -> &'static str {
        if self.use_typescript {
            TSX_EXTENSION
        } else {
            JSX_EXTENSION
        }
    }

    pub fn target_paths(&self) -> TargetPaths {
        let feature_dir =
            self.project_dir.join(&self.features_dir).join(&self.feature_folder_name);
        let component_file = feature_dir
            .join(format!("{}.{}", self.component_name, self.component_extension()));
        let stylesheet_file = self.create_css.then(|| {
            feature_dir.join(format!("{}.{}", self.component_name, CSS_EXTENSION))
        });
        let index_file =
            feature_dir.join(if self.use_typescript { INDEX_TS } else { INDEX_JS });
        let types_file = self.use_typescript.then(|| feature_dir.join(TYPES_TS));

        TargetPaths { feature_dir, component_file, stylesheet_file, index_file, types_file }
    }
}
