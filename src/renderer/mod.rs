//! Template rendering for generated files
//!
//! - `interface`: the `TemplateRenderer` trait
//! - `minijinja`: the MiniJinja-backed implementation
//! - `templates`: built-in template sources and their typed contexts

pub mod interface;
pub mod minijinja;
pub mod templates;

pub use interface::TemplateRenderer;
pub use self::minijinja::MiniJinjaRenderer;
pub use templates::{
    ComponentContext, IndexImportContext, StylesheetContext, Template,
    TypesInterfaceContext,
};
