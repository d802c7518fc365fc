//! Built-in templates and the typed contexts that feed them.

use serde::Serialize;

const COMPONENT_TEMPLATE: &str = r#"{% if use_typescript %}import { {{ props_name }} } from './types';
{% endif %}{% if create_css %}import './{{ component_name }}.css';
{% endif %}{% if use_typescript or create_css %}
{% endif %}export function {{ component_name }}({% if use_typescript %}props: {% endif %}{{ props_name }}) {
  return (
    <div{% if create_css %} className="{{ class_name }}"{% endif %}>
    </div>
  );
}
"#;

const STYLESHEET_TEMPLATE: &str = r#".{{ class_name }} {
  /* class properties go here */
}
"#;

const INDEX_IMPORT_TEMPLATE: &str =
    r#"{% if not_empty %}{{ "\n" }}{% endif %}import './{{ component_name }}';"#;

const TYPES_INTERFACE_TEMPLATE: &str = r#"{{ separator }}export interface {{ props_name }} {
  // properties go here
}"#;

/// The templates numu knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Component,
    Stylesheet,
    IndexImport,
    TypesInterface,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Component,
        Template::Stylesheet,
        Template::IndexImport,
        Template::TypesInterface,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Template::Component => "component",
            Template::Stylesheet => "stylesheet",
            Template::IndexImport => "index_import",
            Template::TypesInterface => "types_interface",
        }
    }

    pub fn source(self) -> &'static str {
        match self {
            Template::Component => COMPONENT_TEMPLATE,
            Template::Stylesheet => STYLESHEET_TEMPLATE,
            Template::IndexImport => INDEX_IMPORT_TEMPLATE,
            Template::TypesInterface => TYPES_INTERFACE_TEMPLATE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ComponentContext<'a> {
    pub component_name: &'a str,
    pub class_name: &'a str,
    pub props_name: &'a str,
    pub create_css: bool,
    pub use_typescript: bool,
}

#[derive(Debug, Serialize)]
pub struct StylesheetContext<'a> {
    pub class_name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct IndexImportContext<'a> {
    pub component_name: &'a str,
    /// The index file already has content, so the import goes on a new line.
    pub not_empty: bool,
}

#[derive(Debug, Serialize)]
pub struct TypesInterfaceContext<'a> {
    pub props_name: &'a str,
    /// Newlines needed to leave one blank line after the existing content.
    pub separator: &'a str,
}
