use crate::constants::naming::{CLASS_NAME_SEPARATOR, PROPS_SUFFIX, UNTYPED_PROPS};

/// Derives the CSS class name for a component inside a feature folder.
///
/// The result starts with `<feature>-`, followed by the component name with
/// every ASCII uppercase letter past the first position turned into
/// `-<lowercase>`. Only `A`-`Z` count as uppercase.
///
/// # Examples
/// ```
/// use numu::naming::class_name;
///
/// assert_eq!(class_name("user", "ProfileCard"), "user-profile-card");
/// assert_eq!(class_name("user", "a"), "user-a");
/// ```
pub fn class_name(feature_folder_name: &str, component_name: &str) -> String {
    let mut class_name =
        String::with_capacity(feature_folder_name.len() + component_name.len() * 2 + 1);
    class_name.push_str(feature_folder_name);
    class_name.push(CLASS_NAME_SEPARATOR);

    for (index, c) in component_name.chars().enumerate() {
        if c.is_ascii_uppercase() && index > 0 {
            class_name.push(CLASS_NAME_SEPARATOR);
        }
        class_name.push(c.to_ascii_lowercase());
    }
    class_name
}

/// Name of the props parameter type: `<Name>Props` in TypeScript mode,
/// plain `props` otherwise.
pub fn props_name(component_name: &str, use_typescript: bool) -> String {
    if use_typescript {
        format!("{component_name}{PROPS_SUFFIX}")
    } else {
        UNTYPED_PROPS.to_string()
    }
}
