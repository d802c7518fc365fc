use crate::{
    constants::naming::IDENTIFIER_PATTERN,
    error::{Error, Result},
};
use cruet::case::pascal::to_pascal_case;
use regex::Regex;
use std::sync::LazyLock;

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is valid"));

/// Checks that the component name can be used both as a file name and as a
/// JavaScript identifier. Names that are not PascalCase are accepted with a
/// warning.
pub fn validate_component_name(component_name: &str) -> Result<()> {
    if !IDENTIFIER_RE.is_match(component_name) {
        return Err(Error::ValidationError(format!(
            "component name '{component_name}' is not a valid identifier"
        )));
    }

    if to_pascal_case(component_name) != component_name {
        log::warn!(
            "Component name '{component_name}' is not PascalCase; the generated class name may look odd"
        );
    }
    Ok(())
}

/// Checks that the feature folder name is a single path segment.
pub fn validate_feature_name(feature_folder_name: &str) -> Result<()> {
    if feature_folder_name.is_empty() {
        return Err(Error::ValidationError("feature folder name must not be empty".into()));
    }
    if feature_folder_name.contains(['/', '\\']) {
        return Err(Error::ValidationError(format!(
            "feature folder name '{feature_folder_name}' must not contain path separators"
        )));
    }
    if feature_folder_name == "." || feature_folder_name == ".." {
        return Err(Error::ValidationError(format!(
            "feature folder name '{feature_folder_name}' is not a folder name"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_identifier_regex_matches_js_identifiers() {
        assert!(IDENTIFIER_RE.is_match("Login"));
        assert!(IDENTIFIER_RE.is_match("$el"));
        assert!(!IDENTIFIER_RE.is_match("9Lives"));
    }

    #[test]
    fn accepts_identifiers() {
        for name in ["Login", "ProfileCard", "a", "_Private", "$Dollar", "Card2"] {
            assert!(validate_component_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_non_identifiers() {
        for name in ["", "2Card", "Profile-Card", "Profile Card", "../Escape", "a/b"] {
            let err = validate_component_name(name).unwrap_err();
            assert!(matches!(err, Error::ValidationError(_)), "{name} should be invalid");
        }
    }

    #[test]
    fn accepts_single_segment_feature_names() {
        for name in ["auth", "user-profile", "Shop", "a.b"] {
            assert!(validate_feature_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_paths_as_feature_names() {
        for name in ["", ".", "..", "auth/login", "auth\\login"] {
            assert!(validate_feature_name(name).is_err(), "{name} should be invalid");
        }
    }
}
