use crate::constants::{exit_codes, messages};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse JSON config file. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML config file. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The project config file was parsed but holds an unusable value.
    #[error("Invalid configuration in '{config_file}': {reason}.")]
    ConfigValidation { config_file: String, reason: String },

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("{msg} ('{feature_dir}')", msg = messages::FEATURE_FOLDER_NOT_FOUND)]
    FeatureFolderNotFound { feature_dir: String },

    #[error("{msg} ('{component_file}')", msg = messages::COMPONENT_EXISTS)]
    ComponentExists { component_file: String },

    #[error("Cannot {operation}. Original error: {e}")]
    ProcessError { operation: String, e: std::io::Error },
}

/// Convenience type alias for Results with numu's Error as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_messages_are_user_facing() {
        let err = Error::FeatureFolderNotFound { feature_dir: "src/features/auth".into() };
        assert_eq!(
            err.to_string(),
            "Could not open feature folder. Does it exist? ('src/features/auth')"
        );

        let err = Error::ComponentExists { component_file: "Login.jsx".into() };
        assert!(err.to_string().starts_with("Component already exists."));
    }

    #[test]
    fn process_error_names_the_operation() {
        let err = Error::ProcessError {
            operation: "append to 'index.js'".into(),
            e: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Cannot append to 'index.js'. Original error: denied");
    }
}
