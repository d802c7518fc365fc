use std::path::PathBuf;

/// A single file-system change planned by the generator.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOperation {
    /// Create a file that does not exist yet.
    Create { target: PathBuf, content: String },
    /// Append to a file that already exists.
    Append { target: PathBuf, content: String },
}

impl GenerateOperation {
    pub fn target_path(&self) -> &PathBuf {
        match self {
            GenerateOperation::Create { target, .. }
            | GenerateOperation::Append { target, .. } => target,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            GenerateOperation::Create { content, .. }
            | GenerateOperation::Append { content, .. } => content,
        }
    }

    /// Returns a brief description of this operation for error messages.
    pub fn error_context(&self) -> String {
        match self {
            GenerateOperation::Create { target, .. } => {
                format!("create '{}'", target.display())
            }
            GenerateOperation::Append { target, .. } => {
                format!("append to '{}'", target.display())
            }
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            GenerateOperation::Create { target, .. } => {
                format!("{}Creating '{}'", prefix, target.display())
            }
            GenerateOperation::Append { target, .. } => {
                format!("{}Appending to '{}'", prefix, target.display())
            }
        }
    }
}
