//! Constants used throughout the numu application

/// Project configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["numu.json", "numu.yaml", "numu.yml"];

/// Default feature-folder root, relative to the project directory
pub const DEFAULT_FEATURES_DIR: &str = "src/features";

/// Default project directory
pub const DEFAULT_PROJECT_DIR: &str = ".";

/// File names and extensions of generated and aggregated artifacts
pub mod files {
    pub const JSX_EXTENSION: &str = "jsx";
    pub const TSX_EXTENSION: &str = "tsx";
    pub const CSS_EXTENSION: &str = "css";
    pub const INDEX_JS: &str = "index.js";
    pub const INDEX_TS: &str = "index.ts";
    pub const TYPES_TS: &str = "types.ts";

    /// Permission bits for newly created files (Unix only).
    pub const FILE_MODE: u32 = 0o644;
}

/// Naming rules
pub mod naming {
    pub const CLASS_NAME_SEPARATOR: char = '-';
    pub const PROPS_SUFFIX: &str = "Props";
    pub const UNTYPED_PROPS: &str = "props";
    pub const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_$][A-Za-z0-9_$]*$";
}

/// User-facing messages
pub mod messages {
    pub const FEATURE_FOLDER_NOT_FOUND: &str =
        "Could not open feature folder. Does it exist?";
    pub const COMPONENT_EXISTS: &str =
        "Component already exists. Consider a different name?";
    pub const COMPONENT_CREATED: &str = "New component created.";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
