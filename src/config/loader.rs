//! Project configuration loading

use crate::constants::{CONFIG_FILENAMES, DEFAULT_FEATURES_DIR};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

/// Project-level defaults read from `numu.json` / `numu.yaml` / `numu.yml`.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default = "get_default_features_dir")]
    pub features_dir: PathBuf,
    /// Generate a stylesheet even without `--css`.
    #[serde(default)]
    pub css: bool,
    /// Use TypeScript flavour even without `--typescript`.
    #[serde(default)]
    pub typescript: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { features_dir: get_default_features_dir(), css: false, typescript: false }
    }
}

impl ProjectConfig {
    /// Loads the first config file found in `project_dir`, or the defaults
    /// when there is none.
    pub fn load<P: AsRef<Path>>(project_dir: P) -> Result<Self> {
        let project_dir = project_dir.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = project_dir.join(config_file_name);

            if config_file_path.is_file() {
                log::debug!("Loading project config from {}", config_file_path.display());
                let content = std::fs::read_to_string(&config_file_path)?;
                let config: ProjectConfig = match *config_file_name {
                    "numu.json" => serde_json::from_str(&content)?,
                    "numu.yaml" | "numu.yml" => parse_yaml(&content)?,
                    _ => unreachable!(),
                };
                config.validate(&config_file_path)?;
                return Ok(config);
            }
        }

        log::debug!("No project config found in {}, using defaults", project_dir.display());
        Ok(Self::default())
    }

    pub fn validate(&self, config_file: &Path) -> Result<()> {
        let invalid = |reason: &str| Error::ConfigValidation {
            config_file: config_file.display().to_string(),
            reason: reason.to_string(),
        };

        if self.features_dir.as_os_str().is_empty() {
            return Err(invalid("features_dir must not be empty"));
        }
        if self.features_dir.is_absolute() {
            return Err(invalid("features_dir must be relative to the project directory"));
        }
        if self.features_dir.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(invalid("features_dir must stay inside the project directory"));
        }
        Ok(())
    }
}

// An empty YAML document deserializes to unit, not to a mapping.
fn parse_yaml(content: &str) -> Result<ProjectConfig> {
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

fn get_default_features_dir() -> PathBuf {
    PathBuf::from(DEFAULT_FEATURES_DIR)
}
