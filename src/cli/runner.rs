use crate::{
    cli::AddArgs,
    config::ProjectConfig,
    constants::messages::COMPONENT_CREATED,
    error::Result,
    generator::{ComponentGenerator, ComponentParams, GenerateOperation},
    renderer::MiniJinjaRenderer,
};

/// CLI runner for the `add` command.
pub struct Runner {
    args: AddArgs,
}

impl Runner {
    pub fn new(args: AddArgs) -> Self {
        Self { args }
    }

    /// Resolves the parameters and generates the component.
    pub fn run(self) -> Result<Vec<GenerateOperation>> {
        let config = ProjectConfig::load(&self.args.project_dir)?;
        let params = self.build_params(config)?;
        log::debug!("Component parameters: {params:?}");

        let renderer = MiniJinjaRenderer::new()?;
        let operations = ComponentGenerator::new(&renderer, &params).generate()?;

        if params.dry_run {
            println!("Dry run completed, {} file operation(s) planned.", operations.len());
        } else {
            println!("{COMPONENT_CREATED}");
        }
        Ok(operations)
    }

    /// Merges the command line with the project config. An explicit flag
    /// (`--css` / `--no-css`, `--typescript` / `--no-typescript`) beats the
    /// config default.
    fn build_params(&self, config: ProjectConfig) -> Result<ComponentParams> {
        ComponentParams {
            component_name: self.args.component_name.clone(),
            feature_folder_name: self.args.feature.clone(),
            create_css: self.args.css_choice().unwrap_or(config.css),
            use_typescript: self.args.typescript_choice().unwrap_or(config.typescript),
            project_dir: self.args.project_dir.clone(),
            features_dir: config.features_dir,
            dry_run: self.args.dry_run,
        }
        .validated()
    }
}

/// Main entry point for the `add` command
pub fn run(args: AddArgs) -> Result<Vec<GenerateOperation>> {
    Runner::new(args).run()
}

/// Text printed by the `version` command.
pub fn version_message() -> String {
    format!("numu component creator v{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(project_dir: PathBuf) -> AddArgs {
        AddArgs {
            component_name: "Login".into(),
            feature: "auth".into(),
            css: false,
            no_css: false,
            typescript: false,
            no_typescript: false,
            project_dir,
            dry_run: false,
        }
    }

    #[test]
    fn config_defaults_are_merged_into_params() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("numu.yaml"),
            "features_dir: app/features\ntypescript: true\n",
        )
        .unwrap();

        let runner = Runner::new(args(tmp.path().to_path_buf()));
        let config = ProjectConfig::load(tmp.path()).unwrap();
        let params = runner.build_params(config).unwrap();

        assert!(params.use_typescript);
        assert!(!params.create_css);
        assert_eq!(params.features_dir, PathBuf::from("app/features"));
    }

    #[test]
    fn flags_switch_options_on() {
        let mut add = args(PathBuf::from("."));
        add.css = true;
        let params = Runner::new(add).build_params(ProjectConfig::default()).unwrap();
        assert!(params.create_css);
        assert!(!params.use_typescript);
    }

    #[test]
    fn negative_flags_override_config_defaults() {
        let config = ProjectConfig { css: true, typescript: true, ..ProjectConfig::default() };
        let mut add = args(PathBuf::from("."));
        add.no_css = true;
        add.no_typescript = true;
        let params = Runner::new(add).build_params(config).unwrap();
        assert!(!params.create_css);
        assert!(!params.use_typescript);
    }

    #[test]
    fn no_css_skips_stylesheet_configured_by_project() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("numu.yaml"), "css: true\n").unwrap();
        let dir = tmp.path().join("src/features/auth");
        std::fs::create_dir_all(&dir).unwrap();

        let mut add = args(tmp.path().to_path_buf());
        add.no_css = true;
        run(add).unwrap();

        assert!(dir.join("Login.jsx").is_file());
        assert!(!dir.join("Login.css").exists());
        let component = std::fs::read_to_string(dir.join("Login.jsx")).unwrap();
        assert!(!component.contains("Login.css"));
    }

    #[test]
    fn config_css_applies_without_flags() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("numu.yaml"), "css: true\n").unwrap();
        let dir = tmp.path().join("src/features/auth");
        std::fs::create_dir_all(&dir).unwrap();

        run(args(tmp.path().to_path_buf())).unwrap();
        assert!(dir.join("Login.css").is_file());
    }

    #[test]
    fn invalid_names_fail_before_generation() {
        let mut add = args(PathBuf::from("."));
        add.component_name = "login-form".into();
        assert!(Runner::new(add).build_params(ProjectConfig::default()).is_err());
    }

    #[test]
    fn version_message_names_the_tool() {
        assert!(version_message().starts_with("numu component creator v"));
    }
}
