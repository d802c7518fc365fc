use crate::constants::{verbosity, DEFAULT_PROJECT_DIR};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI for numu.
#[derive(Parser, Debug)]
#[command(
    name = "numu",
    author,
    version,
    about = "numu is a tool to generate boilerplate components",
    long_about = "A CLI tool to generate boilerplate code in front-end projects"
)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Adds a new component to the project.
    #[command(long_about = "Creates a new component in provided feature dir in the project")]
    Add(AddArgs),

    /// Print the version number of numu.
    Version,
}

/// Arguments of the `add` command.
#[derive(clap::Args, Debug, Clone)]
pub struct AddArgs {
    /// Name of the component, e.g. `ProfileCard`.
    #[arg(value_name = "COMPONENT_NAME")]
    pub component_name: String,

    /// Feature folder name (located within "src/features/*").
    #[arg(short, long, value_name = "FEATURE")]
    pub feature: String,

    /// Create an associated CSS file.
    #[arg(short, long, overrides_with = "no_css")]
    pub css: bool,

    /// Do not create a CSS file, even if the project config asks for one.
    #[arg(long = "no-css", overrides_with = "css")]
    pub no_css: bool,

    /// The repository uses TypeScript.
    #[arg(short, long, overrides_with = "no_typescript")]
    pub typescript: bool,

    /// Use JavaScript templates, even if the project config selects TypeScript.
    #[arg(long = "no-typescript", overrides_with = "typescript")]
    pub no_typescript: bool,

    /// Project root containing the features directory.
    #[arg(short = 'C', long = "project-dir", value_name = "DIR", default_value = DEFAULT_PROJECT_DIR)]
    pub project_dir: PathBuf,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl AddArgs {
    /// `Some` when the command line decided about the stylesheet, `None` to
    /// defer to the project config.
    pub fn css_choice(&self) -> Option<bool> {
        flag_choice(self.css, self.no_css)
    }

    /// Same as [`AddArgs::css_choice`] for TypeScript mode.
    pub fn typescript_choice(&self) -> Option<bool> {
        flag_choice(self.typescript, self.no_typescript)
    }
}

fn flag_choice(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

/// Parse command line arguments, exiting with clap's usage error on failure.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
