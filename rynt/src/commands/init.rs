//! Init command implementation.
//!
//! Sets up a new Ryn project: directory layout, a starter source file, and
//! a default `rynt.toml`.

use std::path::{Path, PathBuf};

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{Result, RyntError};

/// Directories created in a fresh project.
const PROJECT_DIRS: &[&str] = &["src", "build"];

/// Starter program written to `src/main.ryn`.
const STARTER_SOURCE: &str = "function main() -> i32 {\n    return 0;\n}\n";

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Force initialization even if the directory is not empty.
    pub force: bool,
    /// Target directory (defaults to the current directory).
    pub path: Option<PathBuf>,
}

/// Init command executor.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command with the given arguments.
    pub fn new(args: InitArgs) -> Self {
        Self { args }
    }

    /// Run the init command.
    pub fn run(&self) -> Result<()> {
        let target = self.get_target_path()?;

        if self.args.verbose {
            tracing::debug!("initializing project in {}", target.display());
        }

        self.validate_directory(&target)?;
        self.create_project_structure(&target)?;
        self.create_starter_source(&target)?;
        self.create_config_file(&target)?;

        tracing::info!("initialized Ryn project in {}", target.display());
        Ok(())
    }

    /// Resolve the directory to initialize.
    fn get_target_path(&self) -> Result<PathBuf> {
        match &self.args.path {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Ensure the target is a usable directory.
    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(RyntError::Validation(format!(
                "Target path is not a directory: {}",
                path.display()
            )));
        }

        if !self.args.force && !Self::check_directory_empty(path)? {
            return Err(RyntError::Validation(format!(
                "Directory is not empty: {} (use --force to initialize anyway)",
                path.display()
            )));
        }

        Ok(())
    }

    /// Check whether a directory has no entries.
    fn check_directory_empty(path: &Path) -> Result<bool> {
        Ok(std::fs::read_dir(path)?.next().is_none())
    }

    /// Create the standard project directories.
    fn create_project_structure(&self, target: &Path) -> Result<()> {
        for dir in PROJECT_DIRS {
            let dir_path = target.join(dir);
            std::fs::create_dir_all(&dir_path)?;
            if self.args.verbose {
                tracing::debug!("created {}", dir_path.display());
            }
        }
        Ok(())
    }

    /// Write the starter source file, unless one already exists.
    fn create_starter_source(&self, target: &Path) -> Result<()> {
        let main_path = target.join("src").join("main.ryn");
        if main_path.exists() && !self.args.force {
            tracing::debug!("{} already exists, skipping", main_path.display());
            return Ok(());
        }
        std::fs::write(&main_path, STARTER_SOURCE)?;
        Ok(())
    }

    /// Write the default configuration file, unless one already exists.
    fn create_config_file(&self, target: &Path) -> Result<()> {
        let config_path = target.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            tracing::debug!("{} already exists, skipping", config_path.display());
            return Ok(());
        }
        Config::default().save_to_path(&config_path)?;
        Ok(())
    }
}

/// Run the init command with the given arguments.
pub fn run_init(args: InitArgs) -> Result<()> {
    InitCommand::new(args).run()
}
