//! rynt - tooling CLI for the Ryn language front end.
//!
//! Provides project scaffolding, token dumps, and source checking on top of
//! the compile driver.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;

use commands::{run_check, run_init, run_tokens, CheckArgs, InitArgs, TokensArgs};
use config::Config;
use error::{Result, RyntError};

/// Tooling for the Ryn language front end.
#[derive(Parser, Debug)]
#[command(
    name = "rynt",
    author,
    version,
    about = "Tooling for the Ryn language front end",
    propagate_version = true
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "RYNT_VERBOSE")]
    verbose: bool,

    /// Path to a configuration file
    #[arg(long, global = true, env = "RYNT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, env = "RYNT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a new Ryn project
    Init {
        /// Target directory (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Initialize even if the directory is not empty
        #[arg(long)]
        force: bool,
    },

    /// Print the token stream of a source file
    Tokens {
        /// Source file to lex
        file: PathBuf,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Check source files for lexical and statement errors
    Check {
        /// Source files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Initialize the tracing subscriber.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = tracing_subscriber::fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| RyntError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration, honoring an explicit `--config` path.
fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Dispatch the parsed command line to its command implementation.
fn execute_command(cli: Cli, config: &Config) -> Result<()> {
    match cli.command {
        Commands::Init { path, force } => run_init(InitArgs {
            verbose: cli.verbose,
            force,
            path,
        }),
        Commands::Tokens { file, json } => run_tokens(
            TokensArgs {
                file,
                json,
                verbose: cli.verbose,
            },
            config,
        ),
        Commands::Check { files } => run_check(
            CheckArgs {
                files,
                verbose: cli.verbose,
            },
            config,
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match execute_command(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
