//! Check command implementation.
//!
//! Runs the front end over one or more source files via the compile driver
//! and prints rendered diagnostics, capped by configuration.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Result, RyntError};
use rync_drv::{render_diagnostics, EmitKind, Session};
use rync_util::FileId;

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// Enable verbose output.
    pub verbose: bool,
}

/// Run the check command.
///
/// Files are processed through a driver [`Session`], so multiple inputs run
/// in parallel on the configured number of threads. Diagnostics print in
/// input order up to the configured cap; any error diagnostic fails the
/// command.
pub fn run_check(args: CheckArgs, config: &Config) -> Result<()> {
    let driver_config = rync_drv::Config {
        input_files: args.files,
        emit: EmitKind::Check,
        validate: config.check.validate,
        verbose: args.verbose,
        threads: config.thread_count,
        help: false,
        version: false,
    };

    let session = Session::new(driver_config)?;
    let reports = session.compile();

    let mut error_count = 0;
    let mut remaining = config.check.max_diagnostics;
    for (index, report) in reports.iter().enumerate() {
        error_count += report
            .diagnostics
            .iter()
            .filter(|d| d.level == rync_util::Level::Error)
            .count();

        if remaining == 0 || report.diagnostics.is_empty() {
            continue;
        }
        if let Some(file) = session.sources.get(FileId::new(index)) {
            let shown = report.diagnostics.len().min(remaining);
            print!("{}", render_diagnostics(&file, &report.diagnostics[..shown]));
            remaining -= shown;
        }
    }

    let checked = reports.len();
    if error_count > 0 {
        return Err(RyntError::CheckFailed(format!(
            "{} error(s) across {} file(s)",
            error_count, checked
        )));
    }

    tracing::info!("checked {} file(s), no errors", checked);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_source(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".ryn").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_check_clean_files() {
        let a = write_source("var a: i32;\n");
        let b = write_source("function main() -> i32 { return 0; }\n");
        let args = CheckArgs {
            files: vec![a.path().to_path_buf(), b.path().to_path_buf()],
            verbose: false,
        };
        assert!(run_check(args, &Config::default()).is_ok());
    }

    #[test]
    fn test_check_reports_errors() {
        let file = write_source("var x: i32 = $;\n");
        let args = CheckArgs {
            files: vec![file.path().to_path_buf()],
            verbose: false,
        };
        let result = run_check(args, &Config::default());
        assert!(matches!(result, Err(RyntError::CheckFailed(_))));
    }

    #[test]
    fn test_check_no_files_is_driver_error() {
        let result = run_check(CheckArgs::default(), &Config::default());
        assert!(matches!(result, Err(RyntError::Driver(_))));
    }

    #[test]
    fn test_check_validate_disabled() {
        // Missing semicolon only matters to the validator.
        let file = write_source("var x: i32 = 1\n");
        let args = CheckArgs {
            files: vec![file.path().to_path_buf()],
            verbose: false,
        };
        let config = Config {
            check: crate::config::CheckConfig {
                validate: false,
                max_diagnostics: 100,
            },
            ..Config::default()
        };
        assert!(run_check(args, &config).is_ok());
    }
}
