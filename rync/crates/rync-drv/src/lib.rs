//! # rync-drv
//!
//! Compile driver: argument parsing, session setup, and per-file front-end
//! runs.
//!
//! The driver owns no language logic. It reads the input files into a
//! [`SourceMap`], runs the lexer (and optionally the validator) over each
//! file with a fresh [`Handler`](rync_util::Handler), and collects one
//! [`UnitReport`] per file in input order. Files are independent, so with
//! more than one input the units run on the rayon thread pool.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use rayon::prelude::*;
use rync_lex::Lexer;
use rync_par::Validator;
use rync_util::{Diagnostic, Handler, SourceFile, SourceMap, SourceSnippet};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// Driver-level failures, separate from source diagnostics.
#[derive(Debug, Error)]
pub enum DriverError {
    /// An input file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path of the file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The command line named no input files.
    #[error("no input files provided")]
    NoInputFiles,

    /// The command line did not parse.
    #[error("{0}")]
    BadArgs(String),
}

impl DriverError {
    /// True for errors caused by how the driver was invoked rather than by
    /// the input sources. These exit with status 2.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, DriverError::NoInputFiles | DriverError::BadArgs(_))
    }
}

/// What the driver should produce per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitKind {
    /// Print the token stream.
    Tokens,
    /// Report diagnostics only.
    Check,
}

/// Driver configuration, filled in by [`parse_args`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Files to process, in command-line order.
    pub input_files: Vec<PathBuf>,
    /// Per-file output selection.
    pub emit: EmitKind,
    /// Run the statement validator after lexing.
    pub validate: bool,
    /// Print phase timing to stderr.
    pub verbose: bool,
    /// Worker thread count; 0 uses the rayon default.
    pub threads: usize,
    /// `--help` was given.
    pub help: bool,
    /// `--version` was given.
    pub version: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            emit: EmitKind::Check,
            validate: true,
            verbose: false,
            threads: 0,
            help: false,
            version: false,
        }
    }
}

/// Parse command-line arguments, the program name already stripped.
///
/// # Examples
///
/// ```
/// use rync_drv::{parse_args, EmitKind};
///
/// let config = parse_args(["--emit", "tokens", "main.ryn"].map(String::from)).unwrap();
/// assert_eq!(config.emit, EmitKind::Tokens);
/// assert_eq!(config.input_files.len(), 1);
/// ```
pub fn parse_args<I>(args: I) -> Result<Config, DriverError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let mut config = Config::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--help" | "-h" => {
                config.help = true;
                return Ok(config);
            }
            "--version" | "-V" => {
                config.version = true;
                return Ok(config);
            }
            "--verbose" | "-v" => config.verbose = true,
            "--no-validate" => config.validate = false,
            "--emit" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| DriverError::BadArgs("Missing argument for --emit".into()))?;
                config.emit = match value.as_str() {
                    "tokens" => EmitKind::Tokens,
                    "check" => EmitKind::Check,
                    other => {
                        return Err(DriverError::BadArgs(format!(
                            "Unknown emit kind: {}",
                            other
                        )))
                    }
                };
            }
            "--threads" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| DriverError::BadArgs("Missing argument for --threads".into()))?;
                config.threads = value
                    .parse()
                    .map_err(|_| DriverError::BadArgs(format!("Bad thread count: {}", value)))?;
            }
            _ if arg.starts_with('-') => {
                return Err(DriverError::BadArgs(format!("Unknown option: {}", arg)));
            }
            _ => config.input_files.push(PathBuf::from(arg)),
        }
        i += 1;
    }

    Ok(config)
}

/// Print usage to stdout.
pub fn print_help() {
    println!("Ryn front end v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: rync [OPTIONS] <input files>");
    println!();
    println!("Options:");
    println!("  -h, --help           Print this help message");
    println!("  -V, --version        Print version information");
    println!("  -v, --verbose        Print phase timing to stderr");
    println!("  --emit <KIND>        Per-file output: tokens, check (default: check)");
    println!("  --no-validate        Skip the statement validator");
    println!("  --threads <N>        Worker threads; 0 picks a default");
    println!();
    println!("Examples:");
    println!("  rync main.ryn                Check main.ryn");
    println!("  rync --emit tokens main.ryn  Print its token stream");
}

/// Print the version line to stdout.
pub fn print_version() {
    println!("rync {}", env!("CARGO_PKG_VERSION"));
}

/// The outcome of one file's front-end run.
#[derive(Debug)]
pub struct UnitReport {
    /// The input file this report describes.
    pub file: PathBuf,
    /// Tokens produced, end-of-file included.
    pub token_count: usize,
    /// Rendered token lines, only filled for [`EmitKind::Tokens`].
    pub tokens: Vec<String>,
    /// Diagnostics from this unit's lexer and validator, in emission order.
    pub diagnostics: Vec<Diagnostic>,
}

impl UnitReport {
    /// True if any diagnostic in this unit is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.level == rync_util::Level::Error)
    }
}

/// One front-end invocation: a config plus the loaded sources.
#[derive(Debug)]
pub struct Session {
    /// The configuration this session runs under.
    pub config: Config,
    /// The loaded input files.
    pub sources: SourceMap,
}

impl Session {
    /// Load every input file named by `config`.
    pub fn new(config: Config) -> Result<Self, DriverError> {
        if config.input_files.is_empty() {
            return Err(DriverError::NoInputFiles);
        }

        let mut sources = SourceMap::new();
        for path in &config.input_files {
            let content = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
                path: path.clone(),
                source,
            })?;
            sources.add_file(path.display().to_string(), content);
        }

        Ok(Self { config, sources })
    }

    /// Run the front end over every loaded file.
    ///
    /// Each file gets its own [`Handler`], so units never contend on shared
    /// state and diagnostics stay attached to the file that produced them.
    /// Reports come back in input order regardless of how the units were
    /// scheduled.
    pub fn compile(&self) -> Vec<UnitReport> {
        let files: Vec<Arc<SourceFile>> = (0..self.sources.file_count())
            .filter_map(|i| self.sources.get(rync_util::FileId::new(i)))
            .collect();

        let start = Instant::now();
        let reports: Vec<UnitReport> = if files.len() > 1 {
            let run = || -> Vec<UnitReport> {
                files
                    .par_iter()
                    .map(|file| self.compile_unit(file))
                    .collect()
            };
            if self.config.threads > 0 {
                match rayon::ThreadPoolBuilder::new()
                    .num_threads(self.config.threads)
                    .build()
                {
                    Ok(pool) => pool.install(run),
                    Err(_) => run(),
                }
            } else {
                run()
            }
        } else {
            files.iter().map(|file| self.compile_unit(file)).collect()
        };

        if self.config.verbose {
            eprintln!(
                "[verbose] processed {} file(s) in {:?}",
                files.len(),
                start.elapsed()
            );
        }
        reports
    }

    fn compile_unit(&self, file: &SourceFile) -> UnitReport {
        if self.config.verbose {
            eprintln!("[verbose] lexing: {}", file.name());
        }
        let mut handler = Handler::new();
        let tokens = Lexer::new(file.content(), &mut handler).tokenize();

        let rendered = if self.config.emit == EmitKind::Tokens {
            tokens.iter().map(|t| t.to_string()).collect()
        } else {
            Vec::new()
        };

        if self.config.validate {
            if self.config.verbose {
                eprintln!("[verbose] validating: {}", file.name());
            }
            Validator::new(tokens.clone(), &mut handler).validate_program();
        }

        UnitReport {
            file: PathBuf::from(file.name()),
            token_count: tokens.len(),
            tokens: rendered,
            diagnostics: handler.take_diagnostics(),
        }
    }
}

/// Render one unit's diagnostics with source snippets and caret markers.
///
/// Diagnostics without a real span (the validator's, for instance) render
/// as a header line only.
pub fn render_diagnostics(file: &SourceFile, diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diag in diagnostics {
        match diag.code {
            Some(code) => {
                out.push_str(&format!("{}[{}]: {}\n", diag.level, code, diag.message))
            }
            None => out.push_str(&format!("{}: {}\n", diag.level, diag.message)),
        }

        if diag.span.len() > 0 {
            let (line, start_col) = file.offset_to_line_col(diag.span.start);
            out.push_str(&format!("  --> {}:{}:{}\n", file.name(), line, start_col));
            if let Some(text) = file.line_at(line) {
                let (end_line, end_col) = file.offset_to_line_col(diag.span.end);
                let end_col = if end_line == line {
                    end_col
                } else {
                    start_col + 1
                };
                let snippet =
                    SourceSnippet::new(text, line, start_col, end_col, None::<String>);
                out.push_str(&snippet.format());
                out.push('\n');
            }
        }
    }
    out
}

/// Parse arguments, run a session, and print its output.
///
/// Returns the process exit code: 0 on success, 1 when any unit produced an
/// error diagnostic. Usage errors surface as [`DriverError`] and exit 2.
pub fn run<I>(args: I) -> Result<i32, DriverError>
where
    I: IntoIterator<Item = String>,
{
    let config = parse_args(args)?;

    if config.help {
        print_help();
        return Ok(0);
    }
    if config.version {
        print_version();
        return Ok(0);
    }

    let session = Session::new(config)?;
    let reports = session.compile();

    let mut failed = false;
    for (index, report) in reports.iter().enumerate() {
        if session.config.emit == EmitKind::Tokens {
            println!("{}:", report.file.display());
            for line in &report.tokens {
                println!("  {}", line);
            }
        }
        if !report.diagnostics.is_empty() {
            if let Some(file) = session.sources.get(rync_util::FileId::new(index)) {
                print!("{}", render_diagnostics(&file, &report.diagnostics));
            }
        }
        failed |= report.has_errors();
    }

    Ok(if failed { 1 } else { 0 })
}
