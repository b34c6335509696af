//! Tokens command implementation.
//!
//! Lexes a single source file and prints its token stream, either as plain
//! text or as JSON for consumption by editors and scripts.

use std::path::PathBuf;

use serde::Serialize;

use crate::commands::common::ensure_source_file;
use crate::config::Config;
use crate::error::{Result, RyntError};
use rync_lex::Token;
use rync_util::Handler;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Source file to lex.
    pub file: PathBuf,
    /// Emit JSON instead of plain text.
    pub json: bool,
    /// Enable verbose output.
    pub verbose: bool,
}

/// One token in the JSON dump.
#[derive(Debug, Serialize)]
struct TokenRecord {
    kind: String,
    lexeme: String,
}

impl From<&Token<'_>> for TokenRecord {
    fn from(token: &Token<'_>) -> Self {
        Self {
            kind: token.kind.to_string(),
            lexeme: token.lexeme.to_string(),
        }
    }
}

/// Render a token stream as pretty-printed JSON.
fn render_json(tokens: &[Token<'_>]) -> Result<String> {
    let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Run the tokens command.
///
/// The token stream goes to stdout even when the file has lexical errors;
/// the errors are logged and reflected in the exit status afterwards.
pub fn run_tokens(args: TokensArgs, config: &Config) -> Result<()> {
    ensure_source_file(&args.file, &config.source_extension)?;

    let source = std::fs::read_to_string(&args.file)?;
    if args.verbose {
        tracing::debug!("lexing {} ({} bytes)", args.file.display(), source.len());
    }

    let mut handler = Handler::new();
    let tokens = rync_lex::tokenize(&source, &mut handler);

    if args.json {
        println!("{}", render_json(&tokens)?);
    } else {
        for token in &tokens {
            println!("{}", token);
        }
    }

    for diag in handler.diagnostics() {
        tracing::error!("{}", diag.message);
    }
    if handler.has_errors() {
        return Err(RyntError::Validation(format!(
            "{} lexical error(s) in {}",
            handler.error_count(),
            args.file.display()
        )));
    }

    Ok(())
}
