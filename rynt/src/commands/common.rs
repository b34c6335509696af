//! Shared utilities for rynt commands.

use std::path::Path;

use crate::error::{Result, RyntError};

/// Validate that `path` names a readable source file.
///
/// A missing path or a directory is an error. A file with an unexpected
/// extension is only a warning: the tooling still processes it, since
/// editors and scripts hand over all kinds of paths.
pub fn ensure_source_file(path: &Path, expected_extension: &str) -> Result<()> {
    if !path.exists() {
        return Err(RyntError::Validation(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(RyntError::Validation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }

    let matches = path
        .extension()
        .map(|ext| ext == expected_extension)
        .unwrap_or(false);
    if !matches {
        tracing::warn!(
            "{} does not have the `.{}` extension",
            path.display(),
            expected_extension
        );
    }

    Ok(())
}
