//! Env file parsing for the vars command

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvFileError {
    #[error("env file not found: {0}")]
    NotFound(String),

    #[error("failed to read env file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
}

/// Read `KEY=VALUE` lines from an env file, preserving file order.
///
/// Blank lines and `#` comments are skipped; lines without a `=` are
/// dropped. Values may themselves contain `=`, so each kept line stays
/// verbatim and is only split when the key is needed. Duplicate keys are
/// passed through as-is; the Railway CLI decides what a repeated key
/// means.
pub fn read_variables(path: &Path) -> Result<Vec<String>, EnvFileError> {
    if !path.exists() {
        return Err(EnvFileError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| EnvFileError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let mut variables = Vec::new();
    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.contains('=') {
            variables.push(line.to_string());
        }
    }

    Ok(variables)
}

/// The key part of a `KEY=VALUE` line (everything before the first `=`).
pub fn key_of(line: &str) -> &str {
    match line.split_once('=') {
        Some((key, _)) => key,
        None => line,
    }
}
