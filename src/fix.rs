//! Read a history file, normalize it, and write the result.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;
use crate::normalize::{Normalized, normalize};
use crate::parse::{self, ParseOptions};

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct FixConfig {
    /// History file to read
    pub history_file: PathBuf,

    /// Destination file; `None` writes to stdout
    pub outfile: Option<PathBuf>,

    pub parse: ParseOptions,
}

impl FixConfig {
    /// Combine command-line values with config file defaults.
    ///
    /// Values given on the command line win; `strict` is on if either asks for it.
    pub fn resolve(
        history_file: Option<PathBuf>,
        outfile: Option<PathBuf>,
        strict: bool,
        config: Config,
    ) -> Result<Self, Error> {
        let history_file = history_file
            .or(config.history_file)
            .ok_or(Error::MissingHistoryFile)?;

        Ok(Self {
            history_file,
            outfile: outfile.or(config.outfile),
            parse: ParseOptions {
                strict: strict || config.strict,
            },
        })
    }
}

/// Normalize `config.history_file` and write it out.
///
/// Nothing is written unless the whole file parses, so a failure never
/// leaves a truncated output behind.
pub fn fix(config: &FixConfig) -> Result<Normalized, Error> {
    let input = read_history(&config.history_file)?;
    let normalized = normalize(input.lines(), &config.parse)?;

    tracing::info!(
        parsed = normalized.parsed,
        kept = normalized.commands.len(),
        removed = normalized.removed(),
        "normalized {}",
        config.history_file.display()
    );

    let output = normalized.to_history_string();
    match &config.outfile {
        Some(path) => std::fs::write(path, &output).map_err(|e| Error::WriteOutput {
            path: path.display().to_string(),
            source: e,
        })?,
        None => write_stdout(&output)?,
    }

    Ok(normalized)
}

/// Read a history file, replacing invalid UTF-8 rather than failing.
fn read_history(path: &Path) -> Result<String, Error> {
    let bytes = std::fs::read(path).map_err(|e| Error::ReadHistory {
        path: path.display().to_string(),
        source: e,
    })?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(content),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                "history is not valid UTF-8; replacing invalid bytes"
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

fn write_stdout(output: &str) -> Result<(), Error> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| Error::WriteOutput {
            path: "<stdout>".to_string(),
            source: e,
        })
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur while fixing a history file.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no history file given; pass --history-file or set history_file in the config")]
    MissingHistoryFile,

    #[error("failed to read history file '{path}'")]
    ReadHistory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse history")]
    Parse(#[from] parse::Error),

    #[error("failed to write output to '{path}'")]
    WriteOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
