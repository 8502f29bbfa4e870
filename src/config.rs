//! Optional TOML configuration.
//!
//! Every key is optional; values given on the command line take precedence.
//!
//! ```toml
//! history_file = "/home/me/.bash_history"
//! outfile = "/home/me/.bash_history.clean"
//! strict = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Defaults loaded from a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// History file to read
    pub history_file: Option<PathBuf>,

    /// Where to write the result; stdout when unset
    pub outfile: Option<PathBuf>,

    /// Reject commands that appear before the first timestamp
    pub strict: bool,
}

impl Config {
    /// Parse a config from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_toml(&content).map_err(|e| Error::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Errors from loading a config file.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config file '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}'")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
