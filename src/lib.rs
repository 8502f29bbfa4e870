//! fixbashhistory: deduplicate and reorder a timestamped bash history.
//!
//! Bash with `HISTTIMEFORMAT` set writes each entry as a `#<unix-timestamp>`
//! line followed by the command. Over time the file collects repeats of the
//! same command; this crate collapses them to the most recent use and puts
//! the survivors back in chronological order.
//!
//! # Architecture
//!
//! - **Parse**: Turn raw lines into [`Command`]s, joining multi-line commands
//! - **Normalize**: Sort, deduplicate, and sort again; render back to text
//! - **Fix**: Read the history file and write the normalized result
//! - **Config**: Optional TOML defaults for the command line

mod config;
mod fix;
mod history;
mod normalize;
mod parse;

pub use config::Config;
pub use fix::{FixConfig, fix};
pub use history::Command;
pub use normalize::{
    Normalized, dedup_commands, format_commands, normalize, normalize_str, sort_commands,
};
pub use parse::{ParseOptions, parse_lines};

/// Error types for each stage.
pub mod error {
    pub use crate::config::Error as ConfigError;
    pub use crate::fix::Error as FixError;
    pub use crate::parse::Error as ParseError;
}

/// Version string, overridable at build time with `FIXBASHHISTORY_VERSION`.
pub const VERSION: &str = match option_env!("FIXBASHHISTORY_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
