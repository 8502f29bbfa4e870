//! History entry types.
//!
//! A history file is a sequence of `#<unix-timestamp>` marker lines, each
//! followed by the (possibly multi-line) command it timestamps.

use std::fmt;

/// One logical shell command recovered from a history file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The command text; continuation lines are joined with `\n`
    pub text: String,

    /// Timestamp from the marker line that introduced this command
    pub timestamp: u64,

    /// Line index of that marker in the input, used only to break ties
    pub original_index: usize,
}

impl Command {
    pub fn new(text: impl Into<String>, timestamp: u64, original_index: usize) -> Self {
        Self {
            text: text.into(),
            timestamp,
            original_index,
        }
    }

    /// The key commands are ordered by: timestamp first, then position in the input.
    pub fn sort_key(&self) -> (u64, usize) {
        (self.timestamp, self.original_index)
    }
}

/// Renders the entry the way it appears in a history file.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}\n{}", self.timestamp, self.text)
    }
}
