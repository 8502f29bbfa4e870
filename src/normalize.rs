//! The sort / dedup pipeline over parsed commands.

use std::collections::HashSet;

use crate::history::Command;
use crate::parse::{self, ParseOptions};

/// Sort commands in place, oldest first.
///
/// Commands sharing a timestamp keep the order they had in the input.
pub fn sort_commands(commands: &mut [Command]) {
    commands.sort_by_key(Command::sort_key);
}

/// Drop repeated commands, keeping the most recent use of each.
///
/// Expects input already ordered by [`sort_commands`]. The scan runs from the
/// newest entry backwards, so the survivors come out newest first; callers
/// that want chronological order must sort again.
pub fn dedup_commands(commands: Vec<Command>) -> Vec<Command> {
    let mut seen: HashSet<String> = HashSet::with_capacity(commands.len());
    let mut kept = Vec::with_capacity(commands.len());

    for command in commands.into_iter().rev() {
        if seen.contains(&command.text) {
            continue;
        }
        seen.insert(command.text.clone());
        kept.push(command);
    }

    kept
}

/// Render commands as history file content, one `#<timestamp>` line before
/// each command, with a trailing newline.
pub fn format_commands(commands: &[Command]) -> String {
    let mut out = String::new();
    for command in commands {
        out.push_str(&command.to_string());
        out.push('\n');
    }
    out
}

/// The result of normalizing a history.
#[derive(Debug, Clone)]
pub struct Normalized {
    /// Surviving commands, in chronological order
    pub commands: Vec<Command>,

    /// How many commands the parser produced before deduplication
    pub parsed: usize,
}

impl Normalized {
    /// Number of duplicate entries that were dropped.
    pub fn removed(&self) -> usize {
        self.parsed - self.commands.len()
    }

    pub fn to_history_string(&self) -> String {
        format_commands(&self.commands)
    }
}

/// Parse, sort, dedup and re-sort a history given as lines.
pub fn normalize<'a, I>(lines: I, options: &ParseOptions) -> Result<Normalized, parse::Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut commands = parse::parse_lines(lines, options)?;
    let parsed = commands.len();

    sort_commands(&mut commands);
    let mut commands = dedup_commands(commands);
    // dedup hands back newest first
    sort_commands(&mut commands);

    tracing::debug!(parsed, kept = commands.len(), "normalized history");
    Ok(Normalized { commands, parsed })
}

/// Normalize history file content and render the result.
pub fn normalize_str(input: &str, options: &ParseOptions) -> Result<String, parse::Error> {
    Ok(normalize(input.lines(), options)?.to_history_string())
}
