//! Split raw history lines into [`Command`]s.

use std::num::ParseIntError;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::history::Command;

/// A marker line is `#` followed by nothing but ASCII digits.
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9]+)$").expect("marker pattern compiles"));

/// Knobs for the parser.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Reject content that appears before the first marker line instead of
    /// filing it under timestamp 0.
    pub strict: bool,
}

/// Parse an ordered sequence of lines (without trailing newlines).
///
/// Content lines accumulate until the next marker or the end of input, then
/// become a single command stamped with the preceding marker. A marker with
/// no content after it produces nothing.
pub fn parse_lines<'a, I>(lines: I, options: &ParseOptions) -> Result<Vec<Command>, Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut commands = Vec::new();
    let mut pending = String::new();
    let mut timestamp = 0;
    let mut start_index = 0;
    let mut seen_marker = false;

    for (index, line) in lines.into_iter().enumerate() {
        if let Some(caps) = MARKER.captures(line) {
            if !pending.is_empty() {
                commands.push(Command::new(
                    std::mem::take(&mut pending),
                    timestamp,
                    start_index,
                ));
            }

            timestamp = caps[1].parse().map_err(|source| Error::Timestamp {
                line: index + 1,
                source,
            })?;
            start_index = index;
            seen_marker = true;
        } else {
            if options.strict && !seen_marker && !line.is_empty() {
                return Err(Error::UnmarkedContent { line: index + 1 });
            }

            // An empty buffer takes the line as-is, so leading blank lines vanish
            if pending.is_empty() {
                pending.push_str(line);
            } else {
                pending.push('\n');
                pending.push_str(line);
            }
        }
    }

    if !pending.is_empty() {
        commands.push(Command::new(pending, timestamp, start_index));
    }

    tracing::debug!(commands = commands.len(), "parsed history");
    Ok(commands)
}

/// Errors from parsing history lines. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: timestamp is not a valid integer")]
    Timestamp {
        line: usize,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: command appears before any timestamp marker")]
    UnmarkedContent { line: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(input: &str) -> Vec<Command> {
        parse_lines(input.lines(), &ParseOptions::default()).unwrap()
    }

    #[test]
    fn pairs_markers_with_commands() {
        let commands = parse("#22345\nls -la\n#12345\ncd /tmp");
        assert_eq!(
            commands,
            vec![
                Command::new("ls -la", 22345, 0),
                Command::new("cd /tmp", 12345, 2),
            ]
        );
    }

    #[test]
    fn joins_continuation_lines() {
        let commands = parse("#100\nfor f in *; do\n  echo \"$f\"\ndone\n#200\npwd");
        assert_eq!(commands[0].text, "for f in *; do\n  echo \"$f\"\ndone");
        assert_eq!(commands[0].original_index, 0);
        assert_eq!(commands[1], Command::new("pwd", 200, 4));
    }

    #[test]
    fn marker_without_content_is_dropped() {
        let commands = parse("#100\n#200\necho hi\n#300");
        assert_eq!(commands, vec![Command::new("echo hi", 200, 1)]);
    }

    #[test]
    fn hash_lines_that_are_not_markers_are_content() {
        let commands = parse("#100\n# a comment\n#12ab\n$(date) # trailing");
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].text, "# a comment\n#12ab\n$(date) # trailing");
    }

    #[test]
    fn content_before_first_marker_gets_zero_timestamp() {
        let commands = parse("orphan\n#500\nls");
        assert_eq!(
            commands,
            vec![Command::new("orphan", 0, 0), Command::new("ls", 500, 1)]
        );
    }

    #[test]
    fn strict_mode_rejects_unmarked_content() {
        let options = ParseOptions { strict: true };
        let err = parse_lines("orphan\n#500\nls".lines(), &options).unwrap_err();
        assert!(matches!(err, Error::UnmarkedContent { line: 1 }));

        let commands = parse_lines("#500\nls".lines(), &options).unwrap();
        assert_eq!(commands, vec![Command::new("ls", 500, 0)]);
    }

    #[test]
    fn strict_mode_tolerates_leading_blank_lines() {
        let options = ParseOptions { strict: true };
        let commands = parse_lines(["", "#7", "ls"], &options).unwrap();
        assert_eq!(commands, vec![Command::new("ls", 7, 1)]);
    }

    #[test]
    fn leading_blank_lines_vanish_but_interior_ones_stay() {
        let commands = parse("#100\n\necho a\n\necho b\n#200\nx");
        assert_eq!(commands[0].text, "echo a\n\necho b");
    }

    #[test]
    fn overflowing_timestamp_is_an_error() {
        let err = parse_lines(
            ["#1", "ok", "#99999999999999999999999", "boom"],
            &ParseOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Timestamp { line: 3, .. }));
    }

    #[test]
    fn non_ascii_digits_are_not_markers() {
        let commands = parse("#1\n#١٢٣");
        assert_eq!(commands, vec![Command::new("#١٢٣", 1, 0)]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse("").is_empty());
        assert!(parse("#123").is_empty());
    }
}
