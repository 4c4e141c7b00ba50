//! Event file line parsing
//!
//! Parses one line of an oprofile events file into either an include
//! directive or an [`EventRecord`]. An event line looks like:
//!
//! ```text
//! event:0x1 counters:0,1 um:zero minimum:500 name:INSTRUCTIONS : Instructions completed
//! ```
//!
//! The first five whitespace-separated fields are `key:value` tokens; the
//! sixth is the free-text description, which may itself contain spaces and
//! colons and is never re-split.

use crate::types::{EventRecord, LineError};
use std::path::{Path, PathBuf};

/// Outcome of parsing one retained line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    /// An `include:<dir>` directive; the path is `<dir>/events`, to be
    /// expanded in place by the generator
    Include(PathBuf),
    /// A regular event definition
    Event(EventRecord),
}

/// Filter raw file text down to the lines worth parsing.
///
/// Yields `(line_number, trimmed_line)` pairs for every line that is
/// non-empty and not a `#` comment after trimming surrounding whitespace.
/// Line numbers are 1-based and refer to the unfiltered file, so they can
/// be used in diagnostics. Ordering is preserved.
pub fn filter_lines(input: &str) -> Vec<(usize, &str)> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Parse one filtered, non-empty, non-comment line.
///
/// Include directives are recognized from the first field alone; the rest
/// of such a line is ignored. Any other line must carry exactly the
/// six-field event shape described in the module docs.
pub fn parse_line(line: &str) -> std::result::Result<ParsedLine, LineError> {
    let fields = split_limit(line, 6);
    if fields.is_empty() {
        return Err(LineError::TooFewFields(0));
    }

    // `include` is only honored as the first field
    if let Some((key, value)) = fields[0].split_once(':') {
        if key == "include" {
            return Ok(ParsedLine::Include(Path::new(value).join("events")));
        }
    }

    if fields.len() < 6 {
        return Err(LineError::TooFewFields(fields.len()));
    }

    let description = fields[5]
        .trim_start_matches(|c| c == ':' || c == ' ')
        .to_string();

    let mut event = None;
    let mut counters = None;
    let mut um = None;
    let mut minimum = None;
    let mut name = None;
    for field in &fields[..5] {
        let (key, value) = field
            .split_once(':')
            .ok_or_else(|| LineError::MissingColon(field.to_string()))?;
        match key {
            "event" => event = Some(value.to_string()),
            "counters" => counters = Some(value.to_string()),
            "um" => um = Some(value.to_string()),
            "minimum" => minimum = Some(value.to_string()),
            "name" => name = Some(value.to_string()),
            other => return Err(LineError::UnknownField(other.to_string())),
        }
    }

    Ok(ParsedLine::Event(EventRecord {
        event: event.ok_or(LineError::MissingField("event"))?,
        counters: counters.ok_or(LineError::MissingField("counters"))?,
        um: um.ok_or(LineError::MissingField("um"))?,
        minimum: minimum.ok_or(LineError::MissingField("minimum"))?,
        name: name.ok_or(LineError::MissingField("name"))?,
        description,
    }))
}

/// Split on runs of whitespace into at most `limit` parts.
///
/// The final part is the untouched remainder of the line (with leading
/// whitespace removed), so embedded spaces in a trailing description
/// survive. Callers pass trimmed lines, so there is no trailing-whitespace
/// case to worry about.
fn split_limit(line: &str, limit: usize) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = line.trim_start();
    while !rest.is_empty() {
        if parts.len() + 1 == limit {
            parts.push(rest);
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(idx) => {
                parts.push(&rest[..idx]);
                rest = rest[idx..].trim_start();
            }
            None => {
                parts.push(rest);
                break;
            }
        }
    }
    parts
}
