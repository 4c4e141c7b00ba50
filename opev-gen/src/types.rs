//! Core types for the event table generator
//!
//! This module defines the record type produced by the event-file parser and
//! the error types used throughout the crate. The parser builds one record
//! per event line; records are rendered to the output sink and dropped.

use std::path::PathBuf;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GenError>;

/// One event definition read from an oprofile-style events file
///
/// Field values are kept exactly as written in the file; the `event` number
/// in particular is passed through as text (it is usually a hex literal like
/// `0x1`) and never parsed or range-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Event number as written in the file (e.g. `0x1`)
    pub event: String,
    /// Comma-separated counter indices this event can be assigned to (e.g. `0,1`)
    pub counters: String,
    /// Unit mask name; carried through but never emitted (ARM and MIPS
    /// profiling drivers do not use unit masks)
    pub um: String,
    /// Minimum sample count; carried through but never emitted
    pub minimum: String,
    /// Symbolic event name (e.g. `INSTRUCTIONS`)
    pub name: String,
    /// Free-text description, the remainder of the line with leading
    /// colon/space characters stripped
    pub description: String,
}

/// Errors that can occur while converting an event file
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("failed to read event file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{file}:{line}: {source}")]
    MalformedLine {
        file: String,
        line: usize,
        source: LineError,
    },

    #[error("invalid counter list {0:?}")]
    InvalidCounterList(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Ways a single retained line can fail to parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("expected 6 whitespace-separated fields, found {0}")]
    TooFewFields(usize),

    #[error("field {0:?} has no colon")]
    MissingColon(String),

    #[error("unrecognized field key {0:?}")]
    UnknownField(String),

    #[error("missing required field {0:?}")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_file_and_line() {
        let err = GenError::MalformedLine {
            file: "arm/armv6/events".to_string(),
            line: 12,
            source: LineError::TooFewFields(3),
        };
        assert_eq!(
            err.to_string(),
            "arm/armv6/events:12: expected 6 whitespace-separated fields, found 3"
        );
    }

    #[test]
    fn test_invalid_counter_list_display() {
        let err = GenError::InvalidCounterList("0,,1".to_string());
        assert_eq!(err.to_string(), "invalid counter list \"0,,1\"");
    }
}
