//! Errors raised while reading input tables.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while opening or parsing a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table file could not be opened.
    #[error("failed to open table at {path}")]
    Open {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A line could not be read, e.g. it was not valid UTF-8.
    #[error("failed to read line {line} of {origin}")]
    Read {
        /// Table the line belongs to.
        origin: String,
        /// 1-based line number.
        line: usize,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A record did not match the expected shape.
    #[error("malformed record on line {line} of {origin}: {issue}")]
    MalformedRecord {
        /// Table the record belongs to.
        origin: String,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the record.
        issue: RecordIssue,
    },
}

/// Why a record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordIssue {
    /// The record had the wrong number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Fields required by the table.
        expected: usize,
        /// Fields present on the line.
        found: usize,
    },
    /// A numeric field could not be parsed.
    #[error("{field} {value:?} is not a number")]
    InvalidNumber {
        /// Name of the field.
        field: &'static str,
        /// Raw text of the field.
        value: String,
    },
    /// A numeric field parsed to NaN or infinity.
    #[error("{field} {value:?} is not finite")]
    NonFinite {
        /// Name of the field.
        field: &'static str,
        /// Raw text of the field.
        value: String,
    },
}
