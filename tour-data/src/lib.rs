//! Read landmark tour inputs from whitespace-separated tables.
//!
//! Three tables feed a tour: personal interest (`name value`), visitor load
//! (`name value`) and the landmark map (`from to score time`). Every table
//! starts with a header line that is skipped. Records that do not match the
//! expected shape are rejected with [`TableError::MalformedRecord`] rather
//! than coerced.

#![forbid(unsafe_code)]

mod dataset;
mod error;
pub mod fs;
mod table;

pub use dataset::{
    DEFAULT_GRAPH_FILE, DEFAULT_INTEREST_FILE, DEFAULT_LOAD_FILE, DatasetPaths, TourDataset,
};
pub use error::{RecordIssue, TableError};
pub use table::{parse_edge_table, parse_factor_table, read_edge_table, read_factor_table};
