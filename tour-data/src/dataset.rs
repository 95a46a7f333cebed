//! The three tables that together describe a tour problem.

use camino::{Utf8Path, Utf8PathBuf};
use tour_core::{EdgeRecord, FactorTable};

use crate::error::TableError;
use crate::table::{read_edge_table, read_factor_table};

/// Default file name of the landmark map table.
pub const DEFAULT_GRAPH_FILE: &str = "landmark_map_data.txt";
/// Default file name of the personal interest table.
pub const DEFAULT_INTEREST_FILE: &str = "personal_interest.txt";
/// Default file name of the visitor load table.
pub const DEFAULT_LOAD_FILE: &str = "visitor_load.txt";

/// Locations of the three input tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// Landmark map (`from to score time`).
    pub graph: Utf8PathBuf,
    /// Personal interest (`name value`).
    pub interest: Utf8PathBuf,
    /// Visitor load (`name value`).
    pub load: Utf8PathBuf,
}

impl DatasetPaths {
    /// Default file names inside `dir`.
    ///
    /// # Examples
    /// ```
    /// use camino::Utf8Path;
    /// use tour_data::DatasetPaths;
    ///
    /// let paths = DatasetPaths::in_dir(Utf8Path::new("data"));
    /// assert_eq!(paths.graph.as_str(), "data/landmark_map_data.txt");
    /// ```
    pub fn in_dir(dir: &Utf8Path) -> Self {
        Self {
            graph: dir.join(DEFAULT_GRAPH_FILE),
            interest: dir.join(DEFAULT_INTEREST_FILE),
            load: dir.join(DEFAULT_LOAD_FILE),
        }
    }
}

/// Parsed contents of the three tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TourDataset {
    /// Raw edge records in file order.
    pub edges: Vec<EdgeRecord>,
    /// Personal interest per landmark.
    pub interest: FactorTable,
    /// Visitor load per landmark.
    pub load: FactorTable,
}

impl TourDataset {
    /// Read interest, then load, then the landmark map.
    ///
    /// # Errors
    /// Returns the first [`TableError`] raised by any table.
    pub fn load(paths: &DatasetPaths) -> Result<Self, TableError> {
        let interest = read_factor_table(&paths.interest)?;
        let load = read_factor_table(&paths.load)?;
        let edges = read_edge_table(&paths.graph)?;
        Ok(Self {
            edges,
            interest,
            load,
        })
    }
}
