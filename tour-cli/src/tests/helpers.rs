//! Test helpers that lay out the three input tables in a temporary directory.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use tour_data::{DEFAULT_GRAPH_FILE, DEFAULT_INTEREST_FILE, DEFAULT_LOAD_FILE};

use crate::plan::PlanArgs;

pub(super) const SCENIC_INTEREST: &str = "Landmark PersonalInterest\nHotel 1.0\nA 1.0\nB 1.0\n";
pub(super) const SCENIC_LOAD: &str = "Landmark VisitorLoad\nHotel 0.0\nA 0.0\nB 0.0\n";
pub(super) const SCENIC_GRAPH: &str = "From To AttractivenessScore TravelTime\n\
                                       Hotel A 10 5\n\
                                       Hotel B 1 1\n\
                                       A B 8 2\n\
                                       B A 2 9\n\
                                       A Hotel 0 5\n\
                                       B Hotel 0 1\n";

/// Text output for the optimal scenic tour.
pub(super) const SCENIC_TOUR_TEXT: &str = "The visited landmarks:\n\
                                           1- Hotel\n\
                                           2- A\n\
                                           3- B\n\
                                           4- Hotel\n\
                                           \n\
                                           Total attractiveness score: 18.0\n\
                                           \n\
                                           Total travel time is: 8.0 minutes\n";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}

/// Temporary data directory holding the scenic tables under default names.
pub(super) struct TourTables {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl TourTables {
    pub(super) fn scenic() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let tables = Self { _dir: dir, root };
        tables.overwrite(DEFAULT_INTEREST_FILE, SCENIC_INTEREST);
        tables.overwrite(DEFAULT_LOAD_FILE, SCENIC_LOAD);
        tables.overwrite(DEFAULT_GRAPH_FILE, SCENIC_GRAPH);
        tables
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn overwrite(&self, name: &str, contents: &str) {
        write_utf8(&self.path(name), contents.as_bytes());
    }

    pub(super) fn remove(&self, name: &str) {
        std::fs::remove_file(self.path(name)).expect("remove test file");
    }

    /// Arguments pointing at this directory with the landmark count confirmed.
    pub(super) fn confirmed_args(&self) -> PlanArgs {
        PlanArgs {
            data_dir: Some(self.root.clone()),
            expected_landmarks: Some(3),
            ..PlanArgs::default()
        }
    }
}
