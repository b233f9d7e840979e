//! Locations of the source tables.

use std::path::{Path, PathBuf};

/// Default directory holding the three tables.
const DEFAULT_DIR: &str = "datasets";

/// Paths to the line, station and route tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    /// `line,name,colour,stripe`
    pub lines: PathBuf,
    /// `id,latitude,longitude,name,display_name,zone,total_lines,rail`
    pub stations: PathBuf,
    /// `station1,station2,line`
    pub routes: PathBuf,
}

impl DatasetPaths {
    /// Expect `lines.csv`, `stations.csv` and `routes.csv` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            lines: dir.join("lines.csv"),
            stations: dir.join("stations.csv"),
            routes: dir.join("routes.csv"),
        }
    }

    /// Use a different line table.
    pub fn with_lines(mut self, path: impl Into<PathBuf>) -> Self {
        self.lines = path.into();
        self
    }

    /// Use a different station table.
    pub fn with_stations(mut self, path: impl Into<PathBuf>) -> Self {
        self.stations = path.into();
        self
    }

    /// Use a different route table.
    pub fn with_routes(mut self, path: impl Into<PathBuf>) -> Self {
        self.routes = path.into();
        self
    }
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DIR)
    }
}
