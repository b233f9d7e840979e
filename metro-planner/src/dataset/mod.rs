//! CSV loader for the line, station and route tables.
//!
//! Each table is a headed CSV file. Rows are read with serde, converted to
//! network records, and handed to [`Network::build`].

mod config;
mod error;
mod records;

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::network::{Connection, LineId, Network, RailLine, Station, StationId};

pub use config::DatasetPaths;
pub use error::DatasetError;
use records::{LineRecord, RouteRecord, StationRecord};

/// The raw records of a network, before any graph is built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    lines: BTreeMap<LineId, RailLine>,
    stations: BTreeMap<StationId, Station>,
    connections: Vec<Connection>,
}

impl Dataset {
    /// Read all three tables from disk.
    pub fn load(paths: &DatasetPaths) -> Result<Self, DatasetError> {
        let dataset = Self::from_readers(
            open(&paths.lines)?,
            open(&paths.stations)?,
            open(&paths.routes)?,
        )?;
        debug!(
            lines = dataset.lines.len(),
            stations = dataset.stations.len(),
            connections = dataset.connections.len(),
            path = %paths.stations.display(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Read all three tables from arbitrary readers.
    pub fn from_readers(
        lines: impl io::Read,
        stations: impl io::Read,
        routes: impl io::Read,
    ) -> Result<Self, DatasetError> {
        let lines = read_table::<LineRecord>("lines", lines)?
            .into_iter()
            .map(|row| {
                let line = row.into_line();
                (line.id(), line)
            })
            .collect();
        let stations = read_table::<StationRecord>("stations", stations)?
            .into_iter()
            .map(|row| {
                let station = row.into_station();
                (station.id(), station)
            })
            .collect();
        let connections = read_table::<RouteRecord>("routes", routes)?
            .into_iter()
            .map(RouteRecord::into_connection)
            .collect();

        Ok(Self {
            lines,
            stations,
            connections,
        })
    }

    pub fn lines(&self) -> &BTreeMap<LineId, RailLine> {
        &self.lines
    }

    pub fn stations(&self) -> &BTreeMap<StationId, Station> {
        &self.stations
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Build the network graphs from these records.
    pub fn into_network(self) -> Result<Network, DatasetError> {
        Ok(Network::build(self.lines, self.stations, self.connections)?)
    }
}

fn open(path: &Path) -> Result<File, DatasetError> {
    File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_table<T: DeserializeOwned>(
    table: &'static str,
    reader: impl io::Read,
) -> Result<Vec<T>, DatasetError> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| DatasetError::Csv { table, source })
}
